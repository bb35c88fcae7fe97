//! Core data types: mesh buffers, bounds, and terrain settings.

use glam::Vec3;

use crate::constants::{
  DEFAULT_CHUNK_SIZE, DEFAULT_SCALE, DEFAULT_VIEW_RADIUS, MAX_CHUNK_SIZE, MIN_CHUNK_SIZE,
  MIN_SCALE, SEED_UNSET,
};

/// Finished mesh buffers for one chunk.
///
/// Vertices are chunk-local positions; indices are sequential (no vertex
/// sharing across cells) and `uvs` runs parallel to `vertices`. Built once
/// on a worker thread and consumed exactly once on the main path.
#[derive(Clone, Debug, Default)]
pub struct MeshBuild {
  /// Vertex positions in chunk-local grid units.
  pub vertices: Vec<[f32; 3]>,

  /// Triangle indices (3 per triangle, strictly increasing).
  pub indices: Vec<u32>,

  /// Per-vertex texture coordinates.
  pub uvs: Vec<[f32; 2]>,
}

impl MeshBuild {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of whole triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// Buffer lockstep: every index names a vertex, every vertex has a uv,
  /// and the buffers hold whole triangles only.
  pub fn is_consistent(&self) -> bool {
    self.vertices.len() == self.indices.len()
      && self.uvs.len() == self.vertices.len()
      && self.indices.len() % 3 == 0
  }
}

/// Axis-aligned bounding box used for chunk visibility distance queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
  pub min: Vec3,
  pub max: Vec3,
}

impl Aabb {
  /// Create from min/max corners.
  pub fn new(min: Vec3, max: Vec3) -> Self {
    Self { min, max }
  }

  /// Create from a center point and total extents per axis.
  pub fn centered(center: Vec3, extents: Vec3) -> Self {
    let half = extents * 0.5;
    Self {
      min: center - half,
      max: center + half,
    }
  }

  /// Squared distance from a point to the box surface; zero inside.
  #[inline]
  pub fn distance_squared(&self, point: Vec3) -> f32 {
    let clamped = point.clamp(self.min, self.max);
    (point - clamped).length_squared()
  }
}

/// Terrain generation and streaming settings.
///
/// Mirrors the configuration surface the host hands over once at startup:
/// noise seed/scale/offset plus the chunk lattice dimensions. Values outside
/// the accepted ranges are clamped by [`TerrainSettings::validate`] rather
/// than rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainSettings {
  /// Noise seed. [`SEED_UNSET`] (−1) means "pick one at streamer
  /// construction".
  pub seed: i32,

  /// Noise scale; larger values stretch terrain features.
  pub scale: f32,

  /// World-space offset applied to every field sample.
  pub offset: Vec3,

  /// Samples per chunk axis before padding.
  pub chunk_size: i32,

  /// View-volume radius in chunks.
  pub view_radius: i32,
}

impl TerrainSettings {
  /// Clamp all fields into their accepted ranges.
  pub fn validate(&mut self) {
    self.scale = self.scale.max(MIN_SCALE);
    self.chunk_size = self.chunk_size.clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE);
    self.seed = self.seed.max(SEED_UNSET);
    self.view_radius = self.view_radius.max(0);
  }

  /// Padded sample-grid resolution for these settings.
  pub fn grid_size(&self) -> usize {
    crate::constants::padded_size(self.chunk_size)
  }

  /// World-space edge length of one chunk.
  pub fn chunk_world_size(&self) -> f32 {
    self.chunk_size as f32
  }
}

impl Default for TerrainSettings {
  fn default() -> Self {
    Self {
      seed: SEED_UNSET,
      scale: DEFAULT_SCALE,
      offset: Vec3::ZERO,
      chunk_size: DEFAULT_CHUNK_SIZE,
      view_radius: DEFAULT_VIEW_RADIUS,
    }
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
