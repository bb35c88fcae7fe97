//! Chunk streaming: decides which chunks exist and which are visible as the
//! viewer moves.
//!
//! ```text
//! tick(viewer)
//!   │
//!   ├─ moved past threshold (or first call)?
//!   │    └─ re-enumerate the view volume:
//!   │         · prior visible chunks re-check their own distance first
//!   │         · diamond sweep creates missing chunks, re-checks the rest
//!   │
//!   ├─ per-chunk tick: one-shot grid build dispatch + gated re-check
//!   │
//!   └─ drain worker completions → store mesh buffers → report ready coords
//! ```
//!
//! # View volume
//!
//! The enumerated region is an octahedron, not a cube: the Y/Z half-extent
//! `j` grows from 0 at `x = −R` to `R` at `x = 0` and shrinks back to 0 at
//! `x = +R`. Enumerated coordinates number O(R³) at roughly an octahedron's
//! volume — for the same reach, far fewer chunks than a full cube.
//!
//! # Growth
//!
//! Chunks are never evicted. The map's ceiling is every coordinate any
//! enumeration ever touched — one diamond volume per threshold crossing
//! along the viewer's path. Long-running sessions with a roaming viewer
//! grow monotonically; acceptable for cave-scale worlds, so no eviction
//! machinery here.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use glam::{IVec3, Vec3};

use crate::chunk::{Chunk, VisibilityListener};
use crate::constants::{SEED_UNSET, SQR_VIEWER_MOVE_THRESHOLD};
use crate::field::FieldSampler;
use crate::tasks::MeshWorker;
use crate::types::TerrainSettings;

/// Chunk-lattice coordinate containing a world position, rounded per axis.
#[inline]
pub fn chunk_coord_at(position: Vec3, chunk_world_size: f32) -> IVec3 {
  IVec3::new(
    (position.x / chunk_world_size).round() as i32,
    (position.y / chunk_world_size).round() as i32,
    (position.z / chunk_world_size).round() as i32,
  )
}

/// Enumerate the octahedral view volume around `center`, in sweep order.
pub fn view_volume(center: IVec3, radius: i32) -> Vec<IVec3> {
  let mut coords = Vec::new();
  let mut j = 0;
  for x_off in -radius..=radius {
    for y_off in -j..=j {
      for z_off in -j..=j {
        coords.push(center + IVec3::new(x_off, y_off, z_off));
      }
    }
    if x_off < 0 {
      j += 1;
    } else {
      j -= 1;
    }
  }
  coords
}

/// Ordered list of currently-visible chunk coordinates.
///
/// Chunks report their visibility transitions here; the host reads the list
/// back for render batching.
#[derive(Default)]
pub struct VisibleSet {
  coords: Vec<IVec3>,
}

impl VisibleSet {
  pub fn coords(&self) -> &[IVec3] {
    &self.coords
  }

  pub fn contains(&self, coord: IVec3) -> bool {
    self.coords.contains(&coord)
  }

  pub fn len(&self) -> usize {
    self.coords.len()
  }

  pub fn is_empty(&self) -> bool {
    self.coords.is_empty()
  }
}

impl VisibilityListener for VisibleSet {
  fn visibility_changed(&mut self, coord: IVec3, visible: bool) {
    if visible {
      debug_assert!(!self.contains(coord));
      self.coords.push(coord);
    } else if let Some(index) = self.coords.iter().position(|&c| c == coord) {
      self.coords.remove(index);
    }
  }
}

/// Streaming counters.
#[derive(Clone, Copy, Debug, Default)]
pub struct StreamerStats {
  /// View-volume enumeration passes run.
  pub enumerations: u64,
  /// Chunks created over the session (never decremented; no eviction).
  pub chunks_created: u64,
  /// Mesh builds delivered to their chunks.
  pub meshes_applied: u64,
}

/// Owns every chunk, the field sampler and the mesh worker; the host calls
/// [`ChunkStreamer::tick`] once per frame with the viewer position.
pub struct ChunkStreamer {
  settings: TerrainSettings,
  sampler: FieldSampler,
  worker: MeshWorker,
  chunks: HashMap<IVec3, Chunk>,
  visible: VisibleSet,
  viewer_pos_old: Vec3,
  enumerated_once: bool,
  stats: StreamerStats,
}

impl ChunkStreamer {
  /// Validate settings, resolve the seed, and set up an empty world.
  ///
  /// The first [`tick`](Self::tick) enumerates immediately regardless of
  /// the movement threshold.
  pub fn new(mut settings: TerrainSettings) -> Self {
    settings.validate();
    if settings.seed == SEED_UNSET {
      settings.seed = fastrand::i32(1..10000);
      tracing::debug!(seed = settings.seed, "randomized terrain seed");
    }

    Self {
      sampler: FieldSampler::new(&settings),
      settings,
      worker: MeshWorker::new(),
      chunks: HashMap::new(),
      visible: VisibleSet::default(),
      viewer_pos_old: Vec3::ZERO,
      enumerated_once: false,
      stats: StreamerStats::default(),
    }
  }

  /// Per-frame entry point. Returns coordinates whose mesh buffers became
  /// ready this frame, for the host to upload.
  pub fn tick(&mut self, viewer_pos: Vec3) -> Vec<IVec3> {
    let moved_sq = (viewer_pos - self.viewer_pos_old).length_squared();
    if !self.enumerated_once || moved_sq > SQR_VIEWER_MOVE_THRESHOLD {
      self.enumerated_once = true;
      self.viewer_pos_old = viewer_pos;
      self.update_visible_chunks(viewer_pos);
    }

    for chunk in self.chunks.values_mut() {
      chunk.tick(viewer_pos, &self.sampler, &mut self.worker, &mut self.visible);
    }

    let mut ready = Vec::new();
    for completion in self.worker.drain() {
      if let Some(chunk) = self.chunks.get_mut(&completion.coord) {
        chunk.apply_mesh(completion.build);
        self.stats.meshes_applied += 1;
        ready.push(completion.coord);
      }
    }
    ready
  }

  /// Recompute the active chunk set around the viewer.
  fn update_visible_chunks(&mut self, viewer_pos: Vec3) {
    self.stats.enumerations += 1;
    let mut already_updated: HashSet<IVec3> = HashSet::new();

    // Previously visible chunks first; each one's own distance check
    // decides whether it drops out of the visible list.
    let prior: Vec<IVec3> = self.visible.coords().to_vec();
    for coord in prior.into_iter().rev() {
      already_updated.insert(coord);
      if let Some(chunk) = self.chunks.get_mut(&coord) {
        chunk.update_visibility(viewer_pos, &mut self.visible);
      }
    }

    let center = chunk_coord_at(viewer_pos, self.settings.chunk_world_size());
    for coord in view_volume(center, self.settings.view_radius) {
      if already_updated.contains(&coord) {
        continue;
      }
      match self.chunks.entry(coord) {
        Entry::Occupied(entry) => {
          entry.into_mut().update_visibility(viewer_pos, &mut self.visible);
        }
        Entry::Vacant(entry) => {
          let mut chunk = Chunk::new(coord, &self.settings);
          chunk.update_visibility(viewer_pos, &mut self.visible);
          entry.insert(chunk);
          self.stats.chunks_created += 1;
        }
      }
    }

    tracing::debug!(
      ?center,
      chunks = self.chunks.len(),
      visible = self.visible.len(),
      "view volume updated"
    );
  }

  /// Settings after validation and seed resolution.
  pub fn settings(&self) -> &TerrainSettings {
    &self.settings
  }

  pub fn stats(&self) -> StreamerStats {
    self.stats
  }

  /// Chunks resident in the coordinate map.
  pub fn chunk_count(&self) -> usize {
    self.chunks.len()
  }

  pub fn chunk(&self, coord: IVec3) -> Option<&Chunk> {
    self.chunks.get(&coord)
  }

  /// Currently-visible chunk coordinates, for render batching.
  pub fn visible_chunks(&self) -> &[IVec3] {
    self.visible.coords()
  }

  /// Mesh jobs dispatched over the session.
  pub fn mesh_jobs_dispatched(&self) -> u64 {
    self.worker.dispatched()
  }

  /// True when no mesh job is queued or in flight.
  pub fn is_meshing_idle(&self) -> bool {
    self.worker.is_idle()
  }
}

#[cfg(test)]
#[path = "streamer_test.rs"]
mod streamer_test;
