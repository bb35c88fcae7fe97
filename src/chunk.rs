//! One streamed terrain chunk: sample grid, derived mesh, visibility.
//!
//! Build flow per chunk:
//!
//! ```text
//! GridPending ──tick()──► Meshing ──apply_mesh()──► Ready
//!   (grid sampled synchronously,     (buffers stored once,
//!    extraction dispatched to         main path only)
//!    the worker pool)
//! ```
//!
//! Visibility is orthogonal to the build state and driven purely by the
//! viewer's distance to the chunk bounds — a chunk can go hidden while its
//! mesh is still in flight; the finished buffers are stored anyway. Chunks
//! are built exactly once and never rebuilt or destroyed.

use glam::{IVec3, Vec3};

use crate::constants::{SQR_VIEWER_MOVE_THRESHOLD, VISIBLE_DISTANCE_FACTOR};
use crate::field::FieldSampler;
use crate::tasks::MeshWorker;
use crate::types::{Aabb, MeshBuild, TerrainSettings};

/// Receiver for chunk visibility transitions.
///
/// The streaming manager implements this; a chunk calls it only on an
/// actual transition, never on a re-check that lands on the same state.
pub trait VisibilityListener {
  fn visibility_changed(&mut self, coord: IVec3, visible: bool);
}

/// Mesh build progress. Orthogonal to visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildState {
  /// Created; grid not yet sampled.
  GridPending,
  /// Grid sampled, extraction running on the worker pool.
  Meshing,
  /// Mesh buffers stored and ready for upload.
  Ready,
}

/// A fixed cube of world space with its own sample grid and mesh.
pub struct Chunk {
  coord: IVec3,
  origin: Vec3,
  grid_size: usize,
  bounds: Aabb,
  state: BuildState,
  needs_build: bool,
  visible: bool,
  mesh: Option<MeshBuild>,
  viewer_pos_old: Vec3,
}

impl Chunk {
  /// Place a chunk at `coord` on the chunk lattice.
  pub fn new(coord: IVec3, settings: &TerrainSettings) -> Self {
    let origin = coord.as_vec3() * settings.chunk_world_size();
    let grid_size = settings.grid_size();
    Self {
      coord,
      origin,
      grid_size,
      bounds: Aabb::centered(origin, Vec3::splat(grid_size as f32)),
      state: BuildState::GridPending,
      needs_build: true,
      visible: false,
      mesh: None,
      viewer_pos_old: Vec3::ZERO,
    }
  }

  /// Per-frame entry point.
  ///
  /// On the first call this samples the full grid synchronously and hands
  /// it to the worker pool — once, gated by a one-shot flag. Afterwards it
  /// re-evaluates visibility whenever the viewer has moved past the
  /// movement threshold since this chunk last checked.
  pub fn tick(
    &mut self,
    viewer_pos: Vec3,
    sampler: &FieldSampler,
    worker: &mut MeshWorker,
    listener: &mut dyn VisibilityListener,
  ) {
    if self.needs_build {
      self.needs_build = false;
      let grid = sampler.fill_grid(self.origin, self.grid_size);
      worker.dispatch(self.coord, grid);
      self.state = BuildState::Meshing;
      tracing::debug!(coord = ?self.coord, "chunk grid sampled, extraction dispatched");
    }

    if (viewer_pos - self.viewer_pos_old).length_squared() > SQR_VIEWER_MOVE_THRESHOLD {
      self.viewer_pos_old = viewer_pos;
      self.update_visibility(viewer_pos, listener);
    }
  }

  /// Store the finished mesh buffers. Main path only; fires once per chunk.
  pub fn apply_mesh(&mut self, build: MeshBuild) {
    debug_assert_eq!(self.state, BuildState::Meshing);
    debug_assert!(build.is_consistent());
    self.mesh = Some(build);
    self.state = BuildState::Ready;
  }

  /// Re-evaluate visibility against the viewer position and notify the
  /// listener on a transition.
  ///
  /// The boundary is inclusive: a chunk whose bounds sit exactly at the
  /// visibility distance stays visible.
  pub fn update_visibility(&mut self, viewer_pos: Vec3, listener: &mut dyn VisibilityListener) {
    let dist_sq = self.bounds.distance_squared(viewer_pos);
    let limit = (VISIBLE_DISTANCE_FACTOR as usize * self.grid_size) as f32;
    let visible = dist_sq <= limit * limit;

    if visible != self.visible {
      self.visible = visible;
      listener.visibility_changed(self.coord, visible);
    }
  }

  pub fn coord(&self) -> IVec3 {
    self.coord
  }

  /// World-space placement (`coord × chunk world size`).
  pub fn origin(&self) -> Vec3 {
    self.origin
  }

  pub fn bounds(&self) -> Aabb {
    self.bounds
  }

  pub fn state(&self) -> BuildState {
    self.state
  }

  pub fn is_visible(&self) -> bool {
    self.visible
  }

  /// Finished mesh buffers, once [`BuildState::Ready`].
  pub fn mesh(&self) -> Option<&MeshBuild> {
    self.mesh.as_ref()
  }
}

#[cfg(test)]
#[path = "chunk_test.rs"]
mod chunk_test;
