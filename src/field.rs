//! Deterministic scalar occupancy field backed by OpenSimplex noise.

use glam::Vec3;
use noise::{NoiseFn, OpenSimplex};

use crate::grid::OccupancyGrid;
use crate::types::TerrainSettings;

/// Stateless occupancy sampler.
///
/// A point is solid where the noise value at `(point + offset) / scale`
/// exceeds zero. Construction fixes seed, scale and offset; after that the
/// sampler is immutable and safe to share across worker threads.
#[derive(Clone)]
pub struct FieldSampler {
  noise: OpenSimplex,
  scale: f64,
  offset: Vec3,
}

impl FieldSampler {
  /// Build a sampler from validated settings.
  ///
  /// Expects a resolved seed — the streamer replaces the "unset" sentinel
  /// before constructing its sampler.
  pub fn new(settings: &TerrainSettings) -> Self {
    Self {
      noise: OpenSimplex::new(settings.seed as u32),
      scale: settings.scale.max(crate::constants::MIN_SCALE) as f64,
      offset: settings.offset,
    }
  }

  /// Occupancy at a world-space point.
  #[inline]
  pub fn sample(&self, point: Vec3) -> bool {
    let p = point + self.offset;
    let value = self.noise.get([
      p.x as f64 / self.scale,
      p.y as f64 / self.scale,
      p.z as f64 / self.scale,
    ]);
    value > 0.0
  }

  /// Sample a full padded grid centered on `center`.
  ///
  /// Grid index `i` maps to field space as `i - size/2 + center`, so the
  /// grid straddles the chunk center symmetrically (including the padding
  /// samples).
  pub fn fill_grid(&self, center: Vec3, size: usize) -> OccupancyGrid {
    let half = size as f32 / 2.0;
    let mut grid = OccupancyGrid::new(size);
    for x in 0..size {
      for y in 0..size {
        for z in 0..size {
          let point = Vec3::new(
            x as f32 - half + center.x,
            y as f32 - half + center.y,
            z as f32 - half + center.z,
          );
          grid.set(x, y, z, self.sample(point));
        }
      }
    }
    grid
  }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
