//! Benchmarks for triangle-table construction and grid extraction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;

use cavegen::extract::extract;
use cavegen::tri_table::TriangleTable;
use cavegen::{FieldSampler, OccupancyGrid, TerrainSettings};

/// Sphere occupancy grid: solid inside the radius.
fn sphere_grid(size: usize, radius: f32) -> OccupancyGrid {
  let mut grid = OccupancyGrid::new(size);
  let center = size as f32 / 2.0;
  for x in 0..size {
    for y in 0..size {
      for z in 0..size {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let dz = z as f32 - center;
        grid.set(x, y, z, (dx * dx + dy * dy + dz * dz).sqrt() < radius);
      }
    }
  }
  grid
}

fn bench_table_build(c: &mut Criterion) {
  c.bench_function("tri_table::build (256 masks)", |b| {
    b.iter(|| black_box(TriangleTable::build()));
  });
}

fn bench_extract_sphere(c: &mut Criterion) {
  let grid = sphere_grid(22, 8.0);

  c.bench_function("extract (22³ sphere)", |b| {
    b.iter(|| black_box(extract(&grid)));
  });
}

fn bench_extract_noise(c: &mut Criterion) {
  let settings = TerrainSettings {
    seed: 42,
    ..TerrainSettings::default()
  };
  let sampler = FieldSampler::new(&settings);
  let grid = sampler.fill_grid(Vec3::ZERO, settings.grid_size());

  c.bench_function("extract (22³ noise field)", |b| {
    b.iter(|| black_box(extract(&grid)));
  });
}

fn bench_grid_sampling(c: &mut Criterion) {
  let settings = TerrainSettings {
    seed: 42,
    ..TerrainSettings::default()
  };
  let sampler = FieldSampler::new(&settings);

  c.bench_function("field::fill_grid (22³)", |b| {
    b.iter(|| black_box(sampler.fill_grid(Vec3::ZERO, settings.grid_size())));
  });
}

criterion_group!(
  benches,
  bench_table_build,
  bench_extract_sphere,
  bench_extract_noise,
  bench_grid_sampling
);
criterion_main!(benches);
