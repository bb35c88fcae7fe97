use std::collections::HashMap;

use super::*;

#[test]
fn table_builds_and_covers_every_mask() {
  let table = TriangleTable::build();
  for mask in 0..=255u8 {
    // Every entry must be reachable; lengths are whole triangles by type.
    let _ = table.triangles(mask);
  }
}

#[test]
fn homogeneous_masks_emit_nothing() {
  let table = shared();
  assert!(table.triangles(0x00).is_empty());
  assert!(table.triangles(0xFF).is_empty());
}

#[test]
fn single_corner_masks_emit_one_cap_triangle() {
  let table = shared();
  for corner in 0..8 {
    let solid = 1u8 << corner;
    assert_eq!(table.triangles(solid).len(), 1, "corner {}", corner);
    assert_eq!(table.triangles(!solid).len(), 1, "corner {} complement", corner);
  }
}

#[test]
fn total_triangle_count_is_stable() {
  // Orbit sizes × basis entry sizes; any drift means the basis or the
  // closure changed shape.
  assert_eq!(shared().total_triangle_count(), 988);
}

#[test]
fn all_vertices_stay_on_the_cell() {
  let table = shared();
  for mask in 0..=255u8 {
    for tri in table.triangles(mask) {
      for v in tri {
        assert!(v.iter().all(|&c| c <= 2), "mask {:#04x} vertex {:?}", mask, v);
      }
    }
  }
}

#[test]
fn triangles_are_never_degenerate() {
  let table = shared();
  for mask in 0..=255u8 {
    for tri in table.triangles(mask) {
      assert_ne!(tri[0], tri[1], "mask {:#04x}", mask);
      assert_ne!(tri[1], tri[2], "mask {:#04x}", mask);
      assert_ne!(tri[2], tri[0], "mask {:#04x}", mask);
    }
  }
}

#[test]
fn triangle_counts_respect_cube_symmetry() {
  // A rotated or complemented mask describes the same local shape, so its
  // entry must triangulate with the same number of triangles.
  let table = shared();
  let rots = rotations();
  assert_eq!(rots.len(), 24);

  for mask in 0..=255u8 {
    let count = table.triangles(mask).len();
    for m in &rots {
      let perm = corner_permutation(m);
      let rotated = permute_mask(mask, &perm);
      assert_eq!(
        table.triangles(rotated).len(),
        count,
        "mask {:#04x} vs rotation {:#04x}",
        mask,
        rotated
      );
    }
    assert_eq!(
      table.triangles(mask ^ 0xFF).len(),
      count,
      "mask {:#04x} vs complement",
      mask
    );
  }
}

#[test]
fn rotation_group_closes_over_the_corners() {
  // Each rotation must permute the 8 corners; distinct rotations must give
  // distinct permutations.
  let rots = rotations();
  let mut seen = Vec::new();
  for m in &rots {
    let perm = corner_permutation(m);
    let mut sorted = perm;
    sorted.sort_unstable();
    assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7]);
    assert!(!seen.contains(&perm), "duplicate corner permutation");
    seen.push(perm);
  }
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
  [
    a[1] * b[2] - a[2] * b[1],
    a[2] * b[0] - a[0] * b[2],
    a[0] * b[1] - a[1] * b[0],
  ]
}

fn triangle_normal(tri: &Triangle) -> [f32; 3] {
  let p: Vec<[f32; 3]> = tri
    .iter()
    .map(|v| [v[0] as f32 / 2.0, v[1] as f32 / 2.0, v[2] as f32 / 2.0])
    .collect();
  let e1 = [p[1][0] - p[0][0], p[1][1] - p[0][1], p[1][2] - p[0][2]];
  let e2 = [p[2][0] - p[0][0], p[2][1] - p[0][1], p[2][2] - p[0][2]];
  cross(e1, e2)
}

#[test]
fn cap_triangles_face_away_from_their_solid_corner() {
  // For a lone solid corner the winding is exactly decidable: the
  // right-hand-rule normal must point away from the corner, i.e. the
  // triangle reads clockwise from the solid side.
  let table = shared();
  for corner in 0..8 {
    let mask = 1u8 << corner;
    let solid = CORNER_OFFSETS[corner];
    let tri = &table.triangles(mask)[0];
    let n = triangle_normal(tri);
    let centroid: Vec<f32> = (0..3)
      .map(|a| tri.iter().map(|v| v[a] as f32 / 2.0).sum::<f32>() / 3.0)
      .collect();
    let toward_solid = [
      solid[0] as f32 - centroid[0],
      solid[1] as f32 - centroid[1],
      solid[2] as f32 - centroid[2],
    ];
    let dot: f32 = (0..3).map(|a| n[a] * toward_solid[a]).sum();
    assert!(dot < 0.0, "corner {} cap faces its own solid corner", corner);
  }
}

#[test]
fn lone_empty_corner_caps_face_toward_the_gap() {
  let table = shared();
  for corner in 0..8 {
    let mask = !(1u8 << corner);
    let empty = CORNER_OFFSETS[corner];
    let tri = &table.triangles(mask)[0];
    let n = triangle_normal(tri);
    let centroid: Vec<f32> = (0..3)
      .map(|a| tri.iter().map(|v| v[a] as f32 / 2.0).sum::<f32>() / 3.0)
      .collect();
    let toward_empty = [
      empty[0] as f32 - centroid[0],
      empty[1] as f32 - centroid[1],
      empty[2] as f32 - centroid[2],
    ];
    let dot: f32 = (0..3).map(|a| n[a] * toward_empty[a]).sum();
    assert!(dot > 0.0, "corner {} cap faces into the solid", corner);
  }
}

#[test]
fn every_entry_is_orientation_consistent() {
  // Within one cell the emitted surface must be consistently wound: every
  // directed edge not lying on a cell face is paired with its reverse.
  // Face-lying edges are the surface's open boundary toward neighbors.
  let table = shared();
  for mask in 0..=255u8 {
    let mut edges: HashMap<(TableVertex, TableVertex), i32> = HashMap::new();
    for tri in table.triangles(mask) {
      for k in 0..3 {
        *edges.entry((tri[k], tri[(k + 1) % 3])).or_default() += 1;
      }
    }
    for (&(a, b), &count) in &edges {
      let on_face = (0..3).any(|axis| a[axis] == b[axis] && (a[axis] == 0 || a[axis] == 2));
      if on_face {
        continue;
      }
      let reverse = edges.get(&(b, a)).copied().unwrap_or(0);
      assert_eq!(
        count, reverse,
        "mask {:#04x}: interior edge {:?}→{:?} unmatched",
        mask, a, b
      );
    }
  }
}

#[test]
fn shared_table_is_the_same_instance() {
  let a = shared() as *const TriangleTable;
  let b = shared() as *const TriangleTable;
  assert_eq!(a, b);
}
