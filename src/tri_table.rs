//! Corner-configuration → triangle lookup table for blocky isosurface
//! extraction.
//!
//! # Cube Topology
//!
//! ```text
//!       4──────5         Corner mask bit order (bit value = 1 << bit):
//!      /│     /│           0=(0,1,0)  1=(1,1,0)  2=(0,0,0)  3=(1,0,0)
//!     0─┼────1 │           4=(0,1,1)  5=(1,1,1)  6=(0,0,1)  7=(1,0,1)
//!     │ 6────┼─7
//!     │/     │/          +Y
//!     2──────3            │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! Each of the 256 corner-occupancy masks maps to a fixed list of triangles
//! whose vertices sit on cell corners and edge midpoints only — components in
//! {0, 0.5, 1} cell units, stored here as exact half-unit integers {0, 1, 2}.
//! There is no interpolation by field magnitude; the surface is the blocky
//! kind, notched at edge midpoints.
//!
//! # Construction
//!
//! Rather than transcribing 256 hand-authored entries, the table is generated
//! from a 15-entry canonical basis: one representative per orbit of the mask
//! space under the cube's 24 rotations plus solid/empty complement. Closure
//! over the group fills every mask. Rotations act on vertices as exact
//! integer maps about the cell center and preserve winding; complementing a
//! mask swaps which side of the surface is solid, so it reverses winding.
//!
//! Winding is clockwise seen from the solid side, so back-face culling hides
//! faces buried in solid material.
//!
//! A mask left without an entry after closure would be an authoring defect in
//! the basis; [`TriangleTable::build`] treats that as fatal. It cannot be
//! ignored at runtime and is pinned down further by the property tests.

use std::collections::VecDeque;
use std::sync::LazyLock;

use smallvec::SmallVec;

use crate::constants::CORNER_OFFSETS;

/// One triangle vertex as half-unit offsets from the cell minimum corner
/// (each component 0, 1 or 2 half-units, i.e. 0.0, 0.5 or 1.0 cells).
pub type TableVertex = [u8; 3];

/// A triangle, wound clockwise when viewed from the solid side.
pub type Triangle = [TableVertex; 3];

/// Triangle list for one mask. Most masks emit at most four triangles.
type Entry = SmallVec<[Triangle; 4]>;

/// Canonical basis: one hand-authored entry per symmetry orbit.
///
/// The representative is the smallest mask in its orbit. Entry geometry
/// follows the corner bit order documented above.
#[rustfmt::skip]
const BASIS: &[(u8, &[Triangle])] = &[
  // all empty
  (0x00, &[]),
  // one solid corner
  (0x01, &[[[1, 2, 0], [0, 2, 1], [0, 1, 0]]]),
  // two solid corners sharing an edge
  (0x03, &[[[2, 2, 1], [0, 1, 0], [2, 1, 0]], [[2, 2, 1], [0, 2, 1], [0, 1, 0]]]),
  // two solid corners across a face diagonal
  (0x06, &[[[2, 2, 1], [1, 2, 0], [2, 1, 0]], [[0, 1, 0], [0, 0, 1], [1, 0, 0]],
           [[2, 1, 0], [0, 1, 0], [1, 0, 0]], [[2, 1, 0], [1, 2, 0], [0, 1, 0]]]),
  // three solid corners on one face
  (0x07, &[[[2, 2, 1], [0, 2, 1], [0, 0, 1]], [[2, 1, 0], [2, 2, 1], [1, 0, 0]],
           [[2, 2, 1], [0, 0, 1], [1, 0, 0]]]),
  // one solid face
  (0x0f, &[[[2, 2, 1], [0, 0, 1], [2, 0, 1]], [[2, 2, 1], [0, 2, 1], [0, 0, 1]]]),
  // face diagonal plus one corner behind it
  (0x16, &[[[0, 2, 1], [1, 2, 2], [0, 1, 2]], [[0, 1, 0], [0, 0, 1], [1, 0, 0]],
           [[2, 2, 1], [1, 2, 0], [2, 1, 0]], [[2, 1, 0], [0, 1, 0], [1, 0, 0]],
           [[2, 1, 0], [1, 2, 0], [0, 1, 0]], [[0, 2, 1], [0, 0, 1], [0, 1, 0]],
           [[0, 2, 1], [0, 1, 2], [0, 0, 1]]]),
  // face triple plus the far corner over its right angle
  (0x17, &[[[2, 2, 1], [0, 0, 1], [1, 0, 0]], [[2, 2, 1], [1, 2, 2], [0, 0, 1]],
           [[1, 0, 0], [2, 1, 0], [2, 2, 1]], [[0, 0, 1], [1, 2, 2], [0, 1, 2]]]),
  // two solid corners across the body diagonal
  (0x18, &[[[0, 2, 1], [1, 2, 2], [0, 1, 2]], [[2, 1, 0], [1, 0, 0], [2, 0, 1]]]),
  // edge pair plus an isolated corner
  (0x19, &[[[1, 2, 0], [0, 1, 2], [0, 1, 0]], [[1, 2, 0], [1, 2, 2], [0, 1, 2]],
           [[2, 1, 0], [1, 0, 0], [2, 0, 1]], [[1, 2, 0], [1, 0, 0], [2, 1, 0]],
           [[1, 2, 0], [0, 1, 0], [1, 0, 0]]]),
  // face triple plus the far corner over its hypotenuse end
  (0x1b, &[[[2, 2, 1], [0, 1, 0], [2, 0, 1]], [[2, 2, 1], [1, 2, 2], [0, 1, 0]],
           [[1, 2, 2], [0, 1, 2], [0, 1, 0]], [[2, 0, 1], [0, 1, 0], [1, 0, 0]]]),
  (0x1d, &[[[1, 2, 0], [0, 0, 1], [2, 0, 1]], [[1, 2, 0], [1, 2, 2], [0, 0, 1]],
           [[1, 2, 2], [0, 1, 2], [0, 0, 1]], [[2, 1, 0], [1, 2, 0], [2, 0, 1]]]),
  // solid face plus one corner behind it
  (0x1e, &[[[2, 2, 1], [0, 0, 1], [2, 0, 1]], [[2, 2, 1], [1, 2, 0], [0, 0, 1]],
           [[0, 2, 1], [1, 2, 2], [0, 1, 2]], [[1, 2, 0], [0, 1, 0], [0, 0, 1]]]),
  // two opposite edges (tunnel)
  (0x3c, &[[[0, 2, 1], [2, 1, 2], [0, 1, 2]], [[0, 2, 1], [2, 2, 1], [2, 1, 2]],
           [[2, 1, 0], [0, 0, 1], [2, 0, 1]], [[2, 1, 0], [0, 1, 0], [0, 0, 1]],
           [[2, 1, 2], [2, 1, 0], [2, 0, 1]], [[2, 1, 2], [2, 2, 1], [2, 1, 0]],
           [[0, 2, 1], [0, 0, 1], [0, 1, 0]], [[0, 2, 1], [0, 1, 2], [0, 0, 1]]]),
  // alternating tetrahedral corners (checkerboard)
  (0x69, &[[[0, 1, 2], [1, 0, 2], [0, 0, 1]], [[1, 2, 2], [2, 2, 1], [2, 1, 2]],
           [[2, 1, 0], [1, 0, 0], [2, 0, 1]], [[1, 2, 0], [0, 2, 1], [0, 1, 0]],
           [[2, 1, 2], [2, 1, 0], [2, 0, 1]], [[2, 1, 2], [2, 2, 1], [2, 1, 0]],
           [[1, 2, 0], [1, 0, 0], [2, 1, 0]], [[1, 2, 0], [0, 1, 0], [1, 0, 0]],
           [[2, 0, 1], [0, 0, 1], [1, 0, 2]], [[2, 0, 1], [1, 0, 0], [0, 0, 1]],
           [[0, 1, 0], [0, 1, 2], [0, 0, 1]], [[0, 1, 0], [0, 2, 1], [0, 1, 2]],
           [[1, 2, 2], [1, 0, 2], [0, 1, 2]], [[1, 2, 2], [2, 1, 2], [1, 0, 2]],
           [[0, 2, 1], [2, 2, 1], [1, 2, 2]], [[0, 2, 1], [1, 2, 0], [2, 2, 1]]]),
];

/// Integer rotation matrix acting on half-unit coordinates about the cell
/// center.
type Mat3 = [[i32; 3]; 3];

const IDENTITY: Mat3 = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];

/// Quarter turn about +X: (x, y, z) → (x, −z, y).
const ROT_X: Mat3 = [[1, 0, 0], [0, 0, -1], [0, 1, 0]];

/// Quarter turn about +Y: (x, y, z) → (z, y, −x).
const ROT_Y: Mat3 = [[0, 0, 1], [0, 1, 0], [-1, 0, 0]];

fn mat_mul(a: &Mat3, b: &Mat3) -> Mat3 {
  let mut out = [[0i32; 3]; 3];
  for (i, row) in out.iter_mut().enumerate() {
    for (j, cell) in row.iter_mut().enumerate() {
      *cell = (0..3).map(|k| a[i][k] * b[k][j]).sum();
    }
  }
  out
}

/// The cube's 24 proper rotations, generated from the two quarter turns.
fn rotations() -> Vec<Mat3> {
  let mut rots = vec![IDENTITY];
  let mut i = 0;
  while i < rots.len() {
    let m = rots[i];
    i += 1;
    for gen in [ROT_X, ROT_Y] {
      let product = mat_mul(&gen, &m);
      if !rots.contains(&product) {
        rots.push(product);
      }
    }
  }
  debug_assert_eq!(rots.len(), 24);
  rots
}

/// Rotate a half-unit vertex about the cell center (1, 1, 1).
fn rotate_vertex(m: &Mat3, v: TableVertex) -> TableVertex {
  let c = [v[0] as i32 - 1, v[1] as i32 - 1, v[2] as i32 - 1];
  let mut out = [0u8; 3];
  for (axis, slot) in out.iter_mut().enumerate() {
    let r = m[axis][0] * c[0] + m[axis][1] * c[1] + m[axis][2] * c[2];
    *slot = (r + 1) as u8;
  }
  out
}

fn rotate_triangles(m: &Mat3, tris: &[Triangle]) -> Entry {
  tris
    .iter()
    .map(|t| [rotate_vertex(m, t[0]), rotate_vertex(m, t[1]), rotate_vertex(m, t[2])])
    .collect()
}

/// Where each mask bit lands under a rotation: bit `i` maps to bit
/// `perm[i]` of the rotated mask.
fn corner_permutation(m: &Mat3) -> [usize; 8] {
  let corners: Vec<TableVertex> = CORNER_OFFSETS
    .iter()
    .map(|o| [(o[0] * 2) as u8, (o[1] * 2) as u8, (o[2] * 2) as u8])
    .collect();
  let mut perm = [0usize; 8];
  for (i, slot) in perm.iter_mut().enumerate() {
    let rotated = rotate_vertex(m, corners[i]);
    *slot = corners
      .iter()
      .position(|&c| c == rotated)
      .expect("rotation mapped a corner off the cube");
  }
  perm
}

fn permute_mask(mask: u8, perm: &[usize; 8]) -> u8 {
  let mut out = 0u8;
  for (i, &target) in perm.iter().enumerate() {
    if mask >> i & 1 != 0 {
      out |= 1 << target;
    }
  }
  out
}

/// Complementing a mask swaps solid and empty sides; geometry stays put but
/// winding flips.
fn reverse_winding(tris: &[Triangle]) -> Entry {
  tris.iter().map(|t| [t[2], t[1], t[0]]).collect()
}

/// The full 256-entry lookup table.
pub struct TriangleTable {
  entries: Vec<Entry>,
}

impl TriangleTable {
  /// Generate the table by closing the canonical basis under the rotation
  /// group and solid/empty complement.
  ///
  /// # Panics
  ///
  /// Panics if closure leaves any mask without an entry — a defect in the
  /// basis data, never a runtime condition.
  pub fn build() -> Self {
    let rots = rotations();
    let perms: Vec<[usize; 8]> = rots.iter().map(corner_permutation).collect();

    let mut entries: Vec<Option<Entry>> = vec![None; 256];
    let mut queue = VecDeque::new();

    for &(mask, tris) in BASIS {
      entries[mask as usize] = Some(tris.iter().copied().collect());
      queue.push_back(mask);
    }

    while let Some(mask) = queue.pop_front() {
      let tris = entries[mask as usize]
        .clone()
        .expect("queued mask has an entry");

      for (m, perm) in rots.iter().zip(&perms) {
        let rotated_mask = permute_mask(mask, perm);
        if entries[rotated_mask as usize].is_none() {
          entries[rotated_mask as usize] = Some(rotate_triangles(m, &tris));
          queue.push_back(rotated_mask);
        }
      }

      let complement = mask ^ 0xFF;
      if entries[complement as usize].is_none() {
        entries[complement as usize] = Some(reverse_winding(&tris));
        queue.push_back(complement);
      }
    }

    let entries: Vec<Entry> = entries
      .into_iter()
      .enumerate()
      .map(|(mask, entry)| match entry {
        Some(tris) => tris,
        None => {
          tracing::error!(mask, "corner configuration missing from triangle table basis");
          panic!("corner configuration {:#04x} missing from triangle table", mask);
        }
      })
      .collect();

    Self { entries }
  }

  /// Triangles for one corner configuration.
  #[inline]
  pub fn triangles(&self, mask: u8) -> &[Triangle] {
    &self.entries[mask as usize]
  }

  /// Total triangles across all 256 entries.
  pub fn total_triangle_count(&self) -> usize {
    self.entries.iter().map(|e| e.len()).sum()
  }
}

/// Process-wide table, generated on first use.
pub fn shared() -> &'static TriangleTable {
  static TABLE: LazyLock<TriangleTable> = LazyLock::new(TriangleTable::build);
  &TABLE
}

#[cfg(test)]
#[path = "tri_table_test.rs"]
mod tri_table_test;
