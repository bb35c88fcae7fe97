//! Layout and streaming constants for cave terrain chunks.
//!
//! # Sample Grid Layout
//!
//! Each chunk samples an `N×N×N` occupancy grid where `N = chunk_size + 2`.
//! The extra sample on each side supplies corner data for the outermost
//! interior cells, so triangulation never needs a bounds check or a neighbor
//! chunk:
//!
//! ```text
//!  Sample index:   0     1     2    ...   N-2   N-1
//!                  │     │                 │     │
//!                  └─────┴── cell origins ─┘     │
//!                        (indices 0 .. N-2)      └─ corner data only
//!
//!  Cells at index N-1 on any axis are skipped; a cell at (x, y, z) reads
//!  the 8 samples (x..x+1, y..y+1, z..z+1).
//! ```
//!
//! Because only the interior `(N-1)³` cell lattice is triangulated, a chunk's
//! mesh does not reach its coordinate's full nominal extent and adjacent
//! chunk meshes are not stitched at shared boundaries.
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          └───────── +X
//!         /
//!        +Z
//!
//! Cell corner bit order (bit value = 1 << bit):
//!   bit 0 = (0,1,0)    bit 4 = (0,1,1)
//!   bit 1 = (1,1,0)    bit 5 = (1,1,1)
//!   bit 2 = (0,0,0)    bit 6 = (0,0,1)
//!   bit 3 = (1,0,0)    bit 7 = (1,0,1)
//! ```

/// Padding samples added to the configured chunk size on each grid axis
/// (one sample per side).
pub const GRID_PADDING: usize = 2;

/// Smallest accepted chunk size (samples per axis before padding).
pub const MIN_CHUNK_SIZE: i32 = 1;

/// Largest accepted chunk size.
pub const MAX_CHUNK_SIZE: i32 = 32;

/// Default chunk size.
pub const DEFAULT_CHUNK_SIZE: i32 = 20;

/// Default noise scale (field-space units per world unit divisor).
pub const DEFAULT_SCALE: f32 = 20.0;

/// Smallest accepted noise scale.
pub const MIN_SCALE: f32 = 0.01;

/// Default view radius in chunks along the widest axis of the view volume.
pub const DEFAULT_VIEW_RADIUS: i32 = 2;

/// Seed sentinel meaning "randomize at streamer construction".
pub const SEED_UNSET: i32 = -1;

/// A chunk is visible while its bounds lie within this multiple of the
/// padded grid size from the viewer.
pub const VISIBLE_DISTANCE_FACTOR: i32 = 6;

/// Viewer displacement (world units) that triggers a visibility/streaming
/// re-evaluation.
pub const VIEWER_MOVE_THRESHOLD: f32 = 10.0;

/// Squared form of [`VIEWER_MOVE_THRESHOLD`], for squared-distance compares.
pub const SQR_VIEWER_MOVE_THRESHOLD: f32 = VIEWER_MOVE_THRESHOLD * VIEWER_MOVE_THRESHOLD;

/// Cell corner offsets in the fixed mask bit order.
///
/// Bit `i` of a corner configuration mask corresponds to the sample at
/// `cell + CORNER_OFFSETS[i]`.
pub const CORNER_OFFSETS: [[usize; 3]; 8] = [
  [0, 1, 0], // bit 0
  [1, 1, 0], // bit 1
  [0, 0, 0], // bit 2
  [1, 0, 0], // bit 3
  [0, 1, 1], // bit 4
  [1, 1, 1], // bit 5
  [0, 0, 1], // bit 6
  [1, 0, 1], // bit 7
];

/// UV triple for even-numbered triangles within a cell.
pub const UV_EVEN: [[f32; 2]; 3] = [[0.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

/// UV triple for odd-numbered triangles within a cell (shares the diagonal
/// edge of the preceding even triangle).
pub const UV_ODD: [[f32; 2]; 3] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];

/// Padded samples per axis for a configured chunk size.
#[inline(always)]
pub const fn padded_size(chunk_size: i32) -> usize {
  chunk_size as usize + GRID_PADDING
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
