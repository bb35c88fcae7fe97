//! cavegen - chunk-streamed cave terrain meshing
//!
//! This crate samples a deterministic 3D occupancy field into fixed-size
//! chunks around a moving viewer and converts each chunk's sample grid into
//! a renderable triangle mesh. Meshing is a data-driven cube-configuration
//! lookup over binarized samples (a blocky marching-cubes relative — no
//! field-magnitude interpolation), executed on a worker pool and merged
//! back on the main path.
//!
//! # Features
//!
//! - **Octahedral streaming**: the view volume is a diamond, O(R³) at an
//!   octahedron's volume rather than a full cube of chunks
//! - **Generated triangle table**: all 256 corner configurations derived
//!   from a 15-entry canonical basis via the cube's symmetry group
//! - **Non-blocking builds**: grids sample synchronously, triangulation
//!   runs on rayon and lands back through a single-consumer queue
//!
//! # Example
//!
//! ```ignore
//! use cavegen::{ChunkStreamer, TerrainSettings};
//!
//! let mut streamer = ChunkStreamer::new(TerrainSettings::default());
//!
//! // Host frame loop:
//! for coord in streamer.tick(viewer_position) {
//!     let chunk = streamer.chunk(coord).unwrap();
//!     let mesh = chunk.mesh().unwrap();
//!     // upload (mesh.vertices, mesh.indices, mesh.uvs) at chunk.origin()
//! }
//! ```

pub mod constants;
pub mod grid;
pub mod types;

// Re-export commonly used items
pub use grid::OccupancyGrid;
pub use types::{Aabb, MeshBuild, TerrainSettings};

// Occupancy field sampling
pub mod field;
pub use field::FieldSampler;

// Corner-configuration triangle table
pub mod tri_table;
pub use tri_table::{Triangle, TriangleTable};

// Isosurface extraction
pub mod extract;

// Background meshing worker
pub mod tasks;
pub use tasks::{MeshCompletion, MeshWorker};

// Chunk lifecycle
pub mod chunk;
pub use chunk::{BuildState, Chunk, VisibilityListener};

// Streaming manager
pub mod streamer;
pub use streamer::{chunk_coord_at, view_volume, ChunkStreamer, StreamerStats, VisibleSet};
