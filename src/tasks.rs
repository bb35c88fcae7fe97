//! Background meshing: rayon workers feeding a main-path completion queue.
//!
//! Dispatch → (worker pool) extract → Completions
//!
//! The main path hands a chunk's occupancy grid to [`MeshWorker::dispatch`]
//! and moves on; a worker thread runs the extractor and pushes the finished
//! buffers onto an unbounded channel. Only the main path drains the channel,
//! so mesh buffers are never touched from two threads: the grid moves into
//! the job, the build moves out through the queue.
//!
//! There is no cancellation. A job dispatched for a chunk that has since
//! gone hidden still completes and delivers; if the receiving side is gone
//! entirely the send just fails and the result is dropped.

use crossbeam_channel::{unbounded, Receiver, Sender};
use glam::IVec3;
use web_time::Instant;

use crate::extract;
use crate::grid::OccupancyGrid;
use crate::types::MeshBuild;

/// Finished mesh for one chunk, delivered on the main path.
pub struct MeshCompletion {
  /// Chunk coordinate the grid belonged to.
  pub coord: IVec3,
  /// Generated mesh buffers.
  pub build: MeshBuild,
  /// Raw extraction time in microseconds.
  pub mesh_time_us: u64,
}

/// Dispatches extraction jobs onto rayon's pool and collects completions.
pub struct MeshWorker {
  tx: Sender<MeshCompletion>,
  rx: Receiver<MeshCompletion>,
  dispatched: u64,
  drained: u64,
}

impl MeshWorker {
  pub fn new() -> Self {
    let (tx, rx) = unbounded();
    Self {
      tx,
      rx,
      dispatched: 0,
      drained: 0,
    }
  }

  /// Queue one grid for background triangulation (non-blocking).
  pub fn dispatch(&mut self, coord: IVec3, grid: OccupancyGrid) {
    self.dispatched += 1;
    let tx = self.tx.clone();

    rayon::spawn(move || {
      let start = Instant::now();
      let build = extract::extract(&grid);
      let mesh_time_us = start.elapsed().as_micros() as u64;
      tracing::trace!(?coord, mesh_time_us, triangles = build.triangle_count(), "mesh built");

      // Receiver gone means the streamer was dropped mid-flight; the
      // result is simply discarded.
      let _ = tx.send(MeshCompletion {
        coord,
        build,
        mesh_time_us,
      });
    });
  }

  /// Take every completion that has arrived so far (non-blocking).
  pub fn drain(&mut self) -> Vec<MeshCompletion> {
    let completions: Vec<MeshCompletion> = self.rx.try_iter().collect();
    self.drained += completions.len() as u64;
    completions
  }

  /// Jobs dispatched over this worker's lifetime.
  pub fn dispatched(&self) -> u64 {
    self.dispatched
  }

  /// Jobs dispatched but not yet drained.
  pub fn in_flight(&self) -> u64 {
    self.dispatched - self.drained - self.rx.len() as u64
  }

  /// True when every dispatched job has been drained.
  pub fn is_idle(&self) -> bool {
    self.dispatched == self.drained
  }
}

impl Default for MeshWorker {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;
