//! # Chunk Dirty Index
//!
//! Partitions the world into fixed-size cuboid chunks and tracks, per
//! chunk, whether its rendered geometry is stale. The index never
//! rebuilds anything itself: flags are set monotonically by mutation
//! notifications and cleared only by the external renderer once it has
//! rebuilt that chunk.
//!
//! A mutated cell can affect the geometry of an adjacent chunk (a face
//! on the boundary becomes visible or hidden), so every notification
//! conservatively invalidates the six axis-adjacent neighbours as well.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::WorldConfig;

/// Per-chunk dirty flags over the whole grid.
#[derive(Debug)]
pub struct ChunkIndex {
    chunk_diameter: i32,
    chunks_x: usize,
    chunks_y: usize,
    chunks_z: usize,
    dirty: Vec<AtomicBool>,
}

impl ChunkIndex {
    /// Creates a clean index covering the configured grid.
    #[must_use]
    pub fn new(config: &WorldConfig) -> Self {
        let (chunks_x, chunks_y, chunks_z) = config.chunk_counts();
        let mut dirty = Vec::with_capacity(chunks_x * chunks_y * chunks_z);
        dirty.resize_with(chunks_x * chunks_y * chunks_z, || AtomicBool::new(false));
        Self {
            chunk_diameter: config.chunk_diameter as i32,
            chunks_x,
            chunks_y,
            chunks_z,
            dirty,
        }
    }

    /// Chunk counts along (x, y, z).
    #[inline]
    #[must_use]
    pub const fn chunk_counts(&self) -> (usize, usize, usize) {
        (self.chunks_x, self.chunks_y, self.chunks_z)
    }

    /// Chunk edge length, in blocks.
    #[inline]
    #[must_use]
    pub const fn chunk_diameter(&self) -> i32 {
        self.chunk_diameter
    }

    #[inline]
    fn flag_index(&self, cx: i32, cy: i32, cz: i32) -> Option<usize> {
        if cx < 0 || cy < 0 || cz < 0 {
            return None;
        }
        let (cx, cy, cz) = (cx as usize, cy as usize, cz as usize);
        if cx >= self.chunks_x || cy >= self.chunks_y || cz >= self.chunks_z {
            return None;
        }
        Some((cx * self.chunks_y + cy) * self.chunks_z + cz)
    }

    /// Marks one chunk dirty, silently skipping out-of-range coordinates.
    #[inline]
    fn mark(&self, cx: i32, cy: i32, cz: i32) {
        if let Some(index) = self.flag_index(cx, cy, cz) {
            self.dirty[index].store(true, Ordering::Release);
        }
    }

    /// Records that the cell at world coordinates (x, y, z) changed.
    ///
    /// Marks the owning chunk dirty, plus its six axis-adjacent
    /// neighbours; neighbours outside chunk space are skipped.
    pub fn notify_mutated(&self, x: i32, y: i32, z: i32) {
        if x < 0 || y < 0 || z < 0 {
            return;
        }
        let cx = x / self.chunk_diameter;
        let cy = y / self.chunk_diameter;
        let cz = z / self.chunk_diameter;

        self.mark(cx, cy, cz);
        self.mark(cx - 1, cy, cz);
        self.mark(cx + 1, cy, cz);
        self.mark(cx, cy - 1, cz);
        self.mark(cx, cy + 1, cz);
        self.mark(cx, cy, cz - 1);
        self.mark(cx, cy, cz + 1);
    }

    /// Marks every chunk dirty. Used once after wholesale population so
    /// the renderer performs its initial build of the entire world.
    pub fn mark_all_dirty(&self) {
        for flag in &self.dirty {
            flag.store(true, Ordering::Release);
        }
    }

    /// Whether the chunk at chunk coordinates (cx, cy, cz) needs a
    /// rebuild. Out-of-range coordinates read as clean.
    #[inline]
    #[must_use]
    pub fn is_dirty(&self, cx: i32, cy: i32, cz: i32) -> bool {
        self.flag_index(cx, cy, cz)
            .is_some_and(|index| self.dirty[index].load(Ordering::Acquire))
    }

    /// Clears one chunk's dirty flag.
    ///
    /// Renderer contract: call only after the chunk's geometry has been
    /// rebuilt from the grid. Nothing inside this crate clears flags.
    #[inline]
    pub fn clear(&self, cx: i32, cy: i32, cz: i32) {
        if let Some(index) = self.flag_index(cx, cy, cz) {
            self.dirty[index].store(false, Ordering::Release);
        }
    }

    /// Number of chunks currently flagged dirty.
    #[must_use]
    pub fn dirty_count(&self) -> usize {
        self.dirty
            .iter()
            .filter(|flag| flag.load(Ordering::Acquire))
            .count()
    }
}
