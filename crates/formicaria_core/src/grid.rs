//! # Block Grid
//!
//! Dense 3D storage of [`Block`] values over world coordinates, plus the
//! single validated mutation entry point for the whole simulation.
//!
//! ## Storage & concurrency
//!
//! Cells are sharded per chunk: each chunk's slab of blocks sits behind
//! its own `parking_lot::RwLock`. Agents reading and digging in
//! different chunks never contend; two writers racing on one cell are
//! serialized by the owning shard's lock and the last committed write
//! wins. There is no whole-grid lock anywhere.
//!
//! Dirty propagation is ordered after the cell write: `set` commits the
//! cell under the shard's write lock, releases it, then flags the chunk
//! index (`Release` stores). A renderer that observes a dirty flag
//! (`Acquire`) and then locks the shard is guaranteed to see the
//! committed cell.
//!
//! ## Bounds discipline
//!
//! Reads are total: any out-of-range coordinate is empty space, because
//! agents probe past the world edge every tick and that must not branch
//! into error handling. Writes are validated and rejected with
//! [`WorldError::OutOfBounds`], leaving the grid untouched.

use parking_lot::RwLock;

use crate::block::Block;
use crate::chunk_index::ChunkIndex;
use crate::config::WorldConfig;
use crate::error::{WorldError, WorldResult};

/// Dense, chunk-sharded block storage over world coordinates.
///
/// Allocated once at world start; every coordinate with
/// `x in [0, width)`, `y in [0, height)`, `z in [0, depth)` holds exactly
/// one block, and all other coordinates are conceptually Air.
#[derive(Debug)]
pub struct BlockGrid {
    width: i32,
    height: i32,
    depth: i32,
    chunk_diameter: i32,
    chunks_y: usize,
    chunks_z: usize,
    /// One slab of `chunk_diameter^3` cells per chunk.
    shards: Vec<RwLock<Box<[Block]>>>,
    chunks: ChunkIndex,
}

impl BlockGrid {
    /// Creates an all-Air grid with the configured extents.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidConfig`] if the configured shape is
    /// undefined.
    pub fn new(config: &WorldConfig) -> WorldResult<Self> {
        config.validate()?;
        let (chunks_x, chunks_y, chunks_z) = config.chunk_counts();
        let chunk_volume = (config.chunk_diameter as usize).pow(3);
        let mut shards = Vec::with_capacity(chunks_x * chunks_y * chunks_z);
        shards.resize_with(chunks_x * chunks_y * chunks_z, || {
            RwLock::new(vec![Block::Air; chunk_volume].into_boxed_slice())
        });
        Ok(Self {
            width: config.width(),
            height: config.height(),
            depth: config.depth(),
            chunk_diameter: config.chunk_diameter as i32,
            chunks_y,
            chunks_z,
            shards,
            chunks: ChunkIndex::new(config),
        })
    }

    /// Populates a grid wholesale from a generation buffer, bypassing
    /// per-cell dirty propagation; every chunk is marked dirty once so
    /// the renderer performs its initial build.
    ///
    /// `cells` is the dense x-major ordering
    /// `cells[(x * height + y) * depth + z]`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidConfig`] for an undefined shape, or
    /// [`WorldError::GridSizeMismatch`] if the buffer does not hold
    /// exactly one block per cell.
    pub fn from_cells(config: &WorldConfig, cells: Vec<Block>) -> WorldResult<Self> {
        let mut grid = Self::new(config)?;
        if cells.len() != config.cell_count() {
            return Err(WorldError::GridSizeMismatch {
                expected: config.cell_count(),
                actual: cells.len(),
            });
        }

        let (height, depth) = (grid.height, grid.depth);
        for x in 0..grid.width {
            for y in 0..height {
                for z in 0..depth {
                    let source = ((x * height + y) * depth + z) as usize;
                    let (shard, cell) = grid.cell_address(x, y, z);
                    grid.shards[shard].get_mut()[cell] = cells[source];
                }
            }
        }

        grid.chunks.mark_all_dirty();
        Ok(grid)
    }

    /// Grid width in blocks.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in blocks.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Grid depth in blocks.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> i32 {
        self.depth
    }

    /// The per-chunk dirty index, polled by the external renderer.
    #[inline]
    #[must_use]
    pub const fn chunks(&self) -> &ChunkIndex {
        &self.chunks
    }

    /// Whether (x, y, z) lies inside the grid.
    ///
    /// Pure predicate; agents use it to pre-validate semantically
    /// meaningful actions (consuming a resource, digging) before
    /// attempting them.
    #[inline]
    #[must_use]
    pub const fn is_valid_position(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height && z >= 0 && z < self.depth
    }

    /// Shard index and cell index within the shard for an in-bounds
    /// world coordinate.
    #[inline]
    fn cell_address(&self, x: i32, y: i32, z: i32) -> (usize, usize) {
        let cd = self.chunk_diameter;
        let shard = ((x / cd) as usize * self.chunks_y + (y / cd) as usize) * self.chunks_z
            + (z / cd) as usize;
        let cell = (((x % cd) * cd + (y % cd)) * cd + (z % cd)) as usize;
        (shard, cell)
    }

    /// Returns the block at world coordinates (x, y, z).
    ///
    /// Total: out-of-range coordinates read as [`Block::Air`]. Agents
    /// probe neighbouring cells at the world edge every tick, so empty
    /// space is the correct degradation, not an error.
    #[inline]
    #[must_use]
    pub fn get(&self, x: i32, y: i32, z: i32) -> Block {
        if !self.is_valid_position(x, y, z) {
            return Block::Air;
        }
        let (shard, cell) = self.cell_address(x, y, z);
        self.shards[shard].read()[cell]
    }

    /// Overwrites the cell at world coordinates (x, y, z) and flags the
    /// owning chunk (plus its neighbours) for rebuild.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::OutOfBounds`] for out-of-range coordinates;
    /// the grid is left unchanged.
    pub fn set(&self, x: i32, y: i32, z: i32, block: Block) -> WorldResult<()> {
        if !self.is_valid_position(x, y, z) {
            return Err(WorldError::OutOfBounds { x, y, z });
        }
        let (shard, cell) = self.cell_address(x, y, z);
        {
            let mut slab = self.shards[shard].write();
            slab[cell] = block;
        }
        // Flag after the cell write commits: a reader that sees the
        // dirty flag and then locks the shard sees the new block.
        self.chunks.notify_mutated(x, y, z);
        Ok(())
    }

    /// Counts cells of the given kind, restricted to kinds whose
    /// `visible` capability is set; every other kind reports zero.
    ///
    /// Full-grid linear scan, O(width * height * depth). Invoked at low
    /// bounded frequency by the UI collaborator, never on a hot path.
    #[must_use]
    pub fn count_by_kind(&self, kind: Block) -> usize {
        if !kind.is_visible() {
            return 0;
        }
        self.shards
            .iter()
            .map(|shard| shard.read().iter().filter(|cell| **cell == kind).count())
            .sum()
    }

    /// The highest non-Air y of the column at (x, z), or `None` for an
    /// all-air or out-of-range column.
    ///
    /// Spawn placement scans columns top-down with this to stand agents
    /// on the terrain surface.
    #[must_use]
    pub fn surface_level(&self, x: i32, z: i32) -> Option<i32> {
        if x < 0 || x >= self.width || z < 0 || z >= self.depth {
            return None;
        }
        (0..self.height).rev().find(|&y| !self.get(x, y, z).is_air())
    }
}
