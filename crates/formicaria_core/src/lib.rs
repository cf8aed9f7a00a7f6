//! # FORMICARIA Core
//!
//! World data structures for the ant-colony simulation.
//!
//! ## Design Principles
//!
//! 1. **Total reads**: out-of-range lookups resolve to Air, never error
//! 2. **Validated writes**: one mutation entry point, bounds-checked
//! 3. **Per-chunk contention**: no global grid lock, ever
//! 4. **Monotonic dirty flags**: only the external renderer clears them
//!
//! ## Core Components
//!
//! - `Block`: closed set of voxel kinds + static capability table
//! - `WorldConfig`: immutable shape/generation bundle, TOML-loadable
//! - `BlockGrid`: dense chunk-sharded storage with the `get`/`set` API
//! - `ChunkIndex`: per-chunk dirty flags polled by the renderer
//!
//! ## Example
//!
//! ```rust,ignore
//! use formicaria_core::{Block, BlockGrid, WorldConfig};
//!
//! let config = WorldConfig::default();
//! let grid = BlockGrid::new(&config)?;
//!
//! // An agent digs a cell; the owning chunk is flagged for rebuild.
//! grid.set(10, 12, 10, Block::Air)?;
//! assert!(grid.chunks().is_dirty(1, 1, 1));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod block;
pub mod chunk_index;
pub mod config;
pub mod error;
pub mod grid;

pub use block::{Block, Capabilities};
pub use chunk_index::ChunkIndex;
pub use config::WorldConfig;
pub use error::{WorldError, WorldResult};
pub use grid::BlockGrid;
