//! # FORMICARIA Procedural Generation
//!
//! Deterministic world generation for the ant-colony simulation.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed + same config always produces the
//!    same world
//! 2. **Phased**: stratified terrain, then acid regions, then container
//!    spheres, in that exact order
//! 3. **Bounded**: generation is a finite single-threaded computation
//!    that completes before the simulation starts
//!
//! ## Core Components
//!
//! - `SimplexNoise`: seeded 3D noise + the integer terrain sampler
//! - `WorldGenerator`: the three-phase pipeline producing a `BlockGrid`
//!
//! ## Example
//!
//! ```rust,ignore
//! use formicaria_core::WorldConfig;
//! use formicaria_procedural::WorldGenerator;
//!
//! let config = WorldConfig::default();
//! let grid = WorldGenerator::new(&config)?.generate()?;
//! assert!(grid.chunks().dirty_count() > 0); // awaiting initial build
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod noise;
pub mod worldgen;

pub use noise::{SimplexNoise, WorldSeed};
pub use worldgen::WorldGenerator;
