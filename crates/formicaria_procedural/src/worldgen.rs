//! # World Generator
//!
//! Populates a [`BlockGrid`] deterministically from a seed and
//! configuration, in three fixed phases:
//!
//! 1. **Stratified base terrain** — per-column stone / grass / mulch
//!    layers from noise thresholds, wrapped in an impassable container
//!    shell on the outer boundary.
//! 2. **Acidic regions** — hazard pockets carved near the terrain
//!    surface, filling air only; solid terrain is never displaced.
//! 3. **Container spheres** — obstacles carved anywhere, displacing
//!    terrain, hazard, and resources alike.
//!
//! Phase order is fixed and each phase's output is the next phase's
//! input. The RNG is created per run from the configured seed and
//! threaded through the carve phases by argument, so the randomness any
//! phase sees depends only on the call sequence before it.
//!
//! Generation runs single-threaded on a private buffer, before any
//! other component may read the world; the buffer is frozen into the
//! shared grid in one step, which marks every chunk for its initial
//! renderer build.

use formicaria_core::{Block, BlockGrid, WorldConfig, WorldResult};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::noise::{SimplexNoise, WorldSeed};

/// Base offset added under the noise-driven stone ceiling.
const STONE_FLOOR_BIAS: i32 = 10;

/// Noise slices (the fixed second sample axis) keeping each terrain
/// stratum on an independent cut of the field.
const STONE_PRIMARY_SLICE: i32 = 0;
const STONE_DETAIL_SLICE: i32 = 300;
const GRASS_SLICE: i32 = 100;
const MULCH_SLICE: i32 = 200;

/// Deterministic three-phase world generator.
///
/// Construct once from a validated configuration; each [`generate`]
/// call produces an identical world for identical inputs.
///
/// [`generate`]: WorldGenerator::generate
#[derive(Debug)]
pub struct WorldGenerator {
    config: WorldConfig,
    noise: SimplexNoise,
}

impl WorldGenerator {
    /// Creates a generator for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`formicaria_core::WorldError::InvalidConfig`] if the
    /// configured grid shape is undefined.
    pub fn new(config: &WorldConfig) -> WorldResult<Self> {
        config.validate()?;
        Ok(Self {
            config: *config,
            noise: SimplexNoise::new(WorldSeed::new(config.seed)),
        })
    }

    /// Runs the full three-phase pipeline and freezes the result into a
    /// [`BlockGrid`] with every chunk flagged for its initial build.
    ///
    /// # Errors
    ///
    /// Propagates grid construction failures; with a validated
    /// configuration these do not occur.
    pub fn generate(&self) -> WorldResult<BlockGrid> {
        let mut buffer = GenerationBuffer::new(&self.config);
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);

        tracing::info!(
            seed = self.config.seed,
            width = buffer.width,
            height = buffer.height,
            depth = buffer.depth,
            "generating world"
        );

        self.stratify_terrain(&mut buffer);
        let acidic_cells = self.carve_acidic_regions(&mut buffer, &mut rng);
        let container_cells = self.carve_container_spheres(&mut buffer, &mut rng);

        tracing::info!(acidic_cells, container_cells, "world generation complete");

        BlockGrid::from_cells(&self.config, buffer.into_cells())
    }

    /// Phase 1: stratified base terrain plus the outer shell.
    fn stratify_terrain(&self, buffer: &mut GenerationBuffer) {
        for x in 0..buffer.width {
            for z in 0..buffer.depth {
                // Tuned thresholds; altering them reshapes the world.
                let stone_ceiling = self
                    .noise
                    .sample_scaled(x, STONE_PRIMARY_SLICE, z, 10.0, 3.0, 1.2)
                    + self.noise.sample_scaled(x, STONE_DETAIL_SLICE, z, 20.0, 4.0, 0.0)
                    + STONE_FLOOR_BIAS;
                let grass_depth = self.noise.sample_scaled(x, GRASS_SLICE, z, 30.0, 10.0, 0.0);
                let mulch_depth = self.noise.sample_scaled(x, MULCH_SLICE, z, 20.0, 5.0, 1.5);

                for y in 0..buffer.height {
                    let block = if y <= stone_ceiling {
                        Block::Stone
                    } else if y <= stone_ceiling + grass_depth {
                        Block::Grass
                    } else if y <= stone_ceiling + grass_depth + mulch_depth {
                        Block::Mulch
                    } else {
                        Block::Air
                    };
                    buffer.set(x, y, z, block);

                    // The shell takes priority over any terrain height:
                    // the world stays bounded regardless of how tall the
                    // strata run at the edges.
                    if x == 0
                        || x == buffer.width - 1
                        || z == 0
                        || z == buffer.depth - 1
                        || y == 0
                    {
                        buffer.set(x, y, z, Block::Container);
                    }
                }
            }
        }
    }

    /// Phase 2: acidic hazard regions, carved only into air near the
    /// terrain surface. Returns the number of cells carved.
    fn carve_acidic_regions(&self, buffer: &mut GenerationBuffer, rng: &mut ChaCha8Rng) -> usize {
        let radius = self.config.acidic_region_radius;
        if self.config.acidic_region_count == 0 {
            return 0;
        }
        if radius <= 0 || !buffer.has_interior() {
            tracing::debug!(radius, "skipping acidic regions: degenerate input");
            return 0;
        }

        let mut carved = 0;
        for _ in 0..self.config.acidic_region_count {
            let x = rng.gen_range(0..buffer.width);
            let z = rng.gen_range(0..buffer.depth);
            // The region centres on the column's surface.
            let Some(y) = buffer.highest_solid_y(x, z) else {
                tracing::debug!(x, z, "skipping acidic region: all-air column");
                continue;
            };
            carved += carve_sphere(buffer, x, y, z, radius, Block::Acidic, true);
        }
        carved
    }

    /// Phase 3: container obstacle spheres, carved anywhere and
    /// displacing any prior content. Returns the number of cells carved.
    fn carve_container_spheres(
        &self,
        buffer: &mut GenerationBuffer,
        rng: &mut ChaCha8Rng,
    ) -> usize {
        let radius = self.config.container_sphere_radius;
        if self.config.container_sphere_count == 0 {
            return 0;
        }
        if radius <= 0 || !buffer.has_interior() {
            tracing::debug!(radius, "skipping container spheres: degenerate input");
            return 0;
        }

        let mut carved = 0;
        for _ in 0..self.config.container_sphere_count {
            let x = rng.gen_range(0..buffer.width);
            let z = rng.gen_range(0..buffer.depth);
            let y = rng.gen_range(0..buffer.height);
            carved += carve_sphere(buffer, x, y, z, radius, Block::Container, false);
        }
        carved
    }
}

/// Carves a sphere of `fill` around (cx, cy, cz).
///
/// Walks the side-`2 * radius` bounding cube; candidates within
/// `radius` (Euclidean distance from the unclamped candidate to the
/// centre) are clamped to the grid interior and written. Clamping keeps
/// every carved region's surface solid without breaching or thinning
/// the outer shell, while the centre itself may lie anywhere.
///
/// With `only_into_air`, cells holding anything but Air are left alone.
fn carve_sphere(
    buffer: &mut GenerationBuffer,
    cx: i32,
    cy: i32,
    cz: i32,
    radius: i32,
    fill: Block,
    only_into_air: bool,
) -> usize {
    let radius_f = f64::from(radius);
    let mut carved = 0;

    for hx in (cx - radius)..(cx + radius) {
        for hz in (cz - radius)..(cz + radius) {
            for hy in (cy - radius)..(cy + radius) {
                let dx = f64::from(cx - hx);
                let dy = f64::from(cy - hy);
                let dz = f64::from(cz - hz);
                let distance = (dx * dx + dy * dy + dz * dz).sqrt();
                if distance > radius_f {
                    continue;
                }

                let px = hx.clamp(1, buffer.width - 2);
                let py = hy.clamp(1, buffer.height - 2);
                let pz = hz.clamp(1, buffer.depth - 2);
                if only_into_air && !buffer.get(px, py, pz).is_air() {
                    continue;
                }
                buffer.set(px, py, pz, fill);
                carved += 1;
            }
        }
    }
    carved
}

/// Single-threaded generation scratch space.
///
/// Dense x-major cell ordering, matching what
/// [`BlockGrid::from_cells`] consumes.
struct GenerationBuffer {
    width: i32,
    height: i32,
    depth: i32,
    cells: Vec<Block>,
}

impl GenerationBuffer {
    fn new(config: &WorldConfig) -> Self {
        Self {
            width: config.width(),
            height: config.height(),
            depth: config.depth(),
            cells: vec![Block::Air; config.cell_count()],
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> usize {
        ((x * self.height + y) * self.depth + z) as usize
    }

    #[inline]
    fn get(&self, x: i32, y: i32, z: i32) -> Block {
        self.cells[self.index(x, y, z)]
    }

    #[inline]
    fn set(&mut self, x: i32, y: i32, z: i32, block: Block) {
        let index = self.index(x, y, z);
        self.cells[index] = block;
    }

    /// Whether the grid has any cells strictly inside the shell.
    fn has_interior(&self) -> bool {
        self.width >= 3 && self.height >= 3 && self.depth >= 3
    }

    /// The highest non-Air y of the column at (x, z).
    fn highest_solid_y(&self, x: i32, z: i32) -> Option<i32> {
        (0..self.height).rev().find(|&y| !self.get(x, y, z).is_air())
    }

    fn into_cells(self) -> Vec<Block> {
        self.cells
    }
}
