//! # World Configuration
//!
//! The immutable bundle of values that defines the world's shape and
//! drives generation. Read once at startup (either from defaults or a
//! TOML file), validated before anything is allocated, and passed by
//! reference into every consumer — there is no ambient global instance.

use std::path::Path;

use serde::Deserialize;

use crate::error::{WorldError, WorldResult};

/// World shape and generation parameters.
///
/// Grid extents derive from the chunked dimensions:
/// `width = world_diameter * chunk_diameter`,
/// `height = world_height * chunk_diameter`,
/// `depth = world_diameter * chunk_diameter`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    /// Seed driving every deterministic pseudo-random choice in
    /// generation. Identical seed + identical config = identical world.
    pub seed: u64,
    /// World width/depth, in chunks.
    pub world_diameter: u32,
    /// World height, in chunks.
    pub world_height: u32,
    /// Chunk edge length, in blocks.
    pub chunk_diameter: u32,
    /// How many acidic hazard regions to carve near the surface.
    pub acidic_region_count: u32,
    /// Radius of each acidic region, in blocks.
    pub acidic_region_radius: i32,
    /// How many container obstacle spheres to carve.
    pub container_sphere_count: u32,
    /// Radius of each container sphere, in blocks.
    pub container_sphere_radius: i32,
}

impl Default for WorldConfig {
    /// The shipped simulation configuration: a 128x32x128 block world.
    fn default() -> Self {
        Self {
            seed: 1337,
            world_diameter: 16,
            world_height: 4,
            chunk_diameter: 8,
            acidic_region_count: 10,
            acidic_region_radius: 5,
            container_sphere_count: 5,
            container_sphere_radius: 20,
        }
    }
}

impl WorldConfig {
    /// Grid width in blocks.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> i32 {
        (self.world_diameter * self.chunk_diameter) as i32
    }

    /// Grid height in blocks.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> i32 {
        (self.world_height * self.chunk_diameter) as i32
    }

    /// Grid depth in blocks.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> i32 {
        (self.world_diameter * self.chunk_diameter) as i32
    }

    /// Chunk counts along (x, y, z).
    #[inline]
    #[must_use]
    pub const fn chunk_counts(&self) -> (usize, usize, usize) {
        (
            self.world_diameter as usize,
            self.world_height as usize,
            self.world_diameter as usize,
        )
    }

    /// Total number of cells in the grid.
    #[inline]
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize * self.depth() as usize
    }

    /// Rejects configurations whose grid shape is undefined.
    ///
    /// Only shape-defining fields are fatal here. Degenerate generation
    /// inputs (a radius of zero, a count of zero) are tolerated and
    /// skipped phase-by-phase during generation instead.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidConfig`] naming the first
    /// non-positive shape field.
    pub fn validate(&self) -> WorldResult<()> {
        if self.world_diameter == 0 {
            return Err(WorldError::InvalidConfig {
                field: "world_diameter",
                value: i64::from(self.world_diameter),
            });
        }
        if self.world_height == 0 {
            return Err(WorldError::InvalidConfig {
                field: "world_height",
                value: i64::from(self.world_height),
            });
        }
        if self.chunk_diameter == 0 {
            return Err(WorldError::InvalidConfig {
                field: "chunk_diameter",
                value: i64::from(self.chunk_diameter),
            });
        }
        Ok(())
    }

    /// Loads and validates a configuration from a TOML file.
    ///
    /// Missing fields fall back to the shipped defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ConfigIo`] if the file cannot be read,
    /// [`WorldError::ConfigParse`] if it is not valid TOML, or
    /// [`WorldError::InvalidConfig`] if the parsed shape is undefined.
    pub fn load(path: impl AsRef<Path>) -> WorldResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| WorldError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded world configuration");
        Ok(config)
    }
}
