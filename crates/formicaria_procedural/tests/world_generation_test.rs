//! # World Generation Tests
//!
//! Whole-pipeline properties: the container shell survives every carve
//! phase, hazard regions only ever fill air, container spheres may
//! displace anything, and generation is reproducible from its seed.

use formicaria_core::{Block, BlockGrid, WorldConfig};
use formicaria_procedural::WorldGenerator;

fn base_config() -> WorldConfig {
    WorldConfig {
        seed: 42,
        world_diameter: 6,
        world_height: 3,
        chunk_diameter: 8,
        acidic_region_count: 0,
        acidic_region_radius: 4,
        container_sphere_count: 0,
        container_sphere_radius: 6,
    }
}

fn generate(config: &WorldConfig) -> BlockGrid {
    WorldGenerator::new(config).unwrap().generate().unwrap()
}

/// Collects every coordinate where the two grids disagree.
fn diff_cells(a: &BlockGrid, b: &BlockGrid) -> Vec<(i32, i32, i32, Block, Block)> {
    let mut diffs = Vec::new();
    for x in 0..a.width() {
        for y in 0..a.height() {
            for z in 0..a.depth() {
                let (va, vb) = (a.get(x, y, z), b.get(x, y, z));
                if va != vb {
                    diffs.push((x, y, z, va, vb));
                }
            }
        }
    }
    diffs
}

#[test]
fn test_shell_is_container_even_after_carving() {
    let config = WorldConfig {
        acidic_region_count: 8,
        container_sphere_count: 4,
        ..base_config()
    };
    let grid = generate(&config);

    let (width, height, depth) = (grid.width(), grid.height(), grid.depth());
    for x in 0..width {
        for y in 0..height {
            for z in 0..depth {
                let on_shell = x == 0 || x == width - 1 || z == 0 || z == depth - 1 || y == 0;
                if on_shell {
                    assert_eq!(
                        grid.get(x, y, z),
                        Block::Container,
                        "shell breached at ({x}, {y}, {z})"
                    );
                }
            }
        }
    }
}

#[test]
fn test_acidic_regions_only_fill_air() {
    let without = generate(&base_config());
    let with = generate(&WorldConfig {
        acidic_region_count: 8,
        ..base_config()
    });

    // Phase 1 is noise-only and phase 3 is disabled in both runs, so
    // every difference is the work of the hazard phase.
    let diffs = diff_cells(&without, &with);
    assert!(!diffs.is_empty(), "hazard phase carved nothing");
    for (x, y, z, before, after) in diffs {
        assert_eq!(
            after,
            Block::Acidic,
            "hazard phase wrote {after} at ({x}, {y}, {z})"
        );
        assert_eq!(
            before,
            Block::Air,
            "hazard phase displaced {before} at ({x}, {y}, {z})"
        );
    }
}

#[test]
fn test_container_spheres_may_displace_terrain() {
    let without = generate(&base_config());
    let with = generate(&WorldConfig {
        container_sphere_count: 4,
        ..base_config()
    });

    let diffs = diff_cells(&without, &with);
    assert!(!diffs.is_empty(), "obstacle phase carved nothing");

    let mut displaced_solid = 0usize;
    for (x, y, z, before, after) in diffs {
        assert_eq!(
            after,
            Block::Container,
            "obstacle phase wrote {after} at ({x}, {y}, {z})"
        );
        if !before.is_air() {
            displaced_solid += 1;
        }
    }
    assert!(
        displaced_solid > 0,
        "expected at least one solid cell displaced by an obstacle sphere"
    );
}

#[test]
fn test_full_pipeline_is_reproducible() {
    let config = WorldConfig {
        acidic_region_count: 8,
        container_sphere_count: 4,
        ..base_config()
    };
    let first = generate(&config);
    let second = generate(&config);
    assert!(
        diff_cells(&first, &second).is_empty(),
        "identical seed and config must reproduce the world cell-for-cell"
    );
}

#[test]
fn test_generated_world_awaits_initial_build() {
    let grid = generate(&base_config());
    let (cx, cy, cz) = grid.chunks().chunk_counts();
    assert_eq!(
        grid.chunks().dirty_count(),
        cx * cy * cz,
        "every chunk should be flagged for the renderer's first pass"
    );
}

#[test]
fn test_generated_world_has_no_nests() {
    // Nests are placed by gameplay, never by generation.
    let grid = generate(&WorldConfig {
        acidic_region_count: 8,
        container_sphere_count: 4,
        ..base_config()
    });
    assert_eq!(grid.count_by_kind(Block::Nest), 0);
}

#[test]
fn test_post_generation_digging_flags_chunks() {
    let grid = generate(&base_config());
    let chunks = grid.chunks();

    // The renderer finishes its initial build.
    let (cx, cy, cz) = chunks.chunk_counts();
    for x in 0..cx as i32 {
        for y in 0..cy as i32 {
            for z in 0..cz as i32 {
                chunks.clear(x, y, z);
            }
        }
    }
    assert_eq!(chunks.dirty_count(), 0);

    // An agent digs out a surface cell.
    let surface = grid.surface_level(20, 20).expect("interior column has terrain");
    grid.set(20, surface, 20, Block::Air).unwrap();
    assert_eq!(grid.get(20, surface, 20), Block::Air);
    assert!(chunks.dirty_count() >= 1, "dig must flag the owning chunk");
    assert!(
        chunks.is_dirty(20 / 8, surface / 8, 20 / 8),
        "owning chunk must be dirty"
    );
}
