//! # Block Model
//!
//! The closed set of voxel kinds that make up the world.
//!
//! Blocks are stateless `Copy` values identified purely by kind; every
//! behavioural question the simulation asks about a cell ("can an ant
//! walk through it? dig it? does it hurt?") is answered by a fixed
//! capability table, never by per-instance state or dynamic type tests.

use std::fmt;

/// A single voxel kind.
///
/// The enumeration is closed: gameplay cannot introduce new kinds at
/// runtime, so storage and the capability table can both be dense.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Block {
    /// Empty space. The only traversable kind.
    #[default]
    Air,
    /// Base terrain. Diggable.
    Stone,
    /// Surface layer above stone. Diggable.
    Grass,
    /// Consumable food. Consumed by agents, not dug.
    Mulch,
    /// Hazard. Damages agents standing on or against it.
    Acidic,
    /// Impassable obstacle; also forms the world's outer shell.
    Container,
    /// Goal marker placed by gameplay logic; the only counted kind.
    Nest,
}

/// Fixed capability flags for one block kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// Agents can occupy/pass through this cell (air-like).
    pub traversable: bool,
    /// Agents can dig this cell away.
    pub diggable: bool,
    /// Standing on or against this cell damages agents.
    pub hazardous: bool,
    /// Counts toward the aggregate nest total shown by the UI.
    pub visible: bool,
}

impl Capabilities {
    const fn new(traversable: bool, diggable: bool, hazardous: bool, visible: bool) -> Self {
        Self {
            traversable,
            diggable,
            hazardous,
            visible,
        }
    }
}

/// Capability table, indexed by block discriminant.
const CAPABILITIES: [Capabilities; Block::KIND_COUNT] = [
    Capabilities::new(true, false, false, false),  // Air
    Capabilities::new(false, true, false, false),  // Stone
    Capabilities::new(false, true, false, false),  // Grass
    Capabilities::new(false, false, false, false), // Mulch
    Capabilities::new(false, false, true, false),  // Acidic
    Capabilities::new(false, false, false, false), // Container
    Capabilities::new(false, false, false, true),  // Nest
];

impl Block {
    /// Number of distinct block kinds.
    pub const KIND_COUNT: usize = 7;

    /// Every kind, in discriminant order.
    pub const ALL: [Self; Self::KIND_COUNT] = [
        Self::Air,
        Self::Stone,
        Self::Grass,
        Self::Mulch,
        Self::Acidic,
        Self::Container,
        Self::Nest,
    ];

    /// Returns the raw kind id.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Converts a raw kind id back to a `Block`.
    ///
    /// Returns `None` for ids outside the closed enumeration.
    #[inline]
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        if (id as usize) < Self::KIND_COUNT {
            Some(Self::ALL[id as usize])
        } else {
            None
        }
    }

    /// Returns the fixed capability flags for this kind.
    #[inline]
    #[must_use]
    pub const fn capabilities(self) -> Capabilities {
        CAPABILITIES[self as usize]
    }

    /// Returns true for empty space.
    #[inline]
    #[must_use]
    pub const fn is_air(self) -> bool {
        matches!(self, Self::Air)
    }

    /// Agents can occupy/pass through this cell.
    #[inline]
    #[must_use]
    pub const fn is_traversable(self) -> bool {
        self.capabilities().traversable
    }

    /// Agents can dig this cell away.
    #[inline]
    #[must_use]
    pub const fn is_diggable(self) -> bool {
        self.capabilities().diggable
    }

    /// Standing on or against this cell damages agents.
    #[inline]
    #[must_use]
    pub const fn is_hazardous(self) -> bool {
        self.capabilities().hazardous
    }

    /// Counts toward the aggregate nest total.
    #[inline]
    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.capabilities().visible
    }

    /// Human-readable kind name, for logs and UI labels.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Air => "air",
            Self::Stone => "stone",
            Self::Grass => "grass",
            Self::Mulch => "mulch",
            Self::Acidic => "acidic",
            Self::Container => "container",
            Self::Nest => "nest",
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
