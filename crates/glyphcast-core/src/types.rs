use glam::IVec3;

use crate::constants::MAX_BLOCK_TYPES;

/// Integer voxel coordinate. x = width axis, y = height axis, z = vertical.
pub type VoxelCoord = IVec3;

/// Newtype for block-type identifiers. 0 = air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BlockId(pub u8);

impl BlockId {
    pub const AIR: BlockId = BlockId(0);
    pub const DIRT: BlockId = BlockId(1);
    pub const GRASS: BlockId = BlockId(2);
    pub const STONE: BlockId = BlockId(3);
    pub const WOOD: BlockId = BlockId(4);
    pub const LEAVES: BlockId = BlockId(5);
    pub const WATER: BlockId = BlockId(6);
    pub const SAND: BlockId = BlockId(7);
    pub const BRICK: BlockId = BlockId(8);

    pub fn is_air(self) -> bool {
        self == Self::AIR
    }

    /// Whether this id has an entry in the block-type table.
    pub fn in_table(self) -> bool {
        (self.0 as usize) < MAX_BLOCK_TYPES
    }
}

impl From<u8> for BlockId {
    fn from(raw: u8) -> Self {
        BlockId(raw)
    }
}

impl From<BlockId> for u8 {
    fn from(id: BlockId) -> Self {
        id.0
    }
}

/// Terminal color code: 3-bit base color plus a bright bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u8);

impl Color {
    pub const BLACK: Color = Color(0);
    pub const RED: Color = Color(1);
    pub const GREEN: Color = Color(2);
    pub const YELLOW: Color = Color(3);
    pub const BLUE: Color = Color(4);
    pub const MAGENTA: Color = Color(5);
    pub const CYAN: Color = Color(6);
    pub const WHITE: Color = Color(7);

    /// Bright modifier bit.
    pub const BRIGHT_BIT: u8 = 8;

    pub const fn bright(self) -> Color {
        Color(self.0 | Self::BRIGHT_BIT)
    }

    pub const fn dim(self) -> Color {
        Color(self.0 & !Self::BRIGHT_BIT)
    }

    pub const fn is_bright(self) -> bool {
        self.0 & Self::BRIGHT_BIT != 0
    }
}
