use crate::constants::MAX_BLOCK_TYPES;
use crate::types::{BlockId, Color};

/// Display and physical properties shared by every voxel of one type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockType {
    /// Glyph drawn for the interior of a block face.
    pub glyph: char,
    pub fg: Color,
    pub bg: Color,
    /// Collidable for physics. Rays stop at any non-air block regardless.
    pub solid: bool,
    /// Stored per type; lighting currently uses a fixed occlusion factor.
    pub light_absorption: f32,
    /// Human-readable name for debug display.
    pub name: &'static str,
}

impl BlockType {
    /// Filler for table slots without a defined block.
    pub const UNUSED: BlockType = BlockType {
        glyph: ' ',
        fg: Color::BLACK,
        bg: Color::BLACK,
        solid: false,
        light_absorption: 0.0,
        name: "Unused",
    };

    const fn new(glyph: char, fg: Color, solid: bool, light_absorption: f32, name: &'static str) -> Self {
        Self {
            glyph,
            fg,
            bg: Color::BLACK,
            solid,
            light_absorption,
            name,
        }
    }
}

/// Table every world copies at creation. Index = block id.
pub const DEFAULT_BLOCK_TYPES: [BlockType; MAX_BLOCK_TYPES] = [
    BlockType::new(' ', Color::BLACK, false, 0.0, "Air"),
    BlockType::new('.', Color::YELLOW, true, 0.6, "Dirt"),
    BlockType::new('"', Color::GREEN, true, 0.5, "Grass"),
    BlockType::new('#', Color::WHITE, true, 0.8, "Stone"),
    BlockType::new('|', Color::YELLOW.bright(), true, 0.7, "Wood"),
    BlockType::new('*', Color::GREEN.bright(), true, 0.5, "Leaves"),
    BlockType::new('~', Color::BLUE, false, 0.3, "Water"),
    BlockType::new(',', Color::YELLOW.bright(), true, 0.4, "Sand"),
    BlockType::new('=', Color::RED, true, 0.9, "Brick"),
    BlockType::UNUSED,
    BlockType::UNUSED,
    BlockType::UNUSED,
    BlockType::UNUSED,
    BlockType::UNUSED,
    BlockType::UNUSED,
    BlockType::UNUSED,
];

/// Look up a default block type. Ids beyond the table resolve to air.
pub fn default_block_type(id: BlockId) -> &'static BlockType {
    DEFAULT_BLOCK_TYPES
        .get(id.0 as usize)
        .unwrap_or(&DEFAULT_BLOCK_TYPES[BlockId::AIR.0 as usize])
}
