pub mod lighting;
pub mod noise;
pub mod rng;
pub mod structures;
pub mod terrain;

use glam::IVec3;
use glyphcast_core::block::{BlockType, DEFAULT_BLOCK_TYPES};
use glyphcast_core::constants::*;
use glyphcast_core::error::WorldError;
use glyphcast_core::types::{BlockId, VoxelCoord};
use glyphcast_core::math::clamp;

pub use rng::GenRng;
pub use structures::StructureGenerator;
pub use terrain::TerrainGenerator;

/// Dense voxel world: a flat z-major grid of block ids plus the block-type
/// table and day/night lighting state.
///
/// Coordinates outside `[0, width) x [0, height) x [0, depth)` are never
/// stored; queries against them return air and mutations are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    width: i32,
    height: i32,
    depth: i32,
    /// Index = (z * height + y) * width + x.
    blocks: Vec<u8>,
    block_types: [BlockType; MAX_BLOCK_TYPES],
    time_of_day: f32,
    sky_brightness: f32,
}

impl World {
    /// Allocate an all-air world. Fails on non-positive dimensions or when
    /// the grid cannot be allocated.
    pub fn create(width: i32, height: i32, depth: i32) -> Result<Self, WorldError> {
        let cells = cell_count(width, height, depth)?;

        let mut blocks = Vec::new();
        blocks
            .try_reserve_exact(cells)
            .map_err(|_| WorldError::AllocationFailed { cells })?;
        blocks.resize(cells, BlockId::AIR.0);

        log::info!("Created {width}x{height}x{depth} world ({cells} cells)");

        Ok(Self {
            width,
            height,
            depth,
            blocks,
            block_types: DEFAULT_BLOCK_TYPES,
            time_of_day: INITIAL_TIME_OF_DAY,
            sky_brightness: INITIAL_SKY_BRIGHTNESS,
        })
    }

    /// Rebuild a world from a z-major block buffer and stored lighting state.
    /// The block-type table is reset to the defaults.
    pub fn from_raw_parts(
        width: i32,
        height: i32,
        depth: i32,
        blocks: Vec<u8>,
        time_of_day: f32,
        sky_brightness: f32,
    ) -> Result<Self, WorldError> {
        let expected = cell_count(width, height, depth)?;
        if blocks.len() != expected {
            return Err(WorldError::BlockBufferSize {
                expected,
                actual: blocks.len(),
            });
        }
        Ok(Self {
            width,
            height,
            depth,
            blocks,
            block_types: DEFAULT_BLOCK_TYPES,
            time_of_day,
            sky_brightness,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// (width, height, depth) as a vector.
    pub fn dimensions(&self) -> IVec3 {
        IVec3::new(self.width, self.height, self.depth)
    }

    /// Read-only z-major view of the grid, for serialization.
    pub fn blocks(&self) -> &[u8] {
        &self.blocks
    }

    pub fn time_of_day(&self) -> f32 {
        self.time_of_day
    }

    pub fn sky_brightness(&self) -> f32 {
        self.sky_brightness
    }

    pub fn is_valid_position(&self, pos: VoxelCoord) -> bool {
        pos.x >= 0
            && pos.x < self.width
            && pos.y >= 0
            && pos.y < self.height
            && pos.z >= 0
            && pos.z < self.depth
    }

    fn index(&self, pos: VoxelCoord) -> Option<usize> {
        if !self.is_valid_position(pos) {
            return None;
        }
        let (x, y, z) = (pos.x as usize, pos.y as usize, pos.z as usize);
        let (w, h) = (self.width as usize, self.height as usize);
        Some((z * h + y) * w + x)
    }

    /// Block id at `pos`, or air when out of bounds.
    pub fn get_block(&self, pos: VoxelCoord) -> BlockId {
        self.index(pos)
            .map(|i| BlockId(self.blocks[i]))
            .unwrap_or(BlockId::AIR)
    }

    /// Overwrite the cell at `pos`. Out-of-bounds writes are ignored.
    pub fn set_block(&mut self, pos: VoxelCoord, id: BlockId) {
        if let Some(i) = self.index(pos) {
            self.blocks[i] = id.0;
        }
    }

    /// Whether the cell is collidable. False out of bounds and for ids
    /// beyond the block-type table.
    pub fn is_solid(&self, pos: VoxelCoord) -> bool {
        let Some(i) = self.index(pos) else {
            return false;
        };
        self.block_types
            .get(self.blocks[i] as usize)
            .is_some_and(|t| t.solid)
    }

    /// Block type for `id`. Ids beyond the table resolve to air.
    pub fn get_block_type(&self, id: BlockId) -> &BlockType {
        self.block_types
            .get(id.0 as usize)
            .unwrap_or(&self.block_types[BlockId::AIR.0 as usize])
    }

    /// Reset this world's block-type table to the defaults.
    pub fn init_block_types(&mut self) {
        self.block_types = DEFAULT_BLOCK_TYPES;
    }

    /// Ambient light at `pos` in `[0.2, 1.0]`: sky brightness attenuated by
    /// 0.7 for each non-air, non-water block above the cell. Out-of-bounds
    /// positions see the unoccluded sky.
    pub fn get_brightness(&self, pos: VoxelCoord) -> f32 {
        if !self.is_valid_position(pos) {
            return clamp(self.sky_brightness, MIN_BRIGHTNESS, MAX_BRIGHTNESS);
        }
        let occluders = ((pos.z + 1)..self.depth)
            .map(|z| self.get_block(IVec3::new(pos.x, pos.y, z)))
            .filter(|&id| id != BlockId::AIR && id != BlockId::WATER)
            .count() as u32;
        lighting::occluded_brightness(self.sky_brightness, occluders)
    }

    /// Set the time of day, wrapping into `[0, 1)`, and recompute lighting.
    ///
    /// A non-finite `time` is ignored and the current time of day is kept.
    pub fn set_time(&mut self, time: f32) {
        if time.is_finite() {
            self.time_of_day = lighting::wrap_time(time);
        } else {
            log::warn!("Ignoring non-finite time of day {time}");
        }
        self.update_lighting();
    }

    /// Advance the time of day by `delta` (fraction of a full day).
    pub fn advance_time(&mut self, delta: f32) {
        self.set_time(self.time_of_day + delta);
    }

    /// Recompute sky brightness from the stored time of day.
    pub fn update_lighting(&mut self) {
        self.sky_brightness = lighting::sky_brightness_at(self.time_of_day);
    }

    /// Run the terrain pass for `seed`. See [`TerrainGenerator`].
    pub fn generate_terrain(&mut self, seed: u32) {
        TerrainGenerator::new(seed).generate(self);
    }

    /// Run the structure pass for `seed`. Returns the house origin if one
    /// was placed. See [`StructureGenerator`].
    pub fn generate_structures(&mut self, seed: u32) -> Option<VoxelCoord> {
        StructureGenerator::new(seed).generate(self)
    }

    /// Standing height over column (x, y): one above the highest solid cell
    /// that has two non-solid cells above it. None if no such cell exists.
    pub fn find_ground(&self, x: i32, y: i32) -> Option<i32> {
        (0..self.depth - 1).rev().find_map(|z| {
            let solid = self.is_solid(IVec3::new(x, y, z));
            let clear = !self.is_solid(IVec3::new(x, y, z + 1))
                && !self.is_solid(IVec3::new(x, y, z + 2));
            (solid && clear).then_some(z + 1)
        })
    }

    /// Eye position above the ground at the world's horizontal centre.
    pub fn spawn_point(&self, eye_height: f32) -> Option<glam::Vec3> {
        let x = self.width as f32 / 2.0;
        let y = self.height as f32 / 2.0;
        let ground = self.find_ground(x as i32, y as i32)?;
        Some(glam::Vec3::new(x, y, ground as f32 + eye_height))
    }
}

fn cell_count(width: i32, height: i32, depth: i32) -> Result<usize, WorldError> {
    let invalid = WorldError::InvalidDimensions {
        width,
        height,
        depth,
    };
    if width < 1 || height < 1 || depth < 1 {
        return Err(invalid);
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(depth as usize))
        .ok_or(invalid)
}
