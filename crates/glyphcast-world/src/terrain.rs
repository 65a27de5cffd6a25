use glam::IVec3;
use glyphcast_core::constants::GROUND_HEIGHT;
use glyphcast_core::types::BlockId;

use crate::noise::fractal_noise2d;
use crate::rng::GenRng;
use crate::World;

/// Horizontal sampling scale of the height noise.
const HEIGHT_SCALE: f32 = 0.05;
const HEIGHT_OCTAVES: u32 = 4;
const HEIGHT_PERSISTENCE: f32 = 0.5;
/// Fraction of world depth the tallest column reaches.
const HEIGHT_RANGE: f32 = 0.7;

/// Sampling scale of the independent surface-moisture noise.
const MOISTURE_SCALE: f32 = 0.1;
const MOISTURE_OCTAVES: u32 = 2;
const MOISTURE_PERSISTENCE: f32 = 0.5;
/// Moisture above this makes a pond: dirt with water on top.
const WET_THRESHOLD: f32 = 0.6;
/// Moisture below this makes sand.
const DRY_THRESHOLD: f32 = -0.3;

/// Stone starts this many cells below the surface.
const STONE_DEPTH: i32 = 4;

/// One tree attempt per this many columns.
const COLUMNS_PER_TREE: usize = 100;
/// Trees stay this far from the world's x/y edges.
const TREE_MARGIN: i32 = 3;
const TRUNK_MIN: i32 = 4;
const TRUNK_MAX: i32 = 7;
/// Trees need this much headroom below the world top.
const TREE_HEADROOM: i32 = 5;
/// Leaf radius on the metric sqrt(dx^2 + dy^2 + 2dz^2).
const LEAF_RADIUS: f32 = 2.5;

/// Surface layer chosen per column by the moisture noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Dirt with a water cell above.
    Pond,
    Sand,
    Grass,
}

/// Heightmap terrain with moisture-driven surface cover and scattered trees.
///
/// Deterministic: the same seed on worlds of the same size produces the
/// same grid. Every cell of every column is written, so the pass is a pure
/// overwrite of whatever the world held before.
pub struct TerrainGenerator {
    seed: u32,
    ground_height: i32,
}

impl TerrainGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            ground_height: GROUND_HEIGHT,
        }
    }

    /// Override the minimum surface height.
    pub fn with_ground_height(mut self, ground_height: i32) -> Self {
        self.ground_height = ground_height.max(0);
        self
    }

    /// Surface height (first air cell above ground) for column (x, y).
    pub fn surface_height(&self, x: i32, y: i32, depth: i32) -> i32 {
        let n = fractal_noise2d(
            x as f32 * HEIGHT_SCALE,
            y as f32 * HEIGHT_SCALE,
            HEIGHT_OCTAVES,
            HEIGHT_PERSISTENCE,
            self.seed,
        );
        let height = ((n * 0.5 + 0.5) * (depth as f32 * HEIGHT_RANGE)) as i32;
        height.max(self.ground_height)
    }

    /// Surface cover for column (x, y).
    pub fn surface(&self, x: i32, y: i32) -> Surface {
        let moisture = fractal_noise2d(
            x as f32 * MOISTURE_SCALE,
            y as f32 * MOISTURE_SCALE,
            MOISTURE_OCTAVES,
            MOISTURE_PERSISTENCE,
            self.seed.wrapping_add(1),
        );
        if moisture > WET_THRESHOLD {
            Surface::Pond
        } else if moisture < DRY_THRESHOLD {
            Surface::Sand
        } else {
            Surface::Grass
        }
    }

    /// Fill every column and then scatter trees.
    pub fn generate(&self, world: &mut World) {
        let (width, height, depth) = (world.width(), world.height(), world.depth());
        let mut heightmap = Vec::with_capacity(width as usize * height as usize);

        for y in 0..height {
            for x in 0..width {
                let surface_height = self.surface_height(x, y, depth);
                heightmap.push(surface_height);
                let surface = self.surface(x, y);
                for z in 0..depth {
                    let id = column_block(z, surface_height, surface);
                    world.set_block(IVec3::new(x, y, z), id);
                }
            }
        }

        let trees = self.plant_trees(world, &heightmap);
        log::info!(
            "Generated terrain for seed {} ({width}x{height}x{depth}, {trees} trees)",
            self.seed
        );
    }

    /// Place trunk+leaf clusters on grass columns. Returns the number planted.
    fn plant_trees(&self, world: &mut World, heightmap: &[i32]) -> u32 {
        let (width, height, depth) = (world.width(), world.height(), world.depth());
        if width <= 2 * TREE_MARGIN || height <= 2 * TREE_MARGIN {
            log::debug!("World too small for trees ({width}x{height})");
            return 0;
        }

        let mut rng = GenRng::new(self.seed as u64);
        let attempts = heightmap.len() / COLUMNS_PER_TREE;
        let mut planted = 0;

        for _ in 0..attempts {
            let tx = rng.range_i32(TREE_MARGIN, width - TREE_MARGIN - 1);
            let ty = rng.range_i32(TREE_MARGIN, height - TREE_MARGIN - 1);
            let base = heightmap[ty as usize * width as usize + tx as usize];

            if base >= depth - TREE_HEADROOM
                || world.get_block(IVec3::new(tx, ty, base - 1)) != BlockId::GRASS
            {
                continue;
            }

            let trunk_height = rng.range_i32(TRUNK_MIN, TRUNK_MAX);
            plant_tree(world, IVec3::new(tx, ty, base), trunk_height);
            planted += 1;
        }
        planted
    }
}

/// Trunk of `trunk_height` wood cells starting at `base`, capped by a leaf
/// crown. Leaves only replace air.
fn plant_tree(world: &mut World, base: IVec3, trunk_height: i32) {
    let top = base.z + trunk_height;
    for z in base.z..top {
        world.set_block(IVec3::new(base.x, base.y, z), BlockId::WOOD);
    }

    let crown = top - 1;
    for lz in (top - 3)..=top {
        for ly in (base.y - 2)..=(base.y + 2) {
            for lx in (base.x - 2)..=(base.x + 2) {
                let pos = IVec3::new(lx, ly, lz);
                let (dx, dy, dz) = ((lx - base.x) as f32, (ly - base.y) as f32, (lz - crown) as f32);
                let dist = (dx * dx + dy * dy + dz * dz * 2.0).sqrt();
                if dist < LEAF_RADIUS
                    && world.is_valid_position(pos)
                    && world.get_block(pos) == BlockId::AIR
                {
                    world.set_block(pos, BlockId::LEAVES);
                }
            }
        }
    }
}

/// Block at height `z` of a column whose first air cell is `surface_height`.
fn column_block(z: i32, surface_height: i32, surface: Surface) -> BlockId {
    if z < surface_height - STONE_DEPTH {
        BlockId::STONE
    } else if z < surface_height - 1 {
        BlockId::DIRT
    } else if z == surface_height - 1 {
        match surface {
            Surface::Pond => BlockId::DIRT,
            Surface::Sand => BlockId::SAND,
            Surface::Grass => BlockId::GRASS,
        }
    } else if z == surface_height && surface == Surface::Pond {
        BlockId::WATER
    } else {
        BlockId::AIR
    }
}
