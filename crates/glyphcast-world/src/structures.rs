use glam::IVec3;
use glyphcast_core::types::BlockId;

use crate::World;

/// House footprint along x.
pub const HOUSE_WIDTH: i32 = 7;
/// House footprint along y.
pub const HOUSE_LENGTH: i32 = 9;
/// Wall height; the roof sits this many cells above the floor.
pub const HOUSE_HEIGHT: i32 = 4;
/// Doorway height in cells above the floor.
const DOOR_HEIGHT: i32 = 2;
/// Window height above the floor.
const WINDOW_LEVEL: i32 = 2;

/// Places a single house at the world's horizontal centre.
///
/// The floor goes directly above the first solid cell found scanning up
/// from z = 0. If the world has no ground there, or the house would not
/// fit, nothing is placed.
pub struct StructureGenerator {
    seed: u32,
}

impl StructureGenerator {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Floor origin (south-west corner) for the house, if it fits.
    pub fn house_origin(world: &World) -> Option<IVec3> {
        let x = world.width() / 2;
        let y = world.height() / 2;

        let first_solid = (0..world.depth()).find(|&z| world.is_solid(IVec3::new(x, y, z)))?;
        let floor_z = first_solid + 1;

        let fits = x + HOUSE_WIDTH < world.width()
            && y + HOUSE_LENGTH < world.height()
            && floor_z + HOUSE_HEIGHT < world.depth();
        fits.then_some(IVec3::new(x, y, floor_z))
    }

    /// Build the house. Returns its floor origin if it was placed.
    pub fn generate(&self, world: &mut World) -> Option<IVec3> {
        let Some(origin) = Self::house_origin(world) else {
            log::debug!("Skipping house for seed {}: no room at world centre", self.seed);
            return None;
        };

        for y in 0..HOUSE_LENGTH {
            for x in 0..HOUSE_WIDTH {
                world.set_block(origin + IVec3::new(x, y, 0), BlockId::WOOD);
                world.set_block(origin + IVec3::new(x, y, HOUSE_HEIGHT), BlockId::WOOD);
            }
        }

        for z in 1..HOUSE_HEIGHT {
            for y in 0..HOUSE_LENGTH {
                for x in 0..HOUSE_WIDTH {
                    let perimeter =
                        x == 0 || x == HOUSE_WIDTH - 1 || y == 0 || y == HOUSE_LENGTH - 1;
                    let offset = IVec3::new(x, y, z);
                    let fill = if !perimeter || is_doorway(offset) || is_window(offset) {
                        BlockId::AIR
                    } else {
                        BlockId::BRICK
                    };
                    world.set_block(origin + offset, fill);
                }
            }
        }

        log::info!("Placed house at {origin}");
        Some(origin)
    }
}

/// Doorway: centred in the south (y = 0) wall.
fn is_doorway(offset: IVec3) -> bool {
    offset.y == 0 && offset.x == HOUSE_WIDTH / 2 && offset.z <= DOOR_HEIGHT
}

/// Window: one cell in the east (x = max) wall.
fn is_window(offset: IVec3) -> bool {
    offset.x == HOUSE_WIDTH - 1 && offset.y == HOUSE_LENGTH / 2 && offset.z == WINDOW_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_world() -> World {
        let mut world = World::create(24, 24, 10).expect("world");
        for y in 0..24 {
            for x in 0..24 {
                world.set_block(IVec3::new(x, y, 0), BlockId::STONE);
            }
        }
        world
    }

    #[test]
    fn test_house_on_flat_ground() {
        let mut world = flat_world();
        let origin = IVec3::new(12, 12, 1);
        assert_eq!(StructureGenerator::new(1).generate(&mut world), Some(origin));

        // floor and roof
        for y in 0..HOUSE_LENGTH {
            for x in 0..HOUSE_WIDTH {
                assert_eq!(world.get_block(origin + IVec3::new(x, y, 0)), BlockId::WOOD);
                assert_eq!(
                    world.get_block(origin + IVec3::new(x, y, HOUSE_HEIGHT)),
                    BlockId::WOOD
                );
            }
        }

        // corners are brick, interior is air
        assert_eq!(world.get_block(origin + IVec3::new(0, 0, 1)), BlockId::BRICK);
        assert_eq!(world.get_block(origin + IVec3::new(6, 8, 3)), BlockId::BRICK);
        assert_eq!(world.get_block(origin + IVec3::new(3, 4, 2)), BlockId::AIR);
    }

    #[test]
    fn test_single_doorway_and_window() {
        let mut world = flat_world();
        StructureGenerator::new(1).generate(&mut world);
        let origin = IVec3::new(12, 12, 1);

        let mut gaps = Vec::new();
        for z in 1..HOUSE_HEIGHT {
            for y in 0..HOUSE_LENGTH {
                for x in 0..HOUSE_WIDTH {
                    let perimeter =
                        x == 0 || x == HOUSE_WIDTH - 1 || y == 0 || y == HOUSE_LENGTH - 1;
                    if perimeter && world.get_block(origin + IVec3::new(x, y, z)) == BlockId::AIR {
                        gaps.push(IVec3::new(x, y, z));
                    }
                }
            }
        }
        assert_eq!(
            gaps,
            vec![IVec3::new(3, 0, 1), IVec3::new(3, 0, 2), IVec3::new(6, 4, 2)]
        );
    }

    #[test]
    fn test_house_anchors_above_first_solid_cell() {
        let mut world = World::create(24, 24, 12).expect("world");
        for z in 0..4 {
            world.set_block(IVec3::new(12, 12, z), BlockId::DIRT);
        }
        // only the lowest solid cell matters, not the top of the column
        assert_eq!(StructureGenerator::house_origin(&world), Some(IVec3::new(12, 12, 1)));

        let mut raised = World::create(24, 24, 12).expect("world");
        raised.set_block(IVec3::new(12, 12, 3), BlockId::STONE);
        raised.set_block(IVec3::new(12, 12, 4), BlockId::STONE);
        assert_eq!(StructureGenerator::house_origin(&raised), Some(IVec3::new(12, 12, 4)));
    }

    #[test]
    fn test_skipped_without_ground() {
        let mut world = World::create(24, 24, 10).expect("world");
        assert_eq!(StructureGenerator::new(1).generate(&mut world), None);
        assert!(world.blocks().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_skipped_when_too_tall() {
        let mut world = World::create(24, 24, 5).expect("world");
        world.set_block(IVec3::new(12, 12, 0), BlockId::STONE);
        // floor at 1, roof at 5 == depth
        assert_eq!(StructureGenerator::new(1).generate(&mut world), None);
    }

    #[test]
    fn test_skipped_when_too_narrow() {
        let mut world = World::create(12, 24, 10).expect("world");
        world.set_block(IVec3::new(6, 12, 0), BlockId::STONE);
        // 6 + 7 >= 12
        assert_eq!(StructureGenerator::new(1).generate(&mut world), None);
        assert_eq!(world.get_block(IVec3::new(6, 12, 1)), BlockId::AIR);
    }

    #[test]
    fn test_generated_world_gets_house() {
        let mut world = World::create(64, 64, 16).expect("world");
        world.generate_terrain(2024);
        let origin = StructureGenerator::house_origin(&world);
        let placed = StructureGenerator::new(2024).generate(&mut world);
        assert_eq!(placed, origin);
        if let Some(origin) = origin {
            assert_eq!(world.get_block(origin), BlockId::WOOD);
            assert!(world.is_solid(origin - IVec3::Z));
        }
    }
}
