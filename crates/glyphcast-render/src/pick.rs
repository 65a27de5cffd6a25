//! Ray-based block targeting for break/place interactions.

use glam::Vec3;
use glyphcast_core::types::{BlockId, VoxelCoord};
use glyphcast_world::World;

use crate::raycast::{cast_ray, RayHit};

/// Block under the crosshair and the cell a new block would go into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickResult {
    pub hit: RayHit,
    /// Cell of the targeted block.
    pub target: VoxelCoord,
    /// Neighbor across the hit face.
    pub place: VoxelCoord,
}

/// Target the first block within `reach` along the ray.
pub fn pick(world: &World, origin: Vec3, direction: Vec3, reach: f32) -> Option<PickResult> {
    let hit = cast_ray(world, origin, direction, reach);
    if !hit.hit {
        return None;
    }
    Some(PickResult {
        hit,
        target: hit.cell,
        place: hit.cell + hit.face.offset(),
    })
}

/// Clear the targeted block. Returns the id that was removed.
pub fn break_block(world: &mut World, origin: Vec3, direction: Vec3, reach: f32) -> Option<BlockId> {
    let picked = pick(world, origin, direction, reach)?;
    let removed = world.get_block(picked.target);
    world.set_block(picked.target, BlockId::AIR);
    log::debug!("Broke {:?} at {}", removed, picked.target);
    Some(removed)
}

/// Put `block` against the targeted face. Only fills an in-bounds air cell;
/// returns the cell written.
pub fn place_block(
    world: &mut World,
    origin: Vec3,
    direction: Vec3,
    reach: f32,
    block: BlockId,
) -> Option<VoxelCoord> {
    if block.is_air() {
        return None;
    }
    let picked = pick(world, origin, direction, reach)?;
    if !world.is_valid_position(picked.place) || !world.get_block(picked.place).is_air() {
        return None;
    }
    world.set_block(picked.place, block);
    log::debug!("Placed {:?} at {}", block, picked.place);
    Some(picked.place)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;
    use glyphcast_core::constants::REACH_DISTANCE;

    fn floor_world() -> World {
        let mut world = World::create(8, 8, 8).expect("world");
        for y in 0..8 {
            for x in 0..8 {
                world.set_block(IVec3::new(x, y, 0), BlockId::STONE);
            }
        }
        world
    }

    #[test]
    fn test_pick_floor() {
        let world = floor_world();
        let picked = pick(&world, Vec3::new(3.5, 3.5, 2.6), Vec3::NEG_Z, REACH_DISTANCE)
            .expect("floor in reach");
        assert_eq!(picked.target, IVec3::new(3, 3, 0));
        assert_eq!(picked.place, IVec3::new(3, 3, 1));
    }

    #[test]
    fn test_pick_out_of_reach() {
        let world = floor_world();
        assert!(pick(&world, Vec3::new(3.5, 3.5, 7.5), Vec3::NEG_Z, REACH_DISTANCE).is_none());
    }

    #[test]
    fn test_break_removes_target() {
        let mut world = floor_world();
        let removed = break_block(&mut world, Vec3::new(3.5, 3.5, 2.6), Vec3::NEG_Z, REACH_DISTANCE);
        assert_eq!(removed, Some(BlockId::STONE));
        assert_eq!(world.get_block(IVec3::new(3, 3, 0)), BlockId::AIR);
        // neighbors untouched
        assert_eq!(world.get_block(IVec3::new(2, 3, 0)), BlockId::STONE);
    }

    #[test]
    fn test_break_uses_hit_cell_on_side_faces() {
        let mut world = World::create(8, 8, 8).expect("world");
        world.set_block(IVec3::new(5, 2, 2), BlockId::BRICK);
        // hit point lies on x = 5.0, the boundary shared with cell 4
        let removed = break_block(&mut world, Vec3::new(2.5, 2.5, 2.5), Vec3::X, REACH_DISTANCE);
        assert_eq!(removed, Some(BlockId::BRICK));
        assert_eq!(world.get_block(IVec3::new(5, 2, 2)), BlockId::AIR);
    }

    #[test]
    fn test_place_against_face() {
        let mut world = floor_world();
        let placed = place_block(
            &mut world,
            Vec3::new(3.5, 3.5, 2.6),
            Vec3::NEG_Z,
            REACH_DISTANCE,
            BlockId::WOOD,
        );
        assert_eq!(placed, Some(IVec3::new(3, 3, 1)));
        assert_eq!(world.get_block(IVec3::new(3, 3, 1)), BlockId::WOOD);
    }

    #[test]
    fn test_place_outside_world_rejected() {
        let mut world = World::create(8, 8, 8).expect("world");
        world.set_block(IVec3::new(0, 4, 4), BlockId::STONE);
        // ray from outside hits the -X face; its neighbor is x = -1
        let placed = place_block(
            &mut world,
            Vec3::new(-2.5, 4.5, 4.5),
            Vec3::X,
            REACH_DISTANCE,
            BlockId::WOOD,
        );
        assert_eq!(placed, None);
    }

    #[test]
    fn test_place_air_rejected() {
        let mut world = floor_world();
        let before = world.clone();
        let placed = place_block(
            &mut world,
            Vec3::new(3.5, 3.5, 2.6),
            Vec3::NEG_Z,
            REACH_DISTANCE,
            BlockId::AIR,
        );
        assert_eq!(placed, None);
        assert_eq!(world, before);
    }
}
