//! Ray-voxel traversal over a [`World`] grid.
//!
//! Rays walk the grid with the Amanatides & Woo DDA: per axis we track the
//! step sign, the ray distance to the next boundary (`t_max`) and the
//! distance between boundaries (`t_delta`). Each step crosses the nearest
//! boundary, so every cell the ray passes through is visited in order.

use glam::{IVec3, Vec3};
use glyphcast_core::config::ShadingSettings;
use glyphcast_core::constants::{FOG_MAX_ATTENUATION, MAX_BRIGHTNESS, MIN_BRIGHTNESS};
use glyphcast_core::face::Face;
use glyphcast_core::math::{clamp, safe_normalize};
use glyphcast_core::types::{BlockId, VoxelCoord};
use glyphcast_world::World;

/// Result of a single ray cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub hit: bool,
    pub block: BlockId,
    /// Grid cell of the hit voxel.
    pub cell: VoxelCoord,
    /// Distance along the normalized ray. Equals the max distance on a miss.
    pub distance: f32,
    pub position: Vec3,
    /// Normal of the entered face, pointing back toward the ray origin.
    pub normal: Vec3,
    pub face: Face,
    /// Shaded brightness in [0.2, 1.0]; 0 on a miss.
    pub brightness: f32,
}

impl RayHit {
    /// Miss result for a ray that ran `max_distance` without hitting.
    pub fn miss(max_distance: f32) -> Self {
        Self {
            hit: false,
            block: BlockId::AIR,
            cell: IVec3::ZERO,
            distance: max_distance,
            position: Vec3::ZERO,
            normal: Vec3::ZERO,
            face: Face::default(),
            brightness: 0.0,
        }
    }
}

/// One boundary crossing of a [`VoxelWalk`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkStep {
    /// Cell just entered.
    pub cell: VoxelCoord,
    /// Ray distance at the crossed boundary.
    pub distance: f32,
    /// Axis stepped along (0=x, 1=y, 2=z).
    pub axis: usize,
    pub face: Face,
}

/// Unbounded DDA walk from a ray origin. The starting cell is not yielded.
#[derive(Debug, Clone)]
pub struct VoxelWalk {
    cell: [i32; 3],
    step: [i32; 3],
    t_max: [f32; 3],
    t_delta: [f32; 3],
}

impl VoxelWalk {
    /// `direction` must be unit length for distances to be in world units.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        let start = origin.floor().as_ivec3();
        let cell = start.to_array();
        let mut step = [0i32; 3];
        let mut t_max = [f32::INFINITY; 3];
        let mut t_delta = [f32::INFINITY; 3];

        let pos = origin.to_array();
        let dir = direction.to_array();
        for axis in 0..3 {
            if dir[axis] > 0.0 {
                step[axis] = 1;
                t_delta[axis] = 1.0 / dir[axis];
                t_max[axis] = (cell[axis] as f32 + 1.0 - pos[axis]) / dir[axis];
            } else if dir[axis] < 0.0 {
                step[axis] = -1;
                t_delta[axis] = -1.0 / dir[axis];
                t_max[axis] = (cell[axis] as f32 - pos[axis]) / dir[axis];
            }
        }

        Self {
            cell,
            step,
            t_max,
            t_delta,
        }
    }

    /// Cell the walk currently occupies.
    pub fn cell(&self) -> VoxelCoord {
        IVec3::from_array(self.cell)
    }

    /// True once the walk is outside `[0, size)` on some axis and can never
    /// come back along it.
    fn left_bounds(&self, size: [i32; 3]) -> bool {
        (0..3).any(|axis| {
            let c = self.cell[axis];
            let s = self.step[axis];
            (c < 0 && s <= 0) || (c >= size[axis] && s >= 0)
        })
    }
}

impl Iterator for VoxelWalk {
    type Item = WalkStep;

    fn next(&mut self) -> Option<WalkStep> {
        // x only on a strict minimum, then y, else z
        let axis = if self.t_max[0] < self.t_max[1] && self.t_max[0] < self.t_max[2] {
            0
        } else if self.t_max[1] < self.t_max[2] {
            1
        } else {
            2
        };

        if self.step[axis] == 0 {
            // zero direction: nothing to cross
            return None;
        }

        let distance = self.t_max[axis];
        self.cell[axis] += self.step[axis];
        self.t_max[axis] += self.t_delta[axis];

        Some(WalkStep {
            cell: IVec3::from_array(self.cell),
            distance,
            axis,
            face: Face::entered(axis, self.step[axis]),
        })
    }
}

/// Cast a ray with the default shading settings.
pub fn cast_ray(world: &World, origin: Vec3, direction: Vec3, max_distance: f32) -> RayHit {
    cast_ray_with(
        world,
        origin,
        direction,
        max_distance,
        &ShadingSettings::default(),
    )
}

/// Cast a ray and return the first non-air voxel within `max_distance`.
///
/// Water counts as a hit. The cell containing `origin` is never tested.
/// A degenerate direction reports a miss.
pub fn cast_ray_with(
    world: &World,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    shading: &ShadingSettings,
) -> RayHit {
    let dir = safe_normalize(direction);
    if dir == Vec3::ZERO || !dir.is_finite() || !origin.is_finite() {
        return RayHit::miss(max_distance);
    }

    let size = world.dimensions().to_array();
    let mut walk = VoxelWalk::new(origin, dir);
    if walk.left_bounds(size) {
        return RayHit::miss(max_distance);
    }

    while let Some(step) = walk.next() {
        if step.distance > max_distance {
            break;
        }
        if walk.left_bounds(size) {
            break;
        }

        let block = world.get_block(step.cell);
        if block.is_air() {
            continue;
        }

        let distance = step.distance.max(0.0);
        let brightness = shade(
            world.get_brightness(step.cell) * step.face.brightness(),
            distance,
            shading,
        );
        return RayHit {
            hit: true,
            block,
            cell: step.cell,
            distance,
            position: origin + dir * distance,
            normal: step.face.normal(),
            face: step.face,
            brightness,
        };
    }

    RayHit::miss(max_distance)
}

/// Apply distance fog to a base brightness and clamp to the display range.
pub fn shade(base: f32, distance: f32, shading: &ShadingSettings) -> f32 {
    let mut brightness = base;
    if shading.fog_enabled {
        let span = shading.fog_end - shading.fog_start;
        let fog = if span > 0.0 {
            clamp((distance - shading.fog_start) / span, 0.0, 1.0)
        } else if distance >= shading.fog_start {
            1.0
        } else {
            0.0
        };
        brightness *= 1.0 - FOG_MAX_ATTENUATION * fog;
    }
    clamp(brightness, MIN_BRIGHTNESS, MAX_BRIGHTNESS)
}
