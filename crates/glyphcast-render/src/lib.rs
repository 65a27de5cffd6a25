pub mod camera;
pub mod display;
pub mod frame;
pub mod pick;
pub mod raycast;

pub use camera::{Camera, CameraBasis};
pub use frame::{Frame, FrameCell};
pub use pick::{break_block, pick, place_block, PickResult};
pub use raycast::{cast_ray, cast_ray_with, RayHit, VoxelWalk, WalkStep};
