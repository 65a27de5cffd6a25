//! Single source of truth for shared constants.
//! Config files override the tunable ones; these are the defaults.

/// Number of entries in a world's block-type table. Ids 0..16.
pub const MAX_BLOCK_TYPES: usize = 16;

/// Default world width (x extent) in voxels.
pub const WORLD_WIDTH: i32 = 64;

/// Default world height (y extent) in voxels.
pub const WORLD_HEIGHT: i32 = 64;

/// Default world depth (z extent, vertical) in voxels.
pub const WORLD_DEPTH: i32 = 16;

/// Minimum surface height produced by terrain generation.
pub const GROUND_HEIGHT: i32 = 3;

/// Time of day a fresh world starts at (noon).
pub const INITIAL_TIME_OF_DAY: f32 = 0.5;

/// Sky brightness a fresh world starts at.
pub const INITIAL_SKY_BRIGHTNESS: f32 = 1.0;

/// Lower bound for any lighting value handed to the presentation layer.
pub const MIN_BRIGHTNESS: f32 = 0.2;

/// Upper bound for any lighting value.
pub const MAX_BRIGHTNESS: f32 = 1.0;

/// Multiplier applied per occluding (non-air, non-water) block above a cell.
pub const OCCLUSION_FACTOR: f32 = 0.7;

/// Horizontal field-of-view scale applied to screen-space x.
pub const FOV_HORIZONTAL: f32 = 1.0;

/// Vertical field-of-view scale applied to screen-space y.
pub const FOV_VERTICAL: f32 = 0.7;

/// Camera height above the cell the player stands on.
pub const EYE_HEIGHT: f32 = 1.6;

/// Maximum ray distance for camera rays.
pub const FAR_PLANE: f32 = 20.0;

/// Face-local distance from a cell border that counts as an edge.
pub const EDGE_THRESHOLD: f32 = 0.03;

/// Maximum ray distance for place/break targeting.
pub const REACH_DISTANCE: f32 = 5.0;

/// Distance at which fog starts attenuating hits.
pub const FOG_START: f32 = 10.0;

/// Distance at which fog attenuation saturates.
pub const FOG_END: f32 = 15.0;

/// Fraction of brightness removed at full fog.
pub const FOG_MAX_ATTENUATION: f32 = 0.8;

/// Brightness below which the bright color bit is dropped.
pub const SHADE_DARK_BELOW: f32 = 0.4;

/// Brightness above which the bright color bit is added.
pub const SHADE_BRIGHT_ABOVE: f32 = 0.8;

/// Glyph drawn on block edges.
pub const EDGE_GLYPH: char = '#';

/// Glyph drawn where a ray misses.
pub const SKY_GLYPH: char = ' ';
