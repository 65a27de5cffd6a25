pub mod block;
pub mod config;
pub mod constants;
pub mod error;
pub mod face;
pub mod math;
pub mod types;

pub use block::{BlockType, DEFAULT_BLOCK_TYPES};
pub use config::{load_config_from_str, EngineConfig, ShadingSettings, ViewSettings, WorldSettings};
pub use error::{ConfigError, WorldError};
pub use face::Face;
pub use types::{BlockId, Color, VoxelCoord};
