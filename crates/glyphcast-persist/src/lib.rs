pub mod error;
pub mod format;
pub mod load;
pub mod save;

pub use error::PersistError;
pub use format::SnapshotHeader;
pub use load::{load, load_from_path};
pub use save::{save, save_to_path};
