pub mod constants;
pub mod notice;
pub mod storage;
pub mod time;

pub use constants::*;
pub use notice::blocking_notice;
pub use storage::{load_from_storage, remove_from_storage, save_to_storage};
pub use time::sleep_ms;
