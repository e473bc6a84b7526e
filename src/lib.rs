//! AAC Board - a two-level augmentative and alternative communication board
//!
//! Core modules:
//! - `store`: Linear-scan key/value container with swap-delete removal
//! - `category`: Named image → spoken text mappings
//! - `board`: Home/category navigation state machine
//! - `persistence`: Line-oriented board file format
//! - `settings`: User preferences for the shell
//! - `cli`: Command-line arguments of the binary
//! - `shell`: Terminal command interpreter

pub mod board;
pub mod category;
pub mod cli;
pub mod error;
pub mod persistence;
pub mod settings;
pub mod shell;
pub mod store;

pub use board::Board;
pub use category::Category;
pub use error::{BoardError, PersistenceError, StoreError};
pub use settings::Settings;
pub use store::KeyValueStore;

/// Board configuration constants
pub mod consts {
    /// Slots allocated by a new store
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Key of the home category in the board's category store
    pub const HOME_KEY: &str = "";

    /// Leading marker of an item line in the board file
    pub const ITEM_MARKER: char = '>';
    /// Separates the image location from the name or text
    pub const FIELD_SEPARATOR: char = ' ';
}
