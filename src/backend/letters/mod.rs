//! Letters Module
//!
//! Private letters: storage and HTTP handlers.

pub mod db;
pub mod handlers;

pub use db::{LetterStore, MemoryLetterStore, PgLetterStore};
pub use handlers::{get_letter, list_letters, post_letter};
