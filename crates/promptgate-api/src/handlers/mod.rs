//! HTTP request handlers

pub mod chat;
pub mod health;
pub mod scanners;

pub use chat::chat;
pub use health::{health, live, ready, version};
pub use scanners::list_scanners;
