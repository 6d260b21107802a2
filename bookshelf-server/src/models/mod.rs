//! Domain models with validation at construction
//!
//! Request payloads become `NewBook` only through `BookPayload::validate`,
//! so handlers never reach the database with a blank title or author.

pub mod book;
pub mod validation;

pub use book::{Book, BookPayload, NewBook};
pub use validation::{ValidationError, ValidationErrors};
