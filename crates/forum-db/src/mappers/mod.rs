//! Model to entity mappers
//!
//! - `From<Model> for Record`: rows read back for the detail view
//! - `TryFrom<Model> for Added*`: rows returned by inserts, validated on the way out

mod comment;
mod thread;
