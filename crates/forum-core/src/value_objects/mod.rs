//! Value objects - immutable types that represent domain concepts

mod id_generator;

pub use id_generator::{IdGenerator, RandomIdGenerator, ID_LEN};
