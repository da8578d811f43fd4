//! Opaque id suffixes for threads and comments
//!
//! Repositories compose the stored ids as `thread-<suffix>` and
//! `comment-<suffix>`.

use rand::Rng;

/// Length of a generated suffix
pub const ID_LEN: usize = 16;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Source of unique id suffixes
pub trait IdGenerator: Send + Sync {
    /// Produce a new suffix
    fn generate(&self) -> String;

    /// Produce a full id with the given prefix, e.g. `thread-V1StGXR8Z5jdHi6B`
    fn prefixed(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.generate())
    }
}

/// Random alphanumeric generator
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..ID_LEN)
            .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
            .collect()
    }
}
