//! Port interfaces for callback timing

use lapwatch_common::utils::random_hex_id;
use lapwatch_domain::constants::DEFAULT_EXECUTION_ID_BYTES;

/// Source of private timer ids
///
/// Ids must not collide with each other while runs overlap.
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh id
    fn generate(&self) -> String;
}

/// Hex ids drawn from the thread-local CSPRNG
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomIdGenerator {
    bytes: usize,
}

impl RandomIdGenerator {
    /// Draw `bytes` random bytes per id
    ///
    /// Zero is raised to one byte so no id is ever empty.
    pub const fn new(bytes: usize) -> Self {
        Self { bytes: if bytes == 0 { 1 } else { bytes } }
    }

    /// Random bytes drawn per id; ids are twice as many hex characters
    pub const fn bytes(&self) -> usize {
        self.bytes
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_EXECUTION_ID_BYTES)
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        random_hex_id(self.bytes)
    }
}
