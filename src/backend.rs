//! Numeric backend configuration.
//!
//! The only process-wide knob is the worker-thread count used for
//! parallelizable kernels. Instead of a bare mutable global it is an
//! explicit config value installed once at startup; afterwards the pool
//! width is read-only.

use rayon::ThreadPoolBuildError;

/// Worker-pool configuration for the numeric backend.
///
/// `num_threads == 0` lets the pool size itself from the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threading {
    pub num_threads: usize,
}

impl Default for Threading {
    fn default() -> Self {
        Self { num_threads: 0 }
    }
}

impl Threading {
    pub fn new(num_threads: usize) -> Self {
        Self { num_threads }
    }

    /// Build the global worker pool from this configuration.
    ///
    /// Must be called at most once, before any parallel work runs; a second
    /// call (or a call after the default pool has been used) fails.
    pub fn install(self) -> Result<(), ThreadPoolBuildError> {
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .build_global()
    }

    /// Effective worker count of the active pool.
    pub fn current() -> usize {
        rayon::current_num_threads()
    }
}
