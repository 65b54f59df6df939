// src/progress.rs
/// Lightweight progress reporting for long batch runs.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of genes (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one gene finished, with its match count.
    fn item_done(&mut self, _gene: &str, _count: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
