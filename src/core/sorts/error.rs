use thiserror::Error;

/// Errors produced by the fallible sort entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// Two elements could not be ordered relative to each other,
    /// e.g. a NaN encountered while sorting floats.
    #[error("elements at indices {left} and {right} are not comparable")]
    IncomparableElements { left: usize, right: usize },
}
