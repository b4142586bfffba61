use thiserror::Error;

/// Errors raised while resolving breakpoint queries.
///
/// Apart from [`BreakpointError::Config`], these point at a bad query from the
/// caller: one naming a breakpoint that doesn't exist, or one that cannot be
/// expressed. Retrying with the same inputs fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakpointError {
    /// `greaterThan` needed the breakpoint after this one, but it is already
    /// the largest.
    #[error("There is no breakpoint larger than {breakpoint}")]
    NoLargerBreakpoint { breakpoint: String },

    /// Props with none of the recognized query fields set.
    #[error("Unexpected breakpoint props: {descriptor}")]
    UnrecognizedDescriptor { descriptor: String },

    /// A query or render width names a breakpoint missing from the map.
    #[error("Unknown breakpoint: {breakpoint}")]
    UnknownBreakpoint { breakpoint: String },

    /// Breakpoint configuration that failed to parse.
    #[error("Invalid breakpoint configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for BreakpointError {
    fn from(err: serde_json::Error) -> Self {
        BreakpointError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BreakpointError>;
