use thiserror::Error;

use crate::node::Node;

/// Errors raised at the public boundary of storages, graphs and traversals.
///
/// Every check happens before the first mutation, so an `Err` always leaves the
/// callee untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The id is out of range or currently free
    #[error("invalid node id: {0}")]
    InvalidId(Node),

    /// The arguments are malformed independently of the graph state
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The callee is in a state where the operation is not defined
    #[error("precondition violated: {0}")]
    PreconditionViolation(&'static str),
}

pub type GraphResult<T> = Result<T, GraphError>;
