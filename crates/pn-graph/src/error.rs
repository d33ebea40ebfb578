//! Network-level error kinds.
//!
//! None of these abort a computation: the engine degrades to best-effort
//! output on malformed input. They exist so validation and the project
//! loader can name what is wrong with a diagram.

use pn_core::DrawId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// No discharge node found; path decomposition falls back to a single
    /// path over the whole sequence.
    #[error("network has no discharge node")]
    MissingSource,

    /// A pipe references a fitting that does not exist; the pipe is skipped.
    #[error("pipe {pipe} references missing fitting {node}")]
    UnresolvedGeometry { pipe: DrawId, node: DrawId },

    /// Positional tee/outlet pairing cannot cover every tee. The pairing
    /// rule is positional (k-th tee to k-th outlet) and only well-defined
    /// for mostly-linear networks with single-level branching.
    #[error("{tees} tees paired against {outlets} outlets")]
    BranchMismatch { tees: usize, outlets: usize },
}
