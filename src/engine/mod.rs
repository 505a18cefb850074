//! The traversal-and-rewrite engine.
//!
//! - `context`: per-file run context, scope-based key assignment and
//!   the deduplicating key registry
//! - `classifier`: decides how a literal may be rewritten based on its
//!   syntactic parent
//! - `template`: replacement-expression rendering
//! - `traversal`: the depth-first walk tying the pieces together

pub mod classifier;
pub mod context;
pub mod template;
pub mod traversal;

pub use context::{ExtractedEntry, RunContext, StaticFieldMode};
pub use traversal::transform;
