//! Placeholder substitution and stub renaming.

pub mod operation;
pub mod processor;
pub mod readme;
pub mod stub;
pub mod tokens;

pub use operation::RewriteOperation;
pub use processor::RewriteProcessor;
pub use readme::remove_delete_blocks;
pub use stub::StubKind;
pub use tokens::ReplacementSet;
