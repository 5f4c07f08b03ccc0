//! # Snapshot Support
//!
//! Stable, serializable views of a parse and runtime invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: converts parsed lines to a `Snap` (kinds, offsets,
//!   non-empty formatting) for JSON dumps and snapshot tests
//! - **`invariants`**: checks that offsets reconstruct the text and that
//!   formatting spans are in bounds and non-overlapping per category

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
