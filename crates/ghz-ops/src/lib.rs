//! # ghz-ops
//!
//! The six gateway operations: input validation, upstream orchestration,
//! and response shaping.
//!
//! Every operation validates its input first — a caller-supplied parameter
//! outside its declared bounds is rejected as [`OpsError::InvalidInput`]
//! before any upstream request is issued. Upstream failures propagate
//! unchanged; no operation retries, degrades, or returns partial data.

pub mod lookup;
pub mod overview;
pub mod report;
pub mod search;
pub mod top;
pub mod volcano_search;

mod error;
mod validate;

pub use error::OpsError;
pub use lookup::lookup;
pub use overview::overview;
pub use report::{ReportInput, report};
pub use search::{SearchInput, search};
pub use top::{Period, TopInput, top};
pub use volcano_search::{VolcanoSearchInput, volcano_search};
