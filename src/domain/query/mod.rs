//! Query state shared by the list controller and the catalog client.
//!
//! 1. Empty filter fields are unconstrained and never sent upstream
//! 2. Pages are 1-based
//! 3. Page state is always derived from a fetch, never edited directly

pub mod filter;
pub mod page;

pub use filter::FilterState;
pub use page::{PageState, FIRST_PAGE};
