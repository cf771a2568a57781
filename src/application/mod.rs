// Application layer - the ledger service every client talks to,
// plus the summaries derived from a filtered view.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
