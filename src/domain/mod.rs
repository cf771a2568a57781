mod demo;
mod filter;
mod ledger;
mod money;
mod transaction;

pub use demo::*;
pub use filter::*;
pub use ledger::*;
pub use money::*;
pub use transaction::*;
