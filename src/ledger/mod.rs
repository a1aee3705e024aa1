pub mod ledger;
pub mod summary;

pub use ledger::Ledger;
pub use summary::{CategoryTotal, Granularity, TimeSummary};
