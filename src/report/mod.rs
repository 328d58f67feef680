mod aggregator;
mod finding;

pub use aggregator::{Channel, Report, ReportAggregator, Summary};
pub use finding::{Finding, INVALID_INSTRUCTION_MESSAGE};
