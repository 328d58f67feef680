//! Line-by-line Dockerfile scanning.
//!
//! - `classifier`: tags each raw line as ignored, instruction, invalid or unrecognized.
//! - `matcher`: applies an instruction's rules to its argument.
//! - `file_scanner`: drives the single pass and the whole-file post-processing.

mod classifier;
mod file_scanner;
mod matcher;
mod types;

pub use classifier::LineClassifier;
pub use file_scanner::FileScanner;
pub use matcher::match_rules;
pub use types::{LineOutcome, ParsedInstruction, RawLine};
