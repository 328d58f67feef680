use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

/// Pretty-printed JSON with sorted keys.
///
/// Going through `serde_json::Value` sorts every object's keys, so two runs
/// over the same input are byte-identical.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let value = serde_json::to_value(report)?;
        let mut output = serde_json::to_string_pretty(&value)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
