use serde::Serialize;

use crate::error::Result;

use super::{OutputFormatter, RunSummary};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    output: String,
    config: Option<String>,
    page_count: usize,
    pages: &'a [crate::report::PageInfo],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &RunSummary) -> Result<String> {
        let output = JsonOutput {
            output: summary.output.display().to_string(),
            config: summary.config.as_ref().map(|p| p.display().to_string()),
            page_count: summary.pages.len(),
            pages: &summary.pages,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
