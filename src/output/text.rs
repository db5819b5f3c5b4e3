use std::fmt::Write;

use crate::error::Result;

use super::{OutputFormatter, RunSummary};

pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &RunSummary) -> Result<String> {
        let mut output = String::new();

        for page in &summary.pages {
            let _ = write!(output, "page {}: {}", page.number, page.title);
            if !page.series.is_empty() {
                let _ = write!(output, " [{}]", page.series.join(", "));
            }
            output.push('\n');
        }

        let source = summary
            .config
            .as_ref()
            .map_or_else(|| "built-in layout".to_string(), |p| p.display().to_string());
        let _ = writeln!(
            output,
            "Wrote {} page{} to {} ({source})",
            summary.pages.len(),
            if summary.pages.len() == 1 { "" } else { "s" },
            summary.output.display()
        );
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
