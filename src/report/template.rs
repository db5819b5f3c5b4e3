//! HTML scaffolding around the rendered chart pages.
//!
//! Every page is a `<section class="page">`; the print stylesheet breaks after
//! each section so a printed or PDF-exported report has one chart per sheet.

use std::fmt::Write;

use crate::output::svg::html_escape;

const STYLE: &str = r"    <style>
        :root {
            --color-bg: #ffffff;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-axis: #334155;
            --color-border: #e2e8f0;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'DejaVu Sans', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            padding: 2rem;
        }
        .page {
            max-width: 900px;
            margin: 0 auto 2rem;
            padding-bottom: 1rem;
            border-bottom: 1px solid var(--color-border);
            page-break-after: always;
            break-after: page;
        }
        .page:last-of-type { page-break-after: auto; break-after: auto; }
        .page svg { width: 100%; height: auto; }
        .page-number { font-size: 0.75rem; color: var(--color-text-muted); text-align: right; }
        .footer { font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
        @media print {
            body { padding: 0; }
            .page { border: none; margin: 0; }
            .footer { display: none; }
        }
    </style>
";

/// Document head and opening `<body>`.
#[must_use]
pub fn header(title: &str) -> String {
    let mut output = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"UTF-8\">\n",
    );
    let _ = writeln!(output, "    <title>{}</title>", html_escape(title));
    output.push_str(STYLE);
    output.push_str("</head>\n<body>\n");
    output
}

/// One page section wrapping a rendered SVG figure.
#[must_use]
pub fn page(number: usize, svg: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(output, r#"<section class="page" id="page-{number}">"#);
    for line in svg.lines() {
        let _ = writeln!(output, "    {line}");
    }
    let _ = writeln!(output, r#"    <div class="page-number">{number}</div>"#);
    output.push_str("</section>\n");
    output
}

/// Document trailer closing `<body>` and `<html>`.
#[must_use]
pub fn footer(page_count: usize) -> String {
    format!(
        "<div class=\"footer\">{page_count} page{} generated by <strong>hepplot</strong></div>\n</body>\n</html>\n",
        if page_count == 1 { "" } else { "s" }
    )
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
