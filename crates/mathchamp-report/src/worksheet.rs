//! Printable worksheet rendering, as HTML or plain text.

use anyhow::Result;
use std::path::Path;

use mathchamp_core::worksheet::Worksheet;

use crate::{html_escape, write_output};

const TITLE: &str = "Little Math Champion - Practice Test";

/// Render a worksheet as plain text.
pub fn generate_worksheet_text(worksheet: &Worksheet, answer_key: bool) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&format!("Total Questions: {}\n", worksheet.len()));
    out.push_str("Name: ______________________________ Date: ______________________\n\n");

    let width = worksheet.len().to_string().len();
    for (i, q) in worksheet.questions.iter().enumerate() {
        out.push_str(&format!(
            "{:>width$}. {}    ________\n",
            i + 1,
            q.display_text
        ));
    }

    if answer_key {
        out.push_str("\nAnswer Key\n");
        for (i, q) in worksheet.questions.iter().enumerate() {
            out.push_str(&format!("{:>width$}. {}\n", i + 1, q.correct_answer));
        }
    }
    out
}

/// Render a worksheet as a printable HTML page.
pub fn generate_worksheet_html(worksheet: &Worksheet, answer_key: bool) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{TITLE}</title>\n"));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{TITLE}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"total\">Total Questions: {}</p>\n",
        worksheet.len()
    ));
    html.push_str(
        "<p class=\"fill-in\">Name: ______________________________ Date: ______________________</p>\n",
    );
    html.push_str("</header>\n");

    html.push_str("<ol class=\"questions\">\n");
    for q in &worksheet.questions {
        html.push_str(&format!(
            "<li><span class=\"text\">{}</span><span class=\"line\"></span></li>\n",
            html_escape(&q.display_text)
        ));
    }
    html.push_str("</ol>\n");

    if answer_key {
        html.push_str("<section class=\"answer-key\">\n<h2>Answer Key</h2>\n<ol>\n");
        for q in &worksheet.questions {
            html.push_str(&format!("<li>{}</li>\n", q.correct_answer));
        }
        html.push_str("</ol>\n</section>\n");
    }

    html.push_str("</body>\n</html>");
    html
}

/// Write a worksheet as HTML.
pub fn write_worksheet_html(worksheet: &Worksheet, answer_key: bool, path: &Path) -> Result<()> {
    write_output(path, &generate_worksheet_html(worksheet, answer_key))
}

/// Write a worksheet as plain text.
pub fn write_worksheet_text(worksheet: &Worksheet, answer_key: bool, path: &Path) -> Result<()> {
    write_output(path, &generate_worksheet_text(worksheet, answer_key))
}

const CSS: &str = r#"
body { font-family: Arial, sans-serif; padding: 32px; background: white; }
header { text-align: center; margin-bottom: 32px; }
h1 { font-size: 30px; margin-bottom: 8px; }
.total { font-size: 18px; }
.fill-in { margin-top: 16px; border-top: 2px solid #d1d5db; border-bottom: 2px solid #d1d5db; padding: 8px 0; font-size: 14px; }
.questions li { font-size: 20px; margin-bottom: 24px; }
.questions .text { display: inline-block; min-width: 10em; }
.questions .line { display: inline-block; border-bottom: 2px solid #9ca3af; width: 6em; height: 1.5em; vertical-align: bottom; }
.answer-key { page-break-before: always; }
@media print { body { padding: 0; } }
"#;
