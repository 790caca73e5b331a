//! HTML results export.
//!
//! Produces a self-contained HTML file with all CSS inlined, suitable for
//! opening in a browser and printing to PDF.

use anyhow::Result;
use std::path::Path;

use mathchamp_core::report::{QuestionOutcome, ResultsReport};
use mathchamp_core::scoring::AnswerStatus;

use crate::{html_escape, write_output};

/// File name used when exporting results for `candidate`.
///
/// Characters that are unsafe in file names are replaced with `_`.
pub fn results_file_name(candidate: &str) -> String {
    let safe: String = candidate
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let safe = if safe.is_empty() { "candidate".to_string() } else { safe };
    format!("{safe}-math-test-results.html")
}

/// Generate an HTML results page from a report.
pub fn generate_results_html(report: &ResultsReport) -> String {
    let mut html = String::new();
    let name = html_escape(&report.candidate_name);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>Math Test Results - {name}</title>\n"));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Little Math Champion - Test Results</h1>\n");
    html.push_str("<div class=\"candidate\">\n");
    html.push_str(&format!("<h2>Candidate: {name}</h2>\n"));
    html.push_str(&format!(
        "<p>Date: {}</p>\n",
        report.created_at.format("%Y-%m-%d")
    ));
    html.push_str("</div>\n");
    html.push_str("</header>\n");

    // Score
    html.push_str("<section class=\"score\">\n");
    html.push_str(&format!(
        "<h3>Score: {}/{} ({:.1}%)</h3>\n",
        report.score.correct, report.score.answered, report.score.percentage
    ));
    html.push_str(&format!(
        "<p class=\"tier\">{}</p>\n",
        html_escape(report.tier.message())
    ));
    html.push_str(&format!(
        "<p class=\"meta\">{} correct | {} incorrect | {} not answered</p>\n",
        report.count(AnswerStatus::Correct),
        report.count(AnswerStatus::Incorrect),
        report.count(AnswerStatus::Unanswered),
    ));
    html.push_str("</section>\n");

    // Per-question results
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h3>Detailed Results:</h3>\n");
    for outcome in &report.outcomes {
        html.push_str(&question_card(outcome));
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(report).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

fn question_card(outcome: &QuestionOutcome) -> String {
    let answer = match &outcome.user_answer {
        Some(answer) => html_escape(answer),
        None => "Not answered".to_string(),
    };
    format!(
        "<div class=\"question {status}\">\n\
         <div class=\"body\">\n\
         <p class=\"prompt\">Question {number}: {text}</p>\n\
         <p><strong>Your Answer:</strong> {answer}</p>\n\
         <p><strong>Correct Answer:</strong> {correct}</p>\n\
         </div>\n\
         <div class=\"status\">{symbol}</div>\n\
         </div>\n",
        status = outcome.status,
        number = outcome.number,
        text = html_escape(&outcome.display_text),
        correct = outcome.correct_answer,
        symbol = outcome.status.symbol(),
    )
}

/// Write an HTML results page to a file.
pub fn write_results_html(report: &ResultsReport, path: &Path) -> Result<()> {
    write_output(path, &generate_results_html(report))
}

const CSS: &str = r#"
body { font-family: Arial, sans-serif; padding: 40px 20px; max-width: 800px; margin: 0 auto; color: #333; }
header { text-align: center; margin-bottom: 30px; border-bottom: 3px solid #4F46E5; padding-bottom: 20px; }
h1 { font-size: 28px; margin-bottom: 10px; }
.candidate { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 20px; border-radius: 10px; margin: 20px 0; }
.candidate h2, .candidate p { margin: 0 0 10px 0; }
.score { background: #f0f4f8; padding: 20px; border-radius: 10px; margin-bottom: 30px; text-align: center; }
.score h3 { font-size: 24px; margin-bottom: 10px; }
.tier { font-size: 20px; color: #667eea; font-weight: bold; margin: 0; }
.meta { color: #6b7280; }
.question { display: flex; justify-content: space-between; align-items: flex-start; border: 2px solid #d1d5db; border-radius: 8px; padding: 15px; margin-bottom: 15px; }
.question .body { flex: 1; }
.question .prompt { font-weight: bold; font-size: 16px; margin-bottom: 10px; }
.question p { margin: 5px 0; }
.status { font-size: 30px; margin-left: 20px; }
.correct { border-color: #10b981; background: #d1fae5; }
.incorrect { border-color: #ef4444; background: #fee2e2; }
.unanswered { border-color: #d1d5db; background: #f3f4f6; }
pre { overflow-x: auto; padding: 1rem; background: #f3f4f6; border-radius: 8px; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use mathchamp_core::generator::ScriptedSource;
    use mathchamp_core::session::Session;

    fn make_test_report(name: &str) -> ResultsReport {
        // Every question is "? - 5 = 10".
        let session = Session::start(name, 3, &mut ScriptedSource::new([1, 1, 5, 10]))
            .unwrap()
            .submit_answer("15")
            .submit_answer("16")
            .stop_early(None);
        ResultsReport::from_session(&session)
    }

    #[test]
    fn html_report_contains_required_elements() {
        let html = generate_results_html(&make_test_report("Ann"));

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("Candidate: Ann"));
        assert!(html.contains("Score: 1/2 (50.0%)"));
        assert!(html.contains("Nice Try!"));
        assert!(html.contains("Question 1: ? - 5 = 10"));
        assert!(html.contains("Not answered"));
        assert!(html.contains("class=\"question correct\""));
        assert!(html.contains("class=\"question incorrect\""));
        assert!(html.contains("class=\"question unanswered\""));
        assert!(html.contains("✓"));
        assert!(html.contains("✗"));
        assert!(html.contains("⊘"));
    }

    #[test]
    fn candidate_name_is_escaped() {
        let html = generate_results_html(&make_test_report("<b>Bo</b>"));
        assert!(html.contains("&lt;b&gt;Bo&lt;/b&gt;"));
        assert!(!html.contains("<b>Bo</b>"));
    }

    #[test]
    fn results_file_name_is_safe() {
        assert_eq!(results_file_name("Ann"), "Ann-math-test-results.html");
        assert_eq!(
            results_file_name("../etc/Bo"),
            "___etc_Bo-math-test-results.html"
        );
        assert_eq!(results_file_name("  "), "candidate-math-test-results.html");
    }

    #[test]
    fn html_report_write_to_file() {
        let report = make_test_report("Ann");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join(results_file_name("Ann"));

        write_results_html(&report, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
