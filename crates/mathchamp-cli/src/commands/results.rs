//! The `mathchamp results` command.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use mathchamp_core::report::ResultsReport;
use mathchamp_core::session::Phase;
use mathchamp_core::store::SessionStore;
use mathchamp_report::html::{results_file_name, write_results_html};

use super::open_store;

pub fn execute(format: String, output: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (config, store) = open_store(config_path)?;
    let Some(session) = store.load() else {
        anyhow::bail!("no saved test found; start one with `mathchamp take --name <NAME>`");
    };
    let report = ResultsReport::from_session(&session);
    let mut out = std::io::stdout();

    match format.as_str() {
        "json" => match output {
            Some(path) => {
                report.save_json(&path)?;
                writeln!(out, "Report saved to: {}", path.display())?;
            }
            None => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        },
        "html" => {
            let dir = output.unwrap_or(config.output_dir);
            let path = dir.join(results_file_name(&report.candidate_name));
            write_results_html(&report, &path)?;
            writeln!(out, "HTML results: {}", path.display())?;
        }
        "text" => {
            if report.phase == Phase::Active {
                writeln!(out, "Test still in progress; scoring the answers so far.")?;
            }
            print_results(&report, &mut out)?;
        }
        other => anyhow::bail!("unknown format: {other} (expected text, json, or html)"),
    }

    Ok(())
}

/// Print the per-question table, the score line, and the tier message.
pub(crate) fn print_results<W: Write>(report: &ResultsReport, out: &mut W) -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Your Answer", "Correct Answer", ""]);

    for outcome in &report.outcomes {
        table.add_row(vec![
            Cell::new(outcome.number),
            Cell::new(&outcome.display_text),
            Cell::new(outcome.user_answer.as_deref().unwrap_or("Not answered")),
            Cell::new(outcome.correct_answer),
            Cell::new(outcome.status.symbol()),
        ]);
    }

    writeln!(out, "\n{}", report.candidate_name)?;
    writeln!(out, "{table}")?;
    writeln!(out, "Score: {}", report.score)?;
    writeln!(out, "{}", report.tier.message())?;
    Ok(())
}
