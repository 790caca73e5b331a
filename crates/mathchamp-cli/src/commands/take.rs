//! The `mathchamp take` and `mathchamp resume` commands.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use mathchamp_core::controller::QuizController;
use mathchamp_core::generator::random_source;
use mathchamp_core::report::ResultsReport;
use mathchamp_core::session::Session;
use mathchamp_core::store::{SessionStore, StoreObserver};
use mathchamp_report::html::{results_file_name, write_results_html};

use super::open_store;
use super::results::print_results;

pub fn execute(
    name: String,
    count: Option<u32>,
    seed: Option<u64>,
    html: bool,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (config, store) = open_store(config_path)?;
    let count = count.unwrap_or(config.default_question_count);

    if store.load().is_some_and(|s| s.is_active()) {
        tracing::info!("replacing the unfinished saved test");
    }

    let mut controller = QuizController::new(
        random_source(seed.or(config.seed)),
        Box::new(StoreObserver::new(&store)),
    );
    controller.start(&name, count)?;

    let mut out = std::io::stdout();
    writeln!(
        out,
        "Good luck, {}! {} question(s). Type :stop to finish early.",
        controller.session().candidate_name(),
        count
    )?;
    run_session(&mut controller, std::io::stdin().lock(), &mut out)?;

    let output = output.unwrap_or(config.output_dir);
    finish(controller.session(), html, &output, &mut out)
}

pub fn resume(html: bool, output: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let (config, store) = open_store(config_path)?;
    let mut out = std::io::stdout();

    let Some(session) = store.load() else {
        writeln!(
            out,
            "No test in progress. Start one with `mathchamp take --name <NAME>`."
        )?;
        return Ok(());
    };
    if !session.is_active() {
        writeln!(
            out,
            "The saved test for {} is already complete. See `mathchamp results`.",
            session.candidate_name()
        )?;
        return Ok(());
    }

    writeln!(
        out,
        "Resuming test for {} at question {} of {}.",
        session.candidate_name(),
        session.current_index() + 1,
        session.questions().len()
    )?;

    let mut controller = QuizController::new(
        random_source(config.seed),
        Box::new(StoreObserver::new(&store)),
    )
    .with_session(session);
    run_session(&mut controller, std::io::stdin().lock(), &mut out)?;

    let output = output.unwrap_or(config.output_dir);
    finish(controller.session(), html, &output, &mut out)
}

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Answer(&'a str),
    Stop(Option<&'a str>),
    Blank,
}

fn classify(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Blank;
    }
    if let Some(rest) = trimmed.strip_prefix(":stop") {
        if rest.is_empty() {
            return Input::Stop(None);
        }
        if rest.starts_with(char::is_whitespace) {
            return Input::Stop(Some(rest.trim()));
        }
    }
    Input::Answer(trimmed)
}

/// Ask every remaining question, reading one answer per line.
///
/// Blank lines re-prompt. `:stop` or end of input finishes early.
pub(crate) fn run_session<R: BufRead, W: Write>(
    controller: &mut QuizController<'_>,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let total = controller.session().questions().len();

    while let Some(question) = controller.session().current_question() {
        writeln!(
            out,
            "\nQuestion {} of {} [{:.0}%]: {}",
            controller.session().current_index() + 1,
            total,
            controller.session().progress() * 100.0,
            question.display_text
        )?;

        loop {
            write!(out, "Your answer: ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                controller.stop_early(None);
                break;
            }
            match classify(&line) {
                Input::Blank => continue,
                Input::Stop(pending) => {
                    controller.stop_early(pending);
                }
                Input::Answer(answer) => {
                    controller.submit_answer(answer);
                }
            }
            break;
        }
    }

    Ok(())
}

fn finish<W: Write>(session: &Session, html: bool, output: &Path, out: &mut W) -> Result<()> {
    if !session.is_complete() {
        return Ok(());
    }
    let report = ResultsReport::from_session(session);
    writeln!(out, "\nTest Complete!")?;
    print_results(&report, out)?;

    if html {
        let path = output.join(results_file_name(&report.candidate_name));
        write_results_html(&report, &path)?;
        writeln!(out, "HTML results: {}", path.display())?;
    }
    Ok(())
}
