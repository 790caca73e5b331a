//! The `mathchamp print` command.

use std::path::PathBuf;

use anyhow::Result;

use mathchamp_core::config::load_config_from;
use mathchamp_core::generator::random_source;
use mathchamp_core::worksheet::Worksheet;
use mathchamp_report::worksheet::{
    generate_worksheet_html, generate_worksheet_text, write_worksheet_html, write_worksheet_text,
};

pub fn execute(
    count: Option<u32>,
    seed: Option<u64>,
    format: String,
    answer_key: bool,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "html"),
        "unknown format: {format} (expected text or html)"
    );

    let config = load_config_from(config_path.as_deref())?;
    let count = count.unwrap_or(config.default_question_count);
    let mut rng = random_source(seed.or(config.seed));
    let worksheet = Worksheet::generate(count, rng.as_mut())?;

    match (format.as_str(), output) {
        ("html", Some(path)) => {
            write_worksheet_html(&worksheet, answer_key, &path)?;
            println!("Worksheet saved to: {}", path.display());
        }
        ("html", None) => println!("{}", generate_worksheet_html(&worksheet, answer_key)),
        (_, Some(path)) => {
            write_worksheet_text(&worksheet, answer_key, &path)?;
            println!("Worksheet saved to: {}", path.display());
        }
        (_, None) => print!("{}", generate_worksheet_text(&worksheet, answer_key)),
    }

    Ok(())
}
