//! The `mathchamp init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("mathchamp.toml").exists() {
        println!("mathchamp.toml already exists, skipping.");
    } else {
        std::fs::write("mathchamp.toml", SAMPLE_CONFIG)?;
        println!("Created mathchamp.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit mathchamp.toml to change the default number of questions");
    println!("  2. Run: mathchamp take --name <NAME>");
    println!("  3. Run: mathchamp print --count 20 --answer-key");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# mathchamp configuration

# Questions per test when --count is not given
default_question_count = 10

# Where an unfinished test is kept between runs
state_file = ".mathchamp/session.json"

# Where HTML results are exported
output_dir = "./mathchamp-results"

# Uncomment for reproducible questions
# seed = 42
"#;
