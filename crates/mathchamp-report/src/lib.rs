//! mathchamp-report: HTML results export and printable worksheets.

pub mod html;
pub mod worksheet;

/// Escape a string for safe HTML insertion.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Write rendered output, creating parent directories as needed.
pub(crate) fn write_output(path: &std::path::Path, content: &str) -> anyhow::Result<()> {
    use anyhow::Context;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "written");
    Ok(())
}
