use crate::github::issues::SelectedIssue;
use anyhow::{Context, Result};
use std::io::Write;

/// Declaration that opens the generated data module.
pub const MODULE_PREFIX: &str = "export const ISSUE_DATA = ";

/// Renders the complete data module for the given selection.
pub fn encode_module(issues: &[SelectedIssue]) -> Result<Vec<u8>> {
    let mut buf = Vec::from(MODULE_PREFIX.as_bytes());
    serde_json::to_writer(&mut buf, issues).context("Failed to encode issue data")?;
    buf.push(b';');
    Ok(buf)
}

/// Writes the data module to `primary` and the selection count to
/// `diagnostic`.
///
/// Nothing reaches `primary` unless the whole module encoded successfully.
pub fn export(
    issues: &[SelectedIssue],
    primary: &mut dyn Write,
    diagnostic: &mut dyn Write,
) -> Result<()> {
    let buf = encode_module(issues)?;

    primary
        .write_all(&buf)
        .context("Failed to write issue data")?;
    primary.flush().context("Failed to flush issue data")?;

    writeln!(diagnostic, "{} issues", issues.len()).context("Failed to write issue count")?;
    Ok(())
}
