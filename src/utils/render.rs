use std::io::Write;

use anyhow::Result;
use serde::Serialize;

pub const DOCUMENT_SEPARATOR: &str = "---";

/// Writes every present manifest as a YAML document, each one followed by a
/// `---` line. Absent manifests are skipped.
pub fn render_manifests<T: Serialize>(out: &mut impl Write, manifests: &[Option<T>]) -> Result<()> {
    for manifest in manifests.iter().flatten() {
        let yaml = serde_yaml::to_string(manifest)?;

        write!(out, "{yaml}")?;

        if !yaml.ends_with('\n') {
            writeln!(out)?;
        }

        writeln!(out, "{DOCUMENT_SEPARATOR}")?;
    }

    Ok(())
}
