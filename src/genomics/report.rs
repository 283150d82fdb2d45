use anyhow::{anyhow, Result};
use std::io::Write;

use super::Disease;

/// Write ranked diseases as `<code>-><probability>%` lines.
pub fn write_ranking<W: Write>(writer: &mut W, diseases: &[Disease]) -> Result<()> {
    for disease in diseases {
        writeln!(writer, "{}->{}", disease.code, disease.probability)?;
    }

    writer.flush()?;
    Ok(())
}

/// Render ranked diseases into a string (useful for tests and snapshots).
pub fn render_ranking(diseases: &[Disease]) -> Result<String> {
    let mut buffer = Vec::new();
    write_ranking(&mut buffer, diseases)?;
    String::from_utf8(buffer).map_err(|_| anyhow!("rendered ranking is not valid UTF-8"))
}

/// Content hash of the rendered ranking.
///
/// Two runs produced the same report exactly when their fingerprints match.
pub fn fingerprint(diseases: &[Disease]) -> Result<blake3::Hash> {
    let rendered = render_ranking(diseases)?;
    Ok(blake3::hash(rendered.as_bytes()))
}
