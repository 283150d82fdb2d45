use super::detector::is_present;
use super::types::Probability;

/// Percentage of `genes` present in `sequence` under `threshold`.
///
/// An empty gene list scores 0.
pub fn score<G: AsRef<str>>(sequence: &str, genes: &[G], threshold: usize) -> Probability {
    if genes.is_empty() {
        return Probability::default();
    }

    let matched = genes
        .iter()
        .filter(|gene| is_present(sequence, gene.as_ref(), threshold))
        .count();

    percentage(matched, genes.len())
}

/// Convert `matched` out of `total` into a rounded percentage.
pub fn percentage(matched: usize, total: usize) -> Probability {
    if total == 0 {
        return Probability::default();
    }
    let raw = matched as f64 / total as f64 * 100.0;
    round_half_up(raw)
}

/// `floor(raw + 0.5)`, clamped to 100.
pub(crate) fn round_half_up(raw: f64) -> Probability {
    let rounded = (raw + 0.5).floor();
    if rounded >= 100.0 {
        Probability::MAX
    } else if rounded <= 0.0 {
        Probability::default()
    } else {
        Probability::new(rounded as u8)
    }
}
