//! Marker gene occurrence detection.

/// Decide whether `gene` is present in `sequence` under `threshold`.
///
/// Occurrences may overlap: after a match at position `p` the search resumes
/// one character later. Every occurrence adds the gene's full length to a
/// running total, and the gene counts as present once that total reaches
/// `threshold`. The total is checked only after a match, so a threshold of
/// zero still needs one occurrence.
///
/// Empty genes and empty sequences are never present.
pub fn is_present(sequence: &str, gene: &str, threshold: usize) -> bool {
    let Some(first) = gene.chars().next() else {
        return false;
    };
    if sequence.is_empty() {
        return false;
    }

    let gene_len = gene.chars().count();
    let step = first.len_utf8();
    let mut matched_len = 0usize;
    let mut start = 0usize;

    while let Some(offset) = sequence[start..].find(gene) {
        matched_len += gene_len;
        if matched_len >= threshold {
            return true;
        }
        // Next char boundary after the match start; `step` is the width of
        // the matched first character.
        start += offset + step;
    }

    false
}
