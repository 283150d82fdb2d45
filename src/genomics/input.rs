use std::fs;
use std::path::Path;

use thiserror::Error;

use super::types::DnaSequence;

/// Errors raised while loading a screening input file.
#[derive(Debug, Error)]
pub enum InputError {
    /// Underlying I/O failure.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A required header line is missing.
    #[error("missing {0} line")]
    MissingLine(&'static str),

    /// A header field is not a non-negative integer.
    #[error("invalid {field} '{value}': expected a non-negative integer")]
    InvalidInteger {
        /// Header field being parsed.
        field: &'static str,
        /// Offending text.
        value: String,
    },

    /// Fewer disease lines than announced.
    #[error("expected {expected} disease lines, found {found}")]
    MissingDiseaseLines {
        /// Count announced on line 3.
        expected: usize,
        /// Lines actually present.
        found: usize,
    },

    /// A disease line lacks the code, separator, or at least one gene.
    #[error("disease line {line_number} has {tokens} tokens, expected at least 3")]
    MalformedDiseaseLine {
        /// 1-based line number within the file.
        line_number: usize,
        /// Number of whitespace-separated tokens found.
        tokens: usize,
    },
}

/// Parsed screening input: the core's input contract.
#[derive(Debug, Clone)]
pub struct ScreeningInput {
    /// Minimum cumulative matched length for a gene to count as present.
    pub threshold: usize,
    /// Sequence scanned for marker genes.
    pub sequence: DnaSequence,
    /// Raw disease lines, in file order.
    pub disease_lines: Vec<String>,
}

const HEADER_LINES: usize = 3;

/// Read and parse an input file.
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<ScreeningInput, InputError> {
    let contents = fs::read_to_string(path)?;
    parse_input(&contents)
}

/// Parse the three-line header followed by the disease lines.
///
/// Lines after the announced disease count are ignored.
pub fn parse_input(text: &str) -> Result<ScreeningInput, InputError> {
    let mut lines = text.lines().map(str::trim);

    let threshold = parse_count(lines.next(), "threshold")?;
    let sequence = lines.next().ok_or(InputError::MissingLine("sequence"))?;
    let expected = parse_count(lines.next(), "disease count")?;

    let mut disease_lines = Vec::with_capacity(expected);
    for (idx, line) in lines.take(expected).enumerate() {
        let tokens = line.split_whitespace().count();
        if tokens < 3 {
            return Err(InputError::MalformedDiseaseLine {
                line_number: HEADER_LINES + idx + 1,
                tokens,
            });
        }
        disease_lines.push(line.to_string());
    }

    if disease_lines.len() < expected {
        return Err(InputError::MissingDiseaseLines {
            expected,
            found: disease_lines.len(),
        });
    }

    Ok(ScreeningInput {
        threshold,
        sequence: DnaSequence::from(sequence),
        disease_lines,
    })
}

fn parse_count(line: Option<&str>, field: &'static str) -> Result<usize, InputError> {
    let value = line.ok_or(InputError::MissingLine(field))?;
    value.parse().map_err(|_| InputError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}
