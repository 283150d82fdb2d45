use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Immutable DNA sequence shared read-only by every worker.
///
/// Cloning is cheap: clones point at the same buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnaSequence(Arc<str>);

impl DnaSequence {
    /// Wrap a sequence. Case is preserved as given.
    pub fn new(sequence: impl Into<Arc<str>>) -> Self {
        Self(sequence.into())
    }

    /// Borrow the underlying characters.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the sequence holds no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for DnaSequence {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for DnaSequence {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DnaSequence {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Disease probability as an integer percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Probability(u8);

impl Probability {
    /// Highest representable probability.
    pub const MAX: Self = Self(100);

    /// Construct from a percentage, clamping anything above 100.
    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    /// Percentage value.
    pub fn percent(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// One disease-line before scoring: a code and its marker genes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MarkerPanel {
    /// Disease identifier (first token of the line).
    pub code: String,
    /// Marker genes (third token onward). Order does not affect scoring.
    pub genes: Vec<String>,
}

impl MarkerPanel {
    /// Split a disease-line into code and genes.
    ///
    /// The second token is a separator field and is discarded. Returns `None`
    /// when the line has no tokens at all.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let code = tokens.next()?.to_string();
        let genes = tokens.skip(1).map(str::to_string).collect();
        Some(Self { code, genes })
    }

    /// Attach the computed probability, producing a scored disease.
    pub fn into_disease(self, probability: Probability) -> Disease {
        Disease {
            code: self.code,
            genes: self.genes,
            probability,
        }
    }
}

/// A scored disease.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Disease {
    /// Disease identifier.
    pub code: String,
    /// Marker genes the probability was computed from.
    pub genes: Vec<String>,
    /// Computed probability.
    pub probability: Probability,
}
