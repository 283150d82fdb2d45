//! Marker-gene screening primitives: the data model, occurrence detection,
//! probability scoring, and the text formats around them.

mod detector;
mod input;
mod probability;
mod report;
mod types;

pub use detector::is_present;
pub use input::{parse_input, read_input, InputError, ScreeningInput};
pub use probability::{percentage, score};
pub use report::{fingerprint, render_ranking, write_ranking};
pub use types::{Disease, DnaSequence, MarkerPanel, Probability};
