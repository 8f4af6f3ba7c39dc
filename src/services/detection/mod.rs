// Detection Module
// Heuristic authenticity scoring organized into specialized submodules:
// - lexical: vocabulary diversity and stop-word density
// - repetition: recurring fixed-length phrase windows
// - structure: sentence-length variance
// - sensitivity: tier breakpoints and materiality gate
// - aggregation: composite score and report sections

pub mod lexical;
pub mod repetition;
pub mod structure;
pub mod sensitivity;
pub mod aggregation;

// Re-export commonly used functions
pub use lexical::{density, diversity};
pub use repetition::{find_repeated_phrases, repetition};
pub use structure::structure;
pub use sensitivity::{classify_tier, contribution_percent, is_forged, is_material};
pub use aggregation::{compose, ComponentResults};
