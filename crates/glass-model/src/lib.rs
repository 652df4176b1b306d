pub mod component;
pub mod matching;

pub use component::ComponentEntry;
pub use matching::{ComponentMatch, ConfidenceTier, MatchKind};
