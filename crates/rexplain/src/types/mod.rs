//! Input token model and output document types.

mod pattern_item;
mod token;

pub use pattern_item::{PatternItem, PatternItems};
pub use token::{GroupKind, Token, TokenTag};
