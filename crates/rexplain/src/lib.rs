//! Natural-language descriptions for parsed regular-expression patterns.
//!
//! Given a token tree produced by an external regex parser, [`generate`]
//! renders a sequence of English sentences describing what the pattern
//! matches, one [`PatternItem`] per consumed window of tokens. A companion
//! comparator, [`are_equal`], checks two generated documents for semantic
//! equality and is intended for regression testing.
//!
//! # Example
//!
//! ```
//! use rexplain::{Mode, Token, TokenTag, generate};
//!
//! let tokens = [Token::builder()
//!     .tag(TokenTag::LiteralChar)
//!     .text("a")
//!     .build()];
//! let items = generate(&tokens, Mode::Search).unwrap();
//! assert_eq!(items[0].description, "Match a literal character \"a\".");
//! ```

pub mod compare;
pub mod describe;
pub mod types;

pub use compare::are_equal;
pub use describe::{DescribeError, Mode, compute_suggestions, generate};
pub use types::{GroupKind, PatternItem, PatternItems, Token, TokenTag};
