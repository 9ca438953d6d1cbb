//! Tokenization for scenario-family data files.
//!
//! The lexical conventions are shared by all four data kinds: whitespace is
//! insignificant, `#` and `//` start line comments, `,` and `;` act as plain
//! separators, and the only structural characters are `=`, `{` and `}`.
//! Everything else is an identifier, a number or a double-quoted string.
//!
//! Raw tokenization is done with a vanilla logos lexer ([`tokens::RawToken`]);
//! [`stream::TokenStream`] layers line tracking and the single-slot pushback
//! the grammars rely on for error recovery.

pub mod stream;
pub mod tokens;

pub use stream::TokenStream;
pub use tokens::{Token, TokenKind};
