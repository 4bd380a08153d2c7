//! Lexical analysis for Lox source text.
//!
//! [`Scanner`] turns a source string into a `Vec<Token>` ending in exactly one
//! `Eof` token. Lexical errors go to an [`ErrorReporter`] and never stop the scan.

pub mod error;
pub mod lexer;
pub mod token;

pub use error::{CollectingReporter, ConsoleReporter, Diagnostic, ErrorReporter, LexError};
pub use lexer::Scanner;
pub use token::{Literal, Token, TokenType};
