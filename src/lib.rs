//! First pass of the gasm assembler: sorts the lines of an assembly source into
//! labels, directives and operations.
//!
//! ```
//! use gasm::{lexer, tokens::Category};
//!
//! let result = lexer::classify_str("loop:\n  .org $8000\nLDA #$01 ; load\n").unwrap();
//! assert_eq!(result.len(), 3);
//! assert_eq!(result.lines()[1].category(), Category::Directive);
//! assert_eq!(result.lines()[2].text(), "LDA #$01");
//! ```
pub mod args;
pub mod feedback;
pub mod files;
pub mod lexer;
pub mod tokens;

pub use lexer::{LexError, classify, classify_str};
pub use tokens::{Category, ClassificationResult, ClassifiedLine};
