//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Whitespace skipping
//! - Recognition of keywords, identifiers and integer literals
//! - One-character lookahead for `==` and `!=`
//! - Illegal characters, which are emitted as tokens rather than errors

pub mod lexer;
pub mod tokens;
