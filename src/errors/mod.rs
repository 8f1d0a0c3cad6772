//! Error types for the lexer's drivers.
//!
//! The lexer itself never fails; illegal input becomes `ILLEGAL` tokens.
//! This module defines the errors raised around it:
//!
//! - Illegal characters, once a consumer decides to reject them
//! - Unreadable source files
//! - REPL input failures
//! - Error formatting and display functionality

pub mod errors;
