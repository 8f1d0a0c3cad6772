use std::{fmt::Display, io, rc::Rc};

use thiserror::Error;

use crate::lexer::tokens::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    source_name: Rc<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, source_name: Rc<String>) -> Self {
        Error {
            internal_error: error_impl,
            source_name,
        }
    }

    /// Turns an `ILLEGAL` token into a reportable error. Returns `None` for any other kind.
    pub fn from_illegal(token: &Token, source_name: Rc<String>) -> Option<Self> {
        if token.kind != TokenKind::Illegal {
            return None;
        }

        Some(Error::new(
            ErrorImpl::IllegalCharacter {
                character: token.literal.clone(),
            },
            source_name,
        ))
    }

    /// The error for the earliest `ILLEGAL` token in `tokens`, if there is one.
    pub fn first_illegal(tokens: &[Token], source_name: Rc<String>) -> Option<Self> {
        tokens
            .iter()
            .find_map(|token| Error::from_illegal(token, Rc::clone(&source_name)))
    }

    pub fn unreadable_source(path: &str, err: &io::Error) -> Self {
        Error::new(
            ErrorImpl::UnreadableSource {
                path: String::from(path),
                message: err.to_string(),
            },
            Rc::new(String::from(path)),
        )
    }

    /// `argv_len` counts the program name, which some platforms leave out.
    pub fn incorrect_arguments(argv_len: usize, source_name: Rc<String>) -> Self {
        Error::new(
            ErrorImpl::IncorrectArguments {
                received: argv_len.saturating_sub(1),
            },
            source_name,
        )
    }

    pub fn get_source_name(&self) -> &str {
        &self.source_name
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::UnreadableSource { .. } => "UnreadableSource",
            ErrorImpl::ReadlineFailure { .. } => "ReadlineFailure",
            ErrorImpl::IncorrectArguments { .. } => "IncorrectArguments",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { character } => ErrorTip::Suggestion(format!(
                "Unrecognised character `{}`",
                character
            )),
            ErrorImpl::UnreadableSource { path, message } => {
                ErrorTip::Suggestion(format!("Could not read `{}`: {}", path, message))
            }
            ErrorImpl::ReadlineFailure { .. } => ErrorTip::None,
            ErrorImpl::IncorrectArguments { received } => ErrorTip::Suggestion(format!(
                "Expected at most 1 argument, received {}",
                received
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source_name, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("illegal character: {character:?}")]
    IllegalCharacter { character: String },
    #[error("unable to read {path:?}: {message}")]
    UnreadableSource { path: String, message: String },
    #[error("readline failure: {message}")]
    ReadlineFailure { message: String },
    #[error("incorrect arguments: expected at most 1, received {received:?}")]
    IncorrectArguments { received: usize },
}
