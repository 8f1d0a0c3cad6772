#![allow(clippy::module_inception)]

use std::fs::read_to_string;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod repl;

pub fn read_source(path: &str) -> Result<String, Error> {
    read_to_string(path).map_err(|err| Error::unreadable_source(path, &err))
}

/// Renders an error for the terminal.
pub fn format_error(error: &Error) -> String {
    /*
        Error: IllegalCharacter (Unrecognised character `@`)
        -> main.monkey
    */

    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n-> {}", header, error.get_source_name())
}

pub fn display_error(error: &Error) {
    eprintln!("{}", format_error(error));
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};

    #[test]
    fn test_format_error_with_tip() {
        let error = Error::new(
            ErrorImpl::IllegalCharacter {
                character: "@".to_string(),
            },
            Rc::new("main.monkey".to_string()),
        );

        assert_eq!(
            super::format_error(&error),
            "Error: IllegalCharacter (Unrecognised character `@`)\n-> main.monkey"
        );
    }

    #[test]
    fn test_read_source_missing_file() {
        let path = "tests/does_not_exist.monkey";
        let error = super::read_source(path).unwrap_err();

        assert_eq!(error.get_error_name(), "UnreadableSource");
        assert_eq!(error.get_source_name(), path);
        assert!(matches!(
            error.get_internal_error(),
            ErrorImpl::UnreadableSource { path: p, .. } if p == path
        ));
    }

    #[test]
    fn test_format_error_without_tip() {
        let error = Error::new(
            ErrorImpl::ReadlineFailure {
                message: "closed".to_string(),
            },
            Rc::new("repl".to_string()),
        );

        assert_eq!(
            super::format_error(&error),
            "Error: ReadlineFailure\n-> repl"
        );
    }
}
