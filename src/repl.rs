//! Interactive read-lex-print loop.

use std::rc::Rc;

use log::{debug, info};
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::Lexer,
};

pub const PROMPT: &str = ">> ";

/// Lexes one line and renders every token before `EOF`.
pub fn format_tokens(line: &str) -> Vec<String> {
    Lexer::new(line)
        .take_while(|token| !token.is_eof())
        .map(|token| token.to_string())
        .collect()
}

pub fn start() -> Result<(), Error> {
    let source_name = Rc::new(String::from("repl"));
    let readline_error = |err: ReadlineError| {
        Error::new(
            ErrorImpl::ReadlineFailure {
                message: err.to_string(),
            },
            Rc::clone(&source_name),
        )
    };

    info!("starting repl session");
    let mut rl = DefaultEditor::new().map_err(readline_error)?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line.as_str());

                for rendered in format_tokens(&line) {
                    println!("{}", rendered);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                debug!("repl input closed");
                break;
            }
            Err(err) => return Err(readline_error(err)),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::format_tokens;

    #[test]
    fn test_format_tokens_let_statement() {
        assert_eq!(
            format_tokens("let five = 5;"),
            vec![
                "{Type:LET Literal:let}",
                "{Type:IDENT Literal:five}",
                "{Type:ASSIGN Literal:=}",
                "{Type:INT Literal:5}",
                "{Type:SEMICOLON Literal:;}",
            ]
        );
    }

    #[test]
    fn test_format_tokens_blank_line() {
        assert!(format_tokens("   \t").is_empty());
    }

    #[test]
    fn test_format_tokens_illegal() {
        assert_eq!(
            format_tokens("a @"),
            vec!["{Type:IDENT Literal:a}", "{Type:ILLEGAL Literal:@}"]
        );
    }
}
