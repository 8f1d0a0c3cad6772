use std::{env, process, rc::Rc, time::Instant};

use log::debug;
use monkey::{
    display_error,
    errors::errors::Error,
    lexer::lexer::tokenize,
    read_source, repl,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let result = match args.len() {
        1 => repl::start(),
        2 => lex_file(&args[1]),
        n => Err(Error::incorrect_arguments(n, Rc::new(String::from("monkey")))),
    };

    if let Err(error) = result {
        display_error(&error);
        process::exit(1);
    }
}

fn lex_file(file_path: &str) -> Result<(), Error> {
    let file_name = Rc::new(String::from(file_path));

    let file_contents = read_source(file_path)?;

    debug!("lexing {} ({} bytes)", file_path, file_contents.len());

    let start = Instant::now();
    let tokens = tokenize(&file_contents);
    let elapsed = start.elapsed();

    for token in &tokens {
        println!("{}", token);
    }

    println!("Tokenized in {:?}", elapsed);

    match Error::first_illegal(&tokens, file_name) {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
