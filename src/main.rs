mod cli;
mod error_handling;
mod grammar;
mod parser;
mod recognizer;

use clap::Parser;

fn main() {
    let args = cli::Cli::parse();

    let parsed = match &args.file {
        Some(path) => parser::parse_file(path),
        None => parser::parse_stdin()
    };

    let (grammar, test_strings) = match parsed {
        Ok(input) => input,
        Err(errors) => {
            for error in errors {
                eprintln!("{}", error);
            }
            std::process::exit(1);
        }
    };

    for test_string in &test_strings {
        if recognizer::membership(&grammar, test_string) {
            println!("yes");
        } else {
            println!("no");
        }
    }
}
