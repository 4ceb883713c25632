/*
    This module reads the rule-and-query input format
*/

use std::fmt::Display;
use std::fs::File;
use std::io::BufRead;
use std::path::PathBuf;

use crate::error_handling::*;
use crate::grammar::{Grammar, GrammarError, Rule};

#[derive(Debug)]
pub enum ParseErrorType {
    // A count line that does not hold a non-negative integer
    InvalidCount(String),
    // The input ended before the promised number of lines
    UnexpectedEnd,
    // A rule line without both a variable and a product
    MissingField,
    // A rule line with extra text after the product
    TrailingField(String),
    // The rules do not form a CNF grammar
    BadGrammar(GrammarError),
    // There was an issue with reading the input
    FileError(std::io::Error)
}

impl ErrorType for ParseErrorType {}

impl PartialEq for ParseErrorType {
    fn eq(&self, other: &Self) -> bool {
        if let ParseErrorType::FileError(a) = self {
            if let ParseErrorType::FileError(b) = other {
                return a.kind() == b.kind();
            }
        }
        if let ParseErrorType::BadGrammar(a) = self {
            if let ParseErrorType::BadGrammar(b) = other {
                return a == b;
            }
        }
        return std::mem::discriminant(self) == std::mem::discriminant(other);
    }
}

impl Display for ParseErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorType::InvalidCount(text) => write!(f, "Expected a count, found `{}`", text),
            ParseErrorType::UnexpectedEnd => write!(f, "Input ended before the promised number of lines"),
            ParseErrorType::MissingField => write!(f, "Expected `<variable> <product>`"),
            ParseErrorType::TrailingField(text) => write!(f, "Unexpected `{}` after the product", text),
            ParseErrorType::BadGrammar(e) => write!(f, "{}", e),
            ParseErrorType::FileError(e) => write!(f, "File error: {}", e)
        }
    }
}

pub type ParseError = Error<ParseErrorType>;
pub type ParseErrors = Errors<ParseErrorType>;

pub type Result<T> = std::result::Result<T, ParseErrorType>;
pub type LineResult<T> = std::result::Result<T, ParseError>;
pub type InputResult<T> = std::result::Result<T, ParseErrors>;

fn io_error(error: std::io::Error, source: &PathBuf) -> ParseError {
    ParseError {
        location: Location::whole_input(source),
        error: ParseErrorType::FileError(error)
    }
}

fn parse_count(line: &str) -> Result<usize> {
    line.trim().parse().map_err(|_| ParseErrorType::InvalidCount(line.trim().to_string()))
}

fn parse_rule(line: &str) -> Result<Rule> {
    let mut fields = line.split_whitespace();

    let variable = fields.next().ok_or(ParseErrorType::MissingField)?;
    let product = fields.next().ok_or(ParseErrorType::MissingField)?;
    if let Some(extra) = fields.next() {
        return Err(ParseErrorType::TrailingField(extra.to_string()));
    }

    return Rule::new(variable, product).map_err(ParseErrorType::BadGrammar);
}

// Hands out input lines one at a time while tracking the line number for
// error locations
struct NumberedLines<'a, R: BufRead> {
    source: &'a PathBuf,
    number: usize,
    lines: std::io::Lines<R>
}

impl<'a, R: BufRead> NumberedLines<'a, R> {
    fn new(reader: R, source: &'a PathBuf) -> Self {
        NumberedLines {
            source,
            number: 0,
            lines: reader.lines()
        }
    }

    fn location(&self) -> Location {
        Location {
            source: self.source.clone(),
            line: self.number
        }
    }

    fn next_line(&mut self) -> LineResult<String> {
        self.number += 1;
        match self.lines.next() {
            Some(Ok(line)) => Ok(line),
            Some(Err(e)) => Err(ParseError {
                location: self.location(),
                error: ParseErrorType::FileError(e)
            }),
            None => Err(ParseError {
                location: self.location(),
                error: ParseErrorType::UnexpectedEnd
            })
        }
    }

    fn next_count(&mut self) -> LineResult<usize> {
        let line = self.next_line()?;
        parse_count(&line).map_err(|error| ParseError {
            location: self.location(),
            error
        })
    }
}

// Reads the whole input: a rule count, that many `<variable> <product>`
// lines, a query count, and that many test strings. A blank query line is
// the empty test string, not a gap. Bad rule lines are all reported at
// once rather than one run at a time.
pub fn parse_input(reader: impl BufRead, source: &PathBuf) -> InputResult<(Grammar, Vec<String>)> {
    let mut lines = NumberedLines::new(reader, source);

    let rule_count = lines.next_count().map_err(|e| vec![e])?;

    let mut rules = Vec::with_capacity(rule_count);
    let mut errors = ParseErrors::new();
    for _ in 0..rule_count {
        let line = lines.next_line().map_err(|e| vec![e])?;
        match parse_rule(&line) {
            Ok(rule) => rules.push(rule),
            Err(error) => errors.push(ParseError {
                location: lines.location(),
                error
            })
        }
    }
    if errors.len() > 0 {
        return Err(errors);
    }

    let query_count = lines.next_count().map_err(|e| vec![e])?;

    let mut test_strings = Vec::with_capacity(query_count);
    for _ in 0..query_count {
        test_strings.push(lines.next_line().map_err(|e| vec![e])?);
    }

    let grammar = Grammar::build(rules).map_err(|error| vec![ParseError {
        location: Location::whole_input(source),
        error: ParseErrorType::BadGrammar(error)
    }])?;

    return Ok((grammar, test_strings));
}

pub fn parse_file(path: &PathBuf) -> InputResult<(Grammar, Vec<String>)> {
    let file = File::open(path).map_err(|e| vec![io_error(e, path)])?;
    parse_input(std::io::BufReader::new(file), path)
}

pub fn parse_stdin() -> InputResult<(Grammar, Vec<String>)> {
    parse_input(std::io::stdin().lock(), &PathBuf::from("stdin"))
}
