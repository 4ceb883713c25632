/*
    This module is for storing CNF grammars
*/

use std::collections::HashMap;
use std::fmt::Display;

// Nonterminal names and terminals both travel as plain text
pub type Symbol = String;

// variable -> letter
#[derive(Debug, PartialEq, Clone)]
pub struct TerminalRule {
    pub variable: Symbol,
    pub letter: char
}

// variable -> left right
#[derive(Debug, PartialEq, Clone)]
pub struct BinaryRule {
    pub variable: Symbol,
    pub left: Symbol,
    pub right: Symbol
}

impl BinaryRule {
    // The two right-hand symbols run together, the way rule lines spell them
    pub fn product(&self) -> String {
        format!("{}{}", self.left, self.right)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Rule {
    Terminal(TerminalRule),
    Binary(BinaryRule)
}

impl Rule {
    // Classifies a raw production by the length of its product
    pub fn new(variable: &str, product: &str) -> Result<Rule, GrammarError> {
        let symbols: Vec<char> = product.chars().collect();
        match symbols[..] {
            [letter] => Ok(Rule::Terminal(TerminalRule {
                variable: variable.to_string(),
                letter
            })),
            [left, right] => Ok(Rule::Binary(BinaryRule {
                variable: variable.to_string(),
                left: left.to_string(),
                right: right.to_string()
            })),
            _ => Err(GrammarError::InvalidProduct(product.to_string()))
        }
    }

    pub fn variable(&self) -> &str {
        match self {
            Rule::Terminal(rule) => &rule.variable,
            Rule::Binary(rule) => &rule.variable
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum GrammarError {
    // A grammar with no rules has no start symbol to speak of
    EmptyRuleset,
    // A product whose length is not 1 or 2, which CNF does not allow
    InvalidProduct(String)
}

impl Display for GrammarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarError::EmptyRuleset => write!(f, "The grammar has no rules"),
            GrammarError::InvalidProduct(product) => write!(f, "Product `{}` is not a single terminal or a pair of nonterminals", product)
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Grammar {
    start: Symbol,
    terminal_rules: Vec<TerminalRule>,
    binary_rules: Vec<BinaryRule>,
    // Maps a two-symbol product to every variable that rewrites to it
    producers: HashMap<String, Vec<Symbol>>
}

impl Grammar {
    pub fn build(rules: Vec<Rule>) -> Result<Grammar, GrammarError> {
        let start = match rules.first() {
            Some(rule) => rule.variable().to_string(),
            None => return Err(GrammarError::EmptyRuleset)
        };

        let mut terminal_rules = Vec::new();
        let mut binary_rules = Vec::new();
        for rule in rules {
            match rule {
                Rule::Terminal(rule) => terminal_rules.push(rule),
                Rule::Binary(rule) => binary_rules.push(rule)
            }
        }

        let mut producers: HashMap<String, Vec<Symbol>> = HashMap::new();
        for rule in &binary_rules {
            producers.entry(rule.product()).or_default().push(rule.variable.clone());
        }

        return Ok(Grammar {
            start,
            terminal_rules,
            binary_rules,
            producers
        });
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn terminal_rules(&self) -> &[TerminalRule] {
        &self.terminal_rules
    }

    pub fn binary_rules(&self) -> &[BinaryRule] {
        &self.binary_rules
    }

    // Every variable that produces the given two-symbol string; empty for
    // products no rule rewrites to
    pub fn producers(&self, product: &str) -> &[Symbol] {
        self.producers.get(product).map(Vec::as_slice).unwrap_or(&[])
    }
}
