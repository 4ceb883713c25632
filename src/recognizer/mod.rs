/*
    This module decides string membership with the CYK algorithm
*/

mod table;

use itertools::Itertools;

use crate::grammar::Grammar;
use table::DerivationTable;

// Whether the grammar's start symbol derives the given string. Letters with
// no matching terminal rule just leave cells empty, so the answer degrades
// to `no` rather than an error.
pub fn membership(grammar: &Grammar, text: &str) -> bool {
    let letters = text.chars().collect_vec();
    let length = letters.len();

    // The empty string is never a member, whatever the grammar says
    if length == 0 {
        return false;
    }

    // A single letter needs no table, just a terminal rule on the start
    // symbol itself
    if length == 1 {
        return grammar.terminal_rules().iter()
            .any(|rule| rule.variable == grammar.start() && rule.letter == letters[0]);
    }

    let table = fill_table(grammar, &letters);
    return table.get(length - 1, 0).contains(grammar.start());
}

fn fill_table(grammar: &Grammar, letters: &[char]) -> DerivationTable {
    let length = letters.len();
    let mut table = DerivationTable::new(length);

    // Base row: the variables that produce each letter directly
    for (position, letter) in letters.iter().enumerate() {
        for rule in grammar.terminal_rules() {
            if rule.letter == *letter {
                table.insert(0, position, &rule.variable);
            }
        }
    }

    // Longer spans only combine strictly shorter ones, so walking the rows
    // in increasing span order keeps every read on finished cells
    for span in 1..length {
        for start in 0..length - span {
            let mut derived = Vec::new();

            for split in 0..span {
                let left = table.get(split, start);
                let right = table.get(span - split - 1, start + split + 1);
                if left.is_empty() || right.is_empty() {
                    continue;
                }

                // Any ordered pairing that some binary rule produces marks
                // this span as derivable from that rule's variable
                for (l, r) in left.iter().cartesian_product(right.iter()) {
                    derived.extend(grammar.producers(&format!("{}{}", l, r)).iter().cloned());
                }
            }

            for variable in derived {
                table.insert(span, start, &variable);
            }
        }
    }

    return table;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{Grammar, Rule};

    fn build_grammar(rules: &[(&str, &str)]) -> Grammar {
        let rules = rules.iter()
            .map(|(variable, product)| Rule::new(variable, product).unwrap())
            .collect();
        Grammar::build(rules).unwrap()
    }

    // S -> AB, A -> a, B -> b: the language containing exactly "ab"
    fn just_ab() -> Grammar {
        build_grammar(&[("S", "AB"), ("A", "a"), ("B", "b")])
    }

    #[test]
    fn accepts_the_one_member() {
        assert!(membership(&just_ab(), "ab"));
    }

    #[test]
    fn rejects_non_members() {
        let grammar = just_ab();

        for text in ["ba", "a", "b", "aa", "abb", "abab"] {
            assert!(!membership(&grammar, text));
        }
    }

    #[test]
    fn rejects_the_empty_string() {
        assert!(!membership(&just_ab(), ""));
    }

    #[test]
    fn empty_string_rejected_even_if_start_has_terminal_rule() {
        let grammar = build_grammar(&[("S", "a")]);
        assert!(!membership(&grammar, ""));
    }

    #[test]
    fn single_letter_needs_start_terminal_rule() {
        // The same grammar as just_ab but with S -> a as well, the usual CNF
        // shape for an alternative like S -> AB | a
        let grammar = build_grammar(&[("S", "AB"), ("S", "a"), ("A", "a"), ("B", "b")]);

        assert!(membership(&grammar, "a"));
        assert!(!membership(&grammar, "b"));
        assert!(membership(&grammar, "ab"));
    }

    #[test]
    fn single_letter_shortcut_matches_table_construction() {
        let grammars = vec![
            just_ab(),
            build_grammar(&[("S", "AB"), ("S", "a"), ("A", "a"), ("B", "b")]),
            build_grammar(&[("S", "a"), ("S", "b")])
        ];

        for grammar in &grammars {
            for text in ["a", "b", "c"] {
                let letters: Vec<char> = text.chars().collect();
                let by_table = fill_table(grammar, &letters)
                    .get(0, 0)
                    .contains(grammar.start());
                assert_eq!(membership(grammar, text), by_table);
            }
        }
    }

    #[test]
    fn letters_without_rules_mean_no() {
        let grammar = just_ab();

        assert!(!membership(&grammar, "ax"));
        assert!(!membership(&grammar, "xy"));
    }

    #[test]
    fn matched_pairs_grammar() {
        // a^n b^n for n >= 1: S -> AT | AB, T -> SB, A -> a, B -> b
        let grammar = build_grammar(&[
            ("S", "AT"),
            ("S", "AB"),
            ("T", "SB"),
            ("A", "a"),
            ("B", "b")
        ]);

        for text in ["ab", "aabb", "aaabbb", "aaaabbbb"] {
            assert!(membership(&grammar, text), "expected membership for {:?}", text);
        }
        for text in ["", "a", "b", "ba", "abab", "aab", "abb", "aabbb"] {
            assert!(!membership(&grammar, text), "expected rejection for {:?}", text);
        }
    }

    #[test]
    fn rule_order_does_not_matter() {
        // Shuffle everything behind the start rule, which pins the start
        // symbol in place
        let orderings = vec![
            build_grammar(&[("S", "AB"), ("A", "a"), ("B", "b")]),
            build_grammar(&[("S", "AB"), ("B", "b"), ("A", "a")]),
            build_grammar(&[("S", "AB"), ("B", "b"), ("S", "a"), ("A", "a")]),
            build_grammar(&[("S", "a"), ("S", "AB"), ("A", "a"), ("B", "b")])
        ];

        assert!(membership(&orderings[0], "ab"));
        assert!(membership(&orderings[1], "ab"));
        assert!(!membership(&orderings[0], "a"));
        assert!(membership(&orderings[2], "ab"));
        assert!(membership(&orderings[2], "a"));
        assert!(membership(&orderings[3], "ab"));
        assert!(membership(&orderings[3], "a"));
    }

    #[test]
    fn queries_are_idempotent() {
        let grammar = just_ab();

        assert_eq!(membership(&grammar, "ab"), membership(&grammar, "ab"));
        assert_eq!(membership(&grammar, "ba"), membership(&grammar, "ba"));
    }

    #[test]
    fn splits_union_into_one_cell() {
        // For "aab" the split a|ab reaches X through AS while aa|b reaches
        // Y through CB; the top cell keeps both
        let grammar = build_grammar(&[
            ("X", "AS"),
            ("Y", "CB"),
            ("S", "AB"),
            ("C", "AA"),
            ("A", "a"),
            ("B", "b")
        ]);
        let letters: Vec<char> = "aab".chars().collect();

        let table = fill_table(&grammar, &letters);
        assert!(table.get(2, 0).contains("X"));
        assert!(table.get(2, 0).contains("Y"));
    }
}
