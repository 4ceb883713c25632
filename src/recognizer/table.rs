use std::collections::HashSet;

use crate::grammar::Symbol;

// The triangular table the algorithm fills in. Row `span` holds one cell per
// start position of a substring of length `span + 1`, so row 0 has `length`
// cells and the top row has a single cell covering the whole string. The
// rows live back to back in one flat vector.
#[derive(Debug)]
pub struct DerivationTable {
    length: usize,
    cells: Vec<HashSet<Symbol>>
}

impl DerivationTable {
    pub fn new(length: usize) -> Self {
        DerivationTable {
            length,
            cells: vec![HashSet::new(); length * (length + 1) / 2]
        }
    }

    // Rows shrink by one cell each, so row `span` begins after
    // length + (length - 1) + ... + (length - span + 1) earlier cells
    fn offset(&self, span: usize, start: usize) -> usize {
        assert!(span < self.length, "span {} out of range for a length-{} table", span, self.length);
        assert!(start < self.length - span, "start {} out of range for span {}", start, span);
        span * (2 * self.length - span + 1) / 2 + start
    }

    // The set of variables known to derive text[start .. start + span + 1]
    pub fn get(&self, span: usize, start: usize) -> &HashSet<Symbol> {
        &self.cells[self.offset(span, start)]
    }

    pub fn insert(&mut self, span: usize, start: usize, variable: &str) {
        let offset = self.offset(span, start);
        self.cells[offset].insert(variable.to_string());
    }
}
