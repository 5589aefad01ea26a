// crates/pplx-rs/src/value_table.rs

//! The compact curve-table codec used for capacity and derating curves.
//!
//! A table is stored in a single attribute as `label;pos,val;pos,val;`.

use log::{trace, warn};
use std::fmt::{self, Write};

/// Separates the label and each record.
const RECORD_SEPARATOR: char = ';';
/// Separates position and value inside a record.
const PAIR_SEPARATOR: char = ',';

/// A labelled, ordered sequence of `(position, value)` pairs.
///
/// Positions are not required to be unique and the order is preserved as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueTable {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl ValueTable {
    /// Creates an empty table with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            points: Vec::new(),
        }
    }

    /// Creates a table from a label and an existing list of pairs.
    pub fn with_points(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    /// Appends a pair to the end of the table.
    pub fn push(&mut self, position: f64, value: f64) {
        self.points.push((position, value));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Decodes a table from its token string.
    ///
    /// The first `;`-separated token is the label. Every following non-blank
    /// token must be `position,value`; tokens that do not split into exactly two
    /// numbers are dropped. Decoding never fails: garbage input yields a table
    /// with whatever label was found and no pairs.
    pub fn decode(text: &str) -> Self {
        let mut tokens = text.split(RECORD_SEPARATOR);
        let label = tokens.next().unwrap_or_default();
        let mut table = Self::new(label);

        for token in tokens.filter(|t| !t.trim().is_empty()) {
            match parse_pair(token) {
                Some((position, value)) => table.push(position, value),
                None => trace!(
                    "Dropping malformed table record {:?} in table '{}'",
                    token, label
                ),
            }
        }

        table
    }

    /// Encodes the table as `label;` followed by `position,value;` per pair.
    ///
    /// The format has no escaping, so the label must not contain `;`. Such a
    /// label is written as-is and is cut at the first `;` when decoded.
    pub fn encode(&self) -> String {
        if self.label.contains(RECORD_SEPARATOR) {
            warn!(
                "Table label '{}' contains '{}' and will not decode intact",
                self.label, RECORD_SEPARATOR
            );
        }
        // Writing into a String cannot fail.
        let mut out = String::with_capacity(self.label.len() + 1 + self.points.len() * 8);
        let _ = write!(out, "{}", self);
        out
    }
}

impl fmt::Display for ValueTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.label, RECORD_SEPARATOR)?;
        for (position, value) in &self.points {
            write!(
                f,
                "{}{}{}{}",
                position, PAIR_SEPARATOR, value, RECORD_SEPARATOR
            )?;
        }
        Ok(())
    }
}

/// Parses a single `position,value` record.
fn parse_pair(token: &str) -> Option<(f64, f64)> {
    let mut parts = token.split(PAIR_SEPARATOR);
    let position = parts.next()?.trim().parse::<f64>().ok()?;
    let value = parts.next()?.trim().parse::<f64>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((position, value))
}

#[cfg(test)]
mod tests {
    use super::ValueTable;

    #[test]
    fn test_encode_format() {
        let table = ValueTable::with_points("Derating", vec![(0.0, 1.0), (120.5, 0.85)]);
        assert_eq!(table.encode(), "Derating;0,1;120.5,0.85;");
    }

    #[test]
    fn test_encode_empty_table() {
        assert_eq!(ValueTable::new("Empty").encode(), "Empty;");
        assert_eq!(ValueTable::default().encode(), ";");
    }

    #[test]
    fn test_decode_skips_malformed_records() {
        let table = ValueTable::decode("Label;1,2;garbage;3,4;");
        assert_eq!(table.label, "Label");
        assert_eq!(table.points, vec![(1.0, 2.0), (3.0, 4.0)]);
    }

    #[test]
    fn test_decode_rejects_wrong_arity() {
        let table = ValueTable::decode("T;1;1,2,3;5,x;,6;7,8");
        assert_eq!(table.label, "T");
        assert_eq!(table.points, vec![(7.0, 8.0)]);
    }

    #[test]
    fn test_decode_garbage_and_empty_input() {
        let empty = ValueTable::decode("");
        assert_eq!(empty.label, "");
        assert!(empty.is_empty());

        let garbage = ValueTable::decode("not a table at all");
        assert_eq!(garbage.label, "not a table at all");
        assert!(garbage.is_empty());
    }

    #[test]
    fn test_decode_tolerates_blank_tokens_and_whitespace() {
        let table = ValueTable::decode("Curve;; 10 , 0.5 ;\t;20,1e-3;");
        assert_eq!(table.points, vec![(10.0, 0.5), (20.0, 0.001)]);
    }

    #[test]
    fn test_decode_preserves_order_and_duplicates() {
        let table = ValueTable::decode("Dup;5,1;1,2;5,3;");
        assert_eq!(table.points, vec![(5.0, 1.0), (1.0, 2.0), (5.0, 3.0)]);
    }

    #[test]
    fn test_separator_in_label_is_written_unescaped() {
        let table = ValueTable::with_points("a;b", vec![(1.0, 2.0)]);
        assert_eq!(table.encode(), "a;b;1,2;");
        // The label is cut at the separator; the pairs survive.
        let decoded = ValueTable::decode(&table.encode());
        assert_eq!(decoded.label, "a");
        assert_eq!(decoded.points, vec![(1.0, 2.0)]);
    }

    #[test]
    fn test_round_trip_is_numeric() {
        let tables = [
            ValueTable::with_points("A", vec![(0.1, 0.2), (1e-7, 3.5e12), (-4.25, 0.0)]),
            ValueTable::with_points("", vec![(1.0 / 3.0, 2.0 / 3.0)]),
            ValueTable::with_points("Moment Capacity", vec![(0.0, 125000.0), (0.0, 125000.0)]),
        ];
        for table in tables {
            let decoded = ValueTable::decode(&table.encode());
            assert_eq!(decoded.label, table.label);
            assert_eq!(decoded.points.len(), table.points.len());
            for (a, b) in decoded.points.iter().zip(&table.points) {
                assert_eq!(a.0, b.0);
                assert_eq!(a.1, b.1);
            }
        }
    }
}
