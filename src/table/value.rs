//! Typed table cell.
//!
//! Grouping keys live in a `BTreeMap`, so `Value` carries a manual total
//! order: numeric variants compare numerically (an integer and a float with
//! the same magnitude are the same group key), text lexicographically, and
//! nulls sort first.

use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

impl Value {
    /// Type a raw cell: integer first, then float, else text; empty is null.
    pub fn parse(cell: &str) -> Value {
        let cell = cell.trim();
        if cell.is_empty() {
            return Value::Null;
        }
        if let Ok(i) = cell.parse::<i64>() {
            return Value::Integer(i);
        }
        if let Ok(f) = cell.parse::<f64>() {
            return Value::Float(f);
        }
        Value::Text(cell.to_string())
    }

    /// Numeric view, used when summing a measure column.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

fn rank(v: &Value) -> u8 {
    match v {
        Value::Null => 0,
        Value::Integer(_) | Value::Float(_) => 1,
        Value::Text(_) => 2,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        use Value::*;
        match (self, other) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Integer(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Integer(b)) => a.total_cmp(&(*b as f64)),
            (Text(a), Text(b)) => a.cmp(b),
            (Null, Null) => Ordering::Equal,
            _ => rank(self).cmp(&rank(other)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Null => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_types_cells_by_narrowest_fit() {
        assert_eq!(Value::parse("2023"), Value::Integer(2023));
        assert_eq!(Value::parse("12.5"), Value::Float(12.5));
        assert_eq!(Value::parse("Rent"), Value::Text("Rent".to_string()));
        assert_eq!(Value::parse("  "), Value::Null);
    }

    #[test]
    fn numeric_keys_sort_numerically_across_variants() {
        let mut keys = vec![
            Value::Integer(10),
            Value::Float(2.5),
            Value::Integer(2),
            Value::Float(10.5),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                Value::Integer(2),
                Value::Float(2.5),
                Value::Integer(10),
                Value::Float(10.5),
            ]
        );
    }

    #[test]
    fn nulls_sort_before_numbers_before_text() {
        let mut keys = vec![
            Value::Text("a".to_string()),
            Value::Integer(1),
            Value::Null,
        ];
        keys.sort();
        assert_eq!(keys[0], Value::Null);
        assert_eq!(keys[2], Value::Text("a".to_string()));
    }

    #[test]
    fn equal_magnitude_integer_and_float_are_the_same_key() {
        assert_eq!(Value::Integer(2023), Value::Float(2023.0));
    }
}
