//! Constant values appearing in predicates and arguments

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;

/// A constant operand.
///
/// Primitives are written inline as GraphQL literals. `Decimal` and
/// `DateTime` are custom scalars and travel as operation variables instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Constant>),
    Decimal(Decimal),
    DateTime(DateTime<Utc>),
}

impl Constant {
    /// True when the value can be written as an inline literal.
    pub fn is_primitive(&self) -> bool {
        match self {
            Self::Decimal(_) | Self::DateTime(_) => false,
            Self::List(items) => items.iter().all(Constant::is_primitive),
            _ => true,
        }
    }

    /// JSON representation for the variables map.
    pub(crate) fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::from(*i),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::String(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.iter().map(Constant::to_json).collect()),
            Self::Decimal(d) => Value::String(d.to_string()),
            Self::DateTime(dt) => Value::String(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

/// Quote a string as a GraphQL string literal.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

impl From<bool> for Constant {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Constant {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Constant {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Constant {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Constant {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Constant {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Constant {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Decimal> for Constant {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<DateTime<Utc>> for Constant {
    fn from(v: DateTime<Utc>) -> Self {
        Self::DateTime(v)
    }
}

impl<T: Into<Constant>> From<Option<T>> for Constant {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Self::Null)
    }
}

impl<T: Into<Constant>> From<Vec<T>> for Constant {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Constant>, const N: usize> From<[T; N]> for Constant {
    fn from(v: [T; N]) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("a\\b\nc"), "\"a\\\\b\\nc\"");
        assert_eq!(quote("\u{1}"), "\"\\u0001\"");
    }

    #[test]
    fn test_primitive_classification() {
        assert!(Constant::from(10).is_primitive());
        assert!(Constant::from("x").is_primitive());
        assert!(Constant::from(vec![1, 2]).is_primitive());
        assert!(!Constant::from(dec!(9.99)).is_primitive());
        assert!(!Constant::from(vec![dec!(1), dec!(2)]).is_primitive());
        assert!(!Constant::from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()).is_primitive());
    }

    #[test]
    fn test_option_maps_to_null() {
        assert_eq!(Constant::from(None::<i32>), Constant::Null);
        assert_eq!(Constant::from(Some(3)), Constant::Int(3));
    }

    #[test]
    fn test_json_forms() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(Constant::from(dec!(19.99)).to_json(), serde_json::json!("19.99"));
        assert_eq!(Constant::from(at).to_json(), serde_json::json!("2024-05-01T12:30:00Z"));
        assert_eq!(Constant::Float(f64::NAN).to_json(), serde_json::Value::Null);
    }
}
