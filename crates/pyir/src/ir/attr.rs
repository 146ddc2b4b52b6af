//! Compile-time constant payloads attached to operations.

use std::fmt;

/// An immutable constant payload (literal, name, flag).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Tuple(Vec<Attribute>),
}

impl From<bool> for Attribute {
    fn from(v: bool) -> Self {
        Attribute::Bool(v)
    }
}

impl From<i64> for Attribute {
    fn from(v: i64) -> Self {
        Attribute::Int(v)
    }
}

impl From<i32> for Attribute {
    fn from(v: i32) -> Self {
        Attribute::Int(v.into())
    }
}

impl From<f64> for Attribute {
    fn from(v: f64) -> Self {
        Attribute::Float(v)
    }
}

impl From<&str> for Attribute {
    fn from(v: &str) -> Self {
        Attribute::Str(v.to_owned())
    }
}

impl From<String> for Attribute {
    fn from(v: String) -> Self {
        Attribute::Str(v)
    }
}

impl From<Vec<Attribute>> for Attribute {
    fn from(v: Vec<Attribute>) -> Self {
        Attribute::Tuple(v)
    }
}

/// Source-language spelling: `None`, `True`, `1`, `2.5`, `inf`, `nan`, `"s"`, `(1, "a")`.
impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::None => write!(f, "None"),
            Attribute::Bool(true) => write!(f, "True"),
            Attribute::Bool(false) => write!(f, "False"),
            Attribute::Int(v) => write!(f, "{v}"),
            Attribute::Float(v) if v.is_nan() => write!(f, "nan"),
            Attribute::Float(v) if v.is_infinite() => {
                write!(f, "{}inf", if *v < 0.0 { "-" } else { "" })
            }
            Attribute::Float(v) => write!(f, "{v:?}"),
            Attribute::Str(s) => write!(f, "{s:?}"),
            Attribute::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
        }
    }
}
