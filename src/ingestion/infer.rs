//! Column type inference for schema-less CSV loading.
//!
//! Each column starts out [`Inferred::Unknown`] and is widened by every non-null cell it sees:
//!
//! ```text
//! Unknown -> Int64 -> Float64 -> Utf8
//! Unknown -> Bool --------------> Utf8
//! ```
//!
//! Mixing numbers and booleans lands on `Utf8`. A column that never sees a non-null cell is
//! reported as `Float64` (an all-NaN numeric column).

use crate::types::{DataType, Value};

/// Cell texts treated as missing values.
pub const NULL_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns `true` if a raw CSV cell should become [`Value::Null`].
pub fn is_null_token(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || NULL_TOKENS.contains(&trimmed)
}

/// Running inference state for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Inferred {
    #[default]
    Unknown,
    Bool,
    Int64,
    Float64,
    Utf8,
}

impl Inferred {
    /// Widen the state so that it also admits `raw`.
    pub fn observe(self, raw: &str) -> Self {
        if is_null_token(raw) || self == Inferred::Utf8 {
            return self;
        }
        let cell = classify(raw.trim());
        match (self, cell) {
            (Inferred::Unknown, c) => c,
            (a, b) if a == b => a,
            (Inferred::Int64, Inferred::Float64) | (Inferred::Float64, Inferred::Int64) => {
                Inferred::Float64
            }
            _ => Inferred::Utf8,
        }
    }

    /// Final logical type for the column.
    pub fn data_type(self) -> DataType {
        match self {
            Inferred::Unknown | Inferred::Float64 => DataType::Float64,
            Inferred::Int64 => DataType::Int64,
            Inferred::Bool => DataType::Bool,
            Inferred::Utf8 => DataType::Utf8,
        }
    }
}

fn classify(trimmed: &str) -> Inferred {
    if trimmed.parse::<i64>().is_ok() {
        Inferred::Int64
    } else if trimmed.parse::<f64>().is_ok() {
        Inferred::Float64
    } else if parse_bool_literal(trimmed).is_some() {
        Inferred::Bool
    } else {
        Inferred::Utf8
    }
}

fn parse_bool_literal(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Convert a raw cell into a [`Value`] of an inferred column type.
///
/// Only called after inference has seen every cell of the column, so parsing cannot fail for
/// numeric/bool types; `Utf8` keeps the raw text verbatim.
pub fn convert_inferred(data_type: DataType, raw: &str) -> Value {
    if is_null_token(raw) {
        return Value::Null;
    }
    let trimmed = raw.trim();
    match data_type {
        DataType::Int64 => trimmed
            .parse::<i64>()
            .map(Value::Int64)
            .unwrap_or_else(|_| Value::Utf8(raw.to_owned())),
        DataType::Float64 => trimmed
            .parse::<f64>()
            .map(Value::Float64)
            .unwrap_or_else(|_| Value::Utf8(raw.to_owned())),
        DataType::Bool => parse_bool_literal(trimmed)
            .map(Value::Bool)
            .unwrap_or_else(|| Value::Utf8(raw.to_owned())),
        DataType::Utf8 => Value::Utf8(raw.to_owned()),
    }
}

/// De-duplicate header names by suffixing repeats with `.1`, `.2`, ...
pub fn dedup_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in headers {
        let mut candidate = name.to_owned();
        let mut n = 0;
        while out.contains(&candidate) {
            n += 1;
            candidate = format!("{name}.{n}");
        }
        out.push(candidate);
    }
    out
}
