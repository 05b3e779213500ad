//! CSV loading into an in-memory [`DataSet`].
//!
//! Two modes:
//!
//! - **Inferred** ([`ingest_csv_inferred_from_reader`]): column names come from the header row
//!   and column types are inferred from the values (see [`super::infer`]).
//! - **Schema** ([`ingest_csv_from_reader`]): values are parsed into a caller-provided
//!   [`Schema`]; columns may appear in any order and extra columns are ignored.
//!
//! In both modes a row shorter than the header is padded with [`Value::Null`]; a row longer
//! than the header is a [`IngestionError::SchemaMismatch`]. Readers built outside this module
//! need `flexible(true)` for short rows to reach that padding.

use std::path::Path;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

use super::infer::{convert_inferred, dedup_headers, is_null_token, Inferred};

/// Load a CSV file, inferring column types unless `schema` is given.
pub fn load_csv(path: impl AsRef<Path>, schema: Option<&Schema>) -> IngestionResult<DataSet> {
    match schema {
        Some(schema) => ingest_csv_from_path(path, schema),
        None => ingest_csv_inferred_from_path(path),
    }
}

/// Ingest a CSV file into a [`DataSet`] using a provided [`Schema`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all schema fields (order can differ).
/// - Each value is parsed according to the schema field type.
pub fn ingest_csv_from_path(path: impl AsRef<Path>, schema: &Schema) -> IngestionResult<DataSet> {
    let mut rdr = reader_builder().from_path(path)?;
    ingest_csv_from_reader(&mut rdr, schema)
}

/// Ingest a CSV file into a [`DataSet`], inferring the schema from its contents.
pub fn ingest_csv_inferred_from_path(path: impl AsRef<Path>) -> IngestionResult<DataSet> {
    let mut rdr = reader_builder().from_path(path)?;
    ingest_csv_inferred_from_reader(&mut rdr)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).delimiter(b',').flexible(true);
    builder
}

/// Ingest CSV data from an existing CSV reader, inferring column types.
pub fn ingest_csv_inferred_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> IngestionResult<DataSet> {
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(IngestionError::SchemaMismatch {
            message: "csv has no header row".to_string(),
        });
    }

    let records = rdr.records().collect::<Result<Vec<_>, _>>()?;
    for (row_idx0, record) in records.iter().enumerate() {
        check_row_width(row_idx0 + 2, record.len(), headers.len())?;
    }

    let mut inferred = vec![Inferred::default(); headers.len()];
    for record in &records {
        for (state, raw) in inferred.iter_mut().zip(record.iter()) {
            *state = state.observe(raw);
        }
    }

    let fields = dedup_headers(headers.iter())
        .into_iter()
        .zip(&inferred)
        .map(|(name, state)| Field::new(name, state.data_type()))
        .collect::<Vec<_>>();

    let rows = records
        .iter()
        .map(|record| {
            fields
                .iter()
                .enumerate()
                .map(|(idx, field)| match record.get(idx) {
                    Some(raw) => convert_inferred(field.data_type, raw),
                    None => Value::Null,
                })
                .collect()
        })
        .collect();

    Ok(DataSet::new(Schema::new(fields), rows))
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    schema: &Schema,
) -> IngestionResult<DataSet> {
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(IngestionError::SchemaMismatch {
            message: "csv has no header row".to_string(),
        });
    }

    // Map schema fields -> CSV column indexes (allows re-ordered CSV columns).
    let mut col_idxs = Vec::with_capacity(schema.fields.len());
    for field in &schema.fields {
        match headers.iter().position(|h| h == field.name) {
            Some(idx) => col_idxs.push(idx),
            None => {
                return Err(IngestionError::SchemaMismatch {
                    message: format!(
                        "missing required column '{field}'. headers={:?}",
                        headers.iter().collect::<Vec<_>>(),
                        field = field.name
                    ),
                });
            }
        }
    }

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;
        check_row_width(user_row, record.len(), headers.len())?;

        let mut row: Vec<Value> = Vec::with_capacity(schema.fields.len());
        for (field, &csv_idx) in schema.fields.iter().zip(col_idxs.iter()) {
            let raw = record.get(csv_idx).unwrap_or("");
            row.push(parse_typed_value(user_row, &field.name, field.data_type, raw)?);
        }
        rows.push(row);
    }

    Ok(DataSet::new(schema.clone(), rows))
}

fn check_row_width(row: usize, width: usize, header_width: usize) -> IngestionResult<()> {
    if width > header_width {
        return Err(IngestionError::SchemaMismatch {
            message: format!("row {row} has {width} fields but the header has {header_width}"),
        });
    }
    Ok(())
}

fn parse_typed_value(
    row: usize,
    column: &str,
    data_type: DataType,
    raw: &str,
) -> IngestionResult<Value> {
    if is_null_token(raw) {
        return Ok(Value::Null);
    }
    let trimmed = raw.trim();

    let parse_err = |message: String| IngestionError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message,
    };

    match data_type {
        DataType::Utf8 => Ok(Value::Utf8(raw.to_owned())),
        DataType::Int64 => trimmed
            .parse::<i64>()
            .map(Value::Int64)
            .map_err(|e| parse_err(e.to_string())),
        DataType::Float64 => trimmed
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|e| parse_err(e.to_string())),
        DataType::Bool => parse_bool(trimmed).map(Value::Bool).map_err(parse_err),
    }
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Ok(true),
        "false" | "f" | "0" | "no" | "n" => Ok(false),
        _ => Err("expected bool (true/false/1/0/yes/no)".to_string()),
    }
}
