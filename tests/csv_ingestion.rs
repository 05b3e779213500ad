use archive_ingest::ingestion::csv::{
    ingest_csv_from_path, ingest_csv_from_reader, ingest_csv_inferred_from_path,
    ingest_csv_inferred_from_reader,
};
use archive_ingest::types::{DataType, Field, Schema, Value};
use archive_ingest::IngestionError;

fn people_schema() -> Schema {
    Schema::new(vec![
        Field::new("id", DataType::Int64),
        Field::new("name", DataType::Utf8),
        Field::new("score", DataType::Float64),
        Field::new("active", DataType::Bool),
    ])
}

fn reader(input: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes())
}

#[test]
fn ingest_csv_from_path_happy_path() {
    let schema = people_schema();
    let ds = ingest_csv_from_path("tests/fixtures/people.csv", &schema).unwrap();

    assert_eq!(ds.row_count(), 2);
    assert_eq!(
        ds.rows[0],
        vec![
            Value::Int64(1),
            Value::Utf8("Ada".to_string()),
            Value::Float64(98.5),
            Value::Bool(true),
        ]
    );
}

#[test]
fn inferred_schema_matches_explicit_schema_for_fixture() {
    let inferred = ingest_csv_inferred_from_path("tests/fixtures/people.csv").unwrap();
    let explicit = ingest_csv_from_path("tests/fixtures/people.csv", &people_schema()).unwrap();
    assert_eq!(inferred, explicit);
}

#[test]
fn inferred_types_follow_column_contents() {
    let input = "id,ratio,flag,label,empty\n1,0.5,True,x,\n2,3,false,7,NA\n,,, ,\n";
    let ds = ingest_csv_inferred_from_reader(&mut reader(input)).unwrap();

    let types: Vec<DataType> = ds.schema.fields.iter().map(|f| f.data_type).collect();
    assert_eq!(
        types,
        vec![
            DataType::Int64,
            DataType::Float64,
            DataType::Bool,
            DataType::Utf8,
            DataType::Float64,
        ]
    );
    assert_eq!(ds.row_count(), 3);
    assert_eq!(ds.rows[1][1], Value::Float64(3.0));
    assert_eq!(ds.rows[1][3], Value::Utf8("7".to_string()));
    assert_eq!(ds.rows[2], vec![Value::Null; 5]);
}

#[test]
fn inferred_duplicate_headers_are_renamed() {
    let ds = ingest_csv_inferred_from_reader(&mut reader("a,a,b\n1,2,3\n")).unwrap();
    assert_eq!(ds.column_names(), vec!["a", "a.1", "b"]);
}

#[test]
fn header_only_csv_yields_empty_dataset() {
    let ds = ingest_csv_inferred_from_reader(&mut reader("id,name\n")).unwrap();
    assert_eq!(ds.row_count(), 0);
    assert_eq!(ds.column_count(), 2);
}

#[test]
fn empty_csv_is_a_schema_mismatch() {
    let err = ingest_csv_inferred_from_reader(&mut reader("")).unwrap_err();
    assert!(matches!(err, IngestionError::SchemaMismatch { .. }));
    assert!(err.to_string().contains("no header row"));
}

#[test]
fn rows_longer_than_header_are_rejected() {
    let err = ingest_csv_inferred_from_reader(&mut reader("a,b\n1,2\n1,2,3\n")).unwrap_err();
    assert!(matches!(err, IngestionError::SchemaMismatch { .. }));
    assert!(err.to_string().contains("row 3 has 3 fields but the header has 2"));

    let schema = Schema::new(vec![Field::new("a", DataType::Int64)]);
    let err = ingest_csv_from_reader(&mut reader("a,b\n1,2,3\n"), &schema).unwrap_err();
    assert!(matches!(err, IngestionError::SchemaMismatch { .. }));
}

#[test]
fn short_rows_are_padded_with_nulls_when_inferred() {
    let ds = ingest_csv_inferred_from_reader(&mut reader("a,b,c\n1,2,3\n4,5\n")).unwrap();
    assert_eq!(ds.column_count(), 3);
    assert_eq!(ds.schema.fields[2].data_type, DataType::Int64);
    assert_eq!(ds.rows[1], vec![Value::Int64(4), Value::Int64(5), Value::Null]);
}

#[test]
fn short_rows_are_padded_with_nulls_for_schema() {
    let input = "id,name,score,active\n1,Ada\n";
    let ds = ingest_csv_from_reader(&mut reader(input), &people_schema()).unwrap();
    assert_eq!(
        ds.rows[0],
        vec![Value::Int64(1), Value::Utf8("Ada".to_string()), Value::Null, Value::Null]
    );
}

#[test]
fn invalid_utf8_is_a_csv_error() {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(&b"name\n\xff\xfe\n"[..]);
    let err = ingest_csv_inferred_from_reader(&mut rdr).unwrap_err();
    assert!(matches!(err, IngestionError::Csv(_)));
}

#[test]
fn ingest_csv_allows_reordered_columns() {
    let schema = people_schema();
    let input = "name,id,active,score\nAda,1,true,98.5\n";

    let ds = ingest_csv_from_reader(&mut reader(input), &schema).unwrap();
    assert_eq!(ds.row_count(), 1);
    assert_eq!(ds.rows[0][0], Value::Int64(1));
    assert_eq!(ds.rows[0][1], Value::Utf8("Ada".to_string()));
}

#[test]
fn ingest_csv_errors_on_missing_required_column() {
    let schema = people_schema();
    let input = "id,name,score\n1,Ada,98.5\n";

    let err = ingest_csv_from_reader(&mut reader(input), &schema).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required column 'active'"));
}

#[test]
fn ingest_csv_errors_on_type_parse() {
    let schema = people_schema();
    let input = "id,name,score,active\nnot_an_int,Ada,98.5,true\n";

    let err = ingest_csv_from_reader(&mut reader(input), &schema).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value"));
    assert!(msg.contains("row 2"));
    assert!(msg.contains("column 'id'"));
}
