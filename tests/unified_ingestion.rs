mod common;

use archive_ingest::ingestion::{
    get_ingestor, get_ingestor_with_options, ingest_from_path, ArchiveFormat, ExtractionTarget,
    IngestionOptions,
};
use archive_ingest::types::Value;
use archive_ingest::IngestionError;

use common::{write_zip, PEOPLE_CSV};

#[test]
fn factory_ingestor_ingests_zip() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("archive.zip");
    write_zip(&archive, &[("people.csv", PEOPLE_CSV)]);

    let ingestor = get_ingestor(".zip").unwrap();
    assert_eq!(ingestor.format(), ArchiveFormat::Zip);

    let ds = ingestor.ingest(&archive).unwrap();
    assert_eq!(ds.row_count(), 2);
    assert_eq!(ds.rows[0][0], Value::Int64(1));
}

#[test]
fn factory_rejects_unknown_extensions() {
    for ext in [".tar", ".csv", "", ".ZIP", "zip"] {
        let err = get_ingestor(ext).unwrap_err();
        assert!(matches!(err, IngestionError::UnsupportedFormat { .. }), "{ext:?}");
    }
}

#[test]
fn factory_passes_options_to_ingestor() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("archive.zip");
    write_zip(&archive, &[("people.csv", PEOPLE_CSV)]);
    let out = tmp.path().join("out");

    let opts = IngestionOptions {
        extraction: ExtractionTarget::Dir(out.clone()),
        ..Default::default()
    };
    let ingestor = get_ingestor_with_options(".zip", opts).unwrap();
    ingestor.ingest(&archive).unwrap();
    assert!(out.join("people.csv").is_file());
}

#[test]
fn ingest_from_path_auto_by_extension() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("house.prices.zip");
    write_zip(&archive, &[("people.csv", PEOPLE_CSV)]);

    let ds = ingest_from_path(&archive, &IngestionOptions::default()).unwrap();
    assert_eq!(ds.row_count(), 2);
    assert_eq!(ds.column_count(), 4);
}

#[test]
fn ingest_from_path_rejects_unsupported_extension() {
    let err = ingest_from_path("tests/fixtures/people.csv", &IngestionOptions::default()).unwrap_err();
    match err {
        IngestionError::UnsupportedFormat { extension } => assert_eq!(extension, ".csv"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn uppercase_zip_path_is_not_ingested() {
    let tmp = tempfile::tempdir().unwrap();
    let archive = tmp.path().join("PEOPLE.ZIP");
    write_zip(&archive, &[("people.csv", PEOPLE_CSV)]);

    let err = ingest_from_path(&archive, &IngestionOptions::default()).unwrap_err();
    match err {
        IngestionError::UnsupportedFormat { extension } => assert_eq!(extension, ".ZIP"),
        other => panic!("unexpected error: {other}"),
    }
}
