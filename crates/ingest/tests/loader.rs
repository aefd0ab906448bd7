use std::io::Write;

use juris_core::{category, FieldPath, SENTINEL};
use juris_ingest::{load_store, load_store_from_bytes, IngestError};
use serde_json::json;

fn envelope() -> serde_json::Value {
    json!({
        "took": 12,
        "hits": {
            "total": { "value": 3 },
            "hits": [
                { "_id": "a", "_source": {
                    "numeroProcesso": "0001",
                    "classe": { "nome": "Apelação Cível" },
                    "assuntos": ["{\"nome\":\"Dano Moral\",\"codigo\":10433}"],
                    "orgaoJulgador": { "nome": "1ª Câmara", "codigo": 9_007_199_254_740_993u64 },
                    "movimentos": [{}, {}]
                }},
                { "_id": "b" },
                { "_id": "c", "_source": { "classe": {} } }
            ]
        }
    })
}

#[test]
fn loads_records_from_envelope_bytes() {
    let bytes = serde_json::to_vec(&envelope()).unwrap();
    let store = load_store_from_bytes(&bytes, "dados_tjrj", "dados_processado").unwrap();

    assert_eq!(store.len(), 2);
    let first = &store.records()[0];
    assert_eq!(category(first, FieldPath::ClasseNome), "Apelação Cível");
    assert_eq!(category(first, FieldPath::OrgaoCodigo), "9007199254740993");
    assert_eq!(first.movement_count(), 2);
    assert_eq!(category(&store.records()[1], FieldPath::ClasseNome), SENTINEL);
}

#[test]
fn loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(envelope().to_string().as_bytes()).unwrap();

    let store = load_store(file.path(), "t", "buf").unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn empty_hits_give_empty_store() {
    let bytes = br#"{ "hits": { "hits": [] } }"#;
    let store = load_store_from_bytes(bytes, "t", "buf").unwrap();
    assert!(store.is_empty());
}

#[test]
fn reports_missing_file_and_bad_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(matches!(load_store(&missing, "t", "b"), Err(IngestError::Io { .. })));

    assert!(matches!(load_store_from_bytes(b"not json", "t", "b"), Err(IngestError::Json(_))));
    assert!(matches!(load_store_from_bytes(b"{}", "t", "b"), Err(IngestError::Envelope)));
}
