//! End-to-end checks of the aggregation properties over a small dataset
//! shaped like a real court dump.

use serde_json::json;

use juris_compute::pipeline::{keys_of, Dimension};
use juris_compute::{build_grid, count_by, count_pairs, top_n, FrequencyTable, Ranked, Weighting};
use juris_core::{category, FieldPath, Record, RecordStore, SENTINEL};

fn dataset() -> RecordStore {
    vec![
        json!({
            "numeroProcesso": "0800001-10.2021.8.19.0001",
            "classe": { "nome": "Procedimento Comum Cível" },
            "assuntos": ["{\"nome\":\"Indenização por Dano Moral\"}", "{\"nome\":\"Obrigação de Fazer\"}"],
            "movimentos": [{}, {}, {}, {}]
        }),
        json!({
            "numeroProcesso": "0800002-10.2021.8.19.0001",
            "classe": { "nome": "Procedimento Comum Cível" },
            "assuntos": ["{\"nome\":\"Indenização por Dano Moral\"}"],
            "movimentos": [{}]
        }),
        json!({
            "numeroProcesso": "0800003-10.2021.8.19.0001",
            "classe": { "nome": "Execução Fiscal" },
            "assuntos": ["{\"nome\":\"IPTU\"}", "{broken"],
            "movimentos": [{}, {}]
        }),
        json!({
            "numeroProcesso": "0800004-10.2021.8.19.0001",
            "assuntos": ["{\"nome\":\"IPTU\"}"]
        }),
        json!({ "classe": { "nome": "Execução Fiscal" } }),
    ]
    .into_iter()
    .map(Record::from_value)
    .collect()
}

fn classe(r: &Record) -> String {
    category(r, FieldPath::ClasseNome)
}

#[test]
fn single_key_total_matches_fan_out() {
    let store = dataset();
    for weighting in [Weighting::Occurrences, Weighting::Movements] {
        let table = count_by(&store, |r| Dimension::Assunto.keys(r), |r| weighting.weight(r));
        let expected: f64 = store
            .iter()
            .map(|r| r.assuntos.len() as f64 * weighting.weight(r))
            .sum();
        assert_eq!(table.total(), expected);
    }
}

#[test]
fn every_record_counted_once_on_plain_field() {
    let store = dataset();
    let table = count_by(&store, |r| Some(classe(r)), |_| 1.0);
    assert_eq!(table.total(), store.len() as f64);
    assert_eq!(table.value(&SENTINEL.to_string()), 1.0);
}

#[test]
fn joint_marginals_match_independent_counts() {
    let store = dataset();
    let tables = count_pairs(
        &store,
        classe,
        |r| Dimension::Assunto.keys(r),
        |r| Weighting::Movements.weight(r),
    );

    let secondary = count_by(
        &store,
        |r| Dimension::Assunto.keys(r),
        |r| Weighting::Movements.weight(r),
    );
    assert_eq!(tables.marginal_secondary, secondary);

    let primary = count_by(
        &store,
        |r| {
            let key = classe(r);
            r.assuntos.iter().map(move |_| key.clone())
        },
        |r| Weighting::Movements.weight(r),
    );
    assert_eq!(tables.marginal_primary, primary);
}

#[test]
fn heatmap_grid_is_complete_and_stable() {
    let store = dataset();
    let tables = count_pairs(&store, classe, |r| Dimension::Assunto.keys(r), |_| 1.0);

    let top_classes = top_n(&tables.marginal_primary, 10);
    let top_assuntos = top_n(&tables.marginal_secondary, 15);
    assert_eq!(top_classes, top_n(&tables.marginal_primary, 10));

    let grid = build_grid(&keys_of(&top_classes), &keys_of(&top_assuntos), &tables.joint);
    assert_eq!(grid.len(), top_classes.len() * top_assuntos.len());
    for cell in &grid {
        let observed = tables.joint.get(&(cell.primary.clone(), cell.secondary.clone()));
        assert_eq!(cell.value, observed.unwrap_or(0.0));
    }
}

#[test]
fn worked_examples() {
    let table: FrequencyTable<String> = [("A", 5.0), ("B", 5.0), ("C", 1.0)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    assert_eq!(
        top_n(&table, 2),
        vec![Ranked::new("A".to_string(), 5.0), Ranked::new("B".to_string(), 5.0)]
    );

    let joint: FrequencyTable<(String, String)> =
        [(("A".to_string(), "X".to_string()), 4.0)].into_iter().collect();
    let grid = build_grid(&["A".to_string(), "B".to_string()], &["X".to_string()], &joint);
    let values: Vec<_> = grid.iter().map(|c| (c.primary.as_str(), c.secondary.as_str(), c.value)).collect();
    assert_eq!(values, vec![("A", "X", 4.0), ("B", "X", 0.0)]);
}
