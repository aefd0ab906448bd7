use indexmap::IndexSet;
use serde::Serialize;

use juris_core::{assunto_categories, category, extract, FieldPath, Record};

/// One (classe, assunto) occurrence of a process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub classe: String,
    pub assunto: String,
    pub numero_processo: String,
    pub id: String,
}

/// A classe/assunto pair that groups points.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cluster {
    pub classe: String,
    pub assunto: String,
}

/// Points restricted to the first-seen categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScatterSelection {
    pub classes: Vec<String>,
    pub assuntos: Vec<String>,
    pub clusters: Vec<Cluster>,
    pub points: Vec<ScatterPoint>,
}

/// Build scatter points for every record/subject pair, then keep only the
/// first `limit` distinct classes and subjects in encounter order (not by
/// frequency).
pub fn scatter_points<'a>(records: impl IntoIterator<Item = &'a Record>, limit: usize) -> ScatterSelection {
    let mut points = Vec::new();
    for record in records {
        let classe = category(record, FieldPath::ClasseNome);
        let numero = extract(record, FieldPath::NumeroProcesso).into_option().unwrap_or("");
        let id = extract(record, FieldPath::Id).into_option().unwrap_or("");
        for assunto in assunto_categories(record) {
            points.push(ScatterPoint {
                classe: classe.clone(),
                assunto,
                numero_processo: numero.to_string(),
                id: id.to_string(),
            });
        }
    }

    let assuntos = first_seen(points.iter().map(|p| p.assunto.as_str()), limit);
    let classes = first_seen(points.iter().map(|p| p.classe.as_str()), limit);

    points.retain(|p| assuntos.contains(p.assunto.as_str()) && classes.contains(p.classe.as_str()));

    let clusters: IndexSet<Cluster> = points
        .iter()
        .map(|p| Cluster { classe: p.classe.clone(), assunto: p.assunto.clone() })
        .collect();

    ScatterSelection {
        classes: classes.into_iter().collect(),
        assuntos: assuntos.into_iter().collect(),
        clusters: clusters.into_iter().collect(),
        points,
    }
}

fn first_seen<'a>(keys: impl Iterator<Item = &'a str>, limit: usize) -> IndexSet<String> {
    let mut seen = IndexSet::new();
    for key in keys {
        if seen.len() >= limit {
            break;
        }
        if !seen.contains(key) {
            seen.insert(key.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use juris_core::SENTINEL;
    use serde_json::json;

    fn records() -> Vec<Record> {
        vec![
            json!({
                "id": "1", "numeroProcesso": "N1",
                "classe": { "nome": "A" },
                "assuntos": ["{\"nome\":\"X\"}", "{\"nome\":\"Y\"}"]
            }),
            json!({
                "id": "2",
                "classe": { "nome": "B" },
                "assuntos": ["{\"nome\":\"Z\"}", "oops"]
            }),
            json!({ "classe": { "nome": "C" }, "assuntos": ["{\"nome\":\"X\"}"] }),
        ]
        .into_iter()
        .map(Record::from_value)
        .collect()
    }

    #[test]
    fn keeps_all_when_under_limit() {
        let sel = scatter_points(&records(), 15);
        assert_eq!(sel.points.len(), 5);
        assert_eq!(sel.assuntos, vec!["X", "Y", "Z", SENTINEL]);
        assert_eq!(sel.classes, vec!["A", "B", "C"]);
        assert_eq!(sel.clusters.len(), 5);
        assert_eq!(sel.points[2].numero_processo, "");
        assert_eq!(sel.points[2].id, "2");
    }

    #[test]
    fn limit_uses_encounter_order() {
        let sel = scatter_points(&records(), 2);
        assert_eq!(sel.assuntos, vec!["X", "Y"]);
        assert_eq!(sel.classes, vec!["A", "B"]);
        // Only A/X and A/Y survive: B has only Z and the sentinel, C is cut.
        assert_eq!(sel.points.len(), 2);
        assert_eq!(
            sel.clusters,
            vec![
                Cluster { classe: "A".into(), assunto: "X".into() },
                Cluster { classe: "A".into(), assunto: "Y".into() },
            ]
        );
    }

    #[test]
    fn zero_limit_is_empty() {
        let sel = scatter_points(&records(), 0);
        assert!(sel.points.is_empty());
        assert!(sel.clusters.is_empty());
    }
}
