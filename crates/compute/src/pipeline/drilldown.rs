use juris_core::{extract, FieldPath, Record};

use super::dimension::Dimension;

/// Label used for a process without a number.
pub const UNNUMBERED: &str = "Sem número";

/// Process numbers of records that fall in a grid cell, in store order.
pub fn processes_in_cell<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    primary: (Dimension, &str),
    secondary: (Dimension, &str),
) -> Vec<String> {
    records
        .into_iter()
        .filter(|r| primary.0.matches(r, primary.1) && secondary.0.matches(r, secondary.1))
        .map(|r| {
            extract(r, FieldPath::NumeroProcesso)
                .into_option()
                .unwrap_or(UNNUMBERED)
                .to_string()
        })
        .collect()
}
