use std::hash::Hash;

use serde::Serialize;

use super::table::FrequencyTable;

/// One cell of a primary × secondary grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell<K1, K2> {
    pub primary: K1,
    pub secondary: K2,
    pub value: f64,
}

/// Full Cartesian grid of the selected categories, primary-major.
///
/// Pairs never observed in `joint` are materialized with value 0, so the
/// result always has `top_primary.len() * top_secondary.len()` cells.
pub fn build_grid<K1, K2>(
    top_primary: &[K1],
    top_secondary: &[K2],
    joint: &FrequencyTable<(K1, K2)>,
) -> Vec<GridCell<K1, K2>>
where
    K1: Hash + Eq + Clone,
    K2: Hash + Eq + Clone,
{
    let mut cells = Vec::with_capacity(top_primary.len() * top_secondary.len());
    for primary in top_primary {
        for secondary in top_secondary {
            let key = (primary.clone(), secondary.clone());
            let value = joint.value(&key);
            let (primary, secondary) = key;
            cells.push(GridCell { primary, secondary, value });
        }
    }
    cells
}

/// Drop cells with no accumulated value (charts that plot observed pairs
/// only).
pub fn observed_cells<K1, K2>(cells: Vec<GridCell<K1, K2>>) -> Vec<GridCell<K1, K2>> {
    cells.into_iter().filter(|c| c.value != 0.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> String {
        v.to_string()
    }

    #[test]
    fn zero_fills_missing_pairs() {
        let joint: FrequencyTable<(String, String)> = [((s("A"), s("X")), 4.0)].into_iter().collect();

        let grid = build_grid(&[s("A"), s("B")], &[s("X")], &joint);
        assert_eq!(
            grid,
            vec![
                GridCell { primary: s("A"), secondary: s("X"), value: 4.0 },
                GridCell { primary: s("B"), secondary: s("X"), value: 0.0 },
            ]
        );
    }

    #[test]
    fn size_is_product() {
        let joint: FrequencyTable<(String, String)> = FrequencyTable::new();
        let p = [s("a"), s("b"), s("c")];
        let q = [s("x"), s("y")];
        let grid = build_grid(&p, &q, &joint);
        assert_eq!(grid.len(), 6);
        assert!(grid.iter().all(|c| c.value == 0.0));
        assert_eq!(grid[1].primary, "a");
        assert_eq!(grid[1].secondary, "y");
    }

    #[test]
    fn observed_filter_drops_zero_cells() {
        let joint: FrequencyTable<(String, String)> =
            [((s("A"), s("X")), 2.0), ((s("B"), s("Y")), 0.0)].into_iter().collect();
        let grid = build_grid(&[s("A"), s("B")], &[s("X"), s("Y")], &joint);
        let observed = observed_cells(grid);
        assert_eq!(observed.len(), 1);
        assert_eq!(observed[0].primary, "A");
    }
}
