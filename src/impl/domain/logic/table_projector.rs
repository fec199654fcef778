//! Projection of a hierarchical report tree onto the flat list of rows that is
//! actually drawn.
//!
//! All functions here are pure. The walks use an explicit work stack rather
//! than recursion, so arbitrarily deep report hierarchies cannot exhaust the
//! call stack.

use crate::entities::{ExpansionState, FlatRow, Row};

/// Depth-first, pre-order listing of the rows reachable from `rows` through
/// expanded branches only. A collapsed row contributes its own entry; its
/// subtree is omitted entirely.
pub fn flatten<'a>(rows: &'a [Row], expansion: &ExpansionState) -> Vec<FlatRow<'a>> {
    let mut out = Vec::new();
    // Pushed in reverse so that popping yields document order.
    let mut stack: Vec<FlatRow<'a>> = rows
        .iter()
        .rev()
        .map(|row| FlatRow { row, depth: 0 })
        .collect();
    while let Some(entry) = stack.pop() {
        out.push(entry);
        if entry.row.has_children() && expansion.is_expanded(&entry.row.key) {
            stack.extend(entry.row.children.iter().rev().map(|row| FlatRow {
                row,
                depth: entry.depth + 1,
            }));
        }
    }
    out
}

/// Keys of every row with at least one child, in pre-order.
pub fn collect_expandable_keys(rows: &[Row]) -> Vec<String> {
    let mut keys = Vec::new();
    let mut stack: Vec<&Row> = rows.iter().rev().collect();
    while let Some(row) = stack.pop() {
        if row.has_children() {
            keys.push(row.key.clone());
            stack.extend(row.children.iter().rev());
        }
    }
    keys
}

/// New state with `key` flipped.
pub fn toggle(key: &str, expansion: &ExpansionState) -> ExpansionState {
    let mut next = expansion.clone();
    next.toggle(key);
    next
}

/// Total number of rows in the tree, nested rows included.
pub fn count_rows(rows: &[Row]) -> usize {
    let mut count = 0;
    let mut stack: Vec<&Row> = rows.iter().collect();
    while let Some(row) = stack.pop() {
        count += 1;
        stack.extend(row.children.iter());
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{leaf, row};

    fn revenue_tree() -> Vec<Row> {
        vec![row(
            "rev",
            "Revenue",
            ["100", "100"],
            vec![
                leaf("rev-a", "Product A", ["60", "60"]),
                leaf("rev-b", "Product B", ["40", "40"]),
            ],
        )]
    }

    fn deep_tree() -> Vec<Row> {
        vec![
            row(
                "a",
                "A",
                ["1"],
                vec![
                    row("a1", "A1", ["1"], vec![leaf("a1x", "A1x", ["1"])]),
                    leaf("a2", "A2", ["1"]),
                ],
            ),
            leaf("b", "B", ["1"]),
            row(
                "c",
                "C",
                ["1"],
                vec![row("c1", "C1", ["1"], vec![leaf("c1x", "C1x", ["1"])])],
            ),
        ]
    }

    fn keys_and_depths(flat: &[FlatRow<'_>]) -> Vec<(String, usize)> {
        flat.iter().map(|f| (f.row.key.clone(), f.depth)).collect()
    }

    #[test]
    fn empty_tree_flattens_to_nothing() {
        assert!(flatten(&[], &ExpansionState::new()).is_empty());
        assert!(collect_expandable_keys(&[]).is_empty());
    }

    #[test]
    fn collapsed_revenue_shows_only_the_group() {
        let tree = revenue_tree();
        let flat = flatten(&tree, &ExpansionState::new());
        assert_eq!(keys_and_depths(&flat), vec![("rev".to_string(), 0)]);
    }

    #[test]
    fn expanded_revenue_shows_children() {
        let tree = revenue_tree();
        let state: ExpansionState = ["rev"].into_iter().collect();
        let flat = flatten(&tree, &state);
        assert_eq!(
            keys_and_depths(&flat),
            vec![
                ("rev".to_string(), 0),
                ("rev-a".to_string(), 1),
                ("rev-b".to_string(), 1),
            ]
        );
        assert_eq!(collect_expandable_keys(&tree), vec!["rev".to_string()]);
    }

    #[test]
    fn nothing_expanded_yields_top_level_rows() {
        let tree = deep_tree();
        let flat = flatten(&tree, &ExpansionState::new());
        assert_eq!(
            keys_and_depths(&flat),
            vec![
                ("a".to_string(), 0),
                ("b".to_string(), 0),
                ("c".to_string(), 0),
            ]
        );
    }

    #[test]
    fn all_expanded_yields_every_row_once_in_pre_order() {
        let tree = deep_tree();
        let state: ExpansionState = collect_expandable_keys(&tree).into_iter().collect();
        let flat = flatten(&tree, &state);
        assert_eq!(flat.len(), count_rows(&tree));
        assert_eq!(
            keys_and_depths(&flat),
            vec![
                ("a".to_string(), 0),
                ("a1".to_string(), 1),
                ("a1x".to_string(), 2),
                ("a2".to_string(), 1),
                ("b".to_string(), 0),
                ("c".to_string(), 0),
                ("c1".to_string(), 1),
                ("c1x".to_string(), 2),
            ]
        );
    }

    #[test]
    fn collapsed_ancestor_hides_expanded_descendants() {
        let tree = deep_tree();
        // "a1" is expanded but unreachable while "a" is collapsed.
        let state: ExpansionState = ["a1", "c"].into_iter().collect();
        let flat = flatten(&tree, &state);
        assert_eq!(
            keys_and_depths(&flat),
            vec![
                ("a".to_string(), 0),
                ("b".to_string(), 0),
                ("c".to_string(), 0),
                ("c1".to_string(), 1),
            ]
        );
    }

    #[test]
    fn expandable_keys_are_pre_order_and_skip_leaves() {
        assert_eq!(
            collect_expandable_keys(&deep_tree()),
            vec!["a", "a1", "c", "c1"]
        );
    }

    #[test]
    fn toggle_is_an_involution() {
        let state: ExpansionState = ["a", "c1"].into_iter().collect();
        for key in ["a", "b", "c1", "missing"] {
            assert_eq!(toggle(key, &toggle(key, &state)), state);
        }
    }

    #[test]
    fn toggling_a_leaf_does_not_change_projection() {
        let tree = vec![leaf("x", "X", ["5"])];
        assert!(collect_expandable_keys(&tree).is_empty());

        let empty = ExpansionState::new();
        let toggled = toggle("x", &empty);
        assert!(toggled.is_expanded("x"));
        assert_eq!(flatten(&tree, &empty), flatten(&tree, &toggled));
    }

    #[test]
    fn handles_very_deep_trees() {
        let mut node = leaf("n0", "N0", ["0"]);
        for i in 1..20_000 {
            node = row(format!("n{}", i), format!("N{}", i), ["0"], vec![node]);
        }
        let tree = vec![node];
        let state: ExpansionState = collect_expandable_keys(&tree).into_iter().collect();
        let flat = flatten(&tree, &state);
        assert_eq!(flat.len(), 20_000);
        assert_eq!(flat.last().map(|f| f.depth), Some(19_999));
    }
}
