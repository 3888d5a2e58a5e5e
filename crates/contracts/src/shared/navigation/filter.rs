use std::collections::HashSet;

use super::tree::NavNode;

/// Returns the subtree visible to a caller holding `granted`.
///
/// Evaluated bottom-up: a node survives when it is public (no `permission`),
/// when its permission is granted, or when at least one child survived.
/// The last rule keeps a gated branch visible as a plain folder whenever the
/// caller can see something inside it; real enforcement happens server-side,
/// the menu only decides what is worth showing.
///
/// The input is never mutated. Surviving nodes are rebuilt with their
/// filtered children so two permission sets can filter the same static tree
/// concurrently. Sibling order is preserved; a missing or misspelled
/// identifier simply never matches (the node fails closed, silently).
pub fn filter_tree(nodes: &[NavNode], granted: &HashSet<String>) -> Vec<NavNode> {
    nodes.iter().fold(Vec::new(), |mut visible, node| {
        let visible_children = filter_tree(&node.children, granted);

        let is_public = node.permission.is_none();
        let has_direct_permission = node
            .permission
            .as_ref()
            .is_some_and(|p| granted.contains(p));

        if is_public || has_direct_permission || !visible_children.is_empty() {
            visible.push(NavNode {
                children: visible_children,
                ..node.clone()
            });
        }
        visible
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn granted(perms: &[&str]) -> HashSet<String> {
        perms.iter().map(|p| p.to_string()).collect()
    }

    /// Tree from the documented scenario: public dashboard plus a gated
    /// cashbox branch with a gated payments leaf.
    fn sample_tree() -> Vec<NavNode> {
        vec![
            NavNode::leaf("Дашборд", "/", 1),
            NavNode::branch(
                "Кассы",
                "/cashboxes",
                1,
                vec![NavNode::leaf("Платежи", "/payments", 2).with_permission("READ_PAY")],
            )
            .with_permission("READ_CASH"),
        ]
    }

    fn labels(nodes: &[NavNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.label.as_str()).collect()
    }

    #[test]
    fn test_empty_grant_keeps_only_public_nodes() {
        let result = filter_tree(&sample_tree(), &granted(&[]));
        assert_eq!(labels(&result), vec!["Дашборд"]);
    }

    #[test]
    fn test_gated_branch_surfaces_as_folder_for_visible_child() {
        // READ_CASH is not granted; the branch still shows because its
        // child is visible.
        let result = filter_tree(&sample_tree(), &granted(&["READ_PAY"]));
        assert_eq!(labels(&result), vec!["Дашборд", "Кассы"]);
        assert_eq!(labels(&result[1].children), vec!["Платежи"]);
    }

    #[test]
    fn test_gated_leaf_is_excluded() {
        let tree = vec![NavNode::leaf("Платежи", "/payments", 1).with_permission("READ_PAY")];
        assert!(filter_tree(&tree, &granted(&[])).is_empty());
    }

    #[test]
    fn test_branch_with_direct_permission_keeps_empty_children() {
        let result = filter_tree(&sample_tree(), &granted(&["READ_CASH"]));
        assert_eq!(labels(&result), vec!["Дашборд", "Кассы"]);
        // The gated leaf is still filtered out of the surviving branch.
        assert!(result[1].children.is_empty());
    }

    #[test]
    fn test_sibling_branches_are_filtered_independently() {
        let tree = vec![
            NavNode::branch(
                "Сотрудники",
                "/employees",
                1,
                vec![NavNode::leaf("Список", "/employees/list", 2)
                    .with_permission("READ_EMPLOYEES")],
            )
            .with_permission("READ_EMPLOYEES"),
            NavNode::branch(
                "Заказы",
                "/orders",
                1,
                vec![NavNode::leaf("Список", "/orders/list", 2)],
            )
            .with_permission("READ_ORDERS"),
        ];
        let result = filter_tree(&tree, &granted(&[]));
        // Employees branch disappears entirely; the orders branch survives
        // through its public child.
        assert_eq!(labels(&result), vec!["Заказы"]);
        assert_eq!(labels(&result[0].children), vec!["Список"]);
    }

    #[test]
    fn test_leaf_nodes_do_not_grow_children() {
        let result = filter_tree(&sample_tree(), &granted(&[]));
        assert!(result[0].children.is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let tree = vec![
            NavNode::leaf("C", "/c", 1),
            NavNode::leaf("A", "/a", 1),
            NavNode::leaf("B", "/b", 1).with_permission("HIDDEN"),
            NavNode::leaf("D", "/d", 1),
        ];
        let result = filter_tree(&tree, &granted(&[]));
        assert_eq!(labels(&result), vec!["C", "A", "D"]);
    }

    #[test]
    fn test_granting_more_never_hides_nodes() {
        // Visibility monotonicity: G1 ⊆ G2 implies visible(G1) ⊆ visible(G2).
        fn all_paths(nodes: &[NavNode]) -> Vec<String> {
            let mut out = Vec::new();
            for n in nodes {
                out.push(n.path.clone());
                out.extend(all_paths(&n.children));
            }
            out
        }

        let g1 = granted(&["READ_PAY"]);
        let g2 = granted(&["READ_PAY", "READ_CASH"]);
        let small = filter_tree(&sample_tree(), &g1);
        let big = filter_tree(&sample_tree(), &g2);
        let big_paths = all_paths(&big);
        for path in all_paths(&small) {
            assert!(big_paths.contains(&path), "{path} vanished after grant");
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let g = granted(&["READ_PAY"]);
        let once = filter_tree(&sample_tree(), &g);
        let twice = filter_tree(&once, &g);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_input_tree_is_untouched() {
        let tree = sample_tree();
        let before = tree.clone();
        let _ = filter_tree(&tree, &granted(&[]));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_empty_tree_yields_empty_output() {
        assert!(filter_tree(&[], &granted(&["READ_PAY"])).is_empty());
    }
}
