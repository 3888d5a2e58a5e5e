use super::tree::NavNode;

/// Is `node` the active target for the current `location`?
///
/// Exact path match activates any node. Top-level nodes (`level == 1`) also
/// match by prefix so a section stays lit while the user is anywhere inside
/// it; the boundary is a full path segment, `/cashboxes` matches
/// `/cashboxes/payments` but not `/cashboxes-archive`. Deeper nodes match
/// exactly only, otherwise sibling deep-links sharing a prefix would light
/// up together. `level` is the sole discriminant between the two modes.
pub fn is_active(location: &str, node: &NavNode) -> bool {
    if location == node.path {
        return true;
    }
    if node.level != 1 {
        return false;
    }
    match location.strip_prefix(node.path.as_str()) {
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

/// True iff some node under `node.children` (recursively) is active.
/// Drives auto-expansion of collapsed branches.
pub fn has_active_descendant(location: &str, node: &NavNode) -> bool {
    node.children
        .iter()
        .any(|child| is_active(location, child) || has_active_descendant(location, child))
}

/// Highlight policy: only the deepest matching node is painted as selected.
/// A branch whose descendant is active stays expanded but defers the
/// selected look to that descendant.
pub fn is_highlighted(location: &str, node: &NavNode) -> bool {
    is_active(location, node) && !has_active_descendant(location, node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_at_any_level() {
        let node = NavNode::leaf("Список", "/employees/list", 2);
        assert!(is_active("/employees/list", &node));
    }

    #[test]
    fn test_no_prefix_match_below_top_level() {
        let node = NavNode::leaf("Список", "/employees/list", 2);
        assert!(!is_active("/employees/list/5", &node));
    }

    #[test]
    fn test_prefix_match_at_top_level() {
        let node = NavNode::leaf("Кассы", "/cashboxes", 1);
        assert!(is_active("/cashboxes/payments", &node));
        assert!(is_active("/cashboxes", &node));
    }

    #[test]
    fn test_prefix_match_requires_segment_boundary() {
        let node = NavNode::leaf("Кассы", "/cashboxes", 1);
        assert!(!is_active("/cashboxes-archive", &node));
    }

    #[test]
    fn test_root_path_matches_exactly_only() {
        // "/" must not light up for every location; the next character
        // after the prefix is never another slash.
        let node = NavNode::leaf("Дашборд", "/", 1);
        assert!(is_active("/", &node));
        assert!(!is_active("/cashboxes", &node));
    }

    #[test]
    fn test_unrelated_path_is_inactive() {
        let node = NavNode::leaf("Кассы", "/cashboxes", 1);
        assert!(!is_active("/orders", &node));
    }

    #[test]
    fn test_descendant_propagates_to_ancestors() {
        let grandchild = NavNode::leaf("Детали", "/orders/list/details", 3);
        let child = NavNode::branch("Список", "/orders/list", 2, vec![grandchild]);
        let root = NavNode::branch("Заказы", "/orders-section", 1, vec![child]);

        let location = "/orders/list/details";
        assert!(has_active_descendant(location, &root));
        assert!(has_active_descendant(location, &root.children[0]));
        // The ancestors themselves do not match by their own paths.
        assert!(!is_active(location, &root));
        assert!(!is_active(location, &root.children[0]));
    }

    #[test]
    fn test_leaf_has_no_active_descendant() {
        let node = NavNode::leaf("Дашборд", "/", 1);
        assert!(!has_active_descendant("/", &node));
    }

    #[test]
    fn test_only_deepest_match_is_highlighted() {
        let child = NavNode::leaf("Платежи", "/cashboxes/payments", 2);
        let root = NavNode::branch("Кассы", "/cashboxes", 1, vec![child]);

        let location = "/cashboxes/payments";
        // The top-level node prefix-matches but its child is the real target.
        assert!(is_active(location, &root));
        assert!(!is_highlighted(location, &root));
        assert!(is_highlighted(location, &root.children[0]));
    }

    #[test]
    fn test_branch_itself_highlighted_when_no_child_matches() {
        let child = NavNode::leaf("Платежи", "/cashboxes/payments", 2);
        let root = NavNode::branch("Кассы", "/cashboxes", 1, vec![child]);
        assert!(is_highlighted("/cashboxes", &root));
    }
}
