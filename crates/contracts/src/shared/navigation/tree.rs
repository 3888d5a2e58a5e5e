use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Defensive recursion cap for [`validate_tree`]. The owned `Vec` structure
/// cannot form a cycle, but a runaway generated definition would still blow
/// the stack without a bound.
pub const MAX_TREE_DEPTH: u8 = 16;

/// One entry of the sidebar navigation tree.
///
/// `level` is author-supplied (1 = top level) and must match the node's real
/// distance from the root; [`validate_tree`] checks this once at startup and
/// the active matcher trusts it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavNode {
    pub label: String,
    pub path: String,
    pub level: u8,
    /// Absent = public node, always visible. Present = the caller must hold
    /// exactly this identifier for direct visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    /// Ordered; insertion order is display order. Empty = leaf.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode>,
    /// Opaque icon key resolved by the rendering layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl NavNode {
    pub fn leaf(label: &str, path: &str, level: u8) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
            level,
            permission: None,
            children: Vec::new(),
            icon: None,
        }
    }

    pub fn branch(label: &str, path: &str, level: u8, children: Vec<NavNode>) -> Self {
        Self {
            children,
            ..Self::leaf(label, path, level)
        }
    }

    pub fn with_permission(mut self, permission: &str) -> Self {
        self.permission = Some(permission.to_string());
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    /// Depth-first lookup by exact path. Used by the page host to resolve a
    /// title for the current location.
    pub fn find_by_path<'a>(nodes: &'a [NavNode], path: &str) -> Option<&'a NavNode> {
        for node in nodes {
            if node.path == path {
                return Some(node);
            }
            if let Some(found) = Self::find_by_path(&node.children, path) {
                return Some(found);
            }
        }
        None
    }
}

/// Structural defects in a static tree definition. These are programmer
/// errors: callers validate once at startup and treat a failure as fatal,
/// the hot filtering path never re-checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("node '{label}' has level {level}, expected {expected}")]
    LevelMismatch {
        label: String,
        level: u8,
        expected: u8,
    },
    #[error("duplicate sibling label '{label}' under '{parent}'")]
    DuplicateSiblingLabel { label: String, parent: String },
    #[error("tree exceeds maximum depth {max} under '{label}'")]
    TooDeep { label: String, max: u8 },
}

/// Validates level continuity, sibling-label uniqueness and bounded depth
/// over the whole tree. Roots must be level 1.
pub fn validate_tree(nodes: &[NavNode]) -> Result<(), TreeError> {
    validate_level(nodes, 1, "<root>")
}

fn validate_level(nodes: &[NavNode], expected: u8, parent: &str) -> Result<(), TreeError> {
    if expected > MAX_TREE_DEPTH {
        return Err(TreeError::TooDeep {
            label: parent.to_string(),
            max: MAX_TREE_DEPTH,
        });
    }
    let mut seen = std::collections::HashSet::new();
    for node in nodes {
        if node.level != expected {
            return Err(TreeError::LevelMismatch {
                label: node.label.clone(),
                level: node.level,
                expected,
            });
        }
        if !seen.insert(node.label.as_str()) {
            return Err(TreeError::DuplicateSiblingLabel {
                label: node.label.clone(),
                parent: parent.to_string(),
            });
        }
        validate_level(&node.children, expected + 1, &node.label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_well_formed_tree() {
        let tree = vec![
            NavNode::leaf("Дашборд", "/", 1),
            NavNode::branch(
                "Кассы",
                "/cashboxes",
                1,
                vec![NavNode::leaf("Платежи", "/cashboxes/payments", 2)],
            ),
        ];
        assert_eq!(validate_tree(&tree), Ok(()));
    }

    #[test]
    fn test_validate_rejects_level_gap() {
        let tree = vec![NavNode::branch(
            "Кассы",
            "/cashboxes",
            1,
            vec![NavNode::leaf("Платежи", "/cashboxes/payments", 3)],
        )];
        assert_eq!(
            validate_tree(&tree),
            Err(TreeError::LevelMismatch {
                label: "Платежи".to_string(),
                level: 3,
                expected: 2,
            })
        );
    }

    #[test]
    fn test_validate_rejects_non_root_top_level() {
        let tree = vec![NavNode::leaf("Платежи", "/cashboxes/payments", 2)];
        assert!(matches!(
            validate_tree(&tree),
            Err(TreeError::LevelMismatch { expected: 1, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_sibling_labels() {
        let tree = vec![
            NavNode::leaf("Отчёты", "/reports/a", 1),
            NavNode::leaf("Отчёты", "/reports/b", 1),
        ];
        assert_eq!(
            validate_tree(&tree),
            Err(TreeError::DuplicateSiblingLabel {
                label: "Отчёты".to_string(),
                parent: "<root>".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_allows_same_label_in_different_branches() {
        let tree = vec![
            NavNode::branch(
                "Кассы",
                "/cashboxes",
                1,
                vec![NavNode::leaf("Список", "/cashboxes/list", 2)],
            ),
            NavNode::branch(
                "Заказы",
                "/orders",
                1,
                vec![NavNode::leaf("Список", "/orders/list", 2)],
            ),
        ];
        assert_eq!(validate_tree(&tree), Ok(()));
    }

    #[test]
    fn test_find_by_path_descends_into_children() {
        let tree = vec![NavNode::branch(
            "Кассы",
            "/cashboxes",
            1,
            vec![NavNode::leaf("Платежи", "/cashboxes/payments", 2)],
        )];
        let found = NavNode::find_by_path(&tree, "/cashboxes/payments");
        assert_eq!(found.map(|n| n.label.as_str()), Some("Платежи"));
        assert!(NavNode::find_by_path(&tree, "/unknown").is_none());
    }

    #[test]
    fn test_node_serde_round_trip() {
        let node = NavNode::branch(
            "Кассы",
            "/cashboxes",
            1,
            vec![NavNode::leaf("Платежи", "/cashboxes/payments", 2)
                .with_permission("READ_PAYMENTS")],
        )
        .with_icon("credit-card");
        let json = serde_json::to_string(&node).unwrap();
        let back: NavNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_leaf_serializes_without_children_field() {
        let json = serde_json::to_value(NavNode::leaf("Дашборд", "/", 1)).unwrap();
        assert!(json.get("children").is_none());
        assert!(json.get("permission").is_none());
    }
}
