//! Static sidebar menu definition for the back office.
//!
//! The tree is authored here once and passed explicitly into the filter and
//! the renderer; nothing reads it through a global. Permission identifiers
//! mirror the ones issued by the backend permissions module.

use contracts::shared::navigation::NavNode;

pub mod permissions {
    pub const READ_EMPLOYEES: &str = "READ_EMPLOYEES";
    pub const READ_SALARIES: &str = "READ_SALARIES";
    pub const READ_INVENTORY: &str = "READ_INVENTORY";
    pub const READ_SUPPLIERS: &str = "READ_SUPPLIERS";
    pub const READ_ORDERS: &str = "READ_ORDERS";
    pub const READ_CASH: &str = "READ_CASH";
    pub const READ_PAY: &str = "READ_PAY";
    pub const READ_USERS: &str = "READ_USERS";
    pub const READ_PERMISSIONS: &str = "READ_PERMISSIONS";
}

use permissions::*;

/// Full navigation tree, before permission filtering.
pub fn nav_tree() -> Vec<NavNode> {
    vec![
        NavNode::leaf("Дашборд", "/", 1).with_icon("layout-dashboard"),
        NavNode::branch(
            "Сотрудники",
            "/employees",
            1,
            vec![
                NavNode::leaf("Список", "/employees/list", 2).with_icon("list"),
                NavNode::leaf("Зарплаты", "/employees/salaries", 2)
                    .with_permission(READ_SALARIES)
                    .with_icon("credit-card"),
            ],
        )
        .with_permission(READ_EMPLOYEES)
        .with_icon("users"),
        NavNode::branch(
            "Склад",
            "/inventory",
            1,
            vec![
                NavNode::leaf("Изделия", "/inventory/items", 2)
                    .with_permission(READ_INVENTORY)
                    .with_icon("package"),
                NavNode::leaf("Категории", "/inventory/categories", 2)
                    .with_permission(READ_INVENTORY)
                    .with_icon("tag"),
            ],
        )
        .with_icon("package"),
        NavNode::leaf("Поставщики", "/suppliers", 1)
            .with_permission(READ_SUPPLIERS)
            .with_icon("truck"),
        NavNode::branch(
            "Заказы",
            "/orders",
            1,
            vec![
                NavNode::leaf("Прокат", "/orders/rentals", 2)
                    .with_permission(READ_ORDERS)
                    .with_icon("file-text"),
                NavNode::leaf("Продажи", "/orders/sales", 2)
                    .with_permission(READ_ORDERS)
                    .with_icon("file-text"),
            ],
        )
        .with_icon("file-text"),
        NavNode::branch(
            "Кассы",
            "/cashboxes",
            1,
            vec![NavNode::leaf("Платежи", "/cashboxes/payments", 2)
                .with_permission(READ_PAY)
                .with_icon("credit-card")],
        )
        .with_permission(READ_CASH)
        .with_icon("cash"),
        NavNode::branch(
            "Настройки",
            "/settings",
            1,
            vec![
                NavNode::leaf("Пользователи", "/settings/users", 2)
                    .with_permission(READ_USERS)
                    .with_icon("users"),
                NavNode::leaf("Права доступа", "/settings/permissions", 2)
                    .with_permission(READ_PERMISSIONS)
                    .with_icon("shield"),
            ],
        )
        .with_icon("settings"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::navigation::validate_tree;

    #[test]
    fn test_menu_definition_is_structurally_valid() {
        validate_tree(&nav_tree()).unwrap();
    }

    #[test]
    fn test_menu_paths_are_unique() {
        fn collect<'a>(nodes: &'a [NavNode], out: &mut Vec<&'a str>) {
            for node in nodes {
                out.push(node.path.as_str());
                collect(&node.children, out);
            }
        }
        let tree = nav_tree();
        let mut paths = Vec::new();
        collect(&tree, &mut paths);
        let mut dedup = paths.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), paths.len(), "duplicate menu path");
    }

    #[test]
    fn test_public_spine_survives_empty_grant() {
        use contracts::shared::navigation::filter_tree;
        use std::collections::HashSet;

        let visible = filter_tree(&nav_tree(), &HashSet::new());
        let labels: Vec<_> = visible.iter().map(|n| n.label.as_str()).collect();
        // Dashboard is public; the inventory branch is public but loses its
        // gated children; gated top-level sections disappear.
        assert!(labels.contains(&"Дашборд"));
        assert!(labels.contains(&"Склад"));
        assert!(!labels.contains(&"Сотрудники"));
        assert!(!labels.contains(&"Кассы"));
        let inventory = visible.iter().find(|n| n.label == "Склад").unwrap();
        assert!(inventory.children.is_empty());
    }
}
