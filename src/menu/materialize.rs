use crate::database::manager::DatabaseError;
use crate::database::models::MenuItem;
use crate::database::store::MenuStore;
use crate::menu::node::RenderNode;

/// Fold the CMS menus assigned to `placeholder_name` into render-ready nodes.
///
/// A menu with more than one item becomes a dropdown labelled with the menu
/// title; a menu with exactly one item collapses to the bare link; an empty
/// menu emits nothing. Menu order is the store's fetch order, item order is
/// the sort field. An unknown placeholder yields an empty list, not an error.
pub async fn materialize(
    store: &impl MenuStore,
    placeholder_name: &str,
) -> Result<Vec<RenderNode>, DatabaseError> {
    let menus = store.list_menus_for_placeholder(placeholder_name).await?;

    let mut nodes = Vec::new();
    for menu in menus {
        let items = store.list_items_for_menu(menu.id).await?;
        match items.as_slice() {
            [] => {}
            [only] => nodes.push(item_link(only)),
            _ => nodes.push(RenderNode::dropdown(
                menu.title,
                items.iter().map(item_link).collect(),
            )),
        }
    }

    Ok(nodes)
}

fn item_link(item: &MenuItem) -> RenderNode {
    if item.blank_target {
        RenderNode::external_link(&item.url, &item.title)
    } else {
        RenderNode::link(&item.url, &item.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{Menu, MenuPlaceholder};
    use async_trait::async_trait;
    use serde_json::json;

    /// In-memory stand-in for the CMS tables. Menus come back in insertion
    /// order, items sorted by the sort field, mirroring the SQL contract.
    struct FakeStore {
        placeholders: Vec<MenuPlaceholder>,
        menus: Vec<Menu>,
        items: Vec<MenuItem>,
    }

    #[async_trait]
    impl MenuStore for FakeStore {
        async fn list_menus_for_placeholder(&self, name: &str) -> Result<Vec<Menu>, DatabaseError> {
            let Some(placeholder) = self.placeholders.iter().find(|p| p.name == name) else {
                return Ok(vec![]);
            };
            Ok(self
                .menus
                .iter()
                .filter(|m| m.placeholder_id == placeholder.id)
                .cloned()
                .collect())
        }

        async fn list_items_for_menu(&self, menu_id: i64) -> Result<Vec<MenuItem>, DatabaseError> {
            let mut items: Vec<MenuItem> = self
                .items
                .iter()
                .filter(|i| i.menu_id == menu_id)
                .cloned()
                .collect();
            items.sort_by_key(|i| i.sort_order);
            Ok(items)
        }
    }

    fn item(id: i64, menu_id: i64, sort_order: i32, title: &str, url: &str, blank: bool) -> MenuItem {
        MenuItem {
            id,
            menu_id,
            title: title.to_string(),
            url: url.to_string(),
            sort_order,
            blank_target: blank,
        }
    }

    fn topbar_store() -> FakeStore {
        FakeStore {
            placeholders: vec![MenuPlaceholder {
                id: 1,
                name: "TOPBAR".to_string(),
            }],
            menus: vec![Menu {
                id: 10,
                placeholder_id: 1,
                title: "Info".to_string(),
            }],
            // Inserted out of sort order on purpose
            items: vec![
                item(100, 10, 2, "About", "/about", false),
                item(101, 10, 1, "Contact", "/contact", true),
            ],
        }
    }

    #[tokio::test]
    async fn unknown_placeholder_yields_empty_list() {
        let store = topbar_store();
        let nodes = materialize(&store, "FOOTER").await.unwrap();
        assert!(nodes.is_empty());
    }

    #[tokio::test]
    async fn multi_item_menu_becomes_dropdown_in_sort_order() {
        let store = topbar_store();
        let nodes = materialize(&store, "TOPBAR").await.unwrap();
        assert_eq!(
            serde_json::to_value(&nodes).unwrap(),
            json!([{
                "type": "dropdown",
                "label": "Info",
                "items": [
                    { "type": "link", "href": "/contact", "label": "Contact", "target": "_blank" },
                    { "type": "link", "href": "/about", "label": "About" }
                ]
            }])
        );
    }

    #[tokio::test]
    async fn single_item_menu_collapses_to_bare_link() {
        let store = FakeStore {
            placeholders: vec![MenuPlaceholder {
                id: 1,
                name: "TOPBAR".to_string(),
            }],
            menus: vec![Menu {
                id: 10,
                placeholder_id: 1,
                title: "Docs".to_string(),
            }],
            items: vec![item(100, 10, 1, "Docs", "/docs", false)],
        };
        let nodes = materialize(&store, "TOPBAR").await.unwrap();
        assert_eq!(
            serde_json::to_value(&nodes).unwrap(),
            json!([{ "type": "link", "href": "/docs", "label": "Docs" }])
        );
    }

    #[tokio::test]
    async fn empty_menus_are_skipped_and_fetch_order_is_preserved() {
        let store = FakeStore {
            placeholders: vec![MenuPlaceholder {
                id: 1,
                name: "TOPBAR".to_string(),
            }],
            menus: vec![
                Menu {
                    id: 10,
                    placeholder_id: 1,
                    title: "Empty".to_string(),
                },
                Menu {
                    id: 11,
                    placeholder_id: 1,
                    title: "Help".to_string(),
                },
                Menu {
                    id: 12,
                    placeholder_id: 1,
                    title: "More".to_string(),
                },
            ],
            items: vec![
                item(100, 11, 1, "FAQ", "/faq", false),
                item(101, 12, 1, "Blog", "/blog", false),
                item(102, 12, 2, "News", "/news", false),
            ],
        };
        let nodes = materialize(&store, "TOPBAR").await.unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0], RenderNode::link("/faq", "FAQ"));
        assert!(matches!(&nodes[1], RenderNode::Dropdown(d) if d.label.as_deref() == Some("More")));
    }

    #[tokio::test]
    async fn materialize_is_idempotent_over_unchanged_data() {
        let store = topbar_store();
        let first = materialize(&store, "TOPBAR").await.unwrap();
        let second = materialize(&store, "TOPBAR").await.unwrap();
        assert_eq!(first, second);
    }
}
