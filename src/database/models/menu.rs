use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named slot in the page layout that CMS menus are assigned to.
/// All three tables are administered by the CMS; this service only reads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MenuPlaceholder {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Menu {
    pub id: i64,
    pub placeholder_id: i64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MenuItem {
    pub id: i64,
    pub menu_id: i64,
    pub title: String,
    pub url: String,
    pub sort_order: i32,
    pub blank_target: bool,
}
