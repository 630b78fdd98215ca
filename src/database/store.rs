use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Menu, MenuItem};

/// Read access to the CMS menu tables. The materializer is written against
/// this trait so it can be exercised without a database.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// Menus assigned to the named placeholder, in store order.
    async fn list_menus_for_placeholder(&self, name: &str) -> Result<Vec<Menu>, DatabaseError>;

    /// Items of one menu, ascending by sort field.
    async fn list_items_for_menu(&self, menu_id: i64) -> Result<Vec<MenuItem>, DatabaseError>;
}

pub struct PgMenuStore {
    pool: PgPool,
}

impl PgMenuStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuStore for PgMenuStore {
    async fn list_menus_for_placeholder(&self, name: &str) -> Result<Vec<Menu>, DatabaseError> {
        // Sibling order within a placeholder is whatever the store returns;
        // deliberately no ORDER BY, the fold preserves row order as-is.
        let menus = sqlx::query_as::<_, Menu>(
            "SELECT m.id, m.placeholder_id, m.title \
             FROM menus m \
             JOIN menu_placeholders p ON p.id = m.placeholder_id \
             WHERE p.name = $1",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(menus)
    }

    async fn list_items_for_menu(&self, menu_id: i64) -> Result<Vec<MenuItem>, DatabaseError> {
        let items = sqlx::query_as::<_, MenuItem>(
            "SELECT id, menu_id, title, url, sort_order, blank_target \
             FROM menu_items \
             WHERE menu_id = $1 \
             ORDER BY sort_order ASC",
        )
        .bind(menu_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}
