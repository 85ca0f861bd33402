use sqlx::MySqlPool;

use crate::{
    db::{self, TODOS},
    models::patch::BindValue,
    models::todo::{TodoItem, TodoItemPatch, TodoRow},
};

pub struct TodoService;

impl TodoService {
    /// Two-column insert; priority, is_active and status fall back to the
    /// table defaults. Read back by the generated identifier.
    pub async fn insert(
        pool: &MySqlPool,
        activity_group_id: i32,
        title: &str,
    ) -> anyhow::Result<TodoItem> {
        let result = sqlx::query(&format!(
            "INSERT INTO {TODOS} (activity_group_id, title) VALUES (?, ?)"
        ))
        .bind(activity_group_id)
        .bind(title)
        .execute(pool)
        .await?;

        let row = sqlx::query_as::<_, TodoRow>(&format!(
            "SELECT * FROM {TODOS} WHERE todo_id = ?"
        ))
        .bind(result.last_insert_id() as i32)
        .fetch_one(pool)
        .await?;
        Ok(row.into())
    }

    pub async fn get_all(pool: &MySqlPool) -> anyhow::Result<Vec<TodoItem>> {
        let rows = sqlx::query_as::<_, TodoRow>(&format!("SELECT * FROM {TODOS}"))
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(TodoItem::from).collect())
    }

    pub async fn get_all_by_activity(
        pool: &MySqlPool,
        activity_group_id: i32,
    ) -> anyhow::Result<Vec<TodoItem>> {
        let rows = sqlx::query_as::<_, TodoRow>(&format!(
            "SELECT * FROM {TODOS} WHERE activity_group_id = ?"
        ))
        .bind(activity_group_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(TodoItem::from).collect())
    }

    pub async fn get_by_id(pool: &MySqlPool, id: i32) -> anyhow::Result<Option<TodoItem>> {
        let row = sqlx::query_as::<_, TodoRow>(&format!(
            "SELECT * FROM {TODOS} WHERE todo_id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(TodoItem::from))
    }

    /// One sparse UPDATE; existence is the caller's concern. Values are
    /// bound in the same order the assignments were emitted, id last.
    pub async fn update_by_id(
        pool: &MySqlPool,
        id: i32,
        patch: &TodoItemPatch,
    ) -> anyhow::Result<()> {
        let (columns, values) = patch.assignments();
        let sql = db::update_statement(TODOS, "todo_id", &columns);
        let mut query = sqlx::query(&sql);
        for value in values {
            query = match value {
                BindValue::Text(text) => query.bind(text),
                BindValue::Bool(flag) => query.bind(flag),
            };
        }
        query.bind(id).execute(pool).await?;
        Ok(())
    }

    pub async fn delete_by_id(pool: &MySqlPool, id: i32) -> anyhow::Result<()> {
        sqlx::query(&format!("DELETE FROM {TODOS} WHERE todo_id = ?"))
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
