use sqlx::MySqlPool;

use crate::{
    db::{self, ACTIVITIES},
    models::activity::{ActivityGroup, ActivityGroupPatch, ActivityRow},
    models::patch::BindValue,
};

pub struct ActivityService;

impl ActivityService {
    /// Insert, then read the row back: MySQL returns no row on INSERT, only
    /// the generated identifier.
    pub async fn insert(
        pool: &MySqlPool,
        title: &str,
        email: &str,
    ) -> anyhow::Result<ActivityGroup> {
        let result = sqlx::query(&format!(
            "INSERT INTO {ACTIVITIES} (title, email) VALUES (?, ?)"
        ))
        .bind(title)
        .bind(email)
        .execute(pool)
        .await?;

        let row = sqlx::query_as::<_, ActivityRow>(&format!(
            "SELECT * FROM {ACTIVITIES} WHERE activity_id = ?"
        ))
        .bind(result.last_insert_id() as i32)
        .fetch_one(pool)
        .await?;
        Ok(row.into())
    }

    pub async fn get_all(pool: &MySqlPool) -> anyhow::Result<Vec<ActivityGroup>> {
        let rows = sqlx::query_as::<_, ActivityRow>(&format!("SELECT * FROM {ACTIVITIES}"))
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ActivityGroup::from).collect())
    }

    pub async fn get_by_id(pool: &MySqlPool, id: i32) -> anyhow::Result<Option<ActivityGroup>> {
        let row = sqlx::query_as::<_, ActivityRow>(&format!(
            "SELECT * FROM {ACTIVITIES} WHERE activity_id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(ActivityGroup::from))
    }

    /// One sparse UPDATE; existence is the caller's concern. Values are
    /// bound in the same order the assignments were emitted, id last.
    pub async fn update_by_id(
        pool: &MySqlPool,
        id: i32,
        patch: &ActivityGroupPatch,
    ) -> anyhow::Result<()> {
        let (columns, values) = patch.assignments();
        let sql = db::update_statement(ACTIVITIES, "activity_id", &columns);
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
        sqlx::query(&format!("DELETE FROM {ACTIVITIES} WHERE activity_id = ?"))
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
