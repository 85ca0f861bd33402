use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

pub const ACTIVITIES: &str = "activities";
pub const TODOS: &str = "todos";

pub async fn create_pool(database_url: &str) -> anyhow::Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create both tables if missing (idempotent, runs on every startup).
pub async fn ensure_tables(pool: &MySqlPool) -> anyhow::Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS activities (
            activity_id INT NOT NULL AUTO_INCREMENT,
            title VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            PRIMARY KEY (activity_id)
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS todos (
            todo_id INT NOT NULL AUTO_INCREMENT,
            activity_group_id INT NOT NULL,
            title VARCHAR(255) NOT NULL,
            priority VARCHAR(255) NULL,
            is_active BOOLEAN NOT NULL DEFAULT FALSE,
            status VARCHAR(255) NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            PRIMARY KEY (todo_id),
            FOREIGN KEY (activity_group_id) REFERENCES activities(activity_id)
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Render an UPDATE from sparse `column = ?` assignments. The trailing
/// `updated_at` touch is unconditional, so an empty assignment list still
/// produces a valid statement.
pub fn update_statement(table: &str, key_column: &str, assignments: &[&str]) -> String {
    let mut sql = format!("UPDATE {table} SET ");
    for assignment in assignments {
        sql.push_str(assignment);
        sql.push_str(", ");
    }
    sql.push_str("updated_at = CURRENT_TIMESTAMP WHERE ");
    sql.push_str(key_column);
    sql.push_str(" = ?");
    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_assignment_list_still_touches_timestamp() {
        assert_eq!(
            update_statement(TODOS, "todo_id", &[]),
            "UPDATE todos SET updated_at = CURRENT_TIMESTAMP WHERE todo_id = ?"
        );
    }

    #[test]
    fn assignments_render_in_given_order() {
        assert_eq!(
            update_statement(TODOS, "todo_id", &["title = ?", "is_active = ?"]),
            "UPDATE todos SET title = ?, is_active = ?, \
             updated_at = CURRENT_TIMESTAMP WHERE todo_id = ?"
        );
    }

    #[test]
    fn single_assignment_for_activities() {
        assert_eq!(
            update_statement(ACTIVITIES, "activity_id", &["title = ?"]),
            "UPDATE activities SET title = ?, \
             updated_at = CURRENT_TIMESTAMP WHERE activity_id = ?"
        );
    }
}
