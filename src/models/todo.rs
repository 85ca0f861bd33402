use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::patch::{BindValue, Patch};

/// Persisted shape of a todo item. `is_active` comes back from MySQL as a
/// TINYINT, so it is carried raw here and coerced by the entity mapping.
#[derive(Debug, Clone, FromRow)]
pub struct TodoRow {
    pub todo_id: i32,
    pub activity_group_id: i32,
    pub title: String,
    pub priority: Option<String>,
    pub is_active: i8,
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// API shape of a todo item. `id` and the timestamps are renamed from the
/// row; `activity_group_id` and `is_active` keep their wire names.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TodoItem {
    pub id: i32,
    pub activity_group_id: i32,
    pub title: String,
    pub priority: Option<String>,
    pub is_active: bool,
    pub status: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<TodoRow> for TodoItem {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.todo_id,
            activity_group_id: row.activity_group_id,
            title: row.title,
            priority: row.priority,
            is_active: row.is_active != 0,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub activity_group_id: Option<i32>,
}

/// Sparse patch; the identifier and the owning group are never patchable.
#[derive(Debug, Default, Deserialize)]
pub struct TodoItemPatch {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub priority: Patch<String>,
    #[serde(default)]
    pub is_active: Patch<bool>,
    #[serde(default)]
    pub status: Patch<String>,
}

impl TodoItemPatch {
    /// `column = ?` assignments and their values, in lock-step order:
    /// title, priority, is_active, status. Absent fields contribute
    /// nothing; position i in one list always matches position i in the
    /// other.
    pub fn assignments(&self) -> (Vec<&'static str>, Vec<BindValue>) {
        let mut columns = Vec::new();
        let mut values = Vec::new();
        if let Patch::Value(title) = &self.title {
            columns.push("title = ?");
            values.push(BindValue::Text(title.clone()));
        }
        if let Patch::Value(priority) = &self.priority {
            columns.push("priority = ?");
            values.push(BindValue::Text(priority.clone()));
        }
        if let Patch::Value(is_active) = &self.is_active {
            columns.push("is_active = ?");
            values.push(BindValue::Bool(*is_active));
        }
        if let Patch::Value(status) = &self.status {
            columns.push("status = ?");
            values.push(BindValue::Text(status.clone()));
        }
        (columns, values)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn row(is_active: i8) -> TodoRow {
        TodoRow {
            todo_id: 3,
            activity_group_id: 1,
            title: "Buy milk".into(),
            priority: Some("very-high".into()),
            is_active,
            status: None,
            created_at: Utc.with_ymd_and_hms(2023, 4, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 4, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn is_active_coerces_to_bool() {
        assert!(!TodoItem::from(row(0)).is_active);
        assert!(TodoItem::from(row(1)).is_active);
        // MySQL only promises zero/non-zero for TINYINT booleans
        assert!(TodoItem::from(row(2)).is_active);
    }

    #[test]
    fn entity_serializes_with_api_keys() {
        let json = serde_json::to_value(TodoItem::from(row(1))).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["activity_group_id"], 1);
        assert_eq!(json["is_active"], serde_json::Value::Bool(true));
        assert!(json.get("createdAt").is_some());
        assert!(json.get("todo_id").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn assignments_follow_fixed_field_order() {
        let patch = TodoItemPatch {
            title: Patch::Value("Walk the dog".into()),
            priority: Patch::Absent,
            is_active: Patch::Value(false),
            status: Patch::Value("pending".into()),
        };
        let (columns, values) = patch.assignments();
        assert_eq!(columns, vec!["title = ?", "is_active = ?", "status = ?"]);
        assert_eq!(
            values,
            vec![
                BindValue::Text("Walk the dog".into()),
                BindValue::Bool(false),
                BindValue::Text("pending".into()),
            ]
        );
    }

    #[test]
    fn empty_patch_yields_no_assignments() {
        let (columns, values) = TodoItemPatch::default().assignments();
        assert!(columns.is_empty());
        assert!(values.is_empty());
    }

    #[test]
    fn lists_stay_in_lock_step() {
        let patch = TodoItemPatch {
            title: Patch::Value("t".into()),
            priority: Patch::Value("low".into()),
            is_active: Patch::Value(true),
            status: Patch::Absent,
        };
        let (columns, values) = patch.assignments();
        assert_eq!(columns.len(), values.len());
        assert_eq!(columns[2], "is_active = ?");
        assert_eq!(values[2], BindValue::Bool(true));
    }
}
