use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::patch::{BindValue, Patch};

/// Persisted shape of an activity group, straight off the `activities` table.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityRow {
    pub activity_id: i32,
    pub title: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// API shape of an activity group.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActivityGroup {
    pub id: i32,
    pub title: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<ActivityRow> for ActivityGroup {
    fn from(row: ActivityRow) -> Self {
        Self {
            id: row.activity_id,
            title: row.title,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateActivityRequest {
    pub title: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ActivityGroupPatch {
    #[serde(default)]
    pub title: Patch<String>,
}

impl ActivityGroupPatch {
    /// `column = ?` assignments and their values, in lock-step order.
    /// Title is the only patchable column on this resource.
    pub fn assignments(&self) -> (Vec<&'static str>, Vec<BindValue>) {
        let mut columns = Vec::new();
        let mut values = Vec::new();
        if let Patch::Value(title) = &self.title {
            columns.push("title = ?");
            values.push(BindValue::Text(title.clone()));
        }
        (columns, values)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn row() -> ActivityRow {
        ActivityRow {
            activity_id: 7,
            title: "Design".into(),
            email: "a@b.com".into(),
            created_at: Utc.with_ymd_and_hms(2023, 4, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 4, 2, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn row_maps_to_entity() {
        let entity = ActivityGroup::from(row());
        assert_eq!(entity.id, 7);
        assert_eq!(entity.title, "Design");
        assert_eq!(entity.email, "a@b.com");
    }

    #[test]
    fn entity_serializes_with_api_keys() {
        let json = serde_json::to_value(ActivityGroup::from(row())).unwrap();
        assert_eq!(json["id"], 7);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("activity_id").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn assignments_with_title() {
        let patch = ActivityGroupPatch {
            title: Patch::Value("New title".into()),
        };
        let (columns, values) = patch.assignments();
        assert_eq!(columns, vec!["title = ?"]);
        assert_eq!(values, vec![BindValue::Text("New title".into())]);
    }

    #[test]
    fn assignments_without_title_are_empty() {
        let (columns, values) = ActivityGroupPatch::default().assignments();
        assert!(columns.is_empty());
        assert!(values.is_empty());
    }
}
