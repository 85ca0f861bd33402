use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Request-payload problems, caught before anything reaches the store.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("title cannot be null")]
    EmptyTitle,
    #[error("{0} cannot be null")]
    MissingField(&'static str),
}

/// Uniform response body for every endpoint: `{status, message, data?}`.
/// `data` is left out of the JSON entirely when absent.
#[derive(Debug, Serialize, PartialEq)]
pub struct Envelope {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn success_one<T: Serialize>(entity: &T) -> Self {
        Self {
            status: "Success",
            message: "Success".into(),
            data: Some(serde_json::to_value(entity).unwrap_or(Value::Null)),
        }
    }

    pub fn success_many<T: Serialize>(entities: &[T]) -> Self {
        Self {
            status: "Success",
            message: "Success".into(),
            data: Some(serde_json::to_value(entities).unwrap_or(Value::Null)),
        }
    }

    pub fn success_empty() -> Self {
        Self {
            status: "Success",
            message: "Success".into(),
            data: Some(json!({})),
        }
    }

    pub fn not_found(resource: &str, id: i32) -> Self {
        Self {
            status: "Not Found",
            message: format!("{resource} with ID {id} Not Found"),
            data: None,
        }
    }

    pub fn bad_request(err: &ValidationError) -> Self {
        Self {
            status: "Bad Request",
            message: err.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_empty_carries_empty_object() {
        let envelope = Envelope::success_empty();
        assert_eq!(envelope.status, "Success");
        assert_eq!(envelope.message, "Success");
        assert_eq!(envelope.data, Some(json!({})));
    }

    #[test]
    fn not_found_names_resource_and_id() {
        let envelope = Envelope::not_found("Activity", 42);
        assert_eq!(envelope.status, "Not Found");
        assert_eq!(envelope.message, "Activity with ID 42 Not Found");
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json.get("data").is_none());
    }

    #[test]
    fn bad_request_messages() {
        assert_eq!(
            Envelope::bad_request(&ValidationError::EmptyTitle).message,
            "title cannot be null"
        );
        assert_eq!(
            Envelope::bad_request(&ValidationError::MissingField("activity_group_id")).message,
            "activity_group_id cannot be null"
        );
    }

    #[test]
    fn success_many_wraps_a_list() {
        let envelope = Envelope::success_many(&["a", "b"]);
        assert_eq!(envelope.data, Some(json!(["a", "b"])));
    }
}
