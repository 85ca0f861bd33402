use serde::{Deserialize, Deserializer};

/// One field of a sparse PATCH payload.
///
/// `Absent` means the key was not supplied and the column must be left
/// untouched. `Null` and `Value` both mean the caller sent the key, so an
/// empty string or `false` is an ordinary value, never absence.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Patch<T> {
    #[default]
    Absent,
    Null,
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }
}

// Fields must carry `#[serde(default)]`: serde only calls this when the
// key is present, so a missing key falls back to `Absent`.
impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}

/// A value bound into a dynamically built UPDATE, kept in lock-step with
/// its `column = ?` assignment. The patchable columns are only text and
/// boolean, so a closed enum covers them.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Bool(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default)]
        title: Patch<String>,
        #[serde(default)]
        is_active: Patch<bool>,
    }

    #[test]
    fn missing_key_is_absent() {
        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.title, Patch::Absent);
        assert_eq!(payload.is_active, Patch::Absent);
    }

    #[test]
    fn null_is_distinct_from_absent() {
        let payload: Payload = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert_eq!(payload.title, Patch::Null);
        assert_eq!(payload.is_active, Patch::Absent);
    }

    #[test]
    fn empty_string_and_false_are_values() {
        let payload: Payload =
            serde_json::from_str(r#"{"title": "", "is_active": false}"#).unwrap();
        assert_eq!(payload.title, Patch::Value(String::new()));
        assert_eq!(payload.is_active, Patch::Value(false));
    }
}
