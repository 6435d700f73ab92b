use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional text input as forms send it.
///
/// Forms distinguish a field they did not send (or sent as `null`) from one
/// they cleared. The empty string is an accepted "unset" value and skips
/// format rules that a non-empty value must satisfy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TextField {
    #[default]
    Absent,
    Empty,
    Value(String),
}

impl TextField {
    pub fn is_absent(&self) -> bool {
        matches!(self, TextField::Absent)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TextField::Empty)
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            TextField::Value(v) => Some(v),
            _ => None,
        }
    }

    /// The stored form: both the empty and the absent case become `None`.
    pub fn into_option(self) -> Option<String> {
        match self {
            TextField::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Option<String>> for TextField {
    fn from(value: Option<String>) -> Self {
        match value {
            None => TextField::Absent,
            Some(v) if v.is_empty() => TextField::Empty,
            Some(v) => TextField::Value(v),
        }
    }
}

impl From<&str> for TextField {
    fn from(value: &str) -> Self {
        Some(value.to_owned()).into()
    }
}

impl<'de> Deserialize<'de> for TextField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.into())
    }
}

impl Serialize for TextField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TextField::Absent => serializer.serialize_none(),
            TextField::Empty => serializer.serialize_str(""),
            TextField::Value(v) => serializer.serialize_str(v),
        }
    }
}
