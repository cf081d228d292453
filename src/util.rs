//! Small helpers shared across modules.

use serde::{Deserialize, Deserializer};

/// Deserialize a value, mapping an explicit JSON `null` to `T::default()`.
///
/// Combine with `#[serde(default)]` so that a missing field and a `null`
/// field behave the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "null_as_default")]
        values: Vec<String>,
    }

    #[test]
    fn test_null_missing_and_present() {
        let holder: Holder = serde_json::from_str(r#"{"values": null}"#).unwrap();
        assert!(holder.values.is_empty());

        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.values.is_empty());

        let holder: Holder = serde_json::from_str(r#"{"values": ["a"]}"#).unwrap();
        assert_eq!(holder.values, vec!["a"]);
    }
}
