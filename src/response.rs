use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

/// Decode successful response bytes into the caller's expected shape
/// (single object, array, or scalar).
///
/// A failure here means the service answered but the answer didn't parse;
/// it surfaces as [`Error::Decode`], distinct from the service rejecting the
/// request.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(Error::Decode)
}

/// Decode the `exists` endpoints' boolean-as-JSON-string payload.
///
/// `friendships/exists` and `blocks/exists` answer with the string `"true"`
/// or `"false"` rather than a JSON boolean. Kept as a local special case
/// instead of teaching the decoder about it.
pub fn decode_bool_string(bytes: &[u8]) -> Result<bool> {
    use serde::de::Error as _;

    let value: String = decode(bytes)?;
    match value.as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(Error::Decode(serde_json::Error::custom(format!(
            "expected \"true\" or \"false\", got {:?}",
            other
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        id: String,
        name: String,
    }

    #[test]
    fn test_decode_object() {
        let probe: Probe = decode(br#"{"id":"42","name":"x"}"#).unwrap();
        assert_eq!(probe.id, "42");
        assert_eq!(probe.name, "x");
    }

    #[test]
    fn test_decode_array() {
        let probes: Vec<Probe> = decode(br#"[{"id":"1","name":"a"},{"id":"2","name":"b"}]"#).unwrap();
        assert_eq!(probes.len(), 2);
        assert_eq!(probes[1].name, "b");
    }

    #[test]
    fn test_decode_failure_is_decode_error() {
        let result: Result<Probe> = decode(b"not json at all");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_bool_string() {
        assert!(decode_bool_string(br#""true""#).unwrap());
        assert!(!decode_bool_string(br#""false""#).unwrap());
    }

    #[test]
    fn test_decode_bool_string_rejects_other() {
        assert!(matches!(decode_bool_string(br#""yes""#), Err(Error::Decode(_))));
        assert!(matches!(decode_bool_string(b"true"), Err(Error::Decode(_))));
    }
}
