use serde::{Deserialize, Serialize};

/// Error body returned by the backend on failed requests.
///
/// Only `message` is relied upon; it is shown to the user verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorPayload {
    /// `message` wins over `error`; blank strings count as absent.
    pub fn text(&self) -> Option<&str> {
        [self.message.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_preferred_over_error() {
        let payload: ErrorPayload =
            serde_json::from_str(r#"{"message":"Project code exists","error":"conflict"}"#)
                .unwrap();
        assert_eq!(payload.text(), Some("Project code exists"));
    }

    #[test]
    fn test_blank_message_is_absent() {
        let payload: ErrorPayload = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(payload.text(), None);
        let payload: ErrorPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.text(), None);
    }
}
