//! Common types used throughout pagekit
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Opaque cursor token: a map of server-issued pagination parameters
pub type CursorToken = serde_json::Map<String, JsonValue>;

// ============================================================================
// Trigger Kind
// ============================================================================

/// The kind of trigger that starts (or fails to start) a fetch cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// Restart pagination from the beginning
    Reload,
    /// Fetch the page after the most recently integrated response
    Next,
    /// Fetch the page before the most recently integrated response
    Previous,
}

impl TriggerKind {
    /// Name of this trigger as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reload => "reload",
            Self::Next => "next",
            Self::Previous => "previous",
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for cursor tokens to treat empty maps as absent
///
/// Servers that mean "no further page" sometimes send an empty token map
/// instead of omitting the field; both forms must behave identically.
pub trait TokenExt {
    /// Returns None if the token map is empty
    fn none_if_empty(self) -> Option<CursorToken>;
}

impl TokenExt for Option<CursorToken> {
    fn none_if_empty(self) -> Option<CursorToken> {
        self.filter(|token| !token.is_empty())
    }
}

impl TokenExt for CursorToken {
    fn none_if_empty(self) -> Option<CursorToken> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token(entries: &[(&str, JsonValue)]) -> CursorToken {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_trigger_kind_display() {
        assert_eq!(TriggerKind::Reload.to_string(), "reload");
        assert_eq!(TriggerKind::Next.to_string(), "next");
        assert_eq!(TriggerKind::Previous.to_string(), "previous");
    }

    #[test]
    fn test_trigger_kind_serde() {
        let kind: TriggerKind = serde_json::from_str("\"previous\"").unwrap();
        assert_eq!(kind, TriggerKind::Previous);

        let json = serde_json::to_string(&TriggerKind::Reload).unwrap();
        assert_eq!(json, "\"reload\"");
    }

    #[test]
    fn test_token_none_if_empty() {
        let populated = token(&[("next", json!(3))]);
        assert_eq!(populated.clone().none_if_empty(), Some(populated));
        assert_eq!(CursorToken::new().none_if_empty(), None);
    }

    #[test]
    fn test_option_token_none_if_empty() {
        let populated = token(&[("next", json!(3)), ("limit", json!(3))]);
        assert_eq!(
            Some(populated.clone()).none_if_empty(),
            Some(populated)
        );
        assert_eq!(Some(CursorToken::new()).none_if_empty(), None);
        assert_eq!(None::<CursorToken>.none_if_empty(), None);
    }
}
