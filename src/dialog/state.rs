//! Dialog session state types

use serde::{Deserialize, Serialize};

/// Where a conversation sits in the order-inquiry flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogState {
    /// No intent expressed yet
    #[default]
    WaitingIntent,

    /// Intent recognized, waiting for an order id
    WaitingOrderId,

    /// Order id captured, flow finished
    Done,
}

impl DialogState {
    /// Wire name, matching the serde representation. Used for log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            DialogState::WaitingIntent => "waiting_intent",
            DialogState::WaitingOrderId => "waiting_order_id",
            DialogState::Done => "done",
        }
    }
}

/// Per-key conversation state, mutated in place on every turn.
///
/// `order_id` is set only on the transition into [`DialogState::Done`] and
/// cleared when the flow re-enters [`DialogState::WaitingOrderId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub state: DialogState,
    pub order_id: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_serde() {
        for state in [
            DialogState::WaitingIntent,
            DialogState::WaitingOrderId,
            DialogState::Done,
        ] {
            let json = serde_json::to_value(state).unwrap();
            assert_eq!(json, serde_json::Value::String(state.as_str().to_string()));
        }
    }

    #[test]
    fn test_round_trip() {
        let state: DialogState = serde_json::from_str("\"waiting_order_id\"").unwrap();
        assert_eq!(state, DialogState::WaitingOrderId);
    }

    #[test]
    fn test_unknown_wire_name_is_rejected() {
        let result = serde_json::from_str::<DialogState>("\"confused\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_session_waits_for_intent() {
        let session = Session::new();
        assert_eq!(session.state, DialogState::WaitingIntent);
        assert_eq!(session.order_id, None);
    }
}
