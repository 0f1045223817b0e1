//! Property-based tests for extraction and routing

use super::order_id::extract_order_id;
use super::state::DialogState;
use super::transition::{transition, OrderIdAction, ReplyPlan, INTENT_KEYWORDS, NOT_AN_ORDER_ID};
use proptest::prelude::*;

fn arb_state() -> impl Strategy<Value = DialogState> {
    prop_oneof![
        Just(DialogState::WaitingIntent),
        Just(DialogState::WaitingOrderId),
        Just(DialogState::Done),
    ]
}

proptest! {
    // Whatever extraction returns is a 4-12 digit run taken from the input.
    #[test]
    fn extracted_id_is_a_bounded_digit_run(text in "\\PC*") {
        if let Some(id) = extract_order_id(&text) {
            prop_assert!(id.chars().all(char::is_numeric));
            prop_assert!((4..=12).contains(&id.chars().count()));
            prop_assert!(text.contains(id));
        }
    }

    // Bare digit strings extract exactly when their length is in bounds.
    #[test]
    fn bare_digit_run_extraction_matches_length(len in 1usize..24) {
        let text = "7".repeat(len);
        let expected = (4..=12).contains(&len);
        prop_assert_eq!(extract_order_id(&text).is_some(), expected);
    }

    // Gluing a word character to either end suppresses extraction.
    #[test]
    fn adjacent_word_chars_suppress_extraction(len in 4usize..13) {
        let digits = "5".repeat(len);
        let leading = format!("x{digits}");
        let trailing = format!("{digits}x");
        let unicode = format!("订{digits}");
        let underscored = format!("_{digits}_");
        prop_assert_eq!(extract_order_id(&leading), None);
        prop_assert_eq!(extract_order_id(&trailing), None);
        prop_assert_eq!(extract_order_id(&unicode), None);
        prop_assert_eq!(extract_order_id(&underscored), None);
    }

    // Routing is a pure function of state and text.
    #[test]
    fn transition_is_deterministic(state in arb_state(), text in "\\PC*") {
        prop_assert_eq!(transition(state, &text), transition(state, &text));
    }

    // An order id is stored only on the transition into Done, and cleared
    // only when a finished flow restarts.
    #[test]
    fn order_id_actions_track_state_changes(state in arb_state(), text in "\\PC*") {
        let result = transition(state, &text);
        match result.order_id {
            OrderIdAction::Set(ref id) => {
                prop_assert_eq!(result.next, DialogState::Done);
                prop_assert_eq!(extract_order_id(&text), Some(id.as_str()));
            }
            OrderIdAction::Clear => {
                prop_assert_eq!(state, DialogState::Done);
                prop_assert_eq!(result.next, DialogState::WaitingOrderId);
            }
            OrderIdAction::Keep => {}
        }
    }

    // Any text containing a keyword advances WaitingIntent.
    #[test]
    fn intent_keyword_always_advances(
        prefix in "\\PC{0,8}",
        suffix in "\\PC{0,8}",
        kw_idx in 0usize..INTENT_KEYWORDS.len(),
    ) {
        let text = format!("{prefix}{}{suffix}", INTENT_KEYWORDS[kw_idx]);
        let result = transition(DialogState::WaitingIntent, &text);
        prop_assert_eq!(result.next, DialogState::WaitingOrderId);
        let is_generate = matches!(result.reply, ReplyPlan::Generate { .. });
        prop_assert!(is_generate);
    }

    // Keyword-free, digit-free text never moves WaitingOrderId.
    #[test]
    fn waiting_order_id_holds_without_an_id(text in "[a-z ]{0,20}") {
        let result = transition(DialogState::WaitingOrderId, &text);
        prop_assert_eq!(result.next, DialogState::WaitingOrderId);
        prop_assert_eq!(result.order_id, OrderIdAction::Keep);
        prop_assert_eq!(result.reply, ReplyPlan::Fixed(NOT_AN_ORDER_ID));
    }

    // Done never routes anywhere but Done or WaitingOrderId.
    #[test]
    fn done_only_restarts_or_stays(text in "\\PC*") {
        let result = transition(DialogState::Done, &text);
        prop_assert!(matches!(
            result.next,
            DialogState::Done | DialogState::WaitingOrderId
        ));
    }
}
