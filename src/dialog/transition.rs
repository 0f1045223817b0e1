//! Pure routing for the order-inquiry flow.
//!
//! A transition depends only on the current state and cheap text rules
//! (keyword containment, order-id extraction). Generator output never feeds
//! back into routing, so the flow a user walks through is reproducible even
//! though reply phrasing is not.

use super::order_id::extract_order_id;
use super::state::DialogState;

/// Substrings that signal an order-inquiry intent.
pub const INTENT_KEYWORDS: [&str; 5] = ["查订单", "订单", "查询", "工单", "售后"];

/// Canned reply when no intent has been expressed yet.
pub const GUIDE_INTENT: &str = "你可以说“我想查订单”，我会引导你提供订单号。";

/// Canned reply when the expected order id cannot be extracted.
pub const NOT_AN_ORDER_ID: &str = "看起来不像订单号，请发一串数字，例如：123456";

/// Canned reply when a finished flow restarts on a fresh keyword.
pub const ASK_ORDER_ID_AGAIN: &str = "请提供订单号（例如：123456）";

/// Canned reply for anything else after the flow has finished.
pub const FLOW_ENDED: &str = "流程已结束。输入“我想查订单”可重新开始。";

const ASK_ORDER_ID_PROMPT: &str =
    "你是客服机器人。请用非常简短的一句话，礼貌地让用户提供订单号（只输出一句话）。";

fn confirm_order_prompt(order_id: &str) -> String {
    format!("你是客服机器人。请用一句话确认已收到订单号 {order_id}，并询问是否还需要帮助（只输出一句话）。")
}

/// How the reply for a turn gets its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyPlan {
    /// Canned text, returned verbatim.
    Fixed(&'static str),

    /// Prompt for the generation backend. Routing is already decided by the
    /// time this is produced; the backend supplies phrasing only.
    Generate { prompt: String },
}

/// What happens to the session's stored order id this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderIdAction {
    Keep,
    Set(String),
    Clear,
}

/// Outcome of the pure routing step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub next: DialogState,
    pub order_id: OrderIdAction,
    pub reply: ReplyPlan,
}

/// True when `text` contains any intent keyword.
pub fn contains_intent(text: &str) -> bool {
    INTENT_KEYWORDS.iter().any(|kw| text.contains(kw))
}

/// Route one turn: current state plus user text in, next state plus reply
/// plan out.
///
/// Total over all states and inputs, and a pure function of them: the same
/// pair always produces the same result.
pub fn transition(state: DialogState, text: &str) -> TransitionResult {
    match state {
        DialogState::WaitingIntent => {
            if contains_intent(text) {
                TransitionResult {
                    next: DialogState::WaitingOrderId,
                    order_id: OrderIdAction::Keep,
                    reply: ReplyPlan::Generate {
                        prompt: ASK_ORDER_ID_PROMPT.to_string(),
                    },
                }
            } else {
                TransitionResult {
                    next: DialogState::WaitingIntent,
                    order_id: OrderIdAction::Keep,
                    reply: ReplyPlan::Fixed(GUIDE_INTENT),
                }
            }
        }
        DialogState::WaitingOrderId => match extract_order_id(text) {
            Some(id) => TransitionResult {
                next: DialogState::Done,
                order_id: OrderIdAction::Set(id.to_string()),
                reply: ReplyPlan::Generate {
                    prompt: confirm_order_prompt(id),
                },
            },
            None => TransitionResult {
                next: DialogState::WaitingOrderId,
                order_id: OrderIdAction::Keep,
                reply: ReplyPlan::Fixed(NOT_AN_ORDER_ID),
            },
        },
        DialogState::Done => {
            if contains_intent(text) {
                // Restart: the previous order id no longer applies.
                TransitionResult {
                    next: DialogState::WaitingOrderId,
                    order_id: OrderIdAction::Clear,
                    reply: ReplyPlan::Fixed(ASK_ORDER_ID_AGAIN),
                }
            } else {
                TransitionResult {
                    next: DialogState::Done,
                    order_id: OrderIdAction::Keep,
                    reply: ReplyPlan::Fixed(FLOW_ENDED),
                }
            }
        }
    }
}
