//! Per-session dialog state machine
//!
//! Keeps routing deterministic and side-effect free: [`transition`] maps the
//! current state and user text to a next state plus a reply plan, and
//! [`DialogEngine::step`] applies the plan, calling the generation backend
//! only when a plan asks for phrasing.

mod engine;
mod order_id;
mod state;
mod transition;

#[cfg(test)]
mod proptests;

pub use engine::DialogEngine;
pub use order_id::extract_order_id;
pub use state::{DialogState, Session};
pub use transition::{
    contains_intent, transition, OrderIdAction, ReplyPlan, TransitionResult, ASK_ORDER_ID_AGAIN,
    FLOW_ENDED, GUIDE_INTENT, INTENT_KEYWORDS, NOT_AN_ORDER_ID,
};
