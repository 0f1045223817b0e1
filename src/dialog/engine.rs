//! Effectful dialog step: pure routing, then reply resolution

use super::state::Session;
use super::transition::{transition, OrderIdAction, ReplyPlan};
use crate::llm::{LlmService, DEFAULT_TEMPERATURE};
use std::sync::Arc;

/// Drives sessions through the order-inquiry flow.
///
/// Every routing decision comes from [`transition`]; the generation backend
/// only phrases certain replies. A failed generation call degrades the reply
/// to a tagged diagnostic while the state change still applies.
pub struct DialogEngine {
    llm: Arc<dyn LlmService>,
}

impl DialogEngine {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self { llm }
    }

    /// Identifier of the model phrasing replies.
    pub fn model_id(&self) -> &str {
        self.llm.model_id()
    }

    /// Run one turn against `session`, mutating it in place, and return the
    /// reply text.
    ///
    /// The session is updated before the generation call, so the flow
    /// advances even when the backend is down.
    pub async fn step(&self, session: &mut Session, text: &str) -> String {
        let result = transition(session.state, text);

        session.state = result.next;
        match result.order_id {
            OrderIdAction::Keep => {}
            OrderIdAction::Set(id) => session.order_id = Some(id),
            OrderIdAction::Clear => session.order_id = None,
        }

        match result.reply {
            ReplyPlan::Fixed(reply) => reply.to_string(),
            ReplyPlan::Generate { prompt } => {
                match self.llm.generate(&prompt, DEFAULT_TEMPERATURE).await {
                    Ok(reply) => reply,
                    Err(err) => {
                        tracing::warn!(
                            kind = ?err.kind,
                            "generation failed, replying with diagnostic"
                        );
                        err.diagnostic()
                    }
                }
            }
        }
    }
}
