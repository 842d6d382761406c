//! Property tests for the controller over random input sequences.
//!
//! Invariants:
//! - a non-blank submission grows the conversation by exactly two turns
//! - blank submissions and suggestion picks leave it unchanged
//! - turns already in the conversation never change
//! - the controller is idle between actions

use super::controller::{ ControllerState, ConversationController, DEFAULT_SUGGESTIONS };
use crate::backend::{ AnswerBackend, QueryOutcome };
use async_trait::async_trait;
use proptest::prelude::*;
use std::sync::Arc;

struct EchoBackend;

#[async_trait]
impl AnswerBackend for EchoBackend {
    async fn query(&self, text: &str) -> QueryOutcome {
        QueryOutcome::from_answer(Some(text.to_string()))
    }
}

#[derive(Debug, Clone)]
enum Action {
    Submit(String),
    Blank(String),
    Select(usize),
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        "[ \t]{0,3}[a-zA-Z?*]{1,10}[ \t]{0,3}".prop_map(Action::Submit),
        "[ \t\n\r]{0,5}".prop_map(Action::Blank),
        (0..DEFAULT_SUGGESTIONS.len()).prop_map(Action::Select),
    ]
}

fn apply(controller: &mut ConversationController, action: &Action) {
    match action {
        Action::Submit(text) | Action::Blank(text) => {
            controller.set_draft(text.clone());
            if let Some(pending) = controller.begin_submit() {
                let outcome = QueryOutcome::from_answer(Some(pending.text().to_string()));
                controller.settle(pending, outcome);
            }
        }
        Action::Select(i) => controller.select_suggestion(DEFAULT_SUGGESTIONS[*i]),
    }
}

proptest! {
    #[test]
    fn prop_length_and_history_invariants(actions in prop::collection::vec(arb_action(), 0..25)) {
        let mut controller = ConversationController::new(Arc::new(EchoBackend), "hi");

        for action in &actions {
            let before = controller.conversation().turns().to_vec();
            apply(&mut controller, action);
            let after = controller.conversation().turns();

            let expected_growth = match action {
                Action::Submit(_) => 2,
                Action::Blank(_) | Action::Select(_) => 0,
            };
            prop_assert_eq!(after.len(), before.len() + expected_growth);
            prop_assert_eq!(&after[..before.len()], &before[..]);
            prop_assert_eq!(controller.state(), ControllerState::Idle);
        }
    }

    #[test]
    fn prop_rejected_while_awaiting(first in "[a-z]{1,8}", others in prop::collection::vec("[ a-z]{0,8}", 1..6)) {
        let mut controller = ConversationController::new(Arc::new(EchoBackend), "hi");
        let pending = controller.begin_submit_text(&first);
        prop_assert!(pending.is_some());

        for text in &others {
            prop_assert!(controller.begin_submit_text(text).is_none());
            prop_assert_eq!(controller.conversation().len(), 2);
        }
    }
}
