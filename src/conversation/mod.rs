pub mod controller;
pub mod store;

#[cfg(test)]
mod proptests;

pub use controller::{ ControllerState, ConversationController, PendingQuery };
pub use store::Conversation;
