pub mod chat;
pub mod query;
