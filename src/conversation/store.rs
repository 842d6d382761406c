use crate::models::chat::Turn;

pub const DEFAULT_GREETING: &str =
    "Hi! I'm your AI portfolio assistant. I can tell you about my skills, projects, experience, and more. What would you like to know?";

/// Append-only, insertion-ordered list of turns.
#[derive(Clone, Debug)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::bot(greeting)],
        }
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::with_greeting(DEFAULT_GREETING)
    }
}

impl<'a> IntoIterator for &'a Conversation {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
