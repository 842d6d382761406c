//! Terminal rendering for the chat session.
//!
//! Every turn goes through the formatter at render time; the store only
//! ever holds raw text.

pub mod commands;
pub mod input;
pub mod session;

use console::style;

use crate::formatter::{ format, DisplayBlock };
use crate::models::chat::{ Role, Turn };

const INDENT: &str = "  ";
const PLACEHOLDER: &str = "Ask me anything about my work, skills, or experience...";
const FOOTER: &str = "Connected to backend API • Real-time responses";

pub fn render_banner() -> String {
    format!(
        "\n{}{} {}\n{}{}\n{}{}\n{}{}\n",
        INDENT,
        style("✦").magenta(),
        style("Portfolio Assistant").bold(),
        INDENT,
        style("Powered by AI • Always online").dim(),
        INDENT,
        style(FOOTER).dim(),
        INDENT,
        style("Type /help for commands, Ctrl+D to exit").dim()
    )
}

pub fn render_placeholder() -> String {
    format!("{}{}", INDENT, style(PLACEHOLDER).dim().italic())
}

pub fn render_prompt(draft: &str) -> String {
    if draft.is_empty() {
        "> ".to_string()
    } else {
        format!("> [{}] ", draft)
    }
}

pub fn render_block(block: &DisplayBlock) -> String {
    match block {
        DisplayBlock::Heading(text) => format!("\n{}{}", INDENT, style(text).bold()),
        DisplayBlock::Emphasized { bold, rest } => format!("{}{}{}", INDENT, style(bold).bold(), rest),
        DisplayBlock::Annotated(text) => format!("\n{}{}", INDENT, text),
        DisplayBlock::Plain(text) => format!("{}{}", INDENT, text),
        DisplayBlock::Spacer => String::new(),
    }
}

pub fn render_turn(turn: &Turn) -> String {
    let label = match turn.role() {
        Role::User => style("You").blue().bold(),
        Role::Bot => style("Assistant").magenta().bold(),
    };
    let body: Vec<String> = format(turn.text()).iter().map(render_block).collect();
    format!("{}\n{}\n", label, body.join("\n"))
}

pub fn render_suggestions(suggestions: &[String]) -> String {
    let mut out = format!("{}{}\n", INDENT, style("Suggested questions:").dim());
    for (i, question) in suggestions.iter().enumerate() {
        out.push_str(&format!("{}{} {}\n", INDENT, style(format!("/{}", i + 1)).cyan(), question));
    }
    out
}

pub fn render_error(message: &str) -> String {
    format!("{}{}", INDENT, style(message).red())
}

pub fn render_typing() -> String {
    format!("{} {} ", style("Assistant").magenta().bold(), style("is typing...").dim())
}
