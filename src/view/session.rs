use log::{ info, warn };
use std::error::Error;
use std::io::Write;

use super::commands::{ self, InputCommand };
use super::input::{ InputEvent, LineSource };
use super::{
    render_banner,
    render_error,
    render_placeholder,
    render_prompt,
    render_suggestions,
    render_turn,
    render_typing,
};
use crate::conversation::ConversationController;

/// Drives the controller from `input` until `/quit`, Ctrl+C or EOF, writing
/// the transcript to `out`. Hands the controller back when the session ends.
pub async fn run_session<I, W>(
    mut controller: ConversationController,
    input: &mut I,
    out: &mut W
) -> Result<ConversationController, Box<dyn Error + Send + Sync>>
    where I: LineSource, W: Write
{
    writeln!(out, "{}", render_banner())?;
    for turn in controller.conversation() {
        writeln!(out, "{}", render_turn(turn))?;
    }
    if controller.suggestions_visible() {
        writeln!(out, "{}", render_suggestions(controller.suggestions()))?;
    }
    writeln!(out, "{}", render_placeholder())?;

    loop {
        input.set_prompt(&render_prompt(controller.draft()));
        let line = match input.read_line().await? {
            InputEvent::Line(line) => line,
            InputEvent::Eof => {
                info!("Input closed, ending session");
                break;
            }
            InputEvent::Interrupted => {
                info!("Interrupted, ending session");
                break;
            }
        };

        match commands::parse(&line) {
            InputCommand::Quit => break,
            InputCommand::Help => writeln!(out, "{}", commands::render_help())?,
            InputCommand::Select(n) => {
                match controller.suggestions().get(n - 1).cloned() {
                    Some(question) => controller.select_suggestion(&question),
                    None => {
                        warn!("No suggested question #{}", n);
                        writeln!(out, "{}", render_error(&format!("No suggested question #{}", n)))?;
                    }
                }
            }
            InputCommand::Unknown(cmd) => {
                writeln!(out, "{}", render_error(&format!("Unknown command: {}", cmd)))?;
            }
            InputCommand::Submit(text) => {
                if !text.trim().is_empty() {
                    controller.set_draft(text);
                }
                exchange(input, out, &mut controller).await?;
            }
        }
        out.flush()?;
    }

    Ok(controller)
}

async fn exchange<I, W>(
    input: &mut I,
    out: &mut W,
    controller: &mut ConversationController
) -> Result<(), Box<dyn Error + Send + Sync>>
    where I: LineSource, W: Write
{
    let Some(pending) = controller.begin_submit() else {
        return Ok(());
    };
    if let Some(turn) = controller.conversation().last() {
        writeln!(out, "{}", render_turn(turn))?;
    }
    out.flush()?;

    input.set_prompt(&render_typing());
    let outcome = controller.backend().query(pending.text()).await;
    controller.settle(pending, outcome);

    if let Some(turn) = controller.conversation().last() {
        writeln!(out, "{}", render_turn(turn))?;
    }
    if let Some(message) = controller.last_error() {
        writeln!(out, "{}", render_error(message))?;
    }
    if controller.suggestions_visible() {
        writeln!(out, "{}", render_suggestions(controller.suggestions()))?;
    }
    Ok(())
}
