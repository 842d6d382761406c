//! Line input for the chat loop.
//!
//! `TerminalInput` wraps `rustyline_async::Readline` for interactive use
//! (line editing, history, Ctrl+C/Ctrl+D); `BufferedInput` reads lines from
//! any `AsyncBufRead`, which is how scripted sessions are driven.

use async_trait::async_trait;
use log::warn;
use rustyline_async::{ Readline, ReadlineError, ReadlineEvent, SharedWriter };
use std::io;
use tokio::io::{ AsyncBufRead, AsyncBufReadExt, Lines };

#[derive(Debug, PartialEq)]
pub enum InputEvent {
    Line(String),
    /// Ctrl+D or end of input.
    Eof,
    /// Ctrl+C.
    Interrupted,
}

#[async_trait(?Send)]
pub trait LineSource {
    async fn read_line(&mut self) -> io::Result<InputEvent>;

    fn set_prompt(&mut self, prompt: &str);
}

pub struct TerminalInput {
    rl: Readline,
}

impl TerminalInput {
    /// Returns the input together with the writer that prints above the
    /// prompt without clobbering it.
    pub fn new(prompt: &str) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, writer) = Readline::new(prompt.to_string())?;
        Ok((Self { rl }, writer))
    }
}

#[async_trait(?Send)]
impl LineSource for TerminalInput {
    async fn read_line(&mut self) -> io::Result<InputEvent> {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                if !line.trim().is_empty() {
                    let _ = self.rl.add_history_entry(line.clone());
                }
                Ok(InputEvent::Line(line))
            }
            Ok(ReadlineEvent::Eof) => Ok(InputEvent::Eof),
            Ok(ReadlineEvent::Interrupted) => Ok(InputEvent::Interrupted),
            Err(e) => {
                warn!("Readline error, closing input: {}", e);
                Ok(InputEvent::Eof)
            }
        }
    }

    fn set_prompt(&mut self, prompt: &str) {
        let _ = self.rl.update_prompt(prompt);
    }
}

pub struct BufferedInput<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> BufferedInput<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines() }
    }
}

#[async_trait(?Send)]
impl<R: AsyncBufRead + Unpin> LineSource for BufferedInput<R> {
    async fn read_line(&mut self) -> io::Result<InputEvent> {
        Ok(match self.lines.next_line().await? {
            Some(line) => InputEvent::Line(line),
            None => InputEvent::Eof,
        })
    }

    fn set_prompt(&mut self, _prompt: &str) {}
}
