//! Turns an answer string into display blocks, one block per line.
//!
//! The rules are applied in order: a line wrapped in `**` on both ends is a
//! heading, a line that only opens with `**` gets a bold lead segment, a line
//! opening with one of the pictographic markers is annotated, an empty line
//! is a spacer and anything else is plain text.

#[cfg(test)]
mod proptests;

const EMPHASIS: &str = "**";

const ANNOTATION_MARKERS: [char; 9] = ['🚀', '💼', '🌟', '📧', '🐙', '🏆', '⭐', '🎯', '📈'];
const WRITING_HAND: char = '✍';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayBlock {
    Heading(String),
    /// Bold lead segment followed by plain text in the same block.
    Emphasized {
        bold: String,
        rest: String,
    },
    /// Same content as a plain block with extra spacing around it.
    Annotated(String),
    Plain(String),
    Spacer,
}

pub fn format(text: &str) -> Vec<DisplayBlock> {
    text.split('\n').map(format_line).collect()
}

fn format_line(line: &str) -> DisplayBlock {
    if line.starts_with(EMPHASIS) && line.ends_with(EMPHASIS) {
        // "**" and "***" satisfy both tests with overlapping markers
        let inner = line
            .strip_prefix(EMPHASIS)
            .and_then(|s| s.strip_suffix(EMPHASIS))
            .unwrap_or_default();
        return DisplayBlock::Heading(inner.to_string());
    }

    if line.starts_with(EMPHASIS) {
        let mut parts = line.splitn(3, EMPHASIS);
        let _lead = parts.next();
        let bold = parts.next().unwrap_or_default();
        let rest = parts.next().unwrap_or_default();
        return DisplayBlock::Emphasized {
            bold: bold.to_string(),
            rest: rest.to_string(),
        };
    }

    if starts_with_annotation(line) {
        return DisplayBlock::Annotated(line.to_string());
    }

    if line.is_empty() {
        DisplayBlock::Spacer
    } else {
        DisplayBlock::Plain(line.to_string())
    }
}

fn starts_with_annotation(line: &str) -> bool {
    line.chars()
        .next()
        .is_some_and(|c| c == WRITING_HAND || ANNOTATION_MARKERS.contains(&c))
}
