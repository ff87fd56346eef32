use crate::fonts::{TextMeasurer, TextStyle};

/// Outcome of fitting a piece of text into a width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// The whole text fits on one line.
    SingleLine(String),
    /// The text was word-wrapped into these lines, top to bottom.
    Wrapped(Vec<String>),
}

impl Flow {
    /// Lines in drawing order.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Flow::SingleLine(line) => vec![line.as_str()],
            Flow::Wrapped(lines) => lines.iter().map(String::as_str).collect(),
        }
    }
}

/// Fit `text` into `max_width`: kept on one line when its width is at most
/// `max_width`, otherwise greedily word-wrapped.
pub fn flow_text<M>(text: &str, style: TextStyle, max_width: f64, measure: &M) -> Flow
where
    M: TextMeasurer + ?Sized,
{
    if measure.text_width(text, style) <= max_width {
        Flow::SingleLine(text.to_string())
    } else {
        Flow::Wrapped(wrap_words(text, style, max_width, measure))
    }
}

/// Greedy word wrap.
///
/// Words are separated by any whitespace and re-joined with single spaces.
/// A word joins the current line while the joined line's width stays
/// `<= max_width`; otherwise the current line is flushed and the word starts
/// a new one. A first word wider than `max_width` flushes an empty line
/// before it, so callers that step a cursor per line leave a gap there. A
/// single word is never split.
pub fn wrap_words<M>(text: &str, style: TextStyle, max_width: f64, measure: &M) -> Vec<String>
where
    M: TextMeasurer + ?Sized,
{
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };
        if measure.text_width(&candidate, style) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
