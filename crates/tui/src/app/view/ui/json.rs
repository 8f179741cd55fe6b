use crate::app::util::text::wrap_line;
use ratatui::text::{Line, Span};

use super::style::{json_style, JsonToken};

/// A display row of pretty JSON. Continuation rows come from wrapping a long line.
pub(super) struct JsonRow {
    text: String,
    continuation: bool,
}

/// Byte index just past the closing quote of the string starting at `text[0]`.
fn string_end(text: &str) -> Option<usize> {
    let mut escaped = false;
    for (index, ch) in text.char_indices().skip(1) {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(index + 1),
            _ => {}
        }
    }
    None
}

fn value_token(value: &str) -> JsonToken {
    match value.chars().next() {
        Some('"') => JsonToken::String,
        Some(ch) if ch == '-' || ch.is_ascii_digit() => JsonToken::Number,
        Some('t' | 'f' | 'n') => JsonToken::Literal,
        _ => JsonToken::Punctuation,
    }
}

fn push_value<'a>(spans: &mut Vec<Span<'a>>, value: &'a str) {
    let (body, comma) = match value.strip_suffix(',') {
        Some(body) => (body, ","),
        None => (value, ""),
    };
    if !body.is_empty() {
        spans.push(Span::styled(body, json_style(value_token(body))));
    }
    if !comma.is_empty() {
        spans.push(Span::styled(comma, json_style(JsonToken::Punctuation)));
    }
}

/// Colors one line of `serde_json::to_string_pretty` output.
pub(super) fn highlight_json_line(line: &str) -> Line<'_> {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];
    let mut spans = Vec::with_capacity(4);
    if !indent.is_empty() {
        spans.push(Span::raw(indent));
    }
    if trimmed.starts_with('"') {
        if let Some(end) = string_end(trimmed) {
            if let Some(value) = trimmed[end..].strip_prefix(": ") {
                spans.push(Span::styled(&trimmed[..end], json_style(JsonToken::Key)));
                spans.push(Span::styled(": ", json_style(JsonToken::Punctuation)));
                push_value(&mut spans, value);
                return Line::from(spans);
            }
        }
    }
    push_value(&mut spans, trimmed);
    Line::from(spans)
}

pub(super) fn wrap_json(json: &str, width: usize) -> Vec<JsonRow> {
    let mut rows = Vec::new();
    for line in json.lines() {
        for (position, text) in wrap_line(line, width).into_iter().enumerate() {
            rows.push(JsonRow {
                text,
                continuation: position > 0,
            });
        }
    }
    rows
}

/// Wrapped rows only ever split long string values, so continuations keep the string color.
pub(super) fn styled_json_rows(rows: &[JsonRow]) -> Vec<Line<'_>> {
    rows.iter()
        .map(|row| {
            if row.continuation {
                Line::from(Span::styled(
                    row.text.as_str(),
                    json_style(JsonToken::String),
                ))
            } else {
                highlight_json_line(&row.text)
            }
        })
        .collect()
}
