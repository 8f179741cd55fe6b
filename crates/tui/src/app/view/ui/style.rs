use crate::app::state::StatusKind;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::constants::{
    BADGE_BG, BADGE_FG, BUTTON_BG, CARD_BG, CARD_BORDER, CARD_CURSOR_BORDER, CARD_SELECTED_BORDER,
    DIM_FG, MUTED_FG, TITLE_FG,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum JsonToken {
    Key,
    String,
    Number,
    Literal,
    Punctuation,
}

pub(super) fn card_style() -> Style {
    Style::default().bg(CARD_BG)
}

pub(super) fn card_border_style(is_selected: bool, is_cursor: bool) -> Style {
    let color = if is_selected {
        CARD_SELECTED_BORDER
    } else if is_cursor {
        CARD_CURSOR_BORDER
    } else {
        CARD_BORDER
    };
    let style = Style::default().fg(color).bg(CARD_BG);
    if is_selected {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

pub(super) fn title_style() -> Style {
    Style::default().fg(TITLE_FG).add_modifier(Modifier::BOLD)
}

pub(super) fn muted_style() -> Style {
    Style::default().fg(MUTED_FG)
}

pub(super) fn dim_style() -> Style {
    Style::default().fg(DIM_FG)
}

pub(super) fn badge_style() -> Style {
    Style::default().fg(BADGE_FG).bg(BADGE_BG)
}

/// Tags as padded badges separated by a single space.
pub(super) fn tag_badges(tags: &[String]) -> Line<'static> {
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for (position, tag) in tags.iter().enumerate() {
        if position > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {tag} "), badge_style()));
    }
    Line::from(spans)
}

pub(super) fn button_style() -> Style {
    Style::default()
        .fg(TITLE_FG)
        .bg(BUTTON_BG)
        .add_modifier(Modifier::BOLD)
}

pub(super) fn status_style(kind: StatusKind) -> Style {
    match kind {
        StatusKind::Info => Style::default().fg(MUTED_FG),
        StatusKind::Success => Style::default().fg(Color::Green),
        StatusKind::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

pub(super) fn json_style(token: JsonToken) -> Style {
    match token {
        JsonToken::Key => Style::default().fg(Color::LightBlue),
        JsonToken::String => Style::default().fg(Color::LightGreen),
        JsonToken::Number => Style::default().fg(Color::LightYellow),
        JsonToken::Literal => Style::default().fg(Color::LightMagenta),
        JsonToken::Punctuation => Style::default().fg(MUTED_FG),
    }
}
