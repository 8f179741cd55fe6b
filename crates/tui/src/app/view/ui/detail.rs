use crate::app::AppState;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::{CODE_BG, COPY_BUTTON_LABEL};
use super::json::{styled_json_rows, wrap_json};
use super::style::{
    button_style, card_border_style, card_style, dim_style, muted_style, tag_badges, title_style,
};
use super::text::{truncate_to_width, visual_width};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;

fn render_placeholder(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Select a Configuration", title_style())),
        Line::from(Span::styled(
            "Click on a configuration from the left to view its details",
            muted_style(),
        )),
    ];
    f.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true }),
        area,
    );
}

pub(super) fn render_detail(f: &mut Frame, area: Rect, app: &mut AppState) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(card_border_style(false, false))
        .padding(Padding::horizontal(1))
        .style(card_style());
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let Some(entry) = app.selected_entry() else {
        render_placeholder(f, inner);
        return;
    };
    let width = usize::from(inner.width);
    let header = vec![
        Line::from(Span::styled(
            truncate_to_width(&entry.name, width),
            title_style(),
        )),
        Line::from(Span::styled(
            truncate_to_width(&entry.description, width),
            muted_style(),
        )),
        tag_badges(&entry.tags),
    ];
    let json = match entry.to_pretty_json() {
        Ok(json) => json,
        Err(error) => format!("failed to render entry: {error}"),
    };

    let header_height = HEADER_HEIGHT.min(inner.height);
    f.render_widget(
        Paragraph::new(Text::from(header)),
        Rect {
            height: header_height,
            ..inner
        },
    );

    let below_header = inner.height - header_height;
    let footer_height = FOOTER_HEIGHT.min(below_header);
    let code_area = Rect {
        y: inner.y + header_height,
        height: below_header - footer_height,
        ..inner
    };
    if code_area.height > 0 {
        let rows = wrap_json(&json, width);
        let max_scroll = rows.len().saturating_sub(usize::from(code_area.height));
        app.detail_scroll = app.detail_scroll.min(max_scroll);
        let scroll = u16::try_from(app.detail_scroll).unwrap_or(u16::MAX);
        f.render_widget(
            Paragraph::new(Text::from(styled_json_rows(&rows)))
                .style(Style::default().bg(CODE_BG))
                .scroll((scroll, 0)),
            code_area,
        );
        app.hits.detail = Some(code_area);
    }

    if footer_height == FOOTER_HEIGHT {
        let label_width = u16::try_from(visual_width(COPY_BUTTON_LABEL)).unwrap_or(u16::MAX);
        let button_area = Rect {
            x: inner.x,
            y: code_area.bottom() + 1,
            width: label_width.min(inner.width),
            height: 1,
        };
        f.render_widget(
            Paragraph::new(Span::styled(COPY_BUTTON_LABEL, button_style())),
            button_area,
        );
        let hint_x = button_area.right() + 1;
        if hint_x < inner.right() {
            f.render_widget(
                Paragraph::new(Span::styled("(c)", dim_style())),
                Rect {
                    x: hint_x,
                    width: inner.right() - hint_x,
                    ..button_area
                },
            );
        }
        app.hits.copy_button = Some(button_area);
    }
}
