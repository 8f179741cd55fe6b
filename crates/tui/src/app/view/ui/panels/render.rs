use crate::app::AppState;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use ratatui::Frame;
use std::ops::Range;

use super::super::style::{
    card_border_style, card_style, dim_style, muted_style, tag_badges, title_style,
};
use super::build_card_views;
use super::types::CardView;

/// Cards to draw so that the cursor card is on screen. The last card may be clipped.
pub(in crate::app::view::ui) fn visible_cards(
    heights: &[u16],
    cursor: usize,
    available: u16,
) -> Range<usize> {
    if heights.is_empty() || available == 0 {
        return 0..0;
    }
    let cursor = cursor.min(heights.len() - 1);
    let available = u32::from(available);
    let span_height =
        |range: Range<usize>| -> u32 { heights[range].iter().map(|h| u32::from(*h)).sum() };
    let mut start = 0;
    while start < cursor && span_height(start..cursor + 1) > available {
        start += 1;
    }
    let mut used = 0_u32;
    let mut end = start;
    while end < heights.len() && used < available {
        used += u32::from(heights[end]);
        end += 1;
    }
    start..end
}

fn render_card(f: &mut Frame, area: Rect, card: &CardView) {
    let border_type = if card.is_selected {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(card_border_style(card.is_selected, card.is_cursor))
        .padding(Padding::horizontal(1))
        .style(card_style());

    let mut lines = Vec::with_capacity(card.description.len() + 3);
    lines.push(Line::from(Span::styled(card.title.clone(), title_style())));
    for line in &card.description {
        lines.push(Line::from(Span::styled(line.clone(), muted_style())));
    }
    lines.push(tag_badges(&card.tags));
    lines.push(Line::from(Span::styled(
        format!("⏱ {}", card.last_updated),
        dim_style(),
    )));

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

pub(in crate::app::view::ui) fn render_catalog_list(
    f: &mut Frame,
    area: Rect,
    app: &mut AppState,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let heading = Line::from(vec![
        Span::styled("Configurations", title_style()),
        Span::styled(format!(" ({})", app.catalog.len()), dim_style()),
    ]);
    f.render_widget(Paragraph::new(heading), Rect { height: 1, ..area });

    let cards_area = Rect {
        y: area.y + 1,
        height: area.height - 1,
        ..area
    };
    let cards = build_card_views(app, usize::from(cards_area.width));
    let heights: Vec<u16> = cards.iter().map(CardView::height).collect();
    let bottom = cards_area.bottom();
    let mut y = cards_area.y;
    for card in &cards[visible_cards(&heights, app.cursor, cards_area.height)] {
        if y >= bottom {
            break;
        }
        let card_area = Rect {
            y,
            height: card.height().min(bottom - y),
            ..cards_area
        };
        render_card(f, card_area, card);
        app.hits.cards.push((card.index, card_area));
        y += card_area.height;
    }
}

#[cfg(test)]
mod tests {
    use super::visible_cards;

    #[test]
    fn everything_fits() {
        assert_eq!(visible_cards(&[5, 5, 5], 2, 20), 0..3);
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let heights = [5, 5, 5, 5, 5, 5];
        assert_eq!(visible_cards(&heights, 0, 12), 0..3);
        assert_eq!(visible_cards(&heights, 4, 12), 3..6);
        assert_eq!(visible_cards(&heights, 5, 10), 4..6);
    }

    #[test]
    fn tall_cursor_card_is_still_shown() {
        assert_eq!(visible_cards(&[5, 9], 1, 4), 1..2);
        assert_eq!(visible_cards(&[], 0, 4), 0..0);
        assert_eq!(visible_cards(&[5], 0, 0), 0..0);
    }
}
