mod constants;
mod detail;
mod json;
mod panels;
mod status;
mod style;
mod text;

use crate::app::AppState;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use self::constants::{LIST_WIDTH_PERCENT, SCREEN_BG};
use self::detail::render_detail;
use self::panels::render_catalog_list;
use self::status::{build_header_line, build_status_line};

pub fn draw_ui(f: &mut Frame, app: &mut AppState) {
    let size = f.area();
    app.hits.clear();
    if size.width == 0 || size.height == 0 {
        return;
    }

    f.render_widget(Clear, size);
    f.render_widget(Block::default().style(Style::default().bg(SCREEN_BG)), size);

    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(size);
    let [list_area, detail_area] = Layout::horizontal([
        Constraint::Percentage(LIST_WIDTH_PERCENT),
        Constraint::Min(0),
    ])
    .spacing(1)
    .areas(Rect {
        x: body_area.x + 1,
        width: body_area.width.saturating_sub(2),
        ..body_area
    });

    f.render_widget(Paragraph::new(build_header_line(app)), header_area);
    render_catalog_list(f, list_area, app);
    render_detail(f, detail_area, app);
    f.render_widget(
        Paragraph::new(build_status_line(app, usize::from(status_area.width))),
        status_area,
    );
}
