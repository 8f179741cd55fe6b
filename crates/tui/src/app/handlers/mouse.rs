use crate::app::AppState;
use crate::clipboard::ClipboardSink;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

const WHEEL_STEP: isize = 3;

pub(crate) fn handle_mouse(
    app: &mut AppState,
    mouse: MouseEvent,
    clipboard: &mut impl ClipboardSink,
) -> bool {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = app.hits.card_at(column, row) {
                return app.select(index);
            }
            if app.hits.is_copy_button(column, row) {
                return app.copy_selected(clipboard);
            }
            false
        }
        MouseEventKind::ScrollUp => {
            if app.hits.is_detail(column, row) {
                app.scroll_detail_by(-WHEEL_STEP)
            } else {
                app.move_cursor_by(-1)
            }
        }
        MouseEventKind::ScrollDown => {
            if app.hits.is_detail(column, row) {
                app.scroll_detail_by(WHEEL_STEP)
            } else {
                app.move_cursor_by(1)
            }
        }
        _ => false,
    }
}
