use crate::app::AppState;
use crate::clipboard::ClipboardSink;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const PAGE_STEP: isize = 8;

/// Returns true when the key changed something that needs a redraw.
pub(crate) fn handle_key(
    app: &mut AppState,
    key: KeyEvent,
    clipboard: &mut impl ClipboardSink,
) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return true;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            true
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_by(1),
        KeyCode::Home => app.move_cursor_to(0),
        KeyCode::End => app.move_cursor_to(usize::MAX),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_cursor(),
        KeyCode::Char('c') | KeyCode::Char('y') => app.copy_selected(clipboard),
        KeyCode::PageUp => app.scroll_detail_by(-PAGE_STEP),
        KeyCode::PageDown => app.scroll_detail_by(PAGE_STEP),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::handle_key;
    use crate::app::AppState;
    use crate::catalog::{Catalog, SequentialUuids};
    use crate::clipboard::MemoryClipboard;
    use crate::selection::Selection;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(app: &mut AppState, clipboard: &mut MemoryClipboard, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), clipboard)
    }

    #[test]
    fn arrows_move_cursor_and_enter_selects() {
        let mut app = AppState::new(Catalog::build(&mut SequentialUuids::new()));
        let mut clipboard = MemoryClipboard::default();
        assert!(press(&mut app, &mut clipboard, KeyCode::Down));
        assert!(press(&mut app, &mut clipboard, KeyCode::Char('j')));
        assert_eq!(app.selection, Selection::NoSelection);
        assert!(press(&mut app, &mut clipboard, KeyCode::Enter));
        assert_eq!(app.selection, Selection::Selected(2));
        assert!(press(&mut app, &mut clipboard, KeyCode::End));
        assert_eq!(app.cursor, 5);
        assert_eq!(app.selection, Selection::Selected(2));
    }

    #[test]
    fn copy_key_writes_selected_entry() {
        let mut app = AppState::new(Catalog::build(&mut SequentialUuids::new()));
        let mut clipboard = MemoryClipboard::default();
        press(&mut app, &mut clipboard, KeyCode::Char('c'));
        assert_eq!(clipboard.writes, 0);
        press(&mut app, &mut clipboard, KeyCode::Char(' '));
        press(&mut app, &mut clipboard, KeyCode::Char('y'));
        assert_eq!(clipboard.writes, 1);
        assert!(clipboard
            .text
            .as_deref()
            .is_some_and(|text| text.contains("\"sessionId\"")));
    }

    #[test]
    fn ctrl_c_and_q_quit() {
        let mut app = AppState::new(Catalog::build(&mut SequentialUuids::new()));
        let mut clipboard = MemoryClipboard::default();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut clipboard,
        );
        assert!(app.should_quit);
        assert_eq!(clipboard.writes, 0);

        let mut app = AppState::new(Catalog::build(&mut SequentialUuids::new()));
        press(&mut app, &mut clipboard, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
