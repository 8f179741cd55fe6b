pub(crate) mod handlers;
pub(crate) mod state;
pub(crate) mod util;
pub(crate) mod view;

use crate::app::state::{HitMap, StatusMessage};
use crate::catalog::{Catalog, CatalogEntry};
use crate::clipboard::ClipboardSink;
use crate::selection::{CopyOutcome, Selection};

pub struct AppState {
    pub catalog: Catalog,
    pub selection: Selection,
    /// Highlighted row in the catalog list; independent of the selection.
    pub cursor: usize,
    pub detail_scroll: usize,
    pub status: Option<StatusMessage>,
    pub hits: HitMap,
    pub mouse_capture_enabled: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::NoSelection,
            cursor: 0,
            detail_scroll: 0,
            status: None,
            hits: HitMap::default(),
            mouse_capture_enabled: false,
            should_quit: false,
        }
    }

    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        self.selection.entry(&self.catalog)
    }

    pub fn move_cursor_by(&mut self, delta: isize) -> bool {
        let last = self.catalog.len().saturating_sub(1);
        let next = self.cursor.saturating_add_signed(delta).min(last);
        self.move_cursor_to(next)
    }

    pub fn move_cursor_to(&mut self, index: usize) -> bool {
        let index = index.min(self.catalog.len().saturating_sub(1));
        if index == self.cursor {
            return false;
        }
        self.cursor = index;
        true
    }

    pub fn select(&mut self, index: usize) -> bool {
        let cursor_moved = self.move_cursor_to(index);
        if !self.selection.select(&self.catalog, index) {
            return cursor_moved;
        }
        self.detail_scroll = 0;
        self.status = None;
        if let Some(entry) = self.selected_entry() {
            tracing::debug!(index, entry = %entry.name, "selected catalog entry");
        }
        true
    }

    pub fn select_cursor(&mut self) -> bool {
        self.select(self.cursor)
    }

    /// Runs the copy transition and reports the result in the status line.
    pub fn copy_selected(&mut self, clipboard: &mut impl ClipboardSink) -> bool {
        let status = match self.selection.copy(&self.catalog, clipboard) {
            Ok(CopyOutcome::NothingSelected) => {
                StatusMessage::info("Select a configuration before copying")
            }
            Ok(CopyOutcome::Copied { name, bytes }) => {
                StatusMessage::success(format!("Copied {name} to clipboard ({bytes} bytes)"))
            }
            Err(error) => {
                tracing::error!(%error, "copy failed");
                StatusMessage::error(format!("Copy failed: {error}"))
            }
        };
        self.status = Some(status);
        true
    }

    pub fn scroll_detail_by(&mut self, delta: isize) -> bool {
        if self.selection.index().is_none() {
            return false;
        }
        let next = self.detail_scroll.saturating_add_signed(delta);
        if next == self.detail_scroll {
            return false;
        }
        self.detail_scroll = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::app::state::StatusKind;
    use crate::catalog::{Catalog, SequentialUuids};
    use crate::clipboard::MemoryClipboard;
    use crate::selection::Selection;

    fn app() -> AppState {
        AppState::new(Catalog::build(&mut SequentialUuids::new()))
    }

    #[test]
    fn cursor_stays_inside_catalog() {
        let mut app = app();
        assert!(!app.move_cursor_by(-1));
        assert!(app.move_cursor_by(10));
        assert_eq!(app.cursor, 5);
        assert!(!app.move_cursor_by(1));
        assert_eq!(app.selection, Selection::NoSelection);
    }

    #[test]
    fn selecting_moves_cursor_and_resets_detail_scroll() {
        let mut app = app();
        assert!(app.select(2));
        app.detail_scroll = 4;
        assert!(app.select(4));
        assert_eq!(app.cursor, 4);
        assert_eq!(app.detail_scroll, 0);
        assert_eq!(app.selection, Selection::Selected(4));
    }

    #[test]
    fn copy_without_selection_shows_hint() {
        let mut app = app();
        let mut clipboard = MemoryClipboard::default();
        app.copy_selected(&mut clipboard);
        let status = app.status.expect("status");
        assert_eq!(status.kind, StatusKind::Info);
        assert_eq!(clipboard.writes, 0);
    }

    #[test]
    fn copy_reports_success_and_errors() {
        let mut app = app();
        app.select(2);
        let mut clipboard = MemoryClipboard::default();
        app.copy_selected(&mut clipboard);
        let status = app.status.clone().expect("status");
        assert_eq!(status.kind, StatusKind::Success);
        assert!(status.text.contains("Proxy Session"));

        let mut failing = MemoryClipboard {
            fail: true,
            ..MemoryClipboard::default()
        };
        app.copy_selected(&mut failing);
        let status = app.status.expect("status");
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.starts_with("Copy failed:"));
    }

    #[test]
    fn detail_scroll_needs_a_selection() {
        let mut app = app();
        assert!(!app.scroll_detail_by(3));
        app.select(5);
        assert!(app.scroll_detail_by(3));
        assert!(app.scroll_detail_by(-10));
        assert_eq!(app.detail_scroll, 0);
    }
}
