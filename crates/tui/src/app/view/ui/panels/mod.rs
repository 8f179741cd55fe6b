mod render;
mod types;

use crate::app::util::text::wrap_words;
use crate::app::AppState;

use super::constants::MAX_DESCRIPTION_LINES;
use super::text::truncate_to_width;
use types::CardView;

pub(super) use render::render_catalog_list;

/// Border and one column of padding on each side.
const CARD_CHROME_WIDTH: usize = 4;

pub(super) fn build_card_views(app: &AppState, width: usize) -> Vec<CardView> {
    let content_width = width.saturating_sub(CARD_CHROME_WIDTH).max(1);
    let selected = app.selection.index();
    app.catalog
        .list()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let mut description = wrap_words(&entry.description, content_width);
            if description.len() > MAX_DESCRIPTION_LINES {
                description.truncate(MAX_DESCRIPTION_LINES);
                if let Some(last) = description.last_mut() {
                    *last = truncate_to_width(&format!("{last}..."), content_width);
                }
            }
            CardView {
                index,
                title: truncate_to_width(&entry.name, content_width),
                description,
                tags: entry.tags.clone(),
                last_updated: entry.last_updated.clone(),
                is_cursor: app.cursor == index,
                is_selected: selected == Some(index),
            }
        })
        .collect()
}
