/// One catalog row, laid out for a given pane width.
pub(in crate::app::view::ui) struct CardView {
    pub(super) index: usize,
    pub(super) title: String,
    pub(super) description: Vec<String>,
    pub(super) tags: Vec<String>,
    pub(super) last_updated: String,
    pub(super) is_cursor: bool,
    pub(super) is_selected: bool,
}

impl CardView {
    /// Borders, title, description, tags and date.
    pub(super) fn height(&self) -> u16 {
        let body = 3 + self.description.len();
        u16::try_from(body + 2).unwrap_or(u16::MAX)
    }
}
