use ratatui::layout::{Position, Rect};

/// Screen regions from the last draw, used to route mouse clicks.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    pub cards: Vec<(usize, Rect)>,
    pub copy_button: Option<Rect>,
    pub detail: Option<Rect>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.cards.clear();
        self.copy_button = None;
        self.detail = None;
    }

    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.cards
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(index, _)| *index)
    }

    pub fn is_copy_button(&self, column: u16, row: u16) -> bool {
        self.copy_button
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    pub fn is_detail(&self, column: u16, row: u16) -> bool {
        self.detail
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }
}

#[cfg(test)]
mod tests {
    use super::HitMap;
    use ratatui::layout::Rect;

    #[test]
    fn card_lookup_uses_recorded_areas() {
        let hits = HitMap {
            cards: vec![(0, Rect::new(0, 1, 20, 4)), (1, Rect::new(0, 5, 20, 4))],
            copy_button: Some(Rect::new(30, 20, 12, 1)),
            detail: None,
        };
        assert_eq!(hits.card_at(3, 1), Some(0));
        assert_eq!(hits.card_at(19, 8), Some(1));
        assert_eq!(hits.card_at(20, 8), None);
        assert_eq!(hits.card_at(3, 9), None);
        assert!(hits.is_copy_button(35, 20));
        assert!(!hits.is_copy_button(35, 21));
        assert!(!hits.is_detail(0, 0));
    }
}
