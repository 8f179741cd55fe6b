use ratatui::style::Color;

pub(super) const SCREEN_BG: Color = Color::Rgb(9, 9, 11);
pub(super) const CARD_BG: Color = Color::Rgb(24, 24, 27);
pub(super) const CARD_BORDER: Color = Color::Rgb(39, 39, 42);
pub(super) const CARD_SELECTED_BORDER: Color = Color::Rgb(113, 113, 122);
pub(super) const CARD_CURSOR_BORDER: Color = Color::Rgb(82, 82, 91);
pub(super) const TITLE_FG: Color = Color::Rgb(244, 244, 245);
pub(super) const MUTED_FG: Color = Color::Rgb(161, 161, 170);
pub(super) const DIM_FG: Color = Color::Rgb(113, 113, 122);
pub(super) const BADGE_BG: Color = Color::Rgb(39, 39, 42);
pub(super) const BADGE_FG: Color = Color::Rgb(212, 212, 216);
pub(super) const BUTTON_BG: Color = Color::Rgb(39, 39, 42);
pub(super) const CODE_BG: Color = Color::Rgb(15, 15, 18);

pub(super) const LIST_WIDTH_PERCENT: u16 = 33;
pub(super) const MAX_DESCRIPTION_LINES: usize = 2;
pub(super) const COPY_BUTTON_LABEL: &str = " Copy JSON ";
