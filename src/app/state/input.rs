use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

/// Single-line text field backed by `tui_textarea`.
#[derive(Default)]
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl AppTextArea<'_> {
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut area = TextArea::new(vec![text.to_string()]);
        area.move_cursor(CursorMove::End);
        Self(area)
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.0.lines().join("")
    }

    /// Feeds a key to the field. Returns true when the text changed.
    pub fn input_single_line(&mut self, key: KeyEvent) -> bool {
        let modified = self.0.input(key);
        if self.0.lines().len() > 1 {
            *self = Self::with_text(&self.value());
        }
        modified
    }
}

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_reports_modification() {
        let mut field = AppTextArea::default();
        assert!(field.input_single_line(key(KeyCode::Char('a'))));
        assert!(!field.input_single_line(key(KeyCode::Left)));
        assert_eq!(field.value(), "a");
    }

    #[test]
    fn test_newlines_are_collapsed() {
        let mut field = AppTextArea::with_text("AA");
        field.input_single_line(key(KeyCode::Enter));
        field.input_single_line(key(KeyCode::Char('P')));
        assert_eq!(field.lines().len(), 1);
        assert_eq!(field.value(), "AAP");
    }
}
