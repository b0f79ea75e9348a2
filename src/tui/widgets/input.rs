//! Text input widget
//!
//! A single-line text field with a character-indexed cursor, so names like
//! "Lønn" or "Husleie ✓" edit correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Which characters an input accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    /// Digits, sign, decimal separators and grouping space
    Amount,
}

impl InputKind {
    fn accepts(&self, c: char) -> bool {
        match self {
            Self::Text => !c.is_control(),
            Self::Amount => c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | ' '),
        }
    }
}

/// A simple text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position, in chars
    cursor: usize,
    /// Shown while empty and unfocused
    pub placeholder: String,
    pub kind: InputKind,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input restricted to amount characters
    pub fn amount() -> Self {
        Self {
            kind: InputKind::Amount,
            ..Self::default()
        }
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, cursor at the end
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.set(content);
        self
    }

    /// Replace content, cursor at the end
    pub fn set(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    /// Insert a character at the cursor; rejected characters are dropped
    pub fn insert(&mut self, c: char) {
        if !self.kind.accepts(c) {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Styled spans for embedding in a larger line
    pub fn spans(&self, focused: bool) -> Vec<Span<'static>> {
        if self.content.is_empty() && !focused {
            return vec![Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            )];
        }

        let text_style = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };

        if !focused {
            return vec![Span::styled(self.content.clone(), text_style)];
        }

        let cursor_style = Style::default().fg(Color::Black).bg(Color::Cyan);
        if self.content.is_empty() {
            return vec![
                Span::raw(""),
                Span::styled("_", cursor_style),
                Span::styled(
                    format!(" {}", self.placeholder),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
        }

        let before: String = self.content.chars().take(self.cursor).collect();
        let at = self.content.chars().nth(self.cursor);
        let after: String = self.content.chars().skip(self.cursor + 1).collect();

        vec![
            Span::styled(before, text_style),
            Span::styled(at.unwrap_or('_').to_string(), cursor_style),
            Span::styled(after, text_style),
        ]
    }
}

/// Renders a [`TextInput`] on a single line
pub struct InputField<'a> {
    input: &'a TextInput,
    focused: bool,
}

impl<'a> InputField<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans = self.input.spans(self.focused);
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "Rent".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Rent");
        input.backspace();
        assert_eq!(input.value(), "Ren");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().with_content("Lønn");
        assert_eq!(input.cursor(), 4);

        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "Lnn");

        input.insert('ø');
        assert_eq!(input.value(), "Lønn");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "ønn");
    }

    #[test]
    fn test_amount_input_filters() {
        let mut input = TextInput::amount();
        for c in "1a5b0,0x-".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "150,0-");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new();
        input.move_left();
        input.backspace();
        input.delete();
        assert_eq!(input.cursor(), 0);

        input.set("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_start();
        assert_eq!(input.cursor(), 0);
        input.move_end();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new().with_content("Food");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_spans_show_placeholder_when_idle() {
        let input = TextInput::new().placeholder("Amount (kr)");
        let spans = input.spans(false);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "Amount (kr)");

        let focused = input.spans(true);
        assert_eq!(focused[1].content, "_");
        assert_eq!(focused[2].content, " Amount (kr)");
    }

    #[test]
    fn test_focused_field_hides_placeholder_once_typed() {
        let mut input = TextInput::new().placeholder("Category (e.g. Rent)");
        input.insert('R');
        let text: String = input.spans(true).iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "R_");
    }
}
