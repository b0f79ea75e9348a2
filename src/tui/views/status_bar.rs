//! Status bar view
//!
//! Shows the remainder, where focus is, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::item_list::ListFocus;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let remainder = app.store.compute_totals().remainder;
    let remainder_color = if remainder.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let section = app.section(app.active_section);
    let place = if section.is_editing() {
        "editing"
    } else {
        match section.focus() {
            ListFocus::Name => "name",
            ListFocus::Amount => "amount",
            ListFocus::List => "list",
        }
    };

    let mut spans = vec![
        Span::styled(" Left: ", Style::default().fg(Color::White)),
        Span::styled(
            app.format.format(remainder),
            Style::default()
                .fg(remainder_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("{} › {}", app.active_section, place),
            Style::default().fg(Color::Cyan),
        ),
    ];

    let hints = if app.is_typing() {
        " Tab:Next  Ctrl+C:Quit  F1:Help "
    } else {
        " q:Quit  ?:Help  1-3:Section "
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
