//! Help dialog
//!
//! Lists keyboard shortcuts; any key closes it

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        heading("Everywhere"),
        key_line("Tab / Shift-Tab", "Next / previous field"),
        key_line("Ctrl+C", "Quit"),
        key_line("F1", "Show help"),
        Line::from(""),
        heading("Add form"),
        key_line("Enter", "Add entry (needs name and amount)"),
        Line::from(""),
        heading("List"),
        key_line("j/k or ↑/↓", "Move selection"),
        key_line("e or Enter", "Edit selected entry"),
        key_line("d or Del", "Delete selected entry"),
        key_line("a", "Jump to the add form"),
        key_line("h/l or ←/→", "Previous / next section"),
        key_line("1 2 3", "Income / Savings / Expenses"),
        key_line("?", "Show help"),
        key_line("q", "Quit"),
        Line::from(""),
        heading("Editing"),
        key_line("Enter", "Save"),
        key_line("Esc", "Cancel"),
        key_line("Tab", "Switch between name and amount"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

/// Create a key binding line
fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<16}", key), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}
