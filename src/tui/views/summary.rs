//! Overview panel
//!
//! Totals per collection and the remainder, recomputed every frame.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the overview panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let totals = app.store.compute_totals();

    let remainder_color = if totals.is_overspent() {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        row("Total income", app.format.format(totals.income), Style::default()),
        row("Total savings", app.format.format(totals.savings), Style::default()),
        row("Total expenses", app.format.format(totals.expenses), Style::default()),
        row(
            "Remainder",
            app.format.format(totals.remainder),
            Style::default()
                .fg(remainder_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let block = Block::default()
        .title(" Overview ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn row(label: &'static str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<16}", label), Style::default().fg(Color::White)),
        Span::styled(value, value_style),
    ])
}
