//! Section view
//!
//! Draws one collection: add form, hint line, then the records (or an
//! empty-state placeholder). The row in edit mode shows inline inputs.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::AmountFormat;
use crate::models::LineItem;
use crate::tui::item_list::{EditField, EditState, ItemListView, ListFocus};
use crate::tui::layout::SectionLayout;
use crate::tui::widgets::InputField;

/// Shown instead of a list when the collection is empty
pub const EMPTY_PLACEHOLDER: &str = "No entries yet";

const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Render one section
pub fn render<T: LineItem>(
    frame: &mut Frame,
    area: Rect,
    view: &ItemListView<T>,
    items: &[T],
    focused: bool,
    format: &AmountFormat,
) {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .title(format!(" {} ", T::KIND.title()))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    let layout = SectionLayout::new(inner);

    let form_active = focused && !view.is_editing();
    frame.render_widget(
        InputField::new(&view.name_input).focused(form_active && view.focus == ListFocus::Name),
        layout.name,
    );
    frame.render_widget(
        InputField::new(&view.amount_input)
            .focused(form_active && view.focus == ListFocus::Amount),
        layout.amount,
    );

    frame.render_widget(
        Paragraph::new(hint(view, focused)).style(Style::default().fg(Color::DarkGray)),
        layout.hint,
    );

    if items.is_empty() {
        let placeholder = Paragraph::new(EMPTY_PLACEHOLDER).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
        frame.render_widget(placeholder, layout.list);
        return;
    }

    let row_width = layout.list.width.saturating_sub(HIGHLIGHT_SYMBOL.chars().count() as u16);
    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| match &view.editing {
            Some(edit) if edit.id == item.id() => ListItem::new(edit_line(edit, focused)),
            _ => ListItem::new(view_line(item, format, row_width as usize)),
        })
        .collect();

    let list_active = focused && view.focus == ListFocus::List;
    let highlight = if list_active {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let list = List::new(rows)
        .highlight_style(highlight)
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut state = ListState::default();
    state.select(Some(view.selected.min(items.len() - 1)));

    frame.render_stateful_widget(list, layout.list, &mut state);
}

fn hint<T: LineItem>(view: &ItemListView<T>, focused: bool) -> &'static str {
    if !focused {
        return "";
    }
    if view.is_editing() {
        return "Enter save · Esc cancel · Tab field";
    }
    match view.focus {
        ListFocus::Name | ListFocus::Amount => "Enter add · Tab next",
        ListFocus::List => "e edit · d delete · a add",
    }
}

/// Name on the left, amount flush right
fn view_line<T: LineItem>(item: &T, format: &AmountFormat, width: usize) -> Line<'static> {
    let amount = format.format(item.amount());
    let amount_color = if item.amount().is_negative() {
        Color::Red
    } else {
        Color::Yellow
    };
    let used = item.name().chars().count() + amount.chars().count();
    let padding = width.saturating_sub(used).max(1);

    Line::from(vec![
        Span::styled(item.name().to_string(), Style::default().fg(Color::White)),
        Span::raw(" ".repeat(padding)),
        Span::styled(amount, Style::default().fg(amount_color)),
    ])
}

fn edit_line<Id>(edit: &EditState<Id>, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::styled("✎ ", Style::default().fg(Color::Magenta))];
    spans.extend(edit.name.spans(focused && edit.field == EditField::Name));
    spans.push(Span::raw("  "));
    spans.extend(edit.amount.spans(focused && edit.field == EditField::Amount));
    Line::from(spans)
}
