//! TUI Views module
//!
//! Overview panel, the three collection sections, the status bar, and any
//! dialog on top.

pub mod item_list;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use crate::models::{CollectionKind, Expense, Income, SavingsAccount};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let snapshot = app.store.snapshot();

    summary::render(frame, app, layout.summary);

    let [income_area, savings_area, expense_area] = layout.sections;
    item_list::render(
        frame,
        income_area,
        &app.incomes,
        snapshot.items::<Income>(),
        app.active_section == CollectionKind::Income,
        &app.format,
    );
    item_list::render(
        frame,
        savings_area,
        &app.savings,
        snapshot.items::<SavingsAccount>(),
        app.active_section == CollectionKind::Savings,
        &app.format,
    );
    item_list::render(
        frame,
        expense_area,
        &app.expenses,
        snapshot.items::<Expense>(),
        app.active_section == CollectionKind::Expense,
        &app.format,
    );

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{AmountFormat, Locale};
    use crate::models::Money;
    use crate::store::BudgetStore;
    use crate::tui::handler::handle_event;
    use crate::tui::event::Event;
    use crate::tui::item_list::ListFocus;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn us_app(store: BudgetStore) -> App {
        App::new(store, AmountFormat::new(Locale::EnUs, "kr"))
    }

    #[test]
    fn test_empty_sections_show_placeholder() {
        let text = draw(&us_app(BudgetStore::new()));
        assert_eq!(text.matches(item_list::EMPTY_PLACEHOLDER).count(), 3);
        assert!(text.contains("Overview"));
        assert!(text.contains("Income"));
        assert!(text.contains("Savings"));
        assert!(text.contains("Expenses"));
    }

    #[test]
    fn test_records_and_totals_are_rendered() {
        let mut store = BudgetStore::new();
        store.add_item::<Income>("Salary", Money::from_whole(5000));
        store.add_item::<SavingsAccount>("BSU", Money::from_whole(1000));
        store.add_item::<Expense>("Rent", Money::from_whole(2000));

        let text = draw(&us_app(store));
        assert_eq!(text.matches(item_list::EMPTY_PLACEHOLDER).count(), 0);
        assert!(text.contains("Salary"));
        assert!(text.contains("5,000 kr"));
        assert!(text.contains("Rent"));
        assert!(text.contains("2,000 kr"));
    }

    #[test]
    fn test_deleting_only_item_shows_placeholder() {
        let mut store = BudgetStore::new();
        store.add_item::<Expense>("Rent", Money::from_whole(1500));
        let mut app = us_app(store);
        assert_eq!(draw(&app).matches(item_list::EMPTY_PLACEHOLDER).count(), 2);

        app.focus_section(CollectionKind::Expense, ListFocus::List);
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)),
        )
        .unwrap();

        assert!(app.store.items::<Expense>().is_empty());
        assert_eq!(draw(&app).matches(item_list::EMPTY_PLACEHOLDER).count(), 3);
    }

    #[test]
    fn test_focused_empty_field_keeps_its_label() {
        let app = us_app(BudgetStore::new());
        assert_eq!(app.incomes.focus, ListFocus::Name);
        let text = draw(&app);
        assert!(text.contains(CollectionKind::Income.name_label()));
        assert!(text.contains(CollectionKind::Expense.name_label()));
    }

    #[test]
    fn test_help_overlay_renders() {
        let mut app = us_app(BudgetStore::new());
        app.open_dialog(ActiveDialog::Help);
        let text = draw(&app);
        assert!(text.contains("Help"));
        assert!(text.contains("Delete selected entry"));
    }

    #[test]
    fn test_overspent_remainder_rendered_negative() {
        let mut store = BudgetStore::new();
        store.add_item::<Expense>("Rent", Money::from_whole(1500));
        let text = draw(&us_app(store));
        assert!(text.contains("-1,500 kr"));
    }
}
