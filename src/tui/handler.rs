//! Event handler for the TUI
//!
//! Routes keyboard events to the active section, falling back to global
//! keys for anything the section leaves alone.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::CollectionKind;

use super::app::{ActiveDialog, App};
use super::event::Event;
use super::item_list::{KeyOutcome, ListFocus};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    // Ctrl+C always quits, even mid-edit
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.dispatch_to_section(key) {
        KeyOutcome::Consumed => {}
        KeyOutcome::FocusNext => app.focus_next_section(),
        KeyOutcome::FocusPrev => app.focus_prev_section(),
        KeyOutcome::Ignored => handle_global_key(app, key),
    }

    Ok(())
}

/// Keys not claimed by the active section
fn handle_global_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::F(1) => app.open_dialog(ActiveDialog::Help),
        // Letters only reach here from the list, never from a text field
        _ if app.is_typing() => {}
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('a') => {
            let section = app.active_section;
            app.focus_section(section, ListFocus::Name);
        }
        KeyCode::Char('1') => app.focus_section(CollectionKind::Income, ListFocus::List),
        KeyCode::Char('2') => app.focus_section(CollectionKind::Savings, ListFocus::List),
        KeyCode::Char('3') => app.focus_section(CollectionKind::Expense, ListFocus::List),
        KeyCode::Right | KeyCode::Char('l') => app.focus_next_section_list(),
        KeyCode::Left | KeyCode::Char('h') => app.focus_prev_section_list(),
        _ => {}
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, _key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::AmountFormat;
    use crate::models::{Expense, Income, Money};
    use crate::store::BudgetStore;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn new_app() -> App {
        App::new(BudgetStore::new(), AmountFormat::default())
    }

    #[test]
    fn test_full_add_flow_through_keys() {
        let mut app = new_app();
        type_text(&mut app, "Salary");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "5000");
        press(&mut app, KeyCode::Enter);

        // Tab through: amount -> list -> savings name
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_section, CollectionKind::Savings);
        type_text(&mut app, "BSU");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "1000");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_section, CollectionKind::Expense);
        type_text(&mut app, "Rent");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "2000");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.compute_totals().remainder, Money::from_whole(2000));
    }

    #[test]
    fn test_q_in_text_field_is_typed_not_quit() {
        let mut app = new_app();
        type_text(&mut app, "q");
        assert!(!app.should_quit);
        assert_eq!(app.incomes.name_input.value(), "q");
    }

    #[test]
    fn test_q_in_list_quits() {
        let mut app = new_app();
        app.focus_section(CollectionKind::Income, ListFocus::List);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let mut app = new_app();
        app.store.add_item::<Income>("Salary", Money::from_whole(5000));
        app.focus_section(CollectionKind::Income, ListFocus::List);
        press(&mut app, KeyCode::Char('e'));
        assert!(app.incomes.is_editing());

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_opens_and_any_key_closes() {
        let mut app = new_app();
        app.focus_section(CollectionKind::Income, ListFocus::List);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);

        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_edit_save_via_keys() {
        let mut app = new_app();
        app.store.add_item::<Expense>("Rent", Money::from_whole(1500));
        app.focus_section(CollectionKind::Expense, ListFocus::List);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "1600");
        press(&mut app, KeyCode::Enter);

        let rent = &app.store.items::<Expense>()[0];
        assert_eq!(rent.category_name, "Rent");
        assert_eq!(rent.amount, Money::from_whole(1600));
        assert!(!app.expenses.is_editing());
    }

    #[test]
    fn test_delete_via_keys_clamps_selection() {
        let mut app = new_app();
        app.store.add_item::<Expense>("Rent", Money::from_whole(1500));
        app.store.add_item::<Expense>("Food", Money::from_whole(400));
        app.focus_section(CollectionKind::Expense, ListFocus::List);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.store.items::<Expense>().len(), 1);
        assert_eq!(app.expenses.selected, 0);

        press(&mut app, KeyCode::Char('d'));
        assert!(app.store.items::<Expense>().is_empty());
    }

    #[test]
    fn test_number_keys_jump_sections() {
        let mut app = new_app();
        app.focus_section(CollectionKind::Income, ListFocus::List);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_section, CollectionKind::Expense);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.expenses.focus, ListFocus::Name);
    }
}
