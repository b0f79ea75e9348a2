//! Application state for the TUI
//!
//! The App struct owns the session's budget store plus one list view per
//! collection, and holds everything needed for rendering and handling events.

use crossterm::event::KeyEvent;

use crate::display::AmountFormat;
use crate::models::{CollectionKind, Expense, Income, SavingsAccount};
use crate::store::{BudgetStore, StoredItem};

use super::item_list::{ItemListView, KeyOutcome, ListFocus, SectionFocus};

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App {
    /// The session's budget data
    pub store: BudgetStore,

    /// How amounts are rendered
    pub format: AmountFormat,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Section that receives keys
    pub active_section: CollectionKind,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    pub incomes: ItemListView<Income>,
    pub savings: ItemListView<SavingsAccount>,
    pub expenses: ItemListView<Expense>,
}

impl App {
    /// Create a new App instance
    pub fn new(store: BudgetStore, format: AmountFormat) -> Self {
        Self {
            store,
            format,
            should_quit: false,
            active_section: CollectionKind::Income,
            active_dialog: ActiveDialog::default(),
            incomes: ItemListView::for_kind(),
            savings: ItemListView::for_kind(),
            expenses: ItemListView::for_kind(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Focus state of a section, independent of its record type
    pub fn section(&self, kind: CollectionKind) -> &dyn SectionFocus {
        match kind {
            CollectionKind::Income => &self.incomes,
            CollectionKind::Savings => &self.savings,
            CollectionKind::Expense => &self.expenses,
        }
    }

    fn section_mut(&mut self, kind: CollectionKind) -> &mut dyn SectionFocus {
        match kind {
            CollectionKind::Income => &mut self.incomes,
            CollectionKind::Savings => &mut self.savings,
            CollectionKind::Expense => &mut self.expenses,
        }
    }

    /// Focus the first field of a section
    pub fn focus_section(&mut self, kind: CollectionKind, focus: ListFocus) {
        self.active_section = kind;
        self.section_mut(kind).set_focus(focus);
    }

    /// Tab past the end of a section: first field of the next one
    pub fn focus_next_section(&mut self) {
        self.focus_section(self.active_section.next(), ListFocus::Name);
    }

    /// Shift-Tab past the start of a section: list of the previous one
    pub fn focus_prev_section(&mut self) {
        self.focus_section(self.active_section.prev(), ListFocus::List);
    }

    /// Move between section lists without touching the forms
    pub fn focus_next_section_list(&mut self) {
        self.focus_section(self.active_section.next(), ListFocus::List);
    }

    pub fn focus_prev_section_list(&mut self) {
        self.focus_section(self.active_section.prev(), ListFocus::List);
    }

    /// Whether keys currently go into a text field
    pub fn is_typing(&self) -> bool {
        let section = self.section(self.active_section);
        section.is_editing() || section.focus() != ListFocus::List
    }

    /// Hand a key to the active section
    pub fn dispatch_to_section(&mut self, key: KeyEvent) -> KeyOutcome {
        match self.active_section {
            CollectionKind::Income => dispatch(&mut self.incomes, &mut self.store, key),
            CollectionKind::Savings => dispatch(&mut self.savings, &mut self.store, key),
            CollectionKind::Expense => dispatch(&mut self.expenses, &mut self.store, key),
        }
    }
}

fn dispatch<T: StoredItem>(
    view: &mut ItemListView<T>,
    store: &mut BudgetStore,
    key: KeyEvent,
) -> KeyOutcome {
    let snapshot = store.snapshot();
    let outcome = view.handle_key(key, snapshot.items::<T>(), &mut store.handle::<T>());
    view.clamp_selection(store.items::<T>().len());
    outcome
}
