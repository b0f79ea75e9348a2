//! Editable list state for one collection
//!
//! An `ItemListView` owns the transient UI state for a section: the add
//! form, the single in-progress edit, the selection and which part of the
//! section has focus. It never touches the store directly; accepted input
//! goes through the [`ItemActions`] it is handed.
//!
//! Invalid input (blank name, empty or unparseable amount) is ignored
//! without any message.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::{LineItem, Money};
use crate::store::ItemActions;

use super::widgets::TextInput;

/// Which part of a section has focus, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFocus {
    #[default]
    Name,
    Amount,
    List,
}

impl ListFocus {
    /// Next stop in the tab order, or `None` past the end of the section
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Name => Some(Self::Amount),
            Self::Amount => Some(Self::List),
            Self::List => None,
        }
    }

    /// Previous stop, or `None` before the start of the section
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Name => None,
            Self::Amount => Some(Self::Name),
            Self::List => Some(Self::Amount),
        }
    }
}

/// Which field of the inline edit row has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditField {
    #[default]
    Name,
    Amount,
}

/// The one record currently being edited inline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState<Id> {
    pub id: Id,
    pub name: TextInput,
    pub amount: TextInput,
    pub field: EditField,
}

impl<Id> EditState<Id> {
    fn focused_input(&mut self) -> &mut TextInput {
        match self.field {
            EditField::Name => &mut self.name,
            EditField::Amount => &mut self.amount,
        }
    }

    fn toggle_field(&mut self) {
        self.field = match self.field {
            EditField::Name => EditField::Amount,
            EditField::Amount => EditField::Name,
        };
    }
}

/// What the section did with a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was used
    Consumed,
    /// Tab past the last stop; focus should move to the next section
    FocusNext,
    /// Shift-Tab before the first stop; focus should move to the previous section
    FocusPrev,
    /// Not a key this section handles
    Ignored,
}

/// Validate form input the way both the add and edit forms do
///
/// Returns the trimmed name and parsed amount, or `None` if the name is
/// blank or the amount is empty or unparseable.
pub fn parse_entry(name: &str, amount: &str) -> Option<(String, Money)> {
    let name = name.trim();
    if name.is_empty() || amount.trim().is_empty() {
        return None;
    }
    let amount = Money::parse(amount).ok()?;
    Some((name.to_string(), amount))
}

/// Transient editing state for one collection's section
#[derive(Debug, Clone)]
pub struct ItemListView<T: LineItem> {
    /// What "name" means for this collection
    pub label: String,
    pub name_input: TextInput,
    pub amount_input: TextInput,
    pub editing: Option<EditState<T::Id>>,
    pub focus: ListFocus,
    /// Selected row in the list
    pub selected: usize,
}

impl<T: LineItem> ItemListView<T> {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            name_input: TextInput::new().placeholder(label.clone()),
            amount_input: TextInput::amount().placeholder("Amount"),
            label,
            editing: None,
            focus: ListFocus::default(),
            selected: 0,
        }
    }

    /// A view labelled for `T`'s collection
    pub fn for_kind() -> Self {
        Self::new(T::KIND.name_label())
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Id of the record in edit mode, if any
    pub fn editing_id(&self) -> Option<T::Id> {
        self.editing.as_ref().map(|e| e.id)
    }

    /// Submit the add form
    ///
    /// Returns `true` if a record was added. On success both inputs are
    /// cleared; on rejection they are left as typed.
    pub fn submit_add(&mut self, actions: &mut impl ItemActions<T>) -> bool {
        let Some((name, amount)) = parse_entry(self.name_input.value(), self.amount_input.value())
        else {
            return false;
        };
        actions.add(name, amount);
        self.name_input.clear();
        self.amount_input.clear();
        true
    }

    /// Put `item` into edit mode, replacing any edit already in progress
    pub fn start_edit(&mut self, item: &T) {
        self.editing = Some(EditState {
            id: item.id(),
            name: TextInput::new().with_content(item.name()),
            amount: TextInput::amount().with_content(item.amount().to_string()),
            field: EditField::Name,
        });
        self.focus = ListFocus::List;
    }

    /// Save the edit in progress
    ///
    /// Returns `true` if the update was issued. Invalid input keeps the row
    /// in edit mode.
    pub fn save_edit(&mut self, actions: &mut impl ItemActions<T>) -> bool {
        let Some(edit) = &self.editing else {
            return false;
        };
        let Some((name, amount)) = parse_entry(edit.name.value(), edit.amount.value()) else {
            return false;
        };
        actions.update(edit.id, name, amount);
        self.editing = None;
        true
    }

    /// Discard the edit in progress without updating
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Delete a record immediately
    pub fn delete(&mut self, id: T::Id, actions: &mut impl ItemActions<T>) {
        if self.editing_id() == Some(id) {
            self.editing = None;
        }
        actions.delete(id);
    }

    /// Keep the selection inside a list of `len` rows
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Route a key press
    ///
    /// `items` is the bound collection as currently rendered.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        items: &[T],
        actions: &mut impl ItemActions<T>,
    ) -> KeyOutcome {
        if self.editing.is_some() {
            return self.handle_edit_key(key, actions);
        }

        match key.code {
            KeyCode::Tab => return self.advance_focus(),
            KeyCode::BackTab => return self.retreat_focus(),
            _ => {}
        }

        match self.focus {
            ListFocus::Name | ListFocus::Amount => self.handle_form_key(key, actions),
            ListFocus::List => self.handle_list_key(key, items, actions),
        }
    }

    fn advance_focus(&mut self) -> KeyOutcome {
        match self.focus.next() {
            Some(next) => {
                self.focus = next;
                KeyOutcome::Consumed
            }
            None => KeyOutcome::FocusNext,
        }
    }

    fn retreat_focus(&mut self) -> KeyOutcome {
        match self.focus.prev() {
            Some(prev) => {
                self.focus = prev;
                KeyOutcome::Consumed
            }
            None => KeyOutcome::FocusPrev,
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, actions: &mut impl ItemActions<T>) -> KeyOutcome {
        if key.code == KeyCode::Enter {
            self.submit_add(actions);
            return KeyOutcome::Consumed;
        }

        let input = match self.focus {
            ListFocus::Name => &mut self.name_input,
            _ => &mut self.amount_input,
        };
        edit_input(input, key)
    }

    fn handle_list_key(
        &mut self,
        key: KeyEvent,
        items: &[T],
        actions: &mut impl ItemActions<T>,
    ) -> KeyOutcome {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < items.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = items.len().saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(item) = items.get(self.selected) {
                    self.start_edit(item);
                }
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if let Some(item) = items.get(self.selected) {
                    self.delete(item.id(), actions);
                    self.clamp_selection(items.len() - 1);
                }
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn handle_edit_key(&mut self, key: KeyEvent, actions: &mut impl ItemActions<T>) -> KeyOutcome {
        match key.code {
            KeyCode::Enter => {
                self.save_edit(actions);
            }
            KeyCode::Esc => self.cancel_edit(),
            KeyCode::Tab | KeyCode::BackTab => {
                if let Some(edit) = self.editing.as_mut() {
                    edit.toggle_field();
                }
            }
            _ => {
                if let Some(edit) = self.editing.as_mut() {
                    edit_input(edit.focused_input(), key);
                }
            }
        }
        // Edit mode captures every key until saved or cancelled
        KeyOutcome::Consumed
    }
}

/// Apply a line-editing key to an input
fn edit_input(input: &mut TextInput, key: KeyEvent) -> KeyOutcome {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            input.insert(c)
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return KeyOutcome::Ignored,
    }
    KeyOutcome::Consumed
}

/// Focus control shared by all sections regardless of record type
pub trait SectionFocus {
    fn focus(&self) -> ListFocus;
    fn set_focus(&mut self, focus: ListFocus);
    fn is_editing(&self) -> bool;
}

impl<T: LineItem> SectionFocus for ItemListView<T> {
    fn focus(&self) -> ListFocus {
        self.focus
    }

    fn set_focus(&mut self, focus: ListFocus) {
        self.focus = focus;
    }

    fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}
