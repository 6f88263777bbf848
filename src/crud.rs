//! CRUD Page View-Model
//!
//! Per-page state shared by the forms and labels views: the cached collection,
//! the editor dialog mode and the pending delete. Handlers feed API results in
//! and get back a `Settlement` telling them whether to reload and what to show.
//!
//! Two refresh strategies exist:
//! - reload: create/edit/delete discard the cache and refetch the collection;
//! - patch: the print toggle rewrites one cached flag and refetches nothing.

use std::fmt;

use leptos_toast::Severity;

use crate::error::ApiError;
use crate::models::{Form, Label};

/// An entity managed by a CRUD page, with its localized messages
pub trait Entity: Clone + 'static {
    type Key: Clone + PartialEq + fmt::Debug + 'static;

    const CREATED: &'static str;
    const UPDATED: &'static str;
    const DELETED: &'static str;
    const NOT_FOUND: &'static str;

    fn key(&self) -> Self::Key;
    fn display_name(&self) -> &str;
}

impl Entity for Form {
    type Key = String;

    const CREATED: &'static str = "Forma byla vytvořena";
    const UPDATED: &'static str = "Forma byla aktualizována";
    const DELETED: &'static str = "Forma byla smazána";
    const NOT_FOUND: &'static str = "Forma nenalezena";

    fn key(&self) -> String {
        self.name.clone()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Entity for Label {
    type Key = u32;

    const CREATED: &'static str = "Cenovka byla vytvořena";
    const UPDATED: &'static str = "Cenovka byla aktualizována";
    const DELETED: &'static str = "Cenovka byla smazána";
    const NOT_FOUND: &'static str = "Cenovka nenalezena";

    fn key(&self) -> u32 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.product_name
    }
}

pub const LOAD_FAILED: &str = "Chyba při načítání dat";
pub const SUBMIT_FAILED: &str = "Chyba při odesílání dat";
pub const DELETE_FAILED: &str = "Chyba při mazání";
pub const TOGGLE_FAILED: &str = "Chyba při změně označení";
pub const TOGGLED: &str = "Označení k tisku změněno";

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { severity: Severity::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, message: message.into() }
    }
}

/// Outcome of a mutation for the page to act on
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    /// Refetch the whole collection
    pub reload: bool,
    pub notice: Notice,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<E> {
    Loading,
    Ready(Vec<E>),
    Failed(String),
}

/// Editor dialog mode
#[derive(Debug, Clone, PartialEq)]
pub enum Editor<K> {
    Closed,
    Creating,
    Editing(K),
}

impl<K> Editor<K> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Editor::Closed)
    }

    pub fn editing(&self) -> Option<&K> {
        match self {
            Editor::Editing(key) => Some(key),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete<K> {
    pub key: K,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrudState<E: Entity> {
    pub load: LoadState<E>,
    pub editor: Editor<E::Key>,
    pub pending_delete: Option<PendingDelete<E::Key>>,
}

impl<E: Entity> Default for CrudState<E> {
    fn default() -> Self {
        Self {
            load: LoadState::Loading,
            editor: Editor::Closed,
            pending_delete: None,
        }
    }
}

impl<E: Entity> CrudState<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached collection; empty while loading or after a failed load
    pub fn entities(&self) -> &[E] {
        match &self.load {
            LoadState::Ready(entities) => entities,
            _ => &[],
        }
    }

    pub fn find(&self, key: &E::Key) -> Option<&E> {
        self.entities().iter().find(|e| &e.key() == key)
    }

    /// Replace the cache with a fresh fetch
    pub fn finish_load(&mut self, result: Result<Vec<E>, ApiError>) {
        self.load = match result {
            Ok(entities) => {
                tracing::debug!(count = entities.len(), "collection loaded");
                LoadState::Ready(entities)
            }
            Err(err) => {
                tracing::error!(%err, "loading collection failed");
                LoadState::Failed(err.user_message(LOAD_FAILED))
            }
        };
    }

    pub fn open_create(&mut self) {
        self.editor = Editor::Creating;
    }

    /// Switch to edit mode and hand back the cached entity to populate fields from
    pub fn open_edit(&mut self, key: &E::Key) -> Result<E, Notice> {
        let entity = self.find(key).cloned().ok_or_else(|| Notice::error(E::NOT_FOUND))?;
        self.editor = Editor::Editing(key.clone());
        Ok(entity)
    }

    pub fn close_editor(&mut self) {
        self.editor = Editor::Closed;
    }

    /// Settle a create (`target` = Creating) or update (`Editing`). The editor
    /// closes on success only if it still shows the submitted target.
    pub fn settle_submit(&mut self, target: &Editor<E::Key>, result: Result<(), ApiError>) -> Settlement {
        match result {
            Ok(()) => {
                if &self.editor == target {
                    self.editor = Editor::Closed;
                }
                let message = if target.editing().is_some() { E::UPDATED } else { E::CREATED };
                Settlement { reload: true, notice: Notice::success(message) }
            }
            Err(err) => {
                tracing::warn!(%err, ?target, "submit failed");
                Settlement { reload: false, notice: Notice::error(err.user_message(SUBMIT_FAILED)) }
            }
        }
    }

    /// Ask for confirmation before deleting a cached entity
    pub fn request_delete(&mut self, key: &E::Key) -> Result<(), Notice> {
        let name = self
            .find(key)
            .map(|e| e.display_name().to_string())
            .ok_or_else(|| Notice::error(E::NOT_FOUND))?;
        self.pending_delete = Some(PendingDelete { key: key.clone(), name });
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn settle_delete(&mut self, key: &E::Key, result: Result<(), ApiError>) -> Settlement {
        match result {
            Ok(()) => {
                if self.pending_delete.as_ref().is_some_and(|p| &p.key == key) {
                    self.pending_delete = None;
                }
                Settlement { reload: true, notice: Notice::success(E::DELETED) }
            }
            Err(err) => {
                tracing::warn!(%err, ?key, "delete failed");
                Settlement { reload: false, notice: Notice::error(err.user_message(DELETE_FAILED)) }
            }
        }
    }
}

impl CrudState<Label> {
    /// Patch strategy: only the toggled label's flag changes, nothing is refetched
    pub fn settle_print_toggle(&mut self, id: u32, result: Result<bool, ApiError>) -> Settlement {
        match result {
            Ok(marked) => {
                if let LoadState::Ready(labels) = &mut self.load {
                    if let Some(label) = labels.iter_mut().find(|l| l.id == id) {
                        label.marked_to_print = marked;
                    }
                }
                Settlement { reload: false, notice: Notice::success(TOGGLED) }
            }
            Err(err) => {
                tracing::warn!(%err, id, "print toggle failed");
                Settlement { reload: false, notice: Notice::error(err.user_message(TOGGLE_FAILED)) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;

    fn make_label(id: u32, name: &str, marked: bool) -> Label {
        Label {
            id,
            product_name: name.to_string(),
            form: "kg".to_string(),
            amount: 1.0,
            price: 20.0,
            unit_price: Some(20.0),
            marked_to_print: marked,
            created_at: None,
        }
    }

    fn make_form(name: &str) -> Form {
        Form {
            name: name.to_string(),
            short_name: name.to_lowercase(),
            unit: Unit::Weight,
        }
    }

    fn loaded_labels() -> CrudState<Label> {
        let mut state = CrudState::new();
        state.finish_load(Ok(vec![
            make_label(1, "Milk", false),
            make_label(2, "Bread", true),
            make_label(3, "Cheese", false),
        ]));
        state
    }

    fn rejected() -> ApiError {
        ApiError::rejected(400, Some("Missing required fields: name".into()))
    }

    #[test]
    fn test_load_states() {
        let mut state: CrudState<Form> = CrudState::new();
        assert_eq!(state.load, LoadState::Loading);
        assert!(state.entities().is_empty());

        state.finish_load(Ok(vec![make_form("Kus")]));
        assert_eq!(state.entities().len(), 1);

        state.finish_load(Err(ApiError::Transport("offline".into())));
        assert_eq!(state.load, LoadState::Failed(LOAD_FAILED.to_string()));
        assert!(state.entities().is_empty());
    }

    #[test]
    fn test_failed_load_message_is_localized() {
        let mut state: CrudState<Label> = CrudState::new();
        state.finish_load(Err(ApiError::rejected(500, Some("Databáze nedostupná".into()))));
        assert_eq!(state.load, LoadState::Failed("Chyba: Databáze nedostupná".to_string()));

        state.finish_load(Err(ApiError::rejected(500, None)));
        let LoadState::Failed(message) = &state.load else {
            panic!("expected failed load");
        };
        assert_eq!(message, "Chyba: Neznámá chyba");
        assert!(!message.contains("Rejected"));
    }

    #[test]
    fn test_create_success_reloads_once() {
        let mut state: CrudState<Form> = CrudState::new();
        state.finish_load(Ok(vec![]));
        state.open_create();
        let target = state.editor.clone();

        let settlement = state.settle_submit(&target, Ok(()));
        assert_eq!(
            settlement,
            Settlement { reload: true, notice: Notice::success(Form::CREATED) }
        );
        assert_eq!(state.editor, Editor::Closed);
    }

    #[test]
    fn test_edit_failure_keeps_modal_and_cache() {
        let mut state = loaded_labels();
        let before = state.entities().to_vec();
        let label = state.open_edit(&2).unwrap();
        assert_eq!(label.product_name, "Bread");
        let target = state.editor.clone();

        let settlement = state.settle_submit(&target, Err(rejected()));
        assert!(!settlement.reload);
        assert_eq!(settlement.notice.severity, Severity::Error);
        assert_eq!(settlement.notice.message, "Chyba: Missing required fields: name");
        assert_eq!(state.editor, Editor::Editing(2));
        assert_eq!(state.entities(), &before[..]);
    }

    #[test]
    fn test_edit_success_message() {
        let mut state = loaded_labels();
        state.open_edit(&1).unwrap();
        let target = state.editor.clone();
        let settlement = state.settle_submit(&target, Ok(()));
        assert!(settlement.reload);
        assert_eq!(settlement.notice, Notice::success(Label::UPDATED));
        assert!(!state.editor.is_open());
    }

    #[test]
    fn test_editor_reopened_elsewhere_stays_open() {
        let mut state = loaded_labels();
        state.open_edit(&1).unwrap();
        let target = state.editor.clone();
        state.open_edit(&3).unwrap();

        let settlement = state.settle_submit(&target, Ok(()));
        assert!(settlement.reload);
        assert_eq!(state.editor, Editor::Editing(3));
    }

    #[test]
    fn test_open_edit_unknown_key() {
        let mut state = loaded_labels();
        let err = state.open_edit(&42).unwrap_err();
        assert_eq!(err, Notice::error(Label::NOT_FOUND));
        assert_eq!(state.editor, Editor::Closed);
    }

    #[test]
    fn test_delete_flow() {
        let mut state: CrudState<Form> = CrudState::new();
        state.finish_load(Ok(vec![make_form("Hmotnost"), make_form("Objem")]));

        state.request_delete(&"Objem".to_string()).unwrap();
        assert_eq!(
            state.pending_delete,
            Some(PendingDelete { key: "Objem".to_string(), name: "Objem".to_string() })
        );

        let failed = state.settle_delete(&"Objem".to_string(), Err(ApiError::Transport("offline".into())));
        assert_eq!(failed, Settlement { reload: false, notice: Notice::error(DELETE_FAILED) });
        assert!(state.pending_delete.is_some());
        assert_eq!(state.entities().len(), 2);

        let done = state.settle_delete(&"Objem".to_string(), Ok(()));
        assert_eq!(done, Settlement { reload: true, notice: Notice::success(Form::DELETED) });
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn test_cancel_delete() {
        let mut state = loaded_labels();
        state.request_delete(&3).unwrap();
        state.cancel_delete();
        assert!(state.pending_delete.is_none());
        assert!(state.request_delete(&99).is_err());
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn test_print_toggle_patches_one_entry() {
        let mut state = loaded_labels();
        let before = state.entities().to_vec();

        let settlement = state.settle_print_toggle(1, Ok(true));
        assert_eq!(settlement, Settlement { reload: false, notice: Notice::success(TOGGLED) });

        let after = state.entities();
        assert!(after[0].marked_to_print);
        assert_eq!(after[1], before[1]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[0].product_name, before[0].product_name);
    }

    #[test]
    fn test_print_toggle_failure() {
        let mut state = loaded_labels();
        let before = state.entities().to_vec();
        let settlement = state.settle_print_toggle(2, Err(rejected()));
        assert!(!settlement.reload);
        assert_eq!(settlement.notice.severity, Severity::Error);
        assert_eq!(state.entities(), &before[..]);
    }
}
