//! Generic create/read/update/delete controller over an in-memory collection.
//!
//! One controller owns one ordered collection of records of a single entity
//! kind, plus the state of the create/edit form shown next to it. The form is
//! either [`FormSession::Closed`] or [`FormSession::Open`]; only `submit` and
//! `cancel` leave the open state.

use crate::confirm::Confirm;
use crate::error::{Error, Result};
use crate::search::{Search, search};
use serde::{Deserialize, Serialize};
use toolshop_types::{Entity, EntityId};
use tracing::{debug, warn};

/// How a newly created record gets its identity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Current collection size plus one. Can repeat an identity after deletes.
    #[default]
    #[serde(rename = "length")]
    CollectionLength,
    /// One past the largest identity this controller has ever held
    Monotonic,
}

/// What `submit` does when the record being edited has disappeared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMissPolicy {
    /// Close the form and leave the collection unchanged
    #[default]
    Ignore,
    /// Report [`Error::NotFound`] and keep the form open
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerOptions {
    #[serde(default)]
    pub id_strategy: IdStrategy,
    #[serde(default)]
    pub update_miss: UpdateMissPolicy,
}

#[derive(Debug, Clone)]
enum FormSession<T: Entity> {
    Closed,
    Open {
        /// `None` while creating a new record
        editing: Option<T>,
        staged: T::Draft,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(EntityId),
    Updated(EntityId),
    /// The edited identity was not in the collection; nothing changed
    UpdateMissed(EntityId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
    NotFound,
}

pub struct EntityListController<T: Entity, C: Confirm> {
    records: Vec<T>,
    search_term: String,
    form: FormSession<T>,
    confirm: C,
    options: ControllerOptions,
    highest_id: u64,
}

impl<T: Entity, C: Confirm> EntityListController<T, C> {
    pub fn new(records: Vec<T>, confirm: C) -> Self {
        let highest_id = records.iter().map(|r| r.id().get()).max().unwrap_or(0);
        Self {
            records,
            search_term: String::new(),
            form: FormSession::Closed,
            confirm,
            options: ControllerOptions::default(),
            highest_id,
        }
    }

    pub fn with_options(mut self, options: ControllerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ControllerOptions {
        self.options
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: EntityId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    // --- search -----------------------------------------------------------

    /// Records matching `term`, in collection order. Pure.
    pub fn search<'a>(&'a self, term: &str) -> Search<'a, T> {
        search(&self.records, term)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Records matching the stored search term
    pub fn visible(&self) -> Search<'_, T> {
        search(&self.records, &self.search_term)
    }

    // --- form session -----------------------------------------------------

    pub fn form_visible(&self) -> bool {
        matches!(self.form, FormSession::Open { .. })
    }

    pub fn editing(&self) -> Option<&T> {
        match &self.form {
            FormSession::Open { editing, .. } => editing.as_ref(),
            FormSession::Closed => None,
        }
    }

    pub fn staged(&self) -> Option<&T::Draft> {
        match &self.form {
            FormSession::Open { staged, .. } => Some(staged),
            FormSession::Closed => None,
        }
    }

    pub fn staged_mut(&mut self) -> Option<&mut T::Draft> {
        match &mut self.form {
            FormSession::Open { staged, .. } => Some(staged),
            FormSession::Closed => None,
        }
    }

    /// Open an empty form for a new record
    pub fn begin_create(&mut self) {
        debug!(kind = %T::KIND, "begin create");
        self.form = FormSession::Open {
            editing: None,
            staged: T::Draft::default(),
        };
    }

    /// Open the form pre-filled with `record`. Membership is not checked.
    pub fn begin_edit(&mut self, record: T) {
        debug!(kind = %T::KIND, id = %record.id(), "begin edit");
        let staged = record.to_draft();
        self.form = FormSession::Open {
            editing: Some(record),
            staged,
        };
    }

    /// Look up `id` and open it for editing. Returns false if it is absent.
    pub fn begin_edit_id(&mut self, id: EntityId) -> bool {
        match self.find(id).cloned() {
            Some(record) => {
                self.begin_edit(record);
                true
            }
            None => false,
        }
    }

    /// Stage a single field on the open form
    pub fn stage_field(&mut self, field: &str, value: &str) -> Result<()> {
        use toolshop_types::Draft;

        match self.staged_mut() {
            Some(staged) => Ok(staged.set_field(field, value)?),
            None => Ok(()),
        }
    }

    pub fn cancel(&mut self) {
        debug!(kind = %T::KIND, "cancel form");
        self.form = FormSession::Closed;
    }

    /// Commit `draft`: replace the edited record, or append a new one.
    ///
    /// With [`UpdateMissPolicy::Ignore`] this never fails.
    pub fn submit(&mut self, draft: T::Draft) -> Result<SubmitOutcome> {
        let editing_id = self.editing().map(|record| record.id());

        let outcome = match editing_id {
            Some(id) => self.replace(id, draft)?,
            None => {
                let id = self.next_id();
                self.records.push(T::from_draft(draft, id));
                debug!(kind = %T::KIND, %id, "created");
                SubmitOutcome::Created(id)
            }
        };

        self.form = FormSession::Closed;
        Ok(outcome)
    }

    /// Submit whatever is currently staged (an empty draft if the form is closed)
    pub fn submit_staged(&mut self) -> Result<SubmitOutcome> {
        let draft = self.staged().cloned().unwrap_or_default();
        self.submit(draft)
    }

    /// Ask for confirmation, then remove the first record with `id`
    pub fn delete(&mut self, id: EntityId) -> DeleteOutcome {
        if !self.confirm.confirm(&T::KIND.delete_prompt()) {
            debug!(kind = %T::KIND, %id, "delete declined");
            return DeleteOutcome::Declined;
        }

        match self.records.iter().position(|r| r.id() == id) {
            Some(index) => {
                self.records.remove(index);
                debug!(kind = %T::KIND, %id, "deleted");
                DeleteOutcome::Deleted
            }
            None => DeleteOutcome::NotFound,
        }
    }

    fn replace(&mut self, id: EntityId, draft: T::Draft) -> Result<SubmitOutcome> {
        // Every record carrying the identity is replaced; duplicates can exist
        // under the collection-length strategy.
        let record = T::from_draft(draft, id);
        let mut replaced = 0usize;
        for slot in self.records.iter_mut().filter(|r| r.id() == id) {
            *slot = record.clone();
            replaced += 1;
        }

        if replaced > 0 {
            debug!(kind = %T::KIND, %id, replaced, "updated");
            return Ok(SubmitOutcome::Updated(id));
        }

        warn!(kind = %T::KIND, %id, "edited record is no longer present");
        match self.options.update_miss {
            UpdateMissPolicy::Ignore => Ok(SubmitOutcome::UpdateMissed(id)),
            UpdateMissPolicy::Error => Err(Error::NotFound { kind: T::KIND, id }),
        }
    }

    fn next_id(&mut self) -> EntityId {
        let id = match self.options.id_strategy {
            IdStrategy::CollectionLength => self.records.len() as u64 + 1,
            IdStrategy::Monotonic => self.highest_id + 1,
        };
        self.highest_id = self.highest_id.max(id);
        EntityId::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::{AlwaysConfirm, NeverConfirm, ScriptedConfirm};
    use toolshop_types::{Customer, CustomerDraft};

    fn customer(id: u64, name: &str) -> Customer {
        Customer {
            id: EntityId::new(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
        }
    }

    fn draft(name: &str) -> CustomerDraft {
        CustomerDraft {
            name: name.to_string(),
            ..CustomerDraft::default()
        }
    }

    fn ids<C: Confirm>(controller: &EntityListController<Customer, C>) -> Vec<u64> {
        controller.records().iter().map(|c| c.id.get()).collect()
    }

    #[test]
    fn test_new_controller_starts_closed_with_empty_search() {
        let controller = EntityListController::new(vec![customer(1, "Ana")], AlwaysConfirm);
        assert!(!controller.form_visible());
        assert!(controller.editing().is_none());
        assert!(controller.staged().is_none());
        assert_eq!(controller.search_term(), "");
        assert_eq!(controller.visible().count(), 1);
    }

    #[test]
    fn test_begin_create_clears_previous_staging() {
        let mut controller = EntityListController::new(vec![customer(1, "Ana")], AlwaysConfirm);
        assert!(controller.begin_edit_id(EntityId::new(1)));
        assert_eq!(controller.staged().unwrap().name, "Ana");

        controller.begin_create();
        assert!(controller.form_visible());
        assert!(controller.editing().is_none());
        assert_eq!(controller.staged(), Some(&CustomerDraft::default()));
    }

    #[test]
    fn test_begin_edit_stages_record_without_membership_check() {
        let mut controller = EntityListController::new(Vec::new(), AlwaysConfirm);
        controller.begin_edit(customer(9, "Ghost"));
        assert_eq!(controller.editing().map(|c| c.id.get()), Some(9));
        assert_eq!(controller.staged().unwrap().name, "Ghost");
    }

    #[test]
    fn test_create_after_delete_reuses_length_based_id() {
        let mut controller = EntityListController::new(
            vec![customer(1, "Ana"), customer(2, "Bruno"), customer(3, "Caio")],
            AlwaysConfirm,
        );
        assert_eq!(controller.delete(EntityId::new(1)), DeleteOutcome::Deleted);

        controller.begin_create();
        let outcome = controller.submit(draft("Dora")).unwrap();

        assert_eq!(outcome, SubmitOutcome::Created(EntityId::new(3)));
        assert_eq!(ids(&controller), vec![2, 3, 3]);
    }

    #[test]
    fn test_update_replaces_every_duplicate_identity() {
        let mut controller = EntityListController::new(
            vec![customer(3, "Caio"), customer(3, "Dora")],
            AlwaysConfirm,
        );
        controller.begin_edit(customer(3, "Caio"));
        controller.submit(draft("Eva")).unwrap();

        let names: Vec<_> = controller.records().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Eva", "Eva"]);
    }

    #[test]
    fn test_delete_removes_only_first_duplicate_identity() {
        let mut controller = EntityListController::new(
            vec![customer(1, "Ana"), customer(2, "Bruno"), customer(3, "Caio")],
            AlwaysConfirm,
        );
        controller.delete(EntityId::new(1));
        controller.begin_create();
        controller.submit(draft("Dora")).unwrap();
        assert_eq!(ids(&controller), vec![2, 3, 3]);

        assert_eq!(controller.delete(EntityId::new(3)), DeleteOutcome::Deleted);

        let names: Vec<_> = controller.records().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bruno", "Dora"]);
        assert_eq!(ids(&controller), vec![2, 3]);
    }

    #[test]
    fn test_monotonic_strategy_never_reuses_an_identity() {
        let mut controller = EntityListController::new(
            vec![customer(1, "Ana"), customer(2, "Bruno")],
            AlwaysConfirm,
        )
        .with_options(ControllerOptions {
            id_strategy: IdStrategy::Monotonic,
            ..ControllerOptions::default()
        });

        controller.delete(EntityId::new(2));
        controller.begin_create();
        let first = controller.submit(draft("Caio")).unwrap();
        controller.begin_create();
        let second = controller.submit(draft("Dora")).unwrap();

        assert_eq!(first, SubmitOutcome::Created(EntityId::new(3)));
        assert_eq!(second, SubmitOutcome::Created(EntityId::new(4)));
    }

    #[test]
    fn test_update_miss_is_silent_by_default() {
        let mut controller = EntityListController::new(vec![customer(1, "Ana")], AlwaysConfirm);
        controller.begin_edit(customer(7, "Gone"));

        let outcome = controller.submit(draft("Still gone")).unwrap();

        assert_eq!(outcome, SubmitOutcome::UpdateMissed(EntityId::new(7)));
        assert_eq!(controller.records(), &[customer(1, "Ana")]);
        assert!(!controller.form_visible());
    }

    #[test]
    fn test_update_miss_can_be_reported() {
        let mut controller = EntityListController::new(vec![customer(1, "Ana")], AlwaysConfirm)
            .with_options(ControllerOptions {
                update_miss: UpdateMissPolicy::Error,
                ..ControllerOptions::default()
            });
        controller.begin_edit(customer(7, "Gone"));

        let err = controller.submit(draft("Still gone")).unwrap_err();

        assert!(matches!(err, Error::NotFound { id, .. } if id == EntityId::new(7)));
        assert!(controller.form_visible(), "form stays open so it can be cancelled");
        controller.cancel();
        assert!(!controller.form_visible());
    }

    #[test]
    fn test_declined_delete_keeps_records_and_asks_with_kind_message() {
        let mut controller = EntityListController::new(
            vec![customer(1, "Ana")],
            ScriptedConfirm::new([false]),
        );

        assert_eq!(controller.delete(EntityId::new(1)), DeleteOutcome::Declined);
        assert_eq!(controller.len(), 1);
        assert_eq!(
            controller.confirm.asked(),
            ["Are you sure you want to delete this customer?"]
        );
    }

    #[test]
    fn test_delete_missing_id_is_a_no_op_either_way() {
        let mut yes = EntityListController::new(vec![customer(1, "Ana")], AlwaysConfirm);
        let mut no = EntityListController::new(vec![customer(1, "Ana")], NeverConfirm);

        assert_eq!(yes.delete(EntityId::new(5)), DeleteOutcome::NotFound);
        assert_eq!(no.delete(EntityId::new(5)), DeleteOutcome::Declined);
        assert_eq!(yes.len(), 1);
        assert_eq!(no.len(), 1);
    }

    #[test]
    fn test_stage_field_then_submit_staged() {
        let mut controller = EntityListController::new(vec![customer(1, "Ana")], AlwaysConfirm);
        controller.begin_edit_id(EntityId::new(1));
        controller.stage_field("city", "Recife").unwrap();

        let outcome = controller.submit_staged().unwrap();

        assert_eq!(outcome, SubmitOutcome::Updated(EntityId::new(1)));
        assert_eq!(controller.records()[0].city, "Recife");
        assert_eq!(controller.records()[0].name, "Ana");
    }

    #[test]
    fn test_stage_field_reports_unknown_field() {
        let mut controller: EntityListController<Customer, _> =
            EntityListController::new(Vec::new(), AlwaysConfirm);
        controller.begin_create();

        let err = controller.stage_field("age", "30").unwrap_err();
        assert!(matches!(err, Error::Form(_)));
    }
}
