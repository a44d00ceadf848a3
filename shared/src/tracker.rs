use rand::Rng;

use crate::draft::DraftInput;
use crate::store::TaskStore;
use crate::task::{Priority, Task, TaskId};
use crate::view::{CompletionBucket, DerivedView};

/// Owns the task store and keeps its derived view current.
///
/// The view is recomputed right after each call that replaces the
/// collection: every successful add, and every toggle or delete whether or
/// not the id matched. A dropped blank add does not touch the collection and
/// does not recompute.
#[derive(Debug)]
pub struct Tracker<R> {
    store: TaskStore,
    rng: R,
    view: DerivedView,
}

impl<R: Rng> Tracker<R> {
    pub fn new(mut rng: R) -> Self {
        let store = TaskStore::new();
        let view = DerivedView::compute(store.list(), &mut rng);
        Self { store, rng, view }
    }

    pub fn add(
        &mut self,
        text: impl Into<String>,
        time_allotted: impl Into<String>,
        priority: Priority,
    ) -> Option<TaskId> {
        let id = self.store.add(text, time_allotted, priority)?;
        self.refresh();
        Some(id)
    }

    pub fn submit_draft(&mut self) -> Option<TaskId> {
        let id = self.store.submit_draft()?;
        self.refresh();
        Some(id)
    }

    pub fn toggle(&mut self, id: TaskId) -> bool {
        let matched = self.store.toggle(id);
        self.refresh();
        matched
    }

    pub fn delete(&mut self, id: TaskId) -> bool {
        let removed = self.store.delete(id);
        self.refresh();
        removed
    }

    /// Re-rolls the suggestion and recounts the completion buckets.
    pub fn refresh(&mut self) {
        self.view = DerivedView::compute(self.store.list(), &mut self.rng);
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.list()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn draft(&self) -> &DraftInput {
        self.store.draft()
    }

    pub fn draft_mut(&mut self) -> &mut DraftInput {
        self.store.draft_mut()
    }

    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    pub fn suggestion(&self) -> &'static str {
        self.view.suggestion
    }

    pub fn completion(&self) -> [CompletionBucket; 2] {
        self.view.completion
    }
}
