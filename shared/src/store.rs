use log::{debug, trace};

use crate::draft::DraftInput;
use crate::task::{Priority, Task, TaskId};

/// Ordered task collection plus the pending draft.
///
/// Every operation is total: an empty add, or a toggle/delete of an unknown
/// id, leaves the store unchanged and reports nothing but the return value.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    draft: DraftInput,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a task and clears the draft.
    ///
    /// Returns `None`, and keeps the draft, when `text` is blank.
    pub fn add(
        &mut self,
        text: impl Into<String>,
        time_allotted: impl Into<String>,
        priority: Priority,
    ) -> Option<TaskId> {
        let text = text.into();
        if text.trim().is_empty() {
            trace!("dropping add with blank text");
            return None;
        }

        let task = Task::new(text, time_allotted.into(), priority);
        let id = task.id();
        self.tasks.push(task);
        self.draft.clear();
        debug!("added task {id} with priority {priority}; {} total", self.tasks.len());
        Some(id)
    }

    /// Adds a task from the current draft fields.
    pub fn submit_draft(&mut self) -> Option<TaskId> {
        let draft = self.draft.clone();
        self.add(draft.text(), draft.time(), draft.priority())
    }

    /// Flips `completed` on the matching task. Returns whether one matched.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => {
                task.toggle();
                debug!("toggled task {id}; completed={}", task.is_completed());
                true
            }
            None => {
                trace!("toggle ignored unknown task {id}");
                false
            }
        }
    }

    /// Removes the matching task, keeping the order of the rest.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        let removed = self.tasks.len() != before;
        if removed {
            debug!("deleted task {id}; {} remaining", self.tasks.len());
        } else {
            trace!("delete ignored unknown task {id}");
        }
        removed
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftInput {
        &mut self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn texts(store: &TaskStore) -> Vec<&str> {
        store.list().iter().map(Task::text).collect()
    }

    #[test]
    fn can_create_empty_store() {
        let store = TaskStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut store = TaskStore::new();
        store.add("Task 1", "", Priority::Low);
        store.add("Task 2", "30m", Priority::Medium);
        store.add("Task 3", "1h", Priority::High);

        assert_eq!(texts(&store), vec!["Task 1", "Task 2", "Task 3"]);
        assert!(store.list().iter().all(|task| !task.is_completed()));
    }

    #[test]
    fn add_assigns_distinct_ids() {
        let mut store = TaskStore::new();
        let ids: HashSet<_> = (0..100)
            .filter_map(|i| store.add(format!("Task {i}"), "", Priority::Normal))
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn blank_add_is_dropped_and_keeps_draft() {
        let mut store = TaskStore::new();
        store.draft_mut().set_time("1h");

        assert_eq!(store.add("", "1h", Priority::High), None);
        assert_eq!(store.add("   ", "1h", Priority::High), None);

        assert!(store.is_empty());
        assert_eq!(store.draft().time(), "1h");
    }

    #[test]
    fn add_keeps_text_untrimmed() {
        let mut store = TaskStore::new();
        let id = store.add("  padded  ", "", Priority::Normal).unwrap();
        assert_eq!(store.get(id).unwrap().text(), "  padded  ");
    }

    #[test]
    fn submit_draft_adds_and_clears_draft() {
        let mut store = TaskStore::new();
        store.draft_mut().set_text("Write report");
        store.draft_mut().set_time("1h");
        store.draft_mut().set_priority(Priority::High);

        let id = store.submit_draft().unwrap();
        let task = store.get(id).unwrap();
        assert_eq!(task.text(), "Write report");
        assert_eq!(task.time_allotted(), "1h");
        assert_eq!(task.priority(), Priority::High);
        assert_eq!(store.draft(), &DraftInput::default());
    }

    #[test]
    fn submit_blank_draft_is_dropped() {
        let mut store = TaskStore::new();
        store.draft_mut().set_text("  ");
        store.draft_mut().set_priority(Priority::Low);

        assert_eq!(store.submit_draft(), None);
        assert!(store.is_empty());
        assert_eq!(store.draft().priority(), Priority::Low);
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let mut store = TaskStore::new();
        let id = store.add("Stretch", "10m", Priority::Low).unwrap();
        let other = store.add("Read", "", Priority::Normal).unwrap();

        assert!(store.toggle(id));
        assert!(store.get(id).unwrap().is_completed());
        assert!(!store.get(other).unwrap().is_completed());

        assert!(store.toggle(id));
        assert!(!store.get(id).unwrap().is_completed());
    }

    #[test]
    fn toggle_preserves_order() {
        let mut store = TaskStore::new();
        store.add("a", "", Priority::Normal);
        let b = store.add("b", "", Priority::Normal).unwrap();
        store.add("c", "", Priority::Normal);

        store.toggle(b);
        assert_eq!(texts(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut store = TaskStore::new();
        store.add("a", "", Priority::Normal);
        let stranger = TaskStore::new().add("x", "", Priority::Normal).unwrap();

        assert!(!store.toggle(stranger));
        assert!(!store.delete(stranger));
        assert_eq!(store.len(), 1);
        assert!(!store.list()[0].is_completed());
    }

    #[test]
    fn delete_removes_and_compacts() {
        let mut store = TaskStore::new();
        store.add("a", "", Priority::Normal);
        let b = store.add("b", "", Priority::Normal).unwrap();
        store.add("c", "", Priority::Normal);

        assert!(store.delete(b));
        assert!(store.get(b).is_none());
        assert_eq!(texts(&store), vec!["a", "c"]);

        assert!(!store.delete(b));
        assert_eq!(store.len(), 2);
    }
}
