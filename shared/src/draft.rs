use crate::task::Priority;

/// In-progress input for a task that has not been submitted yet.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DraftInput {
    text: String,
    time: String,
    priority: Priority,
}

impl DraftInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Mutable access for editors that append or pop characters in place.
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn time_mut(&mut self) -> &mut String {
        &mut self.time
    }

    pub fn is_submittable(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
