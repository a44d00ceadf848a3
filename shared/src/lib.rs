//! Task list state for the todo tracker: the ordered task store, the draft
//! being typed, and the values derived from the list for display.

mod draft;
mod store;
mod suggestion;
mod task;
mod tracker;
mod view;

pub use draft::DraftInput;
pub use store::TaskStore;
pub use suggestion::{pick_suggestion, SUGGESTIONS};
pub use task::{ParsePriorityError, Priority, Task, TaskId};
pub use tracker::Tracker;
pub use view::{completion_data, CompletionBucket, DerivedView, COMPLETED, REMAINING};
