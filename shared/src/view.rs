use rand::Rng;
use serde::Serialize;

use crate::suggestion::pick_suggestion;
use crate::task::Task;

pub const COMPLETED: &str = "Completed";
pub const REMAINING: &str = "Remaining";

/// One bar of the completion chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionBucket {
    pub name: &'static str,
    pub value: usize,
}

/// Completed and remaining counts, always in that order.
pub fn completion_data(tasks: &[Task]) -> [CompletionBucket; 2] {
    let completed = tasks.iter().filter(|task| task.is_completed()).count();
    [
        CompletionBucket {
            name: COMPLETED,
            value: completed,
        },
        CompletionBucket {
            name: REMAINING,
            value: tasks.len() - completed,
        },
    ]
}

/// Values derived from the task list for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedView {
    pub suggestion: &'static str,
    pub completion: [CompletionBucket; 2],
}

impl DerivedView {
    pub fn compute<R: Rng + ?Sized>(tasks: &[Task], rng: &mut R) -> Self {
        Self {
            suggestion: pick_suggestion(rng),
            completion: completion_data(tasks),
        }
    }

    pub fn completed(&self) -> usize {
        self.completion[0].value
    }

    pub fn remaining(&self) -> usize {
        self.completion[1].value
    }
}
