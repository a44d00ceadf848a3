use log::trace;
use rand::Rng;

/// Canned advice shown in the suggestion banner. The pick does not look at
/// the task list.
pub const SUGGESTIONS: [&str; 4] = [
    "Consider adding a high-priority task for your most important goal",
    "Don't forget to allocate time for breaks between tasks",
    "How about adding a task for personal development? Allocate at least 30 minutes",
    "Remember to include a low-priority task for relaxation",
];

/// Picks one of [`SUGGESTIONS`] uniformly at random.
pub fn pick_suggestion<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let index = rng.gen_range(0..SUGGESTIONS.len());
    trace!("rolled suggestion {index}");
    SUGGESTIONS[index]
}
