//! Topic-based event bus for runtime events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need: a HUD listens to [`Topic::Puzzle`], a quiz panel to
//! [`Topic::Quiz`], a logger to everything.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{FeedbackKind, FlowEvent, PuzzleEvent, QuizEvent};
