//! Topic-based event bus implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{FlowEvent, PuzzleEvent, QuizEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Screens, levels, loading, feedback, saves
    Flow,
    /// Puzzle panels, meters, keys, the door
    Puzzle,
    /// Quiz questions and results
    Quiz,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Flow, Topic::Puzzle, Topic::Quiz];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Flow(FlowEvent),
    Puzzle(PuzzleEvent),
    Quiz(QuizEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Flow(_) => Topic::Flow,
            Event::Puzzle(_) => Topic::Puzzle,
            Event::Quiz(_) => Topic::Quiz,
        }
    }
}

impl From<FlowEvent> for Event {
    fn from(event: FlowEvent) -> Self {
        Event::Flow(event)
    }
}

impl From<PuzzleEvent> for Event {
    fn from(event: PuzzleEvent) -> Self {
        Event::Puzzle(event)
    }
}

impl From<QuizEvent> for Event {
    fn from(event: QuizEvent) -> Self {
        Event::Quiz(event)
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Clones share the same channels.
#[derive(Clone)]
pub struct EventBus {
    flow: broadcast::Sender<Event>,
    puzzle: broadcast::Sender<Event>,
    quiz: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            flow: broadcast::channel(capacity).0,
            puzzle: broadcast::channel(capacity).0,
            quiz: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Flow => &self.flow,
            Topic::Puzzle => &self.puzzle,
            Topic::Quiz => &self.quiz,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();

        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
