use {
    crate::Event,
    serde::{Deserialize, Serialize},
};

/// The outcome of a successful state-mutating call: the events describing
/// what happened.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub events: Vec<Event>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    pub fn add_events<E>(mut self, events: E) -> Self
    where
        E: IntoIterator<Item = Event>,
    {
        self.events.extend(events);
        self
    }
}
