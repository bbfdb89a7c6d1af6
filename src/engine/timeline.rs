use crate::engine::types::{Event, EventKind};

/// Append-only event log; steps are assigned in emission order from 1.
#[derive(Debug, Default)]
pub struct Timeline {
    events: Vec<Event>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, kind: EventKind, seq: u64, description: String) {
        self.push(kind, seq, None, None, description);
    }

    pub fn emit_with_data(&mut self, kind: EventKind, seq: u64, data: &str, description: String) {
        self.push(kind, seq, Some(data.to_string()), None, description);
    }

    pub fn emit_unexpected(&mut self, seq: u64, expected_seq: u64, description: String) {
        self.push(
            EventKind::UnexpectedSeq,
            seq,
            None,
            Some(expected_seq),
            description,
        );
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    fn push(
        &mut self,
        kind: EventKind,
        seq: u64,
        data: Option<String>,
        expected_seq: Option<u64>,
        description: String,
    ) {
        let step = self.events.len() as u64 + 1;
        tracing::trace!(step, kind = kind.as_str(), seq, "{}", description);

        self.events.push(Event {
            step,
            kind,
            who: kind.role(),
            seq,
            data,
            expected_seq,
            description,
        });
    }
}
