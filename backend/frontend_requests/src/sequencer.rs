/// Identifies one issued request. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Hands out monotonically increasing tickets so a response can tell whether a
/// newer request was issued while it was in flight.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Only the most recently issued request may update state.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase() {
        let mut sequencer = RequestSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert!(second > first);
    }

    #[test]
    fn stale_response_is_rejected() {
        let mut sequencer = RequestSequencer::new();
        let slow = sequencer.issue();
        let fast = sequencer.issue();

        // fast resolves first, slow resolves afterwards
        assert!(sequencer.is_latest(fast));
        assert!(!sequencer.is_latest(slow));
    }

    #[test]
    fn single_request_is_latest() {
        let mut sequencer = RequestSequencer::new();
        let ticket = sequencer.issue();
        assert!(sequencer.is_latest(ticket));
    }
}
