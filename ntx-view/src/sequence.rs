//! Request tickets for discarding stale responses.
//!
//! Every filter click issues a new ticket before its request goes out.
//! When a response comes back it is only applied if its ticket is still
//! the latest one issued, so a slow older request can never overwrite the
//! table rendered for a newer one.

/// Ticket handed out for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Monotonic counter of issued requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}
