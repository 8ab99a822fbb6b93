//! Background template loads.
//!
//! Image loads finish in any order. Each load takes a ticket; only the
//! ticket from the most recent `begin` (and no `cancel` since) may install
//! its image.

/// Identifies one background load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct TemplateLoads {
    generation: u64,
}

impl TemplateLoads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load, superseding every earlier one.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    /// Supersede pending loads without starting a new one.
    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_load_wins_regardless_of_finish_order() {
        let mut loads = TemplateLoads::new();
        let session = loads.begin();
        let picked = loads.begin();

        assert!(loads.is_current(picked));
        assert!(!loads.is_current(session));
    }

    #[test]
    fn cancel_supersedes_pending_load() {
        let mut loads = TemplateLoads::new();
        let pending = loads.begin();
        loads.cancel();
        assert!(!loads.is_current(pending));
    }
}
