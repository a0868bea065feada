/// Packet counters of one finished probe session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeStats {
    pub sent: u16,
    pub received: u16,
}

impl ProbeStats {
    pub fn new(sent: u16, received: u16) -> Self {
        Self { sent, received }
    }

    pub fn outcome(&self) -> ProbeOutcome {
        if self.received > 0 {
            ProbeOutcome::Responsive
        } else {
            ProbeOutcome::Unresponsive
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Responsive,
    Unresponsive,
}

impl ProbeOutcome {
    pub fn is_responsive(self) -> bool {
        matches!(self, ProbeOutcome::Responsive)
    }
}
