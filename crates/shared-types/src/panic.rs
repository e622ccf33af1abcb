//! Panic alert state machine.
//!
//! A confirmed alert walks `Idle → Sending → Sent → Idle` on a fixed
//! schedule measured from the moment of confirmation. Nothing is
//! transmitted anywhere; the machine only drives what the dashboard shows.
//!
//! The machine is clock-free. Whoever owns it (the dashboard's timer task,
//! or a test) reports elapsed time through [`PanicAlert::advance`]. Each
//! confirmation opens a new numbered cycle, and calls carrying an older
//! cycle number are ignored, so a superseded schedule can never touch the
//! current state.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanicStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl PanicStatus {
    /// Label on the big panic button.
    pub fn button_label(&self) -> &'static str {
        match self {
            PanicStatus::Sent => "ENVIADO",
            PanicStatus::Idle | PanicStatus::Sending => "PÂNICO",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanicStatus::Idle => "idle",
            PanicStatus::Sending => "sending",
            PanicStatus::Sent => "sent",
        }
    }
}

/// A scheduled transition within one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanicStep {
    MarkSent,
    Reset,
}

/// Delays of a cycle, both measured from confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanicTimings {
    sent_after: Duration,
    reset_after: Duration,
}

impl Default for PanicTimings {
    fn default() -> Self {
        Self {
            sent_after: Duration::from_millis(2000),
            reset_after: Duration::from_millis(3500),
        }
    }
}

impl PanicTimings {
    /// `reset_after` is raised to `sent_after` when given smaller.
    pub fn new(sent_after: Duration, reset_after: Duration) -> Self {
        Self {
            sent_after,
            reset_after: reset_after.max(sent_after),
        }
    }

    pub fn sent_after(&self) -> Duration {
        self.sent_after
    }

    pub fn reset_after(&self) -> Duration {
        self.reset_after
    }

    /// Steps in firing order with their offset from confirmation.
    pub fn schedule(&self) -> [(Duration, PanicStep); 2] {
        [
            (self.sent_after, PanicStep::MarkSent),
            (self.reset_after, PanicStep::Reset),
        ]
    }
}

/// Dashboard-owned panic state: status plus confirmation modal visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanicAlert {
    status: PanicStatus,
    modal_open: bool,
    cycle: u64,
    /// Index into the schedule of the next step to fire.
    next_step: usize,
}

impl PanicAlert {
    pub fn status(&self) -> PanicStatus {
        self.status
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    /// Number of the most recent cycle; zero before the first confirmation.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Panic button pressed. Status is left alone.
    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    /// Cancel pressed. Only hides the modal; a cycle already in flight keeps
    /// running and still resets on schedule.
    pub fn cancel(&mut self) {
        self.modal_open = false;
    }

    /// Confirm pressed. Starts a fresh cycle and returns its number.
    pub fn confirm(&mut self) -> u64 {
        self.cycle += 1;
        self.next_step = 0;
        self.status = PanicStatus::Sending;
        self.modal_open = true;
        self.cycle
    }

    /// Fire every step of `cycle` due at `elapsed` since its confirmation.
    ///
    /// Returns the steps that fired, in order. Stale cycles fire nothing.
    pub fn advance(
        &mut self,
        cycle: u64,
        timings: &PanicTimings,
        elapsed: Duration,
    ) -> Vec<PanicStep> {
        if cycle != self.cycle {
            return Vec::new();
        }
        let schedule = timings.schedule();
        let mut fired = Vec::new();
        while let Some(&(due, step)) = schedule.get(self.next_step) {
            if due > elapsed {
                break;
            }
            self.apply(step);
            self.next_step += 1;
            fired.push(step);
        }
        fired
    }

    fn apply(&mut self, step: PanicStep) {
        match step {
            PanicStep::MarkSent => self.status = PanicStatus::Sent,
            PanicStep::Reset => {
                self.status = PanicStatus::Idle;
                self.modal_open = false;
            }
        }
    }

    /// Label on the modal's confirm action.
    pub fn confirm_label(&self) -> &'static str {
        if self.status == PanicStatus::Sending {
            "Enviando..."
        } else {
            "CONFIRMAR ENVIO"
        }
    }
}
