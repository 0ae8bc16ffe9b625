//! Watch scheduling state machine
//!
//! Two states, `Idle` and `Running`. A build starts only from `Idle`, so at
//! most one build touches the destination at a time. Changes noted while
//! `Running` set the pending-rerun flag instead of starting a second build;
//! `finish` hands that flag back so the caller schedules exactly one
//! follow-up build covering all of them.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::error::SchedulerError;

/// Debounce duration in milliseconds
pub const DEBOUNCE_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
}

#[derive(Debug)]
pub struct WatchScheduler {
    state: SchedulerState,
    pending_rerun: bool,
    /// Run due without waiting for a change (manual trigger)
    forced: bool,
    changes: BTreeSet<PathBuf>,
    last_change: Option<Instant>,
    debounce: Duration,
}

impl Default for WatchScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchScheduler {
    pub fn new() -> Self {
        Self::with_debounce(Duration::from_millis(DEBOUNCE_MS))
    }

    pub fn with_debounce(debounce: Duration) -> Self {
        Self {
            state: SchedulerState::Idle,
            pending_rerun: false,
            forced: false,
            changes: BTreeSet::new(),
            last_change: None,
            debounce,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    pub fn has_pending_rerun(&self) -> bool {
        self.pending_rerun
    }

    /// Record a change under the watched tree
    pub fn note_change(&mut self, path: PathBuf) {
        self.changes.insert(path);
        match self.state {
            SchedulerState::Idle => self.last_change = Some(Instant::now()),
            SchedulerState::Running => self.pending_rerun = true,
        }
    }

    /// Request a build regardless of changes
    pub fn trigger(&mut self) {
        match self.state {
            SchedulerState::Idle => self.forced = true,
            SchedulerState::Running => self.pending_rerun = true,
        }
    }

    /// A build is due: idle, and either triggered or the debounce window
    /// has passed since the last change
    pub fn should_run(&self) -> bool {
        if self.state != SchedulerState::Idle {
            return false;
        }
        if self.forced {
            return true;
        }
        match self.last_change {
            Some(last) => !self.changes.is_empty() && last.elapsed() >= self.debounce,
            None => false,
        }
    }

    /// `Idle -> Running`, returning the changes this build covers
    pub fn begin(&mut self) -> Result<Vec<PathBuf>, SchedulerError> {
        if self.state == SchedulerState::Running {
            return Err(SchedulerError::AlreadyRunning);
        }
        self.state = SchedulerState::Running;
        self.forced = false;
        self.pending_rerun = false;
        self.last_change = None;
        Ok(std::mem::take(&mut self.changes).into_iter().collect())
    }

    /// `Running -> Idle`; true when a follow-up build is owed
    pub fn finish(&mut self) -> bool {
        self.state = SchedulerState::Idle;
        let rerun = std::mem::take(&mut self.pending_rerun);
        if rerun {
            if self.changes.is_empty() {
                self.forced = true;
            } else {
                self.last_change = Some(Instant::now());
            }
        }
        rerun
    }
}
