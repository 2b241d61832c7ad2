//! One-shot intro sequence: `Pending -> Opening -> Dismissed`.
//!
//! The gate is DOM-free. The curtain component owns the timer and calls
//! [`IntroGate::finish`] when it fires; completion is handed out exactly once
//! through [`IntroGate::claim_completion`].

use log::{debug, warn};
use rand::Rng;

use crate::config::INTRO_PARTICLE_COUNT;
use crate::particles::{scatter, Particle, ScatterSpec};
use crate::storage::{IntroStore, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    Pending,
    Opening,
    Dismissed,
}

/// What a click on the reveal button did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Started,
    /// Opening anyway; the splash will show again next visit.
    StartedUnpersisted(StorageError),
    Ignored,
}

impl Trigger {
    pub fn started(&self) -> bool {
        !matches!(self, Trigger::Ignored)
    }
}

#[derive(Debug)]
pub struct IntroGate {
    phase: IntroPhase,
    seen_before: bool,
    particles: Vec<Particle>,
    completion_signaled: bool,
    torn_down: bool,
}

impl IntroGate {
    pub fn initialize<S, R>(store: &S, rng: &mut R) -> Self
    where
        S: IntroStore + ?Sized,
        R: Rng + ?Sized,
    {
        let seen_before = match store.has_seen_intro() {
            Ok(seen) => seen,
            Err(e) => {
                warn!("Could not read intro flag, showing intro: {}", e);
                false
            }
        };

        if seen_before {
            debug!("Intro already seen, skipping");
            return Self {
                phase: IntroPhase::Dismissed,
                seen_before,
                particles: Vec::new(),
                completion_signaled: false,
                torn_down: false,
            };
        }

        Self {
            phase: IntroPhase::Pending,
            seen_before,
            particles: scatter(rng, &ScatterSpec::intro_field(INTRO_PARTICLE_COUNT)),
            completion_signaled: false,
            torn_down: false,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn seen_before(&self) -> bool {
        self.seen_before
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The user asked for the reveal. Only the first call while pending has
    /// any effect; the flag is persisted before the phase changes.
    pub fn trigger<S: IntroStore + ?Sized>(&mut self, store: &S) -> Trigger {
        if self.phase != IntroPhase::Pending || self.torn_down {
            return Trigger::Ignored;
        }

        let outcome = match store.mark_intro_seen() {
            Ok(()) => Trigger::Started,
            Err(e) => {
                warn!("Could not persist intro flag: {}", e);
                Trigger::StartedUnpersisted(e)
            }
        };
        self.phase = IntroPhase::Opening;
        outcome
    }

    /// The dismissal timer elapsed.
    pub fn finish(&mut self) {
        if self.phase == IntroPhase::Opening {
            self.phase = IntroPhase::Dismissed;
        }
    }

    /// True exactly once, after the gate is dismissed and while it is still
    /// mounted.
    pub fn claim_completion(&mut self) -> bool {
        if self.phase != IntroPhase::Dismissed || self.completion_signaled || self.torn_down {
            return false;
        }
        self.completion_signaled = true;
        true
    }

    /// The host unmounted the gate; nothing may be signaled afterwards.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MemoryStore {
        seen: Cell<bool>,
        writes: Cell<usize>,
        broken: bool,
        log: RefCell<Vec<&'static str>>,
    }

    impl MemoryStore {
        fn seen() -> Self {
            let store = Self::default();
            store.seen.set(true);
            store
        }

        fn broken() -> Self {
            Self {
                broken: true,
                ..Self::default()
            }
        }
    }

    impl IntroStore for MemoryStore {
        fn has_seen_intro(&self) -> Result<bool, StorageError> {
            if self.broken {
                return Err(StorageError::Unavailable);
            }
            Ok(self.seen.get())
        }

        fn mark_intro_seen(&self) -> Result<(), StorageError> {
            self.log.borrow_mut().push("write");
            if self.broken {
                return Err(StorageError::Write("hasSeenCurtainAnimation"));
            }
            self.writes.set(self.writes.get() + 1);
            self.seen.set(true);
            Ok(())
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn first_visit_renders_full_sequence() {
        let store = MemoryStore::default();
        let mut gate = IntroGate::initialize(&store, &mut rng());

        assert_eq!(gate.phase(), IntroPhase::Pending);
        assert!(!gate.seen_before());
        assert_eq!(gate.particles().len(), 50);
        assert!(gate
            .particles()
            .iter()
            .all(|p| (0.0..=100.0).contains(&p.x) && (0.0..=100.0).contains(&p.y)));
        assert!(!gate.claim_completion());
    }

    #[test]
    fn returning_visitor_completes_immediately() {
        let store = MemoryStore::seen();
        let mut gate = IntroGate::initialize(&store, &mut rng());

        assert_eq!(gate.phase(), IntroPhase::Dismissed);
        assert!(gate.particles().is_empty());
        assert!(gate.claim_completion());
        assert!(!gate.claim_completion());
        assert_eq!(gate.trigger(&store), Trigger::Ignored);
        assert_eq!(store.writes.get(), 0);
    }

    #[test]
    fn unreadable_storage_fails_open() {
        let store = MemoryStore::broken();
        let gate = IntroGate::initialize(&store, &mut rng());
        assert_eq!(gate.phase(), IntroPhase::Pending);
        assert_eq!(gate.particles().len(), 50);
    }

    #[test]
    fn double_trigger_writes_once_and_completes_once() {
        let store = MemoryStore::default();
        let mut gate = IntroGate::initialize(&store, &mut rng());

        assert_eq!(gate.trigger(&store), Trigger::Started);
        assert_eq!(gate.trigger(&store), Trigger::Ignored);
        assert_eq!(store.writes.get(), 1);
        assert_eq!(gate.phase(), IntroPhase::Opening);
        assert!(!gate.claim_completion());

        gate.finish();
        gate.finish();
        let completions = (0..3).filter(|_| gate.claim_completion()).count();
        assert_eq!(completions, 1);
    }

    #[test]
    fn flag_is_written_before_opening() {
        let store = MemoryStore::default();
        let mut gate = IntroGate::initialize(&store, &mut rng());
        gate.trigger(&store);
        assert!(store.seen.get());
        assert_eq!(store.log.borrow().as_slice(), ["write"]);
        assert_eq!(gate.phase(), IntroPhase::Opening);
    }

    #[test]
    fn failed_write_still_opens() {
        let store = MemoryStore::broken();
        let mut gate = IntroGate::initialize(&store, &mut rng());
        let outcome = gate.trigger(&store);
        assert!(outcome.started());
        assert!(matches!(outcome, Trigger::StartedUnpersisted(StorageError::Write(_))));
        gate.finish();
        assert!(gate.claim_completion());
    }

    #[test]
    fn teardown_while_opening_suppresses_completion() {
        let store = MemoryStore::default();
        let mut gate = IntroGate::initialize(&store, &mut rng());
        gate.trigger(&store);
        gate.teardown();
        gate.finish();
        assert!(!gate.claim_completion());
    }

    #[test]
    fn finish_before_trigger_does_nothing() {
        let store = MemoryStore::default();
        let mut gate = IntroGate::initialize(&store, &mut rng());
        gate.finish();
        assert_eq!(gate.phase(), IntroPhase::Pending);
        assert!(!gate.claim_completion());
    }

    #[test]
    fn first_visit_scenario() {
        let store = MemoryStore::default();
        let mut gate = IntroGate::initialize(&store, &mut rng());
        assert_eq!(gate.particles().len(), 50);
        assert!(gate.trigger(&store).started());
        assert!(store.has_seen_intro().unwrap());
        gate.finish();
        assert!(gate.claim_completion());
        assert!(!gate.claim_completion());

        // next visit skips straight through
        let mut again = IntroGate::initialize(&store, &mut rng());
        assert!(again.claim_completion());
    }
}
