use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use log::{debug, warn};

use super::element::MediaElement;
use super::progress::{Progress, clamp_time, known_duration};
use super::types::{HandleId, HandleState, PlayOutcome, PlaybackError, RetryOutcome};

struct Slot<E> {
    element: E,
    state: HandleState,
    progress: Progress,
}

struct PendingRetry {
    id: HandleId,
    due: Instant,
}

/// Keeps at most one registered element playing.
///
/// All transitions happen synchronously inside the calling handler; the only
/// deferred work is a single start retry, fired by the host loop through
/// [`PlaybackCoordinator::fire_due_retry`].
pub struct PlaybackCoordinator<E> {
    slots: BTreeMap<HandleId, Slot<E>>,
    active: Option<HandleId>,
    pending_retry: Option<PendingRetry>,
    retry_delay: Duration,
}

impl<E: MediaElement> PlaybackCoordinator<E> {
    pub fn new(retry_delay: Duration) -> Self {
        Self {
            slots: BTreeMap::new(),
            active: None,
            pending_retry: None,
            retry_delay,
        }
    }

    /// Add an idle handle backed by `element`.
    pub fn register(&mut self, id: HandleId, element: E) -> Result<(), PlaybackError> {
        if self.slots.contains_key(&id) {
            return Err(PlaybackError::AlreadyRegistered(id));
        }
        debug!("register media handle {id}");
        self.slots.insert(
            id,
            Slot {
                element,
                state: HandleState::Idle,
                progress: Progress::default(),
            },
        );
        Ok(())
    }

    /// Remove a handle and hand its element back.
    ///
    /// A playing element is paused first. Removing the active handle clears
    /// the active selection; a retry pending for it is dropped.
    pub fn unregister(&mut self, id: &HandleId) -> Result<E, PlaybackError> {
        let mut slot = self
            .slots
            .remove(id)
            .ok_or_else(|| PlaybackError::UnknownHandle(id.clone()))?;

        if slot.state == HandleState::Playing {
            slot.element.pause();
        }
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
        if self.pending_retry.as_ref().is_some_and(|r| &r.id == id) {
            self.pending_retry = None;
        }
        debug!("unregister media handle {id}");
        Ok(slot.element)
    }

    /// Unregister every handle, returning the ids that were removed.
    pub fn unregister_all(&mut self) -> Vec<HandleId> {
        let ids: Vec<HandleId> = self.slots.keys().cloned().collect();
        for id in &ids {
            let _ = self.unregister(id);
        }
        ids
    }

    /// Play `id`, pausing every other playing handle first.
    ///
    /// Calling this again on the active, playing handle pauses it instead.
    pub fn request_play(&mut self, id: &HandleId) -> Result<PlayOutcome, PlaybackError> {
        if !self.slots.contains_key(id) {
            return Err(PlaybackError::UnknownHandle(id.clone()));
        }

        if self.active.as_ref() == Some(id) && self.is_playing(id) {
            if let Some(slot) = self.slots.get_mut(id) {
                slot.element.pause();
                slot.state = HandleState::Idle;
            }
            self.pending_retry = None;
            return Ok(PlayOutcome::Paused);
        }

        for (other, slot) in self.slots.iter_mut() {
            if other != id && slot.state == HandleState::Playing {
                slot.element.pause();
                slot.state = HandleState::Idle;
            }
        }
        self.pending_retry = None;
        self.active = Some(id.clone());

        let Some(slot) = self.slots.get_mut(id) else {
            return Err(PlaybackError::UnknownHandle(id.clone()));
        };
        slot.state = HandleState::Playing;
        match slot.element.start() {
            Ok(()) => Ok(PlayOutcome::Started),
            Err(e) => {
                warn!("{id}: {e}; retrying in {:?}", self.retry_delay);
                self.pending_retry = Some(PendingRetry {
                    id: id.clone(),
                    due: Instant::now() + self.retry_delay,
                });
                Ok(PlayOutcome::RetryScheduled)
            }
        }
    }

    /// When the pending retry is due at `now`, attempt the start once more.
    ///
    /// Returns `None` when nothing was due, or when the handle is no longer
    /// the active playing one.
    pub fn fire_due_retry(&mut self, now: Instant) -> Option<RetryOutcome> {
        if self.pending_retry.as_ref().is_none_or(|r| now < r.due) {
            return None;
        }
        let retry = self.pending_retry.take()?;
        if self.active.as_ref() != Some(&retry.id) {
            return None;
        }
        let slot = self.slots.get_mut(&retry.id)?;
        if slot.state != HandleState::Playing {
            return None;
        }

        match slot.element.start() {
            Ok(()) => Some(RetryOutcome::Started),
            Err(e) => {
                warn!("{}: retry failed, leaving paused: {e}", retry.id);
                slot.state = HandleState::Idle;
                Some(RetryOutcome::GaveUp)
            }
        }
    }

    /// When the pending start retry is due, if any.
    pub fn retry_due_at(&self) -> Option<Instant> {
        self.pending_retry.as_ref().map(|r| r.due)
    }

    /// Record progress for the active handle. Reports for any other handle are
    /// ignored; returns whether anything was applied.
    pub fn report_progress(&mut self, id: &HandleId, current_time: f64, duration: f64) -> bool {
        if self.active.as_ref() != Some(id) {
            return false;
        }
        let Some(slot) = self.slots.get_mut(id) else {
            return false;
        };
        slot.progress.current_time = clamp_time(current_time);
        // An unknown duration keeps whatever was known before.
        if let Some(d) = known_duration(duration) {
            slot.progress.duration = Some(d);
        }
        true
    }

    /// Record a duration learned from metadata; applies to any registered
    /// handle since it does not touch the displayed position.
    pub fn report_metadata(&mut self, id: &HandleId, duration: f64) -> bool {
        let Some(d) = known_duration(duration) else {
            return false;
        };
        match self.slots.get_mut(id) {
            Some(slot) => {
                slot.progress.duration = Some(d);
                true
            }
            None => false,
        }
    }

    /// The active handle reached its end: it stops playing but stays selected.
    pub fn report_ended(&mut self, id: &HandleId) -> bool {
        if self.active.as_ref() != Some(id) {
            return false;
        }
        match self.slots.get_mut(id) {
            Some(slot) => {
                slot.state = HandleState::Idle;
                true
            }
            None => false,
        }
    }

    /// Poll the active element and feed its status into the progress and
    /// ended reports.
    pub fn sync_active(&mut self) {
        let Some(id) = self.active.clone() else {
            return;
        };
        if !self.is_playing(&id) {
            return;
        }
        let Some(status) = self.slots.get(&id).map(|s| s.element.status()) else {
            return;
        };
        self.report_progress(&id, status.current_time, status.duration);
        if status.ended {
            self.report_ended(&id);
        }
    }

    pub fn active(&self) -> Option<&HandleId> {
        self.active.as_ref()
    }

    pub fn is_registered(&self, id: &HandleId) -> bool {
        self.slots.contains_key(id)
    }

    pub fn is_playing(&self, id: &HandleId) -> bool {
        self.state(id) == Some(HandleState::Playing)
    }

    pub fn state(&self, id: &HandleId) -> Option<HandleState> {
        self.slots.get(id).map(|s| s.state)
    }

    pub fn progress(&self, id: &HandleId) -> Option<Progress> {
        self.slots.get(id).map(|s| s.progress)
    }

    pub fn element(&self, id: &HandleId) -> Option<&E> {
        self.slots.get(id).map(|s| &s.element)
    }

    pub fn ids(&self) -> impl Iterator<Item = &HandleId> {
        self.slots.keys()
    }

    pub fn playing_count(&self) -> usize {
        self.slots
            .values()
            .filter(|s| s.state == HandleState::Playing)
            .count()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
