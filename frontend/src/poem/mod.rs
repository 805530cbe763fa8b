//! The poem easter egg: a staged typewriter reveal inside an overlay that can
//! be swiped away.
//!
//! `PoemController` is a pure state machine. The caller feeds it a millisecond
//! clock through [`PoemController::advance`] and input through the gesture
//! methods; everything time-based is a task in its [`TaskRegistry`], so
//! disposing the controller cancels all pending work in one place.

pub mod gesture;
pub mod lifecycle;
pub mod particles;
pub mod schedule;
pub mod script;
pub mod scroll;

#[cfg(test)]
mod tests;

use rand::rngs::SmallRng;

use crate::config::{EXIT_TRANSITION_MS, PARTICLE_COUNT, PARTICLE_LIFETIME_MS, SWIPE_COMMIT_PX};

pub use gesture::{SwipeGesture, SwipeOutcome};
pub use lifecycle::OverlayLifecycle;
pub use particles::Particle;
pub use schedule::{TaskKey, TaskRegistry};
pub use script::{PoemScript, ScriptError, TextLine};
pub use scroll::{ScrollGuard, ScrollLock};

/// Something observable that happened during [`PoemController::advance`].
/// An advance that returns no events changed nothing on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoemEvent {
    Opened,
    LineStarted(usize),
    CharRevealed(usize),
    LineFinished(usize),
    SequenceComplete,
    ParticlesExpired,
    Closed,
}

#[derive(Debug, Clone, Copy, Default)]
struct LineReveal {
    started: bool,
    shown: usize,
}

pub struct PoemController<L: ScrollLock + Clone> {
    script: PoemScript,
    lines: Vec<TextLine>,
    lengths: Vec<usize>,
    reveals: Vec<LineReveal>,
    lifecycle: OverlayLifecycle,
    gesture: SwipeGesture,
    tasks: TaskRegistry,
    particles: Vec<Particle>,
    next_particle_id: u64,
    complete: bool,
    disposed: bool,
    scroll_lock: L,
    scroll_guard: Option<ScrollGuard<L>>,
    rng: SmallRng,
}

impl<L: ScrollLock + Clone> PoemController<L> {
    pub fn new(script: PoemScript, scroll_lock: L, rng: SmallRng) -> Self {
        let lines: Vec<TextLine> = script.lines().cloned().collect();
        let lengths = lines.iter().map(TextLine::char_len).collect();
        let reveals = vec![LineReveal::default(); lines.len()];
        Self {
            script,
            lines,
            lengths,
            reveals,
            lifecycle: OverlayLifecycle::Closed,
            gesture: SwipeGesture::new(SWIPE_COMMIT_PX),
            tasks: TaskRegistry::new(),
            particles: Vec::new(),
            next_particle_id: 0,
            complete: false,
            disposed: false,
            scroll_lock,
            scroll_guard: None,
            rng,
        }
    }

    /// Shows the overlay and restarts the reveal from the first line.
    pub fn open(&mut self, now_ms: u64) {
        if self.disposed {
            return;
        }
        self.tasks.cancel_all();
        self.gesture.reset();
        self.complete = false;
        self.lifecycle = OverlayLifecycle::Opening;
        if self.scroll_guard.is_none() {
            self.scroll_guard = Some(ScrollGuard::acquire(self.scroll_lock.clone()));
        }
        self.tasks.schedule(TaskKey::EnterTransition, now_ms);
        self.start_sequence(now_ms);
        self.spawn_particles(now_ms);
    }

    fn start_sequence(&mut self, now_ms: u64) {
        if self.disposed || !self.lifecycle.is_mounted() {
            return;
        }
        for (i, line) in self.lines.iter().enumerate() {
            self.reveals[i] = LineReveal::default();
            self.tasks.cancel(TaskKey::LineTick(i));
            self.tasks
                .schedule(TaskKey::LineStart(i), now_ms.saturating_add(line.start_offset_ms));
        }
    }

    /// Starts the exit transition. Returns false if the overlay was not
    /// showing.
    pub fn dismiss(&mut self, now_ms: u64) -> bool {
        if self.disposed || !self.lifecycle.is_dismissable() {
            return false;
        }
        self.lifecycle = OverlayLifecycle::Closing;
        self.gesture.reset();
        self.tasks.schedule(
            TaskKey::ExitTransition,
            now_ms.saturating_add(EXIT_TRANSITION_MS),
        );
        true
    }

    pub fn gesture_start(&mut self, origin_y: f64) {
        if self.disposed || !self.lifecycle.is_dismissable() {
            return;
        }
        self.gesture.start(origin_y);
    }

    pub fn gesture_move(&mut self, current_y: f64) {
        if self.disposed {
            return;
        }
        self.gesture.track(current_y);
    }

    pub fn gesture_end(&mut self, now_ms: u64) -> SwipeOutcome {
        if self.disposed {
            return SwipeOutcome::Cancel;
        }
        let outcome = self.gesture.release();
        if outcome == SwipeOutcome::Commit && !self.dismiss(now_ms) {
            self.gesture.reset();
        }
        outcome
    }

    /// Runs every task due at `now_ms`.
    pub fn advance(&mut self, now_ms: u64) -> Vec<PoemEvent> {
        let mut events = Vec::new();
        if self.disposed {
            return events;
        }
        while let Some((key, due_ms)) = self.tasks.pop_due(now_ms) {
            match key {
                TaskKey::LineStart(i) => self.start_line(i, due_ms, &mut events),
                TaskKey::LineTick(i) => self.tick_line(i, due_ms, &mut events),
                TaskKey::EnterTransition => {
                    if self.lifecycle == OverlayLifecycle::Opening {
                        self.lifecycle = OverlayLifecycle::Open;
                        events.push(PoemEvent::Opened);
                    }
                }
                TaskKey::ExitTransition => {
                    self.finish_close();
                    events.push(PoemEvent::Closed);
                }
                TaskKey::ParticleExpiry => {
                    self.particles.clear();
                    events.push(PoemEvent::ParticlesExpired);
                }
            }
        }
        events
    }

    /// Cancels everything and releases the scroll lock. The controller
    /// ignores all calls afterwards.
    pub fn dispose(&mut self) {
        self.tasks.cancel_all();
        self.scroll_guard = None;
        self.disposed = true;
    }

    fn start_line(&mut self, i: usize, due_ms: u64, events: &mut Vec<PoemEvent>) {
        let Some(reveal) = self.reveals.get_mut(i) else {
            return;
        };
        reveal.started = true;
        events.push(PoemEvent::LineStarted(i));
        if self.lengths[i] == 0 {
            self.finish_line(i, events);
        } else {
            self.schedule_tick(i, due_ms);
        }
    }

    fn tick_line(&mut self, i: usize, due_ms: u64, events: &mut Vec<PoemEvent>) {
        let Some(reveal) = self.reveals.get_mut(i) else {
            return;
        };
        let len = self.lengths[i];
        if reveal.shown < len {
            reveal.shown += 1;
            events.push(PoemEvent::CharRevealed(i));
        }
        if reveal.shown < len {
            self.schedule_tick(i, due_ms);
        } else {
            self.finish_line(i, events);
        }
    }

    fn schedule_tick(&mut self, i: usize, from_ms: u64) {
        let interval = self.lines[i].char_interval_ms;
        self.tasks
            .schedule(TaskKey::LineTick(i), from_ms.saturating_add(interval));
    }

    fn finish_line(&mut self, i: usize, events: &mut Vec<PoemEvent>) {
        events.push(PoemEvent::LineFinished(i));
        if self.lines[i].is_final && !self.complete {
            self.complete = true;
            events.push(PoemEvent::SequenceComplete);
        }
    }

    fn spawn_particles(&mut self, now_ms: u64) {
        self.particles = particles::burst(&mut self.rng, self.next_particle_id, PARTICLE_COUNT);
        self.next_particle_id += PARTICLE_COUNT as u64;
        self.tasks.schedule(
            TaskKey::ParticleExpiry,
            now_ms.saturating_add(PARTICLE_LIFETIME_MS),
        );
    }

    fn finish_close(&mut self) {
        self.lifecycle = OverlayLifecycle::Closed;
        self.tasks.cancel_all();
        self.gesture.reset();
        self.particles.clear();
        self.scroll_guard = None;
    }

    pub fn script(&self) -> &PoemScript {
        &self.script
    }

    pub fn lifecycle(&self) -> OverlayLifecycle {
        self.lifecycle
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn gesture(&self) -> &SwipeGesture {
        &self.gesture
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[cfg(test)]
    pub fn shown_chars(&self, line: usize) -> usize {
        self.reveals.get(line).map_or(0, |r| r.shown)
    }

    /// The revealed prefix of a line.
    pub fn line_text(&self, line: usize) -> &str {
        let (Some(text), Some(reveal)) = (self.lines.get(line), self.reveals.get(line)) else {
            return "";
        };
        let end = text
            .content
            .char_indices()
            .nth(reveal.shown)
            .map_or(text.content.len(), |(byte, _)| byte);
        &text.content[..end]
    }

    /// A started line that still has characters to reveal shows a cursor.
    pub fn is_typing(&self, line: usize) -> bool {
        match self.reveals.get(line) {
            Some(r) => r.started && r.shown < self.lengths[line],
            None => false,
        }
    }
}
