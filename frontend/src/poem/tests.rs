use super::*;
use super::script::Stanza;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct CountingLock {
    held: Rc<Cell<bool>>,
    acquisitions: Rc<Cell<u32>>,
}

impl ScrollLock for CountingLock {
    fn lock(&self) {
        assert!(!self.held.get(), "scroll locked twice");
        self.held.set(true);
        self.acquisitions.set(self.acquisitions.get() + 1);
    }

    fn unlock(&self) {
        self.held.set(false);
    }
}

fn line(content: &str, start_offset_ms: u64, char_interval_ms: u64, is_final: bool) -> TextLine {
    TextLine {
        content: content.into(),
        start_offset_ms,
        char_interval_ms,
        is_final,
    }
}

fn script(lines: Vec<TextLine>) -> PoemScript {
    PoemScript {
        title: "For Tests".into(),
        tagline: "done".into(),
        stanzas: vec![Stanza { lines }],
    }
}

fn two_line_script() -> PoemScript {
    script(vec![
        line("abc", 0, 10, false),
        line("hello", 15, 10, true),
    ])
}

fn controller(script: PoemScript) -> (PoemController<CountingLock>, CountingLock) {
    let lock = CountingLock::default();
    let ctl = PoemController::new(script, lock.clone(), SmallRng::seed_from_u64(42));
    (ctl, lock)
}

fn opened(script: PoemScript) -> (PoemController<CountingLock>, CountingLock) {
    let (mut ctl, lock) = controller(script);
    ctl.open(0);
    assert_eq!(ctl.advance(0).first(), Some(&PoemEvent::Opened));
    (ctl, lock)
}

fn count(events: &[PoemEvent], wanted: PoemEvent) -> usize {
    events.iter().filter(|e| **e == wanted).count()
}

#[test]
fn reveal_is_monotonic_and_reaches_full_length() {
    let (mut ctl, _lock) = opened(two_line_script());
    let mut last = vec![0; ctl.line_count()];

    for now in (0..=200).step_by(5) {
        ctl.advance(now);
        for (i, prev) in last.iter_mut().enumerate() {
            let shown = ctl.shown_chars(i);
            assert!(shown >= *prev, "line {i} went backwards at {now}ms");
            assert!(shown <= ctl.lines[i].char_len());
            *prev = shown;
        }
    }

    assert_eq!(ctl.line_text(0), "abc");
    assert_eq!(ctl.line_text(1), "hello");
    assert!(!ctl.is_typing(0));
    assert!(!ctl.is_typing(1));
}

#[test]
fn characters_appear_one_interval_apart_after_the_start_offset() {
    let (mut ctl, _lock) = opened(script(vec![line("abc", 100, 25, true)]));

    ctl.advance(99);
    assert!(!ctl.is_typing(0));
    ctl.advance(100);
    assert!(ctl.is_typing(0));
    assert_eq!(ctl.shown_chars(0), 0);

    ctl.advance(124);
    assert_eq!(ctl.shown_chars(0), 0);
    ctl.advance(125);
    assert_eq!(ctl.line_text(0), "a");

    let events = ctl.advance(175);
    assert_eq!(ctl.line_text(0), "abc");
    assert_eq!(count(&events, PoemEvent::LineFinished(0)), 1);
}

#[test]
fn late_frame_catches_up_without_skipping() {
    let (mut ctl, _lock) = opened(two_line_script());
    let events = ctl.advance(10_000);

    assert_eq!(ctl.shown_chars(0), 3);
    assert_eq!(ctl.shown_chars(1), 5);
    let finished: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, PoemEvent::LineFinished(_)))
        .collect();
    // "abc" ends at 30ms, "hello" at 65ms.
    assert_eq!(
        finished,
        [&PoemEvent::LineFinished(0), &PoemEvent::LineFinished(1)]
    );
}

#[test]
fn complete_fires_once_after_final_line() {
    let (mut ctl, _lock) = opened(two_line_script());

    let mut events = ctl.advance(64);
    assert!(!ctl.is_complete());
    assert_eq!(count(&events, PoemEvent::SequenceComplete), 0);

    events.extend(ctl.advance(65));
    assert!(ctl.is_complete());
    events.extend(ctl.advance(60_000));
    assert_eq!(count(&events, PoemEvent::SequenceComplete), 1);
}

#[test]
fn final_flag_not_position_decides_completion() {
    let (mut ctl, _lock) = opened(script(vec![
        line("ab", 0, 10, true),
        line("a much longer trailing line", 0, 10, false),
    ]));

    ctl.advance(20);
    assert!(ctl.is_complete());
    assert!(ctl.is_typing(1));
}

#[test]
fn swipe_deltas_keep_only_downward_progress() {
    let (mut ctl, _lock) = opened(two_line_script());
    ctl.gesture_start(300.0);
    for delta in [40.0, -10.0, 90.0] {
        ctl.gesture_move(300.0 + delta);
    }
    assert_eq!(ctl.gesture().offset_px(), 90.0);
    assert!(ctl.gesture().is_dragging());
}

#[test]
fn long_swipe_dismisses() {
    let (mut ctl, _lock) = opened(two_line_script());
    ctl.gesture_start(0.0);
    ctl.gesture_move(150.0);

    assert_eq!(ctl.gesture_end(10), SwipeOutcome::Commit);
    assert_eq!(ctl.lifecycle(), OverlayLifecycle::Closing);
    assert_eq!(ctl.gesture().offset_px(), 0.0);
    assert!(!ctl.gesture().is_dragging());
}

#[test]
fn short_swipe_snaps_back_and_stays_open() {
    let (mut ctl, _lock) = opened(two_line_script());
    ctl.gesture_start(0.0);
    ctl.gesture_move(50.0);

    assert_eq!(ctl.gesture_end(10), SwipeOutcome::Cancel);
    assert_eq!(ctl.lifecycle(), OverlayLifecycle::Open);
    assert_eq!(ctl.gesture().offset_px(), 0.0);
    assert!(!ctl.gesture().is_dragging());
}

#[test]
fn dismiss_closes_after_exit_transition_and_unlocks_scroll() {
    let (mut ctl, lock) = opened(two_line_script());
    assert!(lock.held.get());

    assert!(ctl.dismiss(1_000));
    assert!(!ctl.dismiss(1_001));
    ctl.advance(1_299);
    assert_eq!(ctl.lifecycle(), OverlayLifecycle::Closing);
    assert!(lock.held.get());

    let events = ctl.advance(1_300);
    assert_eq!(events.last(), Some(&PoemEvent::Closed));
    assert_eq!(ctl.lifecycle(), OverlayLifecycle::Closed);
    assert!(!lock.held.get());
    assert_eq!(ctl.pending_tasks(), 0);
}

#[test]
fn closing_mid_reveal_cancels_pending_ticks() {
    let (mut ctl, _lock) = opened(script(vec![line("abcdefghij", 0, 100, true)]));
    ctl.advance(250);
    assert_eq!(ctl.shown_chars(0), 2);

    // Typing continues under the exit transition, then stops at close.
    assert!(ctl.dismiss(250));
    ctl.advance(550);
    assert_eq!(ctl.lifecycle(), OverlayLifecycle::Closed);
    assert_eq!(ctl.shown_chars(0), 5);

    ctl.advance(10_000);
    assert_eq!(ctl.shown_chars(0), 5);
    assert!(!ctl.is_complete());
}

#[test]
fn reopening_resets_the_cycle() {
    let (mut ctl, lock) = opened(two_line_script());
    ctl.advance(1_000);
    assert!(ctl.is_complete());
    ctl.dismiss(1_000);
    ctl.advance(1_300);

    ctl.open(2_000);
    assert_eq!(ctl.lifecycle(), OverlayLifecycle::Opening);
    assert!(!ctl.is_complete());
    for i in 0..ctl.line_count() {
        assert_eq!(ctl.shown_chars(i), 0);
        assert_eq!(ctl.line_text(i), "");
    }
    assert_eq!(lock.acquisitions.get(), 2);

    let events = ctl.advance(3_000);
    assert_eq!(count(&events, PoemEvent::Opened), 1);
    assert_eq!(count(&events, PoemEvent::SequenceComplete), 1);
}

#[test]
fn reopening_while_closing_cancels_the_exit() {
    let (mut ctl, lock) = opened(two_line_script());
    ctl.dismiss(10);
    ctl.open(20);

    ctl.advance(1_000);
    assert_eq!(ctl.lifecycle(), OverlayLifecycle::Open);
    assert!(lock.held.get());
    assert_eq!(lock.acquisitions.get(), 1);
}

#[test]
fn dispose_freezes_state_and_releases_scroll() {
    let (mut ctl, lock) = opened(two_line_script());
    ctl.advance(20);
    let before: Vec<_> = (0..ctl.line_count()).map(|i| ctl.shown_chars(i)).collect();

    ctl.dispose();
    assert!(!lock.held.get());
    assert_eq!(ctl.pending_tasks(), 0);

    assert!(ctl.advance(60_000).is_empty());
    let after: Vec<_> = (0..ctl.line_count()).map(|i| ctl.shown_chars(i)).collect();
    assert_eq!(before, after);

    ctl.open(70_000);
    ctl.gesture_start(0.0);
    ctl.gesture_move(500.0);
    assert_eq!(ctl.gesture_end(70_010), SwipeOutcome::Cancel);
    assert_eq!(ctl.lifecycle(), OverlayLifecycle::Open);
    assert!(!lock.held.get());
}

#[test]
fn dropping_the_controller_releases_scroll() {
    let (ctl, lock) = opened(two_line_script());
    assert!(lock.held.get());
    drop(ctl);
    assert!(!lock.held.get());
}

#[test]
fn particle_burst_expires_after_its_lifetime() {
    let (mut ctl, _lock) = opened(two_line_script());
    assert_eq!(ctl.particles().len(), 20);

    ctl.advance(1_499);
    assert_eq!(ctl.particles().len(), 20);
    let events = ctl.advance(1_500);
    assert_eq!(count(&events, PoemEvent::ParticlesExpired), 1);
    assert!(ctl.particles().is_empty());
}

#[test]
fn out_of_order_input_is_ignored() {
    let (mut ctl, lock) = controller(two_line_script());
    ctl.gesture_move(400.0);
    assert_eq!(ctl.gesture_end(0), SwipeOutcome::Cancel);
    assert!(!ctl.dismiss(0));
    assert!(ctl.advance(10_000).is_empty());
    assert_eq!(ctl.lifecycle(), OverlayLifecycle::Closed);
    assert!(!lock.held.get());
    assert_eq!(ctl.line_text(99), "");
    assert!(!ctl.is_typing(99));
}

#[test]
fn partial_text_respects_char_boundaries() {
    let (mut ctl, _lock) = opened(script(vec![line("día", 0, 10, true)]));
    ctl.advance(20);
    assert_eq!(ctl.line_text(0), "dí");
}

#[test]
fn reopening_mid_drag_resets_the_gesture() {
    let (mut ctl, _lock) = opened(two_line_script());
    ctl.gesture_start(0.0);
    ctl.gesture_move(80.0);
    assert_eq!(ctl.gesture().offset_px(), 80.0);

    ctl.open(500);
    assert_eq!(ctl.gesture().offset_px(), 0.0);
    assert!(!ctl.gesture().is_dragging());
}

#[test]
fn sequence_does_not_run_while_closed() {
    let (mut ctl, lock) = controller(two_line_script());
    ctl.start_sequence(0);

    assert!(ctl.advance(10_000).is_empty());
    assert_eq!(ctl.shown_chars(0), 0);
    assert!(!ctl.is_complete());
    assert_eq!(ctl.lifecycle(), OverlayLifecycle::Closed);
    assert!(!lock.held.get());
}

#[test]
fn every_visible_change_is_reported() {
    let (mut ctl, _lock) = opened(script(vec![line("ab", 5, 10, true)]));

    assert!(ctl.advance(4).is_empty());
    assert_eq!(ctl.advance(5), [PoemEvent::LineStarted(0)]);
    assert!(ctl.advance(14).is_empty());
    assert_eq!(ctl.advance(15), [PoemEvent::CharRevealed(0)]);
    assert_eq!(
        ctl.advance(25),
        [
            PoemEvent::CharRevealed(0),
            PoemEvent::LineFinished(0),
            PoemEvent::SequenceComplete,
        ]
    );
}

#[test]
fn idle_frames_after_the_reveal_report_nothing() {
    let (mut ctl, _lock) = opened(two_line_script());
    let events = ctl.advance(2_000);
    assert_eq!(count(&events, PoemEvent::ParticlesExpired), 1);

    for now in (2_016..2_200).step_by(16) {
        assert!(ctl.advance(now).is_empty());
    }
    assert_eq!(ctl.lifecycle(), OverlayLifecycle::Open);
}
