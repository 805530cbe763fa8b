use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config::FRAME_INTERVAL_MS;
use crate::poem::{PoemController, PoemEvent, PoemScript, ScrollLock};

/// Locks scrolling by hiding overflow on `<body>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollLock;

impl BodyScrollLock {
    fn set_overflow(value: &str) {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        match body {
            Some(body) => {
                if let Err(e) = body.style().set_property("overflow", value) {
                    warn!("Failed to set body overflow: {:?}", e);
                }
            }
            None => warn!("No document body to toggle scrolling on"),
        }
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        Self::set_overflow("hidden");
    }

    fn unlock(&self) {
        Self::set_overflow("");
    }
}

/// Monotonic page clock. Falls back to wall time where the Performance API
/// is missing.
pub fn now_ms() -> u64 {
    let performance_now = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now());
    clock_ms(performance_now, || chrono::Utc::now().timestamp_millis())
}

fn clock_ms(performance_now: Option<f64>, wall_ms: impl FnOnce() -> i64) -> u64 {
    match performance_now {
        Some(ms) if ms.is_finite() && ms >= 0.0 => ms as u64,
        Some(_) => 0,
        None => wall_ms().max(0) as u64,
    }
}

fn rng_seed() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

fn first_touch_y(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|t| f64::from(t.client_y()))
}

#[derive(Properties, PartialEq)]
pub struct PoemModalProps {
    pub script: Rc<PoemScript>,
    /// Bumped by the page every time the easter egg is clicked.
    pub open_requests: u32,
}

#[function_component(PoemModal)]
pub fn poem_modal(props: &PoemModalProps) -> Html {
    let controller = {
        let script = props.script.clone();
        use_mut_ref(move || {
            PoemController::new(
                (*script).clone(),
                BodyScrollLock,
                SmallRng::seed_from_u64(rng_seed()),
            )
        })
    };
    let redraw = use_force_update();

    {
        let controller = controller.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |requests: &u32| {
                if *requests > 0 {
                    controller.borrow_mut().open(now_ms());
                    debug!("Poem opened (request #{})", requests);
                    redraw.force_update();
                }
                || ()
            },
            props.open_requests,
        );
    }

    let mounted = controller.borrow().lifecycle().is_mounted();

    // The frame driver only exists while the overlay is on screen.
    {
        let controller = controller.clone();
        let redraw = redraw.clone();
        use_effect_with_deps(
            move |mounted: &bool| {
                let driver = mounted.then(|| {
                    Interval::new(FRAME_INTERVAL_MS, move || {
                        let events = controller.borrow_mut().advance(now_ms());
                        if events.is_empty() {
                            return;
                        }
                        for event in &events {
                            match event {
                                PoemEvent::SequenceComplete => debug!("Poem reveal complete"),
                                PoemEvent::Closed => debug!("Poem overlay closed"),
                                _ => {}
                            }
                        }
                        redraw.force_update();
                    })
                });
                move || drop(driver)
            },
            mounted,
        );
    }

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| move || controller.borrow_mut().dispose(),
            (),
        );
    }

    let close = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if controller.borrow_mut().dismiss(now_ms()) {
                redraw.force_update();
            }
        })
    };

    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let touch_start = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(y) = first_touch_y(&e) {
                controller.borrow_mut().gesture_start(y);
                redraw.force_update();
            }
        })
    };

    let touch_move = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(y) = first_touch_y(&e) {
                controller.borrow_mut().gesture_move(y);
                redraw.force_update();
            }
        })
    };

    let touch_end = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: TouchEvent| {
            controller.borrow_mut().gesture_end(now_ms());
            redraw.force_update();
        })
    };

    if !mounted {
        return html! {};
    }

    let ctl = controller.borrow();
    let lifecycle = ctl.lifecycle();
    let gesture = ctl.gesture();
    let script = ctl.script();

    let mut line_id = 0;
    let mut stanzas = Vec::with_capacity(script.stanzas.len());
    for (n, stanza) in script.stanzas.iter().enumerate() {
        let mut lines = Vec::with_capacity(stanza.lines.len());
        for _ in &stanza.lines {
            lines.push(html! {
                <p class="poem-line" style="min-height: 1.6em;">
                    {ctl.line_text(line_id)}
                    if ctl.is_typing(line_id) {
                        <span class="typewriter-cursor">{"|"}</span>
                    }
                </p>
            });
            line_id += 1;
        }
        stanzas.push(html! {
            <div class={classes!("poem-stanza", format!("poem-stanza-{}", n + 1))}>
                { for lines }
            </div>
        });
    }

    let card_style = if gesture.is_dragging() {
        format!("transform: {}; transition: none;", gesture.card_transform())
    } else {
        format!("transform: {};", gesture.card_transform())
    };

    let view = html! {
        <div
            class={classes!("poem-overlay", lifecycle.is_shown().then(|| "poem-overlay-visible"))}
            onclick={close.clone()}
            style={format!("opacity: {};", gesture.overlay_opacity())}
        >
            { for ctl.particles().iter().map(|p| html! {
                <div
                    key={p.id.to_string()}
                    class="burst-particle"
                    style={format!("left: {:.2}%; top: {:.2}%; background-color: {};", p.x_pct, p.y_pct, p.color)}
                />
            }) }

            <div
                class={classes!(
                    "poem-container",
                    lifecycle.is_shown().then(|| "poem-container-visible"),
                    ctl.is_complete().then(|| "poem-complete"),
                )}
                onclick={swallow_click}
                ontouchstart={touch_start}
                ontouchmove={touch_move}
                ontouchend={touch_end}
                style={card_style}
            >
                <div class="swipe-indicator"></div>
                <button onclick={close} class="poem-close" aria-label="Close poem">
                    <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M18 6L6 18M6 6l12 12" />
                    </svg>
                </button>
                <img src="/family.svg" alt="Dad hanging with kids" width="120" height="90" class="poem-family" />

                <div class="poem-content">
                    <p class="poem-title">{&script.title}</p>
                    { for stanzas }
                    <p class={classes!("poem-tagline", ctl.is_complete().then(|| "poem-tagline-visible"))}>
                        {&script.tagline}
                    </p>
                </div>

                <p class="poem-hint">{"swipe down or tap outside to close"}</p>
            </div>

            <style>
                {r#"
                .poem-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(6, 10, 18, 0);
                    backdrop-filter: blur(0px);
                    transition: background 0.3s ease, backdrop-filter 0.3s ease;
                }
                .poem-overlay-visible {
                    background: rgba(6, 10, 18, 0.85);
                    backdrop-filter: blur(8px);
                }
                .poem-container {
                    position: relative;
                    width: min(92vw, 520px);
                    max-height: 88vh;
                    overflow-y: auto;
                    padding: 2.5rem 2rem 1.5rem;
                    border-radius: 24px;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    opacity: 0;
                    transform: translateY(40px) scale(0.95);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .poem-container-visible {
                    opacity: 1;
                }
                .poem-complete {
                    box-shadow: 0 0 60px rgba(218, 185, 130, 0.25);
                }
                .swipe-indicator {
                    width: 40px;
                    height: 4px;
                    margin: -1.25rem auto 1.25rem;
                    border-radius: 2px;
                    background: var(--border);
                }
                .poem-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: var(--text-tertiary);
                    cursor: pointer;
                }
                .poem-family {
                    display: block;
                    margin: 0 auto 1rem;
                    opacity: 0.7;
                }
                .poem-title {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    text-align: center;
                    margin-bottom: 1rem;
                    color: var(--text-tertiary);
                }
                .poem-stanza {
                    margin-bottom: 1.25rem;
                }
                .poem-line {
                    font-style: italic;
                    line-height: 1.6;
                    color: var(--text-secondary);
                }
                .typewriter-cursor {
                    color: var(--gold);
                    animation: blink 0.8s step-end infinite;
                }
                .poem-tagline {
                    text-align: center;
                    font-weight: 600;
                    color: var(--gold);
                    opacity: 0;
                    transform: translateY(8px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .poem-tagline-visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .poem-hint {
                    margin-top: 1.5rem;
                    text-align: center;
                    font-size: 0.75rem;
                    color: var(--text-tertiary);
                }
                .burst-particle {
                    position: absolute;
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    pointer-events: none;
                    animation: burst 1.5s ease-out forwards;
                }
                @keyframes burst {
                    from { transform: scale(1); opacity: 1; }
                    to { transform: scale(0) translateY(-80px); opacity: 0; }
                }
                @keyframes blink {
                    50% { opacity: 0; }
                }
                "#}
            </style>
        </div>
    };
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_prefers_the_performance_timer() {
        assert_eq!(clock_ms(Some(1_234.9), || 99_999), 1_234);
    }

    #[test]
    fn clock_falls_back_to_wall_time() {
        assert_eq!(clock_ms(None, || 42), 42);
        assert_eq!(clock_ms(None, || -5), 0);
    }

    #[test]
    fn clock_clamps_bogus_timer_values() {
        assert_eq!(clock_ms(Some(f64::NAN), || 42), 0);
        assert_eq!(clock_ms(Some(-1.0), || 42), 0);
    }
}
