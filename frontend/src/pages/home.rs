use std::rc::Rc;

use chrono::Datelike;
use log::error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq::{FaqEntry, FaqList};
use crate::components::poem_modal::PoemModal;
use crate::config;
use crate::Route;

struct Zone {
    num: u8,
    name: &'static str,
    color: &'static str,
}

static ZONES: [Zone; 7] = [
    Zone { num: 1, name: "Grip", color: "var(--zone-1-grip)" },
    Zone { num: 2, name: "Hold", color: "var(--zone-2-hold)" },
    Zone { num: 3, name: "Hang", color: "var(--zone-3-hang)" },
    Zone { num: 4, name: "Flow", color: "var(--zone-4-flow)" },
    Zone { num: 5, name: "Forge", color: "var(--zone-5-forge)" },
    Zone { num: 6, name: "Fire", color: "var(--zone-6-fire)" },
    Zone { num: 7, name: "Legend", color: "var(--zone-7-legend)" },
];

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static FEATURES: [Feature; 6] = [
    Feature {
        icon: "⌚",
        title: "Just Grab and Hang",
        description: "Watch detects when you're hanging and starts automatically. No buttons to press while your hands are busy.",
    },
    Feature {
        icon: "🫀",
        title: "Haptic Coaching",
        description: "Four modes to keep you going: Pulse, Breathing, Transitions Only, and PR Coach that builds as you approach your record.",
    },
    Feature {
        icon: "🧱",
        title: "Build Your Wall",
        description: "Every minute is a brick. Watch your progress stack up day by day, week by week.",
    },
    Feature {
        icon: "🏆",
        title: "PR Celebration",
        description: "Tension builds as you approach your record. Beat it and feel the victory. Small wins matter.",
    },
    Feature {
        icon: "📱",
        title: "No Watch? No Problem",
        description: "Manual timer on iPhone with Dynamic Island support. The Watch is magic, but not required.",
    },
    Feature {
        icon: "🔒",
        title: "Your Data Stays Yours",
        description: "No cloud. No account. No tracking. Everything lives on your device. Privacy by design.",
    },
];

static FAQS: [FaqEntry; 6] = [
    FaqEntry {
        question: "What is a dead hang?",
        answer: "A dead hang is exactly what it sounds like: hang from a bar with your arms fully extended, feet off the ground, and let gravity do its work. It decompresses your spine, strengthens your grip, and improves shoulder mobility. Simple to understand. Harder to hold.",
    },
    FaqEntry {
        question: "How does automatic detection work?",
        answer: "Your Apple Watch has accelerometers and gyroscopes. When you raise your arms overhead and hold still (like hanging from a bar), the app detects this position and starts timing. When you let go, it stops automatically. No buttons to press while your hands are busy.",
    },
    FaqEntry {
        question: "Do I need an Apple Watch?",
        answer: "No. The iPhone app has a manual timer mode. But the Watch is where the magic happens. Hands-free detection means you just grab the bar and go.",
    },
    FaqEntry {
        question: "What's a good goal to start?",
        answer: "Start with 5 minutes per week (about 43 seconds per day). Even 30 seconds is an incredible achievement. The point is consistency. Hang for 31 seconds tomorrow.",
    },
    FaqEntry {
        question: "Is it really free?",
        answer: "Yes. No ads, no subscriptions, no premium features. I built this for myself and my family. Now it's yours.",
    },
    FaqEntry {
        question: "What about my data?",
        answer: "Your data stays on your device. No cloud sync. No account required. No tracking or analytics. Privacy by design.",
    },
];

const ZONE_GRADIENT: &str = "background: linear-gradient(90deg, var(--zone-1-grip), var(--zone-2-hold), var(--zone-3-hang), var(--zone-4-flow), var(--zone-5-forge), var(--zone-6-fire), var(--zone-7-legend));";

fn apple_logo() -> Html {
    html! {
        <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor">
            <path d="M18.71 19.5C17.88 20.74 17 21.95 15.66 21.97C14.32 22 13.89 21.18 12.37 21.18C10.84 21.18 10.37 21.95 9.1 22C7.79 22.05 6.8 20.68 5.96 19.47C4.25 17 2.94 12.45 4.7 9.39C5.57 7.87 7.13 6.91 8.82 6.88C10.1 6.86 11.32 7.75 12.11 7.75C12.89 7.75 14.37 6.68 15.92 6.84C16.57 6.87 18.39 7.1 19.56 8.82C19.47 8.88 17.39 10.1 17.41 12.63C17.44 15.65 20.06 16.66 20.09 16.67C20.06 16.74 19.67 18.11 18.71 19.5ZM13 3.5C13.73 2.67 14.94 2.04 15.94 2C16.07 3.17 15.6 4.35 14.9 5.19C14.21 6.04 13.07 6.7 11.95 6.61C11.8 5.46 12.36 4.26 13 3.5Z" />
        </svg>
    }
}

#[function_component(ZoneBar)]
fn zone_bar() -> Html {
    html! {
        <div class="zone-bar">
            { for ZONES.iter().map(|zone| html! {
                <div key={zone.num.to_string()} class="segment" style={format!("background: {};", zone.color)} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TruthCardProps {
    title: AttrValue,
    body: AttrValue,
    accent: AttrValue,
    from: AttrValue,
    to: AttrValue,
}

#[function_component(TruthCard)]
fn truth_card(props: &TruthCardProps) -> Html {
    let border = format!(
        "border-top: 3px solid transparent; border-image: linear-gradient(90deg, {}, {}) 1;",
        props.from, props.to
    );
    html! {
        <div class="surface truth-card" style={border}>
            <h3 style={format!("color: {};", props.accent)}>{&props.title}</h3>
            <p class="muted">{&props.body}</p>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let poem_requests = use_state(|| 0u32);
    let script = use_memo(
        |_| match config::poem_script() {
            Ok(script) => Some(Rc::new(script)),
            Err(e) => {
                error!("Poem easter egg disabled: {}", e);
                None
            }
        },
        (),
    );

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let open_poem = {
        let poem_requests = poem_requests.clone();
        Callback::from(move |_: MouseEvent| poem_requests.set(*poem_requests + 1))
    };

    let year = chrono::Local::now().year();

    html! {
        <div class="landing">
            <section class="hero">
                <h1>
                    {"A little "}<span class="gold">{"hang"}</span>{" goes a long way."}
                </h1>
                <p class="hero-sub muted">{"A minute a day keeps the back pain away."}</p>
                <span class="btn-primary">{apple_logo()}{"Coming Soon"}</span>
                <p class="hero-note faint">{"iPhone & Apple Watch"}</p>
                <div class="mockups">
                    <div class="phone-mockup">{"[iPhone Screenshot]"}</div>
                    <div class="watch-mockup">{"[Watch Screenshot]"}</div>
                </div>
            </section>

            <section class="section narrow-center">
                <p class="section-label">{"The Truth"}</p>
                <h2>{"It looks simple. Hang from a bar. But try holding on for 60 seconds. Most people can't."}</h2>
                <div class="grid-3">
                    <TruthCard
                        title="Harder than you think"
                        body="Your grip gives out. Your shoulders burn. Your mind tells you to let go. That's the point."
                        accent="var(--zone-3-hang)"
                        from="var(--zone-1-grip)"
                        to="var(--zone-3-hang)"
                    />
                    <TruthCard
                        title="Worth every second"
                        body="Decompress your spine. Build grip strength. Improve shoulder mobility. In one simple movement."
                        accent="var(--zone-4-flow)"
                        from="var(--zone-3-hang)"
                        to="var(--zone-5-forge)"
                    />
                    <TruthCard
                        title="Rewarding to track"
                        body="Watch your time grow. Beat your average. Chase your PR. Small wins compound into real change."
                        accent="var(--zone-7-legend)"
                        from="var(--zone-5-forge)"
                        to="var(--zone-7-legend)"
                    />
                </div>
            </section>

            <section class="section story">
                <div>
                    <h2>{"Why this app exists"}</h2>
                    <p class="muted">
                        {"Me on an '86 Honda Spree riding to class vs. a Prius who doesn't see me. The Prius won. I walked away thinking I was fine. My back waited until I had three kids climbing all over me to prove me wrong."}
                    </p>
                    <p class="muted">
                        {"The days I hang for a minute or more, "}
                        <span class="gold">{"I feel better. I move better. I can be there for them."}</span>
                    </p>
                    <p class="muted">{"This app is how I stay accountable. Now it's yours too."}</p>
                </div>
                <div class="photo-placeholder">
                    <span class="faint">{"[Photo placeholder]"}</span>
                    <div class="zone-gradient" style={ZONE_GRADIENT}></div>
                </div>
            </section>

            <section class="section narrow-center">
                <h2>{"Progress you can feel"}</h2>
                <p class="muted lead">
                    {"One hang won't fix your back. But one hang a day, stacked over weeks? That's compound interest. And healthy habits have a way of spreading. One good choice makes the next one easier. Seven zones from first grip to legend status. Watch the streak build."}
                </p>
                <div class="zones">
                    { for ZONES.iter().map(|zone| html! {
                        <div key={zone.num.to_string()} class="zone-block" style={format!("background: {};", zone.color)}>
                            <span class="zone-num">{zone.num}</span>
                            <span class="zone-name">{zone.name}</span>
                        </div>
                    }) }
                </div>
                <p class="faint small">
                    <span class="gold">{"Gold is earned."}</span>
                    {" Reach Zone 4 and you've hit the sweet spot."}
                </p>
            </section>

            <section id="features" class="section narrow-center">
                <p class="section-label">{"Built for Busy People"}</p>
                <h2>{"No gym. No equipment. Just you."}</h2>
                <div class="grid-3">
                    { for FEATURES.iter().map(|feature| html! {
                        <div key={feature.title} class="feature-card">
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p class="muted small">{feature.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <div class="challenge surface">
                    <h2>{"Can't find something to hang on?"}</h2>
                    <p class="muted lead">
                        {"That's a heck of an excuse, but I'm not buying it. A tree. A basketball hoop. A door frame. A ledge. A playground. There's always something. Your health is your wealth."}
                    </p>
                    <div class="milestones">
                        <div>
                            <div class="milestone" style="color: var(--zone-3-hang);">{"30s"}</div>
                            <div class="faint small">{"is incredible"}</div>
                        </div>
                        <div>
                            <div class="milestone" style="color: var(--zone-5-forge);">{"60s"}</div>
                            <div class="faint small">{"is a real challenge"}</div>
                        </div>
                        <div>
                            <div class="milestone" style="color: var(--zone-7-legend);">{"2min"}</div>
                            <div class="faint small">{"you're a legend"}</div>
                        </div>
                    </div>
                    <div class="zone-gradient" style={ZONE_GRADIENT}></div>
                </div>
            </section>

            <section id="faq" class="section faq-section">
                <h2>{"Frequently Asked"}</h2>
                <FaqList entries={&FAQS[..]} />
            </section>

            <section class="section final-cta">
                <h2>{"Ready to hang?"}</h2>
                <p class="muted lead">{"Decompress your spine. Decompress your life."}</p>
                <span class="btn-primary">{apple_logo()}{"Coming Soon"}</span>
            </section>

            <footer class="footer">
                <ZoneBar />
                <div class="footer-row">
                    <div>
                        <p class="faint small">{format!("© {} {}", year, config::SITE_NAME)}</p>
                        <p class="muted small italic">{"Decompress your spine. Decompress your life."}</p>
                    </div>
                    <div class="footer-links">
                        <Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy"}</Link<Route>>
                        <Link<Route> to={Route::Support} classes="footer-link">{"Support"}</Link<Route>>
                    </div>
                </div>
                if let Some(script) = (*script).clone() {
                    <>
                    <div class="easter-egg">
                        <button onclick={open_poem} class="software-seuss-wrapper" aria-label="Reveal poem" type="button">
                            <div class="sparkles">
                                { for (0..7).map(|i| html! { <div key={i.to_string()} class="sparkle" /> }) }
                            </div>
                            <img src="/softwareseus.svg" alt="Software Seuss" width="100" height="77" class="software-seuss" />
                        </button>
                    </div>
                    <PoemModal {script} open_requests={*poem_requests} />
                    </>
                }
            </footer>
        </div>
    }
}
