use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod poem;
mod components {
    pub mod faq;
    pub mod poem_modal;
}
mod pages {
    pub mod home;
    pub mod privacy;
    pub mod support;
}

use pages::{
    home::Home,
    privacy::{BackHeader, PrivacyPolicy},
    support::Support,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/support")]
    Support,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! {
                <>
                    <Nav />
                    <Home />
                </>
            }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Support => {
            info!("Rendering Support page");
            html! { <Support /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="legal-page">
                    <BackHeader />
                    <main class="legal-content">
                        <h1>{"Nothing hanging here"}</h1>
                        <p class="muted">{"That page doesn't exist."}</p>
                    </main>
                </div>
            }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_callback = Closure::<dyn FnMut()>::new(move || {
                    let scroll_y = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 40.0);
                });
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    warn!("Failed to attach nav scroll listener");
                }
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    html! {
        <nav class={classes!("nav", (*is_scrolled).then(|| "scrolled"))}>
            <Link<Route> to={Route::Home} classes="nav-logo">
                {config::SITE_NAME}
            </Link<Route>>
            <div class="nav-links">
                <a href="#features">{"Features"}</a>
                <a href="#faq">{"FAQ"}</a>
                <span class="btn-primary-sm">{"Coming Soon"}</span>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
            <style>{GLOBAL_STYLES}</style>
        </BrowserRouter>
    }
}

const GLOBAL_STYLES: &str = r#"
:root {
    --bg: #0c1220;
    --surface: #141c2e;
    --border: rgba(255, 255, 255, 0.08);
    --text-primary: #ffffff;
    --text-secondary: rgba(255, 255, 255, 0.7);
    --text-tertiary: rgba(255, 255, 255, 0.45);
    --text-muted: rgba(255, 255, 255, 0.35);
    --gold: #dab982;
    --accent-teal: #4fd1c5;
    --zone-1-grip: #5b6b8c;
    --zone-2-hold: #4f86c6;
    --zone-3-hang: #3fb6a8;
    --zone-4-flow: #dab982;
    --zone-5-forge: #e8894a;
    --zone-6-fire: #e4574a;
    --zone-7-legend: #b36ae2;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    background: var(--bg);
    color: var(--text-primary);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    -webkit-font-smoothing: antialiased;
}
a { color: inherit; text-decoration: none; }
.muted { color: var(--text-secondary); }
.faint { color: var(--text-tertiary); }
.gold { color: var(--gold); }
.small { font-size: 0.875rem; }
.italic { font-style: italic; }
.lead { font-size: 1.125rem; line-height: 1.7; max-width: 42rem; margin: 0 auto 2.5rem; }
.surface { background: var(--surface); border: 1px solid var(--border); border-radius: 20px; }

.nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1.25rem 2.5rem;
    transition: background 0.3s ease;
}
.nav.scrolled { background: rgba(12, 18, 32, 0.9); backdrop-filter: blur(12px); }
.nav-logo { font-weight: 700; font-size: 1.125rem; }
.nav-links { display: flex; gap: 1.5rem; align-items: center; font-size: 0.875rem; }
.btn-primary, .btn-primary-sm {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    border-radius: 999px;
    background: var(--gold);
    color: var(--bg);
    font-weight: 600;
    cursor: default;
}
.btn-primary { padding: 1rem 2rem; font-size: 1.125rem; }
.btn-primary-sm { padding: 0.5rem 1rem; }

.hero {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    text-align: center;
    padding: 6rem 1.5rem 0;
}
.hero h1 { font-size: clamp(2.25rem, 6vw, 4.5rem); line-height: 1.1; max-width: 56rem; margin-bottom: 1.5rem; }
.hero-sub { font-size: 1.25rem; margin-bottom: 2.5rem; }
.hero-note { margin-top: 1rem; font-size: 0.875rem; }
.mockups { display: flex; flex-wrap: wrap; gap: 1.5rem; justify-content: center; margin-top: 4rem; }
.phone-mockup, .watch-mockup {
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--surface);
    border: 1px solid var(--border);
    color: var(--text-tertiary);
}
.phone-mockup { width: 240px; height: 480px; border-radius: 40px; }
.watch-mockup { width: 160px; height: 200px; border-radius: 36px; }

.section { padding: 6rem 1.5rem; max-width: 72rem; margin: 0 auto; }
.section h2 { font-size: clamp(1.5rem, 3.5vw, 2.5rem); margin-bottom: 1.5rem; line-height: 1.3; }
.narrow-center { text-align: center; }
.section-label { color: var(--gold); text-transform: uppercase; letter-spacing: 0.15em; font-size: 0.75rem; margin-bottom: 1rem; }
.grid-3 { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.25rem; margin-top: 3rem; }
.truth-card { padding: 2rem; text-align: left; }
.truth-card h3 { margin-bottom: 0.5rem; }
.story { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 3rem; align-items: center; }
.story p { font-size: 1.125rem; line-height: 1.7; margin-bottom: 1.25rem; }
.photo-placeholder {
    position: relative;
    height: 400px;
    border-radius: 24px;
    overflow: hidden;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--surface);
    border: 1px solid var(--border);
}
.zone-gradient { position: absolute; bottom: 0; left: 0; right: 0; height: 4px; }
.zones { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; margin-bottom: 2rem; }
.zone-block {
    width: 88px;
    height: 88px;
    border-radius: 16px;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    color: #0c1220;
}
.zone-num { font-size: 1.5rem; font-weight: 700; }
.zone-name { font-size: 0.75rem; font-weight: 600; }
.feature-card { background: var(--surface); border: 1px solid var(--border); border-radius: 20px; padding: 2rem; text-align: left; }
.feature-icon { font-size: 1.875rem; margin-bottom: 1rem; }
.feature-card h3 { margin-bottom: 0.5rem; }
.challenge { position: relative; overflow: hidden; text-align: center; padding: 4rem 2rem; }
.milestones { display: flex; flex-wrap: wrap; justify-content: center; gap: 3rem; margin-top: 3rem; }
.milestone { font-size: 3rem; font-weight: 700; }
.faq-section { max-width: 48rem; }
.faq-section h2 { text-align: center; margin-bottom: 3rem; }
.faq-item { border-bottom: 1px solid var(--border); }
.faq-question {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1.5rem 0;
    background: none;
    border: none;
    color: var(--text-primary);
    font-size: 1.125rem;
    font-weight: 500;
    text-align: left;
    cursor: pointer;
}
.faq-icon { color: var(--gold); font-size: 1.5rem; transition: transform 0.3s ease; }
.faq-item.open .faq-icon { transform: rotate(45deg); }
.faq-answer { max-height: 0; overflow: hidden; color: var(--text-secondary); line-height: 1.7; transition: max-height 0.3s ease, padding 0.3s ease; }
.faq-item.open .faq-answer { max-height: 400px; padding-bottom: 1.5rem; }
.final-cta { text-align: center; padding: 8rem 1.5rem; }

.footer { max-width: 72rem; margin: 0 auto; padding: 2.5rem 1.5rem; border-top: 1px solid var(--border); }
.zone-bar { display: flex; height: 4px; border-radius: 2px; overflow: hidden; margin-bottom: 2rem; }
.zone-bar .segment { flex: 1; }
.footer-row { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 1.5rem; }
.footer-links { display: flex; gap: 1.5rem; }
.footer-link { color: var(--text-tertiary); font-size: 0.875rem; transition: color 0.2s ease; }
.footer-link:hover { color: #ffffff; }
.easter-egg { display: flex; justify-content: center; margin-top: 2.5rem; }
.software-seuss-wrapper { position: relative; background: none; border: none; cursor: pointer; }
.software-seuss { opacity: 0.6; transition: opacity 0.3s ease, transform 0.3s ease; }
.software-seuss-wrapper:hover .software-seuss { opacity: 1; transform: scale(1.05); }
.sparkles { position: absolute; inset: 0; pointer-events: none; }
.sparkle { position: absolute; width: 4px; height: 4px; border-radius: 50%; background: var(--gold); opacity: 0; }
.software-seuss-wrapper:hover .sparkle { animation: sparkle 1.2s ease-in-out infinite; }
.sparkle:nth-child(1) { top: 10%; left: 20%; }
.sparkle:nth-child(2) { top: 20%; left: 80%; animation-delay: 0.2s; }
.sparkle:nth-child(3) { top: 60%; left: 10%; animation-delay: 0.4s; }
.sparkle:nth-child(4) { top: 80%; left: 70%; animation-delay: 0.6s; }
.sparkle:nth-child(5) { top: 40%; left: 95%; animation-delay: 0.8s; }
.sparkle:nth-child(6) { top: 0%; left: 50%; animation-delay: 1.0s; }
.sparkle:nth-child(7) { top: 90%; left: 35%; animation-delay: 0.3s; }
@keyframes sparkle {
    0%, 100% { opacity: 0; transform: scale(0.5); }
    50% { opacity: 1; transform: scale(1.4); }
}

.legal-page { min-height: 100vh; }
.back-header { padding: 2rem 1.5rem 1rem; }
.back-link { display: inline-flex; align-items: center; gap: 0.5rem; color: var(--text-secondary); font-size: 0.875rem; font-weight: 500; }
.back-link:hover { color: #ffffff; }
.back-icon { width: 1rem; height: 1rem; }
.legal-content { max-width: 42rem; padding: 0 1.5rem 4rem; color: var(--text-secondary); line-height: 1.7; }
.legal-content h1 { color: var(--text-primary); font-size: 2rem; margin-bottom: 1.5rem; }
.legal-content h2 { color: var(--text-primary); font-size: 1.25rem; margin: 2rem 0 0.75rem; }
.legal-content h3 { color: var(--text-primary); font-size: 1.1rem; margin-bottom: 0.5rem; }
.legal-content section { margin-bottom: 1.5rem; }
.legal-content .updated { color: var(--text-muted); font-size: 0.875rem; padding-top: 1rem; }
.accent-link { color: var(--accent-teal); }
.accent-link:hover { text-decoration: underline; }
.contact-card { display: flex; align-items: center; gap: 1rem; padding: 1.25rem; margin: 2rem 0 3rem; }
.contact-card:hover { border-color: rgba(218, 185, 130, 0.3); }
.contact-icon { font-size: 1.875rem; }
.support-faqs { padding: 2rem; display: flex; flex-direction: column; gap: 2rem; }
"#;

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
