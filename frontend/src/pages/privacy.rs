use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{CONTACT_EMAIL, SITE_NAME};
use crate::Route;

/// Back-to-home header shared by the static content pages.
#[function_component(BackHeader)]
pub fn back_header() -> Html {
    html! {
        <header class="back-header">
            <Link<Route> to={Route::Home} classes="back-link">
                <svg class="back-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
                </svg>
                <span>{SITE_NAME}</span>
            </Link<Route>>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct PolicySectionProps {
    title: AttrValue,
    children: Children,
}

#[function_component(PolicySection)]
fn policy_section(props: &PolicySectionProps) -> Html {
    html! {
        <section>
            <h2>{&props.title}</h2>
            <p>{ for props.children.iter() }</p>
        </section>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <BackHeader />
            <main class="legal-content">
                <h1>{"Privacy Policy"}</h1>
                <p>
                    {"Hang Habit is designed with your privacy in mind. We believe your health and fitness data belongs to you alone."}
                </p>

                <PolicySection title="Data Storage">
                    {"All your data is stored locally on your device. Your hang session data, personal records, and settings never leave your iPhone or Apple Watch unless you explicitly choose to back them up via iCloud."}
                </PolicySection>

                <PolicySection title="No Analytics or Tracking">
                    {"Hang Habit does not integrate with any third-party analytics, advertising, or tracking services. We don't collect crash reports, usage statistics, or any other data about how you use the app."}
                </PolicySection>

                <PolicySection title="HealthKit Integration">
                    {"If you grant permission, Hang Habit can save your sessions to Apple Health as workouts. This data is handled entirely by Apple's HealthKit framework and is subject to Apple's privacy policies. We never access or store this data on any external servers."}
                </PolicySection>

                <PolicySection title="No Account Required">
                    {"Hang Habit does not require you to create an account or provide any personal information to use the app."}
                </PolicySection>

                <PolicySection title="Contact">
                    {"If you have any questions about this privacy policy, please contact us at "}
                    <a href={format!("mailto:{}", CONTACT_EMAIL)} class="accent-link">{CONTACT_EMAIL}</a>
                </PolicySection>

                <p class="updated">{"Last updated: December 2024"}</p>
            </main>
        </div>
    }
}
