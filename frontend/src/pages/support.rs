use yew::prelude::*;

use crate::components::faq::FaqEntry;
use crate::config::CONTACT_EMAIL;
use crate::pages::privacy::BackHeader;

static SUPPORT_FAQS: [FaqEntry; 5] = [
    FaqEntry {
        question: "How do I start a dead hang session?",
        answer: "Open the app on your Apple Watch, then tap the Start button. The timer will begin when you're ready. Tap again to stop when you release the bar.",
    },
    FaqEntry {
        question: "Is my data backed up?",
        answer: "Your data is stored locally on your device and included in your iCloud backup if you have iCloud Backup enabled for your iPhone.",
    },
    FaqEntry {
        question: "Can I sync between devices?",
        answer: "Currently, data is stored locally on each device. Your iPhone and Apple Watch share data through the Watch connectivity framework.",
    },
    FaqEntry {
        question: "How do I delete my data?",
        answer: "You can clear all data from the Settings screen within the app, or by uninstalling and reinstalling the app.",
    },
    FaqEntry {
        question: "I denied Health data access. How do I fix it?",
        answer: "If you declined to share Health data when first prompted, the app won't ask again. The only way to fix this is to uninstall the app and reinstall it. On the fresh install, you'll get the Health permissions prompt again.",
    },
];

#[function_component(Support)]
pub fn support() -> Html {
    html! {
        <div class="legal-page">
            <BackHeader />
            <main class="legal-content">
                <h1>{"Support"}</h1>
                <p class="muted">{"How can we help?"}</p>

                <a href={format!("mailto:{}", CONTACT_EMAIL)} class="contact-card surface">
                    <span class="contact-icon">{"✉️"}</span>
                    <div>
                        <h3>{"Email Support"}</h3>
                        <p class="muted small">{CONTACT_EMAIL}</p>
                    </div>
                </a>

                <h2>{"Frequently Asked Questions"}</h2>
                <div class="surface support-faqs">
                    { for SUPPORT_FAQS.iter().map(|faq| html! {
                        <div key={faq.question}>
                            <h3>{faq.question}</h3>
                            <p class="muted">{faq.answer}</p>
                        </div>
                    }) }
                </div>
            </main>
        </div>
    }
}
