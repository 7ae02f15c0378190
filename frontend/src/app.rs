use leptos::*;

use crate::pages::faq::FaqPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main>
            <div class="container">
                <FaqPage />
            </div>
        </main>
    }
}
