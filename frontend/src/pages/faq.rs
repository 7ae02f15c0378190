use leptos::*;

use crate::components::accordion::Accordion;
use crate::components::empty_state::EmptyState;
use crate::content;

/// FAQ page: section title plus the accordion, or an empty state when the
/// catalog has no entries.
#[component]
pub fn FaqPage() -> impl IntoView {
    let items = content::faq_items();

    view! {
        <div class="faq-page">
            <h2 class="faq-title">"Frequently Asked Questions"</h2>
            {if items.is_empty() {
                view! {
                    <EmptyState icon="?">"No questions yet."</EmptyState>
                }.into_view()
            } else {
                view! { <Accordion items=items /> }.into_view()
            }}
        </div>
    }
}
