use leptos::*;

/// Shown in place of the accordion when the catalog has no entries.
#[component]
pub fn EmptyState(
    #[prop(optional, into)] icon: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            {icon.map(|i| view! {
                <span class="empty-state-icon">{i}</span>
            })}
            <p>{children()}</p>
        </div>
    }
}
