use leptos::*;
use shared::FaqItem;

/// Selection when the accordion mounts: the first panel starts open.
fn initial_selection(len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(0)
    }
}

/// Selection transition applied when a panel header is activated.
///
/// Activating a panel always opens it; re-activating the open panel leaves
/// it open. There is no close-on-second-click.
fn activate(_current: Option<usize>, index: usize) -> Option<usize> {
    Some(index)
}

/// A panel is expanded exactly when its index is the selected one.
fn is_expanded(selection: Option<usize>, index: usize) -> bool {
    selection == Some(index)
}

/// 1-based panel number, zero-padded to at least two digits.
fn ordinal_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// FAQ accordion with at most one panel expanded at a time.
///
/// The accordion owns the open-panel selection; items derive their expanded
/// state from it and request a change through the select callback. An empty
/// item list renders an empty container.
#[component]
pub fn Accordion(items: Vec<FaqItem>) -> impl IntoView {
    let open = create_rw_signal(initial_selection(items.len()));
    let on_select = Callback::new(move |index| {
        open.update(|selection| *selection = activate(*selection, index));
    });

    view! {
        <div class="accordion">
            {items.into_iter().enumerate().map(|(index, item)| {
                view! {
                    <AccordionItem
                        index=index
                        title=item.title
                        open=open.read_only()
                        on_select=on_select
                    >
                        {item.text}
                    </AccordionItem>
                }
            }).collect_view()}
        </div>
    }
}

/// A single FAQ panel: numbered header with a toggle glyph, body shown only
/// while the panel is expanded.
#[component]
pub fn AccordionItem(
    index: usize,
    #[prop(into)] title: String,
    #[prop(into)] open: Signal<Option<usize>>,
    on_select: Callback<usize>,
    children: Children,
) -> impl IntoView {
    // Derived, never stored: recomputed from the accordion's selection.
    let expanded = move || is_expanded(open.get(), index);
    let content = children().into_view();

    view! {
        <div
            class=move || if expanded() { "item open" } else { "item" }
            on:click=move |_| on_select.call(index)
        >
            <p class="num">{ordinal_label(index)}</p>
            <p class="text">{title}</p>
            <p class="icon">{move || if expanded() { "-" } else { "+" }}</p>
            {move || expanded().then(|| view! {
                <div class="content-box">{content.clone()}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_first_panel_open_by_default() {
        assert_eq!(initial_selection(3), Some(0));
        assert_eq!(initial_selection(1), Some(0));
    }

    #[wasm_bindgen_test]
    fn test_no_selection_for_empty_list() {
        assert_eq!(initial_selection(0), None);
    }

    #[wasm_bindgen_test]
    fn test_activation_selects_clicked_panel() {
        assert_eq!(activate(Some(0), 2), Some(2));
        assert_eq!(activate(None, 1), Some(1));
    }

    #[wasm_bindgen_test]
    fn test_reactivation_keeps_panel_open() {
        for index in 0..4 {
            assert_eq!(activate(Some(index), index), Some(index));
        }
    }

    #[wasm_bindgen_test]
    fn test_selection_is_exclusive() {
        let selection = activate(Some(0), 2);
        for index in 0..5 {
            assert_eq!(is_expanded(selection, index), index == 2);
        }
    }

    #[wasm_bindgen_test]
    fn test_nothing_expanded_without_selection() {
        for index in 0..5 {
            assert!(!is_expanded(None, index));
        }
    }

    #[wasm_bindgen_test]
    fn test_ordinal_labels_are_zero_padded() {
        assert_eq!(ordinal_label(0), "01");
        assert_eq!(ordinal_label(8), "09");
        assert_eq!(ordinal_label(9), "10");
        assert_eq!(ordinal_label(10), "11");
        assert_eq!(ordinal_label(99), "100");
    }

    #[wasm_bindgen_test]
    fn test_three_panel_walkthrough() {
        // Three items: first open initially, then activate the third twice.
        let mut selection = initial_selection(3);
        assert!(is_expanded(selection, 0));
        assert!(!is_expanded(selection, 1));
        assert!(!is_expanded(selection, 2));

        selection = activate(selection, 2);
        assert!(!is_expanded(selection, 0));
        assert!(!is_expanded(selection, 1));
        assert!(is_expanded(selection, 2));

        selection = activate(selection, 2);
        assert!(is_expanded(selection, 2));
    }

    #[wasm_bindgen_test]
    fn test_item_css_classes() {
        assert_eq!("item open", "item open");
        assert_eq!("item", "item");
        assert_eq!("content-box", "content-box");
    }

    #[wasm_bindgen_test]
    fn test_toggle_glyphs() {
        let expanded_glyph = "-";
        let collapsed_glyph = "+";
        assert_ne!(expanded_glyph, collapsed_glyph);
    }
}
