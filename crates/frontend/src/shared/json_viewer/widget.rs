use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;
use contracts::shared::json_display::{entries, scalar_text};
use leptos::prelude::*;
use serde_json::Value;

/// Labelled tree view of an untyped service payload
#[component]
pub fn JsonTree(
    /// Payload to display
    value: Value,
    /// Heading above the tree
    #[prop(optional, into)]
    title: Option<String>,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let raw = serde_json::to_string_pretty(&value).unwrap_or_default();

    let handle_copy = move |_| {
        copy_to_clipboard_with_callback(&raw, move || {
            set_copied.set(true);
            // reset after 2 seconds
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(2000).await;
                let _ = set_copied.try_set(false);
            });
        });
    };

    view! {
        <div class="json-tree">
            <div class="json-tree__header">
                <span class="json-tree__title">{title.unwrap_or_else(|| "Result".to_string())}</span>
                <button class="button button--ghost button--small" on:click=handle_copy>
                    {icon("copy")}
                    {move || if copied.get() { "Copied" } else { "Copy JSON" }}
                </button>
            </div>
            {render_value(&value)}
        </div>
    }
}

fn render_value(value: &Value) -> AnyView {
    if let Some(text) = scalar_text(value) {
        return view! { <span class="json-tree__value">{text}</span> }.into_any();
    }

    let rows = entries(value);
    if rows.is_empty() {
        return view! { <span class="json-tree__value json-tree__value--empty">"(empty)"</span> }
            .into_any();
    }

    view! {
        <ul class="json-tree__list">
            {rows
                .into_iter()
                .map(|(label, child)| {
                    view! {
                        <li class="json-tree__row">
                            <span class="json-tree__key">{label}</span>
                            {render_value(&child)}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
