use crate::shared::json_viewer::JsonTree;
use crate::shared::remote_data::RemoteView;
use leptos::prelude::*;
use serde_json::Value;

/// Auxiliary tool: a title, a hint, one action button and the raw result
#[component]
pub fn ToolCard(
    #[prop(into)]
    title: String,
    #[prop(into)]
    hint: String,
    /// Button label while idle
    #[prop(into)]
    action_label: String,
    remote: RemoteView<Value>,
    /// Issues the request through `remote`
    on_run: Callback<()>,
    /// Extra inputs rendered above the button
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let result_title = title.clone();

    view! {
        <div class="tool-card">
            <h3 class="tool-card__title">{title}</h3>
            <p class="tool-card__hint">{hint}</p>
            {children.map(|c| c())}
            <button
                class="button button--secondary tool-card__action"
                disabled=move || remote.loading()
                on:click=move |_| on_run.run(())
            >
                {move || if remote.loading() { "Working...".to_string() } else { action_label.clone() }}
            </button>
            {move || remote.result().map(|value| view! {
                <JsonTree value=value title=result_title.clone() />
            })}
        </div>
    }
}
