use crate::layout::global_context::use_app_context;
use crate::routes::Page;
use crate::shared::components::PageHeader;
use leptos::prelude::*;

/// Sections listed in the sidebar that have no view in this build
#[component]
pub fn PlaceholderPage(page: Page) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="page page--placeholder">
            <PageHeader title=page.label() subtitle="This section is not available yet" />
            <div class="panel">
                <p>"Use the dashboard, product research or marketing pages in the meantime."</p>
                <button class="button button--primary" on:click=move |_| ctx.navigate(Page::Dashboard)>
                    "Back to Dashboard"
                </button>
            </div>
        </div>
    }
}
