use crate::dashboards::DashboardPage;
use crate::layout::global_context::use_app_context;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::routes::Page;
use crate::system::pages::placeholder::PlaceholderPage;
use crate::usecases::{MarketingPage, ResearchPage};
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || match ctx.active.get() {
                        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Page::Research => view! { <ResearchPage /> }.into_any(),
                        Page::Marketing => view! { <MarketingPage /> }.into_any(),
                        other => view! { <PlaceholderPage page=other /> }.into_any(),
                    }}
                }.into_any()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <MainLayout />
    }
}
