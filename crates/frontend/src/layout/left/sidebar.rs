//! Sidebar with brand block and the flat navigation menu

use crate::layout::global_context::use_app_context;
use crate::routes::Page;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="app-sidebar">
            <div class="app-sidebar__brand">
                <h1 class="app-sidebar__title">"DropShip AI"</h1>
                <p class="app-sidebar__tagline">"Intelligent Automation"</p>
            </div>

            <nav class="app-sidebar__content">
                {Page::ALL.into_iter().map(|page| {
                    view! {
                        <a
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.is_active(page)
                            href=page.href(&crate::config::current().routing.base_path)
                            on:click=move |ev| {
                                ev.prevent_default();
                                ctx.navigate(page);
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(page.icon())}
                                <span>{page.label()}</span>
                            </div>
                        </a>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}
