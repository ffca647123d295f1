use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    // search box is local only; nothing consumes it yet
    let (query, set_query) = signal(String::new());

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button
                    class="button button--ghost"
                    aria-label="Toggle sidebar"
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("menu")}
                </button>
                <div class="header__search">
                    <span class="header__search-icon">{icon("search")}</span>
                    <input
                        type="text"
                        class="header__search-input"
                        placeholder="Search products, trends, analytics..."
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="header__actions">
                <button class="header__bell button button--ghost" aria-label="Notifications">
                    {icon("bell")}
                    <span class="header__bell-dot"></span>
                </button>
                <div class="header__user">
                    <div class="header__avatar">{icon("user")}</div>
                    <div>
                        <p class="header__user-name">"Admin User"</p>
                        <p class="header__user-email">"admin@dropship.ai"</p>
                    </div>
                </div>
            </div>
        </header>
    }
}
