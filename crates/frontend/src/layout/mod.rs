pub mod global_context;
pub mod header;
pub mod left;

use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |            Header            |
/// |  Sidebar  +------------------------------+
/// |  (Left)   |         Page content         |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <left::Left>
                {left()}
            </left::Left>

            <div class="app-body">
                <header::Header />
                <main class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
