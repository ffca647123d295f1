//! CardAnimated: Thaw `Card` with the `card-appear` entrance animation.
//!
//! ```rust,ignore
//! <CardAnimated delay_ms=0>   // first card
//! <CardAnimated delay_ms=80>  // second card, staggered
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds (for stagger effect)
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes on the card
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class={format!("panel {}", class)} attr:style=style>
            {children()}
        </Card>
    }
}
