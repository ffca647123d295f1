use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use contracts::dashboards::d100_overview::sample::top_products;
use leptos::prelude::*;

#[component]
pub fn TopProducts() -> impl IntoView {
    let rows = top_products()
        .into_iter()
        .enumerate()
        .map(|(index, product)| {
            view! {
                <div class="top-products__row">
                    <div class="top-products__left">
                        <div class="top-products__rank">{index + 1}</div>
                        <div>
                            <p class="top-products__name">{product.name}</p>
                            <p class="top-products__sales">{format!("{} sales", product.sales)}</p>
                        </div>
                    </div>
                    <div class="top-products__right">
                        <p class="top-products__revenue">{product.revenue}</p>
                        <p class="top-products__roi">{format!("{} ROI", product.roi)}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <CardAnimated delay_ms=120>
            <div class="panel__heading">
                <h2 class="panel__title">"Top Performing Products"</h2>
                <span class="panel__icon panel__icon--green">{icon("trending-up")}</span>
            </div>
            <div class="top-products">{rows}</div>
        </CardAnimated>
    }
}
