use crate::config;
use crate::dashboards::d100_overview::api;
use crate::dashboards::d100_overview::ui::{RevenueChart, TopProducts};
use crate::layout::global_context::use_app_context;
use crate::routes::Page;
use crate::shared::components::{CardAnimated, PageHeader, StatsCard, Trend, TrendColor};
use crate::shared::remote_data::RemoteView;
use contracts::dashboards::d100_overview::{DashboardMetrics, DashboardQuery, PERIOD_OPTIONS};
use contracts::shared::number_format::{format_money, format_number, format_percent};
use leptos::prelude::*;

/// Overview dashboard: metric cards, revenue chart, top products, quick actions
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();

    // zeros until the first response, like the initial page state
    let metrics = RemoteView::with_result(DashboardMetrics::default());
    let (period_days, set_period_days) = signal(config::current().api.dashboard_period_days);

    // Load metrics on mount and whenever the period changes
    Effect::new(move |_| {
        let query = DashboardQuery {
            period_days: period_days.get(),
        };
        metrics.run("fetch dashboard metrics", api::get_dashboard_metrics(query));
    });

    let text = move |f: fn(&DashboardMetrics) -> String| {
        move || metrics.result().map(|m| f(&m)).unwrap_or_default()
    };
    let metric = move |f: fn(&DashboardMetrics) -> String| Signal::derive(text(f));

    view! {
        <div id="d100_overview--dashboard" class="page dashboard">
            <div class="page__toolbar">
                <PageHeader title="Dashboard" subtitle="Welcome to your DropShip AI command center" />
                <label class="period-select">
                    <span>"Period"</span>
                    <select
                        class="form__select"
                        disabled=move || metrics.loading()
                        on:change=move |ev| {
                            if let Ok(days) = event_target_value(&ev).parse::<u32>() {
                                set_period_days.set(days);
                            }
                        }
                    >
                        {PERIOD_OPTIONS.into_iter().map(|days| view! {
                            <option value=days.to_string() selected=move || period_days.get() == days>
                                {format!("Last {} days", days)}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
            </div>

            // Stats grid
            <div class="grid grid--4">
                <StatsCard
                    title="Total Revenue"
                    value=metric(|m| format_money(m.total_revenue))
                    icon_name="dollar-sign"
                    trend=Trend::up(12.5)
                    color=TrendColor::Blue
                />
                <StatsCard
                    title="Total Sales"
                    value=metric(|m| format_number(m.total_sales))
                    icon_name="trending-up"
                    trend=Trend::up(8.2)
                    color=TrendColor::Green
                />
                <StatsCard
                    title="Active Products"
                    value=metric(|m| m.active_products.to_string())
                    icon_name="package"
                    trend=Trend::up(3.0)
                    color=TrendColor::Purple
                />
                <StatsCard
                    title="ROI"
                    value=metric(|m| format_percent(m.roi))
                    icon_name="bar-chart"
                    trend=Trend::up(15.3)
                    color=TrendColor::Orange
                />
            </div>

            <div class="grid grid--3 dashboard__secondary">
                <div class="metric-inline">
                    <span class="metric-inline__label">"Average order value"</span>
                    <span class="metric-inline__value">{text(|m| format_money(m.average_order_value))}</span>
                </div>
                <div class="metric-inline">
                    <span class="metric-inline__label">"Ad spend"</span>
                    <span class="metric-inline__value">{text(|m| format_money(m.total_ad_spend))}</span>
                </div>
                <div class="metric-inline">
                    <span class="metric-inline__label">"Net profit"</span>
                    <span class="metric-inline__value">{text(|m| format_money(m.net_profit))}</span>
                </div>
            </div>

            // Charts
            <div class="grid grid--2">
                <RevenueChart />
                <TopProducts />
            </div>

            // Quick actions
            <CardAnimated delay_ms=160>
                <h2 class="panel__title">"Quick Actions"</h2>
                <div class="grid grid--3">
                    <button class="button button--primary" on:click=move |_| ctx.navigate(Page::Research)>
                        "Find Trending Products"
                    </button>
                    <button class="button button--primary" on:click=move |_| ctx.navigate(Page::Marketing)>
                        "Generate Ad Copy"
                    </button>
                    <button class="button button--primary" on:click=move |_| ctx.navigate(Page::Products)>
                        "Import to Shopify"
                    </button>
                </div>
            </CardAnimated>
        </div>
    }
}
