use crate::shared::components::ui::{Button, Input};
use crate::shared::components::PageHeader;
use crate::shared::remote_data::RemoteView;
use crate::usecases::u200_trend_research::api;
use crate::usecases::u200_trend_research::ui::{ResearchTools, TrendResults};
use contracts::usecases::u200_trend_research::TrendAnalysis;
use leptos::prelude::*;

/// Product research: keyword trend analysis plus niche/competitor/profit tools
#[component]
pub fn ResearchPage() -> impl IntoView {
    let (keyword, set_keyword) = signal(String::new());
    let analysis = RemoteView::<TrendAnalysis>::new();

    let analyze = move || {
        analysis.run("analyze trend", api::analyze_trend(keyword.get_untracked()));
    };

    view! {
        <div id="u200_trend_research--page" class="page research">
            <PageHeader
                title="Product Research"
                subtitle="Discover trending products and analyze market potential"
            />

            // Search
            <div class="panel">
                <div class="search-row">
                    <Input
                        class="search-row__input"
                        value=keyword
                        on_input=Callback::new(move |v| set_keyword.set(v))
                        placeholder="Enter product keyword (e.g., wireless earbuds)"
                    />
                    <Button
                        class="search-row__button"
                        disabled=Signal::derive(move || analysis.loading())
                        on_click=Callback::new(move |_| analyze())
                    >
                        {move || if analysis.loading() { "Analyzing..." } else { "Analyze Trend" }}
                    </Button>
                </div>
            </div>

            // Results
            {move || analysis.result().map(|result| view! { <TrendResults analysis=result /> })}

            <ResearchTools keyword=keyword />
        </div>
    }
}
