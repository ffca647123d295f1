use crate::shared::icons::icon;
use contracts::usecases::u200_trend_research::TrendAnalysis;
use leptos::prelude::*;

#[component]
pub fn TrendResults(analysis: TrendAnalysis) -> impl IntoView {
    let score = analysis
        .combined_score()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());
    let opportunity = format!("{} opportunity", analysis.opportunity().label());
    let recommendation = analysis.recommendation().map(str::to_string);

    let platforms = analysis
        .platforms()
        .into_iter()
        .map(|platform| {
            view! {
                <div class="platform-row">
                    <p class="platform-row__name">{platform.display_name()}</p>
                    <p class="platform-row__score">{format!("{}/100", platform.trend_score)}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="grid grid--2">
            <div class="panel">
                <h3 class="panel__title panel__title--with-icon">
                    <span class="panel__icon panel__icon--green">{icon("trending-up")}</span>
                    "Trend Score"
                </h3>
                <div class="trend-score">{format!("{}/100", score)}</div>
                <p class="trend-score__label">{opportunity}</p>
                {recommendation.map(|text| view! {
                    <p class="trend-score__recommendation">{text}</p>
                })}
            </div>

            <div class="panel">
                <h3 class="panel__title">"Platform Data"</h3>
                <div class="platform-list">{platforms}</div>
            </div>
        </div>
    }
}
