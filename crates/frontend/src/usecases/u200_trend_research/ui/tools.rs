use crate::shared::components::ui::Input;
use crate::shared::components::ToolCard;
use crate::shared::remote_data::RemoteView;
use crate::usecases::u200_trend_research::api;
use contracts::usecases::u200_trend_research::ProfitQuery;
use leptos::prelude::*;
use serde_json::Value;

/// Niche validator, competitor analysis and profit calculator.
///
/// The first two use the keyword typed in the research search box.
#[component]
pub fn ResearchTools(#[prop(into)] keyword: Signal<String>) -> impl IntoView {
    let niche = RemoteView::<Value>::new();
    let competitors = RemoteView::<Value>::new();
    let profit = RemoteView::<Value>::new();

    let (cost, set_cost) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (ad_spend, set_ad_spend) = signal(String::new());

    let run_niche = Callback::new(move |_| {
        niche.run("validate niche", api::validate_niche(keyword.get_untracked()));
    });
    let run_competitors = Callback::new(move |_| {
        competitors.run("analyze competitors", api::analyze_competitors(keyword.get_untracked()));
    });
    let run_profit = Callback::new(move |_| {
        let query = ProfitQuery {
            cost: parse_amount(&cost.get_untracked()),
            price: parse_amount(&price.get_untracked()),
            ad_spend: parse_amount(&ad_spend.get_untracked()),
        };
        profit.run("calculate profit", api::calculate_profit(query));
    });

    view! {
        <div class="grid grid--3">
            <ToolCard
                title="Niche Validator"
                hint="Validate market viability"
                action_label="Validate Niche"
                remote=niche
                on_run=run_niche
            />
            <ToolCard
                title="Competitor Analysis"
                hint="Analyze competition"
                action_label="Analyze Competitors"
                remote=competitors
                on_run=run_competitors
            />
            <ToolCard
                title="Profit Calculator"
                hint="Calculate margins & ROI"
                action_label="Calculate Profit"
                remote=profit
                on_run=run_profit
            >
                <Input label="Cost" input_type="number" value=cost on_input=Callback::new(move |v| set_cost.set(v)) placeholder="0.00" />
                <Input label="Price" input_type="number" value=price on_input=Callback::new(move |v| set_price.set(v)) placeholder="0.00" />
                <Input label="Ad spend" input_type="number" value=ad_spend on_input=Callback::new(move |v| set_ad_spend.set(v)) placeholder="0.00" />
            </ToolCard>
        </div>
    }
}

/// Blank or malformed input counts as zero
fn parse_amount(text: &str) -> f64 {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount(" 7,25 "), 7.25);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }
}
