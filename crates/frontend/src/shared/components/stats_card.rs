use crate::shared::icons::icon;
use leptos::prelude::*;

/// Change badge shown in the corner of a stats card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    /// Percent, shown as given
    pub value: f64,
    pub is_positive: bool,
}

impl Trend {
    pub fn up(value: f64) -> Self {
        Self {
            value,
            is_positive: true,
        }
    }

    pub fn text(&self) -> String {
        format!("{}%", self.value)
    }

    fn class(&self) -> &'static str {
        if self.is_positive {
            "stats-card__trend stats-card__trend--up"
        } else {
            "stats-card__trend stats-card__trend--down"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendColor {
    Blue,
    Green,
    Purple,
    Orange,
}

impl TrendColor {
    pub fn icon_class(&self) -> &'static str {
        match self {
            TrendColor::Blue => "stats-card__icon stats-card__icon--blue",
            TrendColor::Green => "stats-card__icon stats-card__icon--green",
            TrendColor::Purple => "stats-card__icon stats-card__icon--purple",
            TrendColor::Orange => "stats-card__icon stats-card__icon--orange",
        }
    }
}

#[component]
pub fn StatsCard(
    /// Label under the icon
    #[prop(into)]
    title: String,
    /// Preformatted value
    #[prop(into)]
    value: Signal<String>,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(optional)]
    trend: Option<Trend>,
    color: TrendColor,
) -> impl IntoView {
    let trend_view = trend.map(|t| {
        let arrow = if t.is_positive { "arrow-up" } else { "arrow-down" };
        view! {
            <div class=t.class()>
                {icon(arrow)}
                {t.text()}
            </div>
        }
    });

    view! {
        <div class="stats-card">
            <div class="stats-card__top">
                <div class=color.icon_class()>{icon(icon_name)}</div>
                {trend_view}
            </div>
            <div class="stats-card__body">
                <p class="stats-card__title">{title}</p>
                <p class="stats-card__value">{move || value.get()}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_text() {
        assert_eq!(Trend::up(12.5).text(), "12.5%");
        assert_eq!(Trend::up(3.0).text(), "3%");
        let down = Trend {
            value: -4.2,
            is_positive: false,
        };
        assert_eq!(down.text(), "-4.2%");
        assert!(down.class().ends_with("--down"));
    }

    #[test]
    fn test_color_classes() {
        assert!(TrendColor::Orange.icon_class().ends_with("--orange"));
        assert_ne!(TrendColor::Blue.icon_class(), TrendColor::Green.icon_class());
    }
}
