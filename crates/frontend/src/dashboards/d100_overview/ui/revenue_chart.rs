use crate::shared::components::CardAnimated;
use contracts::dashboards::d100_overview::sample::revenue_overview;
use contracts::dashboards::d100_overview::RevenuePoint;
use contracts::shared::number_format::format_number;
use leptos::prelude::*;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 300.0;
const PAD_LEFT: f64 = 56.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 32.0;

/// Plot area and value scale of the revenue chart
#[derive(Debug, Clone, PartialEq)]
struct ChartGeometry {
    y_max: f64,
    y_step: f64,
}

impl ChartGeometry {
    fn for_points(points: &[RevenuePoint]) -> Self {
        let max = points.iter().map(|p| p.revenue).fold(0.0_f64, f64::max);
        let y_step = nice_step(max);
        let y_max = ((max / y_step).ceil() * y_step).max(y_step);
        Self { y_max, y_step }
    }

    fn plot_width(&self) -> f64 {
        WIDTH - PAD_LEFT - PAD_RIGHT
    }

    fn plot_height(&self) -> f64 {
        HEIGHT - PAD_TOP - PAD_BOTTOM
    }

    fn x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return PAD_LEFT + self.plot_width() / 2.0;
        }
        PAD_LEFT + self.plot_width() * index as f64 / (count - 1) as f64
    }

    fn y(&self, value: f64) -> f64 {
        PAD_TOP + self.plot_height() * (1.0 - value / self.y_max)
    }

    fn ticks(&self) -> Vec<f64> {
        let count = (self.y_max / self.y_step).round() as usize;
        (0..=count).map(|i| i as f64 * self.y_step).collect()
    }

    fn polyline(&self, points: &[RevenuePoint]) -> String {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{:.1},{:.1}", self.x(i, points.len()), self.y(p.revenue)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Tick spacing of 0.5, 1 or 2.5 times a power of ten, giving a few grid lines
fn nice_step(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let ratio = max / magnitude;
    let factor = if ratio <= 2.0 {
        0.5
    } else if ratio <= 5.0 {
        1.0
    } else {
        2.5
    };
    magnitude * factor
}

/// Revenue overview line chart over fixed sample data
#[component]
pub fn RevenueChart() -> impl IntoView {
    let points = revenue_overview();
    let geometry = ChartGeometry::for_points(&points);
    let line = geometry.polyline(&points);
    let count = points.len();

    let grid = geometry
        .ticks()
        .into_iter()
        .map(|tick| {
            let y = geometry.y(tick);
            view! {
                <g>
                    <line class="chart__grid" x1=PAD_LEFT y1=y x2={WIDTH - PAD_RIGHT} y2=y stroke-dasharray="3 3" />
                    <text class="chart__axis-label" x={PAD_LEFT - 8.0} y={y + 4.0} text-anchor="end">
                        {format_number(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let labels = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = geometry.x(i, count);
            let y = geometry.y(p.revenue);
            let tooltip = format!("{}: {}", p.date, format_number(p.revenue));
            view! {
                <g>
                    <circle class="chart__dot" cx=x cy=y r="4">
                        <title>{tooltip}</title>
                    </circle>
                    <text class="chart__axis-label" x=x y={HEIGHT - 8.0} text-anchor="middle">
                        {p.date.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <CardAnimated delay_ms=80>
            <h2 class="panel__title">"Revenue Overview"</h2>
            <svg class="chart" viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)} width="100%" height="300">
                {grid}
                <polyline class="chart__line" points=line fill="none" stroke="#0ea5e9" stroke-width="2" />
                {labels}
            </svg>
        </CardAnimated>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(revenue: f64) -> RevenuePoint {
        RevenuePoint {
            date: String::new(),
            revenue,
        }
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(9500.0), 2500.0);
        assert_eq!(nice_step(4000.0), 1000.0);
        assert_eq!(nice_step(150.0), 50.0);
        assert_eq!(nice_step(0.0), 1.0);
    }

    #[test]
    fn test_scale_covers_maximum() {
        let geometry = ChartGeometry::for_points(&revenue_overview());
        assert_eq!(geometry.y_max, 10000.0);
        assert_eq!(geometry.ticks(), vec![0.0, 2500.0, 5000.0, 7500.0, 10000.0]);
    }

    #[test]
    fn test_projection_bounds() {
        let points = vec![point(0.0), point(50.0), point(100.0)];
        let geometry = ChartGeometry::for_points(&points);

        assert_eq!(geometry.x(0, 3), PAD_LEFT);
        assert_eq!(geometry.x(2, 3), WIDTH - PAD_RIGHT);
        assert_eq!(geometry.y(0.0), HEIGHT - PAD_BOTTOM);
        assert_eq!(geometry.y(geometry.y_max), PAD_TOP);
        assert_eq!(geometry.polyline(&points).split(' ').count(), 3);
    }

    #[test]
    fn test_single_point_is_centered() {
        let geometry = ChartGeometry::for_points(&[point(10.0)]);
        assert_eq!(geometry.x(0, 1), PAD_LEFT + geometry.plot_width() / 2.0);
    }
}
