use fit_tracker_lib::chart::ChartSeries;
use yew::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 260.0;
const PAD: f64 = 32.0;

#[derive(PartialEq, Properties, Clone)]
pub struct ChartProps {
    pub series: ChartSeries,
}

/// Weight-over-time line chart, drawn as inline SVG. One marker per
/// series point, x by source position, y scaled to the weight range.
#[function_component]
pub fn ProgressChart(props: &ChartProps) -> Html {
    let series = &props.series;
    let points = chart_points(series, WIDTH, HEIGHT, PAD);
    let (min, max) = weight_range(&series.dataset);
    let endpoints = series.labels.first().zip(series.labels.last());

    html! {
        <svg
            class="progress-chart"
            viewBox={format!("0 0 {WIDTH} {HEIGHT}")}
            preserveAspectRatio="xMidYMid meet"
        >
            <polyline
                points={polyline_points(&points)}
                fill="none"
                stroke="rgb(0, 96, 255)"
                stroke-width="2"
            />
            { for points.iter().map(|(x, y)| html! {
                <circle cx={format!("{x:.1}")} cy={format!("{y:.1}")} r="3" fill="rgb(0, 96, 255)" />
            }) }
            <text x="4" y={format!("{:.1}", PAD)} class="axis-label">{ max }</text>
            <text x="4" y={format!("{:.1}", HEIGHT - PAD)} class="axis-label">{ min }</text>
            if let Some((first, last)) = endpoints {
                <text x={format!("{:.1}", PAD)} y={format!("{:.1}", HEIGHT - 8.0)} class="axis-label">
                    { first.clone() }
                </text>
                <text
                    x={format!("{:.1}", WIDTH - PAD)}
                    y={format!("{:.1}", HEIGHT - 8.0)}
                    text-anchor="end"
                    class="axis-label"
                >
                    { last.clone() }
                </text>
            }
        </svg>
    }
}

fn weight_range(dataset: &[f64]) -> (f64, f64) {
    let min = dataset.iter().copied().fold(f64::INFINITY, f64::min);
    let max = dataset.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

/// One (x, y) position per series point, in source order.
fn chart_points(series: &ChartSeries, width: f64, height: f64, pad: f64) -> Vec<(f64, f64)> {
    if series.is_empty() {
        return Vec::new();
    }

    let (min, max) = weight_range(&series.dataset);
    // A flat series still needs a finite scale
    let span = if max > min { max - min } else { 1.0 };
    let inner_width = width - 2.0 * pad;
    let inner_height = height - 2.0 * pad;

    series
        .dataset
        .iter()
        .enumerate()
        .map(|(i, weight)| {
            let x = if series.len() > 1 {
                pad + i as f64 * inner_width / (series.len() - 1) as f64
            } else {
                width / 2.0
            };
            let y = height - pad - (weight - min) / span * inner_height;
            (x, y)
        })
        .collect()
}

fn polyline_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<String>>()
        .join(" ")
}
