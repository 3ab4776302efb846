//! SVG charts for the report dashboard.
//!
//! Components take already reshaped data (see `shared::reshape`) and do no
//! fetching of their own.

pub mod geometry;

use crate::shared::number_format::format_amount;
use contracts::shared::report::DonutSlice;
use geometry::{color, donut_segments, grouped_bars, stacked_bars, Bar, Plot};
use leptos::prelude::*;

const DONUT_SIZE: f64 = 220.0;
const DONUT_THICKNESS: f64 = 36.0;

const BAR_WIDTH: f64 = 640.0;
const BAR_HEIGHT: f64 = 300.0;
const BAR_PLOT: Plot = Plot {
    left: 16.0,
    top: 16.0,
    width: 608.0,
    height: 236.0,
};

fn px(value: f64) -> String {
    format!("{:.2}", value)
}

#[component]
fn Legend(#[prop(into)] names: Vec<String>) -> impl IntoView {
    view! {
        <ul class="chart-legend">
            {names
                .into_iter()
                .enumerate()
                .map(|(i, name)| {
                    view! {
                        <li class="chart-legend__item">
                            <span
                                class="chart-legend__swatch"
                                style=format!("background: {};", color(i))
                            ></span>
                            {name}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Donut with the total in the middle.
#[component]
pub fn DonutChart(slices: Vec<DonutSlice>) -> impl IntoView {
    let center = DONUT_SIZE / 2.0;
    let radius = center - DONUT_THICKNESS / 2.0 - 2.0;
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let total: f64 = values.iter().filter(|v| v.is_finite() && **v > 0.0).sum();
    let segments = donut_segments(&values, center, radius);

    let arcs = slices
        .iter()
        .zip(segments)
        .enumerate()
        .filter_map(|(i, (slice, segment))| {
            let segment = segment?;
            let tooltip = format!(
                "{}: {} ({:.1}%)",
                slice.name,
                format_amount(slice.value, 0),
                segment.share * 100.0
            );
            Some(view! {
                <path
                    d=segment.path
                    fill="none"
                    stroke=color(i)
                    stroke-width=px(DONUT_THICKNESS)
                    class="chart-donut__segment"
                >
                    <title>{tooltip}</title>
                </path>
            })
        })
        .collect_view();

    let names: Vec<String> = slices.iter().map(|s| s.name.clone()).collect();

    view! {
        <div class="chart chart--donut">
            <svg
                viewBox=format!("0 0 {} {}", DONUT_SIZE, DONUT_SIZE)
                preserveAspectRatio="xMidYMid meet"
                role="img"
            >
                {arcs}
                <text
                    x=px(center)
                    y=px(center)
                    text-anchor="middle"
                    dominant-baseline="middle"
                    class="chart-donut__total"
                >
                    {format_amount(total, 0)}
                </text>
            </svg>
            <Legend names=names />
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarLayout {
    Stacked,
    Grouped,
}

/// Bar chart over `categories` (x axis) with one color per series.
///
/// `values[i][j]` is the value of series `j` in category `i`.
#[component]
pub fn BarChart(
    categories: Vec<String>,
    series: Vec<String>,
    values: Vec<Vec<f64>>,
    layout: BarLayout,
    #[prop(optional)] decimals: usize,
) -> impl IntoView {
    let bars = match layout {
        BarLayout::Stacked => stacked_bars(&BAR_PLOT, &values),
        BarLayout::Grouped => grouped_bars(&BAR_PLOT, &values),
    };

    let columns = bars
        .into_iter()
        .zip(categories.iter().cloned())
        .zip(values.iter())
        .map(|((column, category), column_values)| {
            let left = column.iter().map(|b| b.x).fold(f64::INFINITY, f64::min);
            let right = column
                .iter()
                .map(|b| b.x + b.width)
                .fold(f64::NEG_INFINITY, f64::max);
            let label_x = if column.is_empty() {
                BAR_PLOT.left
            } else {
                (left + right) / 2.0
            };
            let rects = column
                .into_iter()
                .enumerate()
                .filter(|(_, bar)| bar.height > 0.0)
                .map(|(j, bar): (usize, Bar)| {
                    let tooltip = format!(
                        "{} / {}: {}",
                        category,
                        series.get(j).map(String::as_str).unwrap_or(""),
                        format_amount(column_values.get(j).copied().unwrap_or(f64::NAN), decimals)
                    );
                    view! {
                        <rect
                            x=px(bar.x)
                            y=px(bar.y)
                            width=px(bar.width)
                            height=px(bar.height)
                            fill=color(j)
                            class="chart-bar__rect"
                        >
                            <title>{tooltip}</title>
                        </rect>
                    }
                })
                .collect_view();
            view! {
                <g class="chart-bar__column">
                    {rects}
                    <text
                        x=px(label_x)
                        y=px(BAR_PLOT.bottom() + 18.0)
                        text-anchor="middle"
                        class="chart-bar__label"
                    >
                        {category}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--bar">
            <svg
                viewBox=format!("0 0 {} {}", BAR_WIDTH, BAR_HEIGHT)
                preserveAspectRatio="xMidYMid meet"
                role="img"
            >
                <line
                    x1=px(BAR_PLOT.left)
                    y1=px(BAR_PLOT.bottom())
                    x2=px(BAR_PLOT.left + BAR_PLOT.width)
                    y2=px(BAR_PLOT.bottom())
                    class="chart-bar__axis"
                />
                {columns}
            </svg>
            <Legend names=series.clone() />
        </div>
    }
}
