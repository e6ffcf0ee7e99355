//! Bar Chart Component
//!
//! Grouped/stacked bar chart using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Colors for the three sentiment classes
pub const POSITIVE_COLOR: &str = "#4caf50";
pub const NEUTRAL_COLOR: &str = "#9e9e9e";
pub const NEGATIVE_COLOR: &str = "#f44336";

/// Rotating palette for category charts
pub const CATEGORY_PALETTE: [&str; 6] = [
    "#36a2eb", // Blue
    "#ff6384", // Pink
    "#ff9f40", // Orange
    "#4bc0c0", // Teal
    "#9966ff", // Purple
    "#ffcd56", // Yellow
];

/// Sentiment color triple, in Positive/Neutral/Negative order
pub const SENTIMENT_COLORS: [&str; 3] = [POSITIVE_COLOR, NEUTRAL_COLOR, NEGATIVE_COLOR];

/// One plotted series: a value per x-axis label
#[derive(Clone, Debug, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub color: BarColor,
}

/// How a series is colored
#[derive(Clone, Debug, PartialEq)]
pub enum BarColor {
    /// One color for the whole series
    Uniform(&'static str),
    /// Cycle through a palette, one color per bar
    PerBar(&'static [&'static str]),
}

impl BarColor {
    fn for_bar(&self, index: usize) -> &'static str {
        match self {
            BarColor::Uniform(color) => color,
            BarColor::PerBar(palette) => palette[index % palette.len()],
        }
    }
}

/// Bar chart component
#[component]
pub fn BarChart(
    /// X-axis category labels
    #[prop(into)]
    labels: MaybeSignal<Vec<String>>,
    /// Plotted series, one value per label
    #[prop(into)]
    series: MaybeSignal<Vec<BarSeries>>,
    /// Stack series on top of each other instead of side by side
    #[prop(into, optional)]
    stacked: MaybeSignal<bool>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the chart inputs change
    {
        let labels = labels.clone();
        let series = series.clone();
        let stacked = stacked.clone();
        create_effect(move |_| {
            let labels = labels.get();
            let series = series.get();
            let stacked = stacked.get();

            if let Some(canvas) = canvas_ref.get() {
                draw_bars(&canvas, &labels, &series, stacked);
            }
        });
    }

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="600"
                height="320"
                class="w-full h-64 rounded-lg"
            />

            <ChartLegend series=series />
        </div>
    }
}

/// Legend row showing one swatch per series
#[component]
fn ChartLegend(
    #[prop(into)]
    series: MaybeSignal<Vec<BarSeries>>,
) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                series.get()
                    .into_iter()
                    .map(|s| {
                        let color = s.color.for_bar(0);
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", color)
                                />
                                <span class="text-sm text-gray-300">{s.name}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Tallest bar (or stack) across all label slots
fn max_bar_value(series: &[BarSeries], stacked: bool) -> f64 {
    if stacked {
        let slots = series.iter().map(|s| s.values.len()).max().unwrap_or(0);
        (0..slots)
            .map(|i| {
                series
                    .iter()
                    .map(|s| s.values.get(i).copied().unwrap_or(0.0))
                    .sum::<f64>()
            })
            .fold(0.0, f64::max)
    } else {
        series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// Shorten long category labels for the x-axis
fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let mut truncated: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }
}

/// Draw the chart on canvas
fn draw_bars(
    canvas: &HtmlCanvasElement,
    labels: &[String],
    series: &[BarSeries],
    stacked: bool,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    // Y-axis spans 0..=tallest bar with 10% headroom
    let y_max = (max_bar_value(series, stacked) * 1.1).max(1.0);

    // Draw grid lines
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    // Horizontal grid lines (5 lines)
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let has_data = !labels.is_empty() && series.iter().any(|s| !s.values.is_empty());
    if !has_data {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data to display", width / 2.0 - 70.0, height / 2.0);
        return;
    }

    let slot_width = chart_width / labels.len() as f64;
    let slot_padding = slot_width * 0.15;
    let inner_width = slot_width - 2.0 * slot_padding;

    for (slot, _label) in labels.iter().enumerate() {
        let slot_x = margin_left + slot as f64 * slot_width + slot_padding;

        if stacked {
            // Accumulate segments upward from the baseline
            let mut offset = 0.0;
            for s in series {
                let value = s.values.get(slot).copied().unwrap_or(0.0);
                let bar_height = value / y_max * chart_height;
                let y = margin_top + chart_height - offset - bar_height;

                ctx.set_fill_style(&s.color.for_bar(slot).into());
                ctx.fill_rect(slot_x, y, inner_width, bar_height);
                offset += bar_height;
            }
        } else {
            // Side-by-side bars within the slot
            let bar_width = inner_width / series.len() as f64;
            for (idx, s) in series.iter().enumerate() {
                let value = s.values.get(slot).copied().unwrap_or(0.0);
                let bar_height = value / y_max * chart_height;
                let x = slot_x + idx as f64 * bar_width;
                let y = margin_top + chart_height - bar_height;

                ctx.set_fill_style(&s.color.for_bar(slot).into());
                ctx.fill_rect(x, y, bar_width, bar_height);
            }
        }
    }

    // Draw x-axis labels
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    for (slot, label) in labels.iter().enumerate() {
        let center = margin_left + (slot as f64 + 0.5) * slot_width;
        let text = truncate_label(label, 12);
        let _ = ctx.fill_text(&text, center - text.len() as f64 * 3.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str, values: &[f64]) -> BarSeries {
        BarSeries {
            name: name.to_string(),
            values: values.to_vec(),
            color: BarColor::Uniform(POSITIVE_COLOR),
        }
    }

    #[test]
    fn test_max_bar_value_grouped() {
        let all = vec![series("a", &[3.0, 1.0]), series("b", &[2.0, 5.0])];
        assert_eq!(max_bar_value(&all, false), 5.0);
    }

    #[test]
    fn test_max_bar_value_stacked_uses_stack_height() {
        let all = vec![series("a", &[3.0, 1.0]), series("b", &[2.0, 5.0])];
        assert_eq!(max_bar_value(&all, true), 6.0);
    }

    #[test]
    fn test_max_bar_value_handles_ragged_series() {
        let all = vec![series("a", &[3.0]), series("b", &[2.0, 5.0])];
        assert_eq!(max_bar_value(&all, true), 5.0);
        assert_eq!(max_bar_value(&[], true), 0.0);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("jobs", 12), "jobs");
        assert_eq!(truncate_label("cscareerquestions", 12), "cscareerque…");
    }

    #[test]
    fn test_per_bar_color_cycles() {
        let color = BarColor::PerBar(&CATEGORY_PALETTE);
        assert_eq!(color.for_bar(0), CATEGORY_PALETTE[0]);
        assert_eq!(color.for_bar(7), CATEGORY_PALETTE[1]);
        assert_eq!(BarColor::Uniform("#fff").for_bar(7), "#fff");
    }
}
