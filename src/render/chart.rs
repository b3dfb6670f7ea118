// SPDX-License-Identifier: MIT

//! Self-contained HTML chart of the monthly series.
//!
//! Renders one SVG polyline per metric: rides per month, running ride total,
//! and (when tracked) running top-five total. The output is a single HTML
//! document with no external assets, so it can be written to disk and opened
//! directly or served as the dashboard page.

use crate::models::stats::MonthlySeries;

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 420.0;
const PADDING_X: f64 = 56.0;
const PADDING_TOP: f64 = 28.0;
const PADDING_BOTTOM: f64 = 44.0;
const GRID_TICKS: u32 = 4;

struct SeriesLine {
    label: &'static str,
    color: &'static str,
    stroke_width: f64,
    values: Vec<f64>,
}

/// Render the series as a complete HTML page.
pub fn render_chart(series: &MonthlySeries, include_top_five: bool) -> String {
    let lines = series_lines(series, include_top_five);

    let legend: String = lines
        .iter()
        .map(|line| {
            format!(
                r#"<span class="chip"><i style="background:{}"></i>{}</span>"#,
                line.color, line.label
            )
        })
        .collect();

    let (total_rides, total_top_five) = series
        .entries()
        .last()
        .map(|entry| (entry.total_rides, entry.total_top_five))
        .unwrap_or((0, 0));
    let top_five_display = if include_top_five {
        total_top_five.to_string()
    } else {
        "n/a".to_string()
    };

    PAGE_HTML
        .replace("{{SVG}}", &chart_svg(series, &lines))
        .replace("{{LEGEND}}", &legend)
        .replace("{{TOTAL_RIDES}}", &total_rides.to_string())
        .replace("{{TOTAL_TOP_FIVE}}", &top_five_display)
        .replace("{{MONTH_COUNT}}", &series.len().to_string())
}

fn series_lines(series: &MonthlySeries, include_top_five: bool) -> Vec<SeriesLine> {
    let entries = series.entries();
    let mut lines = vec![
        SeriesLine {
            label: "Rides",
            color: "#2f4858",
            stroke_width: 2.0,
            values: entries.iter().map(|e| f64::from(e.rides)).collect(),
        },
        SeriesLine {
            label: "Total rides",
            color: "#d0021b",
            stroke_width: 4.0,
            values: entries.iter().map(|e| e.total_rides as f64).collect(),
        },
    ];
    if include_top_five {
        lines.push(SeriesLine {
            label: "Total top five",
            color: "#f5a623",
            stroke_width: 2.0,
            values: entries.iter().map(|e| e.total_top_five as f64).collect(),
        });
    }
    lines
}

fn chart_svg(series: &MonthlySeries, lines: &[SeriesLine]) -> String {
    let entries = series.entries();
    if entries.is_empty() {
        return format!(
            r#"<svg viewBox="0 0 {WIDTH} {HEIGHT}" role="img"><text class="label" x="50%" y="50%" text-anchor="middle">No rides yet</text></svg>"#
        );
    }

    let max = lines
        .iter()
        .flat_map(|line| line.values.iter().copied())
        .fold(1.0_f64, f64::max);

    let step = (WIDTH - 2.0 * PADDING_X) / (entries.len().saturating_sub(1).max(1)) as f64;
    let x = |index: usize| PADDING_X + index as f64 * step;
    let y = |value: f64| {
        HEIGHT - PADDING_BOTTOM - (value / max) * (HEIGHT - PADDING_TOP - PADDING_BOTTOM)
    };

    let mut svg = format!(r#"<svg viewBox="0 0 {WIDTH} {HEIGHT}" role="img">"#);

    for tick in 0..=GRID_TICKS {
        let value = max * f64::from(tick) / f64::from(GRID_TICKS);
        let y_pos = y(value);
        svg.push_str(&format!(
            r#"<line class="grid" x1="{PADDING_X}" y1="{y_pos:.1}" x2="{:.1}" y2="{y_pos:.1}"/>"#,
            WIDTH - PADDING_X
        ));
        svg.push_str(&format!(
            r#"<text class="label" x="{:.1}" y="{:.1}" text-anchor="end">{}</text>"#,
            PADDING_X - 10.0,
            y_pos + 4.0,
            format_tick(value)
        ));
    }

    // At most ~12 x-axis labels, however long the history is.
    let label_every = entries.len().div_ceil(12).max(1);
    for (index, entry) in entries.iter().enumerate() {
        if index % label_every != 0 {
            continue;
        }
        svg.push_str(&format!(
            r#"<text class="label" x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            x(index),
            HEIGHT - PADDING_BOTTOM + 18.0,
            entry.month
        ));
    }

    for line in lines {
        let points: Vec<String> = line
            .values
            .iter()
            .enumerate()
            .map(|(index, value)| format!("{:.1},{:.1}", x(index), y(*value)))
            .collect();
        svg.push_str(&format!(
            r#"<polyline fill="none" stroke="{}" stroke-width="{}" points="{}"/>"#,
            line.color,
            line.stroke_width,
            points.join(" ")
        ));
        for (index, value) in line.values.iter().enumerate() {
            svg.push_str(&format!(
                r#"<circle class="point" stroke="{}" cx="{:.1}" cy="{:.1}" r="3"/>"#,
                line.color,
                x(index),
                y(*value)
            ));
        }
    }

    svg.push_str("</svg>");
    svg
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as u64)
    } else {
        format!("{value:.1}")
    }
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Rides per month</title>
  <style>
    :root {
      --ink: #2b2a28;
      --accent: #d0021b;
      --muted: #6b645d;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: #f8f3e6;
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px;
    }

    .app {
      width: min(980px, 100%);
      background: white;
      border-radius: 20px;
      box-shadow: 0 18px 48px rgba(47, 72, 88, 0.15);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: 1.8rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      border: 1px solid rgba(47, 72, 88, 0.12);
      border-radius: 14px;
      padding: 14px;
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .stat .value {
      display: block;
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent);
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .chip i {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 3px;
      margin-right: 6px;
      vertical-align: -1px;
    }

    svg {
      width: 100%;
      height: auto;
      display: block;
    }

    svg .grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    svg .label {
      fill: var(--muted);
      font-size: 11px;
    }

    svg .point {
      fill: white;
      stroke-width: 2;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Rides per month</h1>
    <section class="panel">
      <div class="stat">
        <span class="label">Total rides</span>
        <span class="value">{{TOTAL_RIDES}}</span>
      </div>
      <div class="stat">
        <span class="label">Top five finishes</span>
        <span class="value">{{TOTAL_TOP_FIVE}}</span>
      </div>
      <div class="stat">
        <span class="label">Months</span>
        <span class="value">{{MONTH_COUNT}}</span>
      </div>
    </section>
    <div class="legend">{{LEGEND}}</div>
    {{SVG}}
  </main>
</body>
</html>
"#;
