//! SVG line chart over the daily weight minima.

use crate::log::WeightLog;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const PADDING_X: f64 = 44.0;
const PADDING_Y: f64 = 34.0;
const TOP: f64 = 24.0;
const TICKS: usize = 4;

/// Everything the renderer needs to draw the chart.
pub struct ChartConfig {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartConfig {
    pub fn from_log(log: &WeightLog) -> Self {
        let minima = log.daily_minima();
        let labels = minima.iter().map(|r| r.date.to_string()).collect();
        let values: Vec<f64> = minima.iter().map(|r| r.weight).collect();

        let y_max = log.y_axis_upper_bound();
        let y_min = if values.is_empty() {
            0.0
        } else {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            (min - 10.0).max(0.0)
        };

        Self {
            title: "Weight Progress".to_string(),
            x_axis_title: "Date".to_string(),
            y_axis_title: "Weight (kg)".to_string(),
            labels,
            values,
            y_min,
            y_max,
        }
    }
}

pub fn render_svg(config: &ChartConfig) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" font-family=\"sans-serif\">\n"
    ));
    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"16\" text-anchor=\"middle\" font-size=\"14\">{}</text>\n",
        WIDTH / 2.0,
        config.title
    ));

    if config.values.is_empty() {
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"12\" fill=\"#777\">No data yet</text>\n",
            WIDTH / 2.0,
            HEIGHT / 2.0
        ));
        svg.push_str("</svg>\n");
        return svg;
    }

    let range = (config.y_max - config.y_min).max(f64::EPSILON);
    let x_step = if config.values.len() > 1 {
        (WIDTH - PADDING_X * 2.0) / (config.values.len() - 1) as f64
    } else {
        0.0
    };
    let scale_y = (HEIGHT - TOP - PADDING_Y) / range;
    let x = |index: usize| PADDING_X + index as f64 * x_step;
    let y = |value: f64| HEIGHT - PADDING_Y - (value - config.y_min) * scale_y;

    for tick in 0..=TICKS {
        let value = config.y_min + range * tick as f64 / TICKS as f64;
        let y_pos = y(value);
        svg.push_str(&format!(
            "  <line x1=\"{PADDING_X}\" y1=\"{y_pos:.2}\" x2=\"{:.2}\" y2=\"{y_pos:.2}\" stroke=\"#ddd\" />\n",
            WIDTH - PADDING_X
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" font-size=\"11\" fill=\"#777\">{}</text>\n",
            PADDING_X - 10.0,
            y_pos + 4.0,
            format_axis_value(value)
        ));
    }

    let path: String = config
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let op = if index == 0 { 'M' } else { 'L' };
            format!("{op} {:.2} {:.2}", x(index), y(*value))
        })
        .collect::<Vec<String>>()
        .join(" ");
    svg.push_str(&format!(
        "  <path d=\"{path}\" fill=\"none\" stroke=\"#4bc0c0\" stroke-width=\"3\" />\n"
    ));

    for (index, value) in config.values.iter().enumerate() {
        svg.push_str(&format!(
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"4\" fill=\"white\" stroke=\"#4bc0c0\" stroke-width=\"2\" />\n",
            x(index),
            y(*value)
        ));
    }

    // Thin the x labels when the series gets dense.
    let label_every = if config.labels.len() > 8 { 2 } else { 1 };
    for (index, label) in config.labels.iter().enumerate() {
        if index % label_every != 0 {
            continue;
        }
        svg.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"11\" fill=\"#777\">{label}</text>\n",
            x(index),
            HEIGHT - PADDING_Y + 18.0
        ));
    }

    svg.push_str(&format!(
        "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"12\">{}</text>\n",
        WIDTH / 2.0,
        HEIGHT - 4.0,
        config.x_axis_title
    ));
    svg.push_str(&format!(
        "  <text x=\"12\" y=\"{}\" text-anchor=\"middle\" font-size=\"12\" transform=\"rotate(-90 12 {})\">{}</text>\n",
        HEIGHT / 2.0,
        HEIGHT / 2.0,
        config.y_axis_title
    ));

    svg.push_str("</svg>\n");
    svg
}

fn format_axis_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use storage::dto::weight::WeightResponse;

    fn record(id: i64, weight: f64, date: &str) -> WeightResponse {
        let date: NaiveDate = date.parse().expect("valid date");
        let stamp = date.and_hms_opt(0, 0, 0).unwrap();
        WeightResponse {
            id,
            weight,
            date,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[test]
    fn config_is_built_from_daily_minima() {
        let log = WeightLog::new(vec![
            record(1, 80.0, "2025-01-01"),
            record(2, 78.0, "2025-01-01"),
            record(3, 79.0, "2025-01-02"),
        ]);

        let config = ChartConfig::from_log(&log);
        assert_eq!(config.labels, vec!["2025-01-01", "2025-01-02"]);
        assert_eq!(config.values, vec![78.0, 79.0]);
        assert_eq!(config.y_max, 90.0);
        assert_eq!(config.y_min, 68.0);
        assert_eq!(config.title, "Weight Progress");
    }

    #[test]
    fn empty_chart_shows_placeholder() {
        let log = WeightLog::new(Vec::new());
        let config = ChartConfig::from_log(&log);
        assert_eq!(config.y_max, 100.0);

        let svg = render_svg(&config);
        assert!(svg.contains("No data yet"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn rendered_chart_contains_the_series() {
        let log = WeightLog::new(vec![
            record(1, 80.0, "2025-01-01"),
            record(2, 79.0, "2025-01-02"),
            record(3, 78.5, "2025-01-03"),
        ]);

        let svg = render_svg(&ChartConfig::from_log(&log));
        assert!(svg.contains("<path"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("2025-01-02"));
        assert!(svg.contains("Weight (kg)"));
    }

    #[test]
    fn single_point_series_renders() {
        let log = WeightLog::new(vec![record(1, 80.0, "2025-01-01")]);

        let svg = render_svg(&ChartConfig::from_log(&log));
        assert_eq!(svg.matches("<circle").count(), 1);
    }
}
