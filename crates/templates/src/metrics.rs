//! Key figures: big numbers in cards on a dark gradient.

use crate::assets::PHOTO_SKYLINE;
use crate::registry::SlideTemplate;
use serde::{Deserialize, Serialize};
use slide_core::{Metric, SlideDocument};

/// Params for [`generate_metrics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    pub title: String,
    pub subtitle: String,
    pub metrics: Vec<Metric>,
    pub background_image: String,
    pub gradient_start: String,
    pub gradient_end: String,
    pub accent_color: String,
    pub text_color: String,
    pub title_font: String,
    pub body_font: String,
    pub show_accent_bar: bool,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            title: "By the Numbers".to_string(),
            subtitle: "Results from the last twelve months".to_string(),
            metrics: vec![
                Metric::new("98%", "Customer satisfaction"),
                Metric::new("$4.2M", "Annual recurring revenue"),
                Metric::new("35K", "Active users"),
                Metric::new("12", "Countries served"),
            ],
            background_image: PHOTO_SKYLINE.to_string(),
            gradient_start: "#0B1120".to_string(),
            gradient_end: "#1D4ED8".to_string(),
            accent_color: "#FACC15".to_string(),
            text_color: "#FFFFFF".to_string(),
            title_font: "'Barlow Condensed', sans-serif".to_string(),
            body_font: "'Barlow', sans-serif".to_string(),
            show_accent_bar: true,
        }
    }
}

impl SlideTemplate for Metrics {
    const NAME: &'static str = "metrics";

    fn render(&self) -> String {
        generate_metrics(self)
    }
}

/// Render a metrics slide, one `metric-card` per entry of `metrics`.
pub fn generate_metrics(params: &Metrics) -> String {
    let Metrics {
        title,
        subtitle,
        metrics,
        background_image,
        gradient_start,
        gradient_end,
        accent_color,
        text_color,
        title_font,
        body_font,
        show_accent_bar,
    } = params;

    let columns = metrics.len().clamp(1, 4);

    let style = format!(
        r##"        body {{
            background-color: {gradient_start};
            font-family: {body_font};
            color: {text_color};
        }}

        .slide {{
            position: relative;
            width: 1920px;
            height: 1080px;
            padding: 130px 140px;
            background-image: linear-gradient(135deg, color-mix(in srgb, {gradient_start} 95%, transparent) 0%, color-mix(in srgb, {gradient_end} 85%, transparent) 100%), url('{background_image}');
            background-size: cover;
            background-position: center;
            display: flex;
            flex-direction: column;
            justify-content: center;
        }}

        .accent-bar {{
            position: absolute;
            top: 0;
            left: 140px;
            width: 220px;
            height: 14px;
            background-color: {accent_color};
        }}

        .metrics-title {{
            font-family: {title_font};
            font-size: 96px;
            font-weight: 700;
            text-transform: uppercase;
            letter-spacing: 3px;
            margin-bottom: 16px;
        }}

        .metrics-subtitle {{
            font-size: 32px;
            opacity: 0.8;
            margin-bottom: 100px;
        }}

        .metrics-grid {{
            display: grid;
            grid-template-columns: repeat({columns}, 1fr);
            gap: 40px;
        }}

        .metric-card {{
            padding: 48px 44px;
            border-radius: 20px;
            background-color: rgba(255, 255, 255, 0.08);
            border: 2px solid rgba(255, 255, 255, 0.18);
            backdrop-filter: blur(6px);
        }}

        .metric-value {{
            font-family: {title_font};
            font-size: 120px;
            font-weight: 700;
            line-height: 1;
            color: {accent_color};
            margin-bottom: 20px;
        }}

        .metric-label {{
            font-size: 28px;
            line-height: 1.4;
        }}"##
    );

    let cards: String = metrics
        .iter()
        .map(|metric| {
            let Metric { value, label } = metric;
            format!(
                r##"
            <div class="metric-card">
                <div class="metric-value">{value}</div>
                <div class="metric-label">{label}</div>
            </div>"##
            )
        })
        .collect();

    let accent_bar = if *show_accent_bar {
        r##"
        <div class="accent-bar"></div>"##
    } else {
        ""
    };

    let body = format!(
        r##"    <div class="slide">{accent_bar}
        <h1 class="metrics-title">{title}</h1>
        <p class="metrics-subtitle">{subtitle}</p>
        <div class="metrics-grid">{cards}
        </div>
    </div>"##
    );

    SlideDocument::new(title.as_str())
        .with_fonts(&[title_font, body_font])
        .with_style(style)
        .with_body(body)
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_card_per_metric() {
        for count in [0, 2, 4, 8] {
            let params = Metrics {
                metrics: vec![Metric::new("1", "one"); count],
                ..Metrics::default()
            };
            let html = generate_metrics(&params);
            assert_eq!(html.matches("class=\"metric-card\"").count(), count);
        }
    }

    #[test]
    fn test_accent_bar_toggle() {
        assert!(generate_metrics(&Metrics::default()).contains("<div class=\"accent-bar\">"));
        let html = generate_metrics(&Metrics {
            show_accent_bar: false,
            ..Metrics::default()
        });
        assert!(!html.contains("<div class=\"accent-bar\">"));
    }

    #[test]
    fn test_string_params_reflected() {
        let params = Metrics {
            title: "UT_TITLE".to_string(),
            subtitle: "UT_SUBTITLE".to_string(),
            metrics: vec![Metric::new("UT_VALUE", "UT_LABEL")],
            background_image: "UT_BG_IMAGE.jpg".to_string(),
            gradient_start: "#UT_START".to_string(),
            gradient_end: "#UT_END".to_string(),
            accent_color: "#UT_ACCENT".to_string(),
            text_color: "#UT_TEXT".to_string(),
            title_font: "UT Title Font".to_string(),
            body_font: "UT Body Font".to_string(),
            show_accent_bar: true,
        };
        let html = generate_metrics(&params);

        for value in [
            "UT_TITLE",
            "UT_SUBTITLE",
            "UT_VALUE",
            "UT_LABEL",
            "UT_BG_IMAGE.jpg",
            "#UT_START",
            "#UT_END",
            "#UT_ACCENT",
            "#UT_TEXT",
            "UT Title Font",
            "UT Body Font",
        ] {
            assert!(html.contains(value), "missing {}", value);
        }
    }
}
