//! Side-by-side comparison columns, with a "VS" badge between exactly two.

use crate::registry::SlideTemplate;
use serde::{Deserialize, Serialize};
use slide_core::{ComparisonColumn, SlideDocument};

/// Params for [`generate_comparison`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comparison {
    pub title: String,
    pub columns: Vec<ComparisonColumn>,
    pub divider_label: String,
    pub background_color: String,
    pub panel_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub title_font: String,
    pub body_font: String,
    /// Badge between the columns; only drawn for a two-column layout.
    pub show_divider: bool,
}

impl Default for Comparison {
    fn default() -> Self {
        Self {
            title: "Traditional vs. Our Approach".to_string(),
            columns: vec![
                ComparisonColumn::new(
                    "Traditional",
                    [
                        "Manual data entry",
                        "Weekly reporting cycles",
                        "Siloed team tools",
                        "High onboarding cost",
                    ],
                ),
                ComparisonColumn::new(
                    "Our Approach",
                    [
                        "Automated data capture",
                        "Real-time dashboards",
                        "One shared workspace",
                        "Self-serve onboarding",
                    ],
                )
                .highlighted(),
            ],
            divider_label: "VS".to_string(),
            background_color: "#FFF7ED".to_string(),
            panel_color: "#FFFFFF".to_string(),
            accent_color: "#EA580C".to_string(),
            text_color: "#1C1917".to_string(),
            title_font: "'Oswald', sans-serif".to_string(),
            body_font: "'Roboto', sans-serif".to_string(),
            show_divider: true,
        }
    }
}

impl SlideTemplate for Comparison {
    const NAME: &'static str = "comparison";

    fn render(&self) -> String {
        generate_comparison(self)
    }
}

/// Render a comparison slide, one `comparison-column` per entry of `columns`.
pub fn generate_comparison(params: &Comparison) -> String {
    let Comparison {
        title,
        columns,
        divider_label,
        background_color,
        panel_color,
        accent_color,
        text_color,
        title_font,
        body_font,
        show_divider,
    } = params;

    let column_count = columns.len().max(1);

    let style = format!(
        r##"        body {{
            background-color: {background_color};
            font-family: {body_font};
            color: {text_color};
        }}

        .slide {{
            width: 1920px;
            height: 1080px;
            padding: 100px 140px;
            display: flex;
            flex-direction: column;
        }}

        .comparison-title {{
            font-family: {title_font};
            font-size: 80px;
            font-weight: 600;
            text-transform: uppercase;
            text-align: center;
            margin-bottom: 70px;
        }}

        .comparison-grid {{
            position: relative;
            flex: 1;
            display: grid;
            grid-template-columns: repeat({column_count}, 1fr);
            gap: 80px;
        }}

        .comparison-column {{
            background-color: {panel_color};
            border-radius: 24px;
            padding: 60px 64px;
            border: 3px solid color-mix(in srgb, {accent_color} 27%, transparent);
        }}

        .comparison-column[data-variant="accent"] {{
            background-color: {accent_color};
            border-color: {accent_color};
            color: {panel_color};
        }}

        .column-heading {{
            font-family: {title_font};
            font-size: 52px;
            font-weight: 600;
            margin-bottom: 44px;
            padding-bottom: 24px;
            border-bottom: 3px solid currentColor;
        }}

        .column-points {{
            list-style: none;
        }}

        .comparison-point {{
            font-size: 32px;
            line-height: 1.4;
            padding: 16px 0 16px 48px;
            position: relative;
        }}

        .comparison-point::before {{
            content: "";
            position: absolute;
            left: 0;
            top: 28px;
            width: 18px;
            height: 18px;
            border-radius: 50%;
            background-color: currentColor;
            opacity: 0.6;
        }}

        .divider {{
            position: absolute;
            left: 50%;
            top: 50%;
            transform: translate(-50%, -50%);
            width: 140px;
            height: 140px;
            border-radius: 50%;
            background-color: {text_color};
            color: {background_color};
            font-family: {title_font};
            font-size: 48px;
            font-weight: 700;
            display: flex;
            align-items: center;
            justify-content: center;
            border: 10px solid {background_color};
        }}"##
    );

    let column_items: String = columns
        .iter()
        .map(|column| {
            let variant = if column.highlighted { "accent" } else { "plain" };
            let points: String = column
                .points
                .iter()
                .map(|point| format!(r##"
                    <li class="comparison-point">{point}</li>"##))
                .collect();
            format!(
                r##"
            <div class="comparison-column" data-variant="{variant}">
                <h2 class="column-heading">{}</h2>
                <ul class="column-points">{points}
                </ul>
            </div>"##,
                column.heading
            )
        })
        .collect();

    let divider = if *show_divider && columns.len() == 2 {
        format!(
            r##"
            <div class="divider">{divider_label}</div>"##
        )
    } else {
        String::new()
    };

    let body = format!(
        r##"    <div class="slide">
        <h1 class="comparison-title">{title}</h1>
        <div class="comparison-grid">{column_items}{divider}
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
    fn test_one_fragment_per_column_and_point() {
        let params = Comparison {
            columns: vec![
                ComparisonColumn::new("A", ["a1", "a2"]),
                ComparisonColumn::new("B", ["b1"]),
                ComparisonColumn::new("C", ["c1", "c2", "c3"]),
            ],
            ..Comparison::default()
        };
        let html = generate_comparison(&params);

        assert_eq!(html.matches("class=\"comparison-column\"").count(), 3);
        assert_eq!(html.matches("class=\"comparison-point\"").count(), 6);
        assert!(html.contains("repeat(3, 1fr)"));
    }

    #[test]
    fn test_highlighted_column() {
        let html = generate_comparison(&Comparison::default());
        assert_eq!(html.matches("data-variant=\"accent\">").count(), 1);
        assert_eq!(html.matches("data-variant=\"plain\">").count(), 1);
    }

    #[test]
    fn test_divider_only_for_two_columns() {
        let two = generate_comparison(&Comparison::default());
        assert!(two.contains("<div class=\"divider\">VS</div>"));

        let three = generate_comparison(&Comparison {
            columns: vec![ComparisonColumn::default(); 3],
            ..Comparison::default()
        });
        assert!(!three.contains("<div class=\"divider\">"));

        let hidden = generate_comparison(&Comparison {
            show_divider: false,
            ..Comparison::default()
        });
        assert!(!hidden.contains("<div class=\"divider\">"));
    }

    #[test]
    fn test_string_params_reflected() {
        let params = Comparison {
            title: "UT_TITLE".to_string(),
            columns: vec![
                ComparisonColumn::new("UT_HEADING", ["UT_POINT"]),
                ComparisonColumn::new("Other", ["x"]),
            ],
            divider_label: "UT_DIVIDER".to_string(),
            background_color: "#UT_BG".to_string(),
            panel_color: "#UT_PANEL".to_string(),
            accent_color: "#UT_ACCENT".to_string(),
            text_color: "#UT_TEXT".to_string(),
            title_font: "UT Title Font".to_string(),
            body_font: "UT Body Font".to_string(),
            show_divider: true,
        };
        let html = generate_comparison(&params);

        for value in [
            "UT_TITLE",
            "UT_HEADING",
            "UT_POINT",
            "UT_DIVIDER",
            "#UT_BG",
            "#UT_PANEL",
            "#UT_ACCENT",
            "#UT_TEXT",
            "UT Title Font",
            "UT Body Font",
        ] {
            assert!(html.contains(value), "missing {}", value);
        }
    }
}
