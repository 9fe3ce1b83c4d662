//! Feature grid: icon cards in up to three columns.

use crate::assets::{ICON_CHART, ICON_CLOCK, ICON_GLOBE, ICON_ROCKET, ICON_SHIELD, ICON_USERS};
use crate::registry::SlideTemplate;
use serde::{Deserialize, Serialize};
use slide_core::{Feature, SlideDocument};

/// Params for [`generate_feature_grid`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureGrid {
    pub title: String,
    pub subtitle: String,
    pub features: Vec<Feature>,
    pub background_color: String,
    pub card_color: String,
    pub icon_color: String,
    pub text_color: String,
    pub title_font: String,
    pub body_font: String,
    pub show_icons: bool,
}

impl Default for FeatureGrid {
    fn default() -> Self {
        Self {
            title: "Why Choose Us".to_string(),
            subtitle: "Everything you need, nothing you don't".to_string(),
            features: vec![
                Feature::new("Fast Setup", "Go live in an afternoon with guided onboarding.", ICON_ROCKET),
                Feature::new("Secure", "Encryption at rest and in transit by default.", ICON_SHIELD),
                Feature::new("Insightful", "Dashboards that answer questions before you ask.", ICON_CHART),
                Feature::new("Collaborative", "Invite your whole team at no extra cost.", ICON_USERS),
                Feature::new("Always On", "Backed by a 99.9% uptime commitment.", ICON_CLOCK),
                Feature::new("Global", "Data centers on four continents.", ICON_GLOBE),
            ],
            background_color: "#ECFDF5".to_string(),
            card_color: "#FFFFFF".to_string(),
            icon_color: "#059669".to_string(),
            text_color: "#064E3B".to_string(),
            title_font: "'Manrope', sans-serif".to_string(),
            body_font: "'Manrope', sans-serif".to_string(),
            show_icons: true,
        }
    }
}

impl SlideTemplate for FeatureGrid {
    const NAME: &'static str = "feature_grid";

    fn render(&self) -> String {
        generate_feature_grid(self)
    }
}

/// Column count for `count` cards: a single row up to four, otherwise three.
fn grid_columns(count: usize) -> usize {
    if count <= 4 {
        count.max(1)
    } else {
        3
    }
}

/// Render a feature grid, one `feature-card` per entry of `features`.
pub fn generate_feature_grid(params: &FeatureGrid) -> String {
    let FeatureGrid {
        title,
        subtitle,
        features,
        background_color,
        card_color,
        icon_color,
        text_color,
        title_font,
        body_font,
        show_icons,
    } = params;

    let columns = grid_columns(features.len());

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

        .grid-header {{
            margin-bottom: 64px;
        }}

        .grid-title {{
            font-family: {title_font};
            font-size: 76px;
            font-weight: 800;
            margin-bottom: 14px;
        }}

        .grid-subtitle {{
            font-size: 30px;
            opacity: 0.75;
        }}

        .feature-grid {{
            flex: 1;
            display: grid;
            grid-template-columns: repeat({columns}, 1fr);
            grid-auto-rows: 1fr;
            gap: 36px;
        }}

        .feature-card {{
            background-color: {card_color};
            border-radius: 24px;
            padding: 44px 44px 40px;
            box-shadow: 0 12px 32px rgba(6, 78, 59, 0.08);
        }}

        .feature-icon {{
            width: 84px;
            height: 84px;
            border-radius: 22px;
            background-color: color-mix(in srgb, {icon_color} 12%, transparent);
            color: {icon_color};
            display: flex;
            align-items: center;
            justify-content: center;
            margin-bottom: 28px;
        }}

        .feature-icon svg {{
            width: 46px;
            height: 46px;
        }}

        .feature-title {{
            font-family: {title_font};
            font-size: 36px;
            font-weight: 700;
            margin-bottom: 14px;
        }}

        .feature-description {{
            font-size: 25px;
            line-height: 1.5;
            opacity: 0.8;
        }}"##
    );

    let cards: String = features
        .iter()
        .map(|feature| {
            let Feature {
                title,
                description,
                icon_svg,
            } = feature;
            let icon = if *show_icons && !icon_svg.is_empty() {
                format!(r##"
                <div class="feature-icon">{icon_svg}</div>"##)
            } else {
                String::new()
            };
            format!(
                r##"
            <div class="feature-card">{icon}
                <h3 class="feature-title">{title}</h3>
                <p class="feature-description">{description}</p>
            </div>"##
            )
        })
        .collect();

    let body = format!(
        r##"    <div class="slide">
        <div class="grid-header">
            <h1 class="grid-title">{title}</h1>
            <p class="grid-subtitle">{subtitle}</p>
        </div>
        <div class="feature-grid">{cards}
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
    fn test_grid_columns() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(3), 3);
        assert_eq!(grid_columns(4), 4);
        assert_eq!(grid_columns(5), 3);
        assert_eq!(grid_columns(9), 3);
    }

    #[test]
    fn test_one_card_per_feature() {
        for count in [0, 1, 4, 6] {
            let params = FeatureGrid {
                features: vec![Feature::new("t", "d", ICON_CHART); count],
                ..FeatureGrid::default()
            };
            let html = generate_feature_grid(&params);
            assert_eq!(html.matches("class=\"feature-card\"").count(), count);
        }
    }

    #[test]
    fn test_icons_toggle_and_empty_icon() {
        let params = FeatureGrid {
            features: vec![Feature::new("a", "b", ICON_CHART), Feature::new("c", "d", "")],
            ..FeatureGrid::default()
        };
        let html = generate_feature_grid(&params);
        assert_eq!(html.matches("<div class=\"feature-icon\">").count(), 1);

        let hidden = generate_feature_grid(&FeatureGrid {
            show_icons: false,
            ..params
        });
        assert_eq!(hidden.matches("<div class=\"feature-icon\">").count(), 0);
    }

    #[test]
    fn test_single_family_linked_once() {
        let html = generate_feature_grid(&FeatureGrid::default());
        assert_eq!(html.matches("family=Manrope:").count(), 1);
    }

    #[test]
    fn test_string_params_reflected() {
        let params = FeatureGrid {
            title: "UT_TITLE".to_string(),
            subtitle: "UT_SUBTITLE".to_string(),
            features: vec![Feature::new("UT_FEATURE", "UT_DESCRIPTION", "<svg>UT_ICON</svg>")],
            background_color: "#UT_BG".to_string(),
            card_color: "#UT_CARD".to_string(),
            icon_color: "#UT_ICON_COLOR".to_string(),
            text_color: "#UT_TEXT".to_string(),
            title_font: "UT Title Font".to_string(),
            body_font: "UT Body Font".to_string(),
            show_icons: true,
        };
        let html = generate_feature_grid(&params);

        for value in [
            "UT_TITLE",
            "UT_SUBTITLE",
            "UT_FEATURE",
            "UT_DESCRIPTION",
            "<svg>UT_ICON</svg>",
            "#UT_BG",
            "#UT_CARD",
            "#UT_ICON_COLOR",
            "#UT_TEXT",
            "UT Title Font",
            "UT Body Font",
        ] {
            assert!(html.contains(value), "missing {}", value);
        }
    }
}
