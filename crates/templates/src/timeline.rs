//! Horizontal roadmap: phases alternate above and below a center line.

use crate::registry::SlideTemplate;
use serde::{Deserialize, Serialize};
use slide_core::{SlideDocument, TimelinePhase};

/// Params for [`generate_timeline`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timeline {
    pub title: String,
    pub subtitle: String,
    pub phases: Vec<TimelinePhase>,
    pub background_color: String,
    pub line_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub title_font: String,
    pub body_font: String,
    /// The horizontal line joining the phase markers.
    pub show_connector: bool,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            title: "Project Roadmap".to_string(),
            subtitle: "Milestones for the year ahead".to_string(),
            phases: vec![
                TimelinePhase::new("Q1 2026", "Research", "Validate the problem with twenty customer interviews."),
                TimelinePhase::new("Q2 2026", "Prototype", "Ship a clickable prototype to the pilot group."),
                TimelinePhase::new("Q3 2026", "Launch", "Public release with onboarding and billing."),
                TimelinePhase::new("Q4 2026", "Scale", "Expand to two new markets and hire support."),
            ],
            background_color: "#111111".to_string(),
            line_color: "#3F3F46".to_string(),
            accent_color: "#22D3EE".to_string(),
            text_color: "#F4F4F5".to_string(),
            title_font: "'Space Grotesk', sans-serif".to_string(),
            body_font: "'IBM Plex Sans', sans-serif".to_string(),
            show_connector: true,
        }
    }
}

impl SlideTemplate for Timeline {
    const NAME: &'static str = "timeline";

    fn render(&self) -> String {
        generate_timeline(self)
    }
}

/// Render a roadmap slide, one `timeline-phase` per entry of `phases`.
pub fn generate_timeline(params: &Timeline) -> String {
    let Timeline {
        title,
        subtitle,
        phases,
        background_color,
        line_color,
        accent_color,
        text_color,
        title_font,
        body_font,
        show_connector,
    } = params;

    let columns = phases.len().max(1);

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
            position: relative;
        }}

        .timeline-title {{
            font-family: {title_font};
            font-size: 76px;
            font-weight: 700;
            margin-bottom: 14px;
        }}

        .timeline-subtitle {{
            font-size: 30px;
            opacity: 0.7;
        }}

        .connector {{
            position: absolute;
            left: 140px;
            right: 140px;
            top: 640px;
            height: 4px;
            background: linear-gradient(90deg, {accent_color}, {line_color});
        }}

        .timeline-track {{
            position: absolute;
            left: 140px;
            right: 140px;
            top: 300px;
            height: 680px;
            display: grid;
            grid-template-columns: repeat({columns}, 1fr);
            gap: 40px;
        }}

        .timeline-phase {{
            position: relative;
            height: 680px;
        }}

        .phase-marker {{
            position: absolute;
            top: 322px;
            left: 0;
            width: 40px;
            height: 40px;
            border-radius: 50%;
            background-color: {background_color};
            border: 8px solid {accent_color};
        }}

        .phase-body {{
            position: absolute;
            left: 0;
            right: 0;
            padding-left: 24px;
            border-left: 2px dashed {line_color};
        }}

        .timeline-phase[data-position="top"] .phase-body {{
            bottom: 400px;
        }}

        .timeline-phase[data-position="bottom"] .phase-body {{
            top: 400px;
        }}

        .phase-period {{
            font-size: 24px;
            font-weight: 700;
            letter-spacing: 3px;
            text-transform: uppercase;
            color: {accent_color};
            margin-bottom: 12px;
        }}

        .phase-title {{
            font-family: {title_font};
            font-size: 40px;
            font-weight: 700;
            margin-bottom: 12px;
        }}

        .phase-description {{
            font-size: 24px;
            line-height: 1.5;
            opacity: 0.8;
        }}"##
    );

    let phase_items: String = phases
        .iter()
        .enumerate()
        .map(|(i, phase)| {
            let TimelinePhase {
                period,
                title,
                description,
            } = phase;
            let position = if i % 2 == 0 { "top" } else { "bottom" };
            format!(
                r##"
            <div class="timeline-phase" data-position="{position}">
                <div class="phase-marker"></div>
                <div class="phase-body">
                    <div class="phase-period">{period}</div>
                    <h3 class="phase-title">{title}</h3>
                    <p class="phase-description">{description}</p>
                </div>
            </div>"##
            )
        })
        .collect();

    let connector = if *show_connector {
        r##"
        <div class="connector"></div>"##
    } else {
        ""
    };

    let body = format!(
        r##"    <div class="slide">
        <h1 class="timeline-title">{title}</h1>
        <p class="timeline-subtitle">{subtitle}</p>{connector}
        <div class="timeline-track">{phase_items}
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
    fn test_one_fragment_per_phase() {
        for count in [0, 1, 4, 5] {
            let params = Timeline {
                phases: vec![TimelinePhase::new("P", "T", "D"); count],
                ..Timeline::default()
            };
            let html = generate_timeline(&params);
            assert_eq!(html.matches("class=\"timeline-phase\"").count(), count);
        }
    }

    #[test]
    fn test_phases_alternate() {
        let html = generate_timeline(&Timeline::default());
        assert_eq!(html.matches("data-position=\"top\">").count(), 2);
        assert_eq!(html.matches("data-position=\"bottom\">").count(), 2);
    }

    #[test]
    fn test_connector_toggle() {
        let html = generate_timeline(&Timeline {
            show_connector: false,
            ..Timeline::default()
        });
        assert!(!html.contains("<div class=\"connector\">"));
    }

    #[test]
    fn test_string_params_reflected() {
        let params = Timeline {
            title: "UT_TITLE".to_string(),
            subtitle: "UT_SUBTITLE".to_string(),
            phases: vec![TimelinePhase::new("UT_PERIOD", "UT_PHASE", "UT_DESCRIPTION")],
            background_color: "#UT_BG".to_string(),
            line_color: "#UT_LINE".to_string(),
            accent_color: "#UT_ACCENT".to_string(),
            text_color: "#UT_TEXT".to_string(),
            title_font: "UT Title Font".to_string(),
            body_font: "UT Body Font".to_string(),
            show_connector: true,
        };
        let html = generate_timeline(&params);

        for value in [
            "UT_TITLE",
            "UT_SUBTITLE",
            "UT_PERIOD",
            "UT_PHASE",
            "UT_DESCRIPTION",
            "#UT_BG",
            "#UT_LINE",
            "#UT_ACCENT",
            "#UT_TEXT",
            "UT Title Font",
            "UT Body Font",
        ] {
            assert!(html.contains(value), "missing {}", value);
        }
    }
}
