//! Section divider: oversized outlined number beside the section title.

use crate::registry::SlideTemplate;
use serde::{Deserialize, Serialize};
use slide_core::SlideDocument;

/// Params for [`generate_section_header`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionHeader {
    pub section_number: String,
    pub section_title: String,
    pub section_subtitle: String,
    pub background_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub title_font: String,
    pub body_font: String,
    pub show_number: bool,
    /// Diagonal stripe band on the right edge.
    pub show_pattern: bool,
}

impl Default for SectionHeader {
    fn default() -> Self {
        Self {
            section_number: "01".to_string(),
            section_title: "Section Title".to_string(),
            section_subtitle: "A brief description of what this section covers".to_string(),
            background_color: "#1E3A8A".to_string(),
            accent_color: "#60A5FA".to_string(),
            text_color: "#FFFFFF".to_string(),
            title_font: "'Poppins', sans-serif".to_string(),
            body_font: "'Inter', sans-serif".to_string(),
            show_number: true,
            show_pattern: true,
        }
    }
}

impl SlideTemplate for SectionHeader {
    const NAME: &'static str = "section_header";

    fn render(&self) -> String {
        generate_section_header(self)
    }
}

/// Render a section divider slide.
pub fn generate_section_header(params: &SectionHeader) -> String {
    let SectionHeader {
        section_number,
        section_title,
        section_subtitle,
        background_color,
        accent_color,
        text_color,
        title_font,
        body_font,
        show_number,
        show_pattern,
    } = params;

    let style = format!(
        r##"        body {{
            background-color: {background_color};
            font-family: {body_font};
            color: {text_color};
        }}

        .slide {{
            position: relative;
            width: 1920px;
            height: 1080px;
            display: flex;
            align-items: center;
            padding: 0 160px;
            overflow: hidden;
        }}

        .section-number {{
            font-family: {title_font};
            font-size: 420px;
            font-weight: 800;
            line-height: 1;
            color: transparent;
            -webkit-text-stroke: 4px {accent_color};
            margin-right: 90px;
            flex-shrink: 0;
        }}

        .section-text {{
            position: relative;
            z-index: 2;
            max-width: 1000px;
        }}

        .section-label {{
            display: inline-block;
            font-size: 26px;
            font-weight: 600;
            letter-spacing: 6px;
            text-transform: uppercase;
            color: {accent_color};
            margin-bottom: 28px;
        }}

        .section-title {{
            font-family: {title_font};
            font-size: 96px;
            font-weight: 700;
            line-height: 1.1;
            margin-bottom: 36px;
        }}

        .section-subtitle {{
            font-size: 36px;
            font-weight: 300;
            line-height: 1.5;
            opacity: 0.85;
            border-left: 6px solid {accent_color};
            padding-left: 32px;
        }}

        .pattern {{
            position: absolute;
            top: 0;
            right: 0;
            width: 420px;
            height: 1080px;
            background: repeating-linear-gradient(
                135deg,
                color-mix(in srgb, {accent_color} 20%, transparent) 0px,
                color-mix(in srgb, {accent_color} 20%, transparent) 18px,
                transparent 18px,
                transparent 48px
            );
            z-index: 1;
        }}"##
    );

    let number = if *show_number {
        format!(r##"<div class="section-number">{section_number}</div>"##)
    } else {
        String::new()
    };

    let pattern = if *show_pattern {
        r##"<div class="pattern"></div>"##
    } else {
        ""
    };

    let body = format!(
        r##"    <div class="slide">
        {pattern}
        {number}
        <div class="section-text">
            <span class="section-label">Section {section_number}</span>
            <h1 class="section-title">{section_title}</h1>
            <p class="section-subtitle">{section_subtitle}</p>
        </div>
    </div>"##
    );

    SlideDocument::new(section_title.as_str())
        .with_fonts(&[title_font, body_font])
        .with_style(style)
        .with_body(body)
        .render()
}
