//! Opening title slide: full-bleed photo, dark overlay, large headline.

use crate::assets::default_image;
use crate::registry::SlideTemplate;
use serde::{Deserialize, Serialize};
use slide_core::SlideDocument;

/// Params for [`generate_title_slide`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleSlide {
    pub main_title: String,
    pub subtitle: String,
    pub presenter: String,
    pub date: String,
    pub background_image: String,
    pub background_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub title_font: String,
    pub body_font: String,
    /// Corner rings and the dotted grid behind the headline.
    pub show_decorations: bool,
}

impl Default for TitleSlide {
    fn default() -> Self {
        Self {
            main_title: "PRESENTATION TITLE".to_string(),
            subtitle: "A short subtitle that frames the talk".to_string(),
            presenter: "Presenter Name".to_string(),
            date: "January 2026".to_string(),
            background_image: default_image("generate_title_slide", 1),
            background_color: "#0F172A".to_string(),
            accent_color: "#F59E0B".to_string(),
            text_color: "#FFFFFF".to_string(),
            title_font: "'Montserrat', sans-serif".to_string(),
            body_font: "'Open Sans', sans-serif".to_string(),
            show_decorations: true,
        }
    }
}

impl SlideTemplate for TitleSlide {
    const NAME: &'static str = "title_slide";

    fn render(&self) -> String {
        generate_title_slide(self)
    }
}

/// Render the title slide.
pub fn generate_title_slide(params: &TitleSlide) -> String {
    let TitleSlide {
        main_title,
        subtitle,
        presenter,
        date,
        background_image,
        background_color,
        accent_color,
        text_color,
        title_font,
        body_font,
        show_decorations,
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
            overflow: hidden;
        }}

        .background {{
            position: absolute;
            inset: 0;
            background-size: cover;
            background-position: center;
            filter: saturate(0.85);
        }}

        .overlay {{
            position: absolute;
            inset: 0;
            background: linear-gradient(100deg, {background_color} 0%, color-mix(in srgb, {background_color} 90%, transparent) 45%, color-mix(in srgb, {background_color} 40%, transparent) 100%);
        }}

        .decorations {{
            position: absolute;
            inset: 0;
            pointer-events: none;
        }}

        .content {{
            position: absolute;
            left: 140px;
            top: 50%;
            transform: translateY(-50%);
            width: 1100px;
        }}

        .accent-line {{
            width: 140px;
            height: 8px;
            background-color: {accent_color};
            margin-bottom: 48px;
        }}

        .title {{
            font-family: {title_font};
            font-size: 112px;
            font-weight: 800;
            line-height: 1.05;
            letter-spacing: 2px;
            text-transform: uppercase;
            margin-bottom: 36px;
        }}

        .subtitle {{
            font-size: 40px;
            font-weight: 300;
            line-height: 1.4;
            opacity: 0.9;
            margin-bottom: 80px;
        }}

        .meta {{
            display: flex;
            align-items: center;
            gap: 28px;
            font-size: 28px;
            font-weight: 600;
            letter-spacing: 1px;
        }}

        .meta .separator {{
            width: 60px;
            height: 2px;
            background-color: {accent_color};
        }}

        .meta .date {{
            color: {accent_color};
        }}"##
    );

    let decorations = if *show_decorations {
        format!(
            r##"
        <svg class="decorations" width="1920" height="1080" viewBox="0 0 1920 1080" xmlns="http://www.w3.org/2000/svg">
            <defs>
                <pattern id="dots" width="32" height="32" patternUnits="userSpaceOnUse">
                    <circle cx="3" cy="3" r="3" fill="{text_color}" fill-opacity="0.18"/>
                </pattern>
            </defs>
            <rect x="1380" y="90" width="400" height="256" fill="url(#dots)"/>
            <circle cx="1720" cy="900" r="260" fill="none" stroke="{accent_color}" stroke-width="6" stroke-opacity="0.7"/>
            <circle cx="1720" cy="900" r="180" fill="none" stroke="{accent_color}" stroke-width="2" stroke-opacity="0.5"/>
            <path d="M0 1010 L420 1010" stroke="{accent_color}" stroke-width="4"/>
        </svg>"##
        )
    } else {
        String::new()
    };

    let body = format!(
        r##"    <div class="slide">
        <div class="background" style="background-image: url('{background_image}');"></div>
        <div class="overlay"></div>{decorations}
        <div class="content">
            <div class="accent-line"></div>
            <h1 class="title">{main_title}</h1>
            <div class="subtitle">{subtitle}</div>
            <div class="meta">
                <span class="presenter">{presenter}</span>
                <span class="separator"></span>
                <span class="date">{date}</span>
            </div>
        </div>
    </div>"##
    );

    SlideDocument::new(main_title.as_str())
        .with_fonts(&[title_font, body_font])
        .with_style(style)
        .with_body(body)
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_plan_example() {
        let html = generate_title_slide(&TitleSlide {
            main_title: "BUSINESS PLAN".to_string(),
            subtitle: "2026 - 2030".to_string(),
            ..TitleSlide::default()
        });

        assert!(html.contains("<title>BUSINESS PLAN</title>"));
        assert!(html.contains("<h1 class=\"title\">BUSINESS PLAN</h1>"));
        assert!(html.contains("<div class=\"subtitle\">2026 - 2030</div>"));
    }

    #[test]
    fn test_string_params_reflected() {
        let params = TitleSlide {
            main_title: "UT_MAIN_TITLE".to_string(),
            subtitle: "UT_SUBTITLE".to_string(),
            presenter: "UT_PRESENTER".to_string(),
            date: "UT_DATE".to_string(),
            background_image: "UT_BG_IMAGE.png".to_string(),
            background_color: "#UT_BG".to_string(),
            accent_color: "#UT_ACCENT".to_string(),
            text_color: "#UT_TEXT".to_string(),
            title_font: "UT Title Font".to_string(),
            body_font: "UT Body Font".to_string(),
            show_decorations: true,
        };
        let html = generate_title_slide(&params);

        for value in [
            "UT_MAIN_TITLE",
            "UT_SUBTITLE",
            "UT_PRESENTER",
            "UT_DATE",
            "UT_BG_IMAGE.png",
            "#UT_BG",
            "#UT_ACCENT",
            "#UT_TEXT",
            "UT Title Font",
            "UT Body Font",
        ] {
            assert!(html.contains(value), "missing {}", value);
        }
    }

    #[test]
    fn test_decorations_toggle() {
        let with = generate_title_slide(&TitleSlide::default());
        let without = generate_title_slide(&TitleSlide {
            show_decorations: false,
            ..TitleSlide::default()
        });

        assert!(with.contains("class=\"decorations\""));
        assert!(!without.contains("class=\"decorations\""));
    }

    #[test]
    fn test_web_fonts_linked() {
        let html = generate_title_slide(&TitleSlide::default());
        assert!(html.contains("family=Montserrat:"));
        assert!(html.contains("family=Open+Sans:"));
    }

    #[test]
    fn test_overlay_accepts_any_css_color() {
        for color in ["#FFF", "rgb(10, 20, 30)", "navy"] {
            let html = generate_title_slide(&TitleSlide {
                background_color: color.to_string(),
                ..TitleSlide::default()
            });
            let tinted = format!("color-mix(in srgb, {} 90%, transparent)", color);
            assert!(html.contains(&tinted), "{}", color);
            assert!(!html.contains(&format!("{}E6", color)), "{}", color);
        }
    }
}
