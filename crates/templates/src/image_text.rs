//! Split layout: a photo on one half, heading, paragraph and highlights on the other.

use crate::assets::PHOTO_MEETING;
use crate::registry::SlideTemplate;
use serde::{Deserialize, Serialize};
use slide_core::SlideDocument;

/// Params for [`generate_image_text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageText {
    pub title: String,
    pub body_text: String,
    pub highlights: Vec<String>,
    pub image_url: String,
    pub image_caption: String,
    pub background_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub title_font: String,
    pub body_font: String,
    pub image_on_left: bool,
    /// Tinted gradient over the photo, behind the caption.
    pub show_overlay: bool,
}

impl Default for ImageText {
    fn default() -> Self {
        Self {
            title: "Built Around People".to_string(),
            body_text: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Integer posuere erat a ante venenatis dapibus posuere velit aliquet.".to_string(),
            highlights: vec![
                "Faster decisions".to_string(),
                "Clearer ownership".to_string(),
                "Happier customers".to_string(),
            ],
            image_url: PHOTO_MEETING.to_string(),
            image_caption: "Our team at the 2025 offsite".to_string(),
            background_color: "#FDFCFB".to_string(),
            accent_color: "#DB2777".to_string(),
            text_color: "#27272A".to_string(),
            title_font: "'Libre Baskerville', serif".to_string(),
            body_font: "'Karla', sans-serif".to_string(),
            image_on_left: true,
            show_overlay: true,
        }
    }
}

impl SlideTemplate for ImageText {
    const NAME: &'static str = "image_text";

    fn render(&self) -> String {
        generate_image_text(self)
    }
}

/// Render an image-and-text slide, one `highlight-item` per entry of `highlights`.
pub fn generate_image_text(params: &ImageText) -> String {
    let ImageText {
        title,
        body_text,
        highlights,
        image_url,
        image_caption,
        background_color,
        accent_color,
        text_color,
        title_font,
        body_font,
        image_on_left,
        show_overlay,
    } = params;

    let direction = if *image_on_left { "row" } else { "row-reverse" };

    let style = format!(
        r##"        body {{
            background-color: {background_color};
            font-family: {body_font};
            color: {text_color};
        }}

        .slide {{
            width: 1920px;
            height: 1080px;
            display: flex;
            flex-direction: {direction};
        }}

        .image-panel {{
            position: relative;
            width: 920px;
            height: 1080px;
            overflow: hidden;
        }}

        .image-panel img {{
            width: 100%;
            height: 100%;
            object-fit: cover;
        }}

        .image-overlay {{
            position: absolute;
            inset: 0;
            background: linear-gradient(180deg, transparent 55%, color-mix(in srgb, {accent_color} 80%, transparent) 100%);
        }}

        .image-caption {{
            position: absolute;
            left: 56px;
            bottom: 48px;
            font-size: 24px;
            font-style: italic;
            color: #FFFFFF;
        }}

        .text-panel {{
            flex: 1;
            padding: 0 130px;
            display: flex;
            flex-direction: column;
            justify-content: center;
        }}

        .eyebrow {{
            width: 72px;
            height: 72px;
            border-radius: 18px;
            background-color: color-mix(in srgb, {accent_color} 10%, transparent);
            border: 3px solid {accent_color};
            margin-bottom: 44px;
        }}

        .text-title {{
            font-family: {title_font};
            font-size: 72px;
            font-weight: 700;
            line-height: 1.15;
            margin-bottom: 36px;
        }}

        .text-body {{
            font-size: 30px;
            line-height: 1.6;
            opacity: 0.85;
            margin-bottom: 48px;
        }}

        .highlights {{
            list-style: none;
            display: flex;
            flex-direction: column;
            gap: 22px;
        }}

        .highlight-item {{
            font-size: 30px;
            font-weight: 700;
            padding-left: 44px;
            position: relative;
        }}

        .highlight-item::before {{
            content: "";
            position: absolute;
            left: 0;
            top: 14px;
            width: 24px;
            height: 4px;
            background-color: {accent_color};
        }}"##
    );

    let highlight_items: String = highlights
        .iter()
        .map(|highlight| {
            format!(r##"
                <li class="highlight-item">{highlight}</li>"##)
        })
        .collect();

    let overlay = if *show_overlay {
        r##"
            <div class="image-overlay"></div>"##
    } else {
        ""
    };

    let body = format!(
        r##"    <div class="slide">
        <div class="image-panel">
            <img src="{image_url}" alt="{image_caption}">{overlay}
            <div class="image-caption">{image_caption}</div>
        </div>
        <div class="text-panel">
            <div class="eyebrow"></div>
            <h1 class="text-title">{title}</h1>
            <p class="text-body">{body_text}</p>
            <ul class="highlights">{highlight_items}
            </ul>
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
    fn test_image_side() {
        let left = generate_image_text(&ImageText::default());
        assert!(left.contains("flex-direction: row;"));

        let right = generate_image_text(&ImageText {
            image_on_left: false,
            ..ImageText::default()
        });
        assert!(right.contains("flex-direction: row-reverse;"));
    }

    #[test]
    fn test_one_fragment_per_highlight() {
        for count in [0, 1, 3, 6] {
            let params = ImageText {
                highlights: vec!["h".to_string(); count],
                ..ImageText::default()
            };
            let html = generate_image_text(&params);
            assert_eq!(html.matches("class=\"highlight-item\"").count(), count);
        }
    }

    #[test]
    fn test_overlay_toggle() {
        let html = generate_image_text(&ImageText {
            show_overlay: false,
            ..ImageText::default()
        });
        assert!(!html.contains("<div class=\"image-overlay\">"));
    }

    #[test]
    fn test_string_params_reflected() {
        let params = ImageText {
            title: "UT_TITLE".to_string(),
            body_text: "UT_BODY".to_string(),
            highlights: vec!["UT_HIGHLIGHT".to_string()],
            image_url: "UT_IMAGE.png".to_string(),
            image_caption: "UT_CAPTION".to_string(),
            background_color: "#UT_BG".to_string(),
            accent_color: "#UT_ACCENT".to_string(),
            text_color: "#UT_TEXT".to_string(),
            title_font: "UT Title Font".to_string(),
            body_font: "UT Body Font".to_string(),
            image_on_left: true,
            show_overlay: true,
        };
        let html = generate_image_text(&params);

        for value in [
            "UT_TITLE",
            "UT_BODY",
            "UT_HIGHLIGHT",
            "UT_IMAGE.png",
            "UT_CAPTION",
            "#UT_BG",
            "#UT_ACCENT",
            "#UT_TEXT",
            "UT Title Font",
            "UT Body Font",
        ] {
            assert!(html.contains(value), "missing {}", value);
        }
    }
}
