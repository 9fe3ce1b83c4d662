//! Full-screen quotation. Sized in viewport units rather than pixels.

use crate::assets::default_image;
use crate::registry::SlideTemplate;
use serde::{Deserialize, Serialize};
use slide_core::{Canvas, SlideDocument};

/// Params for [`generate_quote`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    pub quote_text: String,
    pub author: String,
    pub author_title: String,
    /// Author portrait; no portrait is drawn when empty.
    pub author_photo: String,
    pub background_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub quote_font: String,
    pub body_font: String,
    pub show_quote_mark: bool,
}

impl Default for Quote {
    fn default() -> Self {
        Self {
            quote_text: "The best way to predict the future is to invent it.".to_string(),
            author: "Alan Kay".to_string(),
            author_title: "Computer Scientist".to_string(),
            author_photo: default_image("generate_quote", 1),
            background_color: "#1A1A2E".to_string(),
            accent_color: "#E94560".to_string(),
            text_color: "#EAEAEA".to_string(),
            quote_font: "'Playfair Display', serif".to_string(),
            body_font: "'Lato', sans-serif".to_string(),
            show_quote_mark: true,
        }
    }
}

impl SlideTemplate for Quote {
    const NAME: &'static str = "quote";

    fn render(&self) -> String {
        generate_quote(self)
    }
}

/// Render a quotation slide.
pub fn generate_quote(params: &Quote) -> String {
    let Quote {
        quote_text,
        author,
        author_title,
        author_photo,
        background_color,
        accent_color,
        text_color,
        quote_font,
        body_font,
        show_quote_mark,
    } = params;

    let style = format!(
        r##"        body {{
            background-color: {background_color};
            font-family: {body_font};
            color: {text_color};
            display: flex;
            align-items: center;
            justify-content: center;
        }}

        .slide {{
            position: relative;
            width: 100vw;
            max-height: 100vh;
            padding: 0 12vw;
            display: flex;
            flex-direction: column;
            justify-content: center;
        }}

        .quote-mark {{
            position: absolute;
            top: 4vw;
            left: 6vw;
            font-family: {quote_font};
            font-size: 22vw;
            line-height: 1;
            color: {accent_color};
            opacity: 0.35;
        }}

        .quote-text {{
            position: relative;
            font-family: {quote_font};
            font-size: 3.8vw;
            font-style: italic;
            line-height: 1.35;
            margin-bottom: 4vw;
        }}

        .quote-author {{
            display: flex;
            align-items: center;
            gap: 1.8vw;
        }}

        .author-photo {{
            width: 6vw;
            height: 6vw;
            border-radius: 50%;
            object-fit: cover;
            border: 0.3vw solid {accent_color};
        }}

        .author-rule {{
            width: 4vw;
            height: 0.25vw;
            background-color: {accent_color};
        }}

        .author-name {{
            font-size: 1.8vw;
            font-weight: 700;
            letter-spacing: 0.1vw;
            text-transform: uppercase;
        }}

        .author-title {{
            font-size: 1.3vw;
            opacity: 0.7;
            margin-top: 0.4vw;
        }}"##
    );

    let quote_mark = if *show_quote_mark {
        r##"
        <div class="quote-mark">&ldquo;</div>"##
    } else {
        ""
    };

    let portrait = if author_photo.is_empty() {
        r##"<div class="author-rule"></div>"##.to_string()
    } else {
        format!(r##"<img class="author-photo" src="{author_photo}" alt="{author}">"##)
    };

    let body = format!(
        r##"    <div class="slide">{quote_mark}
        <blockquote class="quote-text">{quote_text}</blockquote>
        <div class="quote-author">
            {portrait}
            <div>
                <div class="author-name">{author}</div>
                <div class="author-title">{author_title}</div>
            </div>
        </div>
    </div>"##
    );

    SlideDocument::new(author.as_str())
        .with_canvas(Canvas::Responsive)
        .with_fonts(&[quote_font, body_font])
        .with_style(style)
        .with_body(body)
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responsive_canvas() {
        let html = generate_quote(&Quote::default());
        assert!(html.contains("width=device-width"));
        assert!(!html.contains("1920px"));
    }

    #[test]
    fn test_rule_replaces_missing_photo() {
        let html = generate_quote(&Quote {
            author_photo: String::new(),
            ..Quote::default()
        });
        assert!(html.contains("<div class=\"author-rule\"></div>"));
        assert!(!html.contains("class=\"author-photo\""));
    }

    #[test]
    fn test_quote_mark_toggle() {
        let html = generate_quote(&Quote {
            show_quote_mark: false,
            ..Quote::default()
        });
        assert!(!html.contains("<div class=\"quote-mark\">"));
    }

    #[test]
    fn test_string_params_reflected() {
        let params = Quote {
            quote_text: "UT_QUOTE".to_string(),
            author: "UT_AUTHOR".to_string(),
            author_title: "UT_AUTHOR_TITLE".to_string(),
            author_photo: "UT_PHOTO.png".to_string(),
            background_color: "#UT_BG".to_string(),
            accent_color: "#UT_ACCENT".to_string(),
            text_color: "#UT_TEXT".to_string(),
            quote_font: "UT Quote Font".to_string(),
            body_font: "UT Body Font".to_string(),
            show_quote_mark: true,
        };
        let html = generate_quote(&params);

        for value in [
            "UT_QUOTE",
            "UT_AUTHOR",
            "UT_AUTHOR_TITLE",
            "UT_PHOTO.png",
            "#UT_BG",
            "#UT_ACCENT",
            "#UT_TEXT",
            "UT Quote Font",
            "UT Body Font",
        ] {
            assert!(html.contains(value), "missing {}", value);
        }
    }
}
