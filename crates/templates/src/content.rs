//! Numbered content points beside an optional photo panel.

use crate::assets::PHOTO_WORKSPACE;
use crate::registry::SlideTemplate;
use serde::{Deserialize, Serialize};
use slide_core::SlideDocument;

/// Params for [`generate_content_points`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentPoints {
    pub title: String,
    pub intro: String,
    pub points: Vec<String>,
    pub image_url: String,
    pub background_color: String,
    pub heading_color: String,
    pub text_color: String,
    pub accent_color: String,
    pub title_font: String,
    pub body_font: String,
    /// Photo panel on the right; points take the full width when off.
    pub show_image: bool,
}

impl Default for ContentPoints {
    fn default() -> Self {
        Self {
            title: "Key Points".to_string(),
            intro: "An overview of the ideas this slide walks through.".to_string(),
            points: vec![
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit.".to_string(),
                "Sed do eiusmod tempor incididunt ut labore et dolore.".to_string(),
                "Ut enim ad minim veniam, quis nostrud exercitation.".to_string(),
                "Duis aute irure dolor in reprehenderit in voluptate.".to_string(),
            ],
            image_url: PHOTO_WORKSPACE.to_string(),
            background_color: "#FFFFFF".to_string(),
            heading_color: "#111827".to_string(),
            text_color: "#374151".to_string(),
            accent_color: "#2563EB".to_string(),
            title_font: "'Raleway', sans-serif".to_string(),
            body_font: "'Source Sans 3', sans-serif".to_string(),
            show_image: true,
        }
    }
}

impl SlideTemplate for ContentPoints {
    const NAME: &'static str = "content_points";

    fn render(&self) -> String {
        generate_content_points(self)
    }
}

/// Render a bulleted content slide, one `content-point` per entry of `points`.
pub fn generate_content_points(params: &ContentPoints) -> String {
    let ContentPoints {
        title,
        intro,
        points,
        image_url,
        background_color,
        heading_color,
        text_color,
        accent_color,
        title_font,
        body_font,
        show_image,
    } = params;

    let text_width = if *show_image { "980px" } else { "1640px" };

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
            overflow: hidden;
        }}

        .text-column {{
            width: {text_width};
            padding: 120px 0 120px 140px;
            display: flex;
            flex-direction: column;
            justify-content: center;
        }}

        .slide-title {{
            font-family: {title_font};
            font-size: 72px;
            font-weight: 700;
            color: {heading_color};
            margin-bottom: 20px;
        }}

        .title-bar {{
            width: 96px;
            height: 6px;
            border-radius: 3px;
            background-color: {accent_color};
            margin-bottom: 36px;
        }}

        .intro {{
            font-size: 30px;
            line-height: 1.5;
            margin-bottom: 48px;
        }}

        .points {{
            display: flex;
            flex-direction: column;
            gap: 34px;
        }}

        .content-point {{
            display: flex;
            align-items: flex-start;
            gap: 28px;
        }}

        .point-marker {{
            flex-shrink: 0;
            width: 64px;
            height: 64px;
            border-radius: 50%;
            background-color: {accent_color};
            color: {background_color};
            font-family: {title_font};
            font-size: 26px;
            font-weight: 700;
            display: flex;
            align-items: center;
            justify-content: center;
        }}

        .point-text {{
            font-size: 32px;
            line-height: 1.45;
            padding-top: 10px;
        }}

        .image-column {{
            position: absolute;
            top: 0;
            right: 0;
            width: 800px;
            height: 1080px;
            overflow: hidden;
            clip-path: polygon(14% 0, 100% 0, 100% 100%, 0 100%);
        }}

        .image-column img {{
            width: 100%;
            height: 100%;
            object-fit: cover;
        }}"##
    );

    let point_items: String = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            format!(
                r##"
                <div class="content-point">
                    <span class="point-marker">{:02}</span>
                    <p class="point-text">{}</p>
                </div>"##,
                i + 1,
                point
            )
        })
        .collect();

    let image = if *show_image {
        format!(
            r##"
        <div class="image-column">
            <img src="{image_url}" alt="">
        </div>"##
        )
    } else {
        String::new()
    };

    let body = format!(
        r##"    <div class="slide">
        <div class="text-column">
            <h1 class="slide-title">{title}</h1>
            <div class="title-bar"></div>
            <p class="intro">{intro}</p>
            <div class="points">{point_items}
            </div>
        </div>{image}
    </div>"##
    );

    SlideDocument::new(title.as_str())
        .with_fonts(&[title_font, body_font])
        .with_style(style)
        .with_body(body)
        .render()
}
