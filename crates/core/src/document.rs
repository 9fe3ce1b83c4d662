//! The HTML document shell every slide is assembled into.
//!
//! Templates own their CSS and body markup; the shell only contributes the
//! DOCTYPE, head metadata, font links and the canvas reset.

use crate::fonts::font_links;

/// Width of the slide canvas in CSS pixels.
pub const CANVAS_WIDTH: u32 = 1920;

/// Height of the slide canvas in CSS pixels.
pub const CANVAS_HEIGHT: u32 = 1080;

/// How the slide canvas is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Canvas {
    /// A fixed 1920×1080 pixel canvas.
    #[default]
    Fixed,
    /// Sized to the viewport; the template uses vw/vh units.
    Responsive,
}

impl Canvas {
    fn viewport_meta(self) -> String {
        match self {
            Canvas::Fixed => format!("width={}, initial-scale=1.0", CANVAS_WIDTH),
            Canvas::Responsive => "width=device-width, initial-scale=1.0".to_string(),
        }
    }

    fn reset_css(self) -> String {
        let sizing = match self {
            Canvas::Fixed => format!(
                "html, body {{\n            width: {}px;\n            height: {}px;\n            overflow: hidden;\n        }}",
                CANVAS_WIDTH, CANVAS_HEIGHT
            ),
            Canvas::Responsive => "html, body {\n            width: 100vw;\n            height: 100vh;\n            overflow: hidden;\n        }\n\n        .slide {\n            aspect-ratio: 16 / 9;\n        }"
                .to_string(),
        };

        format!(
            "* {{\n            margin: 0;\n            padding: 0;\n            box-sizing: border-box;\n        }}\n\n        {}",
            sizing
        )
    }
}

/// Builder for a complete slide document.
#[derive(Debug, Clone, Default)]
pub struct SlideDocument {
    title: String,
    font_stacks: Vec<String>,
    canvas: Canvas,
    css: String,
    body: String,
}

impl SlideDocument {
    /// Start a document with the given `<title>` text.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Font stacks used by the slide; web fonts among them get `<link>` tags.
    pub fn with_fonts<S: AsRef<str>>(mut self, stacks: &[S]) -> Self {
        self.font_stacks = stacks.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Template CSS, appended after the canvas reset.
    pub fn with_style(mut self, css: impl Into<String>) -> Self {
        self.css = css.into();
        self
    }

    /// Markup placed inside `<body>`.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Assemble the document.
    pub fn render(&self) -> String {
        let stacks: Vec<&str> = self.font_stacks.iter().map(String::as_str).collect();
        let links = font_links(&stacks);
        let links = if links.is_empty() {
            String::new()
        } else {
            format!("\n    {}", links)
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="{viewport}">
    <title>{title}</title>{links}
    <style>
        {reset}

{css}
    </style>
</head>
<body>
{body}
</body>
</html>"#,
            viewport = self.canvas.viewport_meta(),
            title = self.title,
            links = links,
            reset = self.canvas.reset_css(),
            css = self.css.trim_end(),
            body = self.body.trim_end(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_wrapper() {
        let html = SlideDocument::new("Hello")
            .with_style(".slide { color: red; }")
            .with_body("<div class=\"slide\">Hi</div>")
            .render();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("<title>Hello</title>"));
        assert!(html.contains(".slide { color: red; }"));
        assert!(html.contains("<div class=\"slide\">Hi</div>"));
    }

    #[test]
    fn test_fixed_canvas_size() {
        let html = SlideDocument::new("t").render();
        assert!(html.contains("width: 1920px;"));
        assert!(html.contains("height: 1080px;"));
        assert!(html.contains("content=\"width=1920, initial-scale=1.0\""));
    }

    #[test]
    fn test_responsive_canvas() {
        let html = SlideDocument::new("t").with_canvas(Canvas::Responsive).render();
        assert!(html.contains("width: 100vw;"));
        assert!(html.contains("aspect-ratio: 16 / 9;"));
        assert!(!html.contains("1920px"));
    }

    #[test]
    fn test_font_links_only_for_web_fonts() {
        let with_web = SlideDocument::new("t")
            .with_fonts(&["'Playfair Display', serif"])
            .render();
        assert!(with_web.contains("family=Playfair+Display"));

        let system_only = SlideDocument::new("t").with_fonts(&["Arial, sans-serif"]).render();
        assert!(!system_only.contains("fonts.googleapis.com"));
        assert!(system_only.contains("<title>t</title>\n    <style>"));
    }
}
