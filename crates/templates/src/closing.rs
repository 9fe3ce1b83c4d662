//! Closing "thank you" slide with contact details.

use crate::assets::PHOTO_OFFICE;
use crate::registry::SlideTemplate;
use serde::{Deserialize, Serialize};
use slide_core::{ContactLine, SlideDocument};

/// Params for [`generate_thank_you`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThankYou {
    pub main_text: String,
    pub subtitle: String,
    pub contacts: Vec<ContactLine>,
    /// Company logo; omitted when empty.
    pub logo_url: String,
    pub background_image: String,
    pub background_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub title_font: String,
    pub body_font: String,
    /// Floating blurred circles behind the text.
    pub show_shapes: bool,
}

impl Default for ThankYou {
    fn default() -> Self {
        Self {
            main_text: "Thank You".to_string(),
            subtitle: "Questions & Discussion".to_string(),
            contacts: vec![
                ContactLine::new("Email", "hello@example.com"),
                ContactLine::new("Phone", "+1 (555) 010-2026"),
                ContactLine::new("Web", "www.example.com"),
            ],
            logo_url: String::new(),
            background_image: PHOTO_OFFICE.to_string(),
            background_color: "#2D1B69".to_string(),
            accent_color: "#FF6B6B".to_string(),
            text_color: "#FFFFFF".to_string(),
            title_font: "'Pacifico', cursive".to_string(),
            body_font: "'Quicksand', sans-serif".to_string(),
            show_shapes: true,
        }
    }
}

impl SlideTemplate for ThankYou {
    const NAME: &'static str = "thank_you";

    fn render(&self) -> String {
        generate_thank_you(self)
    }
}

/// Render a closing slide, one `contact-line` per entry of `contacts`.
pub fn generate_thank_you(params: &ThankYou) -> String {
    let ThankYou {
        main_text,
        subtitle,
        contacts,
        logo_url,
        background_image,
        background_color,
        accent_color,
        text_color,
        title_font,
        body_font,
        show_shapes,
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
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            text-align: center;
        }}

        .backdrop {{
            position: absolute;
            inset: 0;
            background-size: cover;
            background-position: center;
            opacity: 0.18;
            mix-blend-mode: luminosity;
        }}

        .shape {{
            position: absolute;
            border-radius: 50%;
            filter: blur(60px);
        }}

        .shape-one {{
            width: 620px;
            height: 620px;
            top: -180px;
            left: -140px;
            background-color: {accent_color};
            opacity: 0.45;
        }}

        .shape-two {{
            width: 480px;
            height: 480px;
            bottom: -160px;
            right: -60px;
            background-color: {accent_color};
            opacity: 0.3;
        }}

        .closing-content {{
            position: relative;
            z-index: 2;
        }}

        .logo {{
            height: 90px;
            margin-bottom: 48px;
        }}

        .main-text {{
            font-family: {title_font};
            font-size: 180px;
            font-weight: 400;
            line-height: 1.1;
            margin-bottom: 24px;
        }}

        .closing-subtitle {{
            font-size: 40px;
            letter-spacing: 4px;
            text-transform: uppercase;
            color: {accent_color};
            margin-bottom: 80px;
        }}

        .contacts {{
            display: flex;
            gap: 72px;
            justify-content: center;
        }}

        .contact-line {{
            display: flex;
            flex-direction: column;
            gap: 8px;
        }}

        .contact-label {{
            font-size: 22px;
            font-weight: 700;
            letter-spacing: 3px;
            text-transform: uppercase;
            opacity: 0.65;
        }}

        .contact-value {{
            font-size: 30px;
            font-weight: 500;
        }}"##
    );

    let shapes = if *show_shapes {
        r##"
        <div class="shape shape-one"></div>
        <div class="shape shape-two"></div>"##
    } else {
        ""
    };

    let logo = if logo_url.is_empty() {
        String::new()
    } else {
        format!(r##"
            <img class="logo" src="{logo_url}" alt="">"##)
    };

    let contact_items: String = contacts
        .iter()
        .map(|contact| {
            let ContactLine { label, value } = contact;
            format!(
                r##"
                <div class="contact-line">
                    <span class="contact-label">{label}</span>
                    <span class="contact-value">{value}</span>
                </div>"##
            )
        })
        .collect();

    let body = format!(
        r##"    <div class="slide">
        <div class="backdrop" style="background-image: url('{background_image}');"></div>{shapes}
        <div class="closing-content">{logo}
            <h1 class="main-text">{main_text}</h1>
            <p class="closing-subtitle">{subtitle}</p>
            <div class="contacts">{contact_items}
            </div>
        </div>
    </div>"##
    );

    SlideDocument::new(main_text.as_str())
        .with_fonts(&[title_font, body_font])
        .with_style(style)
        .with_body(body)
        .render()
}
