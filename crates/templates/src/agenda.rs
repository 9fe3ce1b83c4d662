//! Agenda slide: colored sidebar with the heading, item list on the right.
//!
//! More than five items switch the list to two columns.

use crate::registry::SlideTemplate;
use serde::{Deserialize, Serialize};
use slide_core::SlideDocument;

/// Items that fit in a single column.
const SINGLE_COLUMN_MAX: usize = 5;

/// Params for [`generate_agenda`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Agenda {
    pub title: String,
    pub tagline: String,
    pub items: Vec<String>,
    pub sidebar_color: String,
    pub background_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub title_font: String,
    pub body_font: String,
    pub show_numbers: bool,
}

impl Default for Agenda {
    fn default() -> Self {
        Self {
            title: "Agenda".to_string(),
            tagline: "What we will cover today".to_string(),
            items: vec![
                "Introduction".to_string(),
                "Market Overview".to_string(),
                "Our Solution".to_string(),
                "Business Model".to_string(),
                "Next Steps".to_string(),
            ],
            sidebar_color: "#0B3D2E".to_string(),
            background_color: "#F7F5F0".to_string(),
            accent_color: "#E9C46A".to_string(),
            text_color: "#1F2937".to_string(),
            title_font: "'DM Serif Display', serif".to_string(),
            body_font: "'DM Sans', sans-serif".to_string(),
            show_numbers: true,
        }
    }
}

impl SlideTemplate for Agenda {
    const NAME: &'static str = "agenda";

    fn render(&self) -> String {
        generate_agenda(self)
    }
}

/// Render an agenda slide, one `agenda-item` per entry of `items`.
pub fn generate_agenda(params: &Agenda) -> String {
    let Agenda {
        title,
        tagline,
        items,
        sidebar_color,
        background_color,
        accent_color,
        text_color,
        title_font,
        body_font,
        show_numbers,
    } = params;

    let columns = if items.len() > SINGLE_COLUMN_MAX { 2 } else { 1 };

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
        }}

        .sidebar {{
            width: 640px;
            height: 1080px;
            background-color: {sidebar_color};
            color: {background_color};
            padding: 140px 90px;
            display: flex;
            flex-direction: column;
            justify-content: flex-end;
            position: relative;
        }}

        .sidebar::before {{
            content: "";
            position: absolute;
            top: 120px;
            left: 90px;
            width: 120px;
            height: 120px;
            border: 6px solid {accent_color};
            border-radius: 50%;
        }}

        .agenda-title {{
            font-family: {title_font};
            font-size: 120px;
            font-weight: 400;
            line-height: 1;
            margin-bottom: 32px;
        }}

        .agenda-tagline {{
            font-size: 30px;
            line-height: 1.4;
            opacity: 0.8;
        }}

        .agenda-list {{
            flex: 1;
            list-style: none;
            padding: 140px 120px;
            display: grid;
            grid-template-columns: repeat({columns}, 1fr);
            grid-auto-rows: min-content;
            align-content: center;
            column-gap: 80px;
            row-gap: 28px;
        }}

        .agenda-item {{
            display: flex;
            align-items: center;
            gap: 36px;
            padding: 26px 0;
            border-bottom: 2px solid color-mix(in srgb, {sidebar_color} 13%, transparent);
        }}

        .item-number {{
            font-family: {title_font};
            font-size: 56px;
            color: {accent_color};
            min-width: 80px;
        }}

        .item-text {{
            font-size: 38px;
            font-weight: 500;
        }}"##
    );

    let list_items: String = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let number = if *show_numbers {
                format!(r##"<span class="item-number">{:02}</span>"##, i + 1)
            } else {
                String::new()
            };
            format!(
                r##"
            <li class="agenda-item">{number}<span class="item-text">{item}</span></li>"##
            )
        })
        .collect();

    let body = format!(
        r##"    <div class="slide">
        <aside class="sidebar">
            <h1 class="agenda-title">{title}</h1>
            <p class="agenda-tagline">{tagline}</p>
        </aside>
        <ol class="agenda-list">{list_items}
        </ol>
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

    fn with_items(count: usize) -> Agenda {
        Agenda {
            items: (1..=count).map(|i| format!("Topic {}", i)).collect(),
            ..Agenda::default()
        }
    }

    #[test]
    fn test_one_fragment_per_item() {
        for count in [0, 2, 5, 9] {
            let html = generate_agenda(&with_items(count));
            assert_eq!(html.matches("class=\"agenda-item\"").count(), count);
        }
    }

    #[test]
    fn test_two_columns_for_long_lists() {
        assert!(generate_agenda(&with_items(5)).contains("repeat(1, 1fr)"));
        assert!(generate_agenda(&with_items(6)).contains("repeat(2, 1fr)"));
    }

    #[test]
    fn test_numbers_toggle() {
        let numbered = generate_agenda(&with_items(3));
        assert_eq!(numbered.matches("<span class=\"item-number\">").count(), 3);

        let plain = generate_agenda(&Agenda {
            show_numbers: false,
            ..with_items(3)
        });
        assert_eq!(plain.matches("<span class=\"item-number\">").count(), 0);
    }

    #[test]
    fn test_string_params_reflected() {
        let params = Agenda {
            title: "UT_TITLE".to_string(),
            tagline: "UT_TAGLINE".to_string(),
            items: vec!["UT_ITEM".to_string()],
            sidebar_color: "#UT_SIDEBAR".to_string(),
            background_color: "#UT_BG".to_string(),
            accent_color: "#UT_ACCENT".to_string(),
            text_color: "#UT_TEXT".to_string(),
            title_font: "UT Title Font".to_string(),
            body_font: "UT Body Font".to_string(),
            show_numbers: true,
        };
        let html = generate_agenda(&params);

        for value in [
            "UT_TITLE",
            "UT_TAGLINE",
            "UT_ITEM",
            "#UT_SIDEBAR",
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
