//! Team page: a row of portrait cards under a centered heading.

use crate::assets::default_image;
use crate::registry::SlideTemplate;
use serde::{Deserialize, Serialize};
use slide_core::{SlideDocument, TeamMember};

/// Widest row before members wrap.
const MAX_COLUMNS: usize = 4;

/// Params for [`generate_team`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub title: String,
    pub subtitle: String,
    pub members: Vec<TeamMember>,
    pub background_color: String,
    pub card_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub title_font: String,
    pub body_font: String,
    /// Circular portraits; square with rounded corners otherwise.
    pub rounded_photos: bool,
}

impl Default for Team {
    fn default() -> Self {
        Self {
            title: "Meet Our Team".to_string(),
            subtitle: "The people behind the work".to_string(),
            members: vec![
                TeamMember::new("Alex Morgan", "Chief Executive Officer", default_image("generate_team", 1)),
                TeamMember::new("Jordan Lee", "Head of Product", default_image("generate_team", 2)),
                TeamMember::new("Sam Rivera", "Lead Engineer", default_image("generate_team", 3)),
                TeamMember::new("Taylor Kim", "Design Director", default_image("generate_team", 4)),
            ],
            background_color: "#F8FAFC".to_string(),
            card_color: "#FFFFFF".to_string(),
            accent_color: "#7C3AED".to_string(),
            text_color: "#0F172A".to_string(),
            title_font: "'Playfair Display', serif".to_string(),
            body_font: "'Nunito Sans', sans-serif".to_string(),
            rounded_photos: true,
        }
    }
}

impl SlideTemplate for Team {
    const NAME: &'static str = "team";

    fn render(&self) -> String {
        generate_team(self)
    }
}

/// Render a team slide, one `team-member` card per entry of `members`.
pub fn generate_team(params: &Team) -> String {
    let Team {
        title,
        subtitle,
        members,
        background_color,
        card_color,
        accent_color,
        text_color,
        title_font,
        body_font,
        rounded_photos,
    } = params;

    let columns = members.len().clamp(1, MAX_COLUMNS);
    let photo_radius = if *rounded_photos { "50%" } else { "24px" };

    let style = format!(
        r##"        body {{
            background-color: {background_color};
            font-family: {body_font};
            color: {text_color};
        }}

        .slide {{
            width: 1920px;
            height: 1080px;
            padding: 110px 140px;
            display: flex;
            flex-direction: column;
            align-items: center;
        }}

        .team-header {{
            text-align: center;
            margin-bottom: 80px;
        }}

        .team-title {{
            font-family: {title_font};
            font-size: 80px;
            font-weight: 700;
            margin-bottom: 18px;
        }}

        .team-subtitle {{
            font-size: 30px;
            color: {accent_color};
            letter-spacing: 2px;
        }}

        .team-grid {{
            width: 100%;
            display: grid;
            grid-template-columns: repeat({columns}, 1fr);
            gap: 48px;
        }}

        .team-member {{
            background-color: {card_color};
            border-radius: 28px;
            padding: 48px 32px 44px;
            text-align: center;
            box-shadow: 0 20px 50px rgba(15, 23, 42, 0.08);
            border-top: 8px solid {accent_color};
        }}

        .member-photo {{
            width: 240px;
            height: 240px;
            margin: 0 auto 32px;
            border-radius: {photo_radius};
            overflow: hidden;
            border: 6px solid color-mix(in srgb, {accent_color} 20%, transparent);
        }}

        .member-photo img {{
            width: 100%;
            height: 100%;
            object-fit: cover;
        }}

        .member-name {{
            font-family: {title_font};
            font-size: 38px;
            font-weight: 700;
            margin-bottom: 10px;
        }}

        .member-role {{
            font-size: 24px;
            font-weight: 600;
            text-transform: uppercase;
            letter-spacing: 2px;
            color: {accent_color};
        }}

        .member-bio {{
            margin-top: 20px;
            font-size: 22px;
            line-height: 1.5;
            opacity: 0.75;
        }}"##
    );

    let cards: String = members
        .iter()
        .map(|member| {
            let TeamMember {
                name,
                role,
                photo_url,
                bio,
            } = member;
            let bio = if bio.is_empty() {
                String::new()
            } else {
                format!(r##"
                <p class="member-bio">{bio}</p>"##)
            };
            format!(
                r##"
            <div class="team-member">
                <div class="member-photo"><img src="{photo_url}" alt="{name}"></div>
                <h3 class="member-name">{name}</h3>
                <p class="member-role">{role}</p>{bio}
            </div>"##
            )
        })
        .collect();

    let body = format!(
        r##"    <div class="slide">
        <div class="team-header">
            <h1 class="team-title">{title}</h1>
            <p class="team-subtitle">{subtitle}</p>
        </div>
        <div class="team-grid">{cards}
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
    fn test_default_members_use_bundled_images() {
        let html = generate_team(&Team::default());
        assert!(html.contains("Image/generate_team/Default_1.png"));
        assert!(html.contains("Image/generate_team/Default_4.png"));
    }

    #[test]
    fn test_one_card_per_member() {
        for count in [0, 1, 4, 6] {
            let params = Team {
                members: (0..count)
                    .map(|i| TeamMember::new(format!("Person {}", i), "Role", "p.png"))
                    .collect(),
                ..Team::default()
            };
            let html = generate_team(&params);
            assert_eq!(html.matches("class=\"team-member\"").count(), count);
        }
    }

    #[test]
    fn test_columns_capped() {
        let six = Team {
            members: vec![TeamMember::default(); 6],
            ..Team::default()
        };
        assert!(generate_team(&six).contains("repeat(4, 1fr)"));

        let two = Team {
            members: vec![TeamMember::default(); 2],
            ..Team::default()
        };
        assert!(generate_team(&two).contains("repeat(2, 1fr)"));

        let none = Team {
            members: Vec::new(),
            ..Team::default()
        };
        assert!(generate_team(&none).contains("repeat(1, 1fr)"));
    }

    #[test]
    fn test_bio_only_when_present() {
        let params = Team {
            members: vec![
                TeamMember::new("A", "R", "a.png").with_bio("Loves maps"),
                TeamMember::new("B", "R", "b.png"),
            ],
            ..Team::default()
        };
        let html = generate_team(&params);
        assert_eq!(html.matches("<p class=\"member-bio\">").count(), 1);
        assert!(html.contains("Loves maps"));
    }

    #[test]
    fn test_photo_shape() {
        let square = generate_team(&Team {
            rounded_photos: false,
            ..Team::default()
        });
        assert!(square.contains("border-radius: 24px;"));
        assert!(generate_team(&Team::default()).contains("border-radius: 50%;"));
    }

    #[test]
    fn test_string_params_reflected() {
        let params = Team {
            title: "UT_TITLE".to_string(),
            subtitle: "UT_SUBTITLE".to_string(),
            members: vec![TeamMember::new("UT_NAME", "UT_ROLE", "UT_PHOTO.png").with_bio("UT_BIO")],
            background_color: "#UT_BG".to_string(),
            card_color: "#UT_CARD".to_string(),
            accent_color: "#UT_ACCENT".to_string(),
            text_color: "#UT_TEXT".to_string(),
            title_font: "UT Title Font".to_string(),
            body_font: "UT Body Font".to_string(),
            rounded_photos: true,
        };
        let html = generate_team(&params);

        for value in [
            "UT_TITLE",
            "UT_SUBTITLE",
            "UT_NAME",
            "UT_ROLE",
            "UT_PHOTO.png",
            "UT_BIO",
            "#UT_BG",
            "#UT_CARD",
            "#UT_ACCENT",
            "#UT_TEXT",
            "UT Title Font",
            "UT Body Font",
        ] {
            assert!(html.contains(value), "missing {}", value);
        }
    }

    #[test]
    fn test_photo_border_with_short_hex() {
        let html = generate_team(&Team {
            accent_color: "#0AF".to_string(),
            ..Team::default()
        });
        assert!(html.contains("6px solid color-mix(in srgb, #0AF 20%, transparent)"));
    }
}
