//! Record types for the repeated items that slide templates lay out.

use serde::{Deserialize, Serialize};

/// A person shown on a team slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    /// Display name.
    pub name: String,

    /// Job title or role line under the name.
    pub role: String,

    /// Portrait image URL or relative path.
    pub photo_url: String,

    /// Optional one-line bio. Omitted from the markup when empty.
    pub bio: String,
}

impl TeamMember {
    /// Create a member with a name, role and photo.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        photo_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            photo_url: photo_url.into(),
            bio: String::new(),
        }
    }

    /// Attach a short bio.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }
}

/// One phase of a roadmap or timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelinePhase {
    /// Short label such as "Q1 2026" or "Phase 1".
    pub period: String,

    /// Phase heading.
    pub title: String,

    /// One or two sentences describing the phase.
    pub description: String,
}

impl TimelinePhase {
    pub fn new(
        period: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            period: period.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A column of a side-by-side comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonColumn {
    /// Column heading.
    pub heading: String,

    /// Bullet points listed under the heading.
    pub points: Vec<String>,

    /// Draw this column with the accent background.
    pub highlighted: bool,
}

impl ComparisonColumn {
    pub fn new<I, S>(heading: impl Into<String>, points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            heading: heading.into(),
            points: points.into_iter().map(Into::into).collect(),
            highlighted: false,
        }
    }

    /// Mark the column as the highlighted one.
    pub fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }
}

/// A headline number with its caption.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    /// The figure itself, already formatted ("98%", "$4.2M").
    pub value: String,

    /// Caption under the figure.
    pub label: String,
}

impl Metric {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A feature card: icon, title and description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub title: String,

    pub description: String,

    /// Inline `<svg>` markup. Inserted as-is.
    pub icon_svg: String,
}

impl Feature {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon_svg: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon_svg: icon_svg.into(),
        }
    }
}

/// A labelled contact detail ("Email", "hello@example.com").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactLine {
    pub label: String,

    pub value: String,
}

impl ContactLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
