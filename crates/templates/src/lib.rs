//! Hand-designed 1920x1080 HTML slide templates.
//!
//! Each module holds one bespoke design: a params struct whose `Default` is a
//! fully styled placeholder slide, and a `generate_*` function that formats
//! it into a self-contained HTML document. The [`registry`] maps names to
//! templates for callers that hold content as JSON.

pub mod agenda;
pub mod assets;
pub mod closing;
pub mod comparison;
pub mod content;
pub mod features;
pub mod image_text;
pub mod metrics;
pub mod quote;
pub mod registry;
pub mod section;
pub mod team;
pub mod timeline;
pub mod title;

pub use agenda::{generate_agenda, Agenda};
pub use closing::{generate_thank_you, ThankYou};
pub use comparison::{generate_comparison, Comparison};
pub use content::{generate_content_points, ContentPoints};
pub use features::{generate_feature_grid, FeatureGrid};
pub use image_text::{generate_image_text, ImageText};
pub use metrics::{generate_metrics, Metrics};
pub use quote::{generate_quote, Quote};
pub use registry::{render, SlideTemplate, TemplateKind};
pub use section::{generate_section_header, SectionHeader};
pub use team::{generate_team, Team};
pub use timeline::{generate_timeline, Timeline};
pub use title::{generate_title_slide, TitleSlide};

pub use slide_core::{
    ComparisonColumn, ContactLine, Error, Feature, Metric, Result, TeamMember, TimelinePhase,
};
