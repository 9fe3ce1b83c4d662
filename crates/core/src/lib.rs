//! Core types, document shell, font links, and input normalization
//! shared by the HTML slide templates.

pub mod document;
pub mod error;
pub mod fonts;
pub mod normalize;
pub mod types;

pub use document::{Canvas, SlideDocument, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use error::{Error, Result};
pub use normalize::ParamNormalizer;
pub use types::{ComparisonColumn, ContactLine, Feature, Metric, TeamMember, TimelinePhase};
