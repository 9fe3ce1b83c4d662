//! Name-based template lookup for callers holding JSON content.

use crate::agenda::Agenda;
use crate::closing::ThankYou;
use crate::comparison::Comparison;
use crate::content::ContentPoints;
use crate::features::FeatureGrid;
use crate::image_text::ImageText;
use crate::metrics::Metrics;
use crate::quote::Quote;
use crate::section::SectionHeader;
use crate::team::Team;
use crate::timeline::Timeline;
use crate::title::TitleSlide;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use slide_core::{Error, ParamNormalizer, Result};
use std::fmt;
use std::str::FromStr;

/// Prefix of the generator functions, accepted in template names.
const GENERATOR_PREFIX: &str = "generate_";

/// A slide design: a params record that renders itself to HTML.
pub trait SlideTemplate: Default + Serialize + DeserializeOwned {
    /// Registry name.
    const NAME: &'static str;

    /// Render the complete HTML document.
    fn render(&self) -> String;
}

/// Every template in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    TitleSlide,
    SectionHeader,
    ContentPoints,
    Agenda,
    Team,
    Timeline,
    Comparison,
    ImageText,
    Quote,
    Metrics,
    FeatureGrid,
    ThankYou,
}

impl TemplateKind {
    /// All templates, in catalogue order.
    pub fn all() -> &'static [TemplateKind] {
        &[
            TemplateKind::TitleSlide,
            TemplateKind::SectionHeader,
            TemplateKind::ContentPoints,
            TemplateKind::Agenda,
            TemplateKind::Team,
            TemplateKind::Timeline,
            TemplateKind::Comparison,
            TemplateKind::ImageText,
            TemplateKind::Quote,
            TemplateKind::Metrics,
            TemplateKind::FeatureGrid,
            TemplateKind::ThankYou,
        ]
    }

    /// Registry name of the template.
    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::TitleSlide => TitleSlide::NAME,
            TemplateKind::SectionHeader => SectionHeader::NAME,
            TemplateKind::ContentPoints => ContentPoints::NAME,
            TemplateKind::Agenda => Agenda::NAME,
            TemplateKind::Team => Team::NAME,
            TemplateKind::Timeline => Timeline::NAME,
            TemplateKind::Comparison => Comparison::NAME,
            TemplateKind::ImageText => ImageText::NAME,
            TemplateKind::Quote => Quote::NAME,
            TemplateKind::Metrics => Metrics::NAME,
            TemplateKind::FeatureGrid => FeatureGrid::NAME,
            TemplateKind::ThankYou => ThankYou::NAME,
        }
    }

    /// Look up a template by registry name or generator function name.
    ///
    /// `title_slide` and `generate_title_slide` both resolve; matching is
    /// case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.trim().to_lowercase();
        let bare = lowered
            .strip_prefix(GENERATOR_PREFIX)
            .unwrap_or(lowered.as_str());
        Self::all().iter().copied().find(|kind| kind.name() == bare)
    }

    /// Render with params decoded from JSON.
    pub fn render_value(self, params: Value) -> Result<String> {
        match self {
            TemplateKind::TitleSlide => render_as::<TitleSlide>(params),
            TemplateKind::SectionHeader => render_as::<SectionHeader>(params),
            TemplateKind::ContentPoints => render_as::<ContentPoints>(params),
            TemplateKind::Agenda => render_as::<Agenda>(params),
            TemplateKind::Team => render_as::<Team>(params),
            TemplateKind::Timeline => render_as::<Timeline>(params),
            TemplateKind::Comparison => render_as::<Comparison>(params),
            TemplateKind::ImageText => render_as::<ImageText>(params),
            TemplateKind::Quote => render_as::<Quote>(params),
            TemplateKind::Metrics => render_as::<Metrics>(params),
            TemplateKind::FeatureGrid => render_as::<FeatureGrid>(params),
            TemplateKind::ThankYou => render_as::<ThankYou>(params),
        }
    }

    /// Render the placeholder slide.
    pub fn render_default(self) -> String {
        match self {
            TemplateKind::TitleSlide => TitleSlide::default().render(),
            TemplateKind::SectionHeader => SectionHeader::default().render(),
            TemplateKind::ContentPoints => ContentPoints::default().render(),
            TemplateKind::Agenda => Agenda::default().render(),
            TemplateKind::Team => Team::default().render(),
            TemplateKind::Timeline => Timeline::default().render(),
            TemplateKind::Comparison => Comparison::default().render(),
            TemplateKind::ImageText => ImageText::default().render(),
            TemplateKind::Quote => Quote::default().render(),
            TemplateKind::Metrics => Metrics::default().render(),
            TemplateKind::FeatureGrid => FeatureGrid::default().render(),
            TemplateKind::ThankYou => ThankYou::default().render(),
        }
    }

    /// JSON form of the template's placeholder params.
    pub fn defaults(self) -> Value {
        match self {
            TemplateKind::TitleSlide => defaults_of::<TitleSlide>(),
            TemplateKind::SectionHeader => defaults_of::<SectionHeader>(),
            TemplateKind::ContentPoints => defaults_of::<ContentPoints>(),
            TemplateKind::Agenda => defaults_of::<Agenda>(),
            TemplateKind::Team => defaults_of::<Team>(),
            TemplateKind::Timeline => defaults_of::<Timeline>(),
            TemplateKind::Comparison => defaults_of::<Comparison>(),
            TemplateKind::ImageText => defaults_of::<ImageText>(),
            TemplateKind::Quote => defaults_of::<Quote>(),
            TemplateKind::Metrics => defaults_of::<Metrics>(),
            TemplateKind::FeatureGrid => defaults_of::<FeatureGrid>(),
            TemplateKind::ThankYou => defaults_of::<ThankYou>(),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemplateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownTemplate(s.to_string()))
    }
}

/// Render the template registered under `name` with JSON params.
///
/// `params` may be `null` (all defaults) or an object naming any subset of
/// the template's fields.
pub fn render(name: &str, params: Value) -> Result<String> {
    let kind: TemplateKind = name.parse()?;
    kind.render_value(params)
}

fn defaults_of<T: SlideTemplate>() -> Value {
    serde_json::to_value(T::default()).unwrap_or(Value::Null)
}

fn render_as<T: SlideTemplate>(params: Value) -> Result<String> {
    let normalizer = ParamNormalizer::new(T::NAME, defaults_of::<T>());
    let params = normalizer.normalize(params)?;

    let params: T = serde_json::from_value(params).map_err(|source| Error::InvalidParams {
        template: T::NAME.to_string(),
        source,
    })?;

    log::debug!("Rendering {}", T::NAME);
    Ok(params.render())
}
