//! Configuration types for Radiant diagram layout and rendering.
//!
//! All types implement [`serde::Deserialize`] so hosts can load them from
//! TOML or any other serde format. Every field has a default, so a partial
//! configuration only overrides what it names.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Node sizing, margins and connector clearance.
//! - [`StyleConfig`] - Colors, fonts and the connector stroke.
//!
//! A diagram copies its [`LayoutConfig`] when it is built, so changing a
//! configuration afterwards only affects diagrams built later.
//!
//! # Example
//!
//! ```
//! # use radiant::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().img_size(), 64.0);
//! assert!(config.style().connector_stroke().is_ok());
//! ```

use serde::Deserialize;

use radiant_core::{
    color::Color,
    draw::{StrokeCap, StrokeDefinition, StrokeStyle, TextDefinition},
};

use crate::RadiantError;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Geometry constants used to size nodes, derive the placement radius and
/// clip connectors.
///
/// | Field | Default |
/// |-------|---------|
/// | `img_size` | 64 |
/// | `text_margin` | 10 |
/// | `vertical_margin` | 15 |
/// | `horizontal_margin` | 15 |
/// | `font_size` | 14 |
/// | `connector_margin` | 5 |
/// | `start_angle` | 0 |
/// | `movable` | true |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    img_size: f32,
    text_margin: f32,
    vertical_margin: f32,
    horizontal_margin: f32,
    font_size: u16,
    connector_margin: f32,
    start_angle: f32,
    movable: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            img_size: 64.0,
            text_margin: 10.0,
            vertical_margin: 15.0,
            horizontal_margin: 15.0,
            font_size: 14,
            connector_margin: 5.0,
            start_angle: 0.0,
            movable: true,
        }
    }
}

impl LayoutConfig {
    /// Edge length of the square node image.
    pub fn img_size(&self) -> f32 {
        self.img_size
    }

    /// Gap between a node image and its label.
    pub fn text_margin(&self) -> f32 {
        self.text_margin
    }

    /// Margin subtracted from the horizontal half-extent of the canvas.
    pub fn vertical_margin(&self) -> f32 {
        self.vertical_margin
    }

    /// Margin subtracted from the vertical half-extent of the canvas.
    pub fn horizontal_margin(&self) -> f32 {
        self.horizontal_margin
    }

    /// Node label font size.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Clearance between a connector endpoint and the box it touches.
    pub fn connector_margin(&self) -> f32 {
        self.connector_margin
    }

    /// Angle of the first satellite, in degrees clockwise from +x.
    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    /// Whether the diagram reacts to drag gestures.
    pub fn movable(&self) -> bool {
        self.movable
    }

    pub fn with_img_size(mut self, img_size: f32) -> Self {
        self.img_size = img_size;
        self
    }

    pub fn with_text_margin(mut self, text_margin: f32) -> Self {
        self.text_margin = text_margin;
        self
    }

    pub fn with_margins(mut self, vertical: f32, horizontal: f32) -> Self {
        self.vertical_margin = vertical;
        self.horizontal_margin = horizontal;
        self
    }

    pub fn with_font_size(mut self, font_size: u16) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_connector_margin(mut self, connector_margin: f32) -> Self {
        self.connector_margin = connector_margin;
        self
    }

    pub fn with_start_angle(mut self, start_angle: f32) -> Self {
        self.start_angle = start_angle;
        self
    }

    pub fn with_movable(mut self, movable: bool) -> Self {
        self.movable = movable;
        self
    }

    /// Checks that every length is finite and usable for layout.
    ///
    /// # Errors
    ///
    /// Returns [`RadiantError::Configuration`] for a non-positive image size,
    /// a negative connector margin or any non-finite value.
    pub fn validate(&self) -> Result<(), RadiantError> {
        if !self.img_size.is_finite() || self.img_size <= 0.0 {
            return Err(RadiantError::Configuration(format!(
                "img_size must be a positive number, got {}",
                self.img_size
            )));
        }
        if !self.connector_margin.is_finite() || self.connector_margin < 0.0 {
            return Err(RadiantError::Configuration(format!(
                "connector_margin must be a non-negative number, got {}",
                self.connector_margin
            )));
        }
        let finite = [
            ("text_margin", self.text_margin),
            ("vertical_margin", self.vertical_margin),
            ("horizontal_margin", self.horizontal_margin),
            ("start_angle", self.start_angle),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(RadiantError::Configuration(format!(
                "{name} must be finite, got {value}"
            )));
        }
        Ok(())
    }
}

/// Visual styling of the rendered diagram.
///
/// Colors are kept as strings and parsed on use, so an invalid color is
/// reported as a configuration error when the diagram is rendered.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    font_family: String,
    line_color: String,
    line_opacity: f32,
    line_width: f32,
    line_dasharray: String,
    line_cap: String,
    label_background: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            font_family: "Arial".to_string(),
            line_color: "#888888".to_string(),
            line_opacity: 0.6,
            line_width: 2.0,
            line_dasharray: "10 4".to_string(),
            line_cap: "round".to_string(),
            label_background: Some("white".to_string()),
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns [`RadiantError::Configuration`] if the color string is invalid.
    pub fn background_color(&self) -> Result<Option<Color>, RadiantError> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(RadiantError::from)
    }

    /// Builds the stroke used for every connector line.
    ///
    /// # Errors
    ///
    /// Returns [`RadiantError::Configuration`] for an invalid color, cap or
    /// dash pattern.
    pub fn connector_stroke(&self) -> Result<StrokeDefinition, RadiantError> {
        let color = Color::new(&self.line_color)?.with_alpha(self.line_opacity);
        let style: StrokeStyle = self
            .line_dasharray
            .parse()
            .map_err(RadiantError::Configuration)?;
        let cap: StrokeCap = self.line_cap.parse().map_err(RadiantError::Configuration)?;

        let mut stroke = StrokeDefinition::new(color, self.line_width);
        stroke.set_style(style);
        stroke.set_cap(cap);
        Ok(stroke)
    }

    /// Text style for node labels.
    pub fn node_text(&self, layout: &LayoutConfig) -> TextDefinition {
        let mut text = TextDefinition::new();
        text.set_font_family(&self.font_family);
        text.set_font_size(layout.font_size());
        text
    }

    /// Text style for connector labels, painted over a background so the
    /// line does not run through the glyphs.
    ///
    /// # Errors
    ///
    /// Returns [`RadiantError::Configuration`] if the label background color is invalid.
    pub fn connector_text(&self, layout: &LayoutConfig) -> Result<TextDefinition, RadiantError> {
        let mut text = self.node_text(layout);
        let background = self.label_background.as_deref().map(Color::new).transpose()?;
        text.set_background_color(background);
        Ok(text)
    }
}
