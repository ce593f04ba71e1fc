//! Text style definitions and font-based text measurement.
//!
//! Node labels and connector labels are described by a [`TextDefinition`]
//! and measured with [`measure_text`], which shapes the string with
//! cosmic-text so label bounding boxes follow real font metrics.
//!
//! ```
//! # use radiant_core::draw::{TextDefinition, measure_text};
//! let mut style = TextDefinition::new();
//! style.set_font_size(14);
//!
//! let size = measure_text(&style, "Database");
//! assert!(size.height() > 0.0);
//! ```

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;

use crate::{color::Color, geometry::Size};

/// Defines the visual style of a text element.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `14` |
/// | Background color | `None` |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    background_color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family for the text.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the color painted behind the text.
    ///
    /// Connector labels use this so the dashed line does not run through
    /// the glyphs.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 14,
            background_color: None,
        }
    }
}

/// Measures the rendered size of `text` with the given style.
///
/// Empty strings measure as zero. Multi-line strings stack one line height
/// per line.
pub fn measure_text(definition: &TextDefinition, text: &str) -> Size {
    TEXT_MANAGER
        .get_or_init(TextManager::new)
        .calculate_text_size(text, definition)
}

/// Holds the shared FontSystem used for measurement.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        // Points to pixels at standard DPI
        let font_size_px = text_def.font_size() as f32 * 1.33;
        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(text_def.font_family()));
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += metrics.line_height;
            }
        }

        // No fonts available on this system: estimate from character count
        if max_width == 0.0 {
            let longest = text.lines().map(|line| line.chars().count()).max();
            max_width = longest.unwrap_or_default() as f32 * (font_size_px * 0.55);
        }
        if total_height == 0.0 {
            total_height = text.lines().count().max(1) as f32 * metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
