//! The diagram description file read by the CLI.
//!
//! ```toml
//! [canvas]
//! width = 500
//! height = 400
//!
//! [central]
//! label = "Gateway"
//! image = "img/gateway.png"
//!
//! [[satellites]]
//! id = "auth"
//! label = "Auth"
//! image = "img/auth.png"
//! connect_label = "tokens"
//! ```

use std::{fs, path::Path};

use log::debug;
use serde::Deserialize;

use radiant::{DiagramSpec, NodeSpec, RadiantError, geometry::Size};

/// Canvas size used when neither the input file nor the command line sets one.
const DEFAULT_CANVAS: f32 = 400.0;

#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct CanvasSection {
    width: Option<f32>,
    height: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct InputFile {
    #[serde(default)]
    canvas: CanvasSection,
    central: NodeSpec,
    #[serde(default)]
    satellites: Vec<NodeSpec>,
}

/// A parsed input file.
#[derive(Debug)]
pub struct Input {
    spec: DiagramSpec,
    canvas: CanvasSection,
}

impl Input {
    pub fn spec(&self) -> &DiagramSpec {
        &self.spec
    }

    /// Canvas size, preferring the given overrides over the file's values.
    pub fn canvas_size(&self, width: Option<f32>, height: Option<f32>) -> Size {
        Size::new(
            width.or(self.canvas.width).unwrap_or(DEFAULT_CANVAS),
            height.or(self.canvas.height).unwrap_or(DEFAULT_CANVAS),
        )
    }
}

/// Parses a diagram description.
///
/// # Errors
///
/// Returns [`RadiantError::Input`] if the TOML is malformed or lacks a
/// `[central]` table.
pub fn parse(source: &str) -> Result<Input, RadiantError> {
    let file: InputFile =
        toml::from_str(source).map_err(|err| RadiantError::Input(err.to_string()))?;
    debug!(satellites = file.satellites.len(); "Input parsed");

    Ok(Input {
        spec: DiagramSpec::new(file.central, file.satellites),
        canvas: file.canvas,
    })
}

/// Reads and parses the diagram description at `path`.
///
/// # Errors
///
/// Returns [`RadiantError::Io`] if the file cannot be read, otherwise as
/// [`parse`].
pub fn load(path: &Path) -> Result<Input, RadiantError> {
    let source = fs::read_to_string(path)?;
    parse(&source)
}
