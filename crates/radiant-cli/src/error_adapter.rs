//! Error adapter for converting RadiantError to miette diagnostics.
//!
//! The library reports plain [`RadiantError`]s. The CLI wraps them so
//! miette can render them with an error code and, where the fix is usually
//! obvious, a hint.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use radiant::RadiantError;

/// Adapter giving a [`RadiantError`] a miette code and help text.
pub struct ErrorAdapter<'a>(pub &'a RadiantError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            RadiantError::Io(_) => "radiant::io",
            RadiantError::Configuration(_) => "radiant::configuration",
            RadiantError::Input(_) => "radiant::input",
            RadiantError::Export(_) => "radiant::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            RadiantError::Input(_) => {
                "the input needs a [central] table and optional [[satellites]] entries"
            }
            RadiantError::Configuration(msg) if msg.contains("too small") => {
                "use a larger --width/--height or a smaller layout.img_size"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// Convert a [`RadiantError`] into the list of diagnostics to render.
///
/// Library errors are never aggregated, so the list holds one entry.
pub fn to_reportables(err: &RadiantError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}
