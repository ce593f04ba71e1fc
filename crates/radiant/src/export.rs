//! Output backends for rendered diagrams.

pub mod svg;

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failure while writing rendered output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
