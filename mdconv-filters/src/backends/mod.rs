//! Conversion backends
//!
//! - [`embedded`]: comrak, in process, markdown → html only
//! - [`pandoc`]: one external pandoc process per conversion, any dialect pair

use serde::Serialize;
use std::fmt;

pub mod embedded;
pub mod pandoc;

pub use embedded::{Availability, EmbeddedOptions, EmbeddedRenderer};
pub use pandoc::{PandocBackend, PandocVersion};

/// Which engine renders a given filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Embedded,
    Pandoc,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Embedded => f.pad("embedded"),
            BackendKind::Pandoc => f.pad("pandoc"),
        }
    }
}
