//! Display surfaces for sequences and structures.
//!
//! This module turns extracted sequences and normalized color ranges into the artifacts the
//! two renderers consume: hoverable sequence markup, 3D viewer style directives and the
//! 3Dmol.js program that applies them, and a self-contained HTML page combining both.

mod config;
mod directive;
mod display;
mod page;
mod viewer;

pub use directive::{Representation, ResidueSpan, StyleDirective, UnknownRepresentation};

pub use display::{RESIDUES_PER_LINE, SEQUENCE_CSS, sequence_display_html};

pub use viewer::{DEFAULT_BACKGROUND, ViewerConfig, viewer_script};

pub use page::{NO_SEQUENCE_MESSAGE, PageContent, VIEWER_LIBRARY_URL, render_page};

pub use config::{ConfigError, RenderConfig};
