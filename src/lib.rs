//! plotpipe - a thin session wrapper around gnuplot's text protocol
//!
//! Spawns the plotting backend as a child process and writes line-oriented
//! commands to its stdin: titles, ranges, styles, inline data blocks,
//! image export. There is no pipeline and no state beyond the open channel;
//! the one subtle piece is the inline-data serialization in [`format`],
//! which inserts blank-line run boundaries for 3D surface and colormap
//! plots.
//!
//! Module organization:
//! - `session`: backend process and protocol transmission
//! - `format`: point types and inline-data block serialization
//! - `style`: plot style tokens
//! - `render`: interactive/file render targets
//! - `config`: backend invocation and terminal configuration
//! - `error`: crate error type
//!
//! ```no_run
//! use plotpipe::{PlotSession, PlotStyle, Point2D};
//!
//! let mut session = PlotSession::spawn_default();
//! if session.is_opened() {
//!     session.set_title("squares")?;
//!     let series: Vec<Point2D> = (0..10)
//!         .map(|i| Point2D::new(i as f64, (i * i) as f64))
//!         .collect();
//!     session.plot_2d(&series, PlotStyle::LinesPoints)?;
//! }
//! # Ok::<(), plotpipe::PlotError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod render;
pub mod session;
pub mod style;

pub use config::SessionConfig;
pub use error::{PlotError, Result};
pub use format::{format_2d, format_3d_colormap, format_3d_surface, Point2D, Point3D};
pub use render::RenderTarget;
pub use session::PlotSession;
pub use style::{PlotStyle, ALL_STYLES};
