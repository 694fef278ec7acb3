//! Render targets
//!
//! Where a finished plot goes: the interactive display window, or an image
//! file with explicit pixel dimensions. File parameters are validated up
//! front so a bad export fails before any protocol line is written.

use crate::error::{PlotError, Result};
use serde::{Deserialize, Serialize};

/// Destination for a rendered plot
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderTarget {
    /// Backend's interactive display window, no extra parameters
    #[default]
    Interactive,
    /// Image file export with explicit pixel dimensions
    File {
        path: String,
        width: u32,
        height: u32,
    },
}

impl RenderTarget {
    /// File target from path and dimensions
    pub fn file(path: impl Into<String>, width: u32, height: u32) -> Self {
        RenderTarget::File {
            path: path.into(),
            width,
            height,
        }
    }

    /// Check target parameters before use.
    ///
    /// Interactive targets are always valid. File targets require a
    /// non-empty path and strictly positive width and height.
    pub fn validate(&self) -> Result<()> {
        match self {
            RenderTarget::Interactive => Ok(()),
            RenderTarget::File {
                path,
                width,
                height,
            } => {
                if path.trim().is_empty() {
                    return Err(PlotError::InvalidArgument(
                        "export path is empty".to_string(),
                    ));
                }
                if *width == 0 || *height == 0 {
                    return Err(PlotError::InvalidArgument(format!(
                        "export dimensions must be positive, got {}x{}",
                        width, height
                    )));
                }
                Ok(())
            }
        }
    }
}
