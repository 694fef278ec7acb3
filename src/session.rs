//! Backend session
//!
//! A [`PlotSession`] spawns the plotting backend and owns the write end of
//! its stdin. Every call writes its protocol line(s) and flushes before
//! returning, so the backend observes commands in call order with no
//! buffering surprises.
//!
//! The session is single-writer and synchronous. It is not `Clone` and is
//! not meant to be driven from multiple threads; move it to one owner and
//! pass `&mut` borrows around. Spawn failure is not an error at
//! construction time: it surfaces as `is_opened() == false`, and every
//! subsequent write fails with [`PlotError::NotOpened`].
//!
//! Known limitation, kept for protocol compatibility: string values
//! (titles, labels) are emitted single-quoted without escaping, so an
//! embedded single quote produces a malformed directive.

use crate::config::SessionConfig;
use crate::error::{PlotError, Result};
use crate::format::{format_2d, format_3d_colormap, format_3d_surface, Point2D, Point3D};
use crate::render::RenderTarget;
use crate::style::PlotStyle;
use std::io::Write;
use std::process::{Child, ChildStdin, Command, Stdio};
use tracing::{debug, warn};

/// A live connection to the plotting backend
#[derive(Debug)]
pub struct PlotSession {
    config: SessionConfig,
    backend: Option<Backend>,
}

#[derive(Debug)]
struct Backend {
    child: Child,
    stdin: ChildStdin,
}

impl PlotSession {
    /// Spawn the backend with the default configuration
    pub fn spawn_default() -> Self {
        Self::spawn(SessionConfig::default())
    }

    /// Spawn the backend described by `config`.
    ///
    /// Construction never fails; a backend that cannot be spawned leaves
    /// the session unopened, observable via [`is_opened`](Self::is_opened).
    pub fn spawn(config: SessionConfig) -> Self {
        let backend = match config.invocation() {
            Some((program, args)) => match Command::new(&program)
                .args(&args)
                .stdin(Stdio::piped())
                .spawn()
            {
                Ok(mut child) => match child.stdin.take() {
                    Some(stdin) => {
                        debug!(%program, "plotting backend spawned");
                        Some(Backend { child, stdin })
                    }
                    None => {
                        warn!(%program, "backend spawned without a stdin pipe");
                        let _ = child.kill();
                        let _ = child.wait();
                        None
                    }
                },
                Err(e) => {
                    warn!(%program, error = %e, "failed to spawn plotting backend");
                    None
                }
            },
            None => {
                warn!(command = %config.command, "blank backend invocation");
                None
            }
        };
        PlotSession { config, backend }
    }

    /// Whether the backend channel is open and writable
    pub fn is_opened(&self) -> bool {
        self.backend.is_some()
    }

    /// Close the channel. Idempotent; the backend sees EOF and exits.
    ///
    /// Interactive plot windows stay open when the session was configured
    /// with `persist` (the default).
    pub fn close(&mut self) {
        if let Some(mut backend) = self.backend.take() {
            drop(backend.stdin);
            let _ = backend.child.wait();
            debug!("plotting backend closed");
        }
    }

    fn stdin(&mut self) -> Result<&mut ChildStdin> {
        match self.backend.as_mut() {
            Some(backend) => Ok(&mut backend.stdin),
            None => Err(PlotError::NotOpened),
        }
    }

    /// Send one raw protocol line and flush
    pub fn command(&mut self, line: &str) -> Result<()> {
        let stdin = self.stdin()?;
        debug!(%line, "send");
        writeln!(stdin, "{}", line)?;
        stdin.flush()?;
        Ok(())
    }

    /// Clear all backend settings back to defaults
    pub fn reset(&mut self) -> Result<()> {
        self.command("reset")
    }

    /// Redraw the last plot
    pub fn replot(&mut self) -> Result<()> {
        self.command("replot")
    }

    /// Re-enable autoscaling on all axes
    pub fn set_autoscale(&mut self) -> Result<()> {
        self.command("set autoscale")
    }

    /// Hide the plot legend
    pub fn unset_key(&mut self) -> Result<()> {
        self.command("unset key")
    }

    /// Draw a background grid
    pub fn set_grid(&mut self) -> Result<()> {
        self.command("set grid")
    }

    /// Set the plot title. No quote escaping (see module docs).
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.command(&format!("set title '{}'", title))
    }

    /// Set the x axis label
    pub fn set_x_label(&mut self, label: &str) -> Result<()> {
        self.command(&format!("set xlabel '{}'", label))
    }

    /// Set the y axis label
    pub fn set_y_label(&mut self, label: &str) -> Result<()> {
        self.command(&format!("set ylabel '{}'", label))
    }

    /// Set the z axis label
    pub fn set_z_label(&mut self, label: &str) -> Result<()> {
        self.command(&format!("set zlabel '{}'", label))
    }

    /// Set the visible x range
    pub fn set_x_range(&mut self, minimum: f64, maximum: f64) -> Result<()> {
        check_range("xrange", minimum, maximum)?;
        self.command(&format!("set xrange [{}:{}]", minimum, maximum))
    }

    /// Set the visible y range
    pub fn set_y_range(&mut self, minimum: f64, maximum: f64) -> Result<()> {
        check_range("yrange", minimum, maximum)?;
        self.command(&format!("set yrange [{}:{}]", minimum, maximum))
    }

    /// Set the visible z range
    pub fn set_z_range(&mut self, minimum: f64, maximum: f64) -> Result<()> {
        check_range("zrange", minimum, maximum)?;
        self.command(&format!("set zrange [{}:{}]", minimum, maximum))
    }

    /// Plot a 2D series with the given style
    pub fn plot_2d(&mut self, series: &[Point2D], style: PlotStyle) -> Result<()> {
        let block = format_2d(series);
        self.send_plot(&format!("plot '-' with {}", style), &block, series.len())
    }

    /// Plot a 3D series as a wireframe surface.
    ///
    /// The series must be pre-grouped by x for correct patch boundaries;
    /// see [`format_3d_surface`](crate::format::format_3d_surface).
    pub fn plot_3d_surface(&mut self, series: &[Point3D]) -> Result<()> {
        let block = format_3d_surface(series);
        self.send_plot("splot '-'", &block, series.len())
    }

    /// Plot a 3D series with colormap (pm3d) rendering.
    ///
    /// The series must be pre-grouped by y; see
    /// [`format_3d_colormap`](crate::format::format_3d_colormap).
    pub fn plot_3d_colormap(&mut self, series: &[Point3D]) -> Result<()> {
        let block = format_3d_colormap(series);
        self.send_plot("splot '-' with pm3d", &block, series.len())
    }

    /// Send plot header, inline data block and the `e` terminator, then flush
    fn send_plot(&mut self, header: &str, block: &str, n_points: usize) -> Result<()> {
        let stdin = self.stdin()?;
        debug!(%header, n_points, "send plot");
        writeln!(stdin, "{}", header)?;
        stdin.write_all(block.as_bytes())?;
        writeln!(stdin, "e")?;
        stdin.flush()?;
        Ok(())
    }

    /// Render the last plot to `target`.
    ///
    /// File export switches to the configured image terminal at the
    /// requested pixel size, sets the output path, replots, then restores
    /// the interactive terminal and clears the output target. Parameters
    /// are validated before anything is written.
    pub fn export(&mut self, target: &RenderTarget) -> Result<()> {
        target.validate()?;
        match target {
            RenderTarget::Interactive => self.replot(),
            RenderTarget::File {
                path,
                width,
                height,
            } => {
                let image_terminal = self.config.image_terminal.clone();
                let interactive_terminal = self.config.interactive_terminal.clone();
                self.command(&format!(
                    "set terminal {} size {},{}",
                    image_terminal, width, height
                ))?;
                self.command(&format!("set output '{}'", path))?;
                self.replot()?;
                self.command(&format!("set terminal {}", interactive_terminal))?;
                self.command("set output")
            }
        }
    }
}

impl Drop for PlotSession {
    fn drop(&mut self) {
        self.close();
    }
}

/// Reject non-finite or inverted range bounds
fn check_range(axis: &str, minimum: f64, maximum: f64) -> Result<()> {
    if !minimum.is_finite() || !maximum.is_finite() {
        return Err(PlotError::InvalidArgument(format!(
            "{} bounds must be finite, got [{}:{}]",
            axis, minimum, maximum
        )));
    }
    if minimum > maximum {
        return Err(PlotError::InvalidArgument(format!(
            "{} minimum {} exceeds maximum {}",
            axis, minimum, maximum
        )));
    }
    Ok(())
}
