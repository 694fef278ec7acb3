//! plotpipe demo driver
//!
//! Streams a 2D sine curve and a 3D surface to a locally installed gnuplot,
//! then exports the surface to a PNG.
//!
//! Usage:
//! ```bash
//! PLOTPIPE_BACKEND=gnuplot cargo run --bin plotpipe-demo
//! ```

use anyhow::{bail, Result};
use plotpipe::{PlotSession, PlotStyle, Point2D, Point3D, RenderTarget, SessionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plotpipe=debug".into()),
        )
        .init();

    let command = std::env::var("PLOTPIPE_BACKEND")
        .unwrap_or_else(|_| plotpipe::config::DEFAULT_COMMAND.to_string());
    let mut session = PlotSession::spawn(SessionConfig::with_command(command));
    if !session.is_opened() {
        bail!("could not spawn the plotting backend; is gnuplot on PATH?");
    }

    // 2D: one period of a sine wave
    let sine: Vec<Point2D> = (0..=200)
        .map(|i| {
            let x = i as f64 * std::f64::consts::TAU / 200.0;
            Point2D::new(x, x.sin())
        })
        .collect();
    session.set_title("sin(x)")?;
    session.set_x_label("x")?;
    session.set_y_label("sin(x)")?;
    session.set_grid()?;
    session.plot_2d(&sine, PlotStyle::Lines)?;

    // 3D: a ripple surface on a 40x40 grid, grouped by x for the formatter
    let mut ripple = Vec::new();
    for i in 0..40 {
        let x = (i as f64 - 20.0) / 4.0;
        for j in 0..40 {
            let y = (j as f64 - 20.0) / 4.0;
            let r = (x * x + y * y).sqrt();
            ripple.push(Point3D::new(x, y, r.cos() / (1.0 + r)));
        }
    }
    session.reset()?;
    session.set_title("ripple")?;
    session.plot_3d_surface(&ripple)?;
    session.export(&RenderTarget::file("ripple.png", 1024, 768))?;

    session.close();
    println!("done; surface written to ripple.png");
    Ok(())
}
