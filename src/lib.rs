//! Recursive patterns drawn where you click.
//!
//! A [`Controller`](controller::Controller) keeps the current [`Pattern`](pattern::Pattern)
//! and [`BlendMode`](blend::BlendMode) and turns UI events into strokes on a
//! [`DrawSurface`](surface::DrawSurface). Three patterns are available:
//! - triangles hanging from the vertices of a parent triangle,
//! - a binary tree of branches turning ±30°,
//! - squares split into quadrants, every square in its own colour.
//!
//! Each click runs its pattern to completion; the recursion stops once the shapes get
//! below a few pixels.
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   fractal_click::{
//! #     controller::{Config, Controller},
//! #     geometry::P2,
//! #     surface::Canvas,
//! #   },
//! #   anyhow::Result,
//! #   image::Rgba
//! # };
//! # fn main() -> Result<()> {
//! let config = Config { width: 800, height: 600, seed: Some(0), ..Default::default() };
//! let mut controller = Controller::<Canvas>::from_config(&config)?;
//!
//! controller.click(P2::new(400.0, 50.0)); // triangles
//! controller.cycle_pattern();
//! controller.cycle_blend_mode();           // affects only what is drawn next
//! controller.click(P2::new(100.0, 300.0)); // branches
//!
//! controller.into_surface()
//!   .flatten(Rgba([255, 255, 255, 255]))  // transparent canvas over white
//!   .save("out.png")?;
//! #   Ok(())
//! # }
//! ```
//!
//! Surfaces other than the raster [`Canvas`](surface::Canvas) only need to implement
//! [`DrawSurface`](surface::DrawSurface); [`Recorder`](surface::Recorder) keeps the
//! issued operations instead of drawing them.

pub mod error;
pub mod util;
pub mod geometry;
pub mod blend;
pub mod surface;
pub mod pattern;
pub mod controller;
pub mod script;
