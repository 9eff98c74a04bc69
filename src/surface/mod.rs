//! Draw surfaces the patterns are drawn on.
//!
//! [`Canvas`] rasterizes into an [`image::RgbaImage`], [`Recorder`] only keeps the list
//! of issued operations.

use {
  crate::{
    blend::BlendMode,
    geometry::{P2, S2}
  },
  anyhow::{bail, Context, Result},
  image::Rgba
};

mod canvas;
#[cfg(test)] mod tests;
pub use canvas::Canvas;

/// Stroke operations consumed by the patterns.
pub trait DrawSurface {
  /// Closed outline through `points`.
  fn stroke_polygon(&mut self, points: &[P2]);
  fn stroke_line(&mut self, from: P2, to: P2);
  fn stroke_rect(&mut self, origin: P2, size: S2);
  /// Colour of subsequent strokes, channels in `[0, 1]`.
  fn set_stroke_color(&mut self, color: Rgba<f32>);
  /// Compositing rule of subsequent strokes. Existing content is left as is.
  fn set_blend_mode(&mut self, mode: BlendMode);
  /// Reset the whole surface to transparent.
  fn clear(&mut self);
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
  pub line_width: f32,
  /// Multiplied into the alpha of every stroke.
  pub global_alpha: f32,
}

impl Default for Style {
  fn default() -> Self {
    Self {
      line_width: 2.0,
      global_alpha: 0.5,
    }}}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
  Polygon(Vec<P2>),
  Line(P2, P2),
  Rect(P2, S2),
  StrokeColor(Rgba<f32>),
  BlendMode(BlendMode),
  Clear,
}

impl DrawOp {
  pub fn is_stroke(&self) -> bool {
    matches!(self, DrawOp::Polygon(_) | DrawOp::Line(..) | DrawOp::Rect(..))
  }
}

/// Keeps every call, draws nothing.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
  pub ops: Vec<DrawOp>
}

impl Recorder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn strokes(&self) -> impl Iterator<Item = &DrawOp> + '_ {
    self.ops.iter().filter(|op| op.is_stroke())
  }

  pub fn rects(&self) -> Vec<(P2, S2)> {
    self.ops.iter()
      .filter_map(|op| match op {
        DrawOp::Rect(origin, size) => Some((*origin, *size)),
        _ => None
      })
      .collect()
  }
}

impl DrawSurface for Recorder {
  fn stroke_polygon(&mut self, points: &[P2]) {
    self.ops.push(DrawOp::Polygon(points.to_vec()));
  }
  fn stroke_line(&mut self, from: P2, to: P2) {
    self.ops.push(DrawOp::Line(from, to));
  }
  fn stroke_rect(&mut self, origin: P2, size: S2) {
    self.ops.push(DrawOp::Rect(origin, size));
  }
  fn set_stroke_color(&mut self, color: Rgba<f32>) {
    self.ops.push(DrawOp::StrokeColor(color));
  }
  fn set_blend_mode(&mut self, mode: BlendMode) {
    self.ops.push(DrawOp::BlendMode(mode));
  }
  fn clear(&mut self) {
    self.ops.push(DrawOp::Clear);
  }
}

/// `rrggbb` or `rrggbbaa`, optional leading `#`.
pub fn parse_hex_color(s: &str) -> Result<Rgba<u8>> {
  let hex = s.trim().trim_start_matches('#');
  if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
    bail!("expected `rrggbb` or `rrggbbaa`, got `{}`", s);
  }
  let mut rgba = [255u8; 4];
  for (i, channel) in rgba.iter_mut().enumerate().take(hex.len() / 2) {
    let digits = &hex[2 * i..2 * i + 2];
    *channel = u8::from_str_radix(digits, 16)
      .with_context(|| format!("invalid hex digits `{}` in `{}`", digits, s))?;
  }
  Ok(Rgba(rgba))
}
