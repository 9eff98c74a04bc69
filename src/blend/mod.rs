//! Compositing rules for strokes laid over existing canvas content.
//!
//! Separable modes follow the W3C compositing formulas: the blended colour
//! `B(Cb, Cs)` is mixed with the source colour by backdrop alpha,
//! `Cs' = (1 - αb)·Cs + αb·B(Cb, Cs)`, and the result is composited source-over.
//! All channels are straight (not premultiplied) alpha.

use {
  image::Rgba,
  std::fmt
};


#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BlendMode {
  Add,
  Blue,
  ColorBurn,
  ColorDodge,
  Darken,
  Difference,
  Exclusion,
  Green,
  HardLight,
  Lighten,
  Multiply,
  Overlay,
  Red,
  Screen,
  SoftLight,
  SrcAtop,
  SrcOver,
}

impl Default for BlendMode {
  fn default() -> Self {
    BlendMode::Difference
  }
}

impl BlendMode {
  /// Cycling order.
  pub const ALL: [BlendMode; 17] = [
    BlendMode::Add,
    BlendMode::Blue,
    BlendMode::ColorBurn,
    BlendMode::ColorDodge,
    BlendMode::Darken,
    BlendMode::Difference,
    BlendMode::Exclusion,
    BlendMode::Green,
    BlendMode::HardLight,
    BlendMode::Lighten,
    BlendMode::Multiply,
    BlendMode::Overlay,
    BlendMode::Red,
    BlendMode::Screen,
    BlendMode::SoftLight,
    BlendMode::SrcAtop,
    BlendMode::SrcOver,
  ];

  /// The mode after `self` in [`BlendMode::ALL`], wrapping around.
  pub fn next(self) -> Self {
    let index = Self::ALL.iter()
      .position(|&mode| mode == self)
      .map_or(0, |i| (i + 1) % Self::ALL.len());
    Self::ALL[index]
  }

  pub fn name(self) -> &'static str {
    use BlendMode::*;
    match self {
      Add => "add",
      Blue => "blue",
      ColorBurn => "color burn",
      ColorDodge => "color dodge",
      Darken => "darken",
      Difference => "difference",
      Exclusion => "exclusion",
      Green => "green",
      HardLight => "hard light",
      Lighten => "lighten",
      Multiply => "multiply",
      Overlay => "overlay",
      Red => "red",
      Screen => "screen",
      SoftLight => "soft light",
      SrcAtop => "source atop",
      SrcOver => "source over",
    }
  }

  /// Lay `source` over `backdrop`.
  /// `source` channels are in `[0, 1]`, its alpha already carries stroke opacity and coverage.
  pub fn composite(self, backdrop: Rgba<u8>, source: Rgba<f32>) -> Rgba<u8> {
    let Rgba([br, bg, bb, ba]) = to_unit(backdrop);
    let Rgba([sr, sg, sb, sa]) = source;
    let sa = sa.clamp(0.0, 1.0);
    if sa <= 0.0 {
      return backdrop;
    }
    let cb = [br, bg, bb];
    let cs = [sr, sg, sb].map(|c| c.clamp(0.0, 1.0));

    if self == BlendMode::SrcAtop {
      let [r, g, b] = [0, 1, 2].map(|i| cs[i] * sa + cb[i] * (1.0 - sa));
      return from_unit(Rgba([r, g, b, ba]));
    }

    let blended = self.blend(cb, cs);
    let out_a = sa + ba * (1.0 - sa);
    let [r, g, b] = [0, 1, 2].map(|i| {
      let mixed = (1.0 - ba) * cs[i] + ba * blended[i];
      (mixed * sa + cb[i] * ba * (1.0 - sa)) / out_a
    });
    from_unit(Rgba([r, g, b, out_a]))
  }

  /// `B(Cb, Cs)`
  fn blend(self, cb: [f32; 3], cs: [f32; 3]) -> [f32; 3] {
    use BlendMode::*;
    let separable = |f: fn(f32, f32) -> f32| [0, 1, 2].map(|i| f(cb[i], cs[i]));
    match self {
      Add => separable(|b, s| (b + s).min(1.0)),
      Red => [cs[0], cb[1], cb[2]],
      Green => [cb[0], cs[1], cb[2]],
      Blue => [cb[0], cb[1], cs[2]],
      ColorBurn => separable(color_burn),
      ColorDodge => separable(color_dodge),
      Darken => separable(f32::min),
      Lighten => separable(f32::max),
      Difference => separable(|b, s| (b - s).abs()),
      Exclusion => separable(|b, s| b + s - 2.0 * b * s),
      HardLight => separable(hard_light),
      Overlay => separable(|b, s| hard_light(s, b)),
      Multiply => separable(|b, s| b * s),
      Screen => separable(screen),
      SoftLight => separable(soft_light),
      SrcAtop | SrcOver => cs,
    }
  }
}

impl fmt::Display for BlendMode {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

fn screen(b: f32, s: f32) -> f32 {
  b + s - b * s
}

fn hard_light(b: f32, s: f32) -> f32 {
  if s <= 0.5 {
    b * 2.0 * s
  } else {
    screen(b, 2.0 * s - 1.0)
  }
}

fn color_dodge(b: f32, s: f32) -> f32 {
  if b <= 0.0 {
    0.0
  } else if s >= 1.0 {
    1.0
  } else {
    (b / (1.0 - s)).min(1.0)
  }
}

fn color_burn(b: f32, s: f32) -> f32 {
  if b >= 1.0 {
    1.0
  } else if s <= 0.0 {
    0.0
  } else {
    1.0 - ((1.0 - b) / s).min(1.0)
  }
}

fn soft_light(b: f32, s: f32) -> f32 {
  if s <= 0.5 {
    b - (1.0 - 2.0 * s) * b * (1.0 - b)
  } else {
    let d = if b <= 0.25 {
      ((16.0 * b - 12.0) * b + 4.0) * b
    } else {
      b.sqrt()
    };
    b + (2.0 * s - 1.0) * (d - b)
  }
}

fn to_unit(pixel: Rgba<u8>) -> Rgba<f32> {
  Rgba(pixel.0.map(|c| c as f32 / 255.0))
}

fn from_unit(pixel: Rgba<f32>) -> Rgba<u8> {
  Rgba(pixel.0.map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8))
}
