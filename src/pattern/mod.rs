//! The three recursive patterns.
//!
//! Each procedure draws its shape, then recurses on smaller copies anchored on the shape,
//! until the extent falls below the pattern's threshold. Thresholds bound the depth
//! logarithmically in the initial extent; non-finite extents draw nothing.
//! Every procedure returns the number of strokes it issued.

use {
  crate::{
    geometry::{P2, S2, V2},
    surface::DrawSurface
  },
  euclid::Angle,
  image::Rgba,
  rand::Rng,
  std::{f32::consts::FRAC_PI_6, fmt}
};


/// Alpha of randomized stroke colours.
pub const STROKE_ALPHA: f32 = 0.8;
/// Length ratio of a branch to its parent.
pub const BRANCH_DECAY: f32 = 0.8;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
  /// Triangles hanging from the vertices of their parent, see [`triangles`].
  One,
  /// Binary tree of line segments, see [`branches`].
  Two,
  /// Squares split into quadrants, see [`quadrants`].
  Three,
}

impl Default for Pattern {
  fn default() -> Self {
    Pattern::One
  }
}

impl Pattern {
  pub const ALL: [Pattern; 3] = [Pattern::One, Pattern::Two, Pattern::Three];

  pub fn next(self) -> Self {
    match self {
      Pattern::One => Pattern::Two,
      Pattern::Two => Pattern::Three,
      Pattern::Three => Pattern::One,
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Pattern::One => "triangles",
      Pattern::Two => "branches",
      Pattern::Three => "quadrants",
    }
  }

  /// Draw the pattern seeded at `origin` with initial `extent`,
  /// in a freshly randomized stroke colour.
  ///
  /// `origin` is the top vertex for [`Pattern::One`], the trunk start for [`Pattern::Two`]
  /// and the top-left corner for [`Pattern::Three`]. Branches start heading right.
  pub fn draw<S, R>(self, surface: &mut S, rng: &mut R, origin: P2, extent: f32) -> u64
    where S: DrawSurface,
          R: Rng
  {
    surface.set_stroke_color(random_color(rng));
    match self {
      Pattern::One => triangles(surface, origin, extent, extent),
      Pattern::Two => branches(surface, origin, extent, 0.0),
      Pattern::Three => quadrants(surface, rng, origin, S2::splat(extent)),
    }
  }
}

impl fmt::Display for Pattern {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Random opaque-ish colour, RGB uniform in `[0, 1)`.
pub fn random_color<R: Rng>(rng: &mut R) -> Rgba<f32> {
  Rgba([rng.gen(), rng.gen(), rng.gen(), STROKE_ALPHA])
}

// false for NaN as well
fn reaches(extent: f32, threshold: f32) -> bool {
  extent.is_finite() && extent >= threshold
}

/// Triangle with the top vertex at `top`, base `height·√3` below it,
/// spanning `width` to each side. Recurses on every vertex at half size
/// while width and height stay at least one pixel.
pub fn triangles<S: DrawSurface>(surface: &mut S, top: P2, width: f32, height: f32) -> u64 {
  if !(reaches(width, 1.0) && reaches(height, 1.0)) {
    return 0;
  }
  let drop = height * 3f32.sqrt();
  let vertices = [
    top,
    top + V2::new(-width, drop),
    top + V2::new(width, drop),
  ];
  surface.stroke_polygon(&vertices);

  let mut strokes = 1;
  for vertex in vertices {
    strokes += triangles(surface, vertex, width / 2.0, height / 2.0);
  }
  strokes
}

/// Segment of `length` from `start` towards `angle` (radians, clockwise since `y` points down),
/// then two branches from its end turned by ±30°, each [`BRANCH_DECAY`] as long.
/// Stops once the length drops below 3.
pub fn branches<S: DrawSurface>(surface: &mut S, start: P2, length: f32, angle: f32) -> u64 {
  if !reaches(length, 3.0) {
    return 0;
  }
  let end = start + V2::from_angle_and_length(Angle::radians(angle), length);
  surface.stroke_line(start, end);

  1 + branches(surface, end, length * BRANCH_DECAY, angle + FRAC_PI_6)
    + branches(surface, end, length * BRANCH_DECAY, angle - FRAC_PI_6)
}

/// Rectangle outline at `origin`, each in its own random colour, then its four quadrants:
/// top-left, top-right, bottom-right, bottom-left. Stops below 3 pixels on either side.
pub fn quadrants<S, R>(surface: &mut S, rng: &mut R, origin: P2, size: S2) -> u64
  where S: DrawSurface,
        R: Rng
{
  if !(reaches(size.width, 3.0) && reaches(size.height, 3.0)) {
    return 0;
  }
  surface.set_stroke_color(random_color(rng));
  surface.stroke_rect(origin, size);

  let half = size / 2.0;
  let offsets = [
    V2::zero(),
    V2::new(half.width, 0.0),
    half.to_vector(),
    V2::new(0.0, half.height),
  ];
  let mut strokes = 1;
  for offset in offsets {
    strokes += quadrants(surface, rng, origin + offset, half);
  }
  strokes
}
