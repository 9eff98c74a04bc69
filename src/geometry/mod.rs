//! .
//!
//! The origin of coordinate system is in top-left corner, `y` grows downwards.
//! One unit is one pixel of the draw surface.

use {
  euclid::{Point2D, Vector2D, Size2D, Box2D},
  itertools::Itertools
};


/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type P2 = Point2D<f32, PixelSpace>;
pub type V2 = Vector2D<f32, PixelSpace>;
pub type S2 = Size2D<f32, PixelSpace>;

/// Straight line between two points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
  pub from: P2,
  pub to: P2
}

impl Segment {
  pub fn new(from: P2, to: P2) -> Self {
    Self { from, to }
  }

  /// Distance from `point` to the closest point of the segment.
  pub fn distance(&self, point: P2) -> f32 {
    let d = self.to - self.from;
    let len2 = d.square_length();
    let t = if len2 > 0.0 {
      ((point - self.from).dot(d) / len2).clamp(0.0, 1.0)
    } else {
      0.0 // degenerate segment
    };
    (self.from + d * t).distance_to(point)
  }
}

/// Edges of the closed polyline through `points`.
pub fn closed_path(points: &[P2]) -> Vec<Segment> {
  match points {
    [] => vec![],
    [p] => vec![Segment::new(*p, *p)],
    _ => points.iter()
      .circular_tuple_windows()
      .map(|(a, b)| Segment::new(*a, *b))
      .collect()
  }
}

/// Outline of an axis-aligned rectangle.
pub fn rect_path(origin: P2, size: S2) -> Vec<Segment> {
  closed_path(&[
    origin,
    origin + V2::new(size.width, 0.0),
    origin + size.to_vector(),
    origin + V2::new(0.0, size.height),
  ])
}

/// Bounding box of `segments`, inflated by `margin`.
/// `None` if there is nothing to bound, or some coordinate is not finite.
pub fn bounds(segments: &[Segment], margin: f32) -> Option<Box2D<f32, PixelSpace>> {
  let points = segments.iter()
    .flat_map(|s| [s.from, s.to])
    .collect::<Vec<_>>();
  if points.is_empty() || !points.iter().all(|p| p.x.is_finite() && p.y.is_finite()) {
    return None;
  }
  Some(Box2D::from_points(points).inflate(margin, margin))
}
