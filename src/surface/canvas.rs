use {
  super::{DrawSurface, Style},
  crate::{
    blend::BlendMode,
    geometry::{self, PixelSpace, Segment, P2, S2}
  },
  euclid::{Box2D, Size2D},
  image::{Rgba, RgbaImage}
};

/// Raster surface, transparent on creation.
///
/// A stroke is the distance field of its segments: a pixel is covered when its center
/// lies within half the line width of the closest segment, with one pixel of antialiasing.
/// Every pixel a stroke touches is blended exactly once, so the corners of a polygon
/// are not darkened by overlapping edges.
#[derive(Debug, Clone)]
pub struct Canvas {
  image: RgbaImage,
  style: Style,
  stroke: Rgba<f32>,
  blend_mode: BlendMode,
}

impl Canvas {
  pub fn new(width: u32, height: u32, style: Style) -> Self {
    Self {
      image: RgbaImage::new(width, height),
      style,
      stroke: Rgba([0.0, 0.0, 0.0, 1.0]),
      blend_mode: BlendMode::SrcOver,
    }
  }

  pub fn image(&self) -> &RgbaImage {
    &self.image
  }

  pub fn into_image(self) -> RgbaImage {
    self.image
  }

  pub fn style(&self) -> Style {
    self.style
  }

  pub fn blend_mode(&self) -> BlendMode {
    self.blend_mode
  }

  /// Copy of the canvas laid over an opaque `background`.
  pub fn flatten(&self, background: Rgba<u8>) -> RgbaImage {
    let (width, height) = self.image.dimensions();
    let mut out = RgbaImage::from_pixel(width, height, background);
    image::imageops::overlay(&mut out, &self.image, 0, 0);
    out
  }

  fn stroke_segments(&mut self, segments: &[Segment]) {
    let half_width = self.style.line_width / 2.0;
    let alpha = self.stroke[3] * self.style.global_alpha;
    if alpha <= 0.0 || half_width <= 0.0 {
      return;
    }
    let region = match self.region(segments, half_width + 1.0) {
      Some(x) => x,
      None => return // stroke has no intersection with the canvas at all
    };
    let Rgba([r, g, b, _]) = self.stroke;
    let mode = self.blend_mode;

    itertools::iproduct!(region.y_range(), region.x_range())
      .for_each(|(y, x)| {
        let center = P2::new(x as f32 + 0.5, y as f32 + 0.5);
        let distance = segments.iter()
          .map(|segment| segment.distance(center))
          .fold(f32::INFINITY, f32::min);
        // antialias
        let coverage = (half_width + 0.5 - distance).clamp(0.0, 1.0);
        if coverage <= 0.0 {
          return;
        }
        let pixel = self.image.get_pixel_mut(x, y);
        *pixel = mode.composite(*pixel, Rgba([r, g, b, alpha * coverage]));
      });
  }

  /// Pixels that may be touched by `segments`, clipped to the canvas.
  fn region(&self, segments: &[Segment], margin: f32) -> Option<Box2D<u32, PixelSpace>> {
    let (width, height) = self.image.dimensions();
    let canvas = Box2D::from_size(Size2D::new(width as f32, height as f32));
    geometry::bounds(segments, margin)?
      .intersection(&canvas)
      .map(|b| b.round_out().to_u32())
  }
}

impl DrawSurface for Canvas {
  fn stroke_polygon(&mut self, points: &[P2]) {
    self.stroke_segments(&geometry::closed_path(points));
  }

  fn stroke_line(&mut self, from: P2, to: P2) {
    self.stroke_segments(&[Segment::new(from, to)]);
  }

  fn stroke_rect(&mut self, origin: P2, size: S2) {
    self.stroke_segments(&geometry::rect_path(origin, size));
  }

  fn set_stroke_color(&mut self, color: Rgba<f32>) {
    self.stroke = color;
  }

  fn set_blend_mode(&mut self, mode: BlendMode) {
    self.blend_mode = mode;
  }

  fn clear(&mut self) {
    self.image.pixels_mut()
      .for_each(|pixel| *pixel = Rgba([0, 0, 0, 0]));
  }
}
