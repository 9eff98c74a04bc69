use {
  super::*,
  anyhow::Result,
  image::RgbaImage
};

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

fn is_blank(image: &RgbaImage) -> bool {
  image.pixels().all(|p| *p == CLEAR)
}

#[test] fn canvas_starts_transparent() {
  let canvas = Canvas::new(16, 8, Style::default());
  assert_eq!(canvas.image().dimensions(), (16, 8));
  assert!(is_blank(canvas.image()));
  assert_eq!(canvas.blend_mode(), BlendMode::SrcOver);
}

#[test] fn line_covers_its_path_only() {
  let mut canvas = Canvas::new(100, 40, Style::default());
  canvas.stroke_line(P2::new(10.0, 10.0), P2::new(90.0, 10.0));

  // 2px line on the boundary between rows 9 and 10, black at alpha 0.5
  assert_eq!(*canvas.image().get_pixel(50, 9), Rgba([0, 0, 0, 128]));
  assert_eq!(*canvas.image().get_pixel(50, 10), Rgba([0, 0, 0, 128]));
  assert_eq!(*canvas.image().get_pixel(50, 11), CLEAR);
  assert_eq!(*canvas.image().get_pixel(50, 30), CLEAR);
  assert_eq!(*canvas.image().get_pixel(95, 10), CLEAR);
}

#[test] fn stroke_color_and_alpha() {
  let style = Style { global_alpha: 1.0, ..Default::default() };
  let mut canvas = Canvas::new(20, 20, style);
  canvas.set_stroke_color(Rgba([1.0, 0.0, 0.0, 1.0]));
  canvas.stroke_line(P2::new(0.0, 10.0), P2::new(20.0, 10.0));
  assert_eq!(*canvas.image().get_pixel(5, 10), Rgba([255, 0, 0, 255]));
}

#[test] fn rect_outline_only() {
  let mut canvas = Canvas::new(64, 64, Style::default());
  canvas.stroke_rect(P2::new(10.0, 10.0), S2::new(20.0, 20.0));
  assert!(canvas.image().get_pixel(10, 20)[3] > 0);
  assert!(canvas.image().get_pixel(29, 20)[3] > 0);
  assert_eq!(*canvas.image().get_pixel(20, 20), CLEAR);
  assert_eq!(*canvas.image().get_pixel(40, 40), CLEAR);
}

#[test] fn polygon_corners_blended_once() {
  let mut canvas = Canvas::new(64, 64, Style::default());
  canvas.stroke_polygon(&[P2::new(10.0, 10.0), P2::new(50.0, 10.0), P2::new(30.0, 50.0)]);
  // the corner pixel belongs to two edges but is composited a single time
  assert_eq!(canvas.image().get_pixel(10, 10)[3], 128);
}

#[test] fn strokes_outside_are_clipped() {
  let mut canvas = Canvas::new(32, 32, Style::default());
  canvas.stroke_line(P2::new(-100.0, -100.0), P2::new(-50.0, -50.0));
  canvas.stroke_line(P2::new(f32::NAN, 0.0), P2::new(10.0, 10.0));
  canvas.stroke_rect(P2::new(100.0, 100.0), S2::new(10.0, 10.0));
  assert!(is_blank(canvas.image()));

  // partially visible
  canvas.stroke_line(P2::new(-10.0, 16.0), P2::new(40.0, 16.0));
  assert!(canvas.image().get_pixel(0, 16)[3] > 0);
  assert!(canvas.image().get_pixel(31, 16)[3] > 0);
}

#[test] fn clear_wipes_everything() {
  let mut canvas = Canvas::new(32, 32, Style::default());
  canvas.stroke_rect(P2::new(4.0, 4.0), S2::new(20.0, 20.0));
  assert!(!is_blank(canvas.image()));
  canvas.clear();
  assert!(is_blank(canvas.image()));
}

#[test] fn blend_mode_applies_to_later_strokes() {
  let mut canvas = Canvas::new(32, 32, Style::default());
  canvas.stroke_line(P2::new(0.0, 16.0), P2::new(32.0, 16.0));
  let before = canvas.image().clone();
  canvas.set_blend_mode(BlendMode::Multiply);
  assert_eq!(canvas.image(), &before);
  assert_eq!(canvas.blend_mode(), BlendMode::Multiply);
}

#[test] fn later_strokes_use_blend_mode() {
  let style = Style { global_alpha: 1.0, ..Default::default() };
  let mut canvas = Canvas::new(20, 20, style);
  canvas.set_stroke_color(Rgba([1.0, 1.0, 1.0, 1.0]));
  canvas.stroke_line(P2::new(0.0, 10.0), P2::new(20.0, 10.0));
  assert_eq!(*canvas.image().get_pixel(5, 10), Rgba([255, 255, 255, 255]));

  // white on white cancels out
  canvas.set_blend_mode(BlendMode::Difference);
  canvas.stroke_line(P2::new(0.0, 10.0), P2::new(20.0, 10.0));
  assert_eq!(*canvas.image().get_pixel(5, 10), Rgba([0, 0, 0, 255]));
}

#[test] fn flatten_over_background() {
  let mut canvas = Canvas::new(8, 8, Style { global_alpha: 1.0, ..Default::default() });
  let white = Rgba([255, 255, 255, 255]);
  assert!(canvas.flatten(white).pixels().all(|p| *p == white));

  canvas.stroke_line(P2::new(0.0, 4.0), P2::new(8.0, 4.0));
  let flat = canvas.flatten(white);
  assert_eq!(*flat.get_pixel(2, 4), Rgba([0, 0, 0, 255]));
  assert_eq!(*flat.get_pixel(2, 0), white);
  // the canvas itself stays transparent where nothing was drawn
  assert_eq!(*canvas.image().get_pixel(2, 0), CLEAR);
}

#[test] fn recorder_keeps_order() {
  let mut recorder = Recorder::new();
  recorder.set_stroke_color(Rgba([0.5, 0.5, 0.5, 0.8]));
  recorder.stroke_line(P2::new(0.0, 0.0), P2::new(1.0, 1.0));
  recorder.set_blend_mode(BlendMode::Screen);
  recorder.stroke_rect(P2::new(0.0, 0.0), S2::new(2.0, 2.0));
  recorder.clear();

  assert_eq!(recorder.ops, vec![
    DrawOp::StrokeColor(Rgba([0.5, 0.5, 0.5, 0.8])),
    DrawOp::Line(P2::new(0.0, 0.0), P2::new(1.0, 1.0)),
    DrawOp::BlendMode(BlendMode::Screen),
    DrawOp::Rect(P2::new(0.0, 0.0), S2::new(2.0, 2.0)),
    DrawOp::Clear,
  ]);
  assert_eq!(recorder.strokes().count(), 2);
  assert_eq!(recorder.rects(), vec![(P2::new(0.0, 0.0), S2::new(2.0, 2.0))]);
}

#[test] fn hex_colors() -> Result<()> {
  assert_eq!(parse_hex_color("ffffff")?, Rgba([255, 255, 255, 255]));
  assert_eq!(parse_hex_color("#10203040")?, Rgba([16, 32, 48, 64]));
  assert!(parse_hex_color("fff").is_err());
  assert!(parse_hex_color("gg0000").is_err());
  assert!(parse_hex_color("ffé000").is_err());
  // from_str_radix alone would take the sign
  assert!(parse_hex_color("+f+f+f").is_err());
  assert!(parse_hex_color("-1ffff").is_err());
  Ok(())
}
