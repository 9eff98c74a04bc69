//! Pattern and blend-mode state, and dispatch of UI events onto a draw surface.

use {
  crate::{
    blend::BlendMode,
    geometry::P2,
    pattern::Pattern,
    script::Event,
    surface::{Canvas, DrawSurface, Style}
  },
  anyhow::{ensure, Result},
  log::{debug, info},
  rand::SeedableRng,
  rand_pcg::Pcg64
};


/// Largest initial extent accepted by [`Config::validate`].
pub const MAX_EXTENT: f32 = 1000.0;

/// What the next click draws, and how its strokes composite.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PatternState {
  pub pattern: Pattern,
  pub blend_mode: BlendMode,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
  /// Canvas size in pixels
  pub width: u32,
  pub height: u32,
  /// Initial size of every pattern: triangle half-base and height, trunk length, square side.
  pub extent: f32,
  pub style: Style,
  /// Stroke colour RNG seed, random if `None`.
  pub seed: Option<u64>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      width: 1280,
      height: 800,
      extent: 100.0,
      style: Style::default(),
      seed: None,
    }}}

impl Config {
  pub fn validate(&self) -> Result<()> {
    ensure!(self.width > 0 && self.height > 0,
      "canvas must not be empty, got {}x{}", self.width, self.height);
    ensure!(self.extent.is_finite() && self.extent > 0.0,
      "extent must be positive, got {}", self.extent);
    // branch strokes double every level, 0.8x length each
    ensure!(self.extent <= MAX_EXTENT,
      "extent must be at most {}, got {}", MAX_EXTENT, self.extent);
    ensure!(self.style.line_width.is_finite() && self.style.line_width > 0.0,
      "line width must be positive, got {}", self.style.line_width);
    ensure!((0.0..=1.0).contains(&self.style.global_alpha),
      "alpha must be within [0, 1], got {}", self.style.global_alpha);
    Ok(())
  }
}

/// Result of a single click.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DrawStats {
  pub pattern: Pattern,
  pub strokes: u64,
}

pub struct Controller<S> {
  surface: S,
  state: PatternState,
  extent: f32,
  rng: Pcg64,
}

impl Controller<Canvas> {
  /// Blank canvas of the configured size.
  pub fn from_config(config: &Config) -> Result<Self> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    info!("canvas {}x{}, colour seed {}", config.width, config.height, seed);
    Ok(Self::new(
      Canvas::new(config.width, config.height, config.style),
      config.extent,
      seed
    ))
  }
}

impl<S: DrawSurface> Controller<S> {
  pub fn new(mut surface: S, extent: f32, seed: u64) -> Self {
    let state = PatternState::default();
    surface.set_blend_mode(state.blend_mode);
    Self {
      surface,
      state,
      extent,
      rng: Pcg64::seed_from_u64(seed),
    }
  }

  pub fn state(&self) -> PatternState {
    self.state
  }

  pub fn surface(&self) -> &S {
    &self.surface
  }

  pub fn into_surface(self) -> S {
    self.surface
  }

  /// Draw the current pattern at `point`, running it to completion.
  pub fn click(&mut self, point: P2) -> DrawStats {
    let pattern = self.state.pattern;
    info!("click at ({}, {}), drawing {}", point.x as i32, point.y as i32, pattern);
    let strokes = pattern.draw(&mut self.surface, &mut self.rng, point, self.extent);
    debug!("{} issued {} strokes", pattern, strokes);
    DrawStats { pattern, strokes }
  }

  /// Switch to the next pattern. Already drawn strokes are kept.
  pub fn cycle_pattern(&mut self) -> Pattern {
    self.state.pattern = self.state.pattern.next();
    info!("pattern: {}", self.state.pattern);
    self.state.pattern
  }

  /// Switch to the next blend mode, for strokes drawn from now on.
  pub fn cycle_blend_mode(&mut self) -> BlendMode {
    self.state.blend_mode = self.state.blend_mode.next();
    self.surface.set_blend_mode(self.state.blend_mode);
    info!("blend mode: {}", self.state.blend_mode);
    self.state.blend_mode
  }

  pub fn clear(&mut self) {
    info!("wiping the canvas");
    self.surface.clear();
  }

  /// Handle one UI event. Only clicks draw, and report what they drew.
  pub fn apply(&mut self, event: &Event) -> Option<DrawStats> {
    match *event {
      Event::Click(point) => return Some(self.click(point)),
      Event::CyclePattern => { self.cycle_pattern(); }
      Event::CycleBlendMode => { self.cycle_blend_mode(); }
      Event::Clear => self.clear(),
    }
    None
  }
}
