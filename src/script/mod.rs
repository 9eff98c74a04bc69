//! UI events and the event script format.
//!
//! One event per line, `#` starts a comment:
//! ```text
//! click 640 200   # draw the current pattern at (640, 200)
//! pattern         # next pattern
//! blend           # next blend mode
//! clear           # wipe the canvas
//! ```

use {
  crate::geometry::P2,
  anyhow::{bail, ensure, Context, Error, Result},
  std::{fmt, fs, path::Path, str::FromStr}
};


#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Event {
  Click(P2),
  CyclePattern,
  CycleBlendMode,
  Clear,
}

impl FromStr for Event {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let mut tokens = s.split_whitespace();
    let keyword = tokens.next()
      .context("empty event")?
      .to_ascii_lowercase();
    let event = match keyword.as_str() {
      "click" => {
        let x = coordinate(tokens.next(), "x")?;
        let y = coordinate(tokens.next(), "y")?;
        Event::Click(P2::new(x, y))
      }
      "pattern" => Event::CyclePattern,
      "blend" => Event::CycleBlendMode,
      "clear" => Event::Clear,
      other => bail!("unknown event `{}`", other)
    };
    if let Some(extra) = tokens.next() {
      bail!("unexpected `{}` after `{}`", extra, keyword);
    }
    Ok(event)
  }
}

impl fmt::Display for Event {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Event::Click(p) => write!(f, "click {} {}", p.x, p.y),
      Event::CyclePattern => f.write_str("pattern"),
      Event::CycleBlendMode => f.write_str("blend"),
      Event::Clear => f.write_str("clear"),
    }
  }
}

fn coordinate(token: Option<&str>, axis: &str) -> Result<f32> {
  let token = token.with_context(|| format!("missing {} coordinate", axis))?;
  let value = token.parse::<f32>()
    .with_context(|| format!("invalid {} coordinate `{}`", axis, token))?;
  ensure!(value.is_finite(), "{} coordinate must be finite, got `{}`", axis, token);
  Ok(value)
}

/// Parse a whole script. Errors name the 1-based line.
pub fn parse(source: &str) -> Result<Vec<Event>> {
  source.lines()
    .enumerate()
    .map(|(i, line)| (i + 1, strip_comment(line).trim()))
    .filter(|(_, line)| !line.is_empty())
    .map(|(number, line)| line.parse::<Event>()
      .with_context(|| format!("line {}: `{}`", number, line)))
    .collect()
}

pub fn load(path: impl AsRef<Path>) -> Result<Vec<Event>> {
  let path = path.as_ref();
  let source = fs::read_to_string(path)
    .with_context(|| format!("reading {}", path.display()))?;
  parse(&source)
    .with_context(|| format!("parsing {}", path.display()))
}

fn strip_comment(line: &str) -> &str {
  match line.find('#') {
    Some(i) => &line[..i],
    None => line
  }
}
