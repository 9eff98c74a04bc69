use {
  fractal_click::{
    controller::{Config, Controller},
    error::{self, Result},
    profile,
    script::{self, Event},
    surface::{self, Canvas, Style}
  },
  anyhow::Context,
  clap::Parser,
  image::Rgba,
  log::{error, info, warn},
  std::path::PathBuf
};

/// Replay click, pattern and blend mode events onto a canvas and save it as an image.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
  /// Event script, one event per line
  #[arg(short, long)]
  script: Option<PathBuf>,

  /// Inline event: "click X Y", "pattern", "blend" or "clear". Replayed after the script
  #[arg(short, long = "event")]
  events: Vec<String>,

  /// Canvas width
  #[arg(long, default_value_t = 1280)]
  width: u32,

  /// Canvas height
  #[arg(long, default_value_t = 800)]
  height: u32,

  /// Initial pattern size, at most 1000
  #[arg(long, default_value_t = 100.0)]
  extent: f32,

  #[arg(long, default_value_t = 2.0)]
  line_width: f32,

  /// Opacity applied to every stroke
  #[arg(long, default_value_t = 0.5)]
  alpha: f32,

  /// Stroke colour seed
  #[arg(long)]
  seed: Option<u64>,

  /// Output image
  #[arg(short, long, default_value = "out.png")]
  output: PathBuf,

  /// Background colour, rrggbb[aa]
  #[arg(long, default_value = "ffffff", value_parser = parse_background)]
  background: Rgba<u8>,

  /// Keep the canvas transparent instead of laying it over the background
  #[arg(long)]
  transparent: bool,

  /// Open the result in the default viewer
  #[arg(long)]
  open: bool,
}

fn parse_background(s: &str) -> std::result::Result<Rgba<u8>, String> {
  surface::parse_hex_color(s).map_err(|e| e.to_string())
}

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  if let Err(e) = run(Args::parse()) {
    error!("{}", error::display(&e));
    std::process::exit(1);
  }
}

fn run(args: Args) -> Result<()> {
  let config = Config {
    width: args.width,
    height: args.height,
    extent: args.extent,
    style: Style {
      line_width: args.line_width,
      global_alpha: args.alpha,
    },
    seed: args.seed,
  };

  let mut events = match &args.script {
    Some(path) => script::load(path)?,
    None => vec![]
  };
  for (i, event) in args.events.iter().enumerate() {
    let event = event.parse::<Event>()
      .with_context(|| format!("--event #{}: `{}`", i + 1, event))?;
    events.push(event);
  }
  if events.is_empty() {
    warn!("no events given, the canvas stays empty");
  }

  let mut controller = Controller::<Canvas>::from_config(&config)?;
  let mut strokes = 0;
  profile!("replay", {
    for event in &events {
      if let Some(stats) = controller.apply(event) {
        strokes += stats.strokes;
      }
    }
  });
  info!("{} events, {} strokes", events.len(), strokes);

  let canvas = controller.into_surface();
  let image = if args.transparent {
    canvas.into_image()
  } else {
    canvas.flatten(args.background)
  };
  profile!("encode", {
    image.save(&args.output)
      .with_context(|| format!("saving {}", args.output.display()))?;
  });
  info!("saved {}", args.output.display());

  if args.open {
    open::that(&args.output)
      .with_context(|| format!("opening {}", args.output.display()))?;
  }
  Ok(())
}
