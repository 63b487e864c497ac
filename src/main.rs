//! Layout Mockup CLI
//!
//! Usage:
//!   layout-mockup [OPTIONS] [LAYOUT]
//!
//! Options:
//!   -o, --output <FILE>      Output image path [default: dashboard_mockup.png]
//!   -f, --format <FORMAT>    png or svg (defaults from the output extension)
//!   -s, --stylesheet <FILE>  Stylesheet file for the fill palette (TOML format)
//!       --width <PX>         Image width in pixels
//!       --height <PX>        Image height in pixels
//!       --lint               Report overlapping regions and oversized labels
//!       --preset             Print the built-in dashboard layout and exit
//!   -d, --debug              Verbose logging
//!   -h, --help               Print help

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::debug;

use layout_mockup::{
    render_with_lint, write_output, LayoutConfig, Mockup, OutputFormat, RenderConfig, Stylesheet,
    DASHBOARD_PRESET,
};

#[derive(Parser)]
#[command(name = "layout-mockup")]
#[command(about = "Render a declarative region layout to a static mockup image")]
struct Cli {
    /// Layout file (TOML); the built-in dashboard layout is used if omitted
    layout: Option<PathBuf>,

    /// Output image path
    #[arg(short, long, default_value = "dashboard_mockup.png")]
    output: PathBuf,

    /// Output format (defaults from the output file extension)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Stylesheet file for the fill palette (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<f64>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<f64>,

    /// Report overlapping regions and labels that do not fit
    #[arg(long)]
    lint: bool,

    /// Print the built-in dashboard layout (TOML) and exit
    #[arg(long)]
    preset: bool,

    /// Debug mode: log layout geometry and encoding steps
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Default level depends on --debug (overridden by RUST_LOG)
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    env_logger::Builder::from_env(env).init();

    let result = run(&cli, &mut io::stdout().lock(), &mut io::stderr().lock());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

/// Execute one invocation; progress goes to `out`, lint warnings to `err`
fn run(cli: &Cli, out: &mut impl Write, err: &mut impl Write) -> Result<(), String> {
    if cli.preset {
        return write!(out, "{}", DASHBOARD_PRESET).map_err(|e| e.to_string());
    }

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => Stylesheet::from_file(path)
            .map_err(|e| format!("loading stylesheet '{}': {}", path.display(), e))?,
        None => Stylesheet::default(),
    };

    // Load layout
    let mockup = match &cli.layout {
        Some(path) => {
            let source = fs::read_to_string(path)
                .map_err(|e| format!("reading layout '{}': {}", path.display(), e))?;
            let filename = path.display().to_string();
            Mockup::from_str(&source, &stylesheet).map_err(|e| e.format(&source, &filename))?
        }
        None => {
            debug!("no layout file given, using the built-in dashboard");
            Mockup::from_str(DASHBOARD_PRESET, &stylesheet)
                .map_err(|e| e.format(DASHBOARD_PRESET, "<preset>"))?
        }
    };

    let mut layout = LayoutConfig::default();
    if let Some(width) = cli.width {
        layout.width = width;
    }
    if let Some(height) = cli.height {
        layout.height = height;
    }

    let format = cli
        .format
        .unwrap_or_else(|| OutputFormat::from_path(&cli.output));

    let config = RenderConfig::new()
        .with_layout(layout)
        .with_format(format)
        .with_title(mockup.title.clone())
        .with_lint(cli.lint);

    let (bytes, warnings) =
        render_with_lint(&mockup.regions, mockup.canvas, &config).map_err(|e| e.to_string())?;
    for warning in &warnings {
        writeln!(err, "{}", warning).map_err(|e| e.to_string())?;
    }

    write_output(&cli.output, &bytes).map_err(|e| e.to_string())?;
    writeln!(out, "Wrote {}", cli.output.display()).map_err(|e| e.to_string())?;
    Ok(())
}
