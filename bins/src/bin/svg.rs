// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Range Timeline project*
//!
//! Render a single timeline without the GUI
//!

use clap::{Parser, ValueEnum, builder::PossibleValue};
use range_timeline_core::{TimelineNumber, WidgetState};
use range_timeline_renderer::RangeTimelineRendererSvg;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

/// Range Timeline SVG entry point
///
/// The dates go through the same checks as the desktop app's "Add Timeline"
/// button, so a missing or invalid date is reported and nothing is drawn.
fn main() {
    let args = Cli::parse();

    if let Err(error) = setup_logging(args.verbose) {
        eprintln!("Error setting up logging: {error}");
        std::process::exit(1);
    }

    if let Err(error) = run(&args) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn setup_logging(verbose: u8) -> Result<(), log::SetLoggerError> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("range_timeline")
        .build();
    CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
}

fn run(args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let timeline = TimelineNumber::try_from(args.timeline)?;

    // Validate exactly as the GUI does
    let mut state = WidgetState::new(timeline);
    state.set_start(args.start.as_deref().unwrap_or_default());
    state.set_end(args.end.as_deref().unwrap_or_default());
    let date_range = state.confirm()?;

    let mut renderer = RangeTimelineRendererSvg::new();
    renderer.set_date_range(date_range);

    let output = match args.format {
        OutputFormat::Svg => renderer.render(),
        OutputFormat::Json => match renderer.layout() {
            Some(layout) => serde_json::to_string_pretty(layout)?,
            None => return Err("No layout was computed".into()),
        },
    };

    match &args.output {
        Some(path) => {
            info!("Writing {:?} to {path:?}", args.format);
            fs::write(path, output)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{output}")?;
        }
    }

    Ok(())
}

/// Range Timeline SVG CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Render a Range Timeline as SVG (or its layout as JSON)",
    after_help = "Dates are entered as YYYY-MM-DD"
)]
pub struct Cli {
    /// Start date
    #[arg(long)]
    pub start: Option<String>,

    /// End date
    #[arg(long)]
    pub end: Option<String>,

    /// Which timeline the dates are for (used in messages)
    #[arg(long, default_value_t = 1)]
    pub timeline: i64,

    /// What to output
    #[arg(long, value_enum, default_value = "svg")]
    pub format: OutputFormat,

    /// Where to write the output (stdout if not given)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log more (repeat for even more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Json,
}

impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Svg, Self::Json]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            OutputFormat::Svg => Some(PossibleValue::new("svg").help("An SVG document")),
            OutputFormat::Json => {
                Some(PossibleValue::new("json").help("The computed layout as JSON"))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;
    use tempdir::TempDir;

    fn args(extra: &[&str]) -> Cli {
        let mut argv = vec!["svg"];
        argv.extend_from_slice(extra);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn cli() {
        Cli::command().debug_assert();

        let cli = args(&["--start", "2024-01-01", "--end", "2024-12-31"]);
        assert_eq!(cli.timeline, 1);
        assert!(matches!(cli.format, OutputFormat::Svg));
        assert!(cli.output.is_none());

        let cli = args(&["--timeline", "2", "--format", "json", "-vv"]);
        assert_eq!(cli.timeline, 2);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert_eq!(cli.verbose, 2);

        assert!(Cli::try_parse_from(["svg", "--format", "png"]).is_err());
    }

    #[test]
    fn missing_date() {
        let error = run(&args(&["--end", "2024-01-01", "--timeline", "2"])).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Please select both start and end dates for Timeline 2."
        );
    }

    #[test]
    fn json_to_file() {
        let dir = TempDir::new("range-timeline-svg").unwrap();
        let path = dir.path().join("layout.json");
        let cli = args(&[
            "--start",
            "2024-01-01",
            "--end",
            "2024-12-31",
            "--format",
            "json",
            "--output",
            path.to_str().unwrap(),
        ]);
        run(&cli).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["start_x"], 50.0);
        assert_eq!(json["end_x"], 780.0);
        assert_eq!(json["axis_domain"]["start"], "2024-01-01");
        assert_eq!(json["end_label"]["text"], "Tue Dec 31 2024");
    }

    #[test]
    fn svg_to_file() {
        let dir = TempDir::new("range-timeline-svg").unwrap();
        let path = dir.path().join("timeline.svg");
        let cli = args(&[
            "--start",
            "2024-01-01",
            "--end",
            "2024-12-31",
            "--output",
            path.to_str().unwrap(),
        ]);
        run(&cli).unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<circle").count(), 2);
    }

    #[test]
    fn bad_timeline() {
        let cli = args(&["--start", "2024-01-01", "--end", "2024-12-31", "--timeline", "3"]);
        assert!(run(&cli).is_err());
    }
}
