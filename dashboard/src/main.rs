// fittrack: daily metrics tracker on the command line.
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueHint};
use tracing_subscriber::EnvFilter;

use dashboard::components::latest_panel::EMPTY_NOTICE;
use dashboard::components::{render_latest, render_svg};
use dashboard::config::AppConfig;
use dashboard::state::AppState;
use engine::config::EngineSettings;
use engine::data::slot_storage::SlotStorage;
use engine::services::{EntryForm, ExportFormat, TrackerService};
use shared::models::{Entry, Metric};
use shared::utils::dates;

#[derive(Parser, Debug)]
#[command(author, version, about = "Track daily weight, calories, steps and cardio", long_about = None)]
struct Cli {
    /// Engine settings file (JSON)
    #[arg(long, global = true, env = "FITTRACK_SETTINGS", value_hint = ValueHint::FilePath)]
    settings: Option<PathBuf>,

    /// Directory holding the entry data (overrides settings and FITTRACK_DATA_DIR)
    #[arg(long, global = true, value_hint = ValueHint::DirPath)]
    data_dir: Option<PathBuf>,

    /// Chart configuration file (JSON, same shape as the built-in default)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    chart_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record or update one day. Fields not given keep their stored value.
    Add(AddArgs),
    /// Delete the entry for a date
    Delete {
        /// Date as YYYY-MM-DD
        date: String,
    },
    /// Show the latest entry, or every entry with --all
    Show {
        #[arg(long)]
        all: bool,
    },
    /// Replace all entries with the contents of an export file
    Import {
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },
    /// Write all entries to a file (`-` for stdout)
    Export {
        #[arg(long, default_value = "json")]
        format: ExportFormat,
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
    /// Delete all entries
    Clear {
        /// Confirm deleting everything
        #[arg(long)]
        yes: bool,
    },
    /// Draw the chart as an SVG file
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct AddArgs {
    /// Date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<String>,
    /// Weight in kg; "82,4" and "82.4" both work
    #[arg(long, allow_hyphen_values = true)]
    weight: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    calories: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    steps: Option<String>,
    /// Cardio minutes
    #[arg(long, allow_hyphen_values = true)]
    cardio: Option<String>,
    #[arg(long)]
    workout: Option<String>,
    #[arg(long)]
    comments: Option<String>,
    /// Start from an empty form instead of the stored entry
    #[arg(long)]
    replace: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Days to show, counting back from today, or "all"
    #[arg(short, long)]
    window: Option<String>,
    /// Metric to draw; repeat for several (defaults to weight)
    #[arg(short, long = "metric")]
    metrics: Vec<Metric>,
    /// Logical width in pixels
    #[arg(long)]
    width: Option<f64>,
    /// Device pixel ratio
    #[arg(long)]
    dpr: Option<f64>,
    #[arg(short, long, default_value = "chart.svg", value_hint = ValueHint::FilePath)]
    output: PathBuf,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut settings = EngineSettings::load(cli.settings.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        settings.data_dir = dir.clone();
    }
    let app_config = AppConfig::load(cli.chart_config.as_deref())?;
    tracing::debug!(version = %app_config.version, data_dir = %settings.data_dir.display(), "Loaded configuration");

    let mut service = TrackerService::open(&settings);

    match cli.command {
        Command::Add(args) => add(&mut service, args),
        Command::Delete { date } => {
            if service.delete_entry(&date)? {
                println!("Deleted entry for {}", date);
            } else {
                println!("No entry for {}", date);
            }
            Ok(())
        }
        Command::Show { all } => {
            let entries = service.entries();
            if all {
                print_entries(&entries);
            } else {
                println!("{}", render_latest(&entries));
            }
            Ok(())
        }
        Command::Import { file } => {
            let text = fs::read_to_string(&file).with_context(|| format!("reading {}", file.display()))?;
            match service.import_json(&text) {
                Ok(count) => {
                    println!("Import complete ({} entries).", count);
                    Ok(())
                }
                Err(e) => anyhow::bail!(e.user_notice()),
            }
        }
        Command::Export { format, output } => {
            let body = service.export(format)?;
            let path = output.unwrap_or_else(|| PathBuf::from(format.default_file_name()));
            write_output(&path, &body)?;
            if path != Path::new("-") {
                println!("Exported to {}", path.display());
            }
            Ok(())
        }
        Command::Clear { yes } => {
            if !yes {
                anyhow::bail!("This deletes all entries. Re-run with --yes to confirm.");
            }
            service.clear()?;
            println!("All entries deleted.");
            Ok(())
        }
        Command::Render(args) => render(&mut service, &settings, &app_config, args),
    }
}

fn add<S: SlotStorage>(service: &mut TrackerService<S>, args: AddArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(dates::today_iso);
    let mut form = if args.replace {
        EntryForm::blank(&date)
    } else {
        service.form_for(&date)
    };
    let fields = [
        (&mut form.weight, args.weight),
        (&mut form.calories, args.calories),
        (&mut form.steps, args.steps),
        (&mut form.cardio, args.cardio),
        (&mut form.workout, args.workout),
        (&mut form.comments, args.comments),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            *field = value;
        }
    }
    let entry = service.submit_entry(form)?;
    println!("Saved entry for {}", entry.date);
    Ok(())
}

fn render<S: SlotStorage>(
    service: &mut TrackerService<S>,
    settings: &EngineSettings,
    app_config: &AppConfig,
    args: RenderArgs,
) -> Result<()> {
    let mut state = AppState::new(settings.default_window, std::iter::empty());
    if let Some(raw) = args.window.as_deref() {
        state.set_window_selection(raw);
    }
    for metric in args.metrics {
        state.set_checked(metric, true);
    }
    let request = state.render_request();

    let data = service.chart_data(&request, dates::today());
    if !data.has_any_data {
        eprintln!("{}", EMPTY_NOTICE);
    }

    let chart = &app_config.chart;
    let width = args.width.unwrap_or(chart.default_width);
    let dpr = args.dpr.unwrap_or(chart.device_pixel_ratio);
    let svg = render_svg(&data, chart, &app_config.theme, width, dpr).context("drawing chart")?;
    write_output(&args.output, &svg)?;
    if args.output != Path::new("-") {
        println!(
            "Wrote {} ({} of {} metrics, {} days shown)",
            args.output.display(),
            data.series.len(),
            Metric::ALL.len(),
            data.len()
        );
    }
    Ok(())
}

fn print_entries(entries: &[Entry]) {
    if entries.is_empty() {
        println!("{}", EMPTY_NOTICE);
        return;
    }
    let cell = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_else(|| "—".to_string());
    println!("{:<10}  {:>8}  {:>8}  {:>8}  {:>6}  {}", "date", "weight", "calories", "steps", "cardio", "workout / comments");
    for e in entries {
        let notes = match (e.workout.is_empty(), e.comments.is_empty()) {
            (false, false) => format!("{} / {}", e.workout, e.comments),
            (false, true) => e.workout.clone(),
            (true, false) => e.comments.clone(),
            (true, true) => String::new(),
        };
        println!(
            "{:<10}  {:>8}  {:>8}  {:>8}  {:>6}  {}",
            e.date,
            cell(e.weight),
            cell(e.calories),
            cell(e.steps),
            cell(e.cardio),
            notes
        );
    }
}

fn write_output(path: &Path, body: &str) -> Result<()> {
    if path == Path::new("-") {
        io::stdout().write_all(body.as_bytes())?;
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))
}
