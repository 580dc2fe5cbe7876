//! MedFX Navigator command-line host
//!
//! Loads the exchange-rate series and the fitted model once, then renders
//! the selected view to stdout. Diagnostics go to stderr.
//!
//! Usage:
//! ```text
//! medfx render --view budget --horizon 14 --cost 45000 --city Penang
//! medfx render --view market --format json > market.json
//! medfx fit --output holt_model.json
//! medfx catalog
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use fx_forecast::data::SeriesLoader;
use fx_forecast::models::artifact::{load_model, save_model, ModelArtifact, ModelSpec};
use fx_forecast::models::{HoltModel, SimpleSmoothingModel};
use fx_math::ParameterGrid;
use navigator::{render, Catalog, Settings, UserInputs, View};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Medical tourism exchange-rate planner: USD/MYR forecasts, budgets and recovery guidance"
)]
struct Cli {
    /// JSON settings file (paths and default control values)
    #[arg(long, global = true, env = "MEDFX_CONFIG")]
    config: Option<PathBuf>,

    /// Exchange-rate CSV with `date` (day-first) and `USD` columns
    #[arg(long, global = true, env = "MEDFX_DATA")]
    data: Option<PathBuf>,

    /// Fitted model artifact
    #[arg(long, global = true, env = "MEDFX_MODEL")]
    model: Option<PathBuf>,

    /// Catalog file replacing the built-in procedures, hospitals and advice
    #[arg(long, global = true, env = "MEDFX_CATALOG")]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one view (the default when no subcommand is given)
    Render(RenderArgs),
    /// Fit a smoothing model to the series and write the artifact
    Fit(FitArgs),
    /// List the cities, treatment categories and procedures on offer
    Catalog,
}

#[derive(Args, Debug, Default)]
struct RenderArgs {
    /// market, budget or recovery
    #[arg(long, default_value = "market")]
    view: View,

    /// Forecast horizon in days
    #[arg(short = 'H', long, value_parser = clap::value_parser!(u64).range(1..=30))]
    horizon: Option<u64>,

    /// Estimated treatment cost in MYR (minimum 100)
    #[arg(long)]
    cost: Option<f64>,

    /// City for the hospital listing
    #[arg(long)]
    city: Option<String>,

    /// Treatment category for recovery guidance
    #[arg(long)]
    treatment: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct FitArgs {
    /// Where to write the artifact
    #[arg(short, long, default_value = "holt_model.json")]
    output: PathBuf,

    /// Level smoothing constant; searched on a grid when omitted
    #[arg(long)]
    alpha: Option<f64>,

    /// Trend smoothing constant; searched on a grid when omitted
    #[arg(long, requires = "alpha")]
    beta: Option<f64>,

    /// Trend damping factor in (0, 1]
    #[arg(long, default_value_t = 1.0)]
    damping: f64,

    /// Fit simple (level-only) smoothing instead of Holt
    #[arg(long, conflicts_with_all = ["beta", "damping"])]
    simple: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut settings = Settings::load(cli.config.as_deref())
        .context("failed to read settings file")?;
    if let Some(data) = cli.data {
        settings.data_path = data;
    }
    if let Some(model) = cli.model {
        settings.model_path = model;
    }
    if let Some(catalog) = cli.catalog {
        settings.catalog_path = Some(catalog);
    }

    match cli.command.unwrap_or(Command::Render(RenderArgs::default())) {
        Command::Render(args) => run_render(&settings, args),
        Command::Fit(args) => run_fit(&settings, args),
        Command::Catalog => run_catalog(&settings),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => Catalog::builtin().context("built-in catalog is invalid"),
    }
}

fn resolve_inputs(defaults: &UserInputs, args: &RenderArgs) -> UserInputs {
    UserInputs {
        horizon: args.horizon.map_or(defaults.horizon, |h| h as usize),
        cost_myr: args.cost.unwrap_or(defaults.cost_myr),
        city: args.city.clone().unwrap_or_else(|| defaults.city.clone()),
        treatment: args
            .treatment
            .clone()
            .unwrap_or_else(|| defaults.treatment.clone()),
    }
}

fn run_render(settings: &Settings, args: RenderArgs) -> Result<()> {
    // Everything fatal is loaded before any view is rendered
    let series = SeriesLoader::from_csv(&settings.data_path).with_context(|| {
        format!(
            "failed to load exchange-rate series from {}",
            settings.data_path.display()
        )
    })?;
    let model = load_model(&settings.model_path).with_context(|| {
        format!("failed to load model from {}", settings.model_path.display())
    })?;
    let catalog = load_catalog(settings.catalog_path.as_deref())?;

    let inputs = resolve_inputs(&settings.inputs, &args);
    let output = render(args.view, &series, model.as_ref(), &catalog, &inputs)
        .with_context(|| format!("cannot render {}", args.view))?;

    match args.format {
        OutputFormat::Text => print!("{}", output),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&output).context("failed to encode output")?
        ),
    }
    Ok(())
}

fn run_fit(settings: &Settings, args: FitArgs) -> Result<()> {
    let series = SeriesLoader::from_csv(&settings.data_path).with_context(|| {
        format!(
            "failed to load exchange-rate series from {}",
            settings.data_path.display()
        )
    })?;

    let artifact = if args.simple {
        let model = match args.alpha {
            Some(alpha) => SimpleSmoothingModel::fit(&series, alpha)?,
            None => SimpleSmoothingModel::fit_auto(&series)?.0,
        };
        info!(alpha = model.alpha(), "fitted simple smoothing");
        ModelArtifact::new(ModelSpec::Simple {
            alpha: model.alpha(),
            level: model.level()?,
        })
    } else {
        let grid = match (args.alpha, args.beta) {
            (Some(alpha), Some(beta)) => ParameterGrid::fixed(alpha, beta),
            (Some(alpha), None) => ParameterGrid {
                alphas: vec![alpha],
                ..ParameterGrid::default()
            },
            _ => ParameterGrid::default(),
        }
        .with_damping(args.damping);

        let (model, fit) = HoltModel::fit(&series, &grid)?;
        info!(alpha = model.alpha(), beta = model.beta(), sse = fit.sse, "fitted Holt model");
        ModelArtifact::from_holt_fit(&fit, &series)
    };

    save_model(&args.output, &artifact)
        .with_context(|| format!("failed to write model to {}", args.output.display()))?;
    println!("{}", artifact.to_json()?);
    Ok(())
}

fn run_catalog(settings: &Settings) -> Result<()> {
    let catalog = load_catalog(settings.catalog_path.as_deref())?;

    println!("Views:");
    for view in View::ALL {
        println!("  {:<10} {}", format!("{:?}", view).to_lowercase(), view.label());
    }
    println!("Cities:");
    for city in catalog.cities() {
        println!("  {}", city);
    }
    println!("Treatment categories:");
    for treatment in catalog.treatments() {
        println!("  {}", treatment);
    }
    println!("Procedures:");
    for procedure in catalog.procedures() {
        println!("  {:<20} {:>10.0} MYR", procedure.name, procedure.cost_myr);
    }
    Ok(())
}
