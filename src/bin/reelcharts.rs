use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use reelcharts::{
    BubbleScene, ChartConfig, FileSource, RankingScene, RecordStore, ReelResult, ScatterScene,
    Scene, SceneSession, SharedRecords, write_chart,
};

#[derive(Parser, Debug)]
#[command(name = "reelcharts", version, about = "Render movie dataset chart scenes")]
struct Cli {
    /// Chart configuration JSON (layouts, palette, raster settings).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mean score per genre for one year.
    Ranking(RankingArgs),
    /// Budget vs gross revenue for selected companies.
    Scatter(ScatterArgs),
    /// Score bubbles for one genre and score window.
    Bubbles(BubblesArgs),
    /// Render all three scenes with their initial controls.
    All(AllArgs),
    /// Print the selectable years, companies and genres as JSON.
    Options(OptionsArgs),
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output path (.svg or .png).
    #[arg(long, required_unless_present = "json")]
    out: Option<PathBuf>,

    /// Print the computed view as JSON instead of drawing it.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct RankingArgs {
    /// Dataset CSV.
    #[arg(long)]
    data: PathBuf,

    /// Release year (defaults to 2010, or the first year in the dataset).
    #[arg(long)]
    year: Option<i32>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct ScatterArgs {
    /// Dataset CSV.
    #[arg(long)]
    data: PathBuf,

    /// Company to select; repeat for several. Replaces the default selection.
    #[arg(long = "company")]
    companies: Vec<String>,

    /// Company list search text (affects option visibility only).
    #[arg(long)]
    search: Option<String>,

    /// Start from an empty selection.
    #[arg(long, default_value_t = false)]
    unselect_all: bool,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct BubblesArgs {
    /// Dataset CSV.
    #[arg(long)]
    data: PathBuf,

    /// Genre (defaults to the first genre with funded movies).
    #[arg(long)]
    genre: Option<String>,

    /// Lowest score shown.
    #[arg(long)]
    score_min: Option<f64>,

    /// Highest score shown.
    #[arg(long)]
    score_max: Option<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct AllArgs {
    /// Dataset CSV.
    #[arg(long)]
    data: PathBuf,

    /// Directory receiving ranking/scatter/bubbles charts.
    #[arg(long)]
    out_dir: PathBuf,

    /// Write PNG instead of SVG.
    #[arg(long, default_value_t = false)]
    png: bool,
}

#[derive(Args, Debug)]
struct OptionsArgs {
    /// Dataset CSV.
    #[arg(long)]
    data: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };

    match cli.cmd {
        Command::Ranking(args) => cmd_ranking(&config, args),
        Command::Scatter(args) => cmd_scatter(&config, args),
        Command::Bubbles(args) => cmd_bubbles(&config, args),
        Command::All(args) => cmd_all(&config, args),
        Command::Options(args) => cmd_options(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_ranking(config: &ChartConfig, args: RankingArgs) -> anyhow::Result<()> {
    run_scene::<RankingScene>(config, &args.data, &args.output, |c| match args.year {
        Some(year) => c.year.select(&year),
        None => Ok(()),
    })
}

fn cmd_scatter(config: &ChartConfig, args: ScatterArgs) -> anyhow::Result<()> {
    run_scene::<ScatterScene>(config, &args.data, &args.output, |c| {
        if args.unselect_all || !args.companies.is_empty() {
            c.companies.unselect_all();
        }
        for company in &args.companies {
            c.companies.select(company)?;
        }
        if let Some(text) = &args.search {
            c.companies.set_search(text);
            tracing::info!(
                search = %text,
                visible = c.companies.visible().count(),
                "company search applied"
            );
        }
        Ok(())
    })
}

fn cmd_bubbles(config: &ChartConfig, args: BubblesArgs) -> anyhow::Result<()> {
    run_scene::<BubbleScene>(config, &args.data, &args.output, |c| {
        if let Some(genre) = &args.genre {
            c.genre.select(genre)?;
        }
        if let Some(min) = args.score_min {
            c.scores.set_min(min)?;
        }
        if let Some(max) = args.score_max {
            c.scores.set_max(max)?;
        }
        Ok(())
    })
}

fn run_scene<S: Scene>(
    config: &ChartConfig,
    data: &Path,
    output: &OutputArgs,
    configure: impl FnOnce(&mut S::Controls) -> ReelResult<()>,
) -> anyhow::Result<()> {
    let mut session = SceneSession::<S>::new(config.clone());
    session
        .load(&FileSource::new(data))
        .with_context(|| format!("load dataset '{}'", data.display()))?;
    session
        .update(configure)
        .with_context(|| format!("apply {} controls", S::NAME))?;

    if output.json {
        let view = session.view().context("scene produced no view")?;
        println!("{}", serde_json::to_string_pretty(view)?);
        return Ok(());
    }

    let out = output.out.as_deref().context("--out is required")?;
    let chart = session.chart().context("scene produced no chart")?;
    write_chart(chart, out, &config.raster)
        .with_context(|| format!("write {} chart", S::NAME))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_all(config: &ChartConfig, args: AllArgs) -> anyhow::Result<()> {
    let records = SharedRecords::new(FileSource::new(&args.data));
    let ext = if args.png { "png" } else { "svg" };
    render_initial::<RankingScene>(config, &records, &args.out_dir, ext)?;
    render_initial::<ScatterScene>(config, &records, &args.out_dir, ext)?;
    render_initial::<BubbleScene>(config, &records, &args.out_dir, ext)?;
    Ok(())
}

fn render_initial<S: Scene>(
    config: &ChartConfig,
    records: &SharedRecords,
    out_dir: &Path,
    ext: &str,
) -> anyhow::Result<()> {
    let store = records.get().context("load dataset")?;
    let mut session = SceneSession::<S>::new(config.clone());
    session.attach(&store);
    let chart = session
        .redraw()
        .with_context(|| format!("build {} scene", S::NAME))?;
    let out = out_dir.join(format!("{}.{ext}", S::NAME));
    write_chart(chart, &out, &config.raster)
        .with_context(|| format!("write {} chart", S::NAME))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_options(args: OptionsArgs) -> anyhow::Result<()> {
    let store = RecordStore::load(&FileSource::new(&args.data))
        .with_context(|| format!("load dataset '{}'", args.data.display()))?;
    let options = serde_json::json!({
        "years": store.years(),
        "companies": store.companies(),
        "genres": store.genres(),
    });
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
