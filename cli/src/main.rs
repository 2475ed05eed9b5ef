//! sheetcopy CLI - landing page copy loader

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use sheetcopy::render::{current_year, to_json, to_outline};
use sheetcopy::{
    validate_json, Brand, ContentDocument, ContentLoader, JsonFormat, LoadReport, LoaderConfig,
    LoaderOptions, SheetSource, SourceStatus,
};

#[derive(Parser)]
#[command(name = "sheetcopy")]
#[command(version)]
#[command(about = "Load landing page copy from published spreadsheets", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE", env = "SHEETCOPY_CONFIG")]
    config: Option<PathBuf>,

    /// Combined sheet URL or path, overrides the configuration
    #[arg(long, global = true, value_name = "URL", env = "SHEETCOPY_URL")]
    url: Option<String>,

    /// Brand whose defaults are used
    #[arg(long, global = true, value_enum)]
    brand: Option<BrandArg>,

    /// Per-source timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Skip malformed rows instead of discarding a sheet
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the sheets and print the content document as JSON
    Fetch {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show what each source contributed
    Info {
        /// Also print an outline of the loaded content
        #[arg(long)]
        outline: bool,
    },

    /// Complete a JSON content document from the defaults
    Validate {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the brand's default content document
    Defaults {
        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Reload periodically and rewrite the output file
    Watch {
        /// Output file
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Refresh interval in seconds
        #[arg(long, value_name = "SECS")]
        interval: Option<u64>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BrandArg {
    /// SEYU fan engagement platform
    Seyu,
    /// BFOUND lost and found service
    Bfound,
}

impl From<BrandArg> for Brand {
    fn from(brand: BrandArg) -> Self {
        match brand {
            BrandArg::Seyu => Brand::Seyu,
            BrandArg::Bfound => Brand::Bfound,
        }
    }
}

/// Loader settings after merging the configuration file and flags.
struct Settings {
    brand: Brand,
    options: LoaderOptions,
    refresh: Duration,
}

impl Settings {
    fn resolve(cli: &Cli) -> Result<Self, Box<dyn std::error::Error>> {
        let config = match &cli.config {
            Some(path) => LoaderConfig::from_file(path)?,
            None => LoaderConfig::default(),
        };
        let refresh = config.refresh_interval();
        let mut brand = config.brand()?;
        let mut options = config.into_options()?;

        if let Some(arg) = cli.brand {
            brand = arg.into();
            options = options.with_brand(brand);
        }
        if let Some(url) = &cli.url {
            options = options.with_fallback(SheetSource::combined(url.as_str()));
        }
        if let Some(secs) = cli.timeout {
            options = options.with_timeout(Duration::from_secs(secs));
        }
        if cli.lenient {
            options = options.lenient();
        }
        log::debug!(
            "Resolved {} sources for brand {}, timeout {:?}",
            source_count(&options),
            brand,
            options.timeout
        );

        Ok(Self {
            brand,
            options,
            refresh,
        })
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Fetch { output, compact }) => {
            cmd_fetch(&cli, output.as_deref(), *compact).await
        }
        Some(Commands::Info { outline }) => cmd_info(&cli, *outline).await,
        Some(Commands::Validate {
            input,
            output,
            compact,
        }) => cmd_validate(&cli, input, output.as_deref(), *compact),
        Some(Commands::Defaults { compact }) => cmd_defaults(&cli, *compact),
        Some(Commands::Watch { output, interval }) => cmd_watch(&cli, output, *interval).await,
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: sheetcopy <COMMAND>".yellow());
            println!("       sheetcopy --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn write_output(text: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }
    Ok(())
}

async fn load_with_spinner(options: LoaderOptions) -> (ContentDocument, LoadReport) {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Fetching {} sheets...", source_count(&options)));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = ContentLoader::new(options).load_with_report().await;

    pb.finish_and_clear();
    result
}

fn source_count(options: &LoaderOptions) -> usize {
    options.sources.len() + usize::from(options.fallback.is_some())
}

fn warn_on_degraded(report: &LoadReport) {
    if report.failed_sources() > 0 {
        eprintln!(
            "{} {} of {} sources failed",
            "Warning:".yellow().bold(),
            report.failed_sources(),
            report.sources.len()
        );
    }
    if report.is_pure_defaults() {
        eprintln!("{} using default content", "Warning:".yellow().bold());
    }
}

async fn cmd_fetch(
    cli: &Cli,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::resolve(cli)?;
    let (doc, report) = load_with_spinner(settings.options).await;
    warn_on_degraded(&report);

    let json = to_json(&doc, json_format(compact))?;
    write_output(&json, output)
}

async fn cmd_info(cli: &Cli, outline: bool) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::resolve(cli)?;
    let (doc, report) = load_with_spinner(settings.options).await;

    println!("{}", "Sources".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if report.sources.is_empty() {
        println!("{}", "(none configured)".dimmed());
    }
    for outcome in &report.sources {
        let status = match &outcome.status {
            SourceStatus::Loaded { .. } => outcome.status.to_string().green(),
            SourceStatus::Failed { .. } => outcome.status.to_string().red(),
            SourceStatus::TimedOut => outcome.status.to_string().yellow(),
        };
        let label = match &outcome.section {
            Some(section) => section.as_str(),
            None if outcome.fallback => "combined (fallback)",
            None => "combined",
        };
        println!("{}: {}", label.bold(), outcome.locator);
        println!("  {} {}", "└─".dimmed(), status);
    }

    println!();
    println!("{}", "Load Summary".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Brand".bold(), settings.brand);
    println!("{}: {}", "Records fetched".bold(), report.records_fetched());
    println!("{}: {}", "Records applied".bold(), report.records_applied);
    println!("{}: {}", "Records ignored".bold(), report.records_ignored);
    println!(
        "{}: {}",
        "Used fallback".bold(),
        if report.used_fallback { "Yes" } else { "No" }
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Navigation".bold(), doc.header.navigation.len());
    println!("{}: {}", "Hero buttons".bold(), doc.hero.buttons.len());
    println!("{}: {}", "Feature items".bold(), doc.features.items.len());
    println!("{}: {}", "Statistics".bold(), doc.statistics.items.len());
    println!("{}: {}", "Footer links".bold(), doc.footer.links.len());

    if !report.diagnostics.is_empty() {
        println!();
        println!("{}", "Diagnostics".yellow().bold());
        for message in &report.diagnostics {
            println!("  {} {}", "-".dimmed(), message);
        }
    }

    if outline {
        println!();
        println!("{}", to_outline(&doc, current_year()));
    }

    Ok(())
}

fn cmd_validate(
    cli: &Cli,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::resolve(cli)?;
    let text = fs::read_to_string(input)?;

    let validated = validate_json(&text, &settings.brand.default_content());
    for message in &validated.diagnostics {
        eprintln!("{} {}", "Filled:".yellow(), message);
    }

    let json = to_json(&validated.document, json_format(compact))?;
    write_output(&json, output)
}

fn cmd_defaults(cli: &Cli, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::resolve(cli)?;
    let json = to_json(&settings.brand.default_content(), json_format(compact))?;
    println!("{}", json);
    Ok(())
}

async fn cmd_watch(
    cli: &Cli,
    output: &Path,
    interval: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::resolve(cli)?;
    let interval = interval
        .map(Duration::from_secs)
        .unwrap_or(settings.refresh);
    let loader = ContentLoader::new(settings.options);

    println!(
        "{} {} every {}s (Ctrl-C to stop)",
        "Watching".cyan().bold(),
        output.display(),
        interval.as_secs()
    );

    loop {
        let (doc, report) = loader.load_with_report().await;
        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

        // A failed write is retried on the next refresh.
        match write_snapshot(&doc, output) {
            Ok(()) => {
                let summary = format!(
                    "{} records applied, {} sources failed",
                    report.records_applied,
                    report.failed_sources()
                );
                if report.failed_sources() > 0 || report.is_pure_defaults() {
                    println!("[{}] {}", stamp.to_string().dimmed(), summary.yellow());
                } else {
                    println!("[{}] {}", stamp.to_string().dimmed(), summary.green());
                }
            }
            Err(e) => {
                log::error!("Failed to write {}: {}", output.display(), e);
                eprintln!(
                    "[{}] {} {}: {}",
                    stamp.to_string().dimmed(),
                    "Write failed".red().bold(),
                    output.display(),
                    e
                );
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => {
                println!("{}", "Stopped".green());
                return Ok(());
            }
        }
    }
}

fn write_snapshot(doc: &ContentDocument, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json = to_json(doc, JsonFormat::Pretty)?;
    fs::write(output, json)?;
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "sheetcopy".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Landing page copy loader");
    println!();
    println!("Brands: {}", Brand::ALL.map(|b| b.as_str()).join(", ").dimmed());
    println!("License: MIT");
}
