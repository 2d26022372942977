use analyzer_options::analyzer::CheckerIdentity;
use analyzer_options::{AnalyzerOptions, CheckerRegistry, ConfigError, ConfigLoader};
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Resolve and inspect static analyzer options
///
/// Options are read from a TOML config file and `-c KEY=VALUE` pairs.
/// Checker-scoped options use `checker.full.Name:option` keys.
#[derive(Parser, Debug)]
#[command(name = "analyzer-options")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Set an option (repeatable), e.g. `-c mode=shallow` or
    /// `-c alpha.core:strict=true`
    #[arg(short = 'c', long = "config", value_name = "KEY=VALUE")]
    pairs: Vec<String>,

    /// Config file to load instead of the default locations
    #[arg(long)]
    config_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Log to file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the checkers a user can enable
    Checkers {
        /// Include experimental (alpha) checkers
        #[arg(long)]
        include_experimental: bool,

        /// Print each checker's description next to its name, marking
        /// checkers hidden from the user-facing help
        #[arg(long)]
        describe: bool,
    },

    /// Print the value an option resolves to
    Get {
        /// Option name
        option: String,

        /// Resolve the option for this checker
        #[arg(long)]
        checker: Option<String>,

        /// Only look at the checker's own key, not its parent packages
        #[arg(long, requires = "checker")]
        no_search_parents: bool,

        /// Value used when the option is not set
        #[arg(long, default_value = "")]
        default: String,
    },

    /// Check every honored option and report all invalid values
    Validate,

    /// Print the effective configuration
    Dump {
        #[arg(long, value_enum, default_value_t = DumpFormat::Text)]
        format: DumpFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DumpFormat {
    Text,
    Json,
}

fn setup_logging(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if let Some(log_path) = log_file {
        let file = std::fs::File::create(log_path)?;
        subscriber.with_writer(file).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    Ok(())
}

fn load_options(args: &Args) -> Result<AnalyzerOptions> {
    let mut loader = ConfigLoader::new().with_pairs(&args.pairs)?;
    if let Some(path) = &args.config_file {
        loader = loader.with_config_file(path);
    }

    let config = loader.load()?;
    info!("Loaded {} raw option(s)", config.len());
    Ok(AnalyzerOptions::new(config))
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args.log_level, args.log_file.clone())?;
    debug!("Starting analyzer-options v{}", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout().lock();

    match &args.command {
        Command::Checkers {
            include_experimental,
            describe,
        } => {
            let registry = CheckerRegistry::builtin()?;
            for name in registry.registered_checkers(*include_experimental) {
                match registry.get(name) {
                    Some(info) if *describe => {
                        let marker = if info.hidden { " [hidden]" } else { "" };
                        writeln!(stdout, "{:<48} {}{}", name, info.description, marker)?
                    }
                    _ => writeln!(stdout, "{}", name)?,
                }
            }
        }
        Command::Get {
            option,
            checker,
            no_search_parents,
            default,
        } => {
            let mut options = load_options(&args)?;
            let checker = checker.as_ref().map(|c| c as &dyn CheckerIdentity);
            let value = options.string_option(option, default, checker, !no_search_parents);
            writeln!(stdout, "{}", value)?;
        }
        Command::Validate => {
            let mut options = load_options(&args)?;
            options.validate().map_err(ConfigError::Validation)?;
            info!("All {} option(s) valid", options.config().len());
            writeln!(stdout, "ok")?;
        }
        Command::Dump { format } => {
            let mut options = load_options(&args)?;
            options.validate().map_err(ConfigError::Validation)?;
            match format {
                DumpFormat::Text => {
                    for (key, value) in options.config().iter() {
                        writeln!(stdout, "{} = {}", key, value)?;
                    }
                }
                DumpFormat::Json => {
                    serde_json::to_writer_pretty(&mut stdout, options.config())
                        .map_err(ConfigError::from)?;
                    writeln!(stdout)?;
                }
            }
        }
    }

    Ok(())
}
