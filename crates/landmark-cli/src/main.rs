//! landmark CLI - inspect rule collections and locate landmarks.

mod profile_file;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use landmark::{
    presets, read_collection, write_collection, EvalError, FinderConfig, LandmarkFinder,
    ProfileKind, ProfileMap, RuleSetCollection,
};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "landmark")]
#[command(about = "Locate landmarks on nucleus profiles with rule set collections")]
#[command(version)]
struct Cli {
    /// Increase log detail (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a built-in collection as XML.
    Preset {
        #[arg(value_enum)]
        name: PresetArg,

        /// Output file; prints to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Decode a collection file and print its summary.
    Check {
        /// Collection XML file.
        file: PathBuf,
    },

    /// Locate every landmark of a collection on one set of profiles.
    Find(FindArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PresetArg {
    Mouse,
    Pig,
    Round,
}

impl PresetArg {
    fn to_collection(self) -> RuleSetCollection {
        match self {
            Self::Mouse => presets::mouse_sperm(),
            Self::Pig => presets::pig_sperm(),
            Self::Round => presets::round(),
        }
    }
}

#[derive(Debug, Clone, Args)]
struct FindArgs {
    /// Collection XML file.
    collection: PathBuf,

    /// Profile as KIND=PATH (ANGLE, DIAMETER or RADIUS). Repeatable.
    #[arg(long = "profile", value_parser = profile_file::parse_profile_arg, required = true)]
    profiles: Vec<(ProfileKind, PathBuf)>,

    /// Finder configuration (TOML, or YAML by extension).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    };
    landmark::console::init_with_level(level);

    match cli.command {
        Commands::Preset { name, out } => run_preset(name, out),
        Commands::Check { file } => run_check(&file),
        Commands::Find(args) => run_find(&args),
    }
}

// ── preset ─────────────────────────────────────────────────────────────

fn run_preset(name: PresetArg, out: Option<PathBuf>) -> CliResult<()> {
    let collection = name.to_collection();
    match out {
        Some(path) => write_collection(&path, &collection)?,
        None => println!("{}", landmark::encode_collection(&collection)?),
    }
    Ok(())
}

// ── check ──────────────────────────────────────────────────────────────

fn run_check(file: &Path) -> CliResult<()> {
    let collection = read_collection(file)?;
    print!("{collection}");

    match collection.governing_axis() {
        Some(axis) => println!("  governing axis: {axis}"),
        None => println!("  symmetric: no governing axis"),
    }

    let mut warnings = 0;
    for landmark in collection.landmarks() {
        for rule_set in collection.rule_sets(landmark) {
            for rule in rule_set.rules() {
                for warning in rule.warnings() {
                    println!("  warning: {landmark}: {warning}");
                    warnings += 1;
                }
            }
        }
    }
    println!("  {warnings} warning(s)");
    Ok(())
}

// ── find ───────────────────────────────────────────────────────────────

fn run_find(args: &FindArgs) -> CliResult<()> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => FinderConfig::default(),
    };
    let collection = read_collection(&args.collection)?;

    let mut profiles = ProfileMap::new();
    for (kind, path) in &args.profiles {
        let values = profile_file::read_values(path)?;
        tracing::info!("Loaded {} profile: {} values", kind, values.len());
        profiles.insert(*kind, values);
    }

    let finder = LandmarkFinder::new(config);
    let results = finder.find_all(&collection, &profiles);

    let mut failed = 0;
    for (landmark, result) in &results {
        match result {
            Ok(index) => println!("{landmark}: {index}"),
            Err(EvalError::NoRuleSets(_)) => println!("{landmark}: supplied externally"),
            Err(err) => {
                println!("{landmark}: {err}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} landmark(s) not resolved").into());
    }
    Ok(())
}

fn load_config(path: &Path) -> CliResult<FinderConfig> {
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
    let config = if is_yaml {
        FinderConfig::from_yaml_file(path)?
    } else {
        FinderConfig::load(path)?
    };
    tracing::debug!(?config, "Loaded finder configuration");
    Ok(config)
}
