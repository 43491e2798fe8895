use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use apkrisk::config::Config;
use apkrisk::output::OutputFormat;
use apkrisk::report::RiskLevel;
use apkrisk::rules::RiskRuleSet;
use apkrisk::ScanOptions;

#[derive(Parser)]
#[command(
    name = "apkrisk",
    about = "Privacy risk scanner for Android application packages",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a package archive and persist its risk report
    Scan {
        /// Path to the APK (with a <apk>.facts.json sidecar) or to the
        /// exported facts document itself
        path: PathBuf,

        /// Config file path
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output format (console, json)
        #[arg(long, short = 'f', default_value = "console")]
        format: String,

        /// Directory for persisted reports (overrides config)
        #[arg(long)]
        reports_dir: Option<PathBuf>,

        /// Write output to file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Exit non-zero if the risk level is at or above this (low, medium, high)
        #[arg(long)]
        fail_on: Option<String>,
    },

    /// List the active risk rules
    ListRules {
        /// Output format (table, json)
        #[arg(long, short = 'f', default_value = "table")]
        format: String,
    },

    /// Generate a starter .apkrisk.toml config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan {
            path,
            config,
            format,
            reports_dir,
            output,
            fail_on,
        } => cmd_scan(path, config, format, reports_dir, output, fail_on),
        Commands::ListRules { format } => cmd_list_rules(format),
        Commands::Init { force } => cmd_init(force),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn cmd_scan(
    path: PathBuf,
    config: Option<PathBuf>,
    format_str: String,
    reports_dir: Option<PathBuf>,
    output_path: Option<PathBuf>,
    fail_on_str: Option<String>,
) -> Result<i32, apkrisk::error::RiskError> {
    let format = OutputFormat::from_str_lenient(&format_str).unwrap_or_else(|| {
        eprintln!("Warning: unknown format '{}', using console", format_str);
        OutputFormat::Console
    });

    let fail_on = fail_on_str.and_then(|s| {
        let level = RiskLevel::from_str_lenient(&s);
        if level.is_none() {
            eprintln!("Warning: unknown risk level '{}', ignoring --fail-on", s);
        }
        level
    });

    let options = ScanOptions {
        config_path: config,
        reports_dir,
    };

    let outcome = apkrisk::scan_archive(&path, &options)?;
    let rendered = apkrisk::output::render(&outcome.report, format)?;

    match output_path {
        Some(out) => std::fs::write(&out, &rendered)?,
        None => print!("{}", rendered),
    }

    if let Some(e) = &outcome.persist_error {
        eprintln!("Warning: report not persisted: {}", e);
    }

    // Exit code: 0 = below threshold, 1 = at/above threshold
    let failed = fail_on.is_some_and(|threshold| outcome.report.risk_level >= threshold);
    Ok(if failed { 1 } else { 0 })
}

fn cmd_list_rules(format_str: String) -> Result<i32, apkrisk::error::RiskError> {
    let rules = RiskRuleSet::builtin();

    match format_str.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(rules)?;
            println!("{}", json);
        }
        _ => {
            println!("Dangerous permissions:");
            for p in rules.dangerous_permissions() {
                println!("  {}", p);
            }
            println!();
            println!("{:<24} SUBSTRINGS", "INSECURE API PATTERN");
            println!("{}", "-".repeat(60));
            for pattern in rules.api_patterns() {
                println!("{:<24} {}", pattern.name, pattern.substrings.join(" AND "));
            }
        }
    }

    Ok(0)
}

fn cmd_init(force: bool) -> Result<i32, apkrisk::error::RiskError> {
    let path = PathBuf::from(".apkrisk.toml");

    if path.exists() && !force {
        eprintln!(".apkrisk.toml already exists. Use --force to overwrite.");
        return Ok(1);
    }

    std::fs::write(&path, Config::starter_toml())?;
    println!("Created .apkrisk.toml");

    Ok(0)
}
