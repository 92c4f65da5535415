//! aquifer-prospect CLI: serve, analyze, report, verify.

use aquifer_prospect::report::{LocationQuery, ProspectReport};
use aquifer_prospect::server::{serve, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use aquifer_prospect::verify::{report_fingerprint, verify_report};
use aquifer_prospect_report::render_report;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();
    let cli = Cli::parse();
    match cli.command {
        Command::Serve(args) => run_serve(args),
        Command::Analyze(args) => run_analyze(args),
        Command::Report(args) => run_report(args),
        Command::Verify(args) => run_verify(args),
    }
}

#[derive(Parser)]
#[command(name = "aquifer-prospect")]
#[command(version)]
#[command(about = "Deterministic groundwater prospect reports for a location")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP service (POST /api/analyze).
    Serve(ServeArgs),
    /// Print the report JSON for a location.
    Analyze(AnalyzeArgs),
    /// Write an HTML report, report JSON and fingerprint.
    Report(ReportArgs),
    /// Re-score a saved report JSON and compare.
    Verify(VerifyArgs),
}

#[derive(Parser)]
struct ServeArgs {
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[derive(Parser)]
struct AnalyzeArgs {
    #[arg(long)]
    location: String,
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser)]
struct ReportArgs {
    #[arg(long)]
    location: String,
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, default_value = "./reports")]
    reports_dir: PathBuf,
}

#[derive(Parser)]
struct VerifyArgs {
    #[arg(long)]
    report: PathBuf,
}

fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(serve(config))?;
    Ok(())
}

/// Same boundary check as the HTTP handler.
fn build_report(location: String) -> Result<ProspectReport, Box<dyn std::error::Error>> {
    let query = LocationQuery::new(location);
    let location = query.validated_location()?;
    Ok(ProspectReport::now(location)?)
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let report = build_report(args.location)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);
    Ok(())
}

/// File-name-safe stem for a location.
fn slug(location: &str) -> String {
    let mut out = String::new();
    for c in location.trim().chars().take(40) {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "report".to_string()
    } else {
        trimmed.to_string()
    }
}

/// `<slug>-<fingerprint prefix>`: locations that slug alike still get distinct files.
fn report_stem(location: &str, fingerprint: &str) -> String {
    let prefix: String = fingerprint.chars().take(8).collect();
    format!("{}-{}", slug(location), prefix)
}

fn run_report(args: ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let report = build_report(args.location)?;
    let fingerprint = report_fingerprint(&report)?;
    std::fs::create_dir_all(&args.reports_dir)?;
    let stem = report_stem(&report.location, &fingerprint);
    let html_path = args
        .out
        .unwrap_or_else(|| args.reports_dir.join(format!("{}.html", stem)));
    let json_path = args.reports_dir.join(format!("{}.report.json", stem));
    let hash_path = args.reports_dir.join(format!("{}.sha256", stem));
    render_report(&report, &html_path)?;
    std::fs::write(&json_path, serde_json::to_string_pretty(&report)?)?;
    std::fs::write(&hash_path, format!("{}\n", fingerprint))?;
    info!(?html_path, ?json_path, ?hash_path, verdict = %report.score.verdict, "report complete");
    println!("Report written to {}", html_path.display());
    Ok(())
}

fn run_verify(args: VerifyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let report_json = std::fs::read_to_string(&args.report)?;
    let report: ProspectReport = serde_json::from_str(&report_json)?;
    let result = verify_report(&report)?;
    if result.matches {
        println!("OK\t{}", result.fingerprint);
    } else {
        eprintln!(
            "MISMATCH\tcomputed={}\texpected={}\tfields={}",
            result.fingerprint,
            result.expected_fingerprint,
            result.mismatched_fields.join(",")
        );
        std::process::exit(1);
    }
    Ok(())
}
