#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use zkllvm_bench::core::{ToolConfig, load_tool_config};
use zkllvm_bench::process::SystemRunner;
use zkllvm_bench::session::BenchmarkSession;
use zkllvm_bench::{BenchResult, collect_system_info};

#[derive(Parser, Debug)]
#[command(name = "zkllvm-bench")]
#[command(about = "Automate benchmarking of zkLLVM assigner and proof generation", long_about = None)]
struct Cli {
    /// Path to the zkllvm-template directory
    #[arg(long)]
    zkllvm_template_path: PathBuf,

    /// TOML file overriding external tool names and arguments
    #[arg(long)]
    config: Option<PathBuf>,

    /// Compile the circuit before verifying the build
    #[arg(long)]
    compile: bool,

    /// Enable verbose logging (or set ZKLLVM_BENCH_LOG)
    #[arg(long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("ZKLLVM_BENCH_LOG").unwrap_or_else(|_| {
        if verbose { "zkllvm_bench=debug".to_string() } else { "zkllvm_bench=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn run(cli: Cli) -> BenchResult<()> {
    let tools = match &cli.config {
        Some(path) => load_tool_config(path)?,
        None => ToolConfig::default(),
    };
    let work_dir = match &tools.work_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let template_root = cli.zkllvm_template_path.canonicalize().unwrap_or(cli.zkllvm_template_path);
    info!(template = %template_root.display(), work_dir = %work_dir.display(), "Using zkllvm-template path");

    let host = collect_system_info();
    info!(
        cpu = host.cpu_model.as_deref().unwrap_or("unknown"),
        cores = host.cpu_cores_logical.unwrap_or_default(),
        physical_cores = host.cpu_cores_physical.unwrap_or_default(),
        os = host.os.as_deref().unwrap_or("unknown"),
        ram_bytes = host.total_ram_bytes.unwrap_or_default(),
        "host"
    );

    let mut session = BenchmarkSession::new(template_root, tools, work_dir, Box::new(SystemRunner::new()));
    if cli.compile {
        session.compile_circuit()?;
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout)
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
