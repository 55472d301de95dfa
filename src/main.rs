use clap::Parser;
use finviz::pipeline::Visualizer;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "finviz")]
#[command(about = "Batch chart generator for delimited data files", long_about = None)]
struct Cli {
    /// Path to the JSON config file defining source files and columns.
    #[arg(long)]
    config: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut visualizer = Visualizer::new();
    if let Err(e) = visualizer.load_config(&cli.config) {
        eprintln!("Critical error: {e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = visualizer.process_all() {
        eprintln!("Critical error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
