use clap::Parser as _;

use quantum_chess::{EngineConfig, Suggestion, suggest_or_failure};

#[derive(clap::Parser, Debug)]
#[command(about = "Suggest a quantum-inspired move for a chess position")]
struct Cli {
    /// Position in Forsyth-Edwards Notation
    fen: String,
}

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    )
    .target(env_logger::Target::Stderr)
    .write_style(env_logger::WriteStyle::Never)
    .init();
}

fn main() {
    // Wrong argument counts exit here with usage on stderr.
    let cli = Cli::parse();
    init_logging();

    let suggestion = match EngineConfig::from_env() {
        Ok(config) => suggest_or_failure(&cli.fen, &config),
        Err(e) => Suggestion::from_result(Err(e)),
    };
    println!("{}", suggestion.to_json_line());
}
