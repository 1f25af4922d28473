use std::process::ExitCode;

use discogs_oauth::{flow, Client, Console, DiscogsConfig, ProcessEnv};

fn main() -> ExitCode {
    // variables already set in the environment take precedence over .env
    let dotenv = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Ok(path) = dotenv {
        log::debug!("loaded {}", path.display());
    }

    let mut console = Console::stdio();
    let result = Client::new(DiscogsConfig::default())
        .and_then(|client| flow::run(&client, &ProcessEnv, &mut console));

    ExitCode::from(flow::report(result, &mut console))
}
