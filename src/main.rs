use std::io::{self, BufRead, Write};
use steam_common_games::{
    find_common_games,
    parse_handles,
    write_workbook,
    Config,
    Error,
    GamesTable,
    SteamWebAPI,
};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "Enter the Steam vanity URLs or usernames of the users, separated by commas: ";

fn read_handles_line() -> Result<String, Error> {
    let mut stdout = io::stdout();
    
    stdout.write_all(PROMPT.as_bytes())?;
    stdout.flush()?;
    
    let mut line = String::new();
    
    io::stdin().lock().read_line(&mut line)?;
    
    Ok(line)
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    let handles = parse_handles(&read_handles_line()?);
    
    if handles.is_empty() {
        return Err(Error::NoHandles);
    }
    
    let mut builder = SteamWebAPI::builder(config.api_key.clone())
        .include_played_free_games(config.include_played_free_games);
    
    if let Some(api_hostname) = &config.api_hostname {
        builder = builder.api_hostname(api_hostname.clone());
    }
    
    let api = builder.build()?;
    let report = find_common_games(&api, &handles, config.denominator).await;
    let table = GamesTable::from_report(&report);
    
    log::info!("{} games in common", report.common_games.len());
    write_workbook(&config.output, &table)?;
    println!("The list of games and common games has been saved to '{}'.", config.output.display());
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    
    if let Err(error) = run().await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
