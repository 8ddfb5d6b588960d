//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use yahoo_fantasy::{
    cli::{CacheCmd, Commands, Yahoo},
    commands::{
        get::handle_get,
        league::{handle_analyze_teams, handle_import_league, handle_value_players},
        maintenance::{handle_cache_clean, handle_game_key},
        trade::handle_trade,
    },
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let app = Yahoo::parse();

    match app.command {
        Commands::Get { cmd } => handle_get(cmd).await?,

        Commands::ImportLeague {
            game,
            league_id,
            team_id,
        } => handle_import_league(game, league_id, team_id).await?,

        Commands::ValuePlayers {
            league_id,
            stats_season,
            top,
            json,
        } => handle_value_players(league_id, stats_season, top, json)?,

        Commands::AnalyzeTeams { league_id, json } => handle_analyze_teams(league_id, json)?,

        Commands::Trade { cmd } => handle_trade(cmd)?,

        Commands::Cache { cmd } => match cmd {
            CacheCmd::Clean => handle_cache_clean()?,
        },

        Commands::GameKey { game, season } => handle_game_key(game, season)?,
    }

    Ok(())
}
