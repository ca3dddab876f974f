mod config;

use clap::{Parser, Subcommand};
use config::Config;
use riot_api::{RiotApi, Season};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "riot-lookup")]
#[command(about = "Query the League of Legends api and print the result as JSON", long_about = None)]
struct Args {
    #[command(flatten)]
    config: Config,

    /// Log verbosity: error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summoner by name
    Summoner { name: String },
    /// Summoner by id
    SummonerId { id: String },
    /// Names for a list of summoner ids
    Names {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    Masteries { id: String },
    Runes { id: String },
    /// Ranked stats per champion
    Ranked {
        id: String,
        #[arg(short, long)]
        season: Option<Season>,
    },
    /// Stats summary per queue type
    Summary {
        id: String,
        #[arg(short, long)]
        season: Option<Season>,
    },
    /// All champions, or the free rotation with --free
    Champions {
        #[arg(long)]
        free: bool,
    },
    Recent { id: String },
    League { id: String },
    Team { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // stdout carries the JSON and the debug request lines
    tracing_subscriber::fmt()
        .without_time()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level)
        .init();

    let client = args.config.client()?;
    run(&client, args.command).await
}

async fn run(client: &RiotApi, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summoner { name } => print(client.summoner().by_name(&name).send().await),
        Command::SummonerId { id } => print(client.summoner().by_id(&id).send().await),
        Command::Names { ids } => print(client.summoner().names(ids.as_slice()).send().await),
        Command::Masteries { id } => print(client.summoner().masteries(&id).send().await),
        Command::Runes { id } => print(client.summoner().runes(&id).send().await),
        Command::Ranked { id, season } => {
            let mut request = client.stats().ranked(&id);
            if let Some(season) = season {
                request = request.season(season);
            }
            print(request.send().await)
        }
        Command::Summary { id, season } => {
            let mut request = client.stats().summary(&id);
            if let Some(season) = season {
                request = request.season(season);
            }
            print(request.send().await)
        }
        Command::Champions { free } => {
            let champions = client.champions();
            let request = if free {
                champions.free()
            } else {
                champions.list()
            };
            print(request.send().await)
        }
        Command::Recent { id } => print(client.game().recent(&id).send().await),
        Command::League { id } => print(client.league().by_summoner(&id).send().await),
        Command::Team { id } => print(client.team().by_summoner(&id).send().await),
    }
}

/// Pretty-print a result. An error payload passed through by the client is
/// printed as-is rather than treated as a failure.
fn print<T: Serialize>(result: riot_api::Result<T>) -> anyhow::Result<()> {
    match result {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(riot_api::Error::Payload { status, payload }) => {
            tracing::warn!(status = status.as_u16(), "request rejected");
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
