use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use musicscope::{
    report, AnalysisOptions, AnalysisRequest, Analyzer, CatalogApi, CatalogEndpoints, Credentials,
    DataSource, PartitionSettings, SourceMode, SpotifyApi,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "musicscope-cli")]
#[command(about = "CLI for MusicScope - discover your musical taste", long_about = None)]
struct Cli {
    /// Spotify client id (can also be set via SPOTIFY_CLIENT_ID env var)
    #[arg(long, env = "SPOTIFY_CLIENT_ID", hide_env_values = true, global = true)]
    client_id: Option<String>,

    /// Spotify client secret (can also be set via SPOTIFY_CLIENT_SECRET env var)
    #[arg(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true, global = true)]
    client_secret: Option<String>,

    /// Request timeout in seconds for catalog calls
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Source {
    Static,
    Live,
}

impl From<Source> for SourceMode {
    fn from(s: Source) -> Self {
        match s {
            Source::Static => SourceMode::Static,
            Source::Live => SourceMode::Live,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a list of favorite artists
    Analyze {
        /// Comma-separated artist names, e.g. "Radiohead, Bon Iver"
        artists: String,

        /// Preferred language for recommendations
        #[arg(short, long, default_value = "")]
        language: String,

        /// Where artist data comes from
        #[arg(short, long, value_enum, default_value_t = Source::Static)]
        source: Source,

        /// Number of dominant genres to report (1-5)
        #[arg(long, default_value_t = 3)]
        dominant: usize,

        /// Popularity a recommendation must exceed
        #[arg(long, default_value_t = 10)]
        popularity_floor: u8,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check the Spotify credentials with a sample search
    TestConnection {
        /// Artist to search for
        #[arg(default_value = "Taylor Swift")]
        artist: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "musicscope=debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let endpoints = CatalogEndpoints {
        timeout: cli.timeout.map(Duration::from_secs),
        ..CatalogEndpoints::default()
    };
    let credentials = || Credentials::new(cli.client_id.clone(), cli.client_secret.clone());

    match &cli.command {
        Commands::Analyze {
            artists,
            language,
            source,
            dominant,
            popularity_floor,
            json,
        } => {
            // Validate before touching any data source
            let request = AnalysisRequest::parse(language, artists)?;

            let options = AnalysisOptions {
                dominant_limit: *dominant,
                partition: PartitionSettings {
                    popularity_floor: *popularity_floor,
                    ..PartitionSettings::default()
                },
            };

            let data_source = DataSource::connect((*source).into(), credentials, endpoints).await?;
            let result = Analyzer::new(data_source)
                .with_options(options)
                .analyze(&request)
                .await?;

            if *json {
                println!("{}", report::to_json(&result)?);
            } else {
                print!("{}", result);
            }
        }
        Commands::TestConnection { artist } => {
            println!("Testing Spotify API connection...");
            let api = SpotifyApi::with_endpoints(&credentials()?, endpoints).await?;
            println!("✅ Token received");

            match api.search_artist(artist).await? {
                Some(found) => {
                    println!("✅ Found: {}", found.name);
                    println!("   Genres: {}", found.genres.join(", "));
                    println!("   Image: {}", found.image_url);
                    println!("   Spotify: {}", found.external_url);
                }
                None => println!("⚠️  No match for '{}'", artist),
            }
        }
    }

    Ok(())
}
