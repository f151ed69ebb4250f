use anyhow::Context;
use clap::{Parser, Subcommand};
use tenki_scraper::WeatherClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tenki-cli")]
#[command(about = "Regional weather forecast lookup")]
struct Cli {
    /// Index page of the forecast site (overrides `TENKI_BASE_URL`).
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides `TENKI_REQUEST_TIMEOUT_SECS`).
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the three-day forecast of an area as JSON.
    Weather {
        /// Prefecture name exactly as listed by the site, e.g. 奈良県.
        prefecture: String,
        /// Area label exactly as shown on the prefecture page, e.g. 北部.
        area: String,
        /// Emit single-line JSON instead of pretty-printed output.
        #[arg(long)]
        compact: bool,
    },
    /// List prefecture names and their page identifiers.
    Prefectures,
    /// List the area labels of a prefecture.
    Areas { prefecture: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = tenki_core::load_app_config().context("failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.request_timeout_secs = timeout_secs;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let client = WeatherClient::from_config(&config).context("failed to build client")?;

    match cli.command {
        Commands::Weather {
            prefecture,
            area,
            compact,
        } => {
            let result = client
                .get_weather(&prefecture, &area)
                .await
                .with_context(|| format!("weather lookup failed for {prefecture} / {area}"))?;
            let rendered = if compact {
                serde_json::to_string(&result)?
            } else {
                serde_json::to_string_pretty(&result)?
            };
            println!("{rendered}");
        }
        Commands::Prefectures => {
            for option in client.list_prefectures().await? {
                if option.id.is_empty() {
                    continue;
                }
                println!("{}\t{}", option.name, option.id);
            }
        }
        Commands::Areas { prefecture } => {
            let areas = client
                .list_areas(&prefecture)
                .await
                .with_context(|| format!("area lookup failed for {prefecture}"))?;
            for area in areas {
                println!("{area}");
            }
        }
    }

    Ok(())
}
