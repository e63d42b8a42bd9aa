//! Subcommands and their execution.

use anyhow::Context;
use clap::{Args, Subcommand};
use estate_client::{EstateClients, NewsQuery, RealEstateQuery};
use estate_core::{TileCoordinate, TileZoom};
use serde::Serialize;
use serde_json::Value;

use crate::TRACING_TARGET_COMMAND;

/// Available commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert an address to geographical coordinates
    Geocode {
        /// Address to geocode
        address: String,
    },
    /// Get latest news from Google News
    News(NewsQuery),
    /// Search real estate transaction data
    Transactions(RealEstateQuery),
    /// Convert a location to a map tile index
    Tile(TileArgs),
}

/// Location and zoom for the `tile` command.
#[derive(Debug, Clone, Args)]
pub struct TileArgs {
    /// Latitude in degrees
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Address to geocode instead of giving coordinates
    #[arg(long, conflicts_with_all = ["lat", "lon"], required_unless_present = "lat")]
    pub address: Option<String>,

    /// Zoom level (15, 16 or 17)
    #[arg(long, value_parser = parse_zoom)]
    pub zoom: TileZoom,
}

fn parse_zoom(value: &str) -> Result<TileZoom, String> {
    let level: u8 = value
        .parse()
        .map_err(|_| format!("invalid zoom level: {value}"))?;
    TileZoom::try_from(level)
}

/// Output of the `tile` command.
#[derive(Debug, Clone, Serialize)]
pub struct TileOutput {
    pub lat: f64,
    pub lon: f64,
    pub zoom: TileZoom,
    pub x: i64,
    pub y: i64,
}

impl TileOutput {
    fn new(lat: f64, lon: f64, zoom: TileZoom) -> Self {
        let tile = TileCoordinate::from_lat_lon(lat, lon, zoom);
        Self {
            lat,
            lon,
            zoom,
            x: tile.x,
            y: tile.y,
        }
    }
}

impl Command {
    /// Returns the command name, for logging.
    fn name(&self) -> &'static str {
        match self {
            Self::Geocode { .. } => "geocode",
            Self::News(_) => "news",
            Self::Transactions(_) => "transactions",
            Self::Tile(_) => "tile",
        }
    }

    /// Runs the command and returns its JSON result.
    pub async fn execute(self, clients: &EstateClients) -> anyhow::Result<Value> {
        tracing::info!(
            target: TRACING_TARGET_COMMAND,
            command = self.name(),
            "Running command"
        );

        let output = match self {
            Self::Geocode { address } => {
                let result = clients
                    .geocoding
                    .search_address(&address)
                    .await
                    .context("geocoding failed")?;
                serde_json::to_value(result)?
            }
            Self::News(query) => {
                let response = clients.news.search(&query).await.context("news search failed")?;
                serde_json::to_value(response)?
            }
            Self::Transactions(query) => {
                let response = clients
                    .real_estate
                    .fetch_transactions(&query)
                    .await
                    .context("transaction search failed")?;
                serde_json::to_value(response)?
            }
            Self::Tile(args) => serde_json::to_value(tile(clients, args).await?)?,
        };

        Ok(output)
    }
}

async fn tile(clients: &EstateClients, args: TileArgs) -> anyhow::Result<TileOutput> {
    let (lat, lon) = match (args.lat, args.lon, args.address) {
        (Some(lat), Some(lon), _) => (lat, lon),
        (_, _, Some(address)) => {
            let result = clients
                .geocoding
                .search_address(&address)
                .await
                .context("geocoding failed")?;
            let location = result
                .first_location()
                .with_context(|| format!("no geocoding result for {address:?} ({})", result.status))?;
            (location.lat, location.lng)
        }
        _ => anyhow::bail!("either --lat and --lon or --address is required"),
    };

    Ok(TileOutput::new(lat, lon, args.zoom))
}
