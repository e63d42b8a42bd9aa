//! Latitude/longitude to map-tile index conversion.
//!
//! The Real Estate Information Library exposes its point and polygon APIs
//! per map tile, addressed by `(z, x, y)` in the standard power-of-two
//! slippy-map projection. Only zoom levels 15 to 17 are accepted there.
//!
//! The conversion performs no input validation. Latitudes must stay within
//! the Web Mercator range (about ±85.05°); closer to the poles the
//! `ln(tan + sec)` term diverges and the `y` index is meaningless.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Zoom levels supported by the tile-based real estate APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TileZoom {
    Z15,
    Z16,
    Z17,
}

impl TileZoom {
    /// Returns the numeric zoom level.
    pub const fn level(self) -> u8 {
        match self {
            Self::Z15 => 15,
            Self::Z16 => 16,
            Self::Z17 => 17,
        }
    }

    /// Number of tiles along one axis at this zoom.
    pub const fn tiles_per_axis(self) -> u32 {
        1 << self.level()
    }
}

impl TryFrom<u8> for TileZoom {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            15 => Ok(Self::Z15),
            16 => Ok(Self::Z16),
            17 => Ok(Self::Z17),
            other => Err(format!("zoom level must be 15, 16 or 17, got {other}")),
        }
    }
}

impl From<TileZoom> for u8 {
    fn from(zoom: TileZoom) -> Self {
        zoom.level()
    }
}

impl fmt::Display for TileZoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// Tile index at a given zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoordinate {
    /// Column, counted eastward from 180°W.
    pub x: i64,
    /// Row, counted southward from the northern edge.
    pub y: i64,
    /// Zoom level of the index.
    pub zoom: TileZoom,
}

impl TileCoordinate {
    /// Converts a latitude/longitude pair into the tile containing it.
    pub fn from_lat_lon(lat: f64, lon: f64, zoom: TileZoom) -> Self {
        let (x, y) = to_tile_xy(lat, lon, zoom);
        Self { x, y, zoom }
    }

    /// Returns the `(x, y)` pair.
    pub const fn xy(&self) -> (i64, i64) {
        (self.x, self.y)
    }
}

impl fmt::Display for TileCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Converts latitude/longitude in degrees to the `(x, y)` tile index.
pub fn to_tile_xy(lat: f64, lon: f64, zoom: TileZoom) -> (i64, i64) {
    let n = f64::from(zoom.tiles_per_axis());
    let lat_rad = lat.to_radians();

    let x = (n * ((lon + 180.0) / 360.0)).floor();
    let y = (n * (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0).floor();

    (x as i64, y as i64)
}
