//! Request URL construction for the CDEC endpoints.
//!
//! Parameters are forwarded verbatim, empty fields included; the upstream
//! service is authoritative for validity.

use url::Url;

use crate::cli::QueryOptions;
use crate::endpoints::Endpoints;

/// Builds the JSON data servlet URL for a time-series query.
pub fn query_url(endpoints: &Endpoints, options: &QueryOptions) -> Result<Url, url::ParseError> {
    Url::parse_with_params(
        &endpoints.query,
        [
            ("Stations", options.station.as_str()),
            ("SensorNums", options.sensor.as_str()),
            ("dur_code", options.duration.as_str()),
            ("Start", options.start_date.as_str()),
            ("End", options.end_date.as_str()),
        ],
    )
}

/// Builds the station metadata page URL.
pub fn station_meta_url(endpoints: &Endpoints, station_id: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(&endpoints.station_meta, [("station_id", station_id)])
}

/// Builds the interactive map link shown alongside station metadata.
pub fn nearby_map_url(endpoints: &Endpoints, station_id: &str) -> Result<Url, url::ParseError> {
    Url::parse_with_params(&endpoints.nearby_map, [("sta", station_id)])
}

// -- Tests -------------------------------------------------------------------
