//! Fetch a station's metadata page and render its details table.

use scraper::Html;
use tracing::{debug, info};

use crate::{
    cli::create_spinner,
    endpoints::Endpoints,
    fetch::{self, FetchError},
    metadata::{self, DecodeError},
    present, request,
};

#[derive(Debug, thiserror::Error)]
pub enum StationsError {
    #[error("Station: {0} was not found in the system")]
    NotFound(String),
    #[error("metadata table for station {station_id} is malformed: {source}")]
    Malformed {
        station_id: String,
        #[source]
        source: DecodeError,
    },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Url(#[from] url::ParseError),
}

/// Fetches and decodes station metadata, returning the rendered report.
///
/// A page with no tables at all means the station is unknown to CDEC; that is
/// reported separately from a table that fails to decode.
pub async fn stations(endpoints: &Endpoints, station_id: &str) -> Result<String, StationsError> {
    let url = request::station_meta_url(endpoints, station_id)?;
    info!("Using the following url for retrieving metadata: {url}");

    let bar = create_spinner("Retrieving station metadata...".to_string());
    let html = fetch::fetch_text(&url).await?;
    bar.finish_and_clear();
    debug!("retrieved {} bytes of HTML", html.len());

    let document = Html::parse_document(&html);
    let tables = metadata::find_tables(&document);
    debug!("found {} tables in document", tables.len());

    let table = *tables
        .first()
        .ok_or_else(|| StationsError::NotFound(station_id.to_string()))?;

    let fields =
        metadata::decode_metadata_table(table).map_err(|source| StationsError::Malformed {
            station_id: station_id.to_string(),
            source,
        })?;

    let map_url = request::nearby_map_url(endpoints, station_id)?;
    let mut report = present::render_metadata(&fields);
    report.push_str(&present::station_links(url.as_str(), map_url.as_str()));

    Ok(report)
}

// -- Tests -------------------------------------------------------------------
