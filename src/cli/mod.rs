//! Command line interface.

pub mod command;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use indicatif::ProgressBar;

const EXAMPLES: &str = "\
Examples:
  cdec query --station=WLK --sensor=01 --duration=e --startdate=2024-02-01 --enddate=2024-02-02
  cdec stations --stationID=WLK

Flags take the double-dash form; single-dash spellings such as -station=WLK
or -stationID=WLK are not accepted.";

#[derive(Parser)]
#[command(version, about, long_about = None, after_help = EXAMPLES, arg_required_else_help = true)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query time-series sensor readings from the CDEC data servlet
    Query(QueryOptions),
    /// Query station metadata by station ID
    Stations {
        /// Station ID to retrieve metadata for
        #[arg(long = "stationID", value_name = "ID")]
        station_id: String,
    },
}

/// Parameters forwarded to the data servlet. Absent flags are sent as empty
/// query values; CDEC decides what is valid.
#[derive(Args, Debug, Default)]
pub struct QueryOptions {
    /// Station ID to query data for
    #[arg(long, default_value = "")]
    pub station: String,

    /// Sensor number to query data for
    #[arg(long, default_value = "")]
    pub sensor: String,

    /// Duration code for data, one of (d)aily, (h)ourly or (m)onthly
    #[arg(long, default_value = "")]
    pub duration: String,

    /// Query start date (YYYY-mm-dd)
    #[arg(long = "startdate", default_value = "")]
    pub start_date: String,

    /// Query end date (YYYY-mm-dd)
    #[arg(long = "enddate", default_value = "")]
    pub end_date: String,
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}

// -- Tests -------------------------------------------------------------------
