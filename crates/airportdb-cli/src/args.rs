use clap::{Parser, Subcommand};

/// CLI arguments for airportdb
#[derive(Debug, Parser)]
#[command(
    name = "airportdb",
    version,
    about = "CLI for querying the airportdb-core airport database"
)]
pub struct CliArgs {
    /// Path to a dataset (.json or .json.gz); defaults to the bundled one
    #[arg(short = 'i', long = "input", env = "AIRPORTDB_DATA", global = true)]
    pub input: Option<String>,

    /// Report distances in kilometers instead of miles
    #[arg(long = "km", global = true)]
    pub km: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the database contents
    Stats,

    /// Ranked search over code, IATA code, name and city
    Search {
        /// Search term (case and accent insensitive)
        term: String,

        /// Maximum number of results
        #[arg(short = 'n', long = "limit", default_value_t = 20)]
        limit: usize,

        /// Print the relevance score next to each hit
        #[arg(long = "scores")]
        scores: bool,
    },

    /// Lookup an airport by ICAO code
    Code {
        /// ICAO code (e.g. KJFK, egll)
        code: String,
    },

    /// List airports of a country
    Country {
        /// ISO2 country code (e.g. US, de)
        iso2: String,
    },

    /// Airports within a radius of a point or of another airport
    Near {
        /// ICAO code of the origin airport (alternative to --lat/--lon)
        #[arg(long = "from", conflicts_with_all = ["lat", "lon"])]
        from: Option<String>,

        #[arg(long = "lat", requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long = "lon", requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Radius in miles
        #[arg(short = 'r', long = "radius", default_value_t = 50.0)]
        radius: f64,
    },

    /// Great-circle distance between two airports
    Distance {
        /// ICAO code of the first airport
        from: String,
        /// ICAO code of the second airport
        to: String,
    },

    /// Destinations reachable from an airport in a given flight time
    Reach {
        /// ICAO code of the origin airport
        from: String,

        /// Flight time budget in minutes
        #[arg(short = 'm', long = "minutes")]
        minutes: f64,

        /// List everything up to the budget instead of a band around it
        #[arg(long = "up-to")]
        up_to: bool,

        /// Width of the band around the budget (0.05 = ±5%)
        #[arg(long = "tolerance", default_value_t = 0.05)]
        tolerance: f64,
    },
}
