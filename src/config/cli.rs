use std::path::PathBuf;

use autolist_api_types::{Category, FuelType, Location, Transmission};
use clap::{Args, Parser, Subcommand, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the autolist binary.
#[derive(Debug, Parser)]
#[command(
    name = "autolist",
    version,
    about = "List rental vehicles on a car-rental backend"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "AUTOLIST_CONFIG_FILE",
        value_name = "PATH",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: GlobalOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Submit a new vehicle listing.
    #[command(name = "add-car")]
    AddCar(Box<AddCarArgs>),
    /// Print the selectable categories, transmissions, fuel types and locations.
    Options,
}

/// Settings overrides accepted by every subcommand.
#[derive(Debug, Args, Default, Clone)]
pub struct GlobalOverrides {
    /// API base URL, e.g. <https://rentals.example.com>
    #[arg(
        long = "base-url",
        env = "AUTOLIST_BASE_URL",
        value_name = "URL",
        global = true
    )]
    pub base_url: Option<String>,

    /// Path to a file containing the owner token.
    #[arg(
        long = "token-file",
        env = "AUTOLIST_TOKEN_FILE",
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        global = true
    )]
    pub token_file: Option<PathBuf>,

    /// Owner token from env (flag intentionally disabled to avoid shell history leaks)
    #[arg(hide = true, env = "AUTOLIST_TOKEN")]
    pub token: Option<String>,

    /// Abort the request after this many seconds (no timeout by default).
    #[arg(long = "timeout-seconds", value_name = "SECONDS", global = true)]
    pub timeout_seconds: Option<u64>,

    /// Currency symbol used when echoing prices.
    #[arg(long = "currency", value_name = "SYMBOL", global = true)]
    pub currency: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

/// Fields of the add-car form. Text and number inputs are required; the
/// selections may be left blank.
#[derive(Debug, Args, Clone)]
pub struct AddCarArgs {
    /// e.g. Bajaj Auto, Mahindra, Piaggio
    #[arg(long)]
    pub brand: String,

    /// e.g. Bajaj RE, Maxima Z, TVS King
    #[arg(long)]
    pub model: String,

    #[arg(long)]
    pub year: i32,

    #[arg(long = "price-per-day", value_name = "AMOUNT")]
    pub price_per_day: f64,

    /// Label or slug, e.g. `cargo-auto`
    #[arg(long)]
    pub category: Option<Category>,

    #[arg(long)]
    pub transmission: Option<Transmission>,

    #[arg(long = "fuel-type")]
    pub fuel_type: Option<FuelType>,

    #[arg(long = "seating-capacity", value_name = "SEATS")]
    pub seating_capacity: u32,

    /// Label or slug, e.g. `ullal-beach`
    #[arg(long)]
    pub location: Option<Location>,

    #[arg(long, required_unless_present = "description_file")]
    pub description: Option<String>,

    /// Read the description from a file (takes precedence over --description).
    #[arg(long = "description-file", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub description_file: Option<PathBuf>,

    /// Picture of the vehicle (image/*).
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub image: Option<PathBuf>,
}
