//! Housing Price Client - command-line front end
//!
//! Usage:
//!   housing-client predict --bhk 3 --sqft 1200 --city Pune --seller Dealer --lat 18.52 --lon 73.85
//!   housing-client --market-data india_housing_prices.csv interactive

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use feature_engine::{City, SellerType};
use housing_client::{GeoPoint, MarketData, PredictionClient, PriceDisplay, PropertyForm};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "housing-client")]
#[command(about = "Predict Indian housing prices from property details")]
struct Cli {
    /// Prediction service base URL
    #[arg(long, env = "HOUSING_API_URL", default_value = "http://127.0.0.1:8000")]
    url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Listings CSV (City, Price_per_SqFt) for the market comparison chart
    #[arg(long)]
    market_data: Option<PathBuf>,

    /// Log request details to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict from command-line flags
    Predict(FormArgs),
    /// Prompt for each field
    Interactive,
}

#[derive(Args, Debug)]
struct FormArgs {
    /// Number of bedrooms (BHK)
    #[arg(long)]
    bhk: i64,

    /// Area in square feet
    #[arg(long)]
    sqft: f64,

    #[arg(long, default_value = "Bangalore")]
    city: String,

    /// Builder, Dealer or Owner
    #[arg(long, default_value = "Builder")]
    seller: String,

    #[arg(long)]
    under_construction: bool,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    rera: bool,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    ready_to_move: bool,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    resale: bool,

    /// Picked latitude
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Picked longitude
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,
}

impl From<FormArgs> for PropertyForm {
    fn from(args: FormArgs) -> Self {
        let location = match (args.lat, args.lon) {
            (Some(lat), Some(lon)) => Some(GeoPoint { lat, lon }),
            _ => None,
        };
        PropertyForm {
            bhk: args.bhk,
            square_ft: args.sqft,
            city: args.city,
            seller_type: args.seller,
            under_construction: args.under_construction,
            rera: args.rera,
            ready_to_move: args.ready_to_move,
            resale: args.resale,
            location,
        }
    }
}

fn prompt<T: FromStr + ToString>(input: &mut impl BufRead, label: &str, default: T) -> Result<T> {
    loop {
        print!("{} [{}]: ", label, default.to_string());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(default);
        }
        let line = line.trim();
        if line.is_empty() {
            return Ok(default);
        }
        match line.parse() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a valid value"),
        }
    }
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

fn prompt_yes_no(input: &mut impl BufRead, label: &str, default: bool) -> Result<bool> {
    let default_text = if default { "yes" } else { "no" };
    loop {
        let answer: String = prompt(input, label, default_text.to_string())?;
        match parse_yes_no(&answer) {
            Some(value) => return Ok(value),
            None => println!("Please answer yes or no"),
        }
    }
}

fn read_form() -> Result<PropertyForm> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let defaults = PropertyForm::default();

    let cities: Vec<&str> = City::ALL.iter().map(|c| c.as_str()).collect();
    let sellers: Vec<&str> = SellerType::ALL.iter().map(|s| s.as_str()).collect();
    println!("Cities: {}", cities.join(", "));
    println!("Seller types: {}", sellers.join(", "));

    let bhk = prompt(&mut input, "BHK", defaults.bhk)?;
    let square_ft = prompt(&mut input, "Area (sq ft)", defaults.square_ft)?;
    let city = prompt(&mut input, "City", defaults.city)?;
    let seller_type = prompt(&mut input, "Seller type", defaults.seller_type)?;
    let under_construction = prompt_yes_no(&mut input, "Under construction", defaults.under_construction)?;
    let rera = prompt_yes_no(&mut input, "RERA approved", defaults.rera)?;
    let ready_to_move = prompt_yes_no(&mut input, "Ready to move", defaults.ready_to_move)?;
    let resale = prompt_yes_no(&mut input, "Resale", defaults.resale)?;
    let center = GeoPoint::DEFAULT_CENTER;
    let lat = prompt(&mut input, "Latitude", center.lat)?;
    let lon = prompt(&mut input, "Longitude", center.lon)?;

    Ok(PropertyForm {
        bhk,
        square_ft,
        city,
        seller_type,
        under_construction,
        rera,
        ready_to_move,
        resale,
        location: Some(GeoPoint { lat, lon }),
    })
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    // Only fails if a subscriber is already set
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let form = match cli.command {
        Command::Predict(args) => PropertyForm::from(args),
        Command::Interactive => read_form()?,
    };

    let market = cli
        .market_data
        .as_ref()
        .map(MarketData::from_path)
        .transpose()
        .context("failed to load market data")?;

    let client = PredictionClient::new(cli.url, Duration::from_secs(cli.timeout_secs))?;
    let response = client
        .predict(&form.to_request())
        .await
        .context("prediction failed")?;

    let display = PriceDisplay::from_prediction(response.predicted_price_lacs);
    println!();
    println!("Predicted Price: {}", display.formatted());
    if let Some(advisory) = &display.advisory {
        println!("Note: {}", advisory);
    }

    if let Some(market) = market {
        match market.compare(&form.city, form.square_ft, display.price_lacs) {
            Some(comparison) => {
                println!();
                print!("{}", comparison.render(40));
            }
            None => println!("No market data for {}", form.city),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("Yes"), Some(true));
        assert_eq!(parse_yes_no(" n "), Some(false));
        assert_eq!(parse_yes_no("yse"), None);
        assert_eq!(parse_yes_no("maybe"), None);
    }

    #[test]
    fn test_prompt_yes_no_asks_again_on_unknown_answer() {
        let mut input = "maybe\nyse\nno\n".as_bytes();
        assert!(!prompt_yes_no(&mut input, "Resale", true).unwrap());
    }

    #[test]
    fn test_prompt_yes_no_uses_default_on_empty_line() {
        let mut input = "\n".as_bytes();
        assert!(prompt_yes_no(&mut input, "RERA approved", true).unwrap());
    }
}
