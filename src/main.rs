use std::{process, sync::Arc};

use autolist::{
    api_types::{Category, FuelType, Location, Transmission},
    application::{
        error::AppError,
        submission::{AddCarForm, SubmitOutcome},
    },
    config,
    domain::{
        draft::{ListingField, format_daily_price},
        image::ListingImage,
    },
    infra::{http::HttpListingGateway, notify::TerminalNotifier, telemetry},
};
use serde::Serialize;
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

mod input;
mod print;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(std::io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;

    telemetry::init(&settings.logging)?;

    match cli_args.command {
        config::Command::AddCar(args) => run_add_car(settings, *args).await,
        config::Command::Options => run_options(),
    }
}

async fn run_add_car(settings: config::Settings, args: config::AddCarArgs) -> Result<(), AppError> {
    let base_url = settings.api.base_url.ok_or(AppError::MissingBaseUrl)?;
    let gateway = HttpListingGateway::new(base_url, settings.api.token, settings.api.timeout)?;
    let form = AddCarForm::new(Arc::new(gateway), Arc::new(TerminalNotifier));

    let config::AddCarArgs {
        brand,
        model,
        year,
        price_per_day,
        category,
        transmission,
        fuel_type,
        seating_capacity,
        location,
        description,
        description_file,
        image,
    } = args;

    let description = input::read_value(description, description_file)?;
    let image = match image {
        Some(path) => Some(ListingImage::load(&path).await?),
        None => None,
    };
    if !price_per_day.is_finite() || price_per_day < 0.0 {
        return Err(AppError::invalid_input(
            "price per day must be a non-negative number",
        ));
    }

    for field in [
        ListingField::Brand(brand),
        ListingField::Model(model),
        ListingField::Year(year),
        ListingField::PricePerDay(price_per_day),
        ListingField::Category(category),
        ListingField::Transmission(transmission),
        ListingField::FuelType(fuel_type),
        ListingField::SeatingCapacity(seating_capacity),
        ListingField::Location(location),
        ListingField::Description(description),
    ] {
        form.edit(field);
    }
    form.set_image(image);

    let listing = form.listing();
    print::line(&format!(
        "Listing {} {} ({}) at {}",
        listing.brand,
        listing.model,
        listing.year,
        format_daily_price(&settings.display.currency, listing.price_per_day)
    ));

    match form.submit().await {
        SubmitOutcome::Listed { message } => {
            info!(%message, "listing added");
            Ok(())
        }
        SubmitOutcome::Refused { message } | SubmitOutcome::Failed { message } => {
            Err(AppError::NotListed(message))
        }
        SubmitOutcome::Busy => Err(AppError::NotListed(
            "another submission is in flight".to_string(),
        )),
    }
}

#[derive(Debug, Serialize)]
struct FormOptions {
    categories: &'static [Category],
    transmissions: &'static [Transmission],
    fuel_types: &'static [FuelType],
    locations: &'static [Location],
}

fn run_options() -> Result<(), AppError> {
    print::print_json(&FormOptions {
        categories: Category::ALL,
        transmissions: Transmission::ALL,
        fuel_types: FuelType::ALL,
        locations: Location::ALL,
    })
}
