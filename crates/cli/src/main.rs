// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use std::str::FromStr;
use tracing::info;
use url::Url;

use lotlytics::{LotFilter, LotListState};
use lotlytics_api::{AuthService, CreateLotForm, GroupSearchService, LotSearchService};
use lotlytics_client::{
    BackendClient, DEFAULT_BASE_URL, DEFAULT_GEOCODER_URL, GeocoderCandidate, GeocoderClient,
};
use lotlytics_domain::{OccupancyBadge, classify};

/// Lotlytics - command-line client for the parking lot backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the Lotlytics backend.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: Url,

    /// Base URL of the geocoder service.
    #[arg(long, default_value = DEFAULT_GEOCODER_URL)]
    geocoder_url: Url,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search lots, optionally scoped to a group and a name fragment.
    SearchLots {
        /// Restrict the search to one group.
        #[arg(long)]
        group_id: Option<i64>,
        /// Name fragment to match.
        #[arg(long)]
        name: Option<String>,
        /// Occupancy filter: all, low, medium, or high.
        #[arg(long, default_value = "all")]
        filter: String,
        /// Page of results to show (pages hold 6 lots).
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Search groups by name fragment.
    SearchGroups {
        /// Name fragment to match.
        #[arg(long)]
        name: Option<String>,
    },
    /// Log in and report the resulting session identity.
    Login {
        /// Account username.
        #[arg(long)]
        username: String,
        /// Account password.
        #[arg(long)]
        password: String,
    },
    /// Create an account and log straight in.
    CreateAccount {
        /// Desired username (at least 6 characters).
        #[arg(long)]
        username: String,
        /// Contact email address.
        #[arg(long)]
        email: String,
        /// Account password.
        #[arg(long)]
        password: String,
    },
    /// Create a lot within a group, autofilling the address from the
    /// geocoder.
    CreateLot(CreateLotArgs),
    /// Look up address candidates for a free-form query.
    Geocode {
        /// Free-form address query.
        query: String,
    },
}

/// Arguments for the create-lot subcommand.
#[derive(clap::Args, Debug)]
struct CreateLotArgs {
    /// The group the lot belongs to.
    #[arg(long)]
    group_id: i64,
    /// Username to authenticate the creation with.
    #[arg(long)]
    username: String,
    /// Password to authenticate the creation with.
    #[arg(long)]
    password: String,
    /// The lot's display name.
    #[arg(long)]
    name: String,
    /// Current vehicle volume.
    #[arg(long)]
    volume: String,
    /// Maximum vehicle capacity.
    #[arg(long)]
    capacity: String,
    /// Free-form address query for the geocoder.
    #[arg(long)]
    address: String,
}

fn print_lot_page(list: &LotListState) {
    let page_count: usize = list.page_count();
    println!(
        "Page {} of {} ({} matching lots)",
        list.current_page(),
        page_count.max(1),
        list.filtered_lots().len()
    );
    for lot in list.visible_lots() {
        let badge: OccupancyBadge = classify(lot.current_volume, lot.capacity);
        println!(
            "  #{} {} [{}] {}/{} - {}, {}, {} {}",
            lot.id,
            lot.name,
            badge.label,
            lot.current_volume,
            lot.capacity,
            lot.street,
            lot.city,
            lot.state,
            lot.zip
        );
    }
}

fn print_candidates(candidates: &[GeocoderCandidate]) {
    for candidate in candidates {
        println!("  {} ({}, {})", candidate.display_name, candidate.lat, candidate.lon);
        if let Some(address) = candidate.normalized_address() {
            println!(
                "    street: {} | city: {} | state: {} | zip: {}",
                address.street, address.city, address.state, address.zip
            );
        }
    }
}

async fn run_search_lots(
    client: BackendClient,
    group_id: Option<i64>,
    name: Option<&str>,
    filter: &str,
    page: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter: LotFilter = LotFilter::from_str(filter)?;
    let mut service: LotSearchService = LotSearchService::new(client);
    service.search(group_id, name).await?;
    service.list_mut().set_filter(filter);
    service.list_mut().set_page(page);
    print_lot_page(service.list());
    Ok(())
}

async fn run_search_groups(
    client: BackendClient,
    name: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut service: GroupSearchService = GroupSearchService::new(client);
    service.search(name).await?;
    for group in service.groups() {
        println!("  #{} {}", group.id, group.name);
    }
    Ok(())
}

async fn run_login(
    client: BackendClient,
    username: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut auth: AuthService = AuthService::new(client);
    if let Err(error) = auth.login(username, password).await {
        println!("{}", error.user_message());
        return Err(Box::new(error));
    }
    let username: &str = auth
        .state()
        .user
        .as_ref()
        .map_or("<unresolved>", |user| user.username.as_str());
    println!("Logged in as {username}");
    Ok(())
}

async fn run_create_account(
    client: BackendClient,
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut auth: AuthService = AuthService::new(client);
    if let Err(error) = auth.create_account(username, email, password).await {
        println!("{}", error.user_message());
        return Err(Box::new(error));
    }
    println!("Account created; logged in as {username}");
    Ok(())
}

async fn run_create_lot(
    client: BackendClient,
    geocoder: GeocoderClient,
    args: CreateLotArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    // Lot creation requires an authenticated session cookie.
    let mut auth: AuthService = AuthService::new(client);
    if let Err(error) = auth.login(&args.username, &args.password).await {
        println!("{}", error.user_message());
        return Err(Box::new(error));
    }

    let mut form: CreateLotForm = CreateLotForm::new();
    form.set_name(&args.name);
    if !form.enter_volume(&args.volume) || !form.enter_capacity(&args.capacity) {
        let message: String = form
            .error_message()
            .unwrap_or_else(|| String::from("Please fix the highlighted fields."));
        println!("{message}");
        return Err(message.into());
    }

    let candidates: Vec<GeocoderCandidate> = geocoder.search(&args.address).await?;
    let Some(address) = candidates
        .first()
        .and_then(GeocoderCandidate::normalized_address)
    else {
        println!("No address found for: {}", args.address);
        return Err(String::from("geocoder returned no usable candidate").into());
    };
    info!(street = %address.street, city = %address.city, "autofilled lot address");
    form.set_address(address);

    if let Err(error) = form.submit(auth.client(), args.group_id).await {
        println!("{}", error.user_message());
        return Err(Box::new(error));
    }
    println!("Created lot {} in group {}", args.name, args.group_id);
    Ok(())
}

async fn run_geocode(
    geocoder: GeocoderClient,
    query: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let candidates: Vec<GeocoderCandidate> = geocoder.search(query).await?;
    if candidates.is_empty() {
        println!("No results for: {query}");
    } else {
        print_candidates(&candidates);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let client: BackendClient = BackendClient::new(args.api_url)?;
    let geocoder: GeocoderClient = GeocoderClient::new(args.geocoder_url)?;

    match args.command {
        Command::SearchLots {
            group_id,
            name,
            filter,
            page,
        } => run_search_lots(client, group_id, name.as_deref(), &filter, page).await,
        Command::SearchGroups { name } => run_search_groups(client, name.as_deref()).await,
        Command::Login { username, password } => run_login(client, &username, &password).await,
        Command::CreateAccount {
            username,
            email,
            password,
        } => run_create_account(client, &username, &email, &password).await,
        Command::CreateLot(create_args) => run_create_lot(client, geocoder, create_args).await,
        Command::Geocode { query } => run_geocode(geocoder, &query).await,
    }
}
