
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracking::consts::POLL_INTERVAL_MS;
use tracking::error::TrackingFetchError;
use tracking::geo::Coordinate;
use tracking::session::{MapCommand, MarkerKind, SessionCore};
use tracking::snapshot::TrackingSnapshot;
use tracking::status::OrderStatus;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("tracking lookup failed: {0}")]
    Tracking(#[from] TrackingFetchError),
    #[error("server returned HTTP {status} for {path}: {message}")]
    ServerError {
        status: u16,
        path: String,
        message: String,
    },
}

#[derive(Parser, Debug)]
#[command(name = "dishpatch", about = "dishpatch order tracking and delivery CLI")]
struct Cli {
    #[arg(long, env = "DISHPATCH_BASE_URL", default_value = "http://localhost:8080")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    Track(TrackArgs),
    Orders {
        #[arg(long)]
        user: u64,
    },
    Assignments {
        #[arg(long)]
        partner: u64,
    },
}

#[derive(Args, Debug)]
struct TrackArgs {
    order_id: String,

    #[arg(long, default_value_t = false, help = "Poll for changes until interrupted")]
    follow: bool,

    #[arg(long, default_value_t = u64::from(POLL_INTERVAL_MS / 1_000), help = "Poll interval in seconds")]
    interval: u64,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        base_url: cli.base_url,
    };

    match cli.command {
        Command::Track(track) => run_track(&ctx, track).await,
        Command::Orders { user } => run_orders(&ctx, user).await,
        Command::Assignments { partner } => run_assignments(&ctx, partner).await,
    }
}

/// Replay one order's tracking session as terminal output. With `--follow`
/// the poll keeps running until interrupted, printing only when the
/// replayed lines change.
async fn run_track(cli: &CliContext, track: TrackArgs) -> Result<(), CliError> {
    let mut core = SessionCore::new(track.order_id.as_str());
    let snapshot = fetch_snapshot(cli, &track.order_id).await?;
    for command in core.initialize(&snapshot, None) {
        println!("{}", describe(&command));
    }
    if !track.follow {
        return Ok(());
    }

    // Replaying the first snapshot once more yields the lines an unchanged
    // poll would print; seeding the filter with them keeps the first tick
    // silent when nothing has changed.
    let mut last_update: Vec<String> =
        core.apply_snapshot(&snapshot).iter().map(describe).collect();
    let interval = Duration::from_secs(track.interval.max(1));
    loop {
        tokio::time::sleep(interval).await;
        match fetch_snapshot(cli, &track.order_id).await {
            Ok(snapshot) => {
                let update: Vec<String> =
                    core.apply_snapshot(&snapshot).iter().map(describe).collect();
                if update != last_update {
                    for line in &update {
                        println!("{line}");
                    }
                    last_update = update;
                }
            }
            // A missed poll is not fatal; the next tick retries.
            Err(error) => eprintln!("poll failed: {error}"),
        }
    }
}

async fn run_orders(cli: &CliContext, user: u64) -> Result<(), CliError> {
    let path = format!("/api/orders/user/{user}");
    let json = api_get(cli, &path).await?;
    let Some(orders) = json.as_array() else {
        eprintln!("unexpected response shape: {json}");
        return Ok(());
    };
    if orders.is_empty() {
        println!("no orders for user {user}");
        return Ok(());
    }
    for order in orders {
        println!("{}", order_line(order));
    }
    Ok(())
}

async fn run_assignments(cli: &CliContext, partner: u64) -> Result<(), CliError> {
    let path = format!("/api/delivery/my-orders/{partner}");
    let json = api_get(cli, &path).await?;
    let Some(assignments) = json.as_array() else {
        eprintln!("unexpected response shape: {json}");
        return Ok(());
    };
    if assignments.is_empty() {
        println!("no active assignments for partner {partner}");
        return Ok(());
    }
    for assignment in assignments {
        println!("{}", assignment_line(assignment));
    }
    Ok(())
}

async fn fetch_snapshot(cli: &CliContext, order_id: &str) -> Result<TrackingSnapshot, CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/api/track/{order_id}", cli.base_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TrackingFetchError::from_error_body(order_id, &body).into());
    }
    Ok(response.json::<TrackingSnapshot>().await?)
}

async fn api_get(cli: &CliContext, path: &str) -> Result<Value, CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}{}", cli.base_url.trim_end_matches('/'), path);
    let response = client.get(url).send().await?;
    let status = response.status();
    let value = response.json::<Value>().await.unwrap_or_else(|_| Value::Null);
    if !status.is_success() {
        return Err(CliError::ServerError {
            status: status.as_u16(),
            path: path.to_owned(),
            message: value.to_string(),
        });
    }
    Ok(value)
}

fn describe(command: &MapCommand) -> String {
    match command {
        MapCommand::ResetSession => "session reset".to_owned(),
        MapCommand::CreateMap { center, zoom } => {
            format!("map created at {} (zoom {zoom:.0})", coord(*center))
        }
        MapCommand::AddMarker { kind, at } => {
            format!("{} marker at {}", marker_name(*kind), coord(*at))
        }
        MapCommand::MoveMarker { kind, to } => {
            format!("{} marker moved to {}", marker_name(*kind), coord(*to))
        }
        MapCommand::SetStatusText(text) => format!("status: {text}"),
        MapCommand::SetPartnerName(name) => format!("partner: {name}"),
        MapCommand::FitBounds { bounds, padding_px } => format!(
            "view fitted to {} .. {} (padding {padding_px}px)",
            coord(bounds.south_west()),
            coord(bounds.north_east())
        ),
        MapCommand::EnsureStreetZoom => "zoom raised to street level".to_owned(),
        MapCommand::StartPolling { interval_ms } => {
            format!("poll requested every {}s", interval_ms / 1_000)
        }
    }
}

fn coord(point: Coordinate) -> String {
    format!("{:.4}, {:.4}", point.lat, point.lon)
}

fn marker_name(kind: MarkerKind) -> &'static str {
    match kind {
        MarkerKind::Restaurant => "restaurant",
        MarkerKind::Customer => "customer",
        MarkerKind::Partner => "partner",
    }
}

fn status_label(raw: &str) -> String {
    OrderStatus::parse(raw).map_or_else(|| raw.to_owned(), |status| status.to_string())
}

fn order_line(order: &Value) -> String {
    let id = order.get("id").and_then(Value::as_u64).unwrap_or(0);
    let status = order
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    let total = order
        .get("totalPrice")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    let restaurant = order
        .get("restaurant")
        .and_then(|restaurant| restaurant.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("Restaurant");
    let placed = order
        .get("orderDate")
        .and_then(Value::as_str)
        .unwrap_or("-");
    format!(
        "#{id:<6} {:<16} \u{20b9}{total:<9.2} {restaurant} ({placed})",
        status_label(status)
    )
}

fn assignment_line(assignment: &Value) -> String {
    let id = assignment
        .get("orderId")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let status = assignment
        .get("orderStatus")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    let restaurant = assignment
        .get("restaurantName")
        .and_then(Value::as_str)
        .unwrap_or("Restaurant");
    let customer = assignment
        .get("customerName")
        .and_then(Value::as_str)
        .unwrap_or("Customer");
    let address = assignment
        .get("customerAddress")
        .and_then(Value::as_str)
        .unwrap_or("Address not available");
    format!(
        "#{id:<6} {:<16} from {restaurant} to {customer}, {address}",
        status_label(status)
    )
}
