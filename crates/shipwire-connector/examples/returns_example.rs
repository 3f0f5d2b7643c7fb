/*
[INPUT]:  Path to a YAML connector config and a return id
[OUTPUT]: Return details, holds and label PDF size
[POS]:    Examples - returns endpoint group
[UPDATE]: When adding new returns endpoints
*/

use shipwire_connector::*;
use tracing_subscriber::EnvFilter;

/// Example: inspect a return authorization
///
/// Usage: cargo run --example returns_example -- shipwire.yaml 12345
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Shipwire Returns Example ===\n");

    let mut args = std::env::args().skip(1);
    let (Some(config_path), Some(return_id)) = (args.next(), args.next()) else {
        eprintln!("usage: returns_example <config.yaml> <return-id>");
        return;
    };

    let connector = match ShipwireConfig::from_file(&config_path).and_then(|c| Connector::from_config(&c)) {
        Ok(connector) => connector,
        Err(e) => {
            eprintln!("Failed to create connector: {}", e);
            return;
        }
    };
    println!("✓ Connector ready ({})\n", connector.environment());

    let returns = connector.returns();

    println!("Fetching return {}...", return_id);
    match returns.details(&return_id, true).await {
        Ok(order) => println!("✓ Return: {:?}", order),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nFetching holds...");
    match returns.holds(&return_id, true, Params::new(), Pagination::default()).await {
        Ok(holds) => println!("✓ {} hold(s)", holds.total),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nDownloading labels...");
    match returns.labels_pdf(&return_id).await {
        Ok(document) => println!("✓ Label PDF: {} bytes", document.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Returns example complete");
}
