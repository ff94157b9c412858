use clap::Parser;
use inventory_tracker::config::Config;
use inventory_tracker::console::Console;
use inventory_tracker::lifecycle::{setup_tracing, InventorySystem};
use inventory_tracker::view::InventoryView;
use std::io::IsTerminal;
use tokio::io::BufReader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = Config::parse();
    setup_tracing(&config.log_filter);

    info!(?config, "Starting inventory tracker");
    let system = InventorySystem::open(&config.store_config())
        .await
        .map_err(|e| e.to_string())?;

    let mut view = InventoryView::new(system.inventory_client.clone());
    if let Err(e) = view.refresh().await {
        error!(error = %e, "Initial load failed");
        eprintln!("error: {}", e);
    }

    let stdout = std::io::stdout();
    let interactive = stdout.is_terminal() && std::io::stdin().is_terminal();
    let one_shot = config.one_shot();
    if interactive && one_shot.is_none() {
        println!("Type \"help\" for commands.");
    }

    // The console holds a client clone; it must be dropped before shutdown.
    let mut console = Console::new(view, stdout.lock()).with_prompt(interactive);
    let result = match one_shot {
        Some(line) => console.execute_line(&line).await.map(|_| ()),
        None => console.run(BufReader::new(tokio::io::stdin())).await,
    };
    drop(console);
    let result = result.map_err(|e| e.to_string());

    system.shutdown().await?;
    info!("Inventory tracker finished");
    result
}
