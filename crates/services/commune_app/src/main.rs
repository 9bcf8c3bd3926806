// File: services/commune_app/src/main.rs
use std::sync::Arc;
use std::time::Instant;

use commune_app::{execute, start, AppState, Command, CommuneServiceFactory};
use commune_calendar::CalendarZone;
use commune_common::logging::{init_from_config, log_result};
use commune_common::{CommuneError, Context};
use commune_config::load_config;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), CommuneError> {
    let config = Arc::new(load_config()?);
    // Keeps the file writer flushing until exit
    let _log_guard = init_from_config(&config.logging);

    let zone = CalendarZone::from_config(&config.calendar)?;
    let today = zone.today();
    info!("starting Commune on {} ({:?})", today, zone);

    let services = log_result(
        CommuneServiceFactory::new(&config, today),
        "services ready",
        "failed to set up services",
    )?;
    let services = Arc::new(services);
    let mut state = AppState::new(config.clone(), services, zone, today);

    println!("{}", start(&mut state).await.text);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading terminal input")? {
        state.refresh_today();
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        let output = execute(&mut state, command, Instant::now()).await;
        println!("{}\n", output.text);
        if output.quit {
            break;
        }
    }

    state.session.shutdown();
    info!("Commune stopped");
    Ok(())
}
