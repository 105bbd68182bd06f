//! daypair CLI entry point.

use std::process::ExitCode;

use chrono::{Local, NaiveDate, Timelike};
use clap::Parser;
use tracing::warn;

use daypair_client::cli::Cli;
use daypair_client::config::ClientConfig;
use daypair_client::error::{ClientError, ClientResult};
use daypair_client::render::{SideView, render_day};
use daypair_core::{CalendarEvent, TracingConfig, add_days, init_tracing, is_today};
use daypair_providers::google::{GoogleConfig, GoogleSource};
use daypair_providers::{EventSource, SourceResult};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let tracing_config = if cli.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::default()
    };
    init_tracing(tracing_config)?;

    let config = match cli.config {
        Some(ref path) => ClientConfig::load_from(path).map_err(ClientError::Config)?,
        None => ClientConfig::load().map_err(ClientError::Config)?,
    };

    let credentials = config.credentials().map_err(ClientError::Config)?;
    let source = GoogleSource::new(GoogleConfig::new(credentials))?;
    source.authorize(config.resolved_access_token().map_err(ClientError::Config)?);

    if cli.list_calendars {
        return list_calendars(&source).await;
    }

    let now = Local::now();
    let date = add_days(cli.date.unwrap_or_else(|| now.date_naive()), cli.offset);
    let left_id = cli
        .left
        .or(config.left)
        .unwrap_or_else(|| "primary".to_string());
    let right_id = cli
        .right
        .or(config.right)
        .unwrap_or_else(|| "primary".to_string());

    // Both columns fetch concurrently; a failure on one side becomes that
    // column's message and never blanks the other.
    let (left_events, right_events) = tokio::join!(
        source.events_on(&left_id, date),
        source.events_on(&right_id, date),
    );

    let left = side_view(&left_id, date, left_events);
    let right = side_view(&right_id, date, right_events);

    let current_hour = is_today(date, now.date_naive()).then(|| now.hour());
    print!("{}", render_day(date, current_hour, &left, &right));

    Ok(())
}

/// Folds one calendar's fetch outcome into its column.
fn side_view(
    calendar_id: &str,
    date: NaiveDate,
    outcome: SourceResult<Vec<CalendarEvent>>,
) -> SideView {
    match outcome {
        Ok(events) => SideView::grid(calendar_id, date, &events),
        Err(e) => {
            warn!("calendar {} failed: {}", calendar_id, e);
            SideView::failed(calendar_id, e.to_string())
        }
    }
}

async fn list_calendars(source: &GoogleSource) -> ClientResult<()> {
    let mut calendars = source.list_calendars().await?;
    calendars.sort_by(|a, b| (!a.is_primary, &a.name).cmp(&(!b.is_primary, &b.name)));

    for calendar in calendars {
        let marker = if calendar.is_primary { '*' } else { ' ' };
        println!("{} {:<40} {}", marker, calendar.id, calendar.name);
    }

    Ok(())
}
