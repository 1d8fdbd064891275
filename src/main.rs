use std::io::{self, BufReader};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use serial_line_logger::appenders::{DailyAppender, LOG_DIRECTORY};
use serial_line_logger::clock::{Clock, SystemClock};
use serial_line_logger::logger::LineLogger;
use serial_line_logger::serial::{self, BAUD_RATE, PORT_INDEX};
use serial_line_logger::signals;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the captured lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    signals::install()?;

    let port = serial::open(&serial::port_name(PORT_INDEX), BAUD_RATE)?;
    let clock = SystemClock::new();
    let appender = DailyAppender::open(LOG_DIRECTORY, &clock.now())?;

    let stdout = io::stdout();
    let logger = LineLogger::new(&clock, appender, stdout.lock());
    let stopped = logger.run(BufReader::new(port), signals::flag())?;
    tracing::info!(?stopped, "serial line logger stopped");

    Ok(())
}
