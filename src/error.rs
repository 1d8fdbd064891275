use std::{io, path::PathBuf};

/// このクレートで発生するエラー
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open serial port {port}: {source}")]
    OpenSerial {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("failed to open log file {}: {source}", .path.display())]
    OpenLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write log file {}: {source}", .path.display())]
    WriteLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to close log file {}: {source}", .path.display())]
    CloseLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to standard output: {0}")]
    Stdout(#[source] io::Error),

    #[error("failed to read from input: {0}")]
    Read(#[source] io::Error),

    #[error("invalid timestamp format description: {0}")]
    FormatDescription(#[from] time::error::InvalidFormatDescription),

    #[error("failed to format timestamp: {0}")]
    Format(#[from] time::error::Format),

    #[cfg(unix)]
    #[error("failed to install signal handler for {signal}: {source}")]
    Signal {
        signal: nix::sys::signal::Signal,
        #[source]
        source: nix::errno::Errno,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
