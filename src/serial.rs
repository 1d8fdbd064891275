use std::time::Duration;

use serialport::SerialPort;

use crate::error::{Error, Result};

/// 開くシリアルポートの番号
pub const PORT_INDEX: u32 = 0;

/// ボーレート
pub const BAUD_RATE: u32 = 115_200;

/// 読み込みのタイムアウト
///
/// タイムアウトごとに読み込みから戻り、割り込みの有無を確認する。
pub const READ_TIMEOUT: Duration = Duration::from_millis(250);

/// ポート番号に対応するデバイス名を返却する。
///
/// ポート番号は、Unixでは`/dev/ttyS<N>`、Windowsでは`COM<N+1>`に対応する。
#[cfg(windows)]
pub fn port_name(index: u32) -> String {
    format!("COM{}", index + 1)
}

/// ポート番号に対応するデバイス名を返却する。
///
/// ポート番号は、Unixでは`/dev/ttyS<N>`、Windowsでは`COM<N+1>`に対応する。
#[cfg(not(windows))]
pub fn port_name(index: u32) -> String {
    format!("/dev/ttyS{}", index)
}

/// シリアルポートを8N1、フロー制御なしで開く。
pub fn open(name: &str, baud_rate: u32) -> Result<Box<dyn SerialPort>> {
    let opened = serialport::new(name, baud_rate)
        .timeout(READ_TIMEOUT)
        .data_bits(serialport::DataBits::Eight)
        .stop_bits(serialport::StopBits::One)
        .parity(serialport::Parity::None)
        .flow_control(serialport::FlowControl::None)
        .open()
        .map_err(|source| Error::OpenSerial {
            port: name.to_string(),
            source,
        })?;
    tracing::info!(port = %name, baud_rate, "opened serial port");

    Ok(opened)
}
