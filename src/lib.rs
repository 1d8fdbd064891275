//! Serial Line Logger
//!
//! ----------------------------------------------------------------------------
//!
//! このクレートは、シリアルポートから1行ずつ読み込み、各行の先頭にタイムスタンプ
//! （`DD.Mon.YYYY HH:MM:SS: `）を付与して、標準出力と日付ごとのログファイル
//! （`<DD.MM.YYYY>.log`）に書き込む。
//!
//! ログファイルは、日付が変わったときに新しいファイルに切り替える。
//! 割り込み（SIGINT / SIGTERM）を受け取ると、読み込み済みの行を書き込み、ログファイルを
//! 閉じてから終了する。

pub mod appenders;
pub mod clock;
pub mod error;
pub mod logger;
pub mod serial;
pub mod signals;
pub mod timestamps;

pub use error::{Error, Result};
