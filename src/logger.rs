//! シリアルから読み込んだ行にタイムスタンプを付与して、標準出力とログファイルに書き込む。

use std::{
    io::{BufRead, ErrorKind, Write},
    sync::atomic::{AtomicBool, Ordering},
};

use time::OffsetDateTime;

use crate::{
    appenders::DailyAppender,
    clock::Clock,
    error::{Error, Result},
    timestamps,
};

/// 読み込みループが終了した理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stopped {
    /// 割り込みを受け取った
    Interrupted,
    /// 入力が終端に達した
    EndOfInput,
}

/// 行を記録するロガー
pub struct LineLogger<C, W> {
    clock: C,
    appender: DailyAppender,
    stdout: W,
}

impl<C: Clock, W: Write> LineLogger<C, W> {
    pub fn new(clock: C, appender: DailyAppender, stdout: W) -> Self {
        Self {
            clock,
            appender,
            stdout,
        }
    }

    /// 割り込みを受け取るか、入力が終端に達するまで行を記録する。
    ///
    /// 終了時は、行の途中まで読み込んだデータも1行として記録してから、ログファイルを閉じる。
    /// 読み込みのタイムアウトはエラーとして扱わず、読み込み途中のデータも保持する。
    ///
    /// # 引数
    ///
    /// - input: 行を読み込む入力。
    /// - stop: 割り込みを受け取ったときに`true`になるフラグ。
    ///
    /// # 戻り値
    ///
    /// 読み込みループが終了した理由。
    pub fn run<R: BufRead>(mut self, mut input: R, stop: &AtomicBool) -> Result<Stopped> {
        let mut pending = Vec::new();
        let stopped = loop {
            if stop.load(Ordering::SeqCst) {
                break Stopped::Interrupted;
            }
            match input.read_until(b'\n', &mut pending) {
                Ok(0) => break Stopped::EndOfInput,
                Ok(_) => {
                    if pending.last() == Some(&b'\n') {
                        self.log_line(&pending)?;
                        pending.clear();
                    }
                }
                Err(err)
                    if matches!(
                        err.kind(),
                        ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted
                    ) =>
                {
                    continue
                }
                Err(err) => return Err(Error::Read(err)),
            }
        };

        if !pending.is_empty() {
            self.log_line(&pending)?;
        }
        match stopped {
            Stopped::Interrupted => tracing::info!("interrupted"),
            Stopped::EndOfInput => tracing::info!("input closed"),
        }
        self.appender.close()?;

        Ok(stopped)
    }

    /// 1行を記録する。
    ///
    /// 日付の確認とタイムスタンプには同じ時刻を使うため、接頭語の日付は常に書き込み先の
    /// ファイル名の日付と一致する。
    pub fn log_line(&mut self, raw: &[u8]) -> Result<()> {
        let now = self.clock.now();
        self.appender.roll_if_needed(&now)?;
        let record = format_record(&now, raw)?;

        self.stdout
            .write_all(record.as_bytes())
            .and_then(|_| self.stdout.flush())
            .map_err(Error::Stdout)?;
        self.appender.append(&record)
    }
}

/// 読み込んだ行を、タイムスタンプ付きの1レコードに整形する。
///
/// 行末の`\n`と`\r\n`は取り除き、レコードは必ず`\n`で終える。
fn format_record(now: &OffsetDateTime, raw: &[u8]) -> Result<String> {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    let prefix = timestamps::line_prefix(now)?;

    Ok(format!("{}{}\n", prefix, String::from_utf8_lossy(line)))
}
