use std::{
    fmt::Display,
    sync::atomic::{AtomicBool, Ordering},
};

use time::OffsetDateTime;

/// 現在日時を提供する。
///
/// 日付の切り替えを試験できるように、時計を差し替え可能にしている。
pub trait Clock {
    fn now(&self) -> OffsetDateTime;
}

/// システムのローカル時刻を返す時計
///
/// ローカル時刻のオフセットを取得できない場合は、UTCを返す。
#[derive(Debug, Default)]
pub struct SystemClock {
    warned: AtomicBool,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// ローカル時刻を取得できなかった場合にUTCを返す。警告は最初の1回だけ出力する。
    fn local_or_utc<E: Display>(
        &self,
        local: std::result::Result<OffsetDateTime, E>,
    ) -> OffsetDateTime {
        match local {
            Ok(now) => now,
            Err(err) => {
                if !self.warned.swap(true, Ordering::Relaxed) {
                    tracing::warn!(error = %err, "local UTC offset unavailable, using UTC");
                }
                OffsetDateTime::now_utc()
            }
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        self.local_or_utc(OffsetDateTime::now_local())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}
