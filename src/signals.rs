//! 割り込み（SIGINT / SIGTERM）を検知する。
//!
//! シグナルハンドラーはフラグを立てるだけで、ファイルを閉じる処理は読み込みループが行う。

use std::sync::atomic::AtomicBool;

use crate::error::Result;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// 割り込みを受け取ったときに`true`になるフラグ
pub fn flag() -> &'static AtomicBool {
    &INTERRUPTED
}

#[cfg(unix)]
extern "C" fn on_signal(_: nix::libc::c_int) {
    INTERRUPTED.store(true, std::sync::atomic::Ordering::SeqCst);
}

/// シグナルハンドラーを登録する。
#[cfg(unix)]
pub fn install() -> Result<()> {
    use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

    use crate::error::Error;

    let action = SigAction::new(
        SigHandler::Handler(on_signal),
        SaFlags::empty(),
        SigSet::empty(),
    );
    for signal in [Signal::SIGINT, Signal::SIGTERM] {
        // ハンドラーはアトミック変数への書き込みのみ行う
        unsafe { sigaction(signal, &action) }.map_err(|source| Error::Signal { signal, source })?;
    }
    tracing::debug!("installed SIGINT/SIGTERM handlers");

    Ok(())
}

/// シグナルハンドラーを登録する。
///
/// Unix以外では登録せず、割り込みはプロセスを終了させる。各行は書き込みごとにフラッシュ
/// しているため、読み込み済みの行は失われない。
#[cfg(not(unix))]
pub fn install() -> Result<()> {
    tracing::debug!("signal handlers are not supported on this platform");

    Ok(())
}
