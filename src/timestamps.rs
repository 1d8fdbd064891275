use time::{format_description, OffsetDateTime};

use crate::error::Result;

/// ログファイル名に使う日付の書式（`DD.MM.YYYY`）
const DATE_TAG_FORMAT: &str = "[day].[month].[year]";

/// 各行の先頭に付与するタイムスタンプの書式（`DD.Mon.YYYY HH:MM:SS`）
const LINE_STAMP_FORMAT: &str = "[day].[month repr:short].[year] [hour]:[minute]:[second]";

/// ログファイルの拡張子
pub const LOG_EXTENSION: &str = "log";

/// ログファイルを識別する日付タグを作成して、返却する。
///
/// # 引数
///
/// - now: 現在日時。
///
/// # 戻り値
///
/// `DD.MM.YYYY`形式の日付タグ。
pub fn date_tag(now: &OffsetDateTime) -> Result<String> {
    let format = format_description::parse(DATE_TAG_FORMAT)?;

    Ok(now.format(&format)?)
}

/// 日付タグからログファイル名を作成して、返却する。
///
/// ログファイル名は、`<DD.MM.YYYY>.log`となる。
pub fn log_filename(tag: &str) -> String {
    format!("{}.{}", tag, LOG_EXTENSION)
}

/// 行の先頭に付与する接頭語（`DD.Mon.YYYY HH:MM:SS: `）を作成して、返却する。
pub fn line_prefix(now: &OffsetDateTime) -> Result<String> {
    let format = format_description::parse(LINE_STAMP_FORMAT)?;

    Ok(format!("{}: ", now.format(&format)?))
}
