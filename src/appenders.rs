use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use time::OffsetDateTime;

use crate::{
    error::{Error, Result},
    timestamps,
};

/// ログファイルを作成するディレクトリ（作業ディレクトリ）
pub const LOG_DIRECTORY: &str = ".";

/// 日付ごとにログファイルを切り替えるアペンダー
///
/// 開いているファイルは、そのファイル名に使った日付タグと対で保持する。
/// 現在日時の日付タグがファイルの日付タグと異なる場合、ファイルを閉じて新しい日付の
/// ファイルに切り替える。
#[derive(Debug)]
pub struct DailyAppender {
    directory: PathBuf,
    tag: String,
    path: PathBuf,
    file: File,
}

impl DailyAppender {
    /// `DailyAppender`を作成して、現在日付のログファイルを追記モードで開く。
    ///
    /// # 引数
    ///
    /// * directory: ログファイルを作成するディレクトリ。
    /// * now: 現在日時。
    ///
    /// # 戻り値
    ///
    /// `DailyAppender`インスタンス。
    pub fn open(directory: impl AsRef<Path>, now: &OffsetDateTime) -> Result<DailyAppender> {
        let directory = directory.as_ref().to_path_buf();
        let tag = timestamps::date_tag(now)?;
        let path = create_log_filepath(&directory, &tag);
        let file = open_log(&path)?;
        tracing::info!(path = %path.display(), "opened log file");

        Ok(Self {
            directory,
            tag,
            path,
            file,
        })
    }

    /// 開いているファイルの日付タグ
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// 開いているファイルのパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 日付が変わっている場合、ログファイルを切り替える。
    ///
    /// # 戻り値
    ///
    /// ファイルを切り替えた場合は`true`。
    pub fn roll_if_needed(&mut self, now: &OffsetDateTime) -> Result<bool> {
        let tag = timestamps::date_tag(now)?;
        if tag == self.tag {
            return Ok(false);
        }

        let path = create_log_filepath(&self.directory, &tag);
        let file = open_log(&path)?;
        // ファイル、日付タグ、パスは常に同じファイルを指すように、まとめて入れ替える
        let previous_file = std::mem::replace(&mut self.file, file);
        let previous_path = std::mem::replace(&mut self.path, path);
        self.tag = tag;
        close_log(previous_file, &previous_path)?;
        tracing::info!(
            from = %previous_path.display(),
            to = %self.path.display(),
            "date changed, rolled log file"
        );

        Ok(true)
    }

    /// 1レコードをファイルに追記する。
    pub fn append(&mut self, record: &str) -> Result<()> {
        self.file
            .write_all(record.as_bytes())
            .and_then(|_| self.file.flush())
            .map_err(|source| Error::WriteLog {
                path: self.path.clone(),
                source,
            })
    }

    /// ファイルをディスクに書き出して閉じる。
    pub fn close(self) -> Result<()> {
        close_log(self.file, &self.path)?;
        tracing::info!(path = %self.path.display(), "closed log file");

        Ok(())
    }
}

/// ログファイルパスを作成して返却する。
///
/// # 引数
///
/// - directory: ファイルを作成するディレクトリ。
/// - tag: ファイルの日付タグ。
///
/// # 戻り値
///
/// ログファイルパス。
fn create_log_filepath(directory: &Path, tag: &str) -> PathBuf {
    directory.join(timestamps::log_filename(tag))
}

fn open_log(path: &Path) -> Result<File> {
    create_writer(path).map_err(|source| Error::OpenLog {
        path: path.to_path_buf(),
        source,
    })
}

fn close_log(mut file: File, path: &Path) -> Result<()> {
    file.flush()
        .and_then(|_| file.sync_all())
        .map_err(|source| Error::CloseLog {
            path: path.to_path_buf(),
            source,
        })
}

/// ライターを作成する。
///
/// 親ディレクトリが存在しない場合は、作成してから開き直す。
///
/// # 引数
///
/// * path: ログファイルパス。
///
/// # 戻り値
///
/// `File`インスタンス。
fn create_writer(path: &Path) -> io::Result<File> {
    let mut open_options = OpenOptions::new();
    open_options.append(true).create(true);

    let new_file = open_options.open(path);
    if new_file.is_err() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
            return open_options.open(path);
        }
    }

    new_file
}
