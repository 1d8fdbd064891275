use std::{
    cell::Cell,
    fs,
    io::{self, BufReader, Cursor, ErrorKind, Read},
    sync::atomic::{AtomicBool, Ordering},
};

use serial_line_logger::{
    appenders::DailyAppender,
    clock::Clock,
    logger::{LineLogger, Stopped},
};
use tempfile::TempDir;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

struct SteppingClock {
    start: OffsetDateTime,
    step: time::Duration,
    calls: Cell<i32>,
}

impl Clock for SteppingClock {
    fn now(&self) -> OffsetDateTime {
        let calls = self.calls.get();
        self.calls.set(calls + 1);
        self.start + self.step * calls
    }
}

fn evening() -> OffsetDateTime {
    PrimitiveDateTime::new(
        Date::from_calendar_date(2026, Month::December, 31).unwrap(),
        Time::from_hms(23, 59, 0).unwrap(),
    )
    .assume_offset(UtcOffset::from_hms(1, 0, 0).unwrap())
}

#[test]
fn lines_on_two_dates_are_split_across_two_files() {
    let dir = TempDir::new().unwrap();
    let clock = SteppingClock {
        start: evening(),
        step: time::Duration::seconds(20),
        calls: Cell::new(0),
    };
    let appender = DailyAppender::open(dir.path(), &clock.now()).unwrap();
    let mut stdout = Vec::new();
    let stop = AtomicBool::new(false);

    let stopped = LineLogger::new(&clock, appender, &mut stdout)
        .run(Cursor::new(b"l1\nl2\nl3\nl4\n".to_vec()), &stop)
        .unwrap();

    assert_eq!(Stopped::EndOfInput, stopped);
    let old_year = fs::read_to_string(dir.path().join("31.12.2026.log")).unwrap();
    let new_year = fs::read_to_string(dir.path().join("01.01.2027.log")).unwrap();
    assert_eq!("31.Dec.2026 23:59:20: l1\n31.Dec.2026 23:59:40: l2\n", old_year);
    assert_eq!("01.Jan.2027 00:00:00: l3\n01.Jan.2027 00:00:20: l4\n", new_year);

    // 標準出力には、ファイルと同じレコードが同じ順序で書き込まれる
    assert_eq!(
        format!("{}{}", old_year, new_year),
        String::from_utf8(stdout).unwrap()
    );
}

#[test]
fn interrupt_closes_file_without_losing_read_lines() {
    struct Serial<'a> {
        chunks: Vec<&'static [u8]>,
        stop: &'a AtomicBool,
    }

    impl Read for Serial<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.chunks.is_empty() {
                self.stop.store(true, Ordering::SeqCst);
                return Err(io::Error::from(ErrorKind::TimedOut));
            }
            let chunk = self.chunks.remove(0);
            buf[..chunk.len()].copy_from_slice(chunk);
            Ok(chunk.len())
        }
    }

    let dir = TempDir::new().unwrap();
    let clock = SteppingClock {
        start: evening(),
        step: time::Duration::ZERO,
        calls: Cell::new(0),
    };
    let appender = DailyAppender::open(dir.path(), &clock.now()).unwrap();
    let mut stdout = Vec::new();
    let stop = AtomicBool::new(false);
    let serial = Serial {
        chunks: vec![&b"temp=21"[..], &b".5\r\nhum"[..], &b"=40\r\n"[..]],
        stop: &stop,
    };

    let stopped = LineLogger::new(&clock, appender, &mut stdout)
        .run(BufReader::new(serial), &stop)
        .unwrap();

    assert_eq!(Stopped::Interrupted, stopped);
    let expected = "31.Dec.2026 23:59:00: temp=21.5\n31.Dec.2026 23:59:00: hum=40\n";
    assert_eq!(
        expected,
        fs::read_to_string(dir.path().join("31.12.2026.log")).unwrap()
    );
    assert_eq!(expected, String::from_utf8(stdout).unwrap());
}
