//! Distance and proximity scores between the two columns of a list file.

use std::path::Path;

use tracing::debug;

mod error;
mod input;
mod solve;

pub use error::{Error, FormatError};
pub use input::{parse_input, read_input, Lists, DEFAULT_INPUT};
pub use solve::{frequencies, total_distance, total_proximity, FrequencyMap};

/// Log filter used when `RUST_LOG` is unset. Failures are reported on stdout,
/// so nothing below this level is emitted on a normal run.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Reads `path` and returns the total distance between its columns.
pub fn calculate_distance(path: impl AsRef<Path>) -> Result<u128, Error> {
    read_input(path)
        .and_then(|lists| total_distance(&lists))
        .inspect_err(|err| debug!(%err, "distance unavailable"))
}

/// Reads `path` and returns the total proximity between its columns.
///
/// The file is read again rather than shared with [`calculate_distance`].
pub fn calculate_proximity(path: impl AsRef<Path>) -> Result<i128, Error> {
    read_input(path)
        .and_then(|lists| total_proximity(&lists))
        .inspect_err(|err| debug!(%err, "proximity unavailable"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io::Write,
        sync::{Arc, Mutex},
    };
    use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

    #[test]
    fn calculates_both_from_one_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "3 4\n4 3\n2 5\n1 3\n3 9\n3 3\n").unwrap();
        assert_eq!(calculate_distance(file.path()).unwrap(), 11);
        assert_eq!(calculate_proximity(file.path()).unwrap(), 13);
    }

    #[test]
    fn extreme_values_give_exact_totals() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "9223372036854775807 9223372036854775807\n1 9223372036854775807\n"
        )
        .unwrap();
        assert_eq!(
            calculate_proximity(file.path()).unwrap(),
            2 * i128::from(i64::MAX)
        );

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "-9223372036854775808 9223372036854775807\n-9223372036854775808 9223372036854775807\n"
        )
        .unwrap();
        assert_eq!(
            calculate_distance(file.path()).unwrap(),
            2 * u128::from(u64::MAX)
        );
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn logged_while_failing(filter: &str) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_INPUT);
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(captured.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            assert!(calculate_distance(&path).is_err());
            assert!(calculate_proximity(&path).is_err());
        });
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn failures_are_silent_at_default_filter() {
        assert_eq!(logged_while_failing(DEFAULT_LOG_FILTER), "");
        let verbose = logged_while_failing("debug");
        assert!(verbose.contains("distance unavailable"));
        assert!(verbose.contains("proximity unavailable"));
    }

    #[test]
    fn missing_file_fails_both() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_INPUT);
        assert!(matches!(
            calculate_distance(&path),
            Err(Error::FileNotFound { .. })
        ));
        assert!(matches!(
            calculate_proximity(&path),
            Err(Error::FileNotFound { .. })
        ));
    }

    #[test]
    fn malformed_file_fails_both() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1 2\n3 x\n").unwrap();
        assert!(matches!(
            calculate_distance(file.path()),
            Err(Error::InvalidFormat { line: 2, .. })
        ));
        assert!(matches!(
            calculate_proximity(file.path()),
            Err(Error::InvalidFormat { line: 2, .. })
        ));
    }
}
