//! Stderr logging layer for the binary.

use tracing::level_filters::LevelFilter;
use tracing::Subscriber;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Map repeated `-d` flags to a level: WARN, INFO, DEBUG, TRACE.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Formatted layer writing to `writer`, filtered by `level` and with noisy modules muted.
pub fn filtered_layer<S, W>(level: LevelFilter, writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let noisy_modules = ["config"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(level)
        .with_filter(module_filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::prelude::*;

    use crate::application::{TreeRequest, TreeService};
    use crate::domain::build;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_at(level: LevelFilter, f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber =
            tracing_subscriber::registry().with(filtered_layer(level, move || writer.clone()));
        tracing::subscriber::with_default(subscriber, f);
        captured.text()
    }

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::WARN);
        assert_eq!(level_for(2), LevelFilter::DEBUG);
        assert_eq!(level_for(9), LevelFilter::TRACE);
    }

    #[test]
    fn given_default_level_when_building_then_nothing_logged() {
        let output = capture_at(level_for(0), || {
            build(3, 7).unwrap();
            build(4, 4).unwrap();
            TreeService::new().report(&TreeRequest::new(4, 5)).unwrap();
        });
        assert_eq!(output, "");
    }

    #[test]
    fn given_default_level_when_warning_then_logged() {
        let output = capture_at(level_for(0), || {
            build(3, 7).unwrap();
            tracing::warn!("still visible");
        });
        assert!(output.contains("still visible"));
        assert!(!output.contains("tree built"));
    }

    #[test]
    fn given_debug_level_when_building_then_depth_recorded() {
        let output = capture_at(level_for(2), || {
            build(3, 7).unwrap();
        });
        assert!(output.contains("tree built"));
        assert!(output.contains("depth=3"));
    }
}
