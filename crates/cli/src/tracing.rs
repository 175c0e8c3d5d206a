use std::fs::File;
use std::io::IsTerminal;
use std::path::PathBuf;
use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::Subscriber as FmtSubscriber;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_log::AsTrace;

/// Installs the global subscriber.
///
/// With a `path` everything, including span events, goes to that file, otherwise compact
/// messages go to stdout.
pub fn configure_tracing<IL: LogLevel>(path: Option<PathBuf>, verbosity: &Verbosity<IL>) -> anyhow::Result<()> {

    const SUBSCRIBER_FAILED_MESSAGE: &str = "setting default subscriber failed";
    let max_level = verbosity.log_level_filter().as_trace();

    match path {
        Some(path) => {
            let trace_file: File = File::create(path)?;

            let file_subscriber = FmtSubscriber::builder()
                .with_writer(trace_file)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_max_level(max_level)
                .finish();

            ::tracing::subscriber::set_global_default(file_subscriber)
                .map_err(|err| anyhow::anyhow!("{}: {}", SUBSCRIBER_FAILED_MESSAGE, err))?;
        },
        _ => {
            let stdout_subscriber = FmtSubscriber::builder()
                .event_format(fmt::format().compact())
                .with_ansi(std::io::stdout().is_terminal())
                .with_level(false)
                .with_target(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE)
                .without_time()
                .with_max_level(max_level)
                .finish();

            ::tracing::subscriber::set_global_default(stdout_subscriber)
                .map_err(|err| anyhow::anyhow!("{}: {}", SUBSCRIBER_FAILED_MESSAGE, err))?;
        }
    };

    Ok(())
}
