//! Tracing subscriber setup for the rig CLI tools.
//!
//! Configuration comes from environment variables so the binaries stay
//! flag-free: `LOG_LEVEL`, `LOG_FORMAT` (`human`/`json`), `LOG_OUTPUT`
//! (`console`/`file`/`both`) and `LOG_FILE_PATH`.

use std::{
    env,
    io::{self, Write},
    path::Path,
};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::MakeWriter, prelude::*, registry, EnvFilter};

/// Writer that duplicates each log line to the console and the file appender.
struct Tee<C, F> {
    console: C,
    file: F,
}

impl<C, F> Write for Tee<C, F>
where
    C: Write,
    F: Write,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let console_res = self.console.write(buf);
        let file_res = self.file.write(buf);
        console_res.or(file_res)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.console.flush()?;
        self.file.flush()
    }
}

struct MakeTee<C, F> {
    make_console: C,
    make_file: F,
}

impl<'a, C, F> MakeWriter<'a> for MakeTee<C, F>
where
    C: MakeWriter<'a>,
    F: MakeWriter<'a>,
{
    type Writer = Tee<C::Writer, F::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        Tee {
            console: self.make_console.make_writer(),
            file: self.make_file.make_writer(),
        }
    }
}

/// Initializes the global tracing subscriber based on environment variables.
///
/// Returns the appender guard when logging to a file; dropping it flushes
/// buffered log lines, so callers should hold it for the process lifetime.
pub fn init_subscriber() -> Option<WorkerGuard> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_output = env::var("LOG_OUTPUT").unwrap_or_else(|_| "console".to_string());
    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "human".to_string());
    let log_file_path = env::var("LOG_FILE_PATH").unwrap_or_else(|_| "/tmp/rig-setup.log".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let use_console = log_output == "console" || log_output == "both";
    let use_file = log_output == "file" || log_output == "both";
    let is_json = log_format == "json";

    let subscriber = registry().with(env_filter);

    let log_path = Path::new(&log_file_path);
    let log_dir = log_path.parent().unwrap_or_else(|| Path::new("/tmp"));
    let log_filename = log_path.file_name().unwrap_or("rig-setup.log".as_ref());

    if use_console && use_file {
        let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let tee_writer = MakeTee {
            make_console: io::stderr,
            make_file: non_blocking,
        };

        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(tee_writer);
        if is_json {
            subscriber.with(fmt_layer.json()).init();
        } else {
            subscriber.with(fmt_layer).init();
        }
        Some(guard)
    } else if use_file {
        let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(non_blocking);
        if is_json {
            subscriber.with(fmt_layer.json()).init();
        } else {
            subscriber.with(fmt_layer).init();
        }
        Some(guard)
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
        if is_json {
            subscriber.with(fmt_layer.json()).init();
        } else {
            subscriber.with(fmt_layer).init();
        }
        None
    }
}
