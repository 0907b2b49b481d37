//! File-backed debug logging
//!
//! A TUI owns the terminal it draws on, so log output goes to a file instead
//! of stderr. Only active in debug builds; release builds compile to a no-op.

/// Initialize logging to `ghostfill.log` in the working directory.
///
/// Filter defaults to `debug` and can be overridden with `RUST_LOG`.
/// Failures to create the log file are ignored; the app just runs unlogged.
#[cfg(debug_assertions)]
pub fn init() {
    use std::io::Write;

    let Ok(file) = std::fs::File::create("ghostfill.log") else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}
