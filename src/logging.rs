use std::io::Write;

/// Initialise `env_logger` with timestamped, module-tagged lines on stderr.
///
/// `RUST_LOG` still takes precedence over `level` when set.
pub fn setup_logging(level: log::LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{0} {1} {2}] {3}",
                record.level(),
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.module_path().unwrap_or(""),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .try_init();
}
