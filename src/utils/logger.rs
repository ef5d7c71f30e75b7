use colored::Colorize;
use env_logger::Builder;
use log::Level;
use std::io::Write;

/// Log target without the crate prefix: `domaincount::pipeline::worker` → `pipeline::worker`.
pub fn module_label(target: &str) -> &str {
    target
        .strip_prefix(env!("CARGO_PKG_NAME"))
        .and_then(|rest| rest.strip_prefix("::"))
        .unwrap_or(target)
}

pub fn setup_logging(verbose: bool) {
    use log::LevelFilter;

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    Builder::from_default_env()
        .filter_level(LevelFilter::Warn) // Default: only warnings from dependencies
        .filter_module(env!("CARGO_PKG_NAME"), level) // Our crate: use requested level
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME");
            let line = match record.level() {
                Level::Error => format!(
                    "[{} {} {}] {}",
                    name.cyan(),
                    "ERROR".red(),
                    record.target().white(),
                    record.args()
                ),
                Level::Warn => format!(
                    "[{} {} {}] {}",
                    name.cyan(),
                    "WARN".yellow(),
                    record.target().white(),
                    record.args()
                ),
                // Debug lines carry the emitting module, e.g. `pipeline::orchestrator`.
                Level::Debug | Level::Trace => format!(
                    "[{} {}] {}",
                    name.cyan(),
                    module_label(record.target()).dimmed(),
                    record.args()
                ),
                Level::Info => format!("[{}] {}", name.cyan(), record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .init();
}
