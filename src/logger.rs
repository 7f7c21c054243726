use log::Level;

pub(crate) const TARGET: &str = "bounded_priority_queue";

fn log(level: Level, message: &str) {
    log::log!(target: TARGET, level, "{}", message);
}

pub(crate) fn log_debug(message: &str) {
    log(Level::Debug, message)
}

// Diagnostic notices visible to callers at the default info level.
pub(crate) fn log_notice(message: &str) {
    log(Level::Info, message)
}

pub(crate) fn log_warning(message: &str) {
    log(Level::Warn, message)
}
