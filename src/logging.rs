use chrono::Local;
use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

pub fn init_logging() -> Result<(), std::io::Error> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("ticketing-tool")
        .join("logs");

    create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!(
        "ticketing-{}.log",
        Local::now().format("%Y%m%d-%H%M%S")
    ));

    *LOG_FILE.lock().unwrap() = Some(log_file.clone());

    log_info(&format!("Logging initialized to: {}", log_file.display()));

    Ok(())
}

pub fn log_error(message: &str) {
    log_with_level("ERROR", message);
}

pub fn log_info(message: &str) {
    log_with_level("INFO", message);
}

pub fn log_debug(message: &str) {
    log_with_level("DEBUG", message);
}

/// Route panics into the log file so a crash inside the TUI leaves a trace
/// even though stderr is swallowed by the alternate screen.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let mut message = String::from("PANIC: ");

        if let Some(location) = info.location() {
            message.push_str(&format!(
                "at {}:{}:{} - ",
                location.file(),
                location.line(),
                location.column()
            ));
        }

        if let Some(s) = info.payload().downcast_ref::<&str>() {
            message.push_str(s);
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            message.push_str(s);
        } else {
            message.push_str("Unknown panic payload");
        }

        log_error(&message);
    }));
}

fn log_with_level(level: &str, message: &str) {
    if let Some(log_file) = LOG_FILE.lock().unwrap().as_ref() {
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_file) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {} - {}", timestamp, level, message);
        }
    }

    // Never print to stderr: it would corrupt the TUI.
}

pub fn get_log_file_path() -> Option<PathBuf> {
    LOG_FILE.lock().unwrap().clone()
}
