use std::fs::OpenOptions;

use log::{LevelFilter, error, info};
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::Settings;
use crate::error::ShellError;
use crate::eval::Outcome;

/// Install a file logger appending to the configured log file.
/// Best-effort: if the file can't be opened logging stays off; it must never
/// keep the shell from starting.
pub fn init(settings: &Settings) {
    let level = settings.level_filter();
    if level == LevelFilter::Off {
        return;
    }

    let path = settings.log_path();
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .build();
    let _ = WriteLogger::init(level, config, file);
}

/// Record one interpreted line and how it ended.
pub fn log_line(line: &str, result: &Result<Outcome, ShellError>) {
    // Compact single-line form, truncated like a shell history entry
    let line: String = line.chars().take(200).collect();
    match result {
        Ok(Outcome::Output(out)) => info!("{line}\tok\t{} bytes", out.len()),
        Ok(Outcome::Exit) => info!("{line}\texit"),
        Err(e) => error!("{line}\t{}", e.to_string().replace('\n', "; ")),
    }
}
