use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "bestresp.log";

/// Maximum log file size before rotation (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Size to keep after rotation (1 MB of most recent logs)
const KEEP_SIZE: u64 = 1024 * 1024;

const ROTATION_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// Path of the log file for a data directory
pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE_NAME)
}

/// Truncate the log to its most recent `keep` bytes once it exceeds `max`.
///
/// The kept tail starts at a line boundary. Returns whether the file was rotated.
fn rotate_log(log_path: &Path, max: u64, keep: u64) -> std::io::Result<bool> {
    let len = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= max {
        return Ok(false);
    }

    let mut tail = Vec::new();
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(keep)))?;
        file.read_to_end(&mut tail)?;
    }

    let skip = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    let mut file = File::create(log_path)?;
    file.write_all(ROTATION_MARKER)?;
    file.write_all(&tail[skip..])?;

    Ok(true)
}

/// Initialize logging to `{data_dir}/bestresp.log`.
///
/// The terminal is reserved for the sweep report and the chart, so nothing is
/// logged to stdout or stderr. `RUST_LOG` overrides `level` when set.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let path = log_path(data_dir);
    if let Err(e) = rotate_log(&path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: Failed to rotate log file: {e}");
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let default_filter = format!("bestresp={level},bestresp_core={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::info!(log_path = %path.display(), "Logging initialized");
    Ok(())
}
