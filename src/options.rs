// Command-line options. Every flag defaults to the fixed device setup, so
// running the tool without arguments talks to the tablet on the shop floor.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Network address of the signage tablet.
pub const DEVICE_IP: &str = "10.0.110.130";
/// Port the tablet's asset server listens on.
pub const DEVICE_PORT: u16 = 12345;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Parser, Debug)]
#[command(version, about = "Upload selected .html files to the signage tablet")]
pub struct Options {
    /// Base URL of the device; files go to `{base_url}/assets/{name}`.
    #[arg(short = 'u', long, default_value_t = default_base_url())]
    pub base_url: String,
    /// Directory to scan for .html files (defaults to the executable's directory).
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
    /// Per-request timeout in seconds.
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Options {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// The directory to scan: `--dir` if given, otherwise the directory the
    /// executable lives in, otherwise the current directory.
    pub fn scan_dir(&self) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn default_base_url() -> String {
    format!("http://{}:{}", DEVICE_IP, DEVICE_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_tablet() {
        let options = Options::parse_from(["signage-upload"]);
        assert_eq!(options.base_url, "http://10.0.110.130:12345");
        assert_eq!(options.timeout(), Duration::from_secs(15));
        assert!(options.dir.is_none());
    }

    #[test]
    fn explicit_dir_wins() {
        let options = Options::parse_from(["signage-upload", "--dir", "/tmp/pages"]);
        assert_eq!(options.scan_dir(), PathBuf::from("/tmp/pages"));
    }
}
