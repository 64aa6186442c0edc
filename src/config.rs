use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "ChiroTrack";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default `RUST_LOG`-style filter when the environment provides none.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

/// Get the application data directory
/// ~/ChiroTrack/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("ChiroTrack")
}

/// Get the default record store root.
pub fn records_dir() -> PathBuf {
    app_data_dir().join("data")
}
