pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "riff";
#[cfg(windows)]
pub const EXEC_NAME: &str = "riff.exe";

pub const CONFIG_STORE_PATH: &str = ".riff/config.json";

// `kubectl proxy` listens here by default
pub const DEFAULT_API_URL: &str = "http://localhost:8001";
pub const DEFAULT_NAMESPACE: &str = "default";
pub const DEFAULT_GIT_REVISION: &str = "master";
