use std::path::PathBuf;

/// Resolve the qrgen home directory.
///
/// Priority:
/// 1) QRGEN_HOME
/// 2) HOME/USERPROFILE
/// 3) ./.qrgen
pub fn qrgen_home() -> PathBuf {
    if let Ok(override_path) = std::env::var("QRGEN_HOME") {
        return PathBuf::from(override_path);
    }
    if let Ok(home) = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
        return PathBuf::from(home).join(".qrgen");
    }
    PathBuf::from(".").join(".qrgen")
}

/// Default logs directory: ~/.qrgen/logs
pub fn default_logs_dir() -> PathBuf {
    qrgen_home().join("logs")
}

/// Ensure the logs directory exists
pub fn ensure_logs_dir() -> std::io::Result<PathBuf> {
    let dir = default_logs_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
