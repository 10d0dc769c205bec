use crate::error::{QuotzError, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Env var overriding the data directory. Primarily used by tests to isolate
/// state in a temp dir.
pub const DATA_DIR_ENV: &str = "QUOTZ_DATA";

/// Resolve the quotz data directory: the env override when set, otherwise the
/// platform data dir (e.g. `~/.local/share/quotz` on Linux).
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let proj_dirs = ProjectDirs::from("com", "quotz", "quotz").ok_or_else(|| {
        QuotzError::Persistence("could not determine a data directory".to_string())
    })?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_var_overrides_the_platform_dir() {
        std::env::set_var(DATA_DIR_ENV, "/tmp/quotz-test-data");
        let dir = data_dir().unwrap();
        std::env::remove_var(DATA_DIR_ENV);
        assert_eq!(dir, PathBuf::from("/tmp/quotz-test-data"));
    }
}
