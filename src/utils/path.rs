//! Path utilities: expand ~ in user-supplied paths.

use std::env;
use std::io;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Expand `~` and anchor a relative path at the current directory.
pub fn resolve_path(path: &str) -> io::Result<PathBuf> {
    let p = expand_tilde(path);
    if p.is_absolute() {
        Ok(p)
    } else {
        Ok(env::current_dir()?.join(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde("/tmp/a.csv"), PathBuf::from("/tmp/a.csv"));
        assert_eq!(expand_tilde("out.csv"), PathBuf::from("out.csv"));
    }

    #[test]
    fn tilde_is_expanded_when_home_is_known() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/x.json"), home.join("x.json"));
        }
    }

    #[test]
    fn relative_paths_resolve_against_current_dir() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(resolve_path("rel.sqlite").unwrap(), cwd.join("rel.sqlite"));
        assert_eq!(
            resolve_path("/tmp/a.sqlite").unwrap(),
            PathBuf::from("/tmp/a.sqlite")
        );
    }
}
