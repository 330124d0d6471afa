//! Path utilities: expand `~` in configured paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_are_untouched() {
        assert_eq!(expand_tilde("/tmp/scores.csv"), PathBuf::from("/tmp/scores.csv"));
        assert_eq!(expand_tilde("scores.csv"), PathBuf::from("scores.csv"));
    }

    #[test]
    fn tilde_goes_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/runs/scores.csv"), home.join("runs/scores.csv"));
        }
    }
}
