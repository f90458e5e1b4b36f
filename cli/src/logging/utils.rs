//! Log file location, ANSI stripping and timestamps.
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

/// `chrono` format for the log file header.
pub(super) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// `chrono` format for each log line.
pub(super) const TIME_FORMAT: &str = "%H:%M:%S";

/// Current UTC time rendered with `format`.
pub(super) fn utc_now(format: &str) -> String {
    chrono::Utc::now().format(format).to_string()
}

/// Remove ANSI escape sequences.
///
/// A CSI sequence (`ESC [`) runs up to its final byte in `@`..=`~`; any
/// other escape swallows the one character after `ESC`.
pub(super) fn strip_ansi(s: &str) -> String {
    let mut pieces = s.split('\x1b');
    let mut out = pieces.next().unwrap_or_default().to_owned();
    for piece in pieces {
        if let Some(csi) = piece.strip_prefix('[') {
            let end = csi
                .find(|c: char| ('@'..='~').contains(&c))
                .map_or(csi.len(), |i| i + 1);
            out.push_str(csi.get(end..).unwrap_or_default());
        } else {
            let mut rest = piece.chars();
            rest.next();
            out.push_str(rest.as_str());
        }
    }
    out
}

fn cache_root(xdg_cache_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    xdg_cache_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|h| PathBuf::from(h).join(".cache")))
}

/// `<cache>/aclfw/<command>.log`, where `<cache>` is `$XDG_CACHE_HOME` or
/// `~/.cache`. The directory is created; `None` if that fails or neither
/// variable is set.
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    let dir = cache_root(std::env::var_os("XDG_CACHE_HOME"), std::env::var_os("HOME"))?
        .join("aclfw");
    fs::create_dir_all(&dir).ok()?;
    Some(dir.join(format!("{command}.log")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_ansi_removes_sgr() {
        assert_eq!(strip_ansi("\x1b[31merror:\x1b[0m boom"), "error: boom");
        assert_eq!(strip_ansi("plain"), "plain");
        assert_eq!(
            strip_ansi("\x1b[1;34m==>\x1b[0m \x1b[1mSummary\x1b[0m"),
            "==> Summary"
        );
    }

    #[test]
    fn strip_ansi_removes_other_csi() {
        assert_eq!(strip_ansi("\x1b[2Jclear"), "clear");
        assert_eq!(strip_ansi("\x1b[Kline"), "line");
        assert_eq!(strip_ansi("\x1b[31m\x1b[2Jboth\x1b[0m"), "both");
    }

    #[test]
    fn strip_ansi_handles_truncated_escapes() {
        assert_eq!(strip_ansi("tail\x1b[31"), "tail");
        assert_eq!(strip_ansi("a\x1bXb"), "ab");
        assert_eq!(strip_ansi("end\x1b"), "end");
    }

    #[test]
    fn cache_root_prefers_xdg() {
        assert_eq!(
            cache_root(Some("/xdg".into()), Some("/home/u".into())),
            Some(PathBuf::from("/xdg"))
        );
    }

    #[test]
    fn cache_root_falls_back_to_home() {
        assert_eq!(
            cache_root(Some(OsString::new()), Some("/home/u".into())),
            Some(PathBuf::from("/home/u/.cache"))
        );
        assert_eq!(
            cache_root(None, Some("/home/u".into())),
            Some(PathBuf::from("/home/u/.cache"))
        );
        assert_eq!(cache_root(None, None), None);
    }

    #[test]
    fn timestamps_use_fixed_width_formats() {
        assert_eq!(utc_now(DATETIME_FORMAT).len(), "2024-01-01 00:00:00".len());
        assert_eq!(utc_now(TIME_FORMAT).len(), "00:00:00".len());
    }
}
