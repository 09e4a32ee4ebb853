// src/config/options.rs
use std::env;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Root of everything we write (`~/.conj_quiz`).
    pub app_dir: PathBuf,
    pub source: SourceOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            app_dir: home_dir().join(APP_DIR),
            source: SourceOptions::default(),
        }
    }
}

impl AppOptions {
    /// Options rooted somewhere other than the user's home (tests, `--cache-dir`).
    pub fn with_app_dir(dir: impl Into<PathBuf>) -> Self {
        Self { app_dir: dir.into(), ..Self::default() }
    }

    /// One record file per verb lives here.
    pub fn cache_dir(&self) -> PathBuf {
        self.app_dir.join(VERBS_SUBDIR)
    }

    pub fn log_path(&self) -> PathBuf {
        self.app_dir.join(LOG_FILE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerbListOrigin {
    /// Fetch the listing page over HTTP.
    Remote(String),
    /// A saved listing page, or a `infinitive<TAB>gloss` text file.
    File(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub verb_list: VerbListOrigin,
    /// Prefix the (encoded) verb is appended to.
    pub verb_pages_url: String,
    pub request_pause_ms: u64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            verb_list: VerbListOrigin::Remote(s!(VERB_LIST_URL)),
            verb_pages_url: s!(VERB_PAGES_URL),
            request_pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

impl SourceOptions {
    pub fn set_verb_list_file(&mut self, path: &Path) {
        self.verb_list = VerbListOrigin::File(path.to_path_buf());
    }

    /// From a free-text path field: blank means the remote list again.
    pub fn set_verb_list_text(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            self.verb_list = VerbListOrigin::Remote(s!(VERB_LIST_URL));
        } else {
            self.set_verb_list_file(Path::new(text));
        }
    }

    /// Text for that same field.
    pub fn verb_list_text(&self) -> String {
        match &self.verb_list {
            VerbListOrigin::Remote(_) => s!(),
            VerbListOrigin::File(p) => p.display().to_string(),
        }
    }
}

/// `$HOME` (or `%USERPROFILE%`), falling back to the working directory.
pub fn home_dir() -> PathBuf {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_and_log_live_under_app_dir() {
        let opts = AppOptions::with_app_dir("/tmp/cq");
        assert_eq!(opts.cache_dir(), PathBuf::from("/tmp/cq").join("verbs"));
        assert_eq!(opts.log_path(), PathBuf::from("/tmp/cq").join("debug.log"));
    }

    #[test]
    fn verb_list_field_switches_origin() {
        let mut src = SourceOptions::default();
        src.set_verb_list_text("  /home/me/verbs.tsv ");
        assert_eq!(src.verb_list, VerbListOrigin::File(PathBuf::from("/home/me/verbs.tsv")));
        assert_eq!(src.verb_list_text(), "/home/me/verbs.tsv");

        src.set_verb_list_text("   ");
        assert_eq!(src.verb_list, VerbListOrigin::Remote(s!(VERB_LIST_URL)));
        assert_eq!(src.verb_list_text(), "");
    }

    #[test]
    fn default_sources_point_at_remote_sites() {
        let src = SourceOptions::default();
        assert!(matches!(src.verb_list, VerbListOrigin::Remote(ref u) if u.starts_with("http://")));
        assert!(src.verb_pages_url.ends_with("verb="));
    }
}
