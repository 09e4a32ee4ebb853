// src/fetch.rs
//
// Where raw markup comes from. The cache only sees the two traits, so tests
// and offline runs can swap in closures or files.

use std::{fs, path::PathBuf, thread, time::Duration};

use crate::{
    config::options::{SourceOptions, VerbListOrigin},
    core::{net, sanitize::strip_accents},
    error::{Error, Result},
    specs::verb_list,
    verb::Verb,
};

/// Ordered (French, English) list of candidate verbs.
pub trait VerbListSource {
    fn fetch_popular_verbs(&mut self) -> Result<Vec<Verb>>;
}

/// Raw conjugation page for one verb. A page saying "verb not found" is still
/// an `Ok`; the parser decides what it means.
pub trait VerbPageSource {
    fn fetch_verb_page(&mut self, verb: &Verb) -> Result<String>;
}

impl<F> VerbPageSource for F
where
    F: FnMut(&Verb) -> Result<String>,
{
    fn fetch_verb_page(&mut self, verb: &Verb) -> Result<String> {
        self(verb)
    }
}

/* ---------- verb list ---------- */

pub struct HttpVerbList {
    url: String,
}

impl HttpVerbList {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl VerbListSource for HttpVerbList {
    fn fetch_popular_verbs(&mut self) -> Result<Vec<Verb>> {
        logf!("Verb list: GET {}", self.url);
        let doc = net::get_text(&self.url)?;
        let verbs = verb_list::parse_listing(&doc);
        logf!("Verb list: {} verbs", verbs.len());
        Ok(verbs)
    }
}

pub struct FileVerbList {
    path: PathBuf,
}

impl FileVerbList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VerbListSource for FileVerbList {
    fn fetch_popular_verbs(&mut self) -> Result<Vec<Verb>> {
        let text = fs::read(&self.path)
            .map(|b| net::decode_body(&b))
            .map_err(|e| Error::storage(&self.path, e))?;
        let verbs = verb_list::parse_any(&text);
        logf!("Verb list: {} verbs from {}", verbs.len(), self.path.display());
        Ok(verbs)
    }
}

/// List source for the configured origin.
pub fn list_source(opts: &SourceOptions) -> Box<dyn VerbListSource + Send> {
    match &opts.verb_list {
        VerbListOrigin::Remote(url) => Box::new(HttpVerbList::new(url.clone())),
        VerbListOrigin::File(path) => Box::new(FileVerbList::new(path.clone())),
    }
}

/* ---------- conjugation pages ---------- */

/// Sequential HTTP fetcher with a fixed pause between requests.
pub struct HttpVerbPages {
    base: String,
    pause: Duration,
    fetched: usize,
}

impl HttpVerbPages {
    pub fn new(base: impl Into<String>, pause_ms: u64) -> Self {
        Self { base: base.into(), pause: Duration::from_millis(pause_ms), fetched: 0 }
    }

    pub fn from_options(opts: &SourceOptions) -> Self {
        Self::new(opts.verb_pages_url.clone(), opts.request_pause_ms)
    }

    pub fn url_for(&self, verb: &Verb) -> String {
        join!(&self.base, &net::percent_encode(&request_word(&verb.infinitive)))
    }
}

impl VerbPageSource for HttpVerbPages {
    fn fetch_verb_page(&mut self, verb: &Verb) -> Result<String> {
        if self.fetched > 0 {
            thread::sleep(self.pause); // be polite
        }
        self.fetched += 1;
        let url = self.url_for(verb);
        logd!("Verb page: GET {}", url);
        net::get_text(&url)
    }
}

/// The word the conjugation site is queried with: accents dropped, and only
/// the last word of multi-word entries ("se lever" → "lever").
pub fn request_word(infinitive: &str) -> String {
    let plain = strip_accents(&infinitive.replace('\u{2019}', "'"));
    plain.split_whitespace().last().map(|w| s!(w)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_words() {
        assert_eq!(request_word("être"), "etre");
        assert_eq!(request_word("se lever"), "lever");
        assert_eq!(request_word("s\u{2019}asseoir"), "s'asseoir");
        assert_eq!(request_word("   "), "");
    }

    #[test]
    fn page_urls_are_encoded() {
        let pages = HttpVerbPages::new("http://conjf.cactus2000.de/showverb.en.php?verb=", 0);
        let url = pages.url_for(&Verb::new("s'appeler", "to be called"));
        assert_eq!(url, "http://conjf.cactus2000.de/showverb.en.php?verb=s%27appeler");
    }

    #[test]
    fn closures_are_page_sources() {
        let mut calls = 0;
        let mut src = |v: &Verb| -> Result<String> {
            calls += 1;
            Ok(format!("<p>{}</p>", v.infinitive))
        };
        let page = src.fetch_verb_page(&Verb::new("aller", "to go")).unwrap();
        assert_eq!(page, "<p>aller</p>");
        assert_eq!(calls, 1);
    }

    #[test]
    fn missing_list_file_is_storage_error() {
        let mut src = FileVerbList::new("/definitely/not/here/verbs.tsv");
        assert!(matches!(src.fetch_popular_verbs(), Err(Error::Storage { .. })));
    }
}
