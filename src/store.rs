// src/store.rs
//
// Local verb cache: one JSON record per verb under a single directory.
// Records are written once and never refreshed on their own; clearing the
// directory (or `--refresh`) is the only way to re-fetch.

use std::{fs, io, path::{Path, PathBuf}};

use crate::{
    config::consts::RECORD_EXT,
    core::sanitize::record_stem,
    error::{Error, Result},
    fetch::{VerbListSource, VerbPageSource},
    progress::Progress,
    specs::conjugation,
    verb::{Corpus, Verb, VerbTable},
};

pub struct VerbStore {
    dir: PathBuf,
}

impl VerbStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the cache directory. Already existing is fine; a file in the
    /// way, or any other failure, is not.
    pub fn ensure_dir(&self) -> Result<()> {
        if self.dir.exists() && !self.dir.is_dir() {
            return Err(Error::storage(
                &self.dir,
                io::Error::new(io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
            ));
        }
        match fs::create_dir_all(&self.dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && self.dir.is_dir() => Ok(()),
            Err(e) => Err(Error::storage(&self.dir, e)),
        }
    }

    /// `<dir>/<sanitized infinitive>.json`
    pub fn record_path(&self, infinitive: &str) -> PathBuf {
        self.dir.join(join!(record_stem(infinitive), ".", RECORD_EXT))
    }

    pub fn save(&self, entry: &VerbTable) -> Result<PathBuf> {
        let path = self.record_path(entry.key());
        let text = serde_json::to_string_pretty(entry)
            .map_err(|e| Error::Record { path: path.clone(), source: e })?;
        fs::write(&path, text).map_err(|e| Error::storage(&path, e))?;
        Ok(path)
    }

    /// Everything persisted so far, keyed by infinitive. No directory → empty.
    /// Unreadable directories/files are fatal; a record that does not
    /// deserialize is logged and skipped.
    pub fn load(&self) -> Result<Corpus> {
        let mut out = Corpus::new();
        if !self.dir.is_dir() {
            logd!("Cache: {} missing, nothing to load", self.dir.display());
            return Ok(out);
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| Error::storage(&self.dir, e))?;
        let mut skipped = 0usize;
        for entry in entries {
            let path = entry.map_err(|e| Error::storage(&self.dir, e))?.path();
            if !path.is_file() { continue; }
            if path.extension().and_then(|s| s.to_str()) != Some(RECORD_EXT) { continue; }

            let text = fs::read_to_string(&path).map_err(|e| Error::storage(&path, e))?;
            match serde_json::from_str::<VerbTable>(&text) {
                Ok(vt) => {
                    out.insert(s!(vt.key()), vt);
                }
                Err(e) => {
                    skipped += 1;
                    loge!("Cache: {}", Error::Record { path: path.clone(), source: e });
                }
            }
        }
        logf!("Cache: loaded {} verbs from {} (skipped {})", out.len(), self.dir.display(), skipped);
        Ok(out)
    }

    /// Fetch, parse and persist each verb in order, one at a time.
    ///
    /// Network, not-found and parse failures skip that verb only. Failing to
    /// create the directory or write a record aborts the run; records written
    /// before that stay on disk.
    pub fn populate(
        &self,
        verbs: &[Verb],
        pages: &mut dyn VerbPageSource,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Corpus> {
        self.ensure_dir()?;
        if let Some(p) = progress.as_deref_mut() {
            p.begin(verbs.len());
        }

        let mut out = Corpus::new();
        let result = (|| -> Result<()> {
            for verb in verbs {
                match fetch_and_parse(verb, pages) {
                    Ok(entry) => {
                        let path = self.save(&entry)?;
                        logd!("Cache: saved {} → {}", verb.infinitive, path.display());
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_done(verb);
                        }
                        out.insert(s!(entry.key()), entry);
                    }
                    Err(e) if e.is_per_verb() => {
                        logf!("Cache: skipping {}: {}", verb.infinitive, e);
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_failed(verb, &e);
                        }
                    }
                    Err(e) => return Err(e),
                }
            }
            Ok(())
        })();

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        result?;

        logf!("Cache: populated {} of {} verbs", out.len(), verbs.len());
        Ok(out)
    }

    /// Load what is cached; if nothing is, fetch the verb list and populate.
    /// A failed verb list is fatal: there would be nothing to quiz on.
    pub fn load_or_populate(
        &self,
        list: &mut dyn VerbListSource,
        pages: &mut dyn VerbPageSource,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Corpus> {
        let cached = self.load()?;
        if !cached.is_empty() {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Loaded {} verbs from cache", cached.len()));
            }
            return Ok(cached);
        }
        self.refresh(list, pages, progress)
    }

    /// Re-fetch the whole list, overwriting existing records.
    pub fn refresh(
        &self,
        list: &mut dyn VerbListSource,
        pages: &mut dyn VerbPageSource,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Corpus> {
        if let Some(p) = progress.as_deref_mut() {
            p.log("Downloading the popular verb list…");
        }
        let verbs = list.fetch_popular_verbs()?;
        self.populate(&verbs, pages, progress)
    }
}

/// One verb through the pipeline: fetch → not-found check → rows → table.
pub fn fetch_and_parse(verb: &Verb, pages: &mut dyn VerbPageSource) -> Result<VerbTable> {
    let markup = pages.fetch_verb_page(verb)?;
    let table = conjugation::parse_page(&verb.infinitive, &markup)?;
    Ok(VerbTable { verb: verb.clone(), table })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("conj_quiz_store_{}", name));
        let _ = fs::remove_dir_all(&p);
        p
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = tmp_dir("idem");
        let store = VerbStore::new(&dir);
        store.ensure_dir().unwrap();
        store.ensure_dir().unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn ensure_dir_rejects_a_file() {
        let dir = tmp_dir("file_in_way");
        fs::write(&dir, "x").unwrap();
        let store = VerbStore::new(&dir);
        assert!(matches!(store.ensure_dir(), Err(Error::Storage { .. })));
        let _ = fs::remove_file(&dir);
    }

    #[test]
    fn record_paths_are_derived_from_infinitive() {
        let store = VerbStore::new("/cache");
        assert_eq!(store.record_path("parler"), PathBuf::from("/cache/parler.json"));
        assert_eq!(store.record_path("s'en aller"), PathBuf::from("/cache/s%27en%20aller.json"));
    }

    #[test]
    fn load_of_missing_dir_is_empty() {
        let store = VerbStore::new(tmp_dir("missing"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_records_are_skipped() {
        let dir = tmp_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("broken.json"), "{ not json").unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();
        let store = VerbStore::new(&dir);
        assert!(store.load().unwrap().is_empty());
    }
}
