// tests/verb_cache.rs
use std::fs;
use std::path::PathBuf;

use conj_quiz::{
    config::options::AppOptions,
    error::{Error, Result},
    fetch::{self, VerbListSource},
    progress::Progress,
    store::VerbStore,
    verb::{Tense, Verb},
};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("conj_quiz_cache_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

fn conj_page(verb: &str) -> String {
    let mut out = String::from("<table class=\"conjtab\">");
    for r in 0..51 {
        out.push_str(&format!("<tr><td>{verb} {r}a</td><td>{verb} {r}b</td></tr>"));
    }
    out.push_str("</table>");
    out
}

/// Stand-in for the conjugation site: a few verbs fail in each per-verb way.
fn fake_site(verb: &Verb) -> Result<String> {
    match verb.infinitive.as_str() {
        "zzz" => Ok(String::from("<p>Verb not found.</p>")),
        "falloir" => Ok(String::from("<table class=\"conjtab\"><tr><td>il faut</td></tr></table>")),
        "offline" => Err(Error::Network(String::from("connection refused"))),
        other => Ok(conj_page(other)),
    }
}

fn verbs() -> Vec<Verb> {
    [
        ("parler", "to speak"),
        ("zzz", "?"),
        ("aller", "to go"),
        ("falloir", "to be necessary"),
        ("offline", "?"),
        ("être", "to be"),
    ]
    .iter()
    .map(|(f, e)| Verb::new(*f, *e))
    .collect()
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<String>,
    failed: Vec<String>,
    finished: usize,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, verb: &Verb) { self.done.push(verb.infinitive.clone()); }
    fn item_failed(&mut self, verb: &Verb, _err: &Error) { self.failed.push(verb.infinitive.clone()); }
    fn finish(&mut self) { self.finished += 1; }
}

struct CountingList {
    verbs: Vec<Verb>,
    calls: usize,
}

impl VerbListSource for CountingList {
    fn fetch_popular_verbs(&mut self) -> Result<Vec<Verb>> {
        self.calls += 1;
        Ok(self.verbs.clone())
    }
}

#[test]
fn populate_skips_failures_and_keeps_the_rest() {
    let store = VerbStore::new(tmp_dir("skip"));
    let mut rec = Recorder::default();
    let corpus = store.populate(&verbs(), &mut fake_site, Some(&mut rec)).unwrap();

    let keys: Vec<&str> = corpus.keys().map(String::as_str).collect();
    assert_eq!(keys, ["aller", "parler", "être"]);
    assert_eq!(rec.total, 6);
    assert_eq!(rec.done, ["parler", "aller", "être"]);
    assert_eq!(rec.failed, ["zzz", "falloir", "offline"]);
    assert_eq!(rec.finished, 1);

    assert!(store.record_path("être").is_file());
    assert!(!store.record_path("zzz").exists());
    assert_eq!(corpus["parler"].table.form(Tense::Present, conj_quiz::verb::Person::FirstSingular), "parler 1a");
}

#[test]
fn populate_twice_gives_the_same_corpus() {
    let store = VerbStore::new(tmp_dir("rerun"));
    let first = store.populate(&verbs(), &mut fake_site, None).unwrap();
    let second = store.populate(&verbs(), &mut fake_site, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn load_returns_what_populate_wrote() {
    let store = VerbStore::new(tmp_dir("load"));
    let written = store.populate(&verbs(), &mut fake_site, None).unwrap();
    let loaded = VerbStore::new(store.dir()).load().unwrap();
    assert_eq!(written, loaded);
    assert_eq!(loaded["aller"].verb.gloss, "to go");
}

#[test]
fn record_is_plain_json() {
    let store = VerbStore::new(tmp_dir("json"));
    store.populate(&[Verb::new("parler", "to speak")], &mut fake_site, None).unwrap();
    let text = fs::read_to_string(store.record_path("parler")).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["infinitive"], "parler");
    assert_eq!(v["tenses"]["passé composé"][0], "parler 15a");
    assert_eq!(v["tenses"].as_object().unwrap().len(), Tense::COUNT);
}

#[test]
fn unwritable_record_aborts_but_keeps_earlier_ones() {
    let dir = tmp_dir("fatal");
    let store = VerbStore::new(&dir);
    store.ensure_dir().unwrap();
    // a directory where aller's record should go
    fs::create_dir_all(store.record_path("aller")).unwrap();

    let mut rec = Recorder::default();
    let err = store.populate(&verbs(), &mut fake_site, Some(&mut rec)).unwrap_err();
    assert!(matches!(err, Error::Storage { .. }));
    assert_eq!(rec.finished, 1);

    assert!(store.record_path("parler").is_file());
    assert!(!store.record_path("être").exists());
    let keys: Vec<String> = store.load().unwrap().into_keys().collect();
    assert_eq!(keys, ["parler"]);
}

#[test]
fn cache_dir_blocked_by_a_file_is_fatal() {
    let dir = tmp_dir("blocked");
    fs::write(&dir, "not a directory").unwrap();
    let store = VerbStore::new(&dir);
    assert!(matches!(store.populate(&verbs(), &mut fake_site, None), Err(Error::Storage { .. })));
    let _ = fs::remove_file(&dir);
}

#[test]
fn load_or_populate_only_downloads_once() {
    let store = VerbStore::new(tmp_dir("once"));
    let mut list = CountingList { verbs: verbs(), calls: 0 };

    let first = store.load_or_populate(&mut list, &mut fake_site, None).unwrap();
    let mut no_site = |_: &Verb| -> Result<String> { panic!("cache should have been used") };
    let second = store.load_or_populate(&mut list, &mut no_site, None).unwrap();

    assert_eq!(list.calls, 1);
    assert_eq!(first, second);
}

#[test]
fn refresh_overwrites_existing_records() {
    let store = VerbStore::new(tmp_dir("refresh"));
    let mut list = CountingList { verbs: vec![Verb::new("parler", "to speak")], calls: 0 };
    store.load_or_populate(&mut list, &mut fake_site, None).unwrap();

    let mut changed = |v: &Verb| -> Result<String> { Ok(conj_page(&format!("{}2", v.infinitive))) };
    let corpus = store.refresh(&mut list, &mut changed, None).unwrap();
    assert_eq!(list.calls, 2);
    assert_eq!(corpus, store.load().unwrap());
    assert_eq!(corpus["parler"].table.forms(Tense::Present)[0], "parler2 1a");
}

#[test]
fn look_alike_infinitives_keep_separate_records() {
    let store = VerbStore::new(tmp_dir("lookalike"));
    let verbs: Vec<Verb> = ["s'asseoir", "s asseoir", "s\u{2019}asseoir", "s_asseoir"]
        .iter()
        .map(|v| Verb::new(*v, "to sit down"))
        .collect();

    let written = store.populate(&verbs, &mut fake_site, None).unwrap();
    assert_eq!(written.len(), verbs.len());
    let loaded = store.load().unwrap();
    assert_eq!(written, loaded);
}

#[test]
fn later_duplicate_in_the_list_wins() {
    let store = VerbStore::new(tmp_dir("duplicate"));
    let verbs = [Verb::new("parler", "a"), Verb::new("parler", "b")];

    let written = store.populate(&verbs, &mut fake_site, None).unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written["parler"].verb.gloss, "b");

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded["parler"].verb.gloss, "b");
}

#[test]
fn first_run_can_use_a_typed_verb_list_file() {
    let root = tmp_dir("typed_list");
    fs::create_dir_all(&root).unwrap();
    let list_path = root.join("verbs.tsv");
    fs::write(&list_path, "parler\tto speak\nfinir\tto finish\n").unwrap();

    let mut opts = AppOptions::with_app_dir(&root);
    opts.source.set_verb_list_text(&format!(" {} ", list_path.display()));
    let store = VerbStore::new(opts.cache_dir());
    let mut list = fetch::list_source(&opts.source);

    let corpus = store.load_or_populate(list.as_mut(), &mut fake_site, None).unwrap();
    assert_eq!(corpus.keys().collect::<Vec<_>>(), ["finir", "parler"]);
    assert_eq!(corpus, store.load().unwrap());
}
