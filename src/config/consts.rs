// src/config/consts.rs

// Verb list (CNRS top verbs, via TalkinFrench)
pub const VERB_LIST_URL: &str = "http://www.talkinfrench.com/most-common-verbs-in-french/";

// Conjugation pages
pub const VERB_PAGES_URL: &str = "http://conjf.cactus2000.de/showverb.en.php?verb=";
pub const CONJ_TABLE_CLASS: &str = "conjtab";
pub const NOT_FOUND_MARKER: &str = "Verb not found.";

// Net
pub const USER_AGENT: &str = "conj_quiz/0.3";
pub const SOCKET_TIMEOUT_SECS: u64 = 15;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// Local cache
pub const APP_DIR: &str = ".conj_quiz";
pub const VERBS_SUBDIR: &str = "verbs";
pub const RECORD_EXT: &str = "json";
pub const LOG_FILE: &str = "debug.log";

// Quiz
pub const ROUND_LENGTH: usize = 10;
pub const QUIT_INPUT: &str = "q";
