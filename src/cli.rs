// src/cli.rs
use std::{
    env,
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use crate::{
    config::options::AppOptions,
    error::Error as QuizError,
    fetch::{self, HttpVerbPages},
    progress::Progress,
    quiz::{self, Frontend, QuizSession},
    store::VerbStore,
    verb::{Corpus, Tense, Verb},
};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub cache_dir: Option<PathBuf>,
    pub verb_list: Option<PathBuf>,
    pub refresh: bool,
    pub list: bool,
    pub show: Option<String>,
    pub tense: Option<String>,
    pub help: bool,
}

impl CliArgs {
    pub fn options(&self) -> AppOptions {
        let mut opts = match &self.cache_dir {
            Some(dir) => AppOptions::with_app_dir(dir),
            None => AppOptions::default(),
        };
        if let Some(path) = &self.verb_list {
            opts.source.set_verb_list_file(path);
        }
        opts
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    let opts = args.options();
    crate::log::init(&opts.log_path());
    logf!("CLI: start cache={} list={:?}", opts.cache_dir().display(), opts.source.verb_list);

    let store = VerbStore::new(opts.cache_dir());
    let mut list = fetch::list_source(&opts.source);
    let mut pages = HttpVerbPages::from_options(&opts.source);
    let mut prog = CliProgress::default();

    let corpus = if args.refresh {
        store.refresh(list.as_mut(), &mut pages, Some(&mut prog))?
    } else if args.list || args.show.is_some() {
        store.load()?
    } else {
        store.load_or_populate(list.as_mut(), &mut pages, Some(&mut prog))?
    };

    if args.list {
        for vt in corpus.values() {
            println!("{},{}", vt.verb.infinitive, vt.verb.gloss);
        }
        return Ok(());
    }
    if let Some(verb) = &args.show {
        print!("{}", show(&corpus, verb, args.tense.as_deref())?);
        return Ok(());
    }

    if corpus.is_empty() {
        return Err("No verbs could be downloaded; nothing to quiz on".into());
    }
    println!("{} verbs ready.\n", corpus.len());

    let mut session = QuizSession::new();
    let stdin = io::stdin();
    let mut ui = StdinFrontend::new(stdin.lock(), io::stdout());
    quiz::run(&mut session, &corpus, &mut ui)?;
    logf!("CLI: bye");
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<CliArgs, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--cache-dir" => out.cache_dir = Some(PathBuf::from(args.next().ok_or("Missing value for --cache-dir")?)),
            "--verb-list" => out.verb_list = Some(PathBuf::from(args.next().ok_or("Missing value for --verb-list")?)),
            "--refresh" => out.refresh = true,
            "--list" => out.list = true,
            "--show" => out.show = Some(args.next().ok_or("Missing verb for --show")?),
            "--tense" => {
                let v = args.next().ok_or("Missing value for --tense")?;
                if Tense::from_name(&v).is_none() {
                    return Err(QuizError::UnknownTense(v).into());
                }
                out.tense = Some(v);
            }
            "-h" | "--help" => out.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    if out.tense.is_some() && out.show.is_none() {
        return Err("--tense only makes sense with --show".into());
    }
    Ok(out)
}

/// Rendered table(s) for one cached verb.
pub fn show(corpus: &Corpus, verb: &str, tense: Option<&str>) -> Result<String, Box<dyn Error>> {
    let vt = corpus.get(verb).ok_or_else(|| format!("'{verb}' is not in the cache (try --list)"))?;
    let tenses: Vec<Tense> = match tense {
        Some(name) => vec![Tense::from_name(name).ok_or_else(|| QuizError::UnknownTense(s!(name)))?],
        None => Tense::ALL.to_vec(),
    };
    Ok(tenses.into_iter().map(|t| vt.table.render(&vt.verb, t)).collect::<Vec<_>>().join("\n"))
}

/* ---------- stdin/stdout front-end ---------- */

pub struct StdinFrontend<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdinFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Frontend for StdinFrontend<R, W> {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.output, "{prompt}> ");
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(s!(line.trim())),
        }
    }

    fn show(&mut self, message: &str) {
        let _ = writeln!(self.output, "{message}");
    }
}

/* ---------- progress on stderr ---------- */

#[derive(Default)]
struct CliProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Downloading {} verbs (this happens once)…", total);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, verb: &Verb) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done + self.failed, self.total, verb.infinitive);
    }
    fn item_failed(&mut self, verb: &Verb, err: &QuizError) {
        self.failed += 1;
        eprintln!("[{}/{}] {} skipped: {}", self.done + self.failed, self.total, verb.infinitive, err);
    }
    fn finish(&mut self) {
        if self.total > 0 {
            eprintln!("Saved {} verbs, skipped {}", self.done, self.failed);
        }
    }
}
