// src/verb.rs
//
// Verb, person and tense vocabulary plus the per-verb conjugation table.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::sanitize::strip_accents;
use crate::error::{Error, Result};

/// A French infinitive and its English gloss. The infinitive is the cache key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Verb {
    pub infinitive: String,
    pub gloss: String,
}

impl Verb {
    pub fn new(infinitive: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self { infinitive: infinitive.into(), gloss: gloss.into() }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.infinitive
    }
}

/// Grammatical person, in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Person {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Subject pronoun shown in questions.
    pub fn label(self) -> &'static str {
        match self {
            Person::FirstSingular => "je",
            Person::SecondSingular => "tu",
            Person::ThirdSingular => "il/elle",
            Person::FirstPlural => "nous",
            Person::SecondPlural => "vous",
            Person::ThirdPlural => "ils/elles",
        }
    }
}

/// The tenses we read off a conjugation page. `ALL` is the menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tense {
    Present,
    Imparfait,
    FuturSimple,
    PasseCompose,
    ConditionnelPresent,
}

impl Tense {
    pub const COUNT: usize = 5;

    pub const ALL: [Tense; Tense::COUNT] = [
        Tense::Present,
        Tense::Imparfait,
        Tense::FuturSimple,
        Tense::PasseCompose,
        Tense::ConditionnelPresent,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical (accented) name.
    pub fn name(self) -> &'static str {
        match self {
            Tense::Present => "présent",
            Tense::Imparfait => "imparfait",
            Tense::FuturSimple => "futur simple",
            Tense::PasseCompose => "passé composé",
            Tense::ConditionnelPresent => "conditionnel présent",
        }
    }

    /// (row, column) of the first person's form in the `conjtab` rows.
    /// The other five persons follow in the next five rows, same column.
    pub fn offset(self) -> (usize, usize) {
        match self {
            Tense::Present => (1, 0),
            Tense::Imparfait => (1, 1),
            Tense::FuturSimple => (8, 1),
            Tense::PasseCompose => (15, 0),
            Tense::ConditionnelPresent => (45, 0),
        }
    }

    /// Accepts the accented name or its plain-ASCII spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == name || strip_accents(t.name()) == name)
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Six forms, indexed by `Person::index`.
pub type PersonForms = [String; 6];

/// Tense → forms for one verb. Always complete: every tense, six forms each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConjugationTable {
    forms: [PersonForms; Tense::COUNT],
}

impl ConjugationTable {
    /// Forms indexed by `Tense::index`.
    pub fn from_forms(forms: [PersonForms; Tense::COUNT]) -> Self {
        Self { forms }
    }

    #[inline]
    pub fn forms(&self, tense: Tense) -> &PersonForms {
        &self.forms[tense.index()]
    }

    #[inline]
    pub fn form(&self, tense: Tense, person: Person) -> &str {
        &self.forms[tense.index()][person.index()]
    }

    /// Lookup by tense name, accented or not.
    pub fn conjugate(&self, tense: &str) -> Result<&PersonForms> {
        Tense::from_name(tense)
            .map(|t| self.forms(t))
            .ok_or_else(|| Error::UnknownTense(s!(tense)))
    }

    /// Console rendering of one tense: singular forms left, plural right.
    pub fn render(&self, verb: &Verb, tense: Tense) -> String {
        let f = self.forms(tense);
        let title = format!("{} --------------- {}", verb.infinitive, verb.gloss);
        let mut out = String::new();
        out.push_str(&rule!('='));
        out.push('\n');
        out.push_str(&format!("{title:^80}\n"));
        out.push_str(&rule!('='));
        out.push('\n');
        out.push_str(&format!("{:^80}\n", tense.name()));
        out.push_str(&rule!('-'));
        out.push('\n');
        for i in 0..3 {
            out.push_str(&format!("{:16}{:<28} {}\n", "", f[i], f[i + 3]));
        }
        out
    }
}

/// One cache entry: the verb and its table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VerbRecord", into = "VerbRecord")]
pub struct VerbTable {
    pub verb: Verb,
    pub table: ConjugationTable,
}

impl VerbTable {
    #[inline]
    pub fn key(&self) -> &str {
        self.verb.key()
    }
}

/// Keyed snapshot of everything cached, owned by whoever asked for it.
pub type Corpus = BTreeMap<String, VerbTable>;

/// On-disk shape of a `VerbTable`.
#[derive(Serialize, Deserialize)]
struct VerbRecord {
    infinitive: String,
    gloss: String,
    tenses: BTreeMap<String, PersonForms>,
}

impl From<VerbTable> for VerbRecord {
    fn from(vt: VerbTable) -> Self {
        let VerbTable { verb, table } = vt;
        let tenses = Tense::ALL
            .iter()
            .zip(table.forms)
            .map(|(t, forms)| (s!(t.name()), forms))
            .collect();
        Self { infinitive: verb.infinitive, gloss: verb.gloss, tenses }
    }
}

impl TryFrom<VerbRecord> for VerbTable {
    type Error = String;

    fn try_from(mut rec: VerbRecord) -> std::result::Result<Self, Self::Error> {
        let mut forms = Vec::with_capacity(Tense::COUNT);
        for t in Tense::ALL {
            let f = rec.tenses.remove(t.name())
                .ok_or_else(|| format!("missing tense '{}'", t.name()))?;
            forms.push(f);
        }
        if let Some(extra) = rec.tenses.keys().next() {
            return Err(format!("unexpected tense '{extra}'"));
        }
        let forms: [PersonForms; Tense::COUNT] = forms
            .try_into()
            .map_err(|_| s!("tense count mismatch"))?;
        Ok(VerbTable {
            verb: Verb::new(rec.infinitive, rec.gloss),
            table: ConjugationTable::from_forms(forms),
        })
    }
}
