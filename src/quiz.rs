// src/quiz.rs
//
// Quiz round state machine:
//
//   ChoosingTense  --start_round-->    AwaitingAnswer
//   AwaitingAnswer --answer-->         Scored
//   Scored         --next_question-->  AwaitingAnswer, or RoundComplete after ROUND_LENGTH
//   RoundComplete  --finish_round-->   ChoosingTense
//
// The session never owns verb data; the corpus is lent to the calls that draw
// a question. Front-ends either drive the steps themselves (GUI) or hand a
// `Frontend` to `run` (console).

use std::fmt;

use rand::{rngs::StdRng, seq::IteratorRandom, Rng, SeedableRng};

use crate::{
    config::consts::{QUIT_INPUT, ROUND_LENGTH},
    error::{Error, Result},
    verb::{Corpus, Person, Tense, Verb},
};

/// Blocking I/O boundary for a text-style front-end.
pub trait Frontend {
    /// Show `prompt` and wait for a reply. None means the user closed the
    /// front-end (EOF, window gone).
    fn ask(&mut self, prompt: &str) -> Option<String>;

    fn show(&mut self, message: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    ChoosingTense,
    AwaitingAnswer,
    Scored,
    RoundComplete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub verb: Verb,
    pub person: Person,
    pub tense: Tense,
    pub expected: String,
}

impl Question {
    pub fn prompt(&self) -> String {
        format!(
            "Please conjugate the verb:\n    {} in the {} form for the {} tense\n",
            self.verb.infinitive,
            self.person.label(),
            self.tense.name()
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub correct: bool,
    /// Always the table's form, whatever was typed.
    pub expected: String,
}

impl Outcome {
    pub fn message(&self) -> String {
        if self.correct {
            format!("CORRECT! ({})", self.expected)
        } else {
            format!("Correct answer was {}", self.expected)
        }
    }
}

/// Menu input outside `1..=Tense::COUNT` (or not a number).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidChoice;

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "This is not a valid choice - choose an integer between 1 - {}", Tense::COUNT)
    }
}

impl std::error::Error for InvalidChoice {}

pub struct QuizSession<R = StdRng> {
    rng: R,
    round_length: usize,
    phase: Phase,
    tense: Option<Tense>,
    question: Option<Question>,
    asked: usize,
    correct: usize,
}

impl QuizSession<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for QuizSession<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuizSession<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            round_length: ROUND_LENGTH,
            phase: Phase::ChoosingTense,
            tense: None,
            question: None,
            asked: 0,
            correct: 0,
        }
    }

    #[inline] pub fn phase(&self) -> Phase { self.phase }
    #[inline] pub fn tense(&self) -> Option<Tense> { self.tense }
    #[inline] pub fn question(&self) -> Option<&Question> { self.question.as_ref() }
    #[inline] pub fn asked(&self) -> usize { self.asked }
    #[inline] pub fn correct(&self) -> usize { self.correct }
    #[inline] pub fn round_length(&self) -> usize { self.round_length }

    /// Tenses in menu order (1-based on screen).
    pub fn tense_choices() -> &'static [Tense] {
        &Tense::ALL
    }

    pub fn tense_menu() -> String {
        let mut out = s!("Choose tense to practice:\n");
        for (i, t) in Self::tense_choices().iter().enumerate() {
            out.push_str(&format!("    {}.\t{}\n", i + 1, t.name()));
        }
        out
    }

    /// "1".."5" → tense.
    pub fn parse_choice(input: &str) -> std::result::Result<Tense, InvalidChoice> {
        let n: usize = input.trim().parse().map_err(|_| InvalidChoice)?;
        n.checked_sub(1)
            .and_then(|i| Self::tense_choices().get(i).copied())
            .ok_or(InvalidChoice)
    }

    /// Fix the tense for a fresh round and draw its first question.
    pub fn start_round(&mut self, tense: Tense, corpus: &Corpus) -> Result<&Question> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        self.tense = Some(tense);
        self.asked = 0;
        self.correct = 0;
        self.draw(corpus)
    }

    /// Grade `given` against the pending question. Exact comparison only.
    /// None if no question is waiting for an answer.
    pub fn answer(&mut self, given: &str) -> Option<Outcome> {
        if self.phase != Phase::AwaitingAnswer {
            return None;
        }
        let q = self.question.as_ref()?;
        let correct = given == q.expected;
        if correct {
            self.correct += 1;
        }
        self.asked += 1;
        self.phase = Phase::Scored;
        Some(Outcome { correct, expected: q.expected.clone() })
    }

    /// After scoring: next question, or None once the round is over.
    /// While a question is pending it is returned again.
    pub fn next_question(&mut self, corpus: &Corpus) -> Result<Option<&Question>> {
        match self.phase {
            Phase::AwaitingAnswer => Ok(self.question.as_ref()),
            Phase::Scored if self.asked < self.round_length => self.draw(corpus).map(Some),
            Phase::Scored | Phase::RoundComplete => {
                self.phase = Phase::RoundComplete;
                self.question = None;
                Ok(None)
            }
            Phase::ChoosingTense => Ok(None),
        }
    }

    /// round(100 * correct / round length)
    pub fn score_percent(&self) -> u32 {
        let len = self.round_length.max(1);
        ((100 * self.correct + len / 2) / len) as u32
    }

    /// Report the score and go back to tense selection.
    pub fn finish_round(&mut self) -> u32 {
        let score = self.score_percent();
        self.reset();
        score
    }

    /// Abandon whatever is going on and return to tense selection.
    pub fn reset(&mut self) {
        self.phase = Phase::ChoosingTense;
        self.tense = None;
        self.question = None;
        self.asked = 0;
        self.correct = 0;
    }

    // Uniform over verbs and persons; repeats are allowed within a round.
    fn draw(&mut self, corpus: &Corpus) -> Result<&Question> {
        let tense = self.tense.ok_or_else(|| Error::UnknownTense(s!("(none chosen)")))?;
        let entry = corpus.values().choose(&mut self.rng).ok_or(Error::EmptyCorpus)?;
        let person = Person::ALL[self.rng.gen_range(0..Person::ALL.len())];
        let expected = entry.table.conjugate(tense.name())?[person.index()].clone();

        self.phase = Phase::AwaitingAnswer;
        Ok(&*self.question.insert(Question {
            verb: entry.verb.clone(),
            person,
            tense,
            expected,
        }))
    }
}

/// Console-style loop: menu, ten questions, score, repeat. Returns when the
/// user types `q` at the menu or the front-end closes.
pub fn run<R: Rng>(session: &mut QuizSession<R>, corpus: &Corpus, ui: &mut dyn Frontend) -> Result<()> {
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }
    let menu = QuizSession::<R>::tense_menu();

    loop {
        let tense = loop {
            let Some(input) = ui.ask(&menu) else { return Ok(()) };
            if input.trim() == QUIT_INPUT {
                return Ok(());
            }
            match QuizSession::<R>::parse_choice(&input) {
                Ok(t) => break t,
                Err(e) => ui.show(&e.to_string()),
            }
        };
        logf!("Quiz: round start tense={}", tense);

        let mut prompt = session.start_round(tense, corpus)?.prompt();
        loop {
            let Some(reply) = ui.ask(&prompt) else { return Ok(()) };
            if let Some(outcome) = session.answer(&reply) {
                ui.show(&outcome.message());
            }
            match session.next_question(corpus)? {
                Some(q) => prompt = q.prompt(),
                None => break,
            }
        }

        let correct = session.correct();
        let score = session.finish_round();
        logf!("Quiz: round done tense={} correct={} score={}%", tense, correct, score);
        ui.show(&format!("Your score was {score}%!\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verb::{ConjugationTable, VerbTable};

    fn corpus_of(verbs: &[&str]) -> Corpus {
        verbs.iter()
            .map(|v| {
                let table = ConjugationTable::from_forms(std::array::from_fn(|t| {
                    std::array::from_fn(|p| format!("{v}-{t}-{p}"))
                }));
                (s!(*v), VerbTable { verb: Verb::new(*v, "gloss"), table })
            })
            .collect()
    }

    fn seeded() -> QuizSession<StdRng> {
        QuizSession::with_rng(StdRng::seed_from_u64(7))
    }

    #[test]
    fn menu_choices_are_one_based() {
        type Q = QuizSession<StdRng>;
        assert_eq!(Q::parse_choice("1"), Ok(Tense::Present));
        assert_eq!(Q::parse_choice(" 5\n"), Ok(Tense::ConditionnelPresent));
        assert_eq!(Q::parse_choice("0"), Err(InvalidChoice));
        assert_eq!(Q::parse_choice("6"), Err(InvalidChoice));
        assert_eq!(Q::parse_choice("deux"), Err(InvalidChoice));
        assert!(Q::tense_menu().contains("4.\tpassé composé"));
    }

    #[test]
    fn phases_follow_the_round() {
        let corpus = corpus_of(&["parler", "finir"]);
        let mut s = seeded();
        assert_eq!(s.phase(), Phase::ChoosingTense);
        assert!(s.answer("x").is_none());

        s.start_round(Tense::Imparfait, &corpus).unwrap();
        assert_eq!(s.phase(), Phase::AwaitingAnswer);

        for i in 0..ROUND_LENGTH {
            let expected = s.question().unwrap().expected.clone();
            let out = s.answer(&expected).unwrap();
            assert!(out.correct);
            assert_eq!(s.phase(), Phase::Scored);
            let next = s.next_question(&corpus).unwrap();
            assert_eq!(next.is_some(), i + 1 < ROUND_LENGTH);
        }
        assert_eq!(s.phase(), Phase::RoundComplete);
        assert_eq!(s.asked(), ROUND_LENGTH);
        assert_eq!(s.finish_round(), 100);
        assert_eq!(s.phase(), Phase::ChoosingTense);
    }

    #[test]
    fn expected_form_matches_table_cell() {
        let corpus = corpus_of(&["aller"]);
        let mut s = seeded();
        let q = s.start_round(Tense::FuturSimple, &corpus).unwrap().clone();
        assert_eq!(q.tense, Tense::FuturSimple);
        assert_eq!(q.expected, format!("aller-2-{}", q.person.index()));
        assert!(q.prompt().contains(&format!("aller in the {} form for the futur simple tense", q.person.label())));
    }

    #[test]
    fn next_question_while_waiting_returns_same_question() {
        let corpus = corpus_of(&["a", "b", "c"]);
        let mut s = seeded();
        let first = s.start_round(Tense::Present, &corpus).unwrap().clone();
        assert_eq!(s.next_question(&corpus).unwrap(), Some(&first));
    }

    #[test]
    fn empty_corpus_cannot_start() {
        let mut s = seeded();
        assert!(matches!(s.start_round(Tense::Present, &Corpus::new()), Err(Error::EmptyCorpus)));
    }

    #[test]
    fn score_rounds_half_up() {
        let mut s = seeded();
        s.round_length = 3;
        s.correct = 2;
        assert_eq!(s.score_percent(), 67);
        s.correct = 1;
        assert_eq!(s.score_percent(), 33);
    }
}
