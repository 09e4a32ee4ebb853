// tests/conjugation_page.rs
use conj_quiz::{
    error::Error,
    specs::conjugation::{parse_page, rows_required},
    verb::{Person, Tense},
};

/// A conjugation page: site chrome in its own layout table, then the
/// `conjtab` table with one two-cell row per line.
fn page(rows: usize, cell: impl Fn(usize, usize) -> String) -> String {
    let mut out = String::from(
        "<html><head><style>td { color: red }</style></head><body>\n\
         <table class=\"layout\"><tr><td>menu</td><td>search</td></tr></table>\n\
         <table class=\"conjtab\" cellpadding=\"2\">\n",
    );
    for r in 0..rows {
        out.push_str(&format!("<tr><td>{}</td><td>{}</td></tr>\n", cell(r, 0), cell(r, 1)));
    }
    out.push_str("</table>\n<p>footer</p></body></html>");
    out
}

#[test]
fn every_tense_reads_its_block() {
    let html = page(rows_required(), |r, c| format!("r{r}c{c}"));
    let table = parse_page("parler", &html).unwrap();

    for tense in Tense::ALL {
        let (down, right) = tense.offset();
        for p in Person::ALL {
            assert_eq!(
                table.form(tense, p),
                format!("r{}c{}", down + p.index(), right),
                "{tense} / {}",
                p.label()
            );
        }
    }
}

#[test]
fn cell_text_is_decoded_and_flattened() {
    let html = page(rows_required(), |r, c| match (r, c) {
        (1, 0) => String::from("je <b>parle</b>"),
        (15, 0) => String::from("j&#39;ai\n   parl&eacute;"),
        _ => format!("r{r}c{c}"),
    });
    let table = parse_page("parler", &html).unwrap();
    assert_eq!(table.form(Tense::Present, Person::FirstSingular), "je parle");
    assert_eq!(table.form(Tense::PasseCompose, Person::FirstSingular), "j'ai parlé");
}

#[test]
fn one_row_short_rejects_the_verb() {
    let html = page(rows_required() - 1, |r, c| format!("r{r}c{c}"));
    match parse_page("falloir", &html) {
        Err(Error::VerbNotParsable { verb, .. }) => assert_eq!(verb, "falloir"),
        other => panic!("expected VerbNotParsable, got {other:?}"),
    }
}

#[test]
fn not_found_page_is_reported_as_such() {
    let mut html = page(rows_required(), |r, c| format!("r{r}c{c}"));
    html.insert_str(0, "<p class=\"err\">Verb not found.</p>");
    assert!(matches!(parse_page("zzz", &html), Err(Error::VerbNotFound(v)) if v == "zzz"));
}
