// src/specs/verb_list.rs
//
// Popular-verb list (TalkinFrench "most common verbs" page, a TablePress
// table). Each data row looks like:
//   <td class="column-1">parler</td><td class="column-2">to speak</td>
// Header cells are <th>, so they never match.
//
// Also reads the plain text form used for offline lists:
//   parler<TAB>to speak

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::verb::Verb;

const FRENCH_CELL: &str = r#"<td class="column-1""#;
const ENGLISH_CELL: &str = r#"<td class="column-2""#;

/// (French, English) pairs in page order. Rows whose second cell is not the
/// English column are skipped.
pub fn parse_listing(doc: &str) -> Vec<Verb> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some((fr_s, fr_e)) = next_tag_block_ci(doc, FRENCH_CELL, "</td>", pos) {
        pos = fr_e;
        let french = strip_tags(inner_after_open_tag(&doc[fr_s..fr_e]));

        // The English cell must be the very next thing after the French one.
        let rest = doc[fr_e..].trim_start();
        let english_next = rest
            .get(..ENGLISH_CELL.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(ENGLISH_CELL));
        if !english_next {
            logd!("Verb list: no English cell after '{}'", french);
            continue;
        }
        let offset = doc.len() - rest.len();
        let Some((en_s, en_e)) = next_tag_block_ci(doc, ENGLISH_CELL, "</td>", offset) else { break };
        pos = en_e;
        let english = strip_tags(inner_after_open_tag(&doc[en_s..en_e]));

        if french.is_empty() { continue; }
        out.push(Verb::new(french, english));
    }
    out
}

/// `infinitive<TAB>gloss` per line; '#' comments and blank lines ignored.
/// A line without a tab is taken as an infinitive with an empty gloss.
pub fn parse_tsv(text: &str) -> Vec<Verb> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| match l.split_once('\t') {
            Some((fr, en)) => Verb::new(fr.trim(), en.trim()),
            None => Verb::new(l, ""),
        })
        .collect()
}

/// Saved HTML page or TSV, decided by content.
pub fn parse_any(text: &str) -> Vec<Verb> {
    if text.contains('<') && text.to_ascii_lowercase().contains("<td") {
        parse_listing(text)
    } else {
        parse_tsv(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<table id="tablepress-12" class="tablepress">
<thead><tr class="row-1"><th class="column-1">French</th><th class="column-2">English</th></tr></thead>
<tbody>
<tr class="row-2"><td class="column-1">être</td><td class="column-2">to be</td></tr>
<tr class="row-3"><td class="column-1">avoir</td><td class="column-2">to have</td></tr>
<tr class="row-4"><td class="column-1">s&#8217;appeler</td>
    <td class="column-2">to be <em>called</em></td></tr>
<tr class="row-5"><td class="column-1">orphan</td><td class="column-3">x</td></tr>
<tr class="row-6"><td class="column-1">faire</td><td class="column-2">to do, to make</td></tr>
</tbody></table>"#;

    #[test]
    fn listing_rows_in_order() {
        let verbs = parse_listing(PAGE);
        let pairs: Vec<(&str, &str)> = verbs.iter()
            .map(|v| (v.infinitive.as_str(), v.gloss.as_str()))
            .collect();
        assert_eq!(pairs, vec![
            ("être", "to be"),
            ("avoir", "to have"),
            ("s\u{2019}appeler", "to be called"),
            ("faire", "to do, to make"),
        ]);
    }

    #[test]
    fn tsv_lines() {
        let text = "# top verbs\nparler\tto speak\n\n  finir \t to finish\nvouloir\n";
        let verbs = parse_tsv(text);
        assert_eq!(verbs, vec![
            Verb::new("parler", "to speak"),
            Verb::new("finir", "to finish"),
            Verb::new("vouloir", ""),
        ]);
    }

    #[test]
    fn any_picks_by_content() {
        assert_eq!(parse_any(PAGE).len(), 4);
        assert_eq!(parse_any("aller\tto go").len(), 1);
    }
}
