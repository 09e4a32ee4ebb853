// src/core/html.rs
//
// Case-insensitive scanning helpers plus the table row extractor.
// No DOM: we walk tags in document order and keep a small stack of open
// table/row/cell frames, which is enough for the nested tables on the
// conjugation site.

use super::sanitize::{decode_entities, normalize_ws};

/// ASCII-only lowercase. Byte offsets line up with the input.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Visible text of a fragment: tags dropped, entities decoded, whitespace collapsed.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&decode_entities(&out))
}

/* ---------- tags ---------- */

/// One parsed tag: `<name ...>` or `</name>`; `end` is the byte after '>'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    pub name: String,
    pub closing: bool,
    pub raw: &'a str,
    pub end: usize,
}

impl<'a> Tag<'a> {
    /// Parse the tag starting at `lt` (which must index a '<').
    /// Returns None when the '<' does not open a tag (e.g. "a < b").
    pub fn parse(doc: &'a str, lt: usize) -> Option<Tag<'a>> {
        let b = doc.as_bytes();
        let mut i = lt + 1;
        let closing = b.get(i) == Some(&b'/');
        if closing { i += 1; }

        let name_start = i;
        while i < b.len() && b[i].is_ascii_alphanumeric() { i += 1; }
        if i == name_start || !b[name_start].is_ascii_alphabetic() {
            return None;
        }
        let name = doc[name_start..i].to_ascii_lowercase();

        // Find the closing '>' outside of quoted attribute values.
        let mut in_s = false;
        let mut in_d = false;
        while i < b.len() {
            match b[i] {
                b'\'' if !in_d => in_s = !in_s,
                b'"' if !in_s => in_d = !in_d,
                b'>' if !in_s && !in_d => {
                    return Some(Tag { name, closing, raw: &doc[lt..=i], end: i + 1 });
                }
                _ => {}
            }
            i += 1;
        }
        None
    }

    /// Whitespace-separated tokens of the `class` attribute.
    pub fn classes(&self) -> Vec<String> {
        let lc = to_lower(self.raw);
        let Some(at) = find_attr(&lc, "class") else { return Vec::new() };
        let rest = &self.raw[at..];
        let value = match rest.as_bytes().first() {
            Some(q @ (b'"' | b'\'')) => {
                let q = *q as char;
                rest[1..].split(q).next().unwrap_or("")
            }
            _ => rest
                .split(|c: char| c.is_whitespace() || c == '>' || c == '/')
                .next()
                .unwrap_or(""),
        };
        value.split_whitespace().map(|s| s!(s)).collect()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c.eq_ignore_ascii_case(class))
    }
}

/// Byte offset of the value of `name=` inside a lowercased tag.
fn find_attr(lc_tag: &str, name: &str) -> Option<usize> {
    let b = lc_tag.as_bytes();
    let mut from = 0;
    while let Some(rel) = lc_tag[from..].find(name) {
        let at = from + rel;
        from = at + name.len();
        let boundary = at > 0 && (b[at - 1].is_ascii_whitespace());
        if !boundary { continue; }
        let mut i = at + name.len();
        while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }
        if b.get(i) != Some(&b'=') { continue; }
        i += 1;
        while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }
        return Some(i);
    }
    None
}

/// Offset of the first `<table>` whose class list contains `class`.
pub fn find_table_with_class(doc: &str, class: &str) -> Option<usize> {
    let lc = to_lower(doc);
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find("<table") {
        let start = pos + rel;
        match Tag::parse(doc, start) {
            Some(tag) if tag.name == "table" => {
                if tag.has_class(class) {
                    return Some(start);
                }
                pos = tag.end;
            }
            _ => pos = start + 1,
        }
    }
    None
}

/* ---------- row extraction ---------- */

enum Frame {
    Table,
    Row(usize),
    // Every open row gets a slot for a <td>, nested rows included.
    Cell(Vec<(usize, usize)>),
    Header,
}

/// Rows of the first table carrying `class`, in document order.
///
/// Every `<tr>` inside the table is a row (nested tables too), and a row's
/// cells are all `<td>` elements below it, each holding its full visible
/// text. `<th>` cells are not collected. Omitted `</td>`/`</tr>` are closed
/// implicitly. Returns None if no such table exists.
pub fn table_rows(doc: &str, class: &str) -> Option<Vec<Vec<String>>> {
    let start = find_table_with_class(doc, class)?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut pos = start;

    while pos < doc.len() {
        let Some(lt) = doc[pos..].find('<').map(|i| i + pos) else {
            push_text(&mut rows, &stack, &doc[pos..]);
            break;
        };
        if lt > pos {
            push_text(&mut rows, &stack, &doc[pos..lt]);
        }

        if doc[lt..].starts_with("<!--") {
            pos = doc[lt + 4..].find("-->").map_or(doc.len(), |i| lt + 4 + i + 3);
            continue;
        }

        let Some(tag) = Tag::parse(doc, lt) else {
            push_text(&mut rows, &stack, "<");
            pos = lt + 1;
            continue;
        };
        pos = tag.end;

        match (tag.closing, tag.name.as_str()) {
            (false, "table") => stack.push(Frame::Table),
            (true, "table") => {
                if let Some(i) = stack.iter().rposition(|f| matches!(f, Frame::Table)) {
                    stack.truncate(i);
                }
                if stack.is_empty() { break; }
            }
            (false, "tr") => {
                close_in_table(&mut stack, |f| matches!(f, Frame::Row(_)));
                rows.push(Vec::new());
                stack.push(Frame::Row(rows.len() - 1));
            }
            (true, "tr") => close_in_table(&mut stack, |f| matches!(f, Frame::Row(_))),
            (false, "td") => {
                close_in_table(&mut stack, |f| matches!(f, Frame::Cell(_) | Frame::Header));
                let mut slots = Vec::new();
                for f in &stack {
                    if let Frame::Row(r) = f {
                        rows[*r].push(s!());
                        slots.push((*r, rows[*r].len() - 1));
                    }
                }
                stack.push(Frame::Cell(slots));
            }
            (false, "th") => {
                close_in_table(&mut stack, |f| matches!(f, Frame::Cell(_) | Frame::Header));
                stack.push(Frame::Header);
            }
            (true, "td") => close_in_table(&mut stack, |f| matches!(f, Frame::Cell(_))),
            (true, "th") => close_in_table(&mut stack, |f| matches!(f, Frame::Header)),
            (false, "script") | (false, "style") => {
                let close = format!("</{}", tag.name);
                pos = to_lower(&doc[pos..]).find(&close).map_or(doc.len(), |i| pos + i);
            }
            _ => {}
        }
    }

    Some(
        rows.into_iter()
            .map(|r| r.iter().map(|c| normalize_ws(&decode_entities(c))).collect())
            .collect(),
    )
}

fn close_in_table(stack: &mut Vec<Frame>, pred: impl Fn(&Frame) -> bool) {
    let floor = stack
        .iter()
        .rposition(|f| matches!(f, Frame::Table))
        .map_or(0, |t| t + 1);
    if let Some(i) = stack[floor..].iter().rposition(|f| pred(f)) {
        stack.truncate(floor + i);
    }
}

fn push_text(rows: &mut [Vec<String>], stack: &[Frame], text: &str) {
    for f in stack {
        if let Frame::Cell(slots) = f {
            for &(r, c) in slots {
                rows[r][c].push_str(text);
            }
        }
    }
}
