// src/core/sanitize.rs
use unicode_normalization::UnicodeNormalization;

/// Decode the HTML entities the conjugation and listing pages actually use:
/// the XML five, `&nbsp;`, numeric references and the French accented letters.
/// Unknown entities are left as written.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s!(s);
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        // Entities are short; don't scan the whole document for a ';'.
        let semi = tail.char_indices().take(12).find(|&(_, c)| c == ';').map(|(i, _)| i);
        match semi.and_then(|i| decode_one(&tail[1..i]).map(|ch| (i, ch))) {
            Some((i, ch)) => {
                out.push(ch);
                rest = &tail[i + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_one(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "rsquo" => '\u{2019}',
        "agrave" => 'à', "acirc" => 'â', "auml" => 'ä',
        "ccedil" => 'ç',
        "eacute" => 'é', "egrave" => 'è', "ecirc" => 'ê', "euml" => 'ë',
        "icirc" => 'î', "iuml" => 'ï',
        "ocirc" => 'ô', "ouml" => 'ö',
        "ugrave" => 'ù', "ucirc" => 'û', "uuml" => 'ü',
        "oelig" => 'œ', "aelig" => 'æ',
        "Agrave" => 'À', "Eacute" => 'É', "Egrave" => 'È', "Ecirc" => 'Ê', "Ccedil" => 'Ç',
        _ => return None,
    };
    Some(ch)
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Fold to plain ASCII: decompose, then drop everything non-ASCII
/// (the combining accents go with it). "passé composé" → "passe compose".
pub fn strip_accents(s: &str) -> String {
    s.nfkd().filter(char::is_ascii).collect()
}

/// Record file stem for a verb. Letters, digits (accents included) and '-'
/// are kept; every other character is written as %XX per UTF-8 byte, so the
/// stem decodes back to exactly one infinitive.
pub fn record_stem(infinitive: &str) -> String {
    if infinitive.is_empty() {
        return s!("_"); // '_' is always escaped otherwise
    }
    let mut out = String::with_capacity(infinitive.len());
    let mut buf = [0u8; 4];
    for ch in infinitive.chars() {
        if ch.is_alphanumeric() || ch == '-' {
            out.push(ch);
        } else {
            for b in ch.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{b:02X}"));
            }
        }
    }
    out
}
