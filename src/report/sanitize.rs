//! Text preparation for PDF string literals.
//!
//! Lines go through two steps, always in this order:
//! 1. [`transliterate`]: Ukrainian Cyrillic to ASCII, one lookup per source
//!    character, so replacement output is never matched again.
//! 2. [`escape_literal`]: backslash-escape `\`, `(` and `)`.

/// Source character and its ASCII replacement. An empty replacement drops
/// the character.
pub const TRANSLITERATION: &[(char, &str)] = &[
    ('А', "A"), ('а', "a"),
    ('Б', "B"), ('б', "b"),
    ('В', "V"), ('в', "v"),
    ('Г', "H"), ('г', "h"),
    ('Ґ', "G"), ('ґ', "g"),
    ('Д', "D"), ('д', "d"),
    ('Е', "E"), ('е', "e"),
    ('Є', "Ye"), ('є', "ie"),
    ('Ж', "Zh"), ('ж', "zh"),
    ('З', "Z"), ('з', "z"),
    ('И', "Y"), ('и', "y"),
    ('І', "I"), ('і', "i"),
    ('Ї', "Yi"), ('ї', "i"),
    ('Й', "Y"), ('й', "i"),
    ('К', "K"), ('к', "k"),
    ('Л', "L"), ('л', "l"),
    ('М', "M"), ('м', "m"),
    ('Н', "N"), ('н', "n"),
    ('О', "O"), ('о', "o"),
    ('П', "P"), ('п', "p"),
    ('Р', "R"), ('р', "r"),
    ('С', "S"), ('с', "s"),
    ('Т', "T"), ('т', "t"),
    ('У', "U"), ('у', "u"),
    ('Ф', "F"), ('ф', "f"),
    ('Х', "Kh"), ('х', "kh"),
    ('Ц', "Ts"), ('ц', "ts"),
    ('Ч', "Ch"), ('ч', "ch"),
    ('Ш', "Sh"), ('ш', "sh"),
    ('Щ', "Shch"), ('щ', "shch"),
    ('Ю', "Yu"), ('ю', "iu"),
    ('Я', "Ya"), ('я', "ia"),
    ('Ь', ""), ('ь', ""),
    ('\'', ""),
];

fn replacement(ch: char) -> Option<&'static str> {
    TRANSLITERATION
        .iter()
        .find(|(source, _)| *source == ch)
        .map(|(_, ascii)| *ascii)
}

/// Characters without a table entry are kept as they are.
pub fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match replacement(ch) {
            Some(ascii) => out.push_str(ascii),
            None => out.push(ch),
        }
    }
    out
}

pub fn escape_literal(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn sanitize_line(line: &str) -> String {
    escape_literal(&transliterate(line))
}

/// True when every `\`, `(` and `)` in `literal` is escaped.
pub fn is_escaped(literal: &str) -> bool {
    let mut chars = literal.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some('\\' | '(' | ')') => {}
                _ => return false,
            },
            '(' | ')' => return false,
            _ => {}
        }
    }
    true
}
