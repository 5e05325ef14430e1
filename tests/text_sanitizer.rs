use setlist_core::report::sanitize::TRANSLITERATION;
use setlist_core::report::{escape_literal, is_escaped, sanitize_line, transliterate};

#[test]
fn transliterates_ukrainian_alphabet() {
    assert_eq!(transliterate("Ніч яка місячна"), "Nich iaka misiachna");
    assert_eq!(transliterate("Скрябін"), "Skriabin");
    assert_eq!(transliterate("Щука"), "Shchuka");
    assert_eq!(transliterate("Їжак Єва Ґанок"), "Yizhak Yeva Ganok");
}

#[test]
fn soft_sign_and_apostrophe_are_dropped() {
    assert_eq!(transliterate("сіль"), "sil");
    assert_eq!(transliterate("м'ята"), "miata");
}

#[test]
fn unmapped_characters_pass_through() {
    assert_eq!(transliterate("Pianoбой — 2024!"), "Pianoboi — 2024!");
    assert_eq!(transliterate("Ёлка"), "Ёlka");
    assert_eq!(transliterate(""), "");
}

#[test]
fn single_pass_never_rematches_output() {
    // Every replacement is decided from the original character only
    for (source, ascii) in TRANSLITERATION {
        assert_eq!(transliterate(&source.to_string()), *ascii);
    }
    assert_eq!(transliterate("ЩщЩ"), "ShchshchShch");
}

#[test]
fn escapes_delimiters_and_backslash() {
    assert_eq!(escape_literal(r"a(b)c\d"), r"a\(b\)c\\d");
    assert_eq!(escape_literal("plain"), "plain");
    assert_eq!(escape_literal(r"\("), r"\\\(");
}

#[test]
fn transliteration_followed_by_parenthesis() {
    assert_eq!(sanitize_line("Я("), r"Ya\(");
    assert_eq!(sanitize_line("щ)"), r"shch\)");
}

#[test]
fn report_line_is_sanitized_end_to_end() {
    let line = "1) Танець пінгвіна — Океан Ельзи (4 хв, голосів: 3)";
    assert_eq!(
        sanitize_line(line),
        r"1\) Tanets pinhvina — Okean Elzy \(4 khv, holosiv: 3\)"
    );
}

#[test]
fn sanitized_output_has_no_bare_delimiters() {
    let samples = [
        "",
        "(",
        ")",
        "\\",
        "\\\\(()",
        "Ще (не) вмерла \\ України",
        "((((",
        "a\\)b",
        "ґ(ї)є\\",
    ];
    for sample in samples {
        let out = sanitize_line(sample);
        assert!(is_escaped(&out), "unescaped delimiter in {out:?} (from {sample:?})");
    }
}
