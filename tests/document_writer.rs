use setlist_core::config::PageGeometry;
use setlist_core::report::writer::{CATALOG_ID, OBJECT_COUNT};
use setlist_core::report::{read_xref, DocumentWriter, InspectError};

const EMPTY_DOCUMENT: &str = "%PDF-1.4\n\
1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n\
2 0 obj\n<< /Type /Pages /Count 1 /Kids [3 0 R] >>\nendobj\n\
3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 595 842] /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>\nendobj\n\
4 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n\
5 0 obj\n<< /Length 31 >>\nstream\nBT\n/F1 12 Tf\n50 790 Td\n14 TL\nET\nendstream\nendobj\n\
xref\n0 6\n\
0000000000 65535 f \n\
0000000009 00000 n \n\
0000000058 00000 n \n\
0000000115 00000 n \n\
0000000241 00000 n \n\
0000000311 00000 n \n\
trailer\n<< /Size 6 /Root 1 0 R >>\nstartxref\n392\n%%EOF\n";

fn a4_writer() -> DocumentWriter {
    DocumentWriter::new(PageGeometry::a4())
}

#[test]
fn golden_empty_document_bytes() {
    let doc = a4_writer().write::<&str>(&[]);

    assert_eq!(
        String::from_utf8_lossy(doc.as_bytes()),
        EMPTY_DOCUMENT,
        "empty document drifted from golden bytes"
    );
    assert_eq!(doc.len(), 575);
    assert_eq!(doc.xref_offset(), 392);

    let offsets: Vec<usize> = doc.objects().iter().map(|o| o.offset).collect();
    assert_eq!(offsets, vec![9, 58, 115, 241, 311]);
}

#[test]
fn xref_offsets_land_on_object_headers() {
    let lines = vec![
        "ПРОГРАМА КОНЦЕРТУ".to_string(),
        "==============================".to_string(),
        String::new(),
        "1) Song (with parens) — Band \\ Co (4 хв, голосів: 3)".to_string(),
    ];
    let doc = a4_writer().write(&lines);
    let bytes = doc.as_bytes();

    let table = read_xref(bytes).expect("xref must parse");
    assert_eq!(table.xref_offset, doc.xref_offset());
    assert!(bytes[table.xref_offset..].starts_with(b"xref\n"));
    assert_eq!(table.size, OBJECT_COUNT + 1);
    assert_eq!(table.root, CATALOG_ID);
    assert_eq!(table.live_objects(), OBJECT_COUNT);

    let free = &table.entries[0];
    assert!(!free.in_use);
    assert_eq!(free.generation, 65535);

    for id in 1..=OBJECT_COUNT as u32 {
        let offset = table.offset_of(id).expect("object listed in xref");
        assert_eq!(Some(offset), doc.offset_of(id));
        let header = format!("{id} 0 obj\n");
        assert!(
            bytes[offset..].starts_with(header.as_bytes()),
            "offset for object {id} does not start its header"
        );
    }
}

#[test]
fn objects_are_emitted_in_ascending_id_order() {
    let doc = a4_writer().write(&["a", "b"]);
    let ids: Vec<u32> = doc.objects().iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert!(doc.objects().windows(2).all(|w| w[0].offset < w[1].offset));
    assert!(doc.objects().iter().all(|o| o.offset < doc.xref_offset()));
}

#[test]
fn stream_length_matches_content_bytes() {
    let doc = a4_writer().write(&["Hello (world)", "Зоряний дощ"]);
    let bytes = doc.as_bytes();

    let text = String::from_utf8_lossy(bytes);
    let len_start = text.find("/Length ").unwrap() + "/Length ".len();
    let len_end = len_start + text[len_start..].find(' ').unwrap();
    let declared: usize = text[len_start..len_end].parse().unwrap();

    let stream_start = text.find("stream\n").unwrap() + "stream\n".len();
    let stream_end = text.find("\nendstream").unwrap();
    assert_eq!(stream_end - stream_start, declared);
}

#[test]
fn content_stream_has_one_draw_per_line() {
    let doc = a4_writer().write(&["Zoriany (dosch)", "", "Tanets"]);
    let text = String::from_utf8_lossy(doc.as_bytes()).into_owned();

    assert!(text.contains("BT\n/F1 12 Tf\n50 790 Td\n14 TL\n"));
    assert!(text.contains("(Zoriany \\(dosch\\)) Tj\nT*\n"));
    assert!(text.contains("() Tj\nT*\n"));
    assert!(text.contains("(Tanets) Tj\nT*\nET\nendstream"));
    assert_eq!(text.matches(" Tj\n").count(), 3);
}

#[test]
fn cyrillic_lines_are_transliterated_and_latin1_encoded() {
    let doc = a4_writer().write(&["Танець пінгвіна — Океан Ельзи"]);
    let bytes = doc.as_bytes();
    let text = String::from_utf8_lossy(bytes);

    // Em dash has no Latin-1 form
    assert!(text.contains("(Tanets pinhvina ? Okean Elzy) Tj"));
    assert!(bytes.iter().all(|b| b.is_ascii()));
}

#[test]
fn unpaginated_overflow_still_produces_valid_document() {
    let lines: Vec<String> = (0..200).map(|i| format!("line {i}")).collect();
    let doc = a4_writer().write(&lines);
    let table = read_xref(doc.as_bytes()).unwrap();
    assert_eq!(table.live_objects(), 5);
    assert_eq!(String::from_utf8_lossy(doc.as_bytes()).matches(" Tj\n").count(), 200);
}

#[test]
fn custom_geometry_is_reflected_in_page_and_stream() {
    let geometry = PageGeometry {
        width: 612,
        height: 792,
        base_font: "Courier".into(),
        font_size: 10,
        origin_x: 72,
        origin_y: 720,
        leading: 12,
    };
    let doc = DocumentWriter::new(geometry).write(&["x"]);
    let text = String::from_utf8_lossy(doc.as_bytes());

    assert!(text.contains("/MediaBox [0 0 612 792]"));
    assert!(text.contains("/BaseFont /Courier"));
    assert!(text.contains("BT\n/F1 10 Tf\n72 720 Td\n12 TL\n"));
    read_xref(doc.as_bytes()).unwrap();
}

#[test]
fn writer_output_is_deterministic() {
    let lines = ["1) A — B (4 хв, голосів: 3)", "2) C — D (5 хв, голосів: 1)"];
    let first = a4_writer().write(&lines);
    let second = a4_writer().write(&lines);
    assert_eq!(first.as_bytes(), second.as_bytes());
    assert_eq!(first.digest(), second.digest());
}

#[test]
fn independent_parser_accepts_document() {
    let doc = a4_writer().write(&["Shliakh do mrii", "(escaped) \\ text"]);
    let parsed = lopdf::Document::load_mem(doc.as_bytes()).expect("lopdf must load the document");

    assert_eq!(parsed.version, "1.4");
    assert_eq!(parsed.get_pages().len(), 1);
    assert_eq!(parsed.objects.len(), 5);
}

#[test]
fn independent_parser_accepts_empty_document() {
    let doc = a4_writer().write::<String>(&[]);
    let parsed = lopdf::Document::load_mem(doc.as_bytes()).unwrap();
    assert_eq!(parsed.get_pages().len(), 1);
    assert_eq!(parsed.objects.len(), 5);
}

#[test]
fn inspector_rejects_shifted_offsets() {
    let doc = a4_writer().write(&["x"]);
    let mut bytes = doc.into_bytes();
    // One extra byte after the header moves every object
    bytes.insert(9, b'\n');

    match read_xref(&bytes) {
        Err(InspectError::MalformedXref(_)) | Err(InspectError::OffsetMismatch { .. }) => {}
        other => panic!("expected an offset error, got {other:?}"),
    }
}

#[test]
fn inspector_rejects_missing_footer() {
    let doc = a4_writer().write(&["x"]);
    let bytes = doc.as_bytes();
    let cut = String::from_utf8_lossy(bytes).rfind("startxref").unwrap();

    assert_eq!(read_xref(&bytes[..cut]), Err(InspectError::MissingStartXref));
    assert_eq!(read_xref(b"not a pdf"), Err(InspectError::MissingHeader));
}

#[test]
fn inspector_rejects_oversized_entry_count() {
    for count in ["18446744073709551615", "7", "1000000"] {
        let forged = EMPTY_DOCUMENT.replace("xref\n0 6\n", &format!("xref\n0 {count}\n"));

        match read_xref(forged.as_bytes()) {
            Err(InspectError::MalformedXref(_)) => {}
            other => panic!("count {count}: expected MalformedXref, got {other:?}"),
        }
    }
}
