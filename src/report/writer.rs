//! Minimal single-page PDF 1.4 writer.
//!
//! The object graph is fixed: catalog, page tree, one page, one Type1 font
//! and one content stream, numbered 1..=5 in that order. Objects are emitted
//! in a single pass over a byte sink; each object's offset is taken from the
//! sink length right before its first byte is appended, so the xref table
//! can never drift from the actual layout.

use crate::config::PageGeometry;
use crate::report::sanitize::sanitize_line;
use crate::types::identifiers::DocumentDigest;

pub const HEADER: &[u8] = b"%PDF-1.4\n";

pub const CATALOG_ID: u32 = 1;
pub const PAGES_ID: u32 = 2;
pub const PAGE_ID: u32 = 3;
pub const FONT_ID: u32 = 4;
pub const CONTENT_ID: u32 = 5;
pub const OBJECT_COUNT: usize = 5;

const FREE_ENTRY: &[u8] = b"0000000000 65535 f \n";

/// Where an object's definition starts in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentObject {
    pub id: u32,
    pub offset: usize,
}

/// A finished document. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    bytes: Vec<u8>,
    objects: Vec<DocumentObject>,
    xref_offset: usize,
}

impl Document {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Objects in emission order (ascending id).
    pub fn objects(&self) -> &[DocumentObject] {
        &self.objects
    }

    pub fn offset_of(&self, id: u32) -> Option<usize> {
        self.objects.iter().find(|o| o.id == id).map(|o| o.offset)
    }

    pub fn xref_offset(&self) -> usize {
        self.xref_offset
    }

    pub fn digest(&self) -> DocumentDigest {
        DocumentDigest::from_bytes(&self.bytes)
    }
}

/// Append-only output buffer; its length is the next write position.
struct ByteSink {
    buf: Vec<u8>,
}

impl ByteSink {
    fn new() -> Self {
        Self { buf: Vec::new() }
    }

    fn position(&self) -> usize {
        self.buf.len()
    }

    fn append(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    fn append_str(&mut self, data: &str) {
        self.append(data.as_bytes())
    }
}

/// An object waiting to be emitted: everything between `N 0 obj\n` and `endobj\n`.
struct ObjectRecord {
    id: u32,
    body: Vec<u8>,
}

impl ObjectRecord {
    fn dict(id: u32, dict: String) -> Self {
        let mut body = dict.into_bytes();
        body.push(b'\n');
        Self { id, body }
    }

    fn stream(id: u32, content: &[u8]) -> Self {
        let mut body = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(b"\nendstream\n");
        Self { id, body }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentWriter {
    geometry: PageGeometry,
}

impl DocumentWriter {
    pub fn new(geometry: PageGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Sanitize each line, then write the document.
    pub fn write<S: AsRef<str>>(&self, lines: &[S]) -> Document {
        let sanitized: Vec<String> = lines.iter().map(|l| sanitize_line(l.as_ref())).collect();
        self.write_sanitized(&sanitized)
    }

    /// Write lines that are already valid string-literal bodies.
    pub fn write_sanitized<S: AsRef<str>>(&self, lines: &[S]) -> Document {
        if lines.len() > self.geometry.visible_lines() {
            log::debug!(
                "writer: {} lines exceed the {} visible on one page; overflow is not paginated",
                lines.len(),
                self.geometry.visible_lines()
            );
        }

        let content = self.content_stream(lines);
        let records = self.object_records(&content);

        let mut sink = ByteSink::new();
        sink.append(HEADER);

        let mut objects = Vec::with_capacity(records.len());
        for record in records {
            // Record, then append. Nothing is written between these two steps.
            let offset = sink.position();
            sink.append_str(&format!("{} 0 obj\n", record.id));
            sink.append(&record.body);
            sink.append(b"endobj\n");
            objects.push(DocumentObject {
                id: record.id,
                offset,
            });
        }

        let xref_offset = sink.position();
        sink.append(&xref_section(&objects));
        sink.append_str(&format!(
            "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            CATALOG_ID,
            xref_offset
        ));

        log::debug!(
            "writer: {} objects, {} content bytes, {} total bytes",
            objects.len(),
            content.len(),
            sink.position()
        );

        Document {
            bytes: sink.buf,
            objects,
            xref_offset,
        }
    }

    fn object_records(&self, content: &[u8]) -> Vec<ObjectRecord> {
        let g = &self.geometry;
        vec![
            ObjectRecord::dict(
                CATALOG_ID,
                format!("<< /Type /Catalog /Pages {PAGES_ID} 0 R >>"),
            ),
            ObjectRecord::dict(
                PAGES_ID,
                format!("<< /Type /Pages /Count 1 /Kids [{PAGE_ID} 0 R] >>"),
            ),
            ObjectRecord::dict(
                PAGE_ID,
                format!(
                    "<< /Type /Page /Parent {PAGES_ID} 0 R /MediaBox [0 0 {} {}] \
                     /Resources << /Font << /F1 {FONT_ID} 0 R >> >> /Contents {CONTENT_ID} 0 R >>",
                    g.width, g.height
                ),
            ),
            ObjectRecord::dict(
                FONT_ID,
                format!("<< /Type /Font /Subtype /Type1 /BaseFont /{} >>", g.base_font),
            ),
            ObjectRecord::stream(CONTENT_ID, content),
        ]
    }

    /// One text block: font and position setup, then a `Tj`/`T*` pair per line.
    fn content_stream<S: AsRef<str>>(&self, lines: &[S]) -> Vec<u8> {
        let g = &self.geometry;
        let mut ops = format!(
            "BT\n/F1 {} Tf\n{} {} Td\n{} TL\n",
            g.font_size, g.origin_x, g.origin_y, g.leading
        );
        for line in lines {
            ops.push('(');
            ops.push_str(line.as_ref());
            ops.push_str(") Tj\nT*\n");
        }
        ops.push_str("ET");
        encode_latin1(&ops)
    }
}

/// `xref`, subsection header, free entry for object 0, then one 20-byte
/// entry per object.
fn xref_section(objects: &[DocumentObject]) -> Vec<u8> {
    let mut out = format!("xref\n0 {}\n", objects.len() + 1).into_bytes();
    out.extend_from_slice(FREE_ENTRY);
    for object in objects {
        out.extend_from_slice(format!("{:010} 00000 n \n", object.offset).as_bytes());
    }
    out
}

/// Code points above U+00FF have no single-byte form and become `?`.
pub fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| u8::try_from(u32::from(ch)).unwrap_or(b'?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_keeps_single_byte_chars() {
        assert_eq!(encode_latin1("abc"), b"abc".to_vec());
        assert_eq!(encode_latin1("é"), vec![0xE9]);
        assert_eq!(encode_latin1("a—b"), b"a?b".to_vec());
    }

    #[test]
    fn xref_entries_are_twenty_bytes() {
        let objects = [DocumentObject { id: 1, offset: 9 }];
        let xref = xref_section(&objects);
        let entries = &xref[b"xref\n0 2\n".len()..];
        assert_eq!(entries.len(), 40);
        assert_eq!(&entries[20..], b"0000000009 00000 n \n");
    }

    #[test]
    fn stream_length_counts_content_bytes_only() {
        let record = ObjectRecord::stream(CONTENT_ID, b"BT\nET");
        assert!(record.body.starts_with(b"<< /Length 5 >>\nstream\nBT\nET\nendstream\n"));
    }
}
