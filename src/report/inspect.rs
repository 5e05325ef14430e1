//! Read-back of the structure produced by [`DocumentWriter`](super::writer::DocumentWriter).
//!
//! Only the classic xref layout the writer emits is understood: one
//! subsection starting at object 0, fixed 20-byte entries, and a trailer
//! dictionary on the lines that follow.

use thiserror::Error;

const XREF_ENTRY_LEN: usize = 20;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InspectError {
    #[error("Missing %PDF- header")]
    MissingHeader,
    #[error("Missing startxref footer")]
    MissingStartXref,
    #[error("Malformed xref section: {0}")]
    MalformedXref(String),
    #[error("Malformed trailer: {0}")]
    MalformedTrailer(String),
    #[error("Object {id}: offset {offset} is past the end of the document")]
    OffsetOutOfBounds { id: u32, offset: usize },
    #[error("Object {id}: offset {offset} does not start an object definition")]
    OffsetMismatch { id: u32, offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XrefEntry {
    pub id: u32,
    pub offset: usize,
    pub generation: u32,
    pub in_use: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XrefTable {
    pub xref_offset: usize,
    pub entries: Vec<XrefEntry>,
    /// `/Size` from the trailer.
    pub size: usize,
    /// `/Root` object id from the trailer.
    pub root: u32,
}

impl XrefTable {
    pub fn offset_of(&self, id: u32) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.in_use && e.id == id)
            .map(|e| e.offset)
    }

    pub fn live_objects(&self) -> usize {
        self.entries.iter().filter(|e| e.in_use).count()
    }
}

/// Parse the xref table and trailer, and check that every in-use offset
/// lands on `"{id} 0 obj"`.
pub fn read_xref(bytes: &[u8]) -> Result<XrefTable, InspectError> {
    if !bytes.starts_with(b"%PDF-") {
        return Err(InspectError::MissingHeader);
    }

    let xref_offset = read_startxref(bytes)?;
    if xref_offset >= bytes.len() {
        return Err(InspectError::MalformedXref(format!(
            "startxref {xref_offset} is past the end of the document"
        )));
    }

    let mut cursor = Cursor::new(bytes, xref_offset);
    cursor
        .expect(b"xref\n")
        .map_err(InspectError::MalformedXref)?;
    let first = cursor.number().map_err(InspectError::MalformedXref)?;
    cursor.expect(b" ").map_err(InspectError::MalformedXref)?;
    let count = cursor.number().map_err(InspectError::MalformedXref)?;
    cursor.expect(b"\n").map_err(InspectError::MalformedXref)?;
    if first != 0 {
        return Err(InspectError::MalformedXref(format!(
            "subsection starts at {first}, expected 0"
        )));
    }

    let room = cursor.rest().len() / XREF_ENTRY_LEN;
    if count > room {
        return Err(InspectError::MalformedXref(format!(
            "{count} entries declared, room for at most {room}"
        )));
    }

    let mut entries = Vec::with_capacity(count);
    for idx in 0..count {
        let id = u32::try_from(idx)
            .map_err(|_| InspectError::MalformedXref(format!("object id {idx} out of range")))?;
        entries.push(read_entry(&mut cursor, id).map_err(InspectError::MalformedXref)?);
    }

    cursor
        .expect(b"trailer")
        .map_err(InspectError::MalformedTrailer)?;
    let dict = cursor.dictionary().map_err(InspectError::MalformedTrailer)?;
    let size = dict_number(dict, b"/Size ").map_err(InspectError::MalformedTrailer)?;
    let root = dict_number(dict, b"/Root ").map_err(InspectError::MalformedTrailer)?;
    let root = u32::try_from(root)
        .map_err(|_| InspectError::MalformedTrailer(format!("/Root {root} out of range")))?;

    for entry in entries.iter().filter(|e| e.in_use) {
        if entry.offset >= bytes.len() {
            return Err(InspectError::OffsetOutOfBounds {
                id: entry.id,
                offset: entry.offset,
            });
        }
        let expected = format!("{} {} obj", entry.id, entry.generation);
        if !bytes[entry.offset..].starts_with(expected.as_bytes()) {
            return Err(InspectError::OffsetMismatch {
                id: entry.id,
                offset: entry.offset,
            });
        }
    }

    Ok(XrefTable {
        xref_offset,
        entries,
        size,
        root,
    })
}

fn read_startxref(bytes: &[u8]) -> Result<usize, InspectError> {
    let marker = b"startxref";
    let pos = rfind(bytes, marker).ok_or(InspectError::MissingStartXref)?;
    let mut cursor = Cursor::new(bytes, pos + marker.len());
    cursor.skip_whitespace();
    cursor.number().map_err(|_| InspectError::MissingStartXref)
}

fn read_entry(cursor: &mut Cursor<'_>, id: u32) -> Result<XrefEntry, String> {
    let start = cursor.pos;
    let offset = cursor.number()?;
    if cursor.pos - start != 10 {
        return Err(format!("entry {id}: offset field is not 10 digits"));
    }
    cursor.expect(b" ")?;
    let generation = cursor.number()?;
    cursor.expect(b" ")?;
    let in_use = match cursor.next_byte() {
        Some(b'n') => true,
        Some(b'f') => false,
        other => return Err(format!("entry {id}: bad type marker {other:?}")),
    };
    // Entries are exactly 20 bytes; the EOL is one of these two-byte forms.
    if !(cursor.eat(b" \n") || cursor.eat(b"\r\n") || cursor.eat(b" \r")) {
        return Err(format!("entry {id}: bad end of line"));
    }
    let generation =
        u32::try_from(generation).map_err(|_| format!("entry {id}: generation out of range"))?;

    Ok(XrefEntry {
        id,
        offset,
        generation,
        in_use,
    })
}

fn dict_number(dict: &[u8], key: &[u8]) -> Result<usize, String> {
    let pos = find(dict, key).ok_or_else(|| {
        format!("missing {}", String::from_utf8_lossy(key).trim_end())
    })?;
    let mut cursor = Cursor::new(dict, pos + key.len());
    cursor.number()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8], pos: usize) -> Self {
        Self { bytes, pos }
    }

    fn rest(&self) -> &'a [u8] {
        self.bytes.get(self.pos..).unwrap_or(&[])
    }

    fn eat(&mut self, lit: &[u8]) -> bool {
        if self.rest().starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, lit: &[u8]) -> Result<(), String> {
        if self.eat(lit) {
            Ok(())
        } else {
            Err(format!(
                "expected {:?} at byte {}",
                String::from_utf8_lossy(lit),
                self.pos
            ))
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        let b = self.rest().first().copied();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.rest().first() {
            if !b.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
    }

    fn number(&mut self) -> Result<usize, String> {
        let digits = self.rest().iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return Err(format!("expected a number at byte {}", self.pos));
        }
        let raw = &self.rest()[..digits];
        let value = std::str::from_utf8(raw)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or_else(|| format!("number out of range at byte {}", self.pos))?;
        self.pos += digits;
        Ok(value)
    }

    /// The `<< ... >>` body following the current position.
    fn dictionary(&mut self) -> Result<&'a [u8], String> {
        self.skip_whitespace();
        self.expect(b"<<")?;
        let rest = self.rest();
        let end = find(rest, b">>").ok_or_else(|| "unterminated dictionary".to_string())?;
        self.pos += end + 2;
        Ok(&rest[..end])
    }
}
