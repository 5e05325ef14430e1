pub mod inspect;
pub mod lines;
pub mod sanitize;
pub mod writer;

pub use inspect::{read_xref, InspectError, XrefEntry, XrefTable};
pub use lines::{compose_report, report_text};
pub use sanitize::{escape_literal, is_escaped, sanitize_line, transliterate};
pub use writer::{encode_latin1, Document, DocumentObject, DocumentWriter};
