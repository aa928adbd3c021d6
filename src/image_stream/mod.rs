pub mod extract;
pub mod mime;
pub mod reader;

pub use extract::{extract_reader, extract_stream};
pub use mime::{archive_mime_type, archive_mime_type_with, sniff_mime_type};
pub use reader::read_buffer;
