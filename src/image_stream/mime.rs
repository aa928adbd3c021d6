use std::path::Path;
use tokio::fs::File;
use tracing::debug;

use super::reader::read_buffer;
use crate::common::errors::Result;
use crate::config::DetectorSettings;

pub const MIME_TYPE_RAW_IMAGE: &str = "application/octet-stream";

/// Number of leading bytes needed to sniff every known signature.
pub const FILE_TYPE_ID_BYTES: usize = 262;
const FILE_TYPE_ID_START: u64 = 0;

struct Signature {
    offset: usize,
    magic: &'static [u8],
    mime: &'static str,
}

const SIGNATURES: &[Signature] = &[
    Signature { offset: 0, magic: &[0x1F, 0x8B, 0x08], mime: "application/gzip" },
    Signature { offset: 0, magic: b"BZh", mime: "application/x-bzip2" },
    Signature { offset: 0, magic: &[0xFD, b'7', b'z', b'X', b'Z', 0x00], mime: "application/x-xz" },
    Signature { offset: 0, magic: &[0x28, 0xB5, 0x2F, 0xFD], mime: "application/zstd" },
    Signature { offset: 0, magic: &[b'P', b'K', 0x03, 0x04], mime: "application/zip" },
    Signature { offset: 0, magic: &[b'P', b'K', 0x05, 0x06], mime: "application/zip" },
    Signature { offset: 0, magic: &[b'P', b'K', 0x07, 0x08], mime: "application/zip" },
    Signature { offset: 0, magic: &[b'7', b'z', 0xBC, 0xAF, 0x27, 0x1C], mime: "application/x-7z-compressed" },
    Signature { offset: 0, magic: &[b'R', b'a', b'r', b'!', 0x1A, 0x07], mime: "application/x-rar-compressed" },
    Signature { offset: 257, magic: b"ustar", mime: "application/x-tar" },
    Signature { offset: 0, magic: &[0x78, 0x01, 0x73, 0x0D, 0x62, 0x62, 0x60], mime: "application/x-apple-diskimage" },
];

/// Match a file prefix against the known archive signatures.
pub fn sniff_mime_type(buffer: &[u8]) -> Option<&'static str> {
    SIGNATURES
        .iter()
        .find(|sig| {
            buffer
                .get(sig.offset..sig.offset + sig.magic.len())
                .is_some_and(|window| window == sig.magic)
        })
        .map(|sig| sig.mime)
}

/// Extension-only lookup; never touches the filesystem.
pub fn mime_type_for_path(path: &Path) -> Option<&'static str> {
    mime_guess::from_path(path)
        .first_raw()
        .filter(|mime| !mime.is_empty())
}

/// Resolve the MIME type of an archive or raw image.
///
/// The extension wins when it is known. Otherwise the first
/// [`FILE_TYPE_ID_BYTES`] bytes are sniffed, falling back to
/// `application/octet-stream`. Files shorter than the sniff window fail
/// with a truncation error rather than falling back.
pub async fn archive_mime_type(path: impl AsRef<Path>) -> Result<String> {
    archive_mime_type_with(path, &DetectorSettings::default()).await
}

pub async fn archive_mime_type_with(
    path: impl AsRef<Path>,
    settings: &DetectorSettings,
) -> Result<String> {
    let path = path.as_ref();

    if let Some(mime) = mime_type_for_path(path) {
        debug!("[MimeSniff] {:?} resolved by extension: {}", path, mime);
        return Ok(mime.to_string());
    }

    // The handle lives only inside this block and is closed on every exit.
    let buffer = {
        let mut file = File::open(path).await?;
        read_buffer(&mut file, FILE_TYPE_ID_BYTES, FILE_TYPE_ID_START).await?
    };

    match sniff_mime_type(&buffer) {
        Some(mime) => {
            debug!("[MimeSniff] {:?} resolved by magic bytes: {}", path, mime);
            Ok(mime.to_string())
        }
        None => {
            debug!("[MimeSniff] {:?} has no known signature, treating as raw image", path);
            Ok(settings.fallback_mime.clone())
        }
    }
}
