use bytes::Bytes;
use std::io::SeekFrom;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeek, AsyncSeekExt};
use tracing::warn;

use crate::common::errors::{ImageStreamError, Result};

/// Read exactly `count` bytes at `offset` from an image handle.
///
/// The handle is borrowed, never closed. A short read means the image is
/// truncated and fails with [`ImageStreamError::Truncated`]; there is no
/// retry and no partial result.
///
/// ```no_run
/// # async fn demo() -> image_stream_utils::common::errors::Result<()> {
/// let mut file = tokio::fs::File::open("path/to/image.img").await?;
/// let buffer = image_stream_utils::image_stream::read_buffer(&mut file, 512, 0).await?;
/// assert_eq!(buffer.len(), 512);
/// # Ok(())
/// # }
/// ```
pub async fn read_buffer<R>(handle: &mut R, count: usize, offset: u64) -> Result<Bytes>
where
    R: AsyncRead + AsyncSeek + Unpin + ?Sized,
{
    let mut buffer = vec![0u8; count];

    handle.seek(SeekFrom::Start(offset)).await?;
    let bytes_read = read_at_most(handle, &mut buffer).await?;

    if bytes_read != count {
        warn!(
            "[ImageRead] Short read at {}: wanted {} bytes, got {}",
            offset, count, bytes_read
        );
        return Err(ImageStreamError::truncated(count, offset, bytes_read));
    }

    Ok(Bytes::from(buffer))
}

// One read request: tokio may hand a file read back in pieces, so keep
// filling until the buffer is full or the source hits end-of-file.
async fn read_at_most<R>(handle: &mut R, dest: &mut [u8]) -> std::io::Result<usize>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut filled = 0;
    while filled < dest.len() {
        match handle.read(&mut dest[filled..]).await {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
