use bytes::{Bytes, BytesMut};
use futures_util::{Stream, StreamExt};
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

/// Buffer a whole byte stream in memory.
///
/// Chunks are concatenated in arrival order. The first error item ends the
/// collection and is returned untouched; whatever was gathered so far is
/// dropped. There is no size cap, so only use this on streams known to fit
/// in memory.
pub async fn extract_stream<S, B, E>(stream: S) -> Result<Bytes, E>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
{
    let mut stream = std::pin::pin!(stream);
    let mut data = BytesMut::new();

    while let Some(chunk) = stream.next().await {
        data.extend_from_slice(chunk?.as_ref());
    }

    Ok(data.freeze())
}

/// [`extract_stream`] for anything readable through tokio.
pub async fn extract_reader<R>(reader: R) -> std::io::Result<Bytes>
where
    R: AsyncRead,
{
    extract_stream(ReaderStream::new(reader)).await
}
