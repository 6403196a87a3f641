use tonic::codec::CompressionEncoding;

/// Clients whose codec settings can be tuned
///
/// Implemented by [`GrpcHandle`](crate::GrpcHandle). The free functions below
/// work on anything implementing it.
pub trait ConfigurableClient: Sized {
    /// Accept compressed responses
    fn accept_compressed(self, encoding: CompressionEncoding) -> Self;

    /// Send compressed requests
    fn send_compressed(self, encoding: CompressionEncoding) -> Self;

    /// Set maximum size for incoming messages
    fn max_decoding_message_size(self, limit: usize) -> Self;

    /// Set maximum size for outgoing messages
    fn max_encoding_message_size(self, limit: usize) -> Self;
}

/// Default message size limit in both directions
pub const DEFAULT_MESSAGE_LIMIT: usize = 8 * 1024 * 1024;

/// Zstd compression and 8MB limits
///
/// Only for servers that speak zstd; use [`with_standard_limits`] alone
/// otherwise.
///
/// ## Example
/// ```ignore
/// use grpc_client::{GrpcHandle, configure_client, create_channel};
///
/// let channel = create_channel("127.0.0.1:50051").await?;
/// let handle = configure_client(GrpcHandle::<MyService>::new(channel));
/// ```
pub fn configure_client<T>(client: T) -> T
where
    T: ConfigurableClient,
{
    client
        .accept_compressed(CompressionEncoding::Zstd)
        .send_compressed(CompressionEncoding::Zstd)
        .max_decoding_message_size(DEFAULT_MESSAGE_LIMIT)
        .max_encoding_message_size(DEFAULT_MESSAGE_LIMIT)
}

/// Compress requests and accept compressed responses with `encoding`
///
/// ## Example
/// ```ignore
/// use tonic::codec::CompressionEncoding;
///
/// let handle = with_compression(handle, CompressionEncoding::Gzip);
/// ```
pub fn with_compression<T>(client: T, encoding: CompressionEncoding) -> T
where
    T: ConfigurableClient,
{
    client
        .accept_compressed(encoding)
        .send_compressed(encoding)
}

/// Zstd in both directions
pub fn with_zstd_compression<T>(client: T) -> T
where
    T: ConfigurableClient,
{
    with_compression(client, CompressionEncoding::Zstd)
}

/// Cap decoded (incoming) and encoded (outgoing) message sizes
///
/// Search requests carrying many high-dimensional vectors can exceed the 4MB
/// tonic default, so bulk clients usually raise both.
pub fn with_limits<T>(client: T, max_decoding: usize, max_encoding: usize) -> T
where
    T: ConfigurableClient,
{
    client
        .max_decoding_message_size(max_decoding)
        .max_encoding_message_size(max_encoding)
}

/// [`with_limits`] at [`DEFAULT_MESSAGE_LIMIT`] both ways
pub fn with_standard_limits<T>(client: T) -> T
where
    T: ConfigurableClient,
{
    with_limits(client, DEFAULT_MESSAGE_LIMIT, DEFAULT_MESSAGE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records what was applied
    #[derive(Debug, Default, PartialEq)]
    struct Recorder {
        accept: Option<CompressionEncoding>,
        send: Option<CompressionEncoding>,
        decode_limit: Option<usize>,
        encode_limit: Option<usize>,
    }

    impl ConfigurableClient for Recorder {
        fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.accept = Some(encoding);
            self
        }

        fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.send = Some(encoding);
            self
        }

        fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.decode_limit = Some(limit);
            self
        }

        fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.encode_limit = Some(limit);
            self
        }
    }

    #[test]
    fn test_configure_client_sets_everything() {
        let applied = configure_client(Recorder::default());
        assert_eq!(applied.accept, Some(CompressionEncoding::Zstd));
        assert_eq!(applied.send, Some(CompressionEncoding::Zstd));
        assert_eq!(applied.decode_limit, Some(DEFAULT_MESSAGE_LIMIT));
        assert_eq!(applied.encode_limit, Some(DEFAULT_MESSAGE_LIMIT));
    }

    #[test]
    fn test_limits_leave_compression_alone() {
        let applied = with_limits(Recorder::default(), 1024, 2048);
        assert_eq!(applied.accept, None);
        assert_eq!(applied.decode_limit, Some(1024));
        assert_eq!(applied.encode_limit, Some(2048));
    }

    #[test]
    fn test_gzip_compression() {
        let applied = with_compression(Recorder::default(), CompressionEncoding::Gzip);
        assert_eq!(applied.accept, Some(CompressionEncoding::Gzip));
        assert_eq!(applied.send, Some(CompressionEncoding::Gzip));
    }
}
