//! Content codings for `Accept-Encoding`

pub const COMMON: &[&str] = &["gzip", "deflate", "br", "zstd", "identity"];

/// IANA HTTP content coding registry, plus the legacy `x-` aliases still seen in the wild.
pub const ALL: &[&str] = &[
    "gzip", "deflate", "br", "zstd", "identity", "compress", "x-gzip", "x-compress",
    "aes128gcm", "exi", "pack200-gzip", "dcb", "dcz",
];
