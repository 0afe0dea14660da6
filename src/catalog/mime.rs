//! Media types for `Accept`

pub const COMMON: &[&str] = &[
    "text/html", "application/xhtml+xml", "application/xml", "application/json",
    "text/plain", "text/css", "text/javascript", "application/javascript", "image/avif",
    "image/webp", "image/apng", "image/png", "image/jpeg", "image/gif", "image/svg+xml",
    "application/signed-exchange", "application/octet-stream", "text/*", "image/*",
    "application/*",
];

pub const ALL: &[&str] = &[
    // text
    "text/html", "text/plain", "text/css", "text/csv", "text/javascript", "text/markdown",
    "text/xml", "text/calendar", "text/vcard", "text/rtf", "text/tab-separated-values",
    "text/event-stream", "text/vtt", "text/*",
    // application
    "application/xhtml+xml", "application/xml", "application/json", "application/ld+json",
    "application/javascript", "application/ecmascript", "application/pdf", "application/zip",
    "application/gzip", "application/x-tar", "application/x-7z-compressed",
    "application/x-rar-compressed", "application/x-bzip2", "application/octet-stream",
    "application/rtf", "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/vnd.oasis.opendocument.text", "application/vnd.oasis.opendocument.spreadsheet",
    "application/vnd.oasis.opendocument.presentation", "application/epub+zip",
    "application/rss+xml", "application/atom+xml", "application/soap+xml",
    "application/x-www-form-urlencoded", "application/graphql", "application/wasm",
    "application/manifest+json", "application/problem+json", "application/x-shockwave-flash",
    "application/java-archive", "application/x-sh", "application/x-httpd-php",
    "application/vnd.api+json", "application/signed-exchange", "application/*",
    // image
    "image/avif", "image/webp", "image/apng", "image/png", "image/jpeg", "image/gif",
    "image/svg+xml", "image/bmp", "image/tiff", "image/x-icon", "image/vnd.microsoft.icon",
    "image/heic", "image/heif", "image/jxl", "image/*",
    // audio
    "audio/mpeg", "audio/ogg", "audio/wav", "audio/webm", "audio/aac", "audio/flac",
    "audio/midi", "audio/x-midi", "audio/opus", "audio/3gpp", "audio/*",
    // video
    "video/mp4", "video/mpeg", "video/ogg", "video/webm", "video/quicktime", "video/x-msvideo",
    "video/3gpp", "video/mp2t", "video/*",
    // font
    "font/woff", "font/woff2", "font/ttf", "font/otf", "font/collection",
    // multipart
    "multipart/form-data", "multipart/mixed", "multipart/alternative", "multipart/related",
    "multipart/byteranges",
    // model
    "model/gltf+json", "model/gltf-binary", "model/obj", "model/stl",
];
