//! The fixed HTML document, split into the segments the server streams.
//!
//! Segment boundaries matter: each one is flushed as its own chunk, and the
//! two paragraphs are held back by the configured delays.

/// First chunk, written as soon as the request head is parsed.
pub const DOCUMENT_PROLOGUE: &str = "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<title>Chunked transfer encoding test</title>\n\
</head>\n\
<body>\n";

/// Second chunk, written immediately after the prologue.
pub const HEADING: &str = "<h1>Chunked transfer encoding test</h1>\n";

/// Written after `early_delay`; the stream stays open.
pub const EARLY_PARAGRAPH: &str = "<p>This is a chunked response after 2 seconds. \
Should be displayed before 5-second chunk arrives.</p>\n";

/// Written after `late_delay`, followed by the epilogue and the end of
/// the stream.
pub const LATE_PARAGRAPH: &str = "<p>This is a chunked response after 5 seconds. \
The server should not close the stream before all chunks are sent to a client.</p>\n";

/// Closing markup, the last data chunk on the wire.
pub const DOCUMENT_EPILOGUE: &str = "</body></html>\n";

/// The whole document as a client reassembles it from the chunks.
pub fn full_document() -> String {
    [
        DOCUMENT_PROLOGUE,
        HEADING,
        EARLY_PARAGRAPH,
        LATE_PARAGRAPH,
        DOCUMENT_EPILOGUE,
    ]
    .concat()
}
