use drip::http::chunked::{ChunkedWriter, encode_chunk, serialize_head};
use drip::http::response::{ResponseHead, StatusCode};
use tokio::io::AsyncReadExt;

#[test]
fn test_encode_chunk_frames_data_with_hex_size() {
    assert_eq!(encode_chunk(b"hello"), b"5\r\nhello\r\n".to_vec());
}

#[test]
fn test_encode_chunk_size_is_hexadecimal() {
    let data = [b'x'; 16];
    let encoded = encode_chunk(&data);

    assert!(encoded.starts_with(b"10\r\n"));
    assert!(encoded.ends_with(b"\r\n"));
    assert_eq!(encoded.len(), 4 + 16 + 2);
}

#[test]
fn test_encode_chunk_empty_data_encodes_nothing() {
    // A zero-length chunk would terminate the stream
    assert!(encode_chunk(b"").is_empty());
}

#[test]
fn test_serialize_head_status_line_and_separator() {
    let head = ResponseHead::new(StatusCode::Ok);
    let raw = serialize_head(&head);

    assert_eq!(raw, b"HTTP/1.1 200 OK\r\n\r\n");
}

#[test]
fn test_serialize_head_writes_headers_in_order() {
    let head = ResponseHead::new(StatusCode::Ok)
        .header("Content-Type", "text/html; charset=UTF-8")
        .header("Transfer-Encoding", "chunked");
    let raw = String::from_utf8(serialize_head(&head)).unwrap();

    assert_eq!(
        raw,
        "HTTP/1.1 200 OK\r\n\
         Content-Type: text/html; charset=UTF-8\r\n\
         Transfer-Encoding: chunked\r\n\
         \r\n"
    );
}

#[test]
fn test_serialize_head_bad_request() {
    let head = ResponseHead::new(StatusCode::BadRequest).header("Content-Length", "0");
    let raw = String::from_utf8(serialize_head(&head)).unwrap();

    assert!(raw.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    assert!(raw.ends_with("\r\n\r\n"));
}

#[tokio::test]
async fn test_writer_streams_head_chunks_and_terminator() {
    let (mut client, server) = tokio::io::duplex(4096);

    let writer_task = tokio::spawn(async move {
        let head = ResponseHead::new(StatusCode::Ok).header("Transfer-Encoding", "chunked");
        let mut writer = ChunkedWriter::new(server);
        writer.write_head(&head).await.unwrap();
        writer.write_chunk(b"first").await.unwrap();
        writer.write_chunk(b"").await.unwrap(); // must not terminate the stream
        writer.write_chunk(b"second").await.unwrap();
        writer.finish().await.unwrap();
    });
    writer_task.await.unwrap();

    let mut raw = Vec::new();
    client.read_to_end(&mut raw).await.unwrap();
    let raw = String::from_utf8(raw).unwrap();

    assert!(raw.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(raw.contains("5\r\nfirst\r\n6\r\nsecond\r\n"));
    assert!(raw.ends_with("0\r\n\r\n"));
}
