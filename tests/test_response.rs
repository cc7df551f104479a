use drip::http::response::{ResponseHead, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
}

#[test]
fn test_response_head_basic() {
    let head = ResponseHead::new(StatusCode::Ok);

    assert_eq!(head.status, StatusCode::Ok);
    assert!(head.headers.is_empty());
}

#[test]
fn test_response_head_with_headers() {
    let head = ResponseHead::new(StatusCode::Ok)
        .header("Content-Type", "text/html; charset=UTF-8")
        .header("Transfer-Encoding", "chunked");

    assert_eq!(head.headers.len(), 2);
    assert_eq!(head.headers[0].0, "Content-Type");
    assert_eq!(head.headers[0].1, "text/html; charset=UTF-8");
    assert_eq!(head.headers[1].0, "Transfer-Encoding");
    assert_eq!(head.headers[1].1, "chunked");
}

#[test]
fn test_response_head_preserves_insertion_order() {
    let head = ResponseHead::new(StatusCode::BadRequest)
        .header("Content-Length", "0")
        .header("Connection", "close");

    let keys: Vec<&str> = head.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["Content-Length", "Connection"]);
}
