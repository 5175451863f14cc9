use webroot::http::response::{Response, ResponseBuilder, StatusCode};
use webroot::http::writer::{serialize_response, ResponseWriter};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::MethodNotAllowed.reason_phrase(),
        "Method Not Allowed"
    );
}

#[test]
fn test_response_ok_wire_format() {
    let bytes = Response::ok(b"<html></html>".to_vec(), "text/html").to_bytes();

    assert_eq!(
        bytes,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n<html></html>".to_vec()
    );
}

#[test]
fn test_response_ok_body_is_verbatim() {
    let body = vec![0u8, 13, 10, 13, 10, 255, 1];
    let bytes = Response::ok(body.clone(), "image/png").to_bytes();

    let pos = bytes.windows(4).position(|w| w == b"\r\n\r\n").unwrap();
    assert_eq!(&bytes[pos + 4..], &body[..]);
}

#[test]
fn test_response_ok_has_single_content_type_and_no_length() {
    let response = Response::ok(b"abc".to_vec(), "text/plain");
    let text = String::from_utf8(response.to_bytes()).unwrap();

    assert_eq!(text.matches("Content-Type:").count(), 1);
    assert!(!text.contains("Content-Length"));
    assert_eq!(text.matches("\r\n\r\n").count(), 1);
}

#[test]
fn test_response_not_found_wire_format() {
    assert_eq!(
        Response::not_found().to_bytes(),
        b"HTTP/1.1 404 Not Found\r\n\r\n".to_vec()
    );
}

#[test]
fn test_response_method_not_allowed_wire_format() {
    assert_eq!(
        Response::method_not_allowed().to_bytes(),
        b"HTTP/1.1 405 Method Not Allowed\r\n\r\n".to_vec()
    );
}

#[test]
fn test_response_builder_replaces_header_case_insensitively() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("content-type", "text/html")
        .build();

    assert_eq!(response.headers.len(), 1);
    assert_eq!(response.header("Content-Type"), Some("text/html"));
}

#[test]
fn test_response_builder_keeps_insertion_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("X-First", "1")
        .header("X-Second", "2")
        .build();

    assert_eq!(
        serialize_response(&response),
        b"HTTP/1.1 200 OK\r\nX-First: 1\r\nX-Second: 2\r\n\r\n".to_vec()
    );
}

#[test]
fn test_response_builder_strips_line_breaks() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/html\r\nSet-Cookie: x=1")
        .build();

    assert_eq!(
        response.header("Content-Type"),
        Some("text/htmlSet-Cookie: x=1")
    );
    let text = String::from_utf8(response.to_bytes()).unwrap();
    assert_eq!(text.matches("\r\n").count(), 3);
}

#[test]
fn test_response_builder_empty_body() {
    let response = ResponseBuilder::new(StatusCode::NotFound).build();

    assert!(response.body.is_empty());
    assert!(response.headers.is_empty());
}

#[tokio::test]
async fn test_response_writer_writes_everything() {
    let response = Response::ok(b"hello".to_vec(), "text/plain");
    let mut writer = ResponseWriter::new(&response);
    let mut out: Vec<u8> = Vec::new();

    writer.write_to_stream(&mut out).await.unwrap();

    assert!(writer.is_complete());
    assert_eq!(writer.written(), out.len());
    assert_eq!(out, response.to_bytes());
}
