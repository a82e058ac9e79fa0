use crate::{PageParams, pagination_headers};

use jawnz_config::ApiConfig;
use jawnz_db::{Page, PageRequest, SortDirection, SortField};

use axum::http::{Uri, header::LINK};

fn params(uri: &str) -> PageParams {
    PageParams::from_uri(&uri.parse::<Uri>().unwrap()).unwrap()
}

fn config() -> ApiConfig {
    ApiConfig {
        default_page_size: 20,
        max_page_size: 100,
        ..ApiConfig::default()
    }
}

#[test]
fn test_page_request_defaults() {
    let request = params("/api/comment-entities").page_request(&config()).unwrap();

    assert_eq!(request.page, 0);
    assert_eq!(request.size, 20);
    assert!(request.sort.is_empty());
}

#[test]
fn test_page_request_reads_page_and_size() {
    let request = params("/api/comment-entities?page=3&size=7")
        .page_request(&config())
        .unwrap();

    assert_eq!(request.page, 3);
    assert_eq!(request.size, 7);
}

#[test]
fn test_size_is_capped_at_maximum() {
    let request = params("/api/comment-entities?size=5000")
        .page_request(&config())
        .unwrap();

    assert_eq!(request.size, 100);
}

#[test]
fn test_invalid_numbers_fall_back_to_defaults() {
    let request = params("/api/comment-entities?page=-2&size=zero")
        .page_request(&config())
        .unwrap();

    assert_eq!(request.page, 0);
    assert_eq!(request.size, 20);
}

#[test]
fn test_sort_parses_fields_and_direction() {
    let request = params("/api/comment-entities?sort=userName,desc&sort=id")
        .page_request(&config())
        .unwrap();

    assert_eq!(request.sort.len(), 2);
    assert_eq!(request.sort[0].field, SortField::UserName);
    assert_eq!(request.sort[0].direction, SortDirection::Desc);
    assert_eq!(request.sort[1].field, SortField::Id);
    assert_eq!(request.sort[1].direction, SortDirection::Asc);
}

#[test]
fn test_unknown_sort_property_is_rejected() {
    let result = params("/api/comment-entities?sort=password,asc").page_request(&config());

    let error = result.unwrap_err();
    assert_eq!(error.alert_key(), Some("sortinvalid"));
}

#[test]
fn test_get_returns_first_value() {
    let params = params("/api/_search/comment-entities?query=hello%20world&query=other");

    assert_eq!(params.get("query"), Some("hello world"));
    assert_eq!(params.get("missing"), None);
}

#[test]
fn test_headers_on_middle_page() {
    let uri: Uri = "/api/comment-entities?page=1&size=2&sort=id,asc".parse().unwrap();
    let request = PageRequest::new(1, 2);
    let page = Page::new(vec![1, 2], &request, 5);

    let headers = pagination_headers(&uri, &page);

    assert_eq!(headers["x-total-count"], "5");
    let link = headers[LINK].to_str().unwrap();
    assert_eq!(
        link,
        "</api/comment-entities?sort=id%2Casc&page=2&size=2>; rel=\"next\",\
         </api/comment-entities?sort=id%2Casc&page=0&size=2>; rel=\"prev\",\
         </api/comment-entities?sort=id%2Casc&page=2&size=2>; rel=\"last\",\
         </api/comment-entities?sort=id%2Casc&page=0&size=2>; rel=\"first\""
    );
}

#[test]
fn test_headers_on_empty_result() {
    let uri: Uri = "/api/comment-entities".parse().unwrap();
    let request = PageRequest::new(0, 20);
    let page: Page<i32> = Page::new(Vec::new(), &request, 0);

    let headers = pagination_headers(&uri, &page);

    assert_eq!(headers["x-total-count"], "0");
    let link = headers[LINK].to_str().unwrap();
    assert!(!link.contains("rel=\"next\""));
    assert!(!link.contains("rel=\"prev\""));
    assert!(link.contains("</api/comment-entities?page=0&size=20>; rel=\"last\""));
}
