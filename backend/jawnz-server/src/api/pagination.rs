use crate::{ApiError, ApiResult};

use jawnz_config::ApiConfig;
use jawnz_db::{Page, PageRequest, Sort, SortDirection, SortField};

use axum::{
    extract::Query,
    http::{HeaderMap, HeaderName, HeaderValue, Uri, header::LINK},
};

pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

/// Decoded query string of a paged request.
///
/// Parsed from the raw URI because `sort` may repeat.
#[derive(Debug, Clone, Default)]
pub struct PageParams {
    params: Vec<(String, String)>,
}

impl PageParams {
    #[track_caller]
    pub fn from_uri(uri: &Uri) -> ApiResult<Self> {
        let Query(params) = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map_err(|e| ApiError::bad_request(e.body_text(), "queryinvalid"))?;
        Ok(Self { params })
    }

    /// First value of `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// `page` defaults to 0, `size` to the configured default and is capped at
    /// the configured maximum. Unparseable numbers fall back to the defaults;
    /// unknown sort properties are rejected.
    #[track_caller]
    pub fn page_request(&self, config: &ApiConfig) -> ApiResult<PageRequest> {
        let page = self
            .get("page")
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map(|p| u32::try_from(p.max(0)).unwrap_or(u32::MAX))
            .unwrap_or(0);

        let size = match self.get("size").and_then(|v| v.trim().parse::<i64>().ok()) {
            Some(s) if s >= 1 => u32::try_from(s)
                .unwrap_or(u32::MAX)
                .min(config.max_page_size),
            _ => config.default_page_size,
        };

        let mut request = PageRequest::new(page, size);
        for (_, value) in self.params.iter().filter(|(key, _)| key == "sort") {
            for sort in parse_sort(value)? {
                request = request.with_sort(sort);
            }
        }

        Ok(request)
    }
}

/// `field[,field...][,asc|desc]`
#[track_caller]
fn parse_sort(value: &str) -> ApiResult<Vec<Sort>> {
    let mut tokens: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    let direction = match tokens.last().and_then(|t| SortDirection::from_keyword(t)) {
        Some(direction) => {
            tokens.pop();
            direction
        }
        None => SortDirection::Asc,
    };

    tokens
        .into_iter()
        .map(|property| {
            SortField::from_property(property)
                .map(|field| Sort { field, direction })
                .ok_or_else(|| {
                    ApiError::bad_request(
                        format!("Unknown sort property '{}'", property),
                        "sortinvalid",
                    )
                })
        })
        .collect()
}

/// `X-Total-Count` plus an RFC 5988 `Link` header with next/prev/last/first.
pub fn pagination_headers<T>(uri: &Uri, page: &Page<T>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(page.total_elements));

    let total_pages = page.total_pages();
    let mut links = Vec::with_capacity(4);
    if page.has_next() {
        links.push(prepare_link(uri, page.number + 1, page.size, "next"));
    }
    if page.has_previous() {
        links.push(prepare_link(uri, page.number - 1, page.size, "prev"));
    }
    let last_page = total_pages.saturating_sub(1);
    links.push(prepare_link(uri, last_page, page.size, "last"));
    links.push(prepare_link(uri, 0, page.size, "first"));

    match HeaderValue::try_from(links.join(",")) {
        Ok(value) => {
            headers.insert(LINK, value);
        }
        Err(e) => log::warn!("Skipping Link header: {}", e),
    }

    headers
}

/// Request URI with `page` and `size` replaced; other parameters keep their
/// original encoding.
fn prepare_link(uri: &Uri, page: u32, size: u32, rel: &str) -> String {
    let mut target = String::new();
    if let (Some(scheme), Some(authority)) = (uri.scheme_str(), uri.authority()) {
        target.push_str(scheme);
        target.push_str("://");
        target.push_str(authority.as_str());
    }
    target.push_str(uri.path());
    target.push('?');

    for segment in uri.query().unwrap_or_default().split('&') {
        let key = segment.split('=').next().unwrap_or_default();
        if segment.is_empty() || key == "page" || key == "size" {
            continue;
        }
        target.push_str(segment);
        target.push('&');
    }
    target.push_str(&format!("page={}&size={}", page, size));

    format!(
        "<{}>; rel=\"{}\"",
        target.replace(',', "%2C").replace(';', "%3B"),
        rel
    )
}
