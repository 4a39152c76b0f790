use url::Url;

/// Append `path` to `base` exactly as given.
///
/// No slashes are added, trimmed or collapsed: `("/api/", "/leaders")`
/// yields `"/api//leaders"`.
pub fn endpoint_url(base: &str, path: &str) -> String {
    let mut url = String::with_capacity(base.len() + path.len());
    url.push_str(base);
    url.push_str(path);
    url
}

/// Turn a request target into an absolute URL.
///
/// With an origin, the target is joined onto it the way a browser resolves
/// a `fetch` argument against the page. Without one, the target must
/// already be absolute.
pub fn resolve_target(origin: Option<&Url>, target: &str) -> Result<Url, url::ParseError> {
    match origin {
        Some(origin) => origin.join(target),
        None => Url::parse(target),
    }
}
