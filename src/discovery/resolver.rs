use reqwest::Url;

/// Resolve `path` against `base`.
///
/// A path that already carries an `http://` or `https://` scheme replaces the
/// base entirely. Otherwise the base is treated as a directory (exactly one
/// trailing slash), leading slashes are stripped from the path and the two
/// are joined with URL-join semantics: `.` and `..` segments collapse, query
/// strings and fragments are kept. A base that does not parse as a URL falls
/// back to a plain string join.
pub fn resolve(base: &str, path: &str) -> String {
    let base = base.trim();
    let path = path.trim();

    if is_absolute(path) {
        return path.to_string();
    }

    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    // "./" keeps entries such as `a:b` from being read as a scheme
    match Url::parse(&format!("{base}/")).and_then(|root| root.join(&format!("./{path}"))) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{base}/{path}"),
    }
}

/// Check whether an entry is a full URL rather than a relative path.
pub fn is_absolute(path: &str) -> bool {
    has_scheme(path, "http://") || has_scheme(path, "https://")
}

fn has_scheme(value: &str, scheme: &str) -> bool {
    value
        .get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}
