use url::Url;

use crate::error::*;

/// Append `path` to the path of `base`, keeping whatever path `base` already has.
/// e.g. `http://localhost:5232/api` + `auth/login` => `http://localhost:5232/api/auth/login`
pub fn join_path(base: &Url, path: &str) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    self::parse_url(joined)
}

pub fn parse_url(url: impl AsRef<str>) -> Result<Url> {
    match Url::parse(url.as_ref()) {
        Ok(url) => Ok(url),
        Err(e) => Err(Error::InvalidSyntaxUrl {
            url: url.as_ref().to_owned(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_join_path() {
        let base = parse_url("http://localhost:5232/api").unwrap();
        let url = join_path(&base, "auth/login").unwrap();
        assert_eq!(url, Url::parse("http://localhost:5232/api/auth/login").unwrap());

        // Trailling slash of base and leading slash of path are merged:
        let base = parse_url("http://localhost:5232/api/").unwrap();
        let url = join_path(&base, "/health").unwrap();
        assert_eq!(url, Url::parse("http://localhost:5232/api/health").unwrap());

        // Base without path:
        let base = parse_url("http://127.0.0.1:8080").unwrap();
        let url = join_path(&base, "auth/login").unwrap();
        assert_eq!(url, Url::parse("http://127.0.0.1:8080/auth/login").unwrap());
    }

    #[test]
    fn test_parse_url_error() {
        let err = parse_url("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidSyntaxUrl { .. }));
    }
}
