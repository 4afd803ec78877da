use std::path::{Path, PathBuf};

use warenbuchung_webclient::Credential;

/// Parse `USER:PASSWORD`. Only the first ':' separates, so passwords may contain ':'.
pub fn parse_credential(s: &str) -> Result<Credential, String> {
    let Some((username, password)) = s.split_once(':') else {
        return Err(format!("expected USER:PASSWORD, got '{}'", s))
    };
    if username.is_empty() {
        return Err("username must not be empty".to_owned());
    }
    Ok(Credential::new(username, password))
}

pub fn replace_homedir_to_tilde(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    let Some(home_dir) = ::dirs::home_dir() else {
        return path
    };
    path.strip_prefix(home_dir)
        .map(|path| Path::new("~").join(path))
        .unwrap_or(path)
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_credential() {
        assert_eq!(
            parse_credential("admin:admin123"),
            Ok(Credential::new("admin", "admin123"))
        );
        assert_eq!(
            parse_credential("admin:a:b:c"),
            Ok(Credential::new("admin", "a:b:c"))
        );
        assert_eq!(parse_credential("admin:"), Ok(Credential::new("admin", "")));

        assert!(parse_credential("admin").is_err());
        assert!(parse_credential(":admin123").is_err());
    }

    #[test]
    fn test_replace_homedir_to_tilde() {
        let Some(home) = dirs::home_dir() else {
            return
        };
        assert_eq!(
            replace_homedir_to_tilde(home.join(".config/login-probe")),
            Path::new("~/.config/login-probe")
        );
        assert_eq!(
            replace_homedir_to_tilde("/definitely/not/home"),
            Path::new("/definitely/not/home")
        );
    }
}
