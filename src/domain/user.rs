use serde::{Deserialize, Serialize};

/// Display profile supplied by the identity provider. The app only reads
/// these fields; account management stays with the provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Authentication state as seen by the UI: a boolean, an optional profile,
/// and the bearer token cached in the `api_token` cookie.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub user: Option<Profile>,
    pub api_token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(token: String) -> Self {
        Self {
            is_authenticated: true,
            is_loading: true,
            user: None,
            api_token: Some(token),
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        let user = self.user.as_ref()?;
        user.name.as_deref().or(user.nickname.as_deref())
    }
}

/// Extracts a cookie value from a `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_finds_token() {
        let cookies = "theme=dark; api_token=abc123; lang=en";
        assert_eq!(cookie_value(cookies, "api_token"), Some("abc123".to_string()));
        assert_eq!(cookie_value(cookies, "missing"), None);
        assert_eq!(cookie_value("", "api_token"), None);
    }

    #[test]
    fn display_name_prefers_name_over_nickname() {
        let mut session = Session::authenticated("t".to_string());
        session.user = Some(Profile {
            name: Some("Ada Lovelace".to_string()),
            nickname: Some("ada".to_string()),
            picture: None,
        });
        assert_eq!(session.display_name(), Some("Ada Lovelace"));

        session.user.as_mut().unwrap().name = None;
        assert_eq!(session.display_name(), Some("ada"));
    }
}
