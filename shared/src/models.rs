use serde::{Deserialize, Deserializer, Serialize};

/// Profile of the signed-in user as reported by the session-check endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable subject identifier from the identity provider
    pub sub: String,
    /// Empty when the provider did not share it
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

// The backend copies provider claims as-is, so name and email may be null
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// What to show in the avatar slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Picture(String),
    Initials(String),
}

impl UserProfile {
    /// First character of each space-separated token of the display name.
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|token| token.chars().next())
            .collect()
    }

    /// Picture URL when one is present, initials otherwise.
    pub fn avatar(&self) -> Avatar {
        match self.picture.as_deref() {
            Some(url) if !url.is_empty() => Avatar::Picture(url.to_string()),
            _ => Avatar::Initials(self.initials()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, picture: Option<&str>) -> UserProfile {
        UserProfile {
            sub: "1".to_string(),
            name: name.to_string(),
            email: "ada@example.com".to_string(),
            picture: picture.map(str::to_string),
        }
    }

    #[test]
    fn test_initials_from_two_tokens() {
        assert_eq!(profile("Ada Lovelace", None).initials(), "AL");
    }

    #[test]
    fn test_initials_edge_cases() {
        assert_eq!(profile("Plato", None).initials(), "P");
        assert_eq!(profile("Ada  King Lovelace", None).initials(), "AKL");
        assert_eq!(profile("", None).initials(), "");
        assert_eq!(profile("émile zola", None).initials(), "éz");
    }

    #[test]
    fn test_avatar_prefers_picture() {
        let user = profile("Ada Lovelace", Some("https://example.com/ada.png"));
        assert_eq!(
            user.avatar(),
            Avatar::Picture("https://example.com/ada.png".to_string())
        );
    }

    #[test]
    fn test_avatar_falls_back_to_initials() {
        assert_eq!(
            profile("Ada Lovelace", None).avatar(),
            Avatar::Initials("AL".to_string())
        );
        assert_eq!(
            profile("Ada Lovelace", Some("")).avatar(),
            Avatar::Initials("AL".to_string())
        );
    }

    #[test]
    fn test_null_or_missing_claims_become_empty() {
        let user: UserProfile =
            serde_json::from_str(r#"{"sub":"1","name":null,"email":null}"#).unwrap();
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
        assert_eq!(user.avatar(), Avatar::Initials(String::new()));

        let user: UserProfile = serde_json::from_str(r#"{"sub":"1"}"#).unwrap();
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_sub_is_required() {
        assert!(serde_json::from_str::<UserProfile>(r#"{"name":"Ada"}"#).is_err());
    }

    #[test]
    fn test_picture_omitted_when_absent() {
        let json = serde_json::to_string(&profile("Ada Lovelace", None)).unwrap();
        assert_eq!(
            json,
            r#"{"sub":"1","name":"Ada Lovelace","email":"ada@example.com"}"#
        );
    }
}
