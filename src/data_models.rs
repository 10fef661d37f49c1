use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Listing identifier. The backend has served both string and numeric ids,
/// so either is accepted and held as text.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(id: &str) -> Self {
        ListingId(id.to_string())
    }
}

impl From<String> for ListingId {
    fn from(id: String) -> Self {
        ListingId(id)
    }
}

impl<'de> Deserialize<'de> for ListingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => ListingId(s),
            RawId::Number(n) => ListingId(n.to_string()),
        })
    }
}

/// A gift as returned by the Listings API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: ListingId,

    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Listing {
    pub fn new(id: impl Into<ListingId>, name: impl Into<String>) -> Listing {
        Listing {
            id: id.into(),
            name: name.into(),
            description: None,
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Listing {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Listing {
        self.image = Some(image.into());
        self
    }
}

// an empty string renders the same as a missing field
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids() {
        let listings: Vec<Listing> =
            serde_json::from_str(r#"[{"id": 42, "name": "lamp"}, {"id": "7", "name": "desk"}]"#)
                .unwrap();
        assert_eq!(listings[0].id.as_str(), "42");
        assert_eq!(listings[1].id.as_str(), "7");
    }

    #[test]
    fn test_optional_fields() {
        let listing: Listing = serde_json::from_str(
            r#"{"id": "1", "name": "chair", "description": "", "image": null, "age_years": 3}"#,
        )
        .unwrap();
        assert_eq!(listing.description, None);
        assert_eq!(listing.image, None);

        let listing: Listing = serde_json::from_str(r#"{"id": "2"}"#).unwrap();
        assert_eq!(listing.name, "");
    }

    #[test]
    fn test_missing_id_is_an_error() {
        let res = serde_json::from_str::<Listing>(r#"{"name": "chair"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let listing = Listing::new("9", "rug").with_image("/images/rug.png");
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "9", "name": "rug", "image": "/images/rug.png"})
        );
    }
}
