use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ad platform the copy is generated for
pub const DEFAULT_AD_PLATFORM: &str = "facebook";

/// Length of a generated video script, seconds
pub const DEFAULT_VIDEO_DURATION: u32 = 30;

/// Audience passed to the product description generator
pub const DEFAULT_TARGET_AUDIENCE: &str = "general";

/// Body of `POST /api/marketing/generate-ad-copy`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdCopyRequest {
    pub product_title: String,
    pub product_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    pub platform: String,
}

impl AdCopyRequest {
    pub fn new(product_title: impl Into<String>, product_description: impl Into<String>) -> Self {
        Self {
            product_title: product_title.into(),
            product_description: product_description.into(),
            target_audience: None,
            platform: DEFAULT_AD_PLATFORM.to_string(),
        }
    }
}

/// Generated ad copy bundle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdCopy {
    pub headlines: Vec<String>,
    pub body_copy: Vec<String>,
    pub call_to_actions: Vec<String>,
    /// Free-form audience objects; see [`Audience::from_value`]
    pub target_audiences: Vec<Value>,
}

/// Display view of one target audience
#[derive(Debug, Clone, PartialEq)]
pub struct Audience {
    pub name: String,
    pub age: String,
}

impl Audience {
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| match value.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Self {
            name: text("name"),
            age: text("age"),
        }
    }
}

impl AdCopy {
    pub fn audiences(&self) -> Vec<Audience> {
        self.target_audiences.iter().map(Audience::from_value).collect()
    }
}

/// Query of `POST /api/marketing/generate-video-script`; the body is the list of key benefits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoScriptQuery {
    pub product_title: String,
    pub duration: u32,
}

/// Query of `POST /api/marketing/generate-email-sequence`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSequenceQuery {
    pub product_title: String,
}

/// Query of `POST /api/marketing/generate-product-description`; the body is the list of features
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDescriptionQuery {
    pub product_title: String,
    pub target_audience: String,
}

/// Splits a free-text description into selling points.
///
/// Lines and commas both separate points; blanks are dropped.
pub fn selling_points(description: &str) -> Vec<String> {
    description
        .split(|c| c == '\n' || c == ',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body() {
        let body = serde_json::to_value(AdCopyRequest::new("Wireless Earbuds Pro", "Noise cancelling")).unwrap();
        assert_eq!(
            body,
            json!({
                "product_title": "Wireless Earbuds Pro",
                "product_description": "Noise cancelling",
                "platform": "facebook"
            })
        );
    }

    #[test]
    fn test_response_with_audiences() {
        let copy: AdCopy = serde_json::from_value(json!({
            "headlines": ["Hear Everything", "Silence the World"],
            "body_copy": ["Premium sound."],
            "call_to_actions": ["Shop Now"],
            "target_audiences": [
                { "name": "Commuters", "age": "25-40" },
                { "name": "Gym goers", "age": 30 },
                { "interests": ["music"] }
            ]
        }))
        .unwrap();

        assert_eq!(copy.headlines.len(), 2);
        let audiences = copy.audiences();
        assert_eq!(audiences[0], Audience { name: "Commuters".into(), age: "25-40".into() });
        assert_eq!(audiences[1].age, "30");
        assert_eq!(audiences[2].name, "");
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let copy: AdCopy = serde_json::from_value(json!({ "headlines": ["Only one"] })).unwrap();
        assert_eq!(copy.headlines, vec!["Only one".to_string()]);
        assert!(copy.body_copy.is_empty());
        assert!(copy.audiences().is_empty());
    }

    #[test]
    fn test_selling_points() {
        let points = selling_points("Noise cancellation, 30h battery\n\n  IPX5 water resistant ,");
        assert_eq!(
            points,
            vec!["Noise cancellation", "30h battery", "IPX5 water resistant"]
        );
        assert!(selling_points("   ").is_empty());
    }
}
