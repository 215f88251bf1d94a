use serde::{Deserialize, Serialize};

/// A listing, as the report engine receives it. Field names follow the camelCase
/// JSON the listings API produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Asking price in Mexican pesos
    pub price: f64,
    #[serde(default)]
    pub location: String,
    /// Photo URLs, in gallery order
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    /// Land area in m²
    #[serde(default)]
    pub land_area: f64,
    /// Built area in m²
    #[serde(default)]
    pub construction_area: f64,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub contact: String,
    /// Accepted for compatibility; reports don't draw it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_logo: Option<String>,
}

impl Property {
    /// Load a JSON array of listings
    pub fn list_from_json(json: &str) -> Result<Vec<Property>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialises_camel_case_listings() {
        let json = r#"[{
            "id": "0000009",
            "title": "Departamento en renta",
            "price": 18500,
            "images": ["https://example.com/a.jpg"],
            "bedrooms": 2,
            "bathrooms": 1,
            "landArea": 0,
            "constructionArea": 85.5,
            "features": ["Elevador"],
            "publisherLogo": "https://via.placeholder.com/50"
        }]"#;
        let list = Property::list_from_json(json).expect("valid listing");
        assert_eq!(list.len(), 1);
        let p = &list[0];
        assert_eq!(p.construction_area, 85.5);
        assert_eq!(p.features, vec!["Elevador"]);
        assert!(p.description.is_empty());
        assert_eq!(p.publisher_logo.as_deref(), Some("https://via.placeholder.com/50"));
    }

    #[test]
    fn rejects_listings_without_a_price() {
        assert!(Property::list_from_json(r#"[{"id": "1", "title": "x"}]"#).is_err());
    }
}
