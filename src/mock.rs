//! Canned listings for demos and tests. There is no listings backend; [search]
//! accepts the same filters the search form offers and ignores them.

use crate::property::Property;
use serde::{Deserialize, Serialize};

const DESCRIPTION: &str = "Casa en venta en Tamaulipas, con excelente ubicación y seguridad las 24 horas. Esta propiedad cuenta con 3 recámaras más una con su baño y walk-in closet, 2 cajones de estacionamiento, patio con acceso a jardín privado de la colonia, cuarto de servicio, cocina equipada, cisterna, portón automatizado. Con una antigüedad de 20 años, en 200m2 de terreno con 7.5 metros de frente y 241 metros de construcción. Esta casa es ideal para una familia que busca comodidad y tranquilidad.";

const FACHADA: &str = "https://images.unsplash.com/photo-1580587771525-78b9dba3b914?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80";
const SALA: &str = "https://images.unsplash.com/photo-1583608205776-bfd35f0d9f83?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80";
const ALBERCA: &str = "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80";

/// Search form filters. Every field is optional free text, as typed by the user.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchParams {
    pub estado: Option<String>,
    pub municipio: Option<String>,
    pub zona: Option<String>,
    pub colonia: Option<String>,
    pub tipo: Option<String>,
    pub precio_min: Option<f64>,
    pub precio_max: Option<f64>,
    pub id: Option<String>,
    pub mts2_terreno: Option<f64>,
    pub mts2_construccion: Option<f64>,
    pub recamaras: Option<u32>,
    pub banos: Option<u32>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The demo listings
pub fn properties() -> Vec<Property> {
    let features = [
        "Alberca",
        "Jardín",
        "Seguridad",
        "Estacionamiento",
        "Amueblado parcialmente",
    ];

    let base = Property {
        id: String::new(),
        title: "Casa en Venta en Carretera Nacional, Monterrey, NL".to_string(),
        description: DESCRIPTION.to_string(),
        price: 13_450_000.0,
        location: "Colonia Las Fresnos, Monterrey, NL".to_string(),
        images: Vec::new(),
        bedrooms: 0,
        bathrooms: 0,
        land_area: 0.0,
        construction_area: 0.0,
        features: strings(&features),
        publisher: "Eduardo Ibarra".to_string(),
        contact: "XXXXXXXXXX".to_string(),
        publisher_logo: Some("https://via.placeholder.com/50".to_string()),
    };

    let mut with_terrace = base.features.clone();
    with_terrace.push("Terraza".to_string());

    vec![
        Property {
            id: "0000001".to_string(),
            images: strings(&[FACHADA, SALA, ALBERCA]),
            bedrooms: 3,
            bathrooms: 2,
            land_area: 200.0,
            construction_area: 241.0,
            features: with_terrace,
            ..base.clone()
        },
        Property {
            id: "0000002".to_string(),
            images: strings(&[ALBERCA, FACHADA, SALA]),
            bedrooms: 4,
            bathrooms: 3,
            land_area: 250.0,
            construction_area: 280.0,
            ..base
        },
    ]
}

/// Look up listings matching `params`. There is no index behind this; every
/// search returns the demo listings.
pub fn search(params: &SearchParams) -> Vec<Property> {
    tracing::debug!(?params, "mock search ignores filters");
    properties()
}

/// A demo listing by id
pub fn find(id: &str) -> Option<Property> {
    properties().into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_listings_are_distinct() {
        let list = properties();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, "0000001");
        assert_eq!(list[1].id, "0000002");
        assert_eq!(list[0].features.last().map(String::as_str), Some("Terraza"));
        assert_eq!(list[1].features.len(), 5);
        assert!(list.iter().all(|p| p.images.len() == 3));
    }

    #[test]
    fn search_ignores_filters() {
        let params = SearchParams {
            recamaras: Some(7),
            ..SearchParams::default()
        };
        assert_eq!(search(&params), properties());
        assert!(find("0000002").is_some());
        assert!(find("9999999").is_none());
    }

    #[test]
    fn demo_listings_survive_json() {
        let json = serde_json::to_string(&properties()).expect("serialises");
        assert!(json.contains("\"landArea\":200.0"));
        let back = Property::list_from_json(&json).expect("deserialises");
        assert_eq!(back, properties());
    }
}
