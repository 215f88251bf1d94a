//! Report configuration. Every field has a default matching the printed reports,
//! so a config file only needs to name what it changes:
//!
//! ```json
//! { "paper": "letter", "gallery": { "columns": 3 }, "single": { "page_numbers": true } }
//! ```

use crate::error::ConfigError;
use crate::layout::{Margins, PageGeometry};
use crate::pagesize::Paper;
use crate::units::{Mm, Pt};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Printed on the cover, in headers and footers, and used in filenames
    pub brand: String,
    /// Printed bottom-right on every page
    pub site_url: String,
    pub paper: Paper,
    /// Margin on all four sides
    pub margin_mm: f32,
    /// Space left below every block
    pub padding_mm: f32,
    pub gallery: GalleryConfig,
    pub single: SingleConfig,
    pub multi: MultiConfig,
    /// Per-image fetch timeout; `null` waits forever
    pub image_timeout_secs: Option<u64>,
    /// Repeat section and gallery headings, suffixed, when they break onto a new page
    pub continuation_headings: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            brand: "Inmobidata".to_string(),
            site_url: "www.inmobidata.com".to_string(),
            paper: Paper::A4,
            margin_mm: 10.0,
            padding_mm: 5.0,
            gallery: GalleryConfig::default(),
            single: SingleConfig::default(),
            multi: MultiConfig::default(),
            image_timeout_secs: Some(30),
            continuation_headings: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub columns: usize,
    pub max_image_height_mm: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            columns: 2,
            max_image_height_mm: 70.0,
        }
    }
}

/// Single-property reports
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleConfig {
    /// Stamp "Página i de N" in the footer
    pub page_numbers: bool,
    /// Longest description printed, in characters; `null` prints it all
    pub description_budget: Option<usize>,
}

/// Multi-property reports. These always carry page numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiConfig {
    /// Longest description printed per listing, in characters
    pub description_budget: Option<usize>,
}

impl Default for MultiConfig {
    fn default() -> Self {
        MultiConfig {
            description_budget: Some(200),
        }
    }
}

impl ReportConfig {
    pub fn from_json(json: &str) -> Result<ReportConfig, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<ReportConfig, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ReportConfig::from_json(&json)
    }

    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::new(self.paper.size(), Margins::all(Mm(self.margin_mm)))
    }

    pub fn padding(&self) -> Pt {
        Mm(self.padding_mm).into()
    }

    /// Filename of a single-property report
    pub fn single_filename(&self, id: &str) -> String {
        format!("{}-Propiedad-{id}.pdf", self.brand)
    }

    /// Filename of a multi-property report
    pub fn multi_filename(&self) -> String {
        format!("{}-Propiedades-Seleccionadas.pdf", self.brand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_configs_keep_defaults() {
        let config =
            ReportConfig::from_json(r#"{ "paper": "letter", "gallery": { "columns": 3 } }"#)
                .expect("valid config");
        assert_eq!(config.paper, Paper::Letter);
        assert_eq!(config.gallery.columns, 3);
        assert_eq!(config.gallery.max_image_height_mm, 70.0);
        assert_eq!(config.multi.description_budget, Some(200));
        assert_eq!(config.single.description_budget, None);
        assert!(!config.single.page_numbers);
        assert_eq!(config.image_timeout_secs, Some(30));
    }

    #[test]
    fn timeouts_can_be_disabled() {
        let config = ReportConfig::from_json(r#"{ "image_timeout_secs": null }"#).expect("valid");
        assert_eq!(config.image_timeout_secs, None);
    }

    #[test]
    fn filenames_carry_the_brand() {
        let config = ReportConfig::default();
        assert_eq!(
            config.single_filename("0000001"),
            "Inmobidata-Propiedad-0000001.pdf"
        );
        assert_eq!(
            config.multi_filename(),
            "Inmobidata-Propiedades-Seleccionadas.pdf"
        );
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.json");
        std::fs::write(&path, r#"{ "brand": "Casas MX" }"#).expect("write config");
        let config = ReportConfig::load(&path).expect("loads");
        assert_eq!(config.brand, "Casas MX");
        assert!(matches!(
            ReportConfig::load(dir.path().join("missing.json")),
            Err(ConfigError::Io { .. })
        ));
        assert!(matches!(
            ReportConfig::from_json("{ nope"),
            Err(ConfigError::Parse(_))
        ));
    }
}
