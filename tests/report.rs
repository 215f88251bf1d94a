use chrono::NaiveDate;
use image::{DynamicImage, ImageOutputFormat};
use inmobidata_report::{
    mock, Document, GenerationError, MemoryImageLoader, Property, ReportComposer, ReportConfig,
};
use std::io::Cursor;

fn png(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::new_rgb8(width, height)
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .expect("can encode png");
    bytes
}

/// Serves every demo photo as a small 3:2 image, plus one portrait photo
fn loader() -> MemoryImageLoader {
    let mut loader = MemoryImageLoader::new();
    for property in mock::properties() {
        for url in property.images {
            loader.insert(url, png(90, 60));
        }
    }
    loader.insert("retrato.png", png(40, 120));
    loader
}

fn composer() -> ReportComposer<MemoryImageLoader> {
    let date = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");
    ReportComposer::new(ReportConfig::default(), loader()).with_date(date)
}

fn three_listings() -> Vec<Property> {
    let mut listings = mock::properties();
    let mut third = listings[0].clone();
    third.id = "0000003".to_string();
    third.title = "Departamento en San Pedro Garza García".to_string();
    third.images.push("retrato.png".to_string());
    listings.push(third);
    listings
}

fn page_texts(document: &Document, page_index: usize) -> Vec<String> {
    document
        .page(page_index)
        .map(|p| p.spans().map(|s| s.text.clone()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn single_report_with_a_gallery() {
    let property = &mock::properties()[0];
    let composer = composer();

    let document = composer.build_single(property).await;
    assert_eq!(document.images.len(), 3);
    let placed: usize = document.iter_pages().map(|p| p.images().count()).sum();
    assert_eq!(placed, 3);

    let report = composer
        .generate_single(property)
        .await
        .expect("report generates");
    assert_eq!(report.filename(), "Inmobidata-Propiedad-0000001.pdf");
    assert!(report.bytes().starts_with(b"%PDF-"));
    assert!(report.page_count() >= 1);
}

#[tokio::test]
async fn multi_report_with_one_listing_is_a_single_report() {
    let listings = vec![mock::properties()[1].clone()];
    let composer = composer();

    let report = composer
        .generate_multi(&listings)
        .await
        .expect("report generates");
    assert_eq!(report.filename(), "Inmobidata-Propiedad-0000002.pdf");

    let document = composer.build_multi(&listings).await.expect("one listing");
    // no cover: the first page opens with the brand and the listing itself
    let first = page_texts(&document, 0);
    assert_eq!(first[1], listings[0].title);
    assert!(!first.iter().any(|t| t.starts_with("Total de propiedades")));
    assert!(document.outline.is_empty());
}

#[tokio::test]
async fn multi_report_has_a_cover_and_footers_on_every_page() {
    let listings = three_listings();
    let composer = composer();

    let document = composer.build_multi(&listings).await.expect("three listings");
    let total = document.page_count();
    assert!(total >= 4, "cover plus one page per listing, got {total}");
    assert!(page_texts(&document, 0).contains(&"Total de propiedades: 3".to_string()));

    for i in 0..total {
        let texts = page_texts(&document, i);
        assert!(texts.contains(&"Generado por Inmobidata el 19/10/2026".to_string()));
        assert!(texts.contains(&format!("Página {} de {total}", i + 1)));
        assert!(texts.contains(&"www.inmobidata.com".to_string()));
    }

    // no two listings share a page
    let starts: Vec<usize> = document.outline.entries.iter().map(|e| e.page_index).collect();
    assert_eq!(starts.len(), 3);
    assert!(starts.windows(2).all(|w| w[0] < w[1]));
    assert!(starts[0] >= 1);

    let report = composer
        .generate_multi(&listings)
        .await
        .expect("report generates");
    assert_eq!(report.filename(), "Inmobidata-Propiedades-Seleccionadas.pdf");
    assert_eq!(report.page_count(), total);
    assert!(report.bytes().starts_with(b"%PDF-"));
}

#[tokio::test]
async fn shared_photos_are_embedded_once() {
    let document = composer()
        .build_multi(&three_listings())
        .await
        .expect("three listings");
    // three shared demo photos plus the portrait
    assert_eq!(document.images.len(), 4);
}

#[tokio::test]
async fn missing_photos_do_not_fail_the_report() {
    let mut property = mock::properties()[0].clone();
    property.images = vec![
        "https://example.invalid/perdida.jpg".to_string(),
        "retrato.png".to_string(),
    ];

    let document = composer().build_single(&property).await;
    let placed: usize = document.iter_pages().map(|p| p.images().count()).sum();
    assert_eq!(placed, 1);
}

#[tokio::test]
async fn content_never_crosses_the_bottom_margin() {
    let mut property = mock::properties()[0].clone();
    property.description = lipsum::lipsum(1500);
    property.images = std::iter::repeat("retrato.png".to_string()).take(9).collect();

    let config = ReportConfig::default();
    let geometry = config.geometry();
    let document = composer().build_single(&property).await;
    assert!(document.page_count() > 2);

    for page in document.iter_pages() {
        for image in page.images() {
            // PDF space: y grows upwards from the bottom edge
            assert!(image.position.y1 >= geometry.margins.bottom - inmobidata_report::Pt(0.01));
            assert!(image.position.y2 <= geometry.height() - geometry.margins.top + inmobidata_report::Pt(0.01));
        }
    }
}

#[tokio::test]
async fn empty_selection_is_rejected() {
    let result = composer().generate_multi(&[]).await;
    let Err(err) = result else {
        panic!("an empty selection must not produce a report");
    };
    assert!(matches!(err, GenerationError::NoProperties));
    assert_eq!(
        err.to_string(),
        "PDF generation failed: no properties were provided"
    );
}

#[tokio::test]
async fn reports_save_under_their_own_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = composer()
        .generate_multi(&three_listings())
        .await
        .expect("report generates");
    let path = report.save(dir.path()).expect("saves");
    assert!(path.ends_with("Inmobidata-Propiedades-Seleccionadas.pdf"));
    let on_disk = std::fs::read(&path).expect("readable");
    assert!(on_disk.starts_with(b"%PDF-"));
}
