//! Turning listings into finished report documents.
//!
//! A report is built in two passes. The first lays every listing out through a
//! single [PageCursor], creating pages as it goes. The second, [stamp_footers],
//! walks the finished page list and stamps each page's footer, which is the first
//! point at which the page count is known.

use crate::colour::colours;
use crate::config::ReportConfig;
use crate::document::Document;
use crate::error::GenerationError;
use crate::font::Font;
use crate::format::{format_area, format_date, format_price, truncate_description};
use crate::image::Image;
use crate::info::Info;
use crate::layout::{
    draw_line, layout_gallery, layout_paragraph, layout_rule, layout_section, Align, Continuation,
    EmbeddedImages, Field, GalleryOptions, Margins, PageCursor, SectionBody, SectionStyle,
    TextStyle,
};
use crate::loader::ImageLoader;
use crate::page::{ImageLayout, Page};
use crate::property::Property;
use crate::rect::Rect;
use crate::report::Report;
use crate::units::{Mm, Pt};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, info};

const CONTINUED: &str = " (continuación)";
const MULTI_TITLE: &str = "Reporte de Propiedades Seleccionadas";
/// Gap above a snapshot, and the least left below it
const SNAPSHOT_MARGIN: Mm = Mm(10.0);

/// Fonts and text styles of one document. Font ids belong to the document they
/// were registered with.
struct Styles {
    brand: TextStyle,
    cover_brand: TextStyle,
    title: TextStyle,
    cover_body: TextStyle,
    price: TextStyle,
    section: SectionStyle,
    publisher: SectionStyle,
    footer: TextStyle,
}

impl Styles {
    fn register(document: &mut Document, continuation_headings: bool) -> Styles {
        let regular = document.add_font(Font::Helvetica);
        let bold = document.add_font(Font::HelveticaBold);

        let body = TextStyle::new(regular, Pt(12.0), colours::BLACK);
        let brand = TextStyle::new(bold, Pt(20.0), colours::BRAND_BLUE);
        let section = SectionStyle {
            heading: TextStyle::new(bold, Pt(14.0), colours::BRAND_BLUE),
            body,
            indent: Mm(5.0).into(),
            continuation_suffix: continuation_headings.then(|| CONTINUED.to_string()),
        };

        Styles {
            brand,
            cover_brand: brand.with_size(Pt(22.0)),
            title: TextStyle::new(bold, Pt(16.0), colours::BLACK),
            cover_body: body,
            price: TextStyle::new(bold, Pt(14.0), colours::BRAND_BLUE),
            publisher: SectionStyle {
                body: body.with_colour(colours::MUTED),
                ..section.clone()
            },
            section,
            footer: TextStyle::new(regular, Pt(10.0), colours::FAINT),
        }
    }
}

/// Which kind of report a listing is being drawn into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Single,
    Multi,
}

/// The footer stamped on every page of a report
#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    /// Bottom-left
    pub generated: String,
    /// Bottom-right
    pub site_url: String,
    /// Stamp "Página i de N" bottom-centre
    pub page_numbers: bool,
    pub style: TextStyle,
}

/// Stamp `footer` onto every page of `document`, halfway into the bottom margin.
/// Run once, after all content has been laid out.
pub fn stamp_footers(document: &mut Document, footer: &Footer, margins: Margins) {
    let total = document.page_count();
    let ascent = document.font(footer.style.font).ascent(footer.style.size);

    for page_index in 0..total {
        let Some((width, height)) = document.page(page_index).map(|p| (p.width(), p.height()))
        else {
            continue;
        };
        let baseline = height - margins.bottom / 2.0;
        let top = baseline - ascent;

        draw_line(
            document,
            page_index,
            &footer.generated,
            footer.style,
            margins.left,
            top,
            Align::Left,
        );
        if footer.page_numbers {
            draw_line(
                document,
                page_index,
                &format!("Página {} de {total}", page_index + 1),
                footer.style,
                width / 2.0,
                top,
                Align::Centre,
            );
        }
        draw_line(
            document,
            page_index,
            &footer.site_url,
            footer.style,
            width - margins.right,
            top,
            Align::Right,
        );
    }
}

/// Size of a snapshot on a `page_width` x `page_height` page: full width, unless
/// that would leave less than 10 mm above and below it, in which case
/// it is scaled down to fit between the two. `aspect_ratio` is height over width.
pub fn fit_snapshot(aspect_ratio: f32, page_width: Pt, page_height: Pt) -> (Pt, Pt) {
    let max_height = page_height - Pt::from(SNAPSHOT_MARGIN) * 2.0;
    let height = page_width * aspect_ratio;
    if height > max_height && aspect_ratio > 0.0 {
        (max_height / aspect_ratio, max_height)
    } else {
        (page_width, height)
    }
}

/// Builds single- and multi-property reports, fetching gallery images through `L`
pub struct ReportComposer<L> {
    config: ReportConfig,
    loader: L,
    generated_at: Option<DateTime<FixedOffset>>,
}

impl<L: ImageLoader> ReportComposer<L> {
    pub fn new(config: ReportConfig, loader: L) -> ReportComposer<L> {
        ReportComposer {
            config,
            loader,
            generated_at: None,
        }
    }

    /// Stamp reports with a fixed generation time instead of the current time
    pub fn with_timestamp(mut self, generated_at: DateTime<FixedOffset>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// Stamp reports as generated at midnight (UTC) of `date`
    pub fn with_date(self, date: NaiveDate) -> Self {
        let midnight = NaiveDateTime::new(date, NaiveTime::default());
        self.with_timestamp(midnight.and_utc().fixed_offset())
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    fn timestamp(&self) -> DateTime<FixedOffset> {
        self.generated_at
            .unwrap_or_else(|| Local::now().fixed_offset())
    }

    /// Lay out the report for one listing. The first page carries the brand and
    /// title; there is no cover.
    pub async fn build_single(&self, property: &Property) -> Document {
        let generated_at = self.timestamp();
        let mut document = Document::default();
        let styles = Styles::register(&mut document, self.config.continuation_headings);
        let mut images = EmbeddedImages::new();
        let mut cursor =
            PageCursor::begin(&mut document, self.config.geometry(), self.config.padding());

        layout_paragraph(
            &mut document,
            &mut cursor,
            &self.config.brand.to_uppercase(),
            styles.brand,
            Align::Centre,
        );
        layout_paragraph(
            &mut document,
            &mut cursor,
            &property.title,
            styles.title,
            Align::Centre,
        );
        layout_rule(&mut document, &mut cursor, colours::RULE);
        self.layout_property(
            &mut document,
            &mut cursor,
            &mut images,
            &styles,
            property,
            Shape::Single,
        )
        .await;

        let info = Info::new(&property.title, &self.config.brand, generated_at)
            .with_subject(format!("Propiedad {}", property.id))
            .with_keywords(["inmobiliaria", "propiedad", "reporte"]);
        self.finish(
            &mut document,
            info,
            &styles,
            generated_at,
            self.config.single.page_numbers,
        );
        document
    }

    /// Lay out the combined report for several listings: a cover page, then each
    /// listing starting on a page of its own, bookmarked. A single listing gets the
    /// single-listing report instead.
    pub async fn build_multi(&self, properties: &[Property]) -> Result<Document, GenerationError> {
        match properties {
            [] => return Err(GenerationError::NoProperties),
            [property] => return Ok(self.build_single(property).await),
            _ => {}
        }

        let generated_at = self.timestamp();
        let mut document = Document::default();
        let styles = Styles::register(&mut document, self.config.continuation_headings);
        let mut images = EmbeddedImages::new();
        let mut cursor =
            PageCursor::begin(&mut document, self.config.geometry(), self.config.padding());

        self.layout_cover(&mut document, &cursor, &styles, generated_at, properties.len());

        for (i, property) in properties.iter().enumerate() {
            let heading = format!("Propiedad {}: {}", i + 1, property.title);
            let page_index = cursor.new_page(&mut document);
            debug!(id = %property.id, page_index, "laying out listing");
            document.add_bookmark(&heading, page_index);

            layout_paragraph(
                &mut document,
                &mut cursor,
                &heading,
                styles.title,
                Align::Centre,
            );
            layout_rule(&mut document, &mut cursor, colours::RULE);
            self.layout_property(
                &mut document,
                &mut cursor,
                &mut images,
                &styles,
                property,
                Shape::Multi,
            )
            .await;
        }

        let info = Info::new(MULTI_TITLE, &self.config.brand, generated_at)
            .with_subject(format!("{} propiedades", properties.len()))
            .with_keywords(["inmobiliaria", "propiedades", "reporte"]);
        self.finish(&mut document, info, &styles, generated_at, true);
        Ok(document)
    }

    /// Build and serialise the report for one listing
    pub async fn generate_single(&self, property: &Property) -> Result<Report, GenerationError> {
        info!(id = %property.id, "generating property report");
        let document = self.build_single(property).await;
        Report::render(self.config.single_filename(&property.id), document)
    }

    /// Build and serialise the combined report for `properties`
    pub async fn generate_multi(
        &self,
        properties: &[Property],
    ) -> Result<Report, GenerationError> {
        if let [property] = properties {
            return self.generate_single(property).await;
        }
        info!(count = properties.len(), "generating combined report");
        let document = self.build_multi(properties).await?;
        Report::render(self.config.multi_filename(), document)
    }

    /// A one-page report of a single captured image, e.g. a screenshot of a listing
    /// page. The image is fetched through the loader; unlike in a gallery, failing to
    /// load it fails the whole report.
    pub async fn generate_snapshot<S: ToString>(
        &self,
        url: &str,
        filename: S,
    ) -> Result<Report, GenerationError> {
        let filename = filename.to_string();
        info!(%filename, "generating snapshot report");
        let image = self.loader.load(url).await?;
        Report::render(filename, self.build_snapshot(image))
    }

    /// Lay `image` out alone on a page, centred horizontally a fixed distance below
    /// the top edge. No footers.
    pub fn build_snapshot(&self, image: Image) -> Document {
        let generated_at = self.timestamp();
        let mut document = Document::default();
        let size = self.config.paper.size();
        let (page_width, page_height) = (size.0, size.1);
        let (width, height) = fit_snapshot(image.aspect_ratio(), page_width, page_height);
        let x = (page_width - width) / 2.0;
        debug!(%width, %height, "snapshot fitted");

        let image_id = document.add_image(image);
        let mut page = Page::new(size, None);
        page.add_image(ImageLayout {
            image_id,
            position: Rect::from_top(x, SNAPSHOT_MARGIN.into(), width, height, page_height),
        });
        document.add_page(page);
        document.set_info(
            Info::new(&self.config.brand, &self.config.brand, generated_at)
                .with_subject("Captura"),
        );
        document
    }

    /// Everything below a listing's title, in print order
    async fn layout_property(
        &self,
        document: &mut Document,
        cursor: &mut PageCursor,
        images: &mut EmbeddedImages,
        styles: &Styles,
        property: &Property,
        shape: Shape,
    ) {
        let gallery = GalleryOptions {
            columns: self.config.gallery.columns,
            max_image_height: Mm(self.config.gallery.max_image_height_mm).into(),
            padding: self.config.padding(),
            continuation: self.config.continuation_headings.then(|| Continuation {
                text: format!("{}{CONTINUED}", property.title),
                style: styles.title,
            }),
        };
        let outcome =
            layout_gallery(document, cursor, images, &self.loader, &property.images, &gallery)
                .await;
        if outcome.skipped > 0 {
            info!(
                id = %property.id,
                placed = outcome.placed.len(),
                skipped = outcome.skipped,
                "gallery incomplete"
            );
        }

        layout_paragraph(
            document,
            cursor,
            &format!("Precio: {}", format_price(property.price)),
            styles.price,
            Align::Left,
        );

        match shape {
            Shape::Single => {
                let fields = [
                    Field::new("Ubicación", &property.location),
                    Field::new("Recámaras", property.bedrooms),
                    Field::new("Baños", property.bathrooms),
                    Field::new("Terreno", format_area(property.land_area)),
                    Field::new("Construcción", format_area(property.construction_area)),
                ];
                layout_section(document, cursor, None, SectionBody::Fields(&fields), &styles.section);
            }
            Shape::Multi => {
                let lines = [
                    format!("Ubicación: {}", property.location),
                    format!(
                        "Recámaras: {} | Baños: {}",
                        property.bedrooms, property.bathrooms
                    ),
                    format!(
                        "Terreno: {} | Construcción: {}",
                        format_area(property.land_area),
                        format_area(property.construction_area)
                    ),
                ];
                layout_section(document, cursor, None, SectionBody::Lines(&lines), &styles.section);
            }
        }

        layout_section(
            document,
            cursor,
            Some("Características:"),
            SectionBody::Items(&property.features),
            &styles.section,
        );

        let budget = match shape {
            Shape::Single => self.config.single.description_budget,
            Shape::Multi => self.config.multi.description_budget,
        };
        let description = truncate_description(&property.description, budget);
        layout_section(
            document,
            cursor,
            Some("Descripción:"),
            SectionBody::Text(&description),
            &styles.section,
        );

        if shape == Shape::Single {
            let publisher: Vec<Field> = [
                Field::new("Publicado por", &property.publisher),
                Field::new("Contacto", &property.contact),
            ]
            .into_iter()
            .filter(|f| !f.value.trim().is_empty())
            .collect();
            layout_section(
                document,
                cursor,
                None,
                SectionBody::Fields(&publisher),
                &styles.publisher,
            );
        }
    }

    /// Centred lines at fixed heights on the current (first) page
    fn layout_cover(
        &self,
        document: &mut Document,
        cursor: &PageCursor,
        styles: &Styles,
        generated_at: DateTime<FixedOffset>,
        count: usize,
    ) {
        let geometry = *cursor.geometry();
        let first_baseline = geometry.height() / 3.0;
        let lines = [
            (self.config.brand.to_uppercase(), styles.cover_brand, Mm(0.0)),
            (MULTI_TITLE.to_string(), styles.title, Mm(15.0)),
            (
                format!("Generado el: {}", format_date(generated_at.date_naive())),
                styles.cover_body,
                Mm(30.0),
            ),
            (
                format!("Total de propiedades: {count}"),
                styles.cover_body,
                Mm(40.0),
            ),
        ];

        for (text, style, offset) in lines {
            let ascent = document.font(style.font).ascent(style.size);
            let baseline = first_baseline + Pt::from(offset);
            draw_line(
                document,
                cursor.page_index(),
                &text,
                style,
                geometry.centre_x(),
                baseline - ascent,
                Align::Centre,
            );
        }
    }

    fn finish(
        &self,
        document: &mut Document,
        info: Info,
        styles: &Styles,
        generated_at: DateTime<FixedOffset>,
        page_numbers: bool,
    ) {
        let footer = Footer {
            generated: format!(
                "Generado por {} el {}",
                self.config.brand,
                format_date(generated_at.date_naive())
            ),
            site_url: self.config.site_url.clone(),
            page_numbers,
            style: styles.footer,
        };
        stamp_footers(document, &footer, self.config.geometry().margins);
        document.set_info(info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImageFetchError;
    use crate::loader::{testing, MemoryImageLoader, OfflineImageLoader};
    use crate::mock;
    use crate::pagesize::A4;
    use image::{DynamicImage, ImageOutputFormat};
    use std::io::Cursor;

    fn composer() -> ReportComposer<OfflineImageLoader> {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date");
        ReportComposer::new(ReportConfig::default(), OfflineImageLoader).with_date(date)
    }

    fn texts(document: &Document, page_index: usize) -> Vec<String> {
        document
            .page(page_index)
            .map(|p| p.spans().map(|s| s.text.clone()).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn single_report_starts_with_brand_and_title() {
        let property = &mock::properties()[0];
        let doc = composer().build_single(property).await;
        let first = texts(&doc, 0);
        assert_eq!(first[0], "INMOBIDATA");
        assert_eq!(first[1], property.title);
        assert!(first.contains(&"Precio: $13,450,000.00".to_string()));
        assert!(first.contains(&"Terreno: 200 m²".to_string()));
        assert!(first.contains(&"• Terraza".to_string()));
        assert!(doc.outline.is_empty());
    }

    #[tokio::test]
    async fn single_report_ends_with_the_publisher() {
        let property = &mock::properties()[0];
        let doc = composer().build_single(property).await;
        let last = texts(&doc, doc.page_count() - 1);
        let publisher = last
            .iter()
            .position(|t| t == "Publicado por: Eduardo Ibarra")
            .expect("publisher line");
        let description = last
            .iter()
            .position(|t| t == "Descripción:")
            .expect("description heading");
        assert!(publisher > description);
    }

    #[tokio::test]
    async fn single_footers_have_no_page_numbers_by_default() {
        let doc = composer().build_single(&mock::properties()[0]).await;
        for page in 0..doc.page_count() {
            let text = texts(&doc, page);
            assert!(text.contains(&"Generado por Inmobidata el 9/3/2026".to_string()));
            assert!(text.contains(&"www.inmobidata.com".to_string()));
            assert!(!text.iter().any(|t| t.starts_with("Página")));
        }
    }

    #[tokio::test]
    async fn single_page_numbers_can_be_enabled() {
        let mut config = ReportConfig::default();
        config.single.page_numbers = true;
        let composer = ReportComposer::new(config, OfflineImageLoader);
        let doc = composer.build_single(&mock::properties()[0]).await;
        let total = doc.page_count();
        assert!(texts(&doc, 0).contains(&format!("Página 1 de {total}")));
    }

    #[tokio::test]
    async fn multi_report_has_a_cover_and_a_page_per_listing() {
        let properties = mock::properties();
        let doc = composer()
            .build_multi(&properties)
            .await
            .expect("two listings");

        let cover = texts(&doc, 0);
        assert_eq!(cover[0], "INMOBIDATA");
        assert_eq!(cover[1], MULTI_TITLE);
        assert_eq!(cover[2], "Generado el: 9/3/2026");
        assert_eq!(cover[3], "Total de propiedades: 2");

        assert_eq!(doc.outline.entries.len(), 2);
        let second = doc.outline.entries[1].page_index;
        assert!(second > doc.outline.entries[0].page_index);
        assert!(texts(&doc, second)[0].starts_with("Propiedad 2: Casa en Venta"));
    }

    #[tokio::test]
    async fn multi_descriptions_are_truncated() {
        let properties = mock::properties();
        let doc = composer()
            .build_multi(&properties)
            .await
            .expect("two listings");
        let all: String = (0..doc.page_count())
            .flat_map(|i| texts(&doc, i))
            .collect::<Vec<_>>()
            .join(" ");
        assert!(all.contains("..."));
        assert!(!all.contains("comodidad y tranquilidad."));
    }

    #[tokio::test]
    async fn no_listings_is_an_error() {
        let Err(err) = composer().build_multi(&[]).await else {
            panic!("an empty selection must not produce a document");
        };
        assert!(matches!(err, GenerationError::NoProperties));
        assert!(err.to_string().starts_with("PDF generation failed"));
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::new_rgb8(width, height)
            .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
            .expect("can encode png");
        bytes
    }

    fn snapshot_composer() -> ReportComposer<MemoryImageLoader> {
        let mut loader = MemoryImageLoader::new();
        loader
            .insert("alta.png", png(100, 400))
            .insert("ancha.png", png(400, 100));
        ReportComposer::new(ReportConfig::default(), loader)
    }

    fn close(a: Pt, b: Pt) -> bool {
        (a - b).0.abs() < 1e-2
    }

    #[tokio::test]
    async fn wide_snapshots_span_the_page_width() {
        let composer = snapshot_composer();
        let image = composer.loader.load("ancha.png").await.expect("fixture");
        let doc = composer.build_snapshot(image);

        assert_eq!(doc.page_count(), 1);
        let page = doc.page(0).expect("page");
        let placed: Vec<_> = page.images().collect();
        assert_eq!(placed.len(), 1);
        let position = placed[0].position;
        assert!(close(position.x1, Pt(0.0)));
        assert!(close(position.width(), A4.0));
        assert!(close(position.height(), A4.0 / 4.0));
        assert!(close(position.y2, A4.1 - Pt::from(SNAPSHOT_MARGIN)));
        assert_eq!(page.spans().count(), 0);
    }

    #[tokio::test]
    async fn tall_snapshots_are_scaled_down_and_centred() {
        let composer = snapshot_composer();
        let image = composer.loader.load("alta.png").await.expect("fixture");
        let doc = composer.build_snapshot(image);

        let page = doc.page(0).expect("page");
        let position = page.images().next().expect("image").position;
        let margin: Pt = SNAPSHOT_MARGIN.into();
        assert!(close(position.height(), A4.1 - margin * 2.0));
        assert!(close(position.width(), position.height() / 4.0));
        assert!(close(position.x1, (A4.0 - position.width()) / 2.0));
        assert!(close(position.y2, A4.1 - margin));
        assert!(close(position.y1, margin));
    }

    #[test]
    fn snapshots_fit_between_the_top_and_bottom_gaps() {
        let (w, h) = fit_snapshot(0.5, Pt(500.0), Pt(800.0));
        assert_eq!((w, h), (Pt(500.0), Pt(250.0)));

        let gap: Pt = SNAPSHOT_MARGIN.into();
        let (w, h) = fit_snapshot(2.0, Pt(500.0), Pt(800.0));
        assert!(close(h, Pt(800.0) - gap * 2.0));
        assert!(close(w, h / 2.0));

        // degenerate images don't divide by zero
        assert_eq!(fit_snapshot(0.0, Pt(500.0), Pt(800.0)), (Pt(500.0), Pt(0.0)));
    }

    #[tokio::test]
    async fn snapshot_reports_use_the_given_filename() {
        let report = snapshot_composer()
            .generate_snapshot("ancha.png", "captura-propiedad.pdf")
            .await
            .expect("report generates");
        assert_eq!(report.filename(), "captura-propiedad.pdf");
        assert_eq!(report.page_count(), 1);
        assert!(report.bytes().starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn snapshots_fail_when_their_image_does() {
        let result = snapshot_composer()
            .generate_snapshot("perdida.png", "captura.pdf")
            .await;
        let Err(err) = result else {
            panic!("a snapshot without its image must not produce a report");
        };
        assert!(matches!(
            err,
            GenerationError::Image(ImageFetchError::Status { status: 404, .. })
        ));
        assert!(err.to_string().starts_with("PDF generation failed"));
    }

    fn assert_send<T: Send>(_: &T) {}

    #[test]
    fn report_futures_can_be_spawned() {
        let composer = composer();
        let properties = mock::properties();
        assert_send(&composer.generate_single(&properties[0]));
        assert_send(&composer.generate_multi(&properties));
        assert_send(&composer.generate_snapshot("a.png", "a.pdf"));
    }

    #[tokio::test]
    async fn timed_out_gallery_images_are_skipped() {
        let mut property = mock::properties()[0].clone();
        property.images = vec![testing::never_replies().await];
        let composer = ReportComposer::new(ReportConfig::default(), testing::local_loader(Some(1)));

        let doc = composer.build_single(&property).await;
        assert_eq!(doc.images.len(), 0);
        assert!(texts(&doc, 0).contains(&property.title));

        let report = composer
            .generate_single(&property)
            .await
            .expect("report still renders");
        assert!(report.bytes().starts_with(b"%PDF-"));
    }

    #[test]
    fn footers_are_stamped_on_every_page_inside_the_bottom_margin() {
        let mut doc = Document::default();
        let regular = doc.add_font(Font::Helvetica);
        let geometry = ReportConfig::default().geometry();
        for _ in 0..3 {
            doc.add_page(geometry.blank_page());
        }
        let footer = Footer {
            generated: "Generado por Inmobidata el 1/1/2026".to_string(),
            site_url: "www.inmobidata.com".to_string(),
            page_numbers: true,
            style: TextStyle::new(regular, Pt(10.0), colours::FAINT),
        };
        stamp_footers(&mut doc, &footer, geometry.margins);

        for i in 0..3 {
            let page = doc.page(i).expect("page");
            let spans: Vec<_> = page.spans().collect();
            assert_eq!(spans.len(), 3);
            assert_eq!(spans[1].text, format!("Página {} de 3", i + 1));
            for span in spans {
                assert!(span.coords.1 < geometry.margins.bottom);
                assert!(span.coords.1 > Pt(0.0));
            }
        }
    }
}
