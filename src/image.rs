use crate::refs::{ObjectReferences, RefType};
use image::{ColorType, DynamicImage, GenericImageView};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::collections::HashMap;
use thiserror::Error;
use usvg::Tree;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Svg(#[from] usvg::Error),

    #[error("could not convert SVG: {0}")]
    SvgConversion(String),
}

/// How the pixels of an image are carried into the PDF
pub enum ImageData {
    /// An RGB JPEG, embedded byte-for-byte with the DCT filter
    Jpeg(Vec<u8>),
    /// Any other raster image, re-encoded as compressed RGB with an optional alpha mask
    Raster(DynamicImage),
    /// A vector image, converted into a form XObject
    Svg(Tree),
}

/// An image stored in the document. Images live "globally" in the document, so a
/// photo shared by several listings is embedded once and drawn many times.
pub struct Image {
    pub data: ImageData,
    /// Natural width, in pixels (or SVG user units)
    pub width: f32,
    /// Natural height, in pixels (or SVG user units)
    pub height: f32,
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.data {
            ImageData::Jpeg(_) => "jpeg",
            ImageData::Raster(_) => "raster",
            ImageData::Svg(_) => "svg",
        };
        f.debug_struct("Image")
            .field("kind", &kind)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

/// Sniff the first bytes of a payload for an SVG document
fn looks_like_svg(data: &[u8]) -> bool {
    let head = &data[..data.len().min(1024)];
    let head = String::from_utf8_lossy(head);
    let head = head.trim_start_matches('\u{feff}').trim_start();
    head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg"))
}

impl Image {
    /// Build an image from an encoded payload, as fetched from the network or read
    /// from disk. The format is detected from the content, not from any file name.
    pub fn from_bytes(data: Vec<u8>) -> Result<Image, ImageError> {
        if looks_like_svg(&data) {
            return Self::new_svg(&data);
        }

        let format = image::guess_format(&data)?;
        let image = image::load_from_memory_with_format(&data, format)?;

        match (format, image.color()) {
            (image::ImageFormat::Jpeg, ColorType::Rgb8) => {
                // we can embed it directly!
                let width = image.width() as f32;
                let height = image.height() as f32;

                Ok(Image {
                    data: ImageData::Jpeg(data),
                    width,
                    height,
                })
            }
            _ => Ok(Self::new_raster(image)),
        }
    }

    pub fn new_svg(data: &[u8]) -> Result<Image, ImageError> {
        let tree = Tree::from_data(data, &usvg::Options::default())?;
        let size = tree.size();
        let width = size.width();
        let height = size.height();

        Ok(Image {
            data: ImageData::Svg(tree),
            width,
            height,
        })
    }

    pub fn new_raster(image: DynamicImage) -> Image {
        let width = image.width() as f32;
        let height = image.height() as f32;
        Image {
            data: ImageData::Raster(image),
            width,
            height,
        }
    }

    /// Natural height over natural width
    pub fn aspect_ratio(&self) -> f32 {
        if self.width > 0.0 {
            self.height / self.width
        } else {
            1.0
        }
    }

    fn encode_raster(&self) -> Option<EncodeOutput> {
        match &self.data {
            ImageData::Jpeg(bytes) => Some(EncodeOutput {
                filter: Filter::DctDecode,
                bytes: bytes.clone(),
                mask: None,
            }),
            ImageData::Raster(image) => {
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<_> = image.pixels().map(|p| (p.2).0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                Some(EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes,
                    mask,
                })
            }
            ImageData::Svg(_) => None,
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        image_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), ImageError> {
        match &self.data {
            ImageData::Svg(tree) => {
                let (chunk, svg_ref) =
                    svg2pdf::to_chunk(tree, svg2pdf::ConversionOptions::default())
                        .map_err(|e| ImageError::SvgConversion(format!("{e:?}")))?;

                // move the converted objects into our own numbering
                let mut renumbered = HashMap::new();
                let chunk = chunk.renumber(|old| *renumbered.entry(old).or_insert_with(|| refs.bump()));
                let id = renumbered.get(&svg_ref).copied().ok_or_else(|| {
                    ImageError::SvgConversion("converted chunk lost its root object".into())
                })?;
                refs.set(RefType::Image(image_index), id);
                writer.extend(&chunk);
            }
            _ => {
                let id = refs.gen(RefType::Image(image_index));
                let Some(encoded) = self.encode_raster() else {
                    return Ok(());
                };

                let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
                image.filter(encoded.filter);
                image.width(self.width as i32);
                image.height(self.height as i32);
                image.color_space().device_rgb();
                image.bits_per_component(8);

                let mask_id = encoded
                    .mask
                    .as_ref()
                    .map(|_| refs.gen(RefType::ImageMask(image_index)));
                if let Some(mask_id) = mask_id {
                    image.s_mask(mask_id);
                }

                image.finish();

                // add a transparency mask if we have one
                if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
                    let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
                    s_mask.filter(Filter::FlateDecode);
                    s_mask.width(self.width as i32);
                    s_mask.height(self.height as i32);
                    s_mask.color_space().device_gray();
                    s_mask.bits_per_component(8);
                }
            }
        }

        Ok(())
    }
}
