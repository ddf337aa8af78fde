//! Image Optimizer
//!
//! Re-encodes uploads into a compressed web-friendly format, capping the
//! long edge at 1920px without upscaling smaller images. Built behind the
//! `optimize` feature; without it (or on any decode/encode failure) the
//! caller uploads the original bytes unchanged.

/// Transcode output
pub struct Transcoded {
    pub bytes: Vec<u8>,
    /// File extension matching the encoded format ("jpg" or "png")
    pub extension: &'static str,
}

/// Long-edge ceiling in pixels
#[cfg(feature = "optimize")]
const MAX_DIMENSION: u32 = 1920;

/// JPEG quality for opaque images
#[cfg(feature = "optimize")]
const JPEG_QUALITY: u8 = 80;

/// Transcode an image payload; `None` means "upload the original"
#[cfg(feature = "optimize")]
pub fn transcode(bytes: &[u8]) -> Option<Transcoded> {
    use image::codecs::jpeg::JpegEncoder;
    use image::imageops::FilterType;
    use image::{ImageFormat, GenericImageView};

    let img = image::load_from_memory(bytes).ok()?;

    let (width, height) = img.dimensions();
    let img = if width.max(height) > MAX_DIMENSION {
        img.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Lanczos3)
    } else {
        img
    };

    let mut out = Vec::new();
    if img.color().has_alpha() {
        // JPEG would flatten transparency
        img.write_to(&mut std::io::Cursor::new(&mut out), ImageFormat::Png)
            .ok()?;
        Some(Transcoded {
            bytes: out,
            extension: "png",
        })
    } else {
        let encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
        img.write_with_encoder(encoder).ok()?;
        Some(Transcoded {
            bytes: out,
            extension: "jpg",
        })
    }
}

/// Without the `optimize` feature the pipeline always degrades gracefully
#[cfg(not(feature = "optimize"))]
pub fn transcode(_bytes: &[u8]) -> Option<Transcoded> {
    None
}
