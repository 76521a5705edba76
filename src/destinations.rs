//! Destination entries and the fixed list model

use image::RgbaImage;
use tracing::warn;

/// Thumbnail size in logical pixels. Source images larger than this on
/// both axes are downscaled to exactly these dimensions.
pub const THUMB_WIDTH: u32 = 100;
pub const THUMB_HEIGHT: u32 = 100;

/// One list row: caption text plus an optional thumbnail.
///
/// Immutable after construction; the icon is scaled at assignment time,
/// never on the paint path.
pub struct Destination {
    text: String,
    icon: Option<RgbaImage>,
}

impl Destination {
    pub fn new(text: impl Into<String>, icon: Option<RgbaImage>) -> Self {
        let mut dest = Self {
            text: text.into(),
            icon: None,
        };
        dest.set_icon(icon);
        dest
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn icon(&self) -> Option<&RgbaImage> {
        self.icon.as_ref()
    }

    /// Stores the icon, downscaling to exactly 100x100 when both axes
    /// exceed the thumbnail size. An icon at or under the limit on either
    /// axis is stored unchanged.
    fn set_icon(&mut self, icon: Option<RgbaImage>) {
        self.icon = icon.map(|img| {
            if img.width() > THUMB_WIDTH && img.height() > THUMB_HEIGHT {
                image::imageops::resize(
                    &img,
                    THUMB_WIDTH,
                    THUMB_HEIGHT,
                    image::imageops::FilterType::CatmullRom,
                )
            } else {
                img
            }
        });
    }
}

/// The authored list: caption plus bundled image bytes, in display order.
const DESTINATIONS: [(&str, &[u8]); 5] = [
    (
        "1. Top Destination (Great Wall of China - A world-renowned architectural wonder, \
         the Great Wall stretches over 13,000 miles and represents China's historic strength \
         and strategic defense. Built over several dynasties, it's a testament to the \
         engineering capabilities of ancient Chinese civilization.)",
        include_bytes!("../assets/great_wall.png"),
    ),
    (
        "2. 2nd Top Destination (Ilimanaq, Greenland - Nestled in Greenland, Ilimanaq is a \
         striking vision of untouched beauty. Its rugged terrains and serene vistas are a \
         testament to the Earth's raw, natural beauty.)",
        include_bytes!("../assets/ilimanaq.png"),
    ),
    (
        "3. 3rd Top Destination (Lighthouses of Iceland - Iceland's lighthouses stand as \
         beacons amidst the country's dramatic landscapes, often contrasted by the wild seas, \
         black beaches, and Northern Lights. These structures symbolize guidance and hope in \
         the often-harsh Icelandic environment.)",
        include_bytes!("../assets/lighthouse.png"),
    ),
    (
        "4. 4th Top Destination (Paulinzella Abbey, Germany - The Paulinzella Abbey Church in \
         Germany showcases the country's rich religious and architectural heritage. The \
         church's intricate designs and serene ambiance reflect the profound religious \
         sentiment of the region.)",
        include_bytes!("../assets/paulinzella.png"),
    ),
    (
        "5. 5th Top Destination (Parque Nacional de Ordesa, Spain - Parque Nacional de Ordesa \
         offers a glimpse into Spain's diverse ecosystems, with towering peaks, deep canyons, \
         and lush forests. This natural wonder captures the heart of Spain's wilderness and \
         scenic beauty.)",
        include_bytes!("../assets/ordesa.png"),
    ),
];

/// Build the five-entry list model. Undecodable image bytes degrade to a
/// missing thumbnail instead of failing construction.
pub fn top_five() -> Vec<Destination> {
    DESTINATIONS
        .iter()
        .map(|&(text, bytes)| Destination::new(text, decode_icon(bytes)))
        .collect()
}

fn decode_icon(bytes: &[u8]) -> Option<RgbaImage> {
    match image::load_from_memory(bytes) {
        Ok(img) => Some(img.to_rgba8()),
        Err(e) => {
            warn!(error = %e, "Failed to decode bundled destination image");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([0x2d, 0xd4, 0xbf, 0xff]))
    }

    #[test]
    fn oversized_icon_is_scaled_to_thumbnail_size() {
        let dest = Destination::new("x", Some(solid(320, 200)));
        let icon = dest.icon().unwrap();
        assert_eq!((icon.width(), icon.height()), (THUMB_WIDTH, THUMB_HEIGHT));
    }

    #[test]
    fn icon_at_or_under_limit_is_kept_verbatim() {
        // Exactly 100 on an axis counts as "not exceeding".
        for (w, h) in [(100, 100), (100, 300), (300, 100), (80, 60)] {
            let original = solid(w, h);
            let dest = Destination::new("x", Some(original.clone()));
            assert_eq!(dest.icon().unwrap(), &original);
        }
    }

    #[test]
    fn missing_icon_is_tolerated() {
        let dest = Destination::new("no picture", None);
        assert!(dest.icon().is_none());
        assert_eq!(dest.text(), "no picture");
    }

    #[test]
    fn model_holds_five_entries_in_authored_order() {
        let model = top_five();
        assert_eq!(model.len(), 5);
        for (i, dest) in model.iter().enumerate() {
            assert!(!dest.text().is_empty());
            assert!(dest.text().starts_with(&format!("{}.", i + 1)));
        }
    }

    #[test]
    fn undecodable_bytes_degrade_to_missing_icon() {
        let dest = Destination::new("broken", decode_icon(b"not a png"));
        assert!(dest.icon().is_none());
    }
}
