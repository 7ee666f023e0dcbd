//! World-map rendering: markers and labels for saved cities, or a two-city
//! distance map with a connector line.
//!
//! Every render builds a fresh canvas and returns the encoded PNG as an
//! in-memory buffer — no temporary files, and no user-supplied strings ever
//! reach a filesystem path.

mod basemap;
mod landmass;

use crate::catalog::CityCatalog;
use crate::distance::{haversine_km, midpoint};
use crate::error::Error;
use basemap::project;
use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut,
    draw_line_segment_mut, draw_text_mut, text_size,
};
use imageproc::rect::Rect;
use rusttype::{Font, Scale};
use std::io::Cursor;
use tracing::debug;

const FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

const MARKER: Rgb<u8> = Rgb([204, 0, 0]);
const MARKER_EDGE: Rgb<u8> = Rgb([120, 0, 0]);
const MARKER_A: Rgb<u8> = Rgb([0, 153, 51]);
const MARKER_A_EDGE: Rgb<u8> = Rgb([0, 90, 30]);
const MARKER_B: Rgb<u8> = Rgb([0, 85, 204]);
const MARKER_B_EDGE: Rgb<u8> = Rgb([0, 45, 120]);
const CONNECTOR: Rgb<u8> = Rgb([204, 0, 0]);
const LABEL_BG: Rgb<u8> = Rgb([255, 236, 130]);
const LABEL_A_BG: Rgb<u8> = Rgb([190, 235, 190]);
const LABEL_B_BG: Rgb<u8> = Rgb([185, 215, 245]);
const TEXT: Rgb<u8> = Rgb([30, 30, 30]);
const PANEL_BG: Rgb<u8> = Rgb([255, 255, 255]);

const MARKER_RADIUS: i32 = 6;
const LABEL_SCALE: f32 = 16.0;
const TITLE_SCALE: f32 = 26.0;
const ANNOTATION_SCALE: f32 = 18.0;

/// A rendered distance map plus the raw distance, so callers can format
/// text independently of the image.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    pub png: Vec<u8>,
    pub distance_km: f64,
}

/// Renders world maps from city names resolved through the catalog.
#[derive(Clone)]
pub struct MapRenderer {
    catalog: CityCatalog,
    font: Font<'static>,
}

impl MapRenderer {
    pub fn new(catalog: CityCatalog) -> Result<Self, Error> {
        let font = Font::try_from_bytes(FONT_BYTES).ok_or(Error::Font)?;
        Ok(Self { catalog, font })
    }

    /// Render a world map marking each resolvable city in `names`.
    /// Unresolvable names are silently skipped — a lossy contract by design.
    ///
    /// Title: a placeholder when `names` is empty, the name itself for a
    /// single entry, a count otherwise.
    pub async fn render_cities(&self, names: &[String]) -> Result<Vec<u8>, Error> {
        let mut resolved = Vec::with_capacity(names.len());
        for name in names {
            match self.catalog.resolve(name).await? {
                Some(coords) => resolved.push((name.clone(), coords)),
                None => debug!(city = %name, "skipping city missing from catalog"),
            }
        }

        let mut img = basemap::draw_basemap();

        for (name, (lat, lng)) in &resolved {
            let (x, y) = project(*lat, *lng);
            self.draw_marker(&mut img, x, y, MARKER, MARKER_EDGE);
            self.draw_label(&mut img, x, y, name, LABEL_BG);
        }

        let title = match names.len() {
            0 => "No cities to display".to_string(),
            1 => names[0].clone(),
            n => format!("{} cities", n),
        };
        self.draw_title(&mut img, &title);

        encode_png(&img)
    }

    /// Render both cities with a connector line annotated with the
    /// great-circle distance. Both-or-nothing: if either name fails to
    /// resolve the whole operation yields `None`.
    pub async fn render_distance(
        &self,
        name_a: &str,
        name_b: &str,
    ) -> Result<Option<DistanceMap>, Error> {
        let Some(a) = self.catalog.resolve(name_a).await? else {
            debug!(city = %name_a, "distance map aborted: city not in catalog");
            return Ok(None);
        };
        let Some(b) = self.catalog.resolve(name_b).await? else {
            debug!(city = %name_b, "distance map aborted: city not in catalog");
            return Ok(None);
        };

        let distance_km = haversine_km(a, b);
        let mut img = basemap::draw_basemap();

        let pa = project(a.0, a.1);
        let pb = project(b.0, b.1);

        // Connector first so the markers stay on top of it.
        draw_line_segment_mut(&mut img, pa, pb, CONNECTOR);

        self.draw_marker(&mut img, pa.0, pa.1, MARKER_A, MARKER_A_EDGE);
        self.draw_label(&mut img, pa.0, pa.1, name_a, LABEL_A_BG);
        self.draw_marker(&mut img, pb.0, pb.1, MARKER_B, MARKER_B_EDGE);
        self.draw_label(&mut img, pb.0, pb.1, name_b, LABEL_B_BG);

        let (mid_lat, mid_lng) = midpoint(a, b);
        let pm = project(mid_lat, mid_lng);
        self.draw_annotation(&mut img, pm.0, pm.1, &format!("{:.0} km", distance_km));

        Ok(Some(DistanceMap {
            png: encode_png(&img)?,
            distance_km,
        }))
    }

    fn draw_marker(&self, img: &mut RgbImage, x: f32, y: f32, fill: Rgb<u8>, edge: Rgb<u8>) {
        let c = (x.round() as i32, y.round() as i32);
        draw_filled_circle_mut(img, c, MARKER_RADIUS, fill);
        draw_hollow_circle_mut(img, c, MARKER_RADIUS, edge);
    }

    /// City label offset to the right of its marker, on a filled box.
    fn draw_label(&self, img: &mut RgbImage, x: f32, y: f32, text: &str, bg: Rgb<u8>) {
        let scale = Scale::uniform(LABEL_SCALE);
        let (w, h) = text_size(scale, &self.font, text);
        let tx = x as i32 + MARKER_RADIUS + 5;
        let ty = y as i32 - h / 2;
        self.draw_boxed_text(img, tx, ty, w, h, 3, text, scale, bg);
    }

    /// Annotation box centered on the given point.
    fn draw_annotation(&self, img: &mut RgbImage, x: f32, y: f32, text: &str) {
        let scale = Scale::uniform(ANNOTATION_SCALE);
        let (w, h) = text_size(scale, &self.font, text);
        let tx = x as i32 - w / 2;
        let ty = y as i32 - h / 2;
        self.draw_boxed_text(img, tx, ty, w, h, 5, text, scale, PANEL_BG);
    }

    fn draw_title(&self, img: &mut RgbImage, title: &str) {
        let scale = Scale::uniform(TITLE_SCALE);
        let (w, h) = text_size(scale, &self.font, title);
        self.draw_boxed_text(img, 14, 12, w, h, 6, title, scale, PANEL_BG);
    }

    fn draw_boxed_text(
        &self,
        img: &mut RgbImage,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        pad: i32,
        text: &str,
        scale: Scale,
        bg: Rgb<u8>,
    ) {
        // Keep the box inside the canvas; drawing clips, but a label pushed
        // off the right edge would otherwise be unreadable.
        let x = x
            .min(basemap::WIDTH as i32 - w - pad * 2)
            .max(pad);
        let y = y
            .min(basemap::HEIGHT as i32 - h - pad * 2)
            .max(pad);
        draw_filled_rect_mut(
            img,
            Rect::at(x - pad, y - pad).of_size((w + pad * 2) as u32, (h + pad * 2) as u32),
            bg,
        );
        draw_text_mut(img, TEXT, x, y, scale, &self.font, text);
    }
}

fn encode_png(img: &RgbImage) -> Result<Vec<u8>, Error> {
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), image::ImageOutputFormat::Png)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testutil::seeded_store;

    async fn test_renderer() -> MapRenderer {
        let catalog = CityCatalog::new(seeded_store().await);
        MapRenderer::new(catalog).unwrap()
    }

    fn decode(png: &[u8]) -> RgbImage {
        image::load_from_memory(png).unwrap().to_rgb8()
    }

    fn has_pixel(img: &RgbImage, color: Rgb<u8>) -> bool {
        img.pixels().any(|p| *p == color)
    }

    #[tokio::test]
    async fn test_render_empty_list_is_valid_png() {
        let renderer = test_renderer().await;
        let png = renderer.render_cities(&[]).await.unwrap();
        let img = decode(&png);
        assert_eq!(img.dimensions(), (basemap::WIDTH, basemap::HEIGHT));
        // Placeholder title only, no markers.
        assert!(!has_pixel(&img, MARKER));
    }

    #[tokio::test]
    async fn test_render_single_city_marks_it() {
        let renderer = test_renderer().await;
        let png = renderer
            .render_cities(&["London".to_string()])
            .await
            .unwrap();
        let img = decode(&png);
        let (x, y) = project(51.5072, -0.1276);
        assert_eq!(*img.get_pixel(x.round() as u32, y.round() as u32), MARKER);
    }

    #[tokio::test]
    async fn test_render_skips_unresolvable_names() {
        let renderer = test_renderer().await;
        let png = renderer
            .render_cities(&["London".to_string(), "Unknown_XYZ".to_string()])
            .await
            .unwrap();
        let img = decode(&png);
        let (x, y) = project(51.5072, -0.1276);
        assert_eq!(*img.get_pixel(x.round() as u32, y.round() as u32), MARKER);
    }

    #[tokio::test]
    async fn test_render_unknown_only_has_no_marker() {
        let renderer = test_renderer().await;
        let png = renderer
            .render_cities(&["Unknown_XYZ".to_string()])
            .await
            .unwrap();
        assert!(!has_pixel(&decode(&png), MARKER));
    }

    #[tokio::test]
    async fn test_render_is_deterministic() {
        let renderer = test_renderer().await;
        let names = vec!["Tokyo".to_string(), "Sydney".to_string()];
        let first = renderer.render_cities(&names).await.unwrap();
        let second = renderer.render_cities(&names).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_distance_map_unknown_city_is_none() {
        let renderer = test_renderer().await;
        assert!(renderer
            .render_distance("Unknown_XYZ", "London")
            .await
            .unwrap()
            .is_none());
        assert!(renderer
            .render_distance("London", "Unknown_XYZ")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_distance_map_london_paris() {
        let renderer = test_renderer().await;
        let map = renderer
            .render_distance("London", "Paris")
            .await
            .unwrap()
            .unwrap();
        assert!(map.distance_km > 343.0 && map.distance_km < 344.0);
        let img = decode(&map.png);
        assert_eq!(img.dimensions(), (basemap::WIDTH, basemap::HEIGHT));
    }

    #[tokio::test]
    async fn test_distance_map_draws_both_markers() {
        // A far-apart pair so no label or annotation overlaps a marker.
        let renderer = test_renderer().await;
        let map = renderer
            .render_distance("London", "Sydney")
            .await
            .unwrap()
            .unwrap();
        let img = decode(&map.png);
        let (ax, ay) = project(51.5072, -0.1276);
        let (bx, by) = project(-33.8688, 151.2093);
        assert_eq!(*img.get_pixel(ax.round() as u32, ay.round() as u32), MARKER_A);
        assert_eq!(*img.get_pixel(bx.round() as u32, by.round() as u32), MARKER_B);
    }
}
