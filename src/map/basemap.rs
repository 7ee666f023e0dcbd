//! Equirectangular world backdrop: ocean, land, coastlines, graticule.

use super::landmass::LANDMASSES;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

/// Canvas size, 2:1 to match the plate-carree aspect ratio.
pub(crate) const WIDTH: u32 = 1440;
pub(crate) const HEIGHT: u32 = 720;

pub(crate) const OCEAN: Rgb<u8> = Rgb([168, 204, 228]);
pub(crate) const LAND: Rgb<u8> = Rgb([221, 212, 183]);
pub(crate) const COASTLINE: Rgb<u8> = Rgb([110, 110, 110]);
pub(crate) const GRATICULE: Rgb<u8> = Rgb([150, 162, 172]);
pub(crate) const FRAME: Rgb<u8> = Rgb([60, 60, 60]);

/// Project `(lat, lng)` in degrees onto pixel coordinates.
pub(crate) fn project(lat: f64, lng: f64) -> (f32, f32) {
    let x = (lng + 180.0) / 360.0 * WIDTH as f64;
    let y = (90.0 - lat) / 180.0 * HEIGHT as f64;
    (x as f32, y as f32)
}

/// Fresh canvas with the full backdrop drawn: ocean fill, land polygons,
/// coastline strokes, 30° graticule, and the map frame.
pub(crate) fn draw_basemap() -> RgbImage {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, OCEAN);

    for ring in LANDMASSES {
        let poly = pixel_ring(ring);
        if poly.len() >= 3 {
            draw_polygon_mut(&mut img, &poly, LAND);
        }
    }

    // Coastlines on top of the fills so shared edges stay crisp.
    for ring in LANDMASSES {
        stroke_ring(&mut img, ring);
    }

    draw_graticule(&mut img);

    draw_hollow_rect_mut(
        &mut img,
        Rect::at(0, 0).of_size(WIDTH, HEIGHT),
        FRAME,
    );

    img
}

/// Convert a `(lng, lat)` ring to pixel points, dropping consecutive
/// duplicates and an echoed first point (draw_polygon_mut rejects both).
fn pixel_ring(ring: &[(f32, f32)]) -> Vec<Point<i32>> {
    let mut poly: Vec<Point<i32>> = Vec::with_capacity(ring.len());
    for &(lng, lat) in ring {
        let (x, y) = project(lat as f64, lng as f64);
        let p = Point::new(x.round() as i32, y.round() as i32);
        if poly.last() != Some(&p) {
            poly.push(p);
        }
    }
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    poly
}

fn stroke_ring(img: &mut RgbImage, ring: &[(f32, f32)]) {
    if ring.len() < 2 {
        return;
    }
    let px: Vec<(f32, f32)> = ring
        .iter()
        .map(|&(lng, lat)| project(lat as f64, lng as f64))
        .collect();
    for pair in px.windows(2) {
        draw_line_segment_mut(img, pair[0], pair[1], COASTLINE);
    }
    // Closing segment.
    draw_line_segment_mut(img, px[px.len() - 1], px[0], COASTLINE);
}

fn draw_graticule(img: &mut RgbImage) {
    let mut lng = -150;
    while lng <= 150 {
        let (x, _) = project(0.0, lng as f64);
        draw_line_segment_mut(img, (x, 0.0), (x, HEIGHT as f32 - 1.0), GRATICULE);
        lng += 30;
    }
    let mut lat = -60;
    while lat <= 60 {
        let (_, y) = project(lat as f64, 0.0);
        draw_line_segment_mut(img, (0.0, y), (WIDTH as f32 - 1.0, y), GRATICULE);
        lat += 30;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_corners() {
        assert_eq!(project(90.0, -180.0), (0.0, 0.0));
        assert_eq!(project(-90.0, 180.0), (WIDTH as f32, HEIGHT as f32));
        assert_eq!(
            project(0.0, 0.0),
            (WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0)
        );
    }

    #[test]
    fn test_basemap_has_land_and_ocean() {
        let img = draw_basemap();
        let mut land = 0usize;
        let mut ocean = 0usize;
        for p in img.pixels() {
            if *p == LAND {
                land += 1;
            } else if *p == OCEAN {
                ocean += 1;
            }
        }
        // A world map is mostly ocean, with a meaningful share of land.
        assert!(ocean > land);
        assert!(land > (WIDTH * HEIGHT) as usize / 20);
    }

    #[test]
    fn test_rings_are_drawable() {
        for ring in super::super::landmass::LANDMASSES {
            let poly = pixel_ring(ring);
            assert!(poly.len() >= 3);
            assert_ne!(poly.first(), poly.last());
        }
    }
}
