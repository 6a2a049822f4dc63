use image::{Rgb, RgbImage};
use imageproc::contours::Contour;

/// Outline color used for accepted detections.
pub const OUTLINE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Stroke width of the drawn outlines, in pixels.
pub const OUTLINE_WIDTH: u32 = 2;

/// Draws each contour's boundary over a copy of the source image.
///
/// Every boundary point is expanded into an [`OUTLINE_WIDTH`]-sided square
/// block of [`OUTLINE_COLOR`]; since the traced points are contiguous
/// boundary pixels this reads as a continuous 2 px stroke. Blocks are
/// clipped at the image edges. The source image is never mutated, and an
/// empty contour slice yields an unmodified copy.
pub fn draw_outlines(image: &RgbImage, contours: &[Contour<i32>]) -> RgbImage {
    let mut annotated = image.clone();
    let (width, height) = annotated.dimensions();

    for contour in contours {
        for point in &contour.points {
            for dy in 0..OUTLINE_WIDTH {
                for dx in 0..OUTLINE_WIDTH {
                    let x = point.x as u32 + dx;
                    let y = point.y as u32 + dy;
                    if x < width && y < height {
                        annotated.put_pixel(x, y, OUTLINE_COLOR);
                    }
                }
            }
        }
    }

    annotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use imageproc::{contours::BorderType, point::Point};

    fn contour_of(points: Vec<Point<i32>>) -> Contour<i32> {
        Contour {
            points,
            border_type: BorderType::Outer,
            parent: None,
        }
    }

    #[test]
    fn no_contours_yields_identical_copy() {
        let image = RgbImage::from_pixel(16, 16, Rgb([120, 90, 60]));
        let annotated = draw_outlines(&image, &[]);
        assert_eq!(annotated, image);
    }

    #[test]
    fn boundary_points_are_painted_with_stroke_width() {
        let image = RgbImage::from_pixel(20, 20, Rgb([0, 0, 0]));
        let contours = vec![contour_of(vec![Point::new(5, 5)])];

        let annotated = draw_outlines(&image, &contours);
        for (x, y) in [(5, 5), (6, 5), (5, 6), (6, 6)] {
            assert_eq!(*annotated.get_pixel(x, y), OUTLINE_COLOR);
        }
        assert_eq!(*annotated.get_pixel(7, 7), Rgb([0, 0, 0]));
        // Source must be untouched.
        assert!(image.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn strokes_are_clipped_at_the_image_edge() {
        let image = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        let contours = vec![contour_of(vec![Point::new(9, 9)])];

        let annotated = draw_outlines(&image, &contours);
        assert_eq!(*annotated.get_pixel(9, 9), OUTLINE_COLOR);
        assert_eq!(annotated.dimensions(), (10, 10));
    }
}
