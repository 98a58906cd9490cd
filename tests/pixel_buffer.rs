#![allow(missing_docs)]
//! Host-level tests for the pixel buffer.

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use zip96::Error;
use zip96::led_strip::palette;
use zip96::led_strip::pixel_buffer::{BRIGHTNESS_DEFAULT, PixelBuffer};
use zip96::zip96::{ZIP96_LED_COUNT, ZIP96_ROW_WIDTH, ZIP96_ROWS, Zip96PixelBuffer};

#[test]
fn new_buffer_is_black_at_default_brightness() {
    let pixels = Zip96PixelBuffer::new();

    assert_eq!(pixels.brightness(), BRIGHTNESS_DEFAULT);
    assert_eq!(BRIGHTNESS_DEFAULT, 20);
    for index in 0..ZIP96_LED_COUNT {
        assert_eq!(pixels.get_led(index).unwrap(), palette::BLACK);
    }
}

#[test]
fn zip96_dimensions() {
    assert_eq!(Zip96PixelBuffer::LEN, 96);
    assert_eq!(Zip96PixelBuffer::WIDTH, ZIP96_ROW_WIDTH);
    assert_eq!(Zip96PixelBuffer::HEIGHT, ZIP96_ROWS);
    assert_eq!(Zip96PixelBuffer::new().size(), Size::new(12, 8));
}

#[test]
fn set_led_then_get_led_returns_color() {
    let mut pixels = Zip96PixelBuffer::new();

    for (index, color) in (0..ZIP96_LED_COUNT).zip(palette::COLORS.iter().cycle()) {
        pixels.set_led(index, *color).unwrap();
    }
    for (index, color) in (0..ZIP96_LED_COUNT).zip(palette::COLORS.iter().cycle()) {
        assert_eq!(pixels.get_led(index).unwrap(), *color);
    }
}

#[test]
fn out_of_range_index_is_rejected_without_change() {
    let mut pixels = Zip96PixelBuffer::new();
    pixels.fill(palette::CYAN);
    let before = pixels.clone();

    for index in [96, 97, 1_000, usize::MAX] {
        assert!(matches!(
            pixels.set_led(index, palette::RED),
            Err(Error::InvalidLedIndex { len: 96, .. })
        ));
        assert!(matches!(
            pixels.get_led(index),
            Err(Error::InvalidLedIndex { len: 96, .. })
        ));
        assert!(matches!(
            pixels.clear(index),
            Err(Error::InvalidLedIndex { len: 96, .. })
        ));
    }
    assert_eq!(pixels, before);
}

#[test]
fn invalid_index_error_reports_index() {
    let pixels = Zip96PixelBuffer::new();

    let err = pixels.get_led(96).unwrap_err();

    assert!(matches!(err, Error::InvalidLedIndex { index: 96, len: 96 }));
    assert_eq!(err.to_string(), "invalid LED index 96 (valid range is 0..96)");
}

#[test]
fn fill_sets_every_led() {
    let mut pixels = Zip96PixelBuffer::new();

    pixels.fill(palette::PURPLE);

    for index in 0..ZIP96_LED_COUNT {
        assert_eq!(pixels.get_led(index).unwrap(), palette::PURPLE);
    }
}

#[test]
fn clear_turns_one_led_off() {
    let mut pixels = Zip96PixelBuffer::new();
    pixels.fill(palette::WHITE);

    pixels.clear(5).unwrap();

    assert_eq!(pixels.get_led(5).unwrap(), palette::BLACK);
    assert_eq!(pixels.get_led(4).unwrap(), palette::WHITE);
    assert_eq!(pixels.get_led(6).unwrap(), palette::WHITE);
}

#[test]
fn set_led_matrix_matches_linear_index() {
    for y in 0..8 {
        for x in 0..12 {
            let mut by_matrix = Zip96PixelBuffer::new();
            let mut by_index = Zip96PixelBuffer::new();

            by_matrix.set_led_matrix(x, y, palette::GREEN).unwrap();
            by_index
                .set_led(usize::try_from(x + y * 12).unwrap(), palette::GREEN)
                .unwrap();

            assert_eq!(by_matrix, by_index);
        }
    }
}

#[test]
fn set_led_matrix_wraps_into_next_row() {
    let mut pixels = Zip96PixelBuffer::new();

    pixels.set_led_matrix(12, 0, palette::RED).unwrap();
    assert_eq!(pixels.get_led(12).unwrap(), palette::RED);

    // Negative x is fine as long as the linear index is in range.
    pixels.set_led_matrix(-1, 1, palette::BLUE).unwrap();
    assert_eq!(pixels.get_led(11).unwrap(), palette::BLUE);
}

#[test]
fn set_led_matrix_rejects_out_of_range_index() {
    let mut pixels = Zip96PixelBuffer::new();
    let before = pixels.clone();

    assert!(matches!(
        pixels.set_led_matrix(0, 8, palette::RED),
        Err(Error::InvalidLedIndex { index: 96, len: 96 })
    ));
    assert!(matches!(
        pixels.set_led_matrix(-1, 0, palette::RED),
        Err(Error::InvalidLedIndex { index: -1, len: 96 })
    ));
    assert!(matches!(
        pixels.set_led_matrix(i32::MAX, i32::MAX, palette::RED),
        Err(Error::InvalidLedIndex { .. })
    ));
    assert_eq!(pixels, before);
}

#[test]
fn brightness_is_clamped() {
    let mut pixels = Zip96PixelBuffer::new();

    pixels.set_brightness(-5);
    assert_eq!(pixels.brightness(), 0);

    pixels.set_brightness(150);
    assert_eq!(pixels.brightness(), 100);

    pixels.set_brightness(42);
    assert_eq!(pixels.brightness(), 42);
}

#[test]
fn brightness_does_not_change_stored_colors() {
    let mut pixels = Zip96PixelBuffer::new();
    pixels.set_led(0, palette::WHITE).unwrap();

    pixels.set_brightness(10);

    assert_eq!(pixels.get_led(0).unwrap(), palette::WHITE);
}

#[test]
fn draw_target_clips_instead_of_wrapping() {
    let mut pixels = Zip96PixelBuffer::new();

    // Two columns wider and one row taller than the screen, offset up and left.
    Rectangle::new(Point::new(-1, -1), Size::new(14, 10))
        .into_styled(PrimitiveStyle::with_fill(Rgb888::new(1, 2, 3)))
        .draw(&mut pixels)
        .unwrap();

    let drawn = zip96::led_strip::Rgb::new(1, 2, 3);
    for index in 0..ZIP96_LED_COUNT {
        assert_eq!(pixels.get_led(index).unwrap(), drawn);
    }

    let mut pixels = Zip96PixelBuffer::new();
    Pixel(Point::new(12, 0), Rgb888::WHITE).draw(&mut pixels).unwrap();
    Pixel(Point::new(0, 8), Rgb888::WHITE).draw(&mut pixels).unwrap();
    assert_eq!(pixels, Zip96PixelBuffer::new());
}

#[test]
fn other_shapes_use_their_own_width() {
    let mut pixels = PixelBuffer::<8, 4>::new();

    pixels.set_led_matrix(1, 1, palette::RED).unwrap();

    assert_eq!(pixels.get_led(5).unwrap(), palette::RED);
    assert_eq!(pixels.size(), Size::new(4, 2));
}

#[test]
fn lookups_succeed_in_range_and_report_the_index_outside() {
    let mut pixels = Zip96PixelBuffer::new();

    pixels.set_led(95, palette::RED).unwrap();
    assert_eq!(pixels.get_led(95).unwrap(), palette::RED);
    pixels.clear(95).unwrap();
    assert_eq!(pixels.get_led(95).unwrap(), palette::BLACK);

    assert!(matches!(
        pixels.set_led(usize::MAX, palette::RED),
        Err(Error::InvalidLedIndex { index: i64::MAX, len: 96 })
    ));
    assert!(matches!(
        pixels.get_led(100),
        Err(Error::InvalidLedIndex { index: 100, len: 96 })
    ));
}

#[test]
fn drawing_far_outside_the_screen_is_ignored() {
    let mut pixels = Zip96PixelBuffer::new();

    for point in [
        Point::new(i32::MAX, i32::MAX),
        Point::new(i32::MIN, i32::MIN),
        Point::new(i32::MAX, 0),
        Point::new(0, i32::MAX),
    ] {
        Pixel(point, Rgb888::WHITE).draw(&mut pixels).unwrap();
    }
    Pixel(Point::new(11, 7), Rgb888::WHITE).draw(&mut pixels).unwrap();

    assert_eq!(pixels.get_led(95).unwrap(), palette::WHITE);
    for index in 0..95 {
        assert_eq!(pixels.get_led(index).unwrap(), palette::BLACK);
    }
}
