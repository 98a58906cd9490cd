#![allow(missing_docs)]
use zip96::led_strip::{Grb8, Rgb, palette, rgb_to_wire, wire_to_rgb};

#[test]
fn rgb_to_wire_swaps_red_and_green() {
    let wire = rgb_to_wire(Rgb::new(16, 32, 48));

    assert_eq!(wire, Grb8 { g: 32, r: 16, b: 48 });
    assert_eq!(wire.to_bytes(), [32, 16, 48]);
}

#[test]
fn wire_to_rgb_restores_api_order() {
    let color = wire_to_rgb(Grb8 { g: 1, r: 2, b: 3 });

    assert_eq!(color, Rgb::new(2, 1, 3));
}

#[test]
fn conversion_round_trips_for_palette() {
    for color in palette::COLORS {
        assert_eq!(wire_to_rgb(rgb_to_wire(color)), color);
        assert_eq!(Rgb::from(Grb8::from(color)), color);
    }
}

#[test]
fn red_is_sent_green_first() {
    assert_eq!(rgb_to_wire(palette::RED).to_bytes(), [0, 255, 0]);
    assert_eq!(rgb_to_wire(palette::GREEN).to_bytes(), [255, 0, 0]);
}

#[test]
fn palette_matches_board_colors() {
    assert_eq!(palette::COLORS.len(), 8);
    assert_eq!(palette::COLORS[0], palette::BLACK);
    assert_eq!(palette::YELLOW, Rgb::new(255, 150, 0));
    assert_eq!(palette::PURPLE, Rgb::new(180, 0, 255));
    assert_eq!(palette::COLORS[7], palette::WHITE);
}

#[test]
fn scaled_applies_percent_per_channel() {
    let wire = Grb8 { g: 200, r: 100, b: 255 };

    assert_eq!(wire.scaled(100), wire);
    assert_eq!(wire.scaled(0), Grb8::BLACK);
    assert_eq!(wire.scaled(50), Grb8 { g: 100, r: 50, b: 127 });
    assert_eq!(wire.scaled(20), Grb8 { g: 40, r: 20, b: 51 });
    // Above 100 behaves like 100.
    assert_eq!(wire.scaled(250), wire);
}
