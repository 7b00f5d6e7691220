/*
 *  tests/display_integration.rs
 *
 *  Integration tests for the display driver through the public API
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
 */

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use oledtext::display::{
    AddressingMode, BoxedTransport, Color, ControllerState, Display, DisplayError, FONT_5X7,
    GlyphSource, MockTransport, RefreshStep,
};
use oledtext::display::transport::BusEvent;

fn ready_display() -> (Display<MockTransport>, MockTransport) {
    let probe = MockTransport::new();
    let mut display = Display::new(probe.clone(), AddressingMode::Page);
    display.init().unwrap();
    probe.reset_state();
    (display, probe)
}

#[test]
fn test_init_emits_page_mode_script() {
    let probe = MockTransport::new();
    let mut display = Display::new(probe.clone(), AddressingMode::Page);
    assert_eq!(display.state(), ControllerState::Uninitialized);
    display.init().unwrap();

    let expected = [
        0xAE, 0xA4, 0xA6, 0x81, 0xFF, 0x20, 0x02, 0xB0, 0x00, 0x10, 0x40, 0xC8, 0xA1, 0xA8,
        0x3F, 0xD3, 0x00, 0xDA, 0x12, 0xD5, 0xF0, 0xD9, 0x22, 0xDB, 0x20, 0xAF,
    ];
    assert_eq!(&probe.commands()[..expected.len()], &expected);
    assert_eq!(display.state(), ControllerState::Synchronized);
    assert_eq!(display.framebuffer().count_on_pixels(), 0);
}

#[test]
fn test_refresh_emits_eight_page_groups() {
    let (mut display, probe) = ready_display();
    display.fill(Color::White);
    display.framebuffer_mut().set_pixel(127, 63, Color::Black).unwrap();
    display.refresh().unwrap();

    let events = probe.events();
    assert_eq!(events.len(), 32);
    for (n, group) in events.chunks(4).enumerate() {
        assert_eq!(
            &group[..3],
            &[BusEvent::Command(0xB0 + n as u8), BusEvent::Command(0x00), BusEvent::Command(0x10)]
        );
        match &group[3] {
            BusEvent::Data(bytes) => {
                assert_eq!(bytes.len(), 128);
                assert_eq!(bytes.as_slice(), display.framebuffer().page(n).unwrap());
            }
            other => panic!("expected page data, got {:?}", other),
        }
    }
    assert_eq!(probe.data_transfers()[7][127], 0x7F);
}

#[test]
fn test_letter_a_matches_font_rows() {
    let (mut display, _probe) = ready_display();
    display
        .write("A", &FONT_5X7, 0, 0, Color::Black, Color::White, false, false)
        .unwrap();

    let fb = display.framebuffer();
    for r in 0..FONT_5X7.height() {
        let word = FONT_5X7.row('A', r).unwrap();
        for c in 0..FONT_5X7.width() as u32 {
            let lit = (word >> (15 - c)) & 1 == 1;
            let expected = if lit { Color::White } else { Color::Black };
            assert_eq!(fb.pixel(c, r as u32), Ok(expected), "row {} col {}", r, c);
        }
    }
}

#[test]
fn test_cursor_continues_across_strings() {
    let (mut display, _probe) = ready_display();
    display.write_str("abc", &FONT_5X7, Color::White, false).unwrap();
    assert_eq!(display.cursor(), (15, 0));
    display.write_str("de", &FONT_5X7, Color::White, false).unwrap();
    assert_eq!(display.cursor(), (25, 0));
}

#[test]
fn test_layout_full_leaves_buffer_untouched() {
    let (mut display, _probe) = ready_display();
    display
        .write("x", &FONT_5X7, 0, 0, Color::Black, Color::White, false, false)
        .unwrap();
    display.set_cursor(121, 0).unwrap();
    let before = display.framebuffer().clone();

    let err = display.write_str("y", &FONT_5X7, Color::White, false).unwrap_err();
    assert_eq!(err, DisplayError::LayoutFull { x: 121, y: 0 });
    assert_eq!(display.framebuffer(), &before);
    assert_eq!(display.cursor(), (121, 0));
}

#[test]
fn test_long_line_stops_at_edge() {
    let (mut display, probe) = ready_display();
    let err = display
        .write(&"W".repeat(30), &FONT_5X7, 0, 0, Color::Black, Color::White, false, true)
        .unwrap_err();
    assert!(matches!(err, DisplayError::LayoutFull { .. }));
    // glyphs that fit stay, nothing sent
    assert!(display.framebuffer().count_on_pixels() > 0);
    assert!(probe.events().is_empty());
}

#[test]
fn test_refresh_failure_reports_page_and_step() {
    let (mut display, probe) = ready_display();
    // page 5 high column: 5 * 3 + 2
    probe.fail_on_command(17);
    let err = display.refresh().unwrap_err();
    assert_eq!(err.code(), "START_HCOL_ERR");
    assert!(matches!(
        err,
        DisplayError::RefreshStage { page: 5, stage: RefreshStep::HighColumn, .. }
    ));
    assert_eq!(probe.data_transfers().len(), 5);
}

#[test]
fn test_embedded_graphics_drawing_reaches_panel() {
    let (mut display, probe) = ready_display();
    Rectangle::new(Point::new(0, 8), Size::new(128, 8))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(display.framebuffer_mut())
        .unwrap();
    display.refresh().unwrap();

    let pages = probe.data_transfers();
    assert!(pages[0].iter().all(|&b| b == 0x00));
    assert!(pages[1].iter().all(|&b| b == 0xFF));
    assert!(pages[2].iter().all(|&b| b == 0x00));
}

#[test]
fn test_horizontal_mode_streams_whole_buffer() {
    let probe = MockTransport::new();
    let mut display = Display::new(probe.clone(), AddressingMode::Horizontal);
    display.init().unwrap();
    probe.reset_state();

    display
        .write("Hi", &FONT_5X7, 2, 2, Color::Black, Color::White, true, true)
        .unwrap();
    assert!(probe.commands().is_empty());
    assert_eq!(probe.data_transfers().len(), 1);
    assert_eq!(probe.bytes_written(), 1024);
}

#[test]
fn test_boxed_transport() {
    let probe = MockTransport::new();
    let boxed: BoxedTransport = Box::new(probe.clone());
    let mut display = Display::new(boxed, AddressingMode::Page);
    display.init().unwrap();
    assert_eq!(display.width(), 128);
    assert_eq!(display.height(), 64);
    assert_eq!(probe.commands()[0], 0xAE);
}
