/*
 *  display/font/font5x7.rs
 *
 *  oledtext - page-addressed OLED text driver
 *  (c) 2020-26 Stuart Hunter
 *
 *  5x7 ASCII bitmap table
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use super::{CHAR_MAP_SIZE, Font};

const WIDTH: u8 = 5;
const HEIGHT: u8 = 7;

/// 5 pixels wide, 7 rows tall; only the top 5 bits of each word are used.
///
/// ```text
/// '1'   - - o - -   0x2000
///       - o o - -   0x6000
///       o - o - -   0xA000
///       - - o - -   0x2000
///       - - o - -   0x2000
///       - - o - -   0x2000
///       o o o o o   0xFF00
/// ```
pub const FONT_5X7: Font = Font::new("5x7", WIDTH, HEIGHT, &DATA);

#[rustfmt::skip]
const DATA: [u16; CHAR_MAP_SIZE * HEIGHT as usize] = [
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // space
    0x1000, 0x1000, 0x1000, 0x1000, 0x0000, 0x1000, 0x0000, // !
    0x5000, 0x5000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // "
    0x0000, 0x5000, 0xFFFF, 0x5000, 0xFFFF, 0x5000, 0x0000, // #
    0x2000, 0x7800, 0xA000, 0x7000, 0x2800, 0xF000, 0x2000, // $
    0x0000, 0x8800, 0x1000, 0x2000, 0x4000, 0x8800, 0x0000, // %
    0x7000, 0x8000, 0xC000, 0x6800, 0xB000, 0x9000, 0x6800, // &
    0x2000, 0x2000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // '
    0x1000, 0x2000, 0x4000, 0x4000, 0x4000, 0x2000, 0x1000, // (
    0x2000, 0x1000, 0x4000, 0x4000, 0x4000, 0x1000, 0x2000, // )
    0x2000, 0xA800, 0x7000, 0x2000, 0x7000, 0xA800, 0x2000, // *
    0x2000, 0x2000, 0x2000, 0xFFFF, 0x2000, 0x2000, 0x2000, // +
    0x0000, 0x0000, 0x0000, 0x0000, 0x2000, 0x2000, 0x4000, // ,
    0x0000, 0x0000, 0x0000, 0xFFFF, 0x0000, 0x0000, 0x0000, // -
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x2000, // .
    0x0000, 0x0800, 0x1000, 0x2000, 0x4000, 0x8000, 0x0000, // /
    0x7000, 0x8800, 0x9800, 0xA800, 0xC800, 0x8800, 0x7000, // 0
    0x2000, 0x6000, 0xA000, 0x2000, 0x2000, 0x2000, 0xFF00, // 1
    0x7000, 0x8800, 0x0800, 0x1000, 0x2000, 0x4000, 0xFF00, // 2
    0x7000, 0x8800, 0x0800, 0x3000, 0x0800, 0x8800, 0x7000, // 3
    0x1000, 0x3000, 0x5000, 0xFFFF, 0x1000, 0x1000, 0x1000, // 4
    0xFFFF, 0x8000, 0x8000, 0xF000, 0x0800, 0x0800, 0xF000, // 5
    0x7000, 0x8800, 0x8000, 0xF000, 0x8800, 0x8800, 0x7000, // 6
    0xFFFF, 0x0800, 0x1000, 0x2000, 0x2000, 0x2000, 0x2000, // 7
    0x7000, 0x8800, 0x8800, 0x7000, 0x8800, 0x8800, 0x7000, // 8
    0x7000, 0x8800, 0x8800, 0x7800, 0x0800, 0x8800, 0x7000, // 9
    0x0000, 0x0000, 0x2000, 0x0000, 0x2000, 0x0000, 0x0000, // :
    0x0000, 0x0000, 0x2000, 0x0000, 0x2000, 0x4000, 0x0000, // ;
    0x1000, 0x2000, 0x4000, 0x8000, 0x4000, 0x2000, 0x1000, // <
    0x0000, 0x0000, 0xFFFF, 0x0000, 0xFFFF, 0x0000, 0x0000, // =
    0x4000, 0x2000, 0x1000, 0x0800, 0x1000, 0x2000, 0x4000, // >
    0x6000, 0x1000, 0x1000, 0x2000, 0x2000, 0x0000, 0x2000, // ?
    0x7000, 0x8800, 0xB800, 0xA800, 0xB000, 0x8000, 0x7000, // @
    0x2000, 0x5000, 0x8800, 0x8800, 0xFFFF, 0x8800, 0x8800, // A
    0xF000, 0x8800, 0x8800, 0xF000, 0x8800, 0x8800, 0xF000, // B
    0x7800, 0x8000, 0x8000, 0x8000, 0x8000, 0x8000, 0x7800, // C
    0xE000, 0x9000, 0x8800, 0x8800, 0x8800, 0x9000, 0xE000, // D
    0xFFFF, 0x8000, 0x8000, 0xFFFF, 0x8000, 0x8000, 0xFFFF, // E
    0xFFFF, 0x8000, 0x8000, 0xE000, 0x8000, 0x8000, 0x8000, // F
    0x7000, 0x8800, 0x8000, 0x8000, 0x9800, 0x8800, 0x7000, // G
    0x8800, 0x8800, 0x8800, 0xFFFF, 0x8800, 0x8800, 0x8800, // H
    0x7000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x7000, // I
    0x7000, 0x1000, 0x1000, 0x1000, 0x1000, 0x9000, 0x6000, // J
    0x8800, 0x9000, 0xA000, 0xC000, 0xA000, 0x9000, 0x8800, // K
    0x8000, 0x8000, 0x8000, 0x8000, 0x8000, 0x8000, 0xFFFF, // L
    0x8800, 0xD800, 0xA800, 0x8800, 0x8800, 0x8800, 0x8800, // M
    0x8800, 0xC800, 0xC800, 0xA800, 0x9800, 0x9800, 0x8800, // N
    0x7000, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x7000, // O
    0xF000, 0x8800, 0x8800, 0xF000, 0x8000, 0x8000, 0x8000, // P
    0x7000, 0x8800, 0x8800, 0x8800, 0x8800, 0x7000, 0x1800, // Q
    0xF000, 0x8800, 0x8800, 0xF000, 0x9000, 0x8800, 0x8800, // R
    0x7000, 0x8800, 0x8000, 0x7000, 0x0800, 0x8800, 0x7000, // S
    0xFFFF, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, // T
    0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x7000, // U
    0x8800, 0x8800, 0x8800, 0x5000, 0x5000, 0x5000, 0x2000, // V
    0x8800, 0x8800, 0x8800, 0x8800, 0xA800, 0xA800, 0x5000, // W
    0x8800, 0x8800, 0x5000, 0x2000, 0x5000, 0x8800, 0x8800, // X
    0x8800, 0x8800, 0x5000, 0x2000, 0x2000, 0x2000, 0x2000, // Y
    0xFFFF, 0x0800, 0x1000, 0x2000, 0x4000, 0x8000, 0xFFFF, // Z
    0x7000, 0x4000, 0x4000, 0x4000, 0x4000, 0x4000, 0x7000, // [
    0x2000, 0x2000, 0x1000, 0x1000, 0x1000, 0x1000, 0x0800, // \
    0x7000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x7000, // ]
    0x2000, 0x5000, 0x8800, 0x0000, 0x0000, 0x0000, 0x0000, // ^
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // _
    0x2000, 0x1000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, // `
    0x2000, 0x5000, 0x8800, 0x8800, 0xFFFF, 0x8800, 0x8800, // a
    0xF000, 0x8800, 0x8800, 0xF000, 0x8800, 0x8800, 0xF000, // b
    0x7800, 0x8000, 0x8000, 0x8000, 0x8000, 0x8000, 0x7800, // c
    0xE000, 0x9000, 0x8800, 0x8800, 0x8800, 0x9000, 0xE000, // d
    0x0000, 0x0000, 0x7000, 0x4000, 0x7000, 0x4000, 0x7000, // e
    0x0000, 0x0000, 0x7000, 0x4000, 0x7000, 0x4000, 0x4000, // f
    0x7800, 0x8000, 0x8000, 0x8000, 0x9800, 0x8800, 0x7000, // g
    0x8800, 0x8800, 0x8800, 0xFFFF, 0x8800, 0x8800, 0x8800, // h
    0x7000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x7000, // i
    0x7000, 0x1000, 0x1000, 0x1000, 0x1000, 0x9000, 0x6000, // j
    0x8800, 0x9000, 0xA000, 0xC000, 0xA000, 0x9000, 0x8800, // k
    0x8000, 0x8000, 0x8000, 0x8000, 0x8000, 0x8000, 0xFFFF, // l
    0x8800, 0xD800, 0xA800, 0x8800, 0x8800, 0x8800, 0x8800, // m
    0x8800, 0xC800, 0xC800, 0xA800, 0x9800, 0x9800, 0x8800, // n
    0x7000, 0x8800, 0x8800, 0x8800, 0x8800, 0x8800, 0x7000, // o
    0xF000, 0x8800, 0x8800, 0xF000, 0x8000, 0x8000, 0x8000, // p
    0x7000, 0x8800, 0x8800, 0x8800, 0x8800, 0x7000, 0x1800, // q
    0x0000, 0x0000, 0x7000, 0x4000, 0x4000, 0x4000, 0x4000, // r
    0x0000, 0x0000, 0x7000, 0x4000, 0x7000, 0x1000, 0x7000, // s
    0xFFFF, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, 0x2000, // t
    0x0000, 0x0000, 0x5000, 0x5000, 0x5000, 0x5000, 0x7000, // u
    0x8800, 0x8800, 0x8800, 0x5000, 0x5000, 0x5000, 0x2000, // v
    0x8800, 0x8800, 0x8800, 0x8800, 0xA800, 0xA800, 0x5000, // w
    0x8800, 0x8800, 0x5000, 0x2000, 0x5000, 0x8800, 0x8800, // x
    0x8800, 0x8800, 0x5000, 0x2000, 0x2000, 0x2000, 0x2000, // y
    0xFFFF, 0x0800, 0x1000, 0x2000, 0x4000, 0x8000, 0xFFFF, // z
    0x1800, 0x1000, 0x1000, 0x1000, 0x2000, 0x2000, 0x1000, // {
    0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, 0x1000, // |
    0x3000, 0x1000, 0x1000, 0x1000, 0x0800, 0x0800, 0x1000, // }
    0x0000, 0x0000, 0x0000, 0x7400, 0x4C00, 0x0000, 0x0000, // ~
];
