//! SH1106 command set
//!
//! The SH1106 accepts the SSD1306 command encoding for everything used
//! here. Two-byte commands are followed by their argument byte.

pub const SET_CONTRAST: u8 = 0x81;
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
pub const NORMAL_DISPLAY: u8 = 0xA6;
pub const INVERT_DISPLAY: u8 = 0xA7;
pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_COM_PINS: u8 = 0xDA;
pub const SET_VCOM_DETECT: u8 = 0xDB;
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_MULTIPLEX: u8 = 0xA8;
pub const SET_LOW_COLUMN: u8 = 0x00;
pub const SET_HIGH_COLUMN: u8 = 0x10;
pub const SET_START_LINE: u8 = 0x40;
pub const MEMORY_MODE: u8 = 0x20;
pub const COLUMN_ADDR: u8 = 0x21;
pub const PAGE_ADDR: u8 = 0x22;
pub const COM_SCAN_INC: u8 = 0xC0;
pub const COM_SCAN_DEC: u8 = 0xC8;
pub const SEG_REMAP: u8 = 0xA0;
pub const CHARGE_PUMP: u8 = 0x8D;
pub const STOP_SCROLL: u8 = 0x2E;
pub const PAGE_START_ADDRESS: u8 = 0xB0;

/// Controller bring-up sequence, sent once after reset
///
/// Order and values are fixed for 128x64 SH1106 modules with the internal
/// charge pump.
pub const INIT_SEQUENCE: [u8; 27] = [
    DISPLAY_OFF,
    NORMAL_DISPLAY,
    SET_DISPLAY_CLOCK_DIV,
    0x80, // Default clock
    SET_MULTIPLEX,
    0x3F, // 64 lines
    SET_DISPLAY_OFFSET,
    0x00,
    SET_START_LINE | 0x00,
    CHARGE_PUMP,
    0x14, // Enable charge pump
    MEMORY_MODE,
    0x00,
    SEG_REMAP | 0x01, // Flip horizontally
    COM_SCAN_DEC,     // Flip vertically
    SET_COM_PINS,
    0x12, // Alternative COM config
    SET_CONTRAST,
    0xCF,
    SET_PRECHARGE,
    0xF1,
    SET_VCOM_DETECT,
    0x40,
    DISPLAY_ALL_ON_RESUME,
    NORMAL_DISPLAY,
    STOP_SCROLL,
    DISPLAY_ON,
];

/// Addressing preamble sent before every frame transfer
pub const FRAME_PREAMBLE: [u8; 7] = [
    COLUMN_ADDR,
    0x00,
    0x7F,
    PAGE_ADDR,
    0x00,
    0x07,
    SET_START_LINE | 0x00,
];

/// Rotate the picture by 180 degrees relative to the init orientation
pub const FLIP_VERTICAL: [u8; 4] = [SEG_REMAP, SET_COM_PINS, 0x22, COM_SCAN_INC];

/// Page/column addressing for one byte of controller RAM
///
/// `column` is the controller column, which on SH1106 modules is offset
/// by 2 from the visible frame-buffer column.
pub const fn address(page: u8, column: u8) -> [u8; 3] {
    [
        PAGE_START_ADDRESS + page,
        SET_LOW_COLUMN | (column & 0x0F),
        SET_HIGH_COLUMN | (column >> 4),
    ]
}
