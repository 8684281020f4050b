//! SH1106 OLED Display Driver
//!
//! Driver for 128x64 SH1106-based OLED displays via blocking I2C.
//! The frame buffer lives in the canvas; this only pushes pages.

use defmt::*;
use embedded_hal::i2c::I2c;
use kardia_core::config::DisplayHwConfig;
use kardia_display::{DisplayBackend, DisplayError, FrameBuffer, PAGES, WIDTH};

/// SH1106 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Control byte: command stream follows
const CONTROL_COMMAND: u8 = 0x00;

/// Control byte: display RAM data follows
const CONTROL_DATA: u8 = 0x40;

/// SH1106 OLED driver
pub struct Sh1106<I2C> {
    i2c: I2C,
    address: u8,
    contrast: u8,
    column_offset: u8,
    ready: bool,
}

impl<I2C: I2c> Sh1106<I2C> {
    /// Create a new SH1106 driver from the panel config
    pub fn new(i2c: I2C, config: &DisplayHwConfig) -> Self {
        Self {
            i2c,
            address: config.i2c_address,
            contrast: config.contrast,
            column_offset: config.column_offset,
            ready: false,
        }
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .map_err(|_| DisplayError::Communication)
    }
}

impl<I2C: I2c> DisplayBackend for Sh1106<I2C> {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.ready = false;

        let init_cmds: [u8; 22] = [
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14,                  // Enable charge pump
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CONTRAST,
            self.contrast,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for c in init_cmds {
            self.command(c)?;
        }

        debug!("SH1106 at {=u8:#x} initialized", self.address);
        self.ready = true;
        Ok(())
    }

    fn flush(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        let column = self.column_offset;
        for (page, pixels) in frame.pages().enumerate().take(PAGES) {
            self.command(cmd::SET_PAGE_ADDR | page as u8)?;
            self.command(cmd::SET_LOW_COLUMN | (column & 0x0F))?;
            self.command(cmd::SET_HIGH_COLUMN | (column >> 4))?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(pixels);
            self.i2c
                .write(self.address, &data)
                .map_err(|_| DisplayError::Communication)?;
        }

        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}
