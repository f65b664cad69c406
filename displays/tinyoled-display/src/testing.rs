//! Test doubles: a recording bus and a model of the controller's RAM

use tinyoled_hal::{Address, I2cMaster};

use crate::command::{cmd, COMMAND_MODE, DATA_MODE};
use crate::config::AddressingMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Init,
    Start(u8),
    Byte(u8),
    Stop,
}

/// One START..STOP frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub address: u8,
    pub bytes: Vec<u8>,
}

impl Frame {
    pub fn control(&self) -> u8 {
        self.bytes[0]
    }

    pub fn payload(&self) -> &[u8] {
        &self.bytes[1..]
    }
}

/// Records every transport call in order
#[derive(Default)]
pub struct RecordingBus {
    pub events: Vec<Event>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// All written bytes, frame boundaries dropped
    pub fn data(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Byte(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    /// Split the log into frames; panics on unbalanced START/STOP
    pub fn frames(&self) -> Vec<Frame> {
        let mut frames = Vec::new();
        let mut open: Option<Frame> = None;
        for event in &self.events {
            match *event {
                Event::Init => assert!(open.is_none(), "init inside a frame"),
                Event::Start(address) => {
                    assert!(open.is_none(), "START before STOP");
                    open = Some(Frame {
                        address,
                        bytes: Vec::new(),
                    });
                }
                Event::Byte(b) => open.as_mut().expect("byte outside a frame").bytes.push(b),
                Event::Stop => frames.push(open.take().expect("STOP without START")),
            }
        }
        assert!(open.is_none(), "frame left open");
        frames
    }
}

impl I2cMaster for RecordingBus {
    fn init(&mut self) {
        self.events.push(Event::Init);
    }

    fn start(&mut self, address: Address) {
        self.events.push(Event::Start(address.get()));
    }

    fn write(&mut self, byte: u8) {
        self.events.push(Event::Byte(byte));
    }

    fn stop(&mut self) {
        self.events.push(Event::Stop);
    }
}

/// Enough of an SSD1306 to check where data bytes end up
pub struct Controller {
    pub ram: [[u8; 128]; 8],
    pub column: u8,
    pub page: u8,
    pub columns: (u8, u8),
    pub pages: (u8, u8),
    pub mode: AddressingMode,
    pub shift: u8,
    pub on: bool,
}

impl Controller {
    pub fn new() -> Self {
        Self {
            ram: [[0xAA; 128]; 8],
            column: 0,
            page: 0,
            columns: (0, 127),
            pages: (0, 7),
            mode: AddressingMode::Page,
            shift: 0,
            on: false,
        }
    }

    /// Feed every frame addressed to the display
    pub fn run(&mut self, frames: &[Frame]) {
        for frame in frames.iter().filter(|f| f.address == 0x3C) {
            match frame.control() {
                COMMAND_MODE => self.commands(frame.payload()),
                DATA_MODE => frame.payload().iter().for_each(|&b| self.data(b)),
                other => panic!("unknown control byte {other:#04x}"),
            }
        }
    }

    fn commands(&mut self, bytes: &[u8]) {
        let mut iter = bytes.iter().copied();
        while let Some(op) = iter.next() {
            let mut arg = || iter.next().expect("missing command argument");
            match op {
                0x00..=0x0F => self.column = (self.column & 0xF0) | op,
                0x10..=0x1F => self.column = (self.column & 0x0F) | ((op & 0x0F) << 4),
                0xB0..=0xB7 => self.page = op & 0x07,
                cmd::SET_ADDRESSING_MODE => {
                    self.mode = match arg() {
                        0 => AddressingMode::Horizontal,
                        1 => AddressingMode::Vertical,
                        _ => AddressingMode::Page,
                    }
                }
                cmd::SET_COLUMN_WINDOW => {
                    let start = arg();
                    self.columns = (start, arg());
                    self.column = start;
                }
                cmd::SET_PAGE_WINDOW => {
                    let start = arg();
                    self.pages = (start, arg());
                    self.page = start;
                }
                cmd::SET_DISPLAY_OFFSET => self.shift = arg(),
                cmd::SET_MUX_RATIO
                | cmd::SET_COM_PINS
                | cmd::SET_VCOM_DETECT
                | cmd::SET_PRECHARGE
                | cmd::SET_CHARGE_PUMP
                | cmd::SET_CONTRAST => {
                    arg();
                }
                cmd::DISPLAY_ON => self.on = true,
                cmd::DISPLAY_OFF => self.on = false,
                _ => {}
            }
        }
    }

    fn data(&mut self, byte: u8) {
        self.ram[self.page as usize][self.column as usize] = byte;
        let (col_start, col_end) = self.columns;
        let (page_start, page_end) = self.pages;
        match self.mode {
            AddressingMode::Horizontal => {
                if self.column >= col_end {
                    self.column = col_start;
                    self.page = if self.page >= page_end {
                        page_start
                    } else {
                        self.page + 1
                    };
                } else {
                    self.column += 1;
                }
            }
            AddressingMode::Vertical => {
                if self.page >= page_end {
                    self.page = page_start;
                    self.column = if self.column >= col_end {
                        col_start
                    } else {
                        self.column + 1
                    };
                } else {
                    self.page += 1;
                }
            }
            AddressingMode::Page => {
                self.column = if self.column >= col_end {
                    col_start
                } else {
                    self.column + 1
                };
            }
        }
    }
}
