//! The command set for the SSD1351.
//!
//! Note 1: The display RAM of the SSD1351 is arranged in 128 rows and 128 columns, where each
//! column is one RGB pixel. How many RAM bytes a pixel occupies depends on the color depth
//! selected with `SetRemapping`: one byte in 256-color mode, two bytes in 65k mode, and three
//! bytes in either 262k mode. Column and row addresses both range over 0-127, and every RAM
//! write targets the window most recently set with `SetColumnAddress`/`SetRowAddress`.

use crate::error::Error;
use crate::interface::DisplayInterface;

pub const NUM_PIXEL_COLS: u8 = 128;
pub const NUM_PIXEL_ROWS: u8 = 128;
pub const PIXEL_COL_MAX: u8 = NUM_PIXEL_COLS - 1;
pub const PIXEL_ROW_MAX: u8 = NUM_PIXEL_ROWS - 1;

/// The address increment orientation when writing image data.
#[derive(Clone, Copy)]
pub enum IncrementAxis {
    /// The column address will increment as image data is written, writing pixels from left to
    /// right in the range set by `SetColumnAddress`, and then top to bottom in the range set by
    /// `SetRowAddress`.
    Horizontal,
    /// The row address will increment as image data is written, writing pixels from top to
    /// bottom in the range set by `SetRowAddress`, and then left to right in the range set by
    /// `SetColumnAddress`.
    Vertical,
}

/// Setting of column address remapping. Changing this setting will flip the image horizontally.
#[derive(Clone, Copy)]
pub enum ColumnRemap {
    /// Column addresses 0->127 map to segments 0->127.
    Forward,
    /// Column addresses 0->127 map to segments 127->0.
    Reverse,
}

/// Channel ordering of the three sub-pixels within each column. Display modules wire the OLED
/// sub-columns either red-first or blue-first; selecting the wrong order swaps red and blue in
/// every displayed color.
#[derive(Clone, Copy)]
pub enum ColorSequence {
    /// Red sub-pixel first.
    Rgb,
    /// Blue sub-pixel first.
    Bgr,
}

/// Setting of the COM line scanning of rows. Changing this setting will flip the image
/// vertically.
#[derive(Clone, Copy)]
pub enum ComScanDirection {
    /// COM lines scan row addresses top to bottom, so that row address 0 is the first row of the
    /// display.
    RowZeroFirst,
    /// COM lines scan row addresses bottom to top, so that row address 0 is the last row of the
    /// display.
    RowZeroLast,
}

/// Setting the layout of the COM lines to the display rows. This setting is dictated by how the
/// display module itself wires the OLED matrix to the driver chip, and changing it to anything
/// other than the correct setting for your module will yield a corrupted image. See the display
/// module datasheet for the correct value to use.
#[derive(Clone, Copy)]
pub enum ComLayout {
    /// COM lines are connected to display rows in a progressive arrangement, so that COM lines
    /// 0->127 map to display rows 0->127.
    Progressive,
    /// Odd and even COM lines are connected to the two sides of the panel, interleaving display
    /// rows between them. This is the arrangement most SSD1351 modules use.
    SplitOddEven,
}

/// Number of colors the chip stores natively per pixel, which together with `ColorSequence`
/// determines the byte encoding of every RAM write.
#[derive(Clone, Copy)]
pub enum ColorDepth {
    /// 8 bits per pixel, 256 colors (3:3:2).
    Depth256,
    /// 16 bits per pixel, 65k colors (5:6:5).
    Depth65k,
    /// 18 bits per pixel, 262k colors, first byte format.
    Depth262k,
    /// 18 bits per pixel, 262k colors, second byte format. Indistinguishable from `Depth262k` on
    /// the serial interface, where both transfer one 6-bit channel per byte.
    Depth262kFormat2,
}

impl ColorDepth {
    /// RAM bytes occupied by one pixel at this depth.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            ColorDepth::Depth256 => 1,
            ColorDepth::Depth65k => 2,
            ColorDepth::Depth262k | ColorDepth::Depth262kFormat2 => 3,
        }
    }
}

/// Source of the internal VDD regulator.
#[derive(Clone, Copy)]
pub enum VddSource {
    /// VDD is supplied externally.
    External,
    /// VDD comes from the internal regulator.
    Internal,
}

/// Width of the parallel host interface. Irrelevant while driving the chip over SPI, but the
/// bits still live in the function-select register and the datasheet default is 8-bit.
#[derive(Clone, Copy)]
pub enum ParallelBits {
    Select8,
    Select16,
    Select18,
}

/// Source of the segment low-voltage reference VSL.
#[derive(Clone, Copy)]
pub enum SegmentVsl {
    /// An external VSL network is wired to the module.
    External,
    /// Use the internal VSL.
    Internal,
}

/// Mode of one of the two GPIO pins the chip exposes.
#[derive(Clone, Copy)]
pub enum GpioMode {
    /// Pin is high-impedance, input disabled.
    InputDisabled,
    /// Pin is high-impedance, input enabled.
    InputEnabled,
    /// Pin drives low.
    OutputLow,
    /// Pin drives high.
    OutputHigh,
}

impl GpioMode {
    fn value(self) -> u8 {
        match self {
            GpioMode::InputDisabled => 0x00,
            GpioMode::InputEnabled => 0x01,
            GpioMode::OutputLow => 0x02,
            GpioMode::OutputHigh => 0x03,
        }
    }
}

/// Setting of the display mode.
#[derive(Clone, Copy)]
pub enum DisplayMode {
    /// The display is blanked with all pixels turned OFF, regardless of RAM contents.
    BlankDark,
    /// The display is blanked with all pixels turned ON, regardless of RAM contents.
    BlankBright,
    /// The display operates normally, showing the image in the display RAM.
    Normal,
    /// The display operates with inverse brightness, showing the image in the display RAM with
    /// the grayscale levels inverted.
    Inverse,
}

/// State of the command lock.
#[derive(Clone, Copy)]
pub enum CommandLock {
    /// All commands are accepted.
    Unlock,
    /// All commands except `SetCommandLock` itself are ignored.
    Lock,
    /// The protected commands (0xA2, 0xB1, 0xB3, 0xBB, 0xBE) are inaccessible.
    ProtectedCommandsInaccessible,
    /// The protected commands are accessible. Must be issued before configuring the chip, as the
    /// inaccessible state is the power-on default.
    ProtectedCommandsAccessible,
}

/// Time interval between successive shifts of the horizontal scroll, in display frames.
#[derive(Clone, Copy)]
pub enum ScrollInterval {
    /// Test mode; shifts every clock, much faster than any frame rate.
    Test,
    /// Shift every frame.
    Normal,
    /// Shift every other frame.
    Slow,
    /// Shift every third frame.
    Slowest,
}

#[derive(Clone, Copy)]
pub enum Command {
    /// Set the column start and end address range when writing to the display RAM. The column
    /// address pointer is reset to the start column address such that `WriteImageData` will
    /// begin writing there. Range is 0-127, start not after end. (Note 1)
    SetColumnAddress(u8, u8),
    /// Set the row start and end address range when writing to the display RAM. The row address
    /// pointer is reset to the start row address such that `WriteImageData` will begin writing
    /// there. Range is 0-127, start not after end.
    SetRowAddress(u8, u8),
    /// Send the read-RAM opcode, aiming subsequent bus reads at the current window. Readback
    /// requires a bidirectional bus and is not possible over 4-wire SPI, but the command is
    /// accepted regardless.
    ReadRam,
    /// Set the direction of display address increment, column remapping, sub-pixel color order,
    /// COM scan direction, COM line layout, and color depth. All six settings share one register
    /// on the chip, so they are written together. See documentation for each enum for details.
    SetRemapping(
        IncrementAxis,
        ColumnRemap,
        ColorSequence,
        ComScanDirection,
        ComLayout,
        ColorDepth,
    ),
    /// Set the display start line. Setting this to e.g. 40 will cause the first row of pixels on
    /// the display to display row 40 of the display RAM, and rows 0-39 of the display RAM will
    /// be wrapped to the bottom, "rolling" the displayed image upwards. This transformation is
    /// applied *before* the MUX ratio setting. Range is 0-127.
    SetStartLine(u8),
    /// Set the display COM line offset. This has a similar effect to `SetStartLine`, rolling the
    /// displayed image upwards as the values increase, except that it is applied *after* the MUX
    /// ratio setting. Range is 0-127.
    SetDisplayOffset(u8),
    /// Set the display operating mode. See enum for details.
    SetDisplayMode(DisplayMode),
    /// Select the VDD regulator source and the parallel host interface width. Both settings
    /// share the function-select register and are written together.
    SetFunctionSelect(VddSource, ParallelBits),
    /// Control sleep mode. While asleep the panel drivers are off and the chip draws minimal
    /// current, but the display RAM and configuration are retained.
    SetSleepMode(bool),
    /// Set the reset (phase 1) and first pre-charge (phase 2) period lengths. Phase 1 can be set
    /// from 2-15 DCLKs, phase 2 from 3-15 DCLKs. The display module datasheet should have
    /// appropriate values.
    SetPhaseLengths(u8, u8),
    /// Set the oscillator frequency Fosc and the display clock divider. The relationship between
    /// the frequency settings 0-15 and the actual Fosc value is not documented, except that
    /// higher values increase the frequency. The divider DIVSET is a value n from 0-10, where
    /// DCLK is produced by dividing Fosc by 2^n. The resulting DCLK rate indirectly determines
    /// the refresh rate of the display.
    SetClockFoscDivset(u8, u8),
    /// Select the segment low-voltage reference.
    SetSegmentLowVoltage(SegmentVsl),
    /// Set the modes of GPIO0 and GPIO1, in that order.
    SetGpioModes(GpioMode, GpioMode),
    /// Set the second pre-charge period. Range 0-15 DCLKs.
    SetSecondPrechargePeriod(u8),
    /// Set the gray scale gamma table to the built-in linear default (see
    /// `BufCommand::SetGrayScaleTable` for the custom table).
    SetDefaultGrayScaleTable,
    /// Set the pre-charge voltage level, as a fraction of Vcc. Range 0-31.
    SetPreChargeVoltage(u8),
    /// Set the COM deselect voltage level VCOMH, from 0.72*Vcc to 0.86*Vcc. Range 0-7.
    SetComDeselectVoltage(u8),
    /// Set the contrast current for the A, B, and C color channels individually. Range 0-255
    /// each.
    SetContrast(u8, u8, u8),
    /// Set the master contrast control, uniformly reducing the output current of all channels to
    /// (value+1) sixteenths. Range 0 (maximum dimming) to 15 (no dimming).
    SetMasterContrast(u8),
    /// Set the MUX ratio, which controls the number of COM lines that are active and thus the
    /// number of display pixel rows which are active. The register counts from zero, so the
    /// legal range 15-127 drives 16-128 rows. Which COM lines are active is controlled by
    /// `SetDisplayOffset`, and how the COM lines map to display RAM row addresses is controlled
    /// by `SetStartLine`.
    SetMuxRatio(u8),
    /// Set the command lock state. The protected commands must be made accessible before the
    /// chip can be fully configured.
    SetCommandLock(CommandLock),
    /// Configure the horizontal scroll: columns shifted per step (chip-defined encoding, 0 for
    /// none), first scrolling row, number of scrolling rows, and step interval. The scrolling
    /// row range must fit within the 128 display rows. Takes effect once scrolling is started
    /// with `StartMoving`.
    SetHorizontalScroll(u8, u8, u8, ScrollInterval),
    /// Start the configured horizontal scroll.
    StartMoving,
    /// Stop the horizontal scroll. RAM writes while scrolling is active yield corrupted images;
    /// stop first, draw, then restart.
    StopMoving,
}

pub enum BufCommand<'buf> {
    /// Set the gray scale gamma table. The 63 bytes set the pixel drive pulse width in DCLKs for
    /// grayscale levels 1->63; level 0 cannot be modified. The chip expects the values to
    /// increase monotonically but accepts whatever it is given.
    SetGrayScaleTable(&'buf [u8]),
    /// Write image data into display RAM. The image data will be written to the display RAM in
    /// the order specified by `SetRemapping` `IncrementAxis` setting, consuming
    /// `ColorDepth::bytes_per_pixel` bytes per pixel. The data, once written, will be mapped
    /// onto the display pixels in a manner determined by the remaining `SetRemapping` settings.
    WriteImageData(&'buf [u8]),
}

macro_rules! ok_command {
    ($buf:ident, $cmd:expr,[]) => {
        Ok(($cmd, &$buf[..0]))
    };
    ($buf:ident, $cmd:expr,[$arg0:expr]) => {{
        $buf[0] = $arg0;
        Ok(($cmd, &$buf[..1]))
    }};
    ($buf:ident, $cmd:expr,[$arg0:expr, $arg1:expr]) => {{
        $buf[0] = $arg0;
        $buf[1] = $arg1;
        Ok(($cmd, &$buf[..2]))
    }};
    ($buf:ident, $cmd:expr,[$arg0:expr, $arg1:expr, $arg2:expr]) => {{
        $buf[0] = $arg0;
        $buf[1] = $arg1;
        $buf[2] = $arg2;
        Ok(($cmd, &$buf[..3]))
    }};
    ($buf:ident, $cmd:expr,[$arg0:expr, $arg1:expr, $arg2:expr, $arg3:expr, $arg4:expr]) => {{
        $buf[0] = $arg0;
        $buf[1] = $arg1;
        $buf[2] = $arg2;
        $buf[3] = $arg3;
        $buf[4] = $arg4;
        Ok(($cmd, &$buf[..5]))
    }};
}

impl Command {
    /// Transmit the command encoded by `self` to the display via `iface`.
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error<DI::Error>>
    where
        DI: DisplayInterface,
    {
        let mut arg_buf = [0u8; 5];
        let (cmd, data) = match self {
            Command::SetColumnAddress(start, end) => match (start, end) {
                (0..=PIXEL_COL_MAX, 0..=PIXEL_COL_MAX) if start <= end => {
                    ok_command!(arg_buf, 0x15, [start, end])
                }
                _ => Err(Error::InvalidParameter),
            },
            Command::SetRowAddress(start, end) => match (start, end) {
                (0..=PIXEL_ROW_MAX, 0..=PIXEL_ROW_MAX) if start <= end => {
                    ok_command!(arg_buf, 0x75, [start, end])
                }
                _ => Err(Error::InvalidParameter),
            },
            Command::ReadRam => ok_command!(arg_buf, 0x5D, []),
            Command::SetRemapping(
                increment_axis,
                column_remap,
                color_sequence,
                com_scan_direction,
                com_layout,
                color_depth,
            ) => {
                let ia = match increment_axis {
                    IncrementAxis::Horizontal => 0x00,
                    IncrementAxis::Vertical => 0x01,
                };
                let cr = match column_remap {
                    ColumnRemap::Forward => 0x00,
                    ColumnRemap::Reverse => 0x02,
                };
                let cs = match color_sequence {
                    ColorSequence::Bgr => 0x00,
                    ColorSequence::Rgb => 0x04,
                };
                let csd = match com_scan_direction {
                    ComScanDirection::RowZeroFirst => 0x00,
                    ComScanDirection::RowZeroLast => 0x10,
                };
                let cl = match com_layout {
                    ComLayout::Progressive => 0x00,
                    ComLayout::SplitOddEven => 0x20,
                };
                let cd = match color_depth {
                    ColorDepth::Depth256 => 0x00,
                    ColorDepth::Depth65k => 0x40,
                    ColorDepth::Depth262k => 0x80,
                    ColorDepth::Depth262kFormat2 => 0xC0,
                };
                ok_command!(arg_buf, 0xA0, [ia | cr | cs | csd | cl | cd])
            }
            Command::SetStartLine(line) => match line {
                0..=PIXEL_ROW_MAX => ok_command!(arg_buf, 0xA1, [line]),
                _ => Err(Error::InvalidParameter),
            },
            Command::SetDisplayOffset(line) => match line {
                0..=PIXEL_ROW_MAX => ok_command!(arg_buf, 0xA2, [line]),
                _ => Err(Error::InvalidParameter),
            },
            Command::SetDisplayMode(mode) => ok_command!(
                arg_buf,
                match mode {
                    DisplayMode::BlankDark => 0xA4,
                    DisplayMode::BlankBright => 0xA5,
                    DisplayMode::Normal => 0xA6,
                    DisplayMode::Inverse => 0xA7,
                },
                []
            ),
            Command::SetFunctionSelect(vdd, parallel) => {
                let v = match vdd {
                    VddSource::External => 0x00,
                    VddSource::Internal => 0x01,
                };
                let p = match parallel {
                    ParallelBits::Select8 => 0x00,
                    ParallelBits::Select16 => 0x40,
                    ParallelBits::Select18 => 0xC0,
                };
                ok_command!(arg_buf, 0xAB, [v | p])
            }
            Command::SetSleepMode(ena) => ok_command!(
                arg_buf,
                match ena {
                    true => 0xAE,
                    false => 0xAF,
                },
                []
            ),
            Command::SetPhaseLengths(phase_1, phase_2) => match (phase_1, phase_2) {
                (2..=15, 3..=15) => ok_command!(arg_buf, 0xB1, [phase_2 << 4 | phase_1]),
                _ => Err(Error::InvalidParameter),
            },
            Command::SetClockFoscDivset(fosc, divset) => match (fosc, divset) {
                (0..=15, 0..=10) => ok_command!(arg_buf, 0xB3, [fosc << 4 | divset]),
                _ => Err(Error::InvalidParameter),
            },
            Command::SetSegmentLowVoltage(vsl) => {
                let v = match vsl {
                    SegmentVsl::External => 0x00,
                    SegmentVsl::Internal => 0x02,
                };
                // The second and third bytes are fixed by the datasheet.
                ok_command!(arg_buf, 0xB4, [0xA0 | v, 0xB5, 0x55])
            }
            Command::SetGpioModes(gpio_0, gpio_1) => {
                ok_command!(arg_buf, 0xB5, [gpio_1.value() << 2 | gpio_0.value()])
            }
            Command::SetSecondPrechargePeriod(period) => match period {
                0..=15 => ok_command!(arg_buf, 0xB6, [period]),
                _ => Err(Error::InvalidParameter),
            },
            Command::SetDefaultGrayScaleTable => ok_command!(arg_buf, 0xB9, []),
            Command::SetPreChargeVoltage(voltage) => match voltage {
                0..=31 => ok_command!(arg_buf, 0xBB, [voltage]),
                _ => Err(Error::InvalidParameter),
            },
            Command::SetComDeselectVoltage(voltage) => match voltage {
                0..=7 => ok_command!(arg_buf, 0xBE, [voltage]),
                _ => Err(Error::InvalidParameter),
            },
            Command::SetContrast(a, b, c) => ok_command!(arg_buf, 0xC1, [a, b, c]),
            Command::SetMasterContrast(contrast) => match contrast {
                0..=15 => ok_command!(arg_buf, 0xC7, [contrast]),
                _ => Err(Error::InvalidParameter),
            },
            Command::SetMuxRatio(ratio) => match ratio {
                15..=PIXEL_ROW_MAX => ok_command!(arg_buf, 0xCA, [ratio]),
                _ => Err(Error::InvalidParameter),
            },
            Command::SetCommandLock(lock) => ok_command!(
                arg_buf,
                0xFD,
                [match lock {
                    CommandLock::Unlock => 0x12,
                    CommandLock::Lock => 0x16,
                    CommandLock::ProtectedCommandsInaccessible => 0xB0,
                    CommandLock::ProtectedCommandsAccessible => 0xB1,
                }]
            ),
            Command::SetHorizontalScroll(scroll, start_row, row_count, interval) => {
                let iv = match interval {
                    ScrollInterval::Test => 0x00,
                    ScrollInterval::Normal => 0x01,
                    ScrollInterval::Slow => 0x02,
                    ScrollInterval::Slowest => 0x03,
                };
                match (start_row, row_count) {
                    (0..=PIXEL_ROW_MAX, 0..=NUM_PIXEL_ROWS)
                        if start_row as u16 + row_count as u16 <= NUM_PIXEL_ROWS as u16 =>
                    {
                        ok_command!(arg_buf, 0x96, [scroll, start_row, row_count, 0x00, iv])
                    }
                    _ => Err(Error::InvalidParameter),
                }
            }
            Command::StartMoving => ok_command!(arg_buf, 0x9F, []),
            Command::StopMoving => ok_command!(arg_buf, 0x9E, []),
        }?;
        iface.send_command(cmd).map_err(Error::Interface)?;
        if data.len() == 0 {
            Ok(())
        } else {
            iface.send_data(data).map_err(Error::Interface)
        }
    }
}

/// Length of the custom gray scale gamma table, covering levels 1-63.
pub const GRAY_SCALE_TABLE_LEN: usize = 63;

impl<'a> BufCommand<'a> {
    /// Transmit the command encoded by `self` to the display via `iface`.
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), Error<DI::Error>>
    where
        DI: DisplayInterface,
    {
        let (cmd, data) = match self {
            BufCommand::SetGrayScaleTable(table) => {
                if table.len() == GRAY_SCALE_TABLE_LEN {
                    Ok((0xB8, table))
                } else {
                    Err(Error::InvalidParameter)
                }
            }
            BufCommand::WriteImageData(buf) => Ok((0x5C, buf)),
        }?;
        iface.send_command(cmd).map_err(Error::Interface)?;
        if data.len() == 0 {
            Ok(())
        } else {
            iface.send_data(data).map_err(Error::Interface)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::TestSpyInterface;

    #[test]
    fn set_column_address() {
        let mut di = TestSpyInterface::new();
        Command::SetColumnAddress(23, 42).send(&mut di).unwrap();
        di.check(0x15, &[23, 42]);
        di.clear();
        Command::SetColumnAddress(23, 23).send(&mut di).unwrap();
        di.check(0x15, &[23, 23]);
        di.clear();
        assert_eq!(
            Command::SetColumnAddress(42, 23).send(&mut di),
            Err(Error::InvalidParameter)
        );
        assert_eq!(
            Command::SetColumnAddress(128, 128).send(&mut di),
            Err(Error::InvalidParameter)
        );
        assert_eq!(
            Command::SetColumnAddress(23, 255).send(&mut di),
            Err(Error::InvalidParameter)
        );
        assert!(di.sent().is_empty());
    }

    #[test]
    fn set_row_address() {
        let mut di = TestSpyInterface::new();
        Command::SetRowAddress(23, 42).send(&mut di).unwrap();
        di.check(0x75, &[23, 42]);
        di.clear();
        Command::SetRowAddress(0, 0).send(&mut di).unwrap();
        di.check(0x75, &[0, 0]);
        di.clear();
        assert_eq!(
            Command::SetRowAddress(42, 23).send(&mut di),
            Err(Error::InvalidParameter)
        );
        assert_eq!(
            Command::SetRowAddress(128, 128).send(&mut di),
            Err(Error::InvalidParameter)
        );
        assert!(di.sent().is_empty());
    }

    #[test]
    fn read_ram() {
        let mut di = TestSpyInterface::new();
        Command::ReadRam.send(&mut di).unwrap();
        di.check(0x5D, &[]);
    }

    #[test]
    fn set_remapping() {
        let mut di = TestSpyInterface::new();
        Command::SetRemapping(
            IncrementAxis::Horizontal,
            ColumnRemap::Forward,
            ColorSequence::Bgr,
            ComScanDirection::RowZeroFirst,
            ComLayout::Progressive,
            ColorDepth::Depth256,
        )
        .send(&mut di)
        .unwrap();
        di.check(0xA0, &[0x00]);

        di.clear();
        Command::SetRemapping(
            IncrementAxis::Horizontal,
            ColumnRemap::Forward,
            ColorSequence::Rgb,
            ComScanDirection::RowZeroLast,
            ComLayout::SplitOddEven,
            ColorDepth::Depth65k,
        )
        .send(&mut di)
        .unwrap();
        di.check(0xA0, &[0x74]);

        di.clear();
        Command::SetRemapping(
            IncrementAxis::Vertical,
            ColumnRemap::Reverse,
            ColorSequence::Bgr,
            ComScanDirection::RowZeroFirst,
            ComLayout::Progressive,
            ColorDepth::Depth262kFormat2,
        )
        .send(&mut di)
        .unwrap();
        di.check(0xA0, &[0xC3]);
    }

    #[test]
    fn set_start_line() {
        let mut di = TestSpyInterface::new();
        Command::SetStartLine(23).send(&mut di).unwrap();
        di.check(0xA1, &[23]);
        assert_eq!(
            Command::SetStartLine(128).send(&mut di),
            Err(Error::InvalidParameter)
        );
    }

    #[test]
    fn set_display_offset() {
        let mut di = TestSpyInterface::new();
        Command::SetDisplayOffset(23).send(&mut di).unwrap();
        di.check(0xA2, &[23]);
        assert_eq!(
            Command::SetDisplayOffset(128).send(&mut di),
            Err(Error::InvalidParameter)
        );
    }

    #[test]
    fn set_display_mode() {
        let mut di = TestSpyInterface::new();
        Command::SetDisplayMode(DisplayMode::BlankDark)
            .send(&mut di)
            .unwrap();
        di.check(0xA4, &[]);
        di.clear();
        Command::SetDisplayMode(DisplayMode::BlankBright)
            .send(&mut di)
            .unwrap();
        di.check(0xA5, &[]);
        di.clear();
        Command::SetDisplayMode(DisplayMode::Normal)
            .send(&mut di)
            .unwrap();
        di.check(0xA6, &[]);
        di.clear();
        Command::SetDisplayMode(DisplayMode::Inverse)
            .send(&mut di)
            .unwrap();
        di.check(0xA7, &[]);
    }

    #[test]
    fn set_function_select() {
        let mut di = TestSpyInterface::new();
        Command::SetFunctionSelect(VddSource::External, ParallelBits::Select8)
            .send(&mut di)
            .unwrap();
        di.check(0xAB, &[0x00]);
        di.clear();
        Command::SetFunctionSelect(VddSource::Internal, ParallelBits::Select8)
            .send(&mut di)
            .unwrap();
        di.check(0xAB, &[0x01]);
        di.clear();
        Command::SetFunctionSelect(VddSource::Internal, ParallelBits::Select18)
            .send(&mut di)
            .unwrap();
        di.check(0xAB, &[0xC1]);
        di.clear();
        Command::SetFunctionSelect(VddSource::External, ParallelBits::Select16)
            .send(&mut di)
            .unwrap();
        di.check(0xAB, &[0x40]);
    }

    #[test]
    fn set_sleep_mode() {
        let mut di = TestSpyInterface::new();
        Command::SetSleepMode(true).send(&mut di).unwrap();
        di.check(0xAE, &[]);
        di.clear();
        Command::SetSleepMode(false).send(&mut di).unwrap();
        di.check(0xAF, &[]);
    }

    #[test]
    fn set_phase_lengths() {
        let mut di = TestSpyInterface::new();
        Command::SetPhaseLengths(2, 3).send(&mut di).unwrap();
        di.check(0xB1, &[0x32]);
        di.clear();
        Command::SetPhaseLengths(15, 15).send(&mut di).unwrap();
        di.check(0xB1, &[0xFF]);
        di.clear();
        Command::SetPhaseLengths(5, 14).send(&mut di).unwrap();
        di.check(0xB1, &[0xE5]);
        for &(p1, p2) in &[(1, 5), (16, 5), (5, 2), (5, 16)] {
            assert_eq!(
                Command::SetPhaseLengths(p1, p2).send(&mut di),
                Err(Error::InvalidParameter)
            );
        }
    }

    #[test]
    fn set_clock_fosc_divset() {
        let mut di = TestSpyInterface::new();
        Command::SetClockFoscDivset(15, 1).send(&mut di).unwrap();
        di.check(0xB3, &[0xF1]);
        di.clear();
        Command::SetClockFoscDivset(0, 0).send(&mut di).unwrap();
        di.check(0xB3, &[0x00]);
        di.clear();
        Command::SetClockFoscDivset(15, 10).send(&mut di).unwrap();
        di.check(0xB3, &[0xFA]);
        assert_eq!(
            Command::SetClockFoscDivset(16, 0).send(&mut di),
            Err(Error::InvalidParameter)
        );
        assert_eq!(
            Command::SetClockFoscDivset(0, 11).send(&mut di),
            Err(Error::InvalidParameter)
        );
    }

    #[test]
    fn set_segment_low_voltage() {
        let mut di = TestSpyInterface::new();
        Command::SetSegmentLowVoltage(SegmentVsl::External)
            .send(&mut di)
            .unwrap();
        di.check(0xB4, &[0xA0, 0xB5, 0x55]);
        di.clear();
        Command::SetSegmentLowVoltage(SegmentVsl::Internal)
            .send(&mut di)
            .unwrap();
        di.check(0xB4, &[0xA2, 0xB5, 0x55]);
    }

    #[test]
    fn set_gpio_modes() {
        let mut di = TestSpyInterface::new();
        Command::SetGpioModes(GpioMode::InputDisabled, GpioMode::InputDisabled)
            .send(&mut di)
            .unwrap();
        di.check(0xB5, &[0x00]);
        di.clear();
        Command::SetGpioModes(GpioMode::OutputLow, GpioMode::OutputHigh)
            .send(&mut di)
            .unwrap();
        di.check(0xB5, &[0x0E]);
        di.clear();
        Command::SetGpioModes(GpioMode::InputEnabled, GpioMode::InputDisabled)
            .send(&mut di)
            .unwrap();
        di.check(0xB5, &[0x01]);
    }

    #[test]
    fn set_second_precharge_period() {
        let mut di = TestSpyInterface::new();
        Command::SetSecondPrechargePeriod(1).send(&mut di).unwrap();
        di.check(0xB6, &[0x01]);
        assert_eq!(
            Command::SetSecondPrechargePeriod(16).send(&mut di),
            Err(Error::InvalidParameter)
        );
    }

    #[test]
    fn set_gray_scale_table() {
        let mut di = TestSpyInterface::new();
        let table = (1..=63).collect::<Vec<u8>>();
        BufCommand::SetGrayScaleTable(&table[..]).send(&mut di).unwrap();
        di.check(0xB8, &table[..]);
        di.clear();
        assert_eq!(
            BufCommand::SetGrayScaleTable(&table[..62]).send(&mut di),
            Err(Error::InvalidParameter)
        );
        let long = [0u8; 64];
        assert_eq!(
            BufCommand::SetGrayScaleTable(&long[..]).send(&mut di),
            Err(Error::InvalidParameter)
        );
        assert!(di.sent().is_empty());
    }

    #[test]
    fn set_default_gray_scale_table() {
        let mut di = TestSpyInterface::new();
        Command::SetDefaultGrayScaleTable.send(&mut di).unwrap();
        di.check(0xB9, &[]);
    }

    #[test]
    fn set_pre_charge_voltage() {
        let mut di = TestSpyInterface::new();
        Command::SetPreChargeVoltage(0x17).send(&mut di).unwrap();
        di.check(0xBB, &[0x17]);
        assert_eq!(
            Command::SetPreChargeVoltage(32).send(&mut di),
            Err(Error::InvalidParameter)
        );
    }

    #[test]
    fn set_com_deselect_voltage() {
        let mut di = TestSpyInterface::new();
        Command::SetComDeselectVoltage(0x05).send(&mut di).unwrap();
        di.check(0xBE, &[0x05]);
        assert_eq!(
            Command::SetComDeselectVoltage(8).send(&mut di),
            Err(Error::InvalidParameter)
        );
    }

    #[test]
    fn set_contrast() {
        let mut di = TestSpyInterface::new();
        Command::SetContrast(0xC8, 0x80, 0xC8).send(&mut di).unwrap();
        di.check(0xC1, &[0xC8, 0x80, 0xC8]);
    }

    #[test]
    fn set_master_contrast() {
        let mut di = TestSpyInterface::new();
        Command::SetMasterContrast(0x0A).send(&mut di).unwrap();
        di.check(0xC7, &[0x0A]);
        assert_eq!(
            Command::SetMasterContrast(16).send(&mut di),
            Err(Error::InvalidParameter)
        );
    }

    #[test]
    fn set_mux_ratio() {
        let mut di = TestSpyInterface::new();
        Command::SetMuxRatio(0x7F).send(&mut di).unwrap();
        di.check(0xCA, &[0x7F]);
        di.clear();
        Command::SetMuxRatio(15).send(&mut di).unwrap();
        di.check(0xCA, &[15]);
        assert_eq!(
            Command::SetMuxRatio(14).send(&mut di),
            Err(Error::InvalidParameter)
        );
        assert_eq!(
            Command::SetMuxRatio(128).send(&mut di),
            Err(Error::InvalidParameter)
        );
    }

    #[test]
    fn set_command_lock() {
        let mut di = TestSpyInterface::new();
        Command::SetCommandLock(CommandLock::Unlock).send(&mut di).unwrap();
        di.check(0xFD, &[0x12]);
        di.clear();
        Command::SetCommandLock(CommandLock::Lock).send(&mut di).unwrap();
        di.check(0xFD, &[0x16]);
        di.clear();
        Command::SetCommandLock(CommandLock::ProtectedCommandsInaccessible)
            .send(&mut di)
            .unwrap();
        di.check(0xFD, &[0xB0]);
        di.clear();
        Command::SetCommandLock(CommandLock::ProtectedCommandsAccessible)
            .send(&mut di)
            .unwrap();
        di.check(0xFD, &[0xB1]);
    }

    #[test]
    fn set_horizontal_scroll() {
        let mut di = TestSpyInterface::new();
        Command::SetHorizontalScroll(1, 0, 128, ScrollInterval::Normal)
            .send(&mut di)
            .unwrap();
        di.check(0x96, &[0x01, 0x00, 0x80, 0x00, 0x01]);
        di.clear();
        Command::SetHorizontalScroll(0xFF, 64, 32, ScrollInterval::Slow)
            .send(&mut di)
            .unwrap();
        di.check(0x96, &[0xFF, 0x40, 0x20, 0x00, 0x02]);
        di.clear();
        assert_eq!(
            Command::SetHorizontalScroll(1, 128, 1, ScrollInterval::Normal).send(&mut di),
            Err(Error::InvalidParameter)
        );
        assert_eq!(
            Command::SetHorizontalScroll(1, 100, 29, ScrollInterval::Normal).send(&mut di),
            Err(Error::InvalidParameter)
        );
        assert!(di.sent().is_empty());
    }

    #[test]
    fn start_stop_moving() {
        let mut di = TestSpyInterface::new();
        Command::StartMoving.send(&mut di).unwrap();
        di.check(0x9F, &[]);
        di.clear();
        Command::StopMoving.send(&mut di).unwrap();
        di.check(0x9E, &[]);
    }

    #[test]
    fn write_image_data() {
        let mut di = TestSpyInterface::new();
        let image_buf = (0..24).collect::<Vec<u8>>();
        BufCommand::WriteImageData(&image_buf[..])
            .send(&mut di)
            .unwrap();
        di.check(0x5C, &(0..24u8).collect::<Vec<_>>()[..]);
    }
}
