//! Defines structs for storing register values of commands in the SSD1351 that are associated
//! with relatively-static configuration.

use crate::command::*;
use crate::error::Error;
use crate::interface;

/// The default gray scale gamma table, one pulse width per grayscale level 1-63. Roughly a 2.2
/// gamma curve; the factory preset most modules ship with tuned values close to this.
pub const DEFAULT_GRAY_SCALE_TABLE: [u8; GRAY_SCALE_TABLE_LEN] = [
    0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x10,
    0x11, 0x12, 0x13, 0x15, 0x17, 0x19, 0x1B, 0x1D, 0x1F, 0x21, 0x23, 0x25, 0x27, 0x2A, 0x2D,
    0x30, 0x33, 0x36, 0x39, 0x3C, 0x3F, 0x42, 0x45, 0x48, 0x4C, 0x50, 0x54, 0x58, 0x5C, 0x60,
    0x64, 0x68, 0x6C, 0x70, 0x74, 0x78, 0x7D, 0x82, 0x87, 0x8C, 0x91, 0x96, 0x9B, 0xA0, 0xA5,
    0xAA, 0xAF, 0xB4,
];

/// The portion of the configuration which will persist inside the `Display` because it shares
/// registers with functions that can be changed after initialization, and because the drawing
/// layer has to know the active color depth, color sequence, and address increment to pack
/// pixels correctly. This allows the rest of the `Config` struct to be thrown away to save RAM
/// after `Display::init` finishes.
#[derive(Clone, Copy)]
pub(crate) struct PersistentConfig {
    pub(crate) increment_axis: IncrementAxis,
    pub(crate) column_remap: ColumnRemap,
    pub(crate) color_sequence: ColorSequence,
    pub(crate) com_scan_direction: ComScanDirection,
    pub(crate) com_layout: ComLayout,
    pub(crate) color_depth: ColorDepth,
    pub(crate) vdd_source: VddSource,
    pub(crate) parallel_bits: ParallelBits,
}

impl PersistentConfig {
    /// The remap register command encoding this configuration.
    pub(crate) fn remapping_command(&self) -> Command {
        Command::SetRemapping(
            self.increment_axis,
            self.column_remap,
            self.color_sequence,
            self.com_scan_direction,
            self.com_layout,
            self.color_depth,
        )
    }

    /// The function-select register command encoding this configuration.
    pub(crate) fn function_select_command(&self) -> Command {
        Command::SetFunctionSelect(self.vdd_source, self.parallel_bits)
    }
}

/// A configuration for the display. Builder methods offer a declarative way to either send a
/// configuration command at init time, or to leave it at the chip's POR default. The
/// [`basic`](Config::basic) and [`advance`](Config::advance) constructors fill in every setting
/// with values known to work on common 128x128 modules.
pub struct Config {
    pub(crate) persistent_config: PersistentConfig,
    mux_ratio_cmd: Option<Command>,
    start_line_cmd: Option<Command>,
    display_offset_cmd: Option<Command>,
    contrast_cmd: Option<Command>,
    master_contrast_cmd: Option<Command>,
    segment_low_voltage_cmd: Option<Command>,
    clock_fosc_divset_cmd: Option<Command>,
    phase_lengths_cmd: Option<Command>,
    precharge_voltage_cmd: Option<Command>,
    com_deselect_voltage_cmd: Option<Command>,
    gpio_modes_cmd: Option<Command>,
    second_precharge_period_cmd: Option<Command>,
    gray_scale_table: Option<[u8; GRAY_SCALE_TABLE_LEN]>,
    default_lut_cmd: Option<Command>,
}

impl Config {
    /// Create a new configuration. The color sequence and color depth are mandatory because the
    /// drawing layer cannot pack a single pixel without them, so they must be provided in the
    /// constructor. All other options can be optionally set by calling the provided builder
    /// methods on `Config`; left alone, the orientation settings default to the layout of
    /// common 128x128 modules and everything else stays at the chip's POR value.
    pub fn new(color_sequence: ColorSequence, color_depth: ColorDepth) -> Self {
        Config {
            persistent_config: PersistentConfig {
                increment_axis: IncrementAxis::Horizontal,
                column_remap: ColumnRemap::Forward,
                color_sequence: color_sequence,
                com_scan_direction: ComScanDirection::RowZeroLast,
                com_layout: ComLayout::SplitOddEven,
                color_depth: color_depth,
                vdd_source: VddSource::Internal,
                parallel_bits: ParallelBits::Select8,
            },
            mux_ratio_cmd: None,
            start_line_cmd: None,
            display_offset_cmd: None,
            contrast_cmd: None,
            master_contrast_cmd: None,
            segment_low_voltage_cmd: None,
            clock_fosc_divset_cmd: None,
            phase_lengths_cmd: None,
            precharge_voltage_cmd: None,
            com_deselect_voltage_cmd: None,
            gpio_modes_cmd: None,
            second_precharge_period_cmd: None,
            gray_scale_table: None,
            default_lut_cmd: None,
        }
    }

    /// The complete "basic" preset: 65k colors in RGB order, horizontal increment, and the full
    /// set of drive parameters 128x128 modules are normally shipped with, including the default
    /// gamma table.
    pub fn basic() -> Self {
        Config::new(ColorSequence::Rgb, ColorDepth::Depth65k)
            .mux_ratio(0x7F)
            .start_line(0)
            .display_offset(0)
            .contrast(0xC8, 0x80, 0xC8)
            .master_contrast(0x0A)
            .segment_low_voltage(SegmentVsl::External)
            .clock_fosc_divset(0xF, 0x1)
            .phase_lengths(2, 3)
            .precharge_voltage(0x17)
            .com_deselect_voltage(0x05)
            .gpio_modes(GpioMode::InputDisabled, GpioMode::InputDisabled)
            .second_precharge_period(0x01)
            .gray_scale_table(DEFAULT_GRAY_SCALE_TABLE)
    }

    /// The "advance" preset. Electrically identical to [`basic`](Config::basic); the name is
    /// kept because the two presets are conventionally distinguished by whether scrolling is
    /// used at runtime, which this driver allows on any initialized display.
    pub fn advance() -> Self {
        Config::basic()
    }

    /// Extend this `Config` to explicitly configure the address increment orientation. See
    /// `Command::SetRemapping`.
    pub fn increment_axis(self, increment_axis: IncrementAxis) -> Self {
        Self {
            persistent_config: PersistentConfig {
                increment_axis: increment_axis,
                ..self.persistent_config
            },
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure column remapping. See
    /// `Command::SetRemapping`.
    pub fn column_remap(self, column_remap: ColumnRemap) -> Self {
        Self {
            persistent_config: PersistentConfig {
                column_remap: column_remap,
                ..self.persistent_config
            },
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the COM scan direction. See
    /// `Command::SetRemapping`.
    pub fn com_scan_direction(self, com_scan_direction: ComScanDirection) -> Self {
        Self {
            persistent_config: PersistentConfig {
                com_scan_direction: com_scan_direction,
                ..self.persistent_config
            },
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the COM line layout. See
    /// `Command::SetRemapping`.
    pub fn com_layout(self, com_layout: ComLayout) -> Self {
        Self {
            persistent_config: PersistentConfig {
                com_layout: com_layout,
                ..self.persistent_config
            },
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the VDD regulator source. See
    /// `Command::SetFunctionSelect`.
    pub fn vdd_source(self, vdd_source: VddSource) -> Self {
        Self {
            persistent_config: PersistentConfig {
                vdd_source: vdd_source,
                ..self.persistent_config
            },
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the parallel interface width. See
    /// `Command::SetFunctionSelect`.
    pub fn parallel_bits(self, parallel_bits: ParallelBits) -> Self {
        Self {
            persistent_config: PersistentConfig {
                parallel_bits: parallel_bits,
                ..self.persistent_config
            },
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the MUX ratio. See `Command::SetMuxRatio`.
    pub fn mux_ratio(self, ratio: u8) -> Self {
        Self {
            mux_ratio_cmd: Some(Command::SetMuxRatio(ratio)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the display start line. See
    /// `Command::SetStartLine`.
    pub fn start_line(self, line: u8) -> Self {
        Self {
            start_line_cmd: Some(Command::SetStartLine(line)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the display COM offset. See
    /// `Command::SetDisplayOffset`.
    pub fn display_offset(self, offset: u8) -> Self {
        Self {
            display_offset_cmd: Some(Command::SetDisplayOffset(offset)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the per-channel contrast currents. See
    /// `Command::SetContrast`.
    pub fn contrast(self, a: u8, b: u8, c: u8) -> Self {
        Self {
            contrast_cmd: Some(Command::SetContrast(a, b, c)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the master contrast. See
    /// `Command::SetMasterContrast`.
    pub fn master_contrast(self, contrast: u8) -> Self {
        Self {
            master_contrast_cmd: Some(Command::SetMasterContrast(contrast)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the segment low-voltage source. See
    /// `Command::SetSegmentLowVoltage`.
    pub fn segment_low_voltage(self, vsl: SegmentVsl) -> Self {
        Self {
            segment_low_voltage_cmd: Some(Command::SetSegmentLowVoltage(vsl)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the display clock frequency and divider.
    /// See `Command::SetClockFoscDivset`.
    pub fn clock_fosc_divset(self, fosc: u8, divset: u8) -> Self {
        Self {
            clock_fosc_divset_cmd: Some(Command::SetClockFoscDivset(fosc, divset)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure OLED drive phase lengths. See
    /// `Command::SetPhaseLengths`.
    pub fn phase_lengths(self, reset: u8, first_precharge: u8) -> Self {
        Self {
            phase_lengths_cmd: Some(Command::SetPhaseLengths(reset, first_precharge)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure OLED drive precharge voltage. See
    /// `Command::SetPreChargeVoltage`.
    pub fn precharge_voltage(self, voltage: u8) -> Self {
        Self {
            precharge_voltage_cmd: Some(Command::SetPreChargeVoltage(voltage)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure OLED drive COM deselect voltage. See
    /// `Command::SetComDeselectVoltage`.
    pub fn com_deselect_voltage(self, voltage: u8) -> Self {
        Self {
            com_deselect_voltage_cmd: Some(Command::SetComDeselectVoltage(voltage)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the two GPIO pins. See
    /// `Command::SetGpioModes`.
    pub fn gpio_modes(self, gpio_0: GpioMode, gpio_1: GpioMode) -> Self {
        Self {
            gpio_modes_cmd: Some(Command::SetGpioModes(gpio_0, gpio_1)),
            ..self
        }
    }

    /// Extend this `Config` to explicitly configure the OLED drive second precharge period. See
    /// `Command::SetSecondPrechargePeriod`.
    pub fn second_precharge_period(self, period: u8) -> Self {
        Self {
            second_precharge_period_cmd: Some(Command::SetSecondPrechargePeriod(period)),
            ..self
        }
    }

    /// Extend this `Config` to load a custom gray scale gamma table at init, replacing any
    /// previously selected built-in table. See `BufCommand::SetGrayScaleTable`.
    pub fn gray_scale_table(self, table: [u8; GRAY_SCALE_TABLE_LEN]) -> Self {
        Self {
            gray_scale_table: Some(table),
            default_lut_cmd: None,
            ..self
        }
    }

    /// Extend this `Config` to select the built-in linear gamma table at init, replacing any
    /// previously given custom table. See `Command::SetDefaultGrayScaleTable`.
    pub fn default_gray_scale_table(self) -> Self {
        Self {
            gray_scale_table: None,
            default_lut_cmd: Some(Command::SetDefaultGrayScaleTable),
            ..self
        }
    }

    /// The configuration commands in chip initialization order. The two accumulator registers
    /// are always sent, assembled whole from the persistent fields; everything else is sent
    /// only if explicitly configured. Several drive parameters take effect relative to the MUX
    /// ratio and remap settings, so those lead the sequence.
    fn command_sequence(&self) -> [Option<Command>; 14] {
        [
            self.mux_ratio_cmd,
            Some(self.persistent_config.remapping_command()),
            self.start_line_cmd,
            self.display_offset_cmd,
            self.contrast_cmd,
            self.master_contrast_cmd,
            Some(self.persistent_config.function_select_command()),
            self.segment_low_voltage_cmd,
            self.clock_fosc_divset_cmd,
            self.phase_lengths_cmd,
            self.precharge_voltage_cmd,
            self.com_deselect_voltage_cmd,
            self.gpio_modes_cmd,
            self.second_precharge_period_cmd,
        ]
    }

    /// Transmit commands to the display at `iface` necessary to put that display into the
    /// configuration encoded in `self`.
    pub(crate) fn send<DI>(&self, iface: &mut DI) -> Result<(), Error<DI::Error>>
    where
        DI: interface::DisplayInterface,
    {
        let sequence = self.command_sequence();
        for cmd in sequence.iter() {
            cmd.map_or(Ok(()), |c| c.send(iface))?;
        }
        if let Some(ref table) = self.gray_scale_table {
            BufCommand::SetGrayScaleTable(&table[..]).send(iface)?;
        }
        self.default_lut_cmd.map_or(Ok(()), |c| c.send(iface))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::test_spy::{Sent, TestSpyInterface};

    #[test]
    fn minimal_config_sends_only_the_accumulator_registers() {
        let mut di = TestSpyInterface::new();
        Config::new(ColorSequence::Rgb, ColorDepth::Depth65k)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[
            Sent::Cmd(0xA0),
            Sent::Data(vec![0x74]),
            Sent::Cmd(0xAB),
            Sent::Data(vec![0x01]),
        ]);
    }

    #[test]
    fn basic_preset_sends_the_full_sequence_in_order() {
        let mut di = TestSpyInterface::new();
        Config::basic().send(&mut di).unwrap();
        di.check_multi(&[
            Sent::Cmd(0xCA),
            Sent::Data(vec![0x7F]),
            Sent::Cmd(0xA0),
            Sent::Data(vec![0x74]),
            Sent::Cmd(0xA1),
            Sent::Data(vec![0x00]),
            Sent::Cmd(0xA2),
            Sent::Data(vec![0x00]),
            Sent::Cmd(0xC1),
            Sent::Data(vec![0xC8, 0x80, 0xC8]),
            Sent::Cmd(0xC7),
            Sent::Data(vec![0x0A]),
            Sent::Cmd(0xAB),
            Sent::Data(vec![0x01]),
            Sent::Cmd(0xB4),
            Sent::Data(vec![0xA0, 0xB5, 0x55]),
            Sent::Cmd(0xB3),
            Sent::Data(vec![0xF1]),
            Sent::Cmd(0xB1),
            Sent::Data(vec![0x32]),
            Sent::Cmd(0xBB),
            Sent::Data(vec![0x17]),
            Sent::Cmd(0xBE),
            Sent::Data(vec![0x05]),
            Sent::Cmd(0xB5),
            Sent::Data(vec![0x00]),
            Sent::Cmd(0xB6),
            Sent::Data(vec![0x01]),
            Sent::Cmd(0xB8),
            Sent::Data(DEFAULT_GRAY_SCALE_TABLE.to_vec()),
        ]);
    }

    #[test]
    fn builder_overrides_change_the_encoded_bytes() {
        let mut di = TestSpyInterface::new();
        Config::new(ColorSequence::Bgr, ColorDepth::Depth256)
            .increment_axis(IncrementAxis::Vertical)
            .com_scan_direction(ComScanDirection::RowZeroFirst)
            .com_layout(ComLayout::Progressive)
            .vdd_source(VddSource::External)
            .contrast(1, 2, 3)
            .send(&mut di)
            .unwrap();
        di.check_multi(&[
            Sent::Cmd(0xA0),
            Sent::Data(vec![0x01]),
            Sent::Cmd(0xC1),
            Sent::Data(vec![0x01, 0x02, 0x03]),
            Sent::Cmd(0xAB),
            Sent::Data(vec![0x00]),
        ]);
    }

    #[test]
    fn linear_lut_replaces_a_custom_table() {
        let mut di = TestSpyInterface::new();
        Config::new(ColorSequence::Rgb, ColorDepth::Depth65k)
            .gray_scale_table(DEFAULT_GRAY_SCALE_TABLE)
            .default_gray_scale_table()
            .send(&mut di)
            .unwrap();
        di.check_multi(&[
            Sent::Cmd(0xA0),
            Sent::Data(vec![0x74]),
            Sent::Cmd(0xAB),
            Sent::Data(vec![0x01]),
            Sent::Cmd(0xB9),
        ]);
    }

    #[test]
    fn invalid_builder_values_surface_at_send_time() {
        let mut di = TestSpyInterface::new();
        let config = Config::new(ColorSequence::Rgb, ColorDepth::Depth65k).mux_ratio(14);
        assert_eq!(config.send(&mut di), Err(Error::InvalidParameter));
        assert!(di.sent().is_empty());
    }
}
