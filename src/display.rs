//! The main driver API, which uses the command module at a higher level. It owns the bus
//! interface, keeps the pieces of configuration the drawing layer depends on, and streams pixel
//! data into display RAM.

use core::iter;

use crate::color::{pack_rgb, pack_rgb565};
use crate::command::*;
use crate::config::{Config, PersistentConfig};
use crate::error::Error;
use crate::font::Font;
use crate::hal::blocking::delay::DelayMs;
use crate::interface;

/// A static description of the driver and the chip it drives.
#[derive(Clone, Copy, Debug)]
pub struct DriverInfo {
    pub chip_name: &'static str,
    pub manufacturer_name: &'static str,
    pub interface: &'static str,
    pub supply_voltage_min_v: f32,
    pub supply_voltage_max_v: f32,
    pub max_current_ma: f32,
    pub temperature_min_c: f32,
    pub temperature_max_c: f32,
    pub driver_version: &'static str,
}

/// Describe the driver and the chip it supports. Pure data; nothing is sent anywhere.
pub fn info() -> DriverInfo {
    DriverInfo {
        chip_name: "Solomon Systech SSD1351",
        manufacturer_name: "Solomon Systech",
        interface: "SPI",
        supply_voltage_min_v: 2.4,
        supply_voltage_max_v: 2.6,
        max_current_ma: 0.70,
        temperature_min_c: -40.0,
        temperature_max_c: 85.0,
        driver_version: env!("CARGO_PKG_VERSION"),
    }
}

/// The basic driver for the display.
pub struct Display<DI>
where
    DI: interface::DisplayInterface,
{
    iface: DI,
    persistent_config: Option<PersistentConfig>,
}

impl<DI> Display<DI>
where
    DI: interface::DisplayInterface,
{
    /// Construct a new display driver over an interface. The driver starts uninitialized; every
    /// operation other than `init` will refuse to touch the bus until `init` has succeeded.
    pub fn new(iface: DI) -> Self {
        Display {
            iface: iface,
            persistent_config: None,
        }
    }

    /// Consume the driver, handing back its interface.
    pub fn release(self) -> DI {
        self.iface
    }

    /// The configuration stored at init time, or `NotInitialized` before that.
    fn persistent(&self) -> Result<PersistentConfig, Error<DI::Error>> {
        self.persistent_config.ok_or(Error::NotInitialized)
    }

    /// Initialize the display with a config message, hardware-resetting the chip first. The
    /// command interface is unlocked, the chip is configured while asleep, and only then is the
    /// panel switched on in normal display mode.
    pub fn init<D>(&mut self, config: Config, delay: &mut D) -> Result<(), Error<DI::Error>>
    where
        D: DelayMs<u8>,
    {
        if self.persistent_config.is_some() {
            return Err(Error::AlreadyInitialized);
        }
        self.iface.reset(delay).map_err(Error::Interface)?;
        Command::SetCommandLock(CommandLock::Unlock).send(&mut self.iface)?;
        Command::SetCommandLock(CommandLock::ProtectedCommandsAccessible).send(&mut self.iface)?;
        Command::SetSleepMode(true).send(&mut self.iface)?;
        config.send(&mut self.iface)?;
        self.persistent_config = Some(config.persistent_config);
        Command::SetDisplayMode(DisplayMode::Normal).send(&mut self.iface)?;
        Command::SetSleepMode(false).send(&mut self.iface)?;
        #[cfg(feature = "log")]
        log::debug!("display initialized");
        Ok(())
    }

    /// Shut the display down: blank the panel, then put the chip to sleep. The driver returns to
    /// the uninitialized state, so a later `init` can bring the panel back up.
    pub fn deinit(&mut self) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetDisplayMode(DisplayMode::BlankDark).send(&mut self.iface)?;
        Command::SetSleepMode(true).send(&mut self.iface)?;
        self.persistent_config = None;
        #[cfg(feature = "log")]
        log::debug!("display shut down");
        Ok(())
    }

    /// Control sleep mode.
    pub fn sleep(&mut self, enabled: bool) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetSleepMode(enabled).send(&mut self.iface)
    }

    /// Control the display mode. RAM contents are untouched; `Normal` shows them again.
    pub fn display_mode(&mut self, mode: DisplayMode) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetDisplayMode(mode).send(&mut self.iface)
    }

    /// Set the per-color contrast currents.
    pub fn contrast(
        &mut self,
        color_a: u8,
        color_b: u8,
        color_c: u8,
    ) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetContrast(color_a, color_b, color_c).send(&mut self.iface)
    }

    /// Set the master contrast, which scales all three color currents. 0-15.
    pub fn master_contrast(&mut self, contrast: u8) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetMasterContrast(contrast).send(&mut self.iface)
    }

    /// Load a gamma correction table, one pulse width for each of the 63 gray scale levels.
    pub fn gray_scale_table(&mut self, table: &[u8]) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        BufCommand::SetGrayScaleTable(table).send(&mut self.iface)
    }

    /// Drop back to the chip's built-in linear gray scale table.
    pub fn default_gray_scale_table(&mut self) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetDefaultGrayScaleTable.send(&mut self.iface)
    }

    /// Vertically pan the display by setting which display RAM row the topmost row of the panel
    /// reads from. The panel follows without any change to RAM contents.
    pub fn vertical_pan(&mut self, offset: u8) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetStartLine(offset).send(&mut self.iface)
    }

    /// Shift the mapping between display RAM rows and COM lines.
    pub fn display_offset(&mut self, offset: u8) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetDisplayOffset(offset).send(&mut self.iface)
    }

    /// Set the multiplex ratio: the number of COM lines driven, minus one. 15-127.
    pub fn mux_ratio(&mut self, ratio: u8) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetMuxRatio(ratio).send(&mut self.iface)
    }

    /// Send the remap register with `config`, then adopt it as current.
    fn commit_remapping(&mut self, config: PersistentConfig) -> Result<(), Error<DI::Error>> {
        config.remapping_command().send(&mut self.iface)?;
        self.persistent_config = Some(config);
        Ok(())
    }

    /// Send the function select register with `config`, then adopt it as current.
    fn commit_function_select(&mut self, config: PersistentConfig) -> Result<(), Error<DI::Error>> {
        config.function_select_command().send(&mut self.iface)?;
        self.persistent_config = Some(config);
        Ok(())
    }

    /// Change the direction RAM addresses auto-increment in during writes. Takes effect from the
    /// next drawing operation.
    pub fn set_increment_axis(&mut self, axis: IncrementAxis) -> Result<(), Error<DI::Error>> {
        let mut config = self.persistent()?;
        config.increment_axis = axis;
        self.commit_remapping(config)
    }

    /// Mirror the display horizontally by remapping which RAM column SEG0 reads from.
    pub fn set_column_remap(&mut self, remap: ColumnRemap) -> Result<(), Error<DI::Error>> {
        let mut config = self.persistent()?;
        config.column_remap = remap;
        self.commit_remapping(config)
    }

    /// Change the order of color channels within each pixel. RAM contents are reinterpreted, not
    /// converted; pixels drawn from here on are packed in the new order.
    pub fn set_color_sequence(&mut self, sequence: ColorSequence) -> Result<(), Error<DI::Error>> {
        let mut config = self.persistent()?;
        config.color_sequence = sequence;
        self.commit_remapping(config)
    }

    /// Mirror the display vertically by reversing the COM scan direction.
    pub fn set_com_scan_direction(
        &mut self,
        direction: ComScanDirection,
    ) -> Result<(), Error<DI::Error>> {
        let mut config = self.persistent()?;
        config.com_scan_direction = direction;
        self.commit_remapping(config)
    }

    /// Change how COM lines are wired to display RAM rows.
    pub fn set_com_layout(&mut self, layout: ComLayout) -> Result<(), Error<DI::Error>> {
        let mut config = self.persistent()?;
        config.com_layout = layout;
        self.commit_remapping(config)
    }

    /// Change the color depth. Existing RAM contents are reinterpreted in the new format; pixels
    /// drawn from here on are packed to match.
    pub fn set_color_depth(&mut self, depth: ColorDepth) -> Result<(), Error<DI::Error>> {
        let mut config = self.persistent()?;
        config.color_depth = depth;
        self.commit_remapping(config)
    }

    /// Select whether VDD is regulated internally or supplied by the host board.
    pub fn set_vdd_source(&mut self, source: VddSource) -> Result<(), Error<DI::Error>> {
        let mut config = self.persistent()?;
        config.vdd_source = source;
        self.commit_function_select(config)
    }

    /// Select the parallel host interface width. Irrelevant while driving the chip over SPI, but
    /// the bit shares a register with the VDD source so the driver tracks it anyway.
    pub fn set_parallel_bits(&mut self, bits: ParallelBits) -> Result<(), Error<DI::Error>> {
        let mut config = self.persistent()?;
        config.parallel_bits = bits;
        self.commit_function_select(config)
    }

    /// Set the lengths of phase 1 and 2 of segment charging, in DCLKs.
    pub fn phase_lengths(&mut self, phase_1: u8, phase_2: u8) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetPhaseLengths(phase_1, phase_2).send(&mut self.iface)
    }

    /// Set the oscillator frequency and display clock divider.
    pub fn clock_fosc_divset(&mut self, fosc: u8, divset: u8) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetClockFoscDivset(fosc, divset).send(&mut self.iface)
    }

    /// Select the source of the segment low voltage V_SL.
    pub fn segment_low_voltage(&mut self, vsl: SegmentVsl) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetSegmentLowVoltage(vsl).send(&mut self.iface)
    }

    /// Set the first pre-charge voltage level as an offset from the V_CC-scaled minimum. 0-31.
    pub fn precharge_voltage(&mut self, level: u8) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetPreChargeVoltage(level).send(&mut self.iface)
    }

    /// Set the COM deselect voltage level as a fraction of V_CC. 0-7.
    pub fn com_deselect_voltage(&mut self, level: u8) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetComDeselectVoltage(level).send(&mut self.iface)
    }

    /// Set the length of the second segment pre-charge phase, in DCLKs. 0-15.
    pub fn second_precharge_period(&mut self, period: u8) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetSecondPrechargePeriod(period).send(&mut self.iface)
    }

    /// Set the modes of the two GPIO pins.
    pub fn gpio_modes(
        &mut self,
        gpio_0: GpioMode,
        gpio_1: GpioMode,
    ) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetGpioModes(gpio_0, gpio_1).send(&mut self.iface)
    }

    /// Change the command lock state. Locking leaves only the unlock command functional.
    pub fn set_command_lock(&mut self, lock: CommandLock) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetCommandLock(lock).send(&mut self.iface)
    }

    /// Set the column window for RAM access. Writes wrap within the window until it changes.
    pub fn set_column_address(&mut self, start: u8, end: u8) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetColumnAddress(start, end).send(&mut self.iface)
    }

    /// Set the row window for RAM access.
    pub fn set_row_address(&mut self, start: u8, end: u8) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::SetRowAddress(start, end).send(&mut self.iface)
    }

    /// Enter RAM write mode. Data bytes sent next land at the window origin and auto-increment.
    pub fn write_ram(&mut self) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        BufCommand::WriteImageData(&[]).send(&mut self.iface)
    }

    /// Enter RAM read mode.
    pub fn read_ram(&mut self) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::ReadRam.send(&mut self.iface)
    }

    /// Send a raw command byte, bypassing the typed command layer.
    pub fn write_command(&mut self, cmd: u8) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        self.iface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send raw data bytes, bypassing the typed command layer.
    pub fn write_data(&mut self, data: &[u8]) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        self.iface.send_data(data).map_err(Error::Interface)
    }

    /// Set the addressing window to the inclusive rectangle and enter write mode. The chip
    /// resets its RAM pointer to the window origin on every address command, so drawing
    /// operations re-issue all three commands each time.
    fn set_window(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), Error<DI::Error>> {
        Command::SetColumnAddress(x0, x1).send(&mut self.iface)?;
        Command::SetRowAddress(y0, y1).send(&mut self.iface)?;
        BufCommand::WriteImageData(&[]).send(&mut self.iface)
    }

    /// Stream bytes from `iter` into display RAM using constant memory, by alternately filling a
    /// chunk buffer from the iterator and writing it to the interface.
    fn stream_data<I>(&mut self, mut iter: I) -> Result<(), Error<DI::Error>>
    where
        I: Iterator<Item = u8>,
    {
        let mut buf = [0u8; 32];
        loop {
            let mut chunk_len = 0;
            for slot in buf.iter_mut() {
                match iter.next() {
                    Some(byte) => {
                        *slot = byte;
                        chunk_len += 1;
                    }
                    None => break,
                }
            }
            if chunk_len > 0 {
                self.iface
                    .send_data(&buf[..chunk_len])
                    .map_err(Error::Interface)?;
            }
            if chunk_len != buf.len() {
                return Ok(());
            }
        }
    }

    /// Fill the whole frame with black in the current color depth.
    pub fn clear(&mut self) -> Result<(), Error<DI::Error>> {
        let config = self.persistent()?;
        let total = NUM_PIXEL_COLS as usize
            * NUM_PIXEL_ROWS as usize
            * config.color_depth.bytes_per_pixel();
        self.set_window(0, 0, PIXEL_COL_MAX, PIXEL_ROW_MAX)?;
        self.stream_data(iter::repeat(0).take(total))
    }

    /// Draw a single pixel. `color` is 24-bit `0xRRGGBB`, quantized to the current color depth.
    pub fn draw_point(&mut self, x: u8, y: u8, color: u32) -> Result<(), Error<DI::Error>> {
        let config = self.persistent()?;
        if x > PIXEL_COL_MAX || y > PIXEL_ROW_MAX {
            return Err(Error::InvalidParameter);
        }
        let pixel = pack_rgb(color, config.color_depth, config.color_sequence);
        self.set_window(x, y, x, y)?;
        self.iface.send_data(pixel.as_bytes()).map_err(Error::Interface)
    }

    /// Fill the inclusive rectangle from `(x0, y0)` to `(x1, y1)` with a solid color.
    pub fn fill_rect(
        &mut self,
        x0: u8,
        y0: u8,
        x1: u8,
        y1: u8,
        color: u32,
    ) -> Result<(), Error<DI::Error>> {
        let config = self.persistent()?;
        if x1 < x0 || y1 < y0 || x1 > PIXEL_COL_MAX || y1 > PIXEL_ROW_MAX {
            return Err(Error::InvalidParameter);
        }
        let pixel = pack_rgb(color, config.color_depth, config.color_sequence);
        let count = (x1 - x0 + 1) as usize * (y1 - y0 + 1) as usize;
        self.set_window(x0, y0, x1, y1)?;
        self.stream_data((0..count).flat_map(|_| pixel))
    }

    /// Draw an image into the rectangle of the given size whose upper-left corner is `(x, y)`.
    /// `picture` holds one 24-bit `0xRRGGBB` value per pixel in row-major order, and each is
    /// quantized to the current color depth on the way out.
    pub fn draw_picture(
        &mut self,
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        picture: &[u32],
    ) -> Result<(), Error<DI::Error>> {
        let config = self.persistent()?;
        if width == 0
            || height == 0
            || x as u16 + width as u16 > NUM_PIXEL_COLS as u16
            || y as u16 + height as u16 > NUM_PIXEL_ROWS as u16
            || picture.len() != width as usize * height as usize
        {
            return Err(Error::InvalidParameter);
        }
        let depth = config.color_depth;
        let sequence = config.color_sequence;
        self.set_window(x, y, x + width - 1, y + height - 1)?;
        self.stream_data(picture.iter().flat_map(|&c| pack_rgb(c, depth, sequence)))
    }

    /// Draw an image of pre-packed 5-6-5 pixels. This skips quantization entirely, so it is only
    /// legal while the display is in 65k color mode; in any other depth the buffer would be
    /// misinterpreted, and the call fails with `InvalidConfig`.
    pub fn draw_picture_16bits(
        &mut self,
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        picture: &[u16],
    ) -> Result<(), Error<DI::Error>> {
        let config = self.persistent()?;
        match config.color_depth {
            ColorDepth::Depth65k => {}
            _ => return Err(Error::InvalidConfig),
        }
        if width == 0
            || height == 0
            || x as u16 + width as u16 > NUM_PIXEL_COLS as u16
            || y as u16 + height as u16 > NUM_PIXEL_ROWS as u16
            || picture.len() != width as usize * height as usize
        {
            return Err(Error::InvalidParameter);
        }
        let sequence = config.color_sequence;
        self.set_window(x, y, x + width - 1, y + height - 1)?;
        self.stream_data(picture.iter().flat_map(|&c| pack_rgb565(c, sequence)))
    }

    /// Draw a string with its upper-left corner at `(x, y)`. Each glyph cell is drawn opaque:
    /// set pixels in `color`, unset pixels in `background`. Text never wraps; a string that
    /// would pass the right edge, a font that would pass the bottom edge, or a character
    /// outside printable ASCII all fail validation before anything is sent.
    pub fn write_string(
        &mut self,
        x: u8,
        y: u8,
        text: &str,
        font: Font,
        color: u32,
        background: u32,
    ) -> Result<(), Error<DI::Error>> {
        let config = self.persistent()?;
        let span = text.chars().count() * font.width() as usize;
        if x as usize + span > NUM_PIXEL_COLS as usize
            || y as usize + font.height() as usize > NUM_PIXEL_ROWS as usize
        {
            return Err(Error::InvalidParameter);
        }
        if text.chars().any(|c| font.glyph(c).is_none()) {
            return Err(Error::InvalidParameter);
        }
        let mut left = x;
        for c in text.chars() {
            let glyph = match font.glyph(c) {
                Some(glyph) => glyph,
                None => return Err(Error::InvalidParameter),
            };
            self.draw_glyph(left, y, glyph, font, &config, color, background)?;
            left += font.width();
        }
        Ok(())
    }

    /// Stream one opaque glyph cell, walking it in whichever order the chip will store it.
    fn draw_glyph(
        &mut self,
        left: u8,
        top: u8,
        glyph: &[u8],
        font: Font,
        config: &PersistentConfig,
        color: u32,
        background: u32,
    ) -> Result<(), Error<DI::Error>> {
        let width = font.width();
        let height = font.height();
        let fg = pack_rgb(color, config.color_depth, config.color_sequence);
        let bg = pack_rgb(background, config.color_depth, config.color_sequence);
        self.set_window(left, top, left + width - 1, top + height - 1)?;
        match config.increment_axis {
            IncrementAxis::Horizontal => self.stream_data(
                iproduct!(0..height, 0..width)
                    .flat_map(|(row, col)| if font.glyph_bit(glyph, col, row) { fg } else { bg }),
            ),
            IncrementAxis::Vertical => self.stream_data(
                iproduct!(0..width, 0..height)
                    .flat_map(|(col, row)| if font.glyph_bit(glyph, col, row) { fg } else { bg }),
            ),
        }
    }

    /// Configure horizontal scrolling. The chip only latches scroll parameters reliably while
    /// stopped, so any active scroll is stopped first. Scrolling does not start until
    /// `start_moving` is called.
    pub fn set_scroll(
        &mut self,
        scroll: u8,
        start_row: u8,
        row_count: u8,
        interval: ScrollInterval,
    ) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        if start_row > PIXEL_ROW_MAX || start_row as u16 + row_count as u16 > NUM_PIXEL_ROWS as u16 {
            return Err(Error::InvalidParameter);
        }
        Command::StopMoving.send(&mut self.iface)?;
        Command::SetHorizontalScroll(scroll, start_row, row_count, interval).send(&mut self.iface)
    }

    /// Start scrolling with the configured parameters.
    pub fn start_moving(&mut self) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::StartMoving.send(&mut self.iface)
    }

    /// Freeze scrolling. The displayed image stays wherever it has scrolled to.
    pub fn stop_moving(&mut self) -> Result<(), Error<DI::Error>> {
        self.persistent()?;
        Command::StopMoving.send(&mut self.iface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_GRAY_SCALE_TABLE;
    use crate::interface::test_spy::{NoopDelay, Sent, TestSpyInterface};

    macro_rules! send {
        (reset) => {Sent::Reset};
        ([$($d:tt),*]) => {Sent::Data(vec![$($d,)*])};
        ($c:tt) => {Sent::Cmd($c)};
    }
    macro_rules! sends {
        ($($e:tt),*) => {&[$(send!($e),)*]};
    }

    fn init_display(di: &mut TestSpyInterface, config: Config) -> Display<TestSpyInterface> {
        let mut disp = Display::new(di.split());
        disp.init(config, &mut NoopDelay).unwrap();
        di.clear();
        disp
    }

    /// Flatten the data events in `sent` after `skip` leading events into one buffer.
    fn data_after(sent: &[Sent], skip: usize) -> Vec<u8> {
        let mut out = Vec::new();
        for event in &sent[skip..] {
            match event {
                Sent::Data(bytes) => out.extend_from_slice(bytes),
                other => panic!("unexpected event: {:?}", other),
            }
        }
        out
    }

    fn decode_565(hi: u8, lo: u8) -> (u8, u8, u8) {
        let c = (hi as u16) << 8 | lo as u16;
        let r = ((c >> 11) & 0x1F) as u8;
        let g = ((c >> 5) & 0x3F) as u8;
        let b = (c & 0x1F) as u8;
        (r << 3 | r >> 2, g << 2 | g >> 4, b << 3 | b >> 2)
    }

    #[test]
    fn init_resets_unlocks_configures_then_wakes() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.init(
            Config::new(ColorSequence::Rgb, ColorDepth::Depth65k),
            &mut NoopDelay,
        )
        .unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            reset,
            0xFD, [0x12], // unlock command interface
            0xFD, [0xB1], // make protected commands accessible
            0xAE, // sleep enable
            0xA0, [0x74], // remapping
            0xAB, [0x01], // function select
            0xA6, // display normal
            0xAF // sleep disable
        ));
    }

    #[test]
    fn init_with_basic_preset_sends_the_full_recipe() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        disp.init(Config::basic(), &mut NoopDelay).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        let expected = vec![
            Sent::Reset,
            Sent::Cmd(0xFD), Sent::Data(vec![0x12]), // unlock command interface
            Sent::Cmd(0xFD), Sent::Data(vec![0xB1]), // make protected commands accessible
            Sent::Cmd(0xAE),                         // sleep enable
            Sent::Cmd(0xCA), Sent::Data(vec![0x7F]), // mux ratio 128 lines
            Sent::Cmd(0xA0), Sent::Data(vec![0x74]), // remapping
            Sent::Cmd(0xA1), Sent::Data(vec![0x00]), // start line 0
            Sent::Cmd(0xA2), Sent::Data(vec![0x00]), // display offset 0
            Sent::Cmd(0xC1), Sent::Data(vec![0xC8, 0x80, 0xC8]), // contrast currents
            Sent::Cmd(0xC7), Sent::Data(vec![0x0A]), // master contrast
            Sent::Cmd(0xAB), Sent::Data(vec![0x01]), // function select
            Sent::Cmd(0xB4), Sent::Data(vec![0xA0, 0xB5, 0x55]), // segment low voltage
            Sent::Cmd(0xB3), Sent::Data(vec![0xF1]), // clock
            Sent::Cmd(0xB1), Sent::Data(vec![0x32]), // phase lengths
            Sent::Cmd(0xBB), Sent::Data(vec![0x17]), // precharge voltage
            Sent::Cmd(0xBE), Sent::Data(vec![0x05]), // com deselect voltage
            Sent::Cmd(0xB5), Sent::Data(vec![0x00]), // gpio modes
            Sent::Cmd(0xB6), Sent::Data(vec![0x01]), // second precharge period
            Sent::Cmd(0xB8), Sent::Data(DEFAULT_GRAY_SCALE_TABLE.to_vec()), // gamma table
            Sent::Cmd(0xA6),                         // display normal
            Sent::Cmd(0xAF),                         // sleep disable
        ];
        di.check_multi(&expected);
    }

    #[test]
    fn init_twice_is_rejected() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::basic());
        assert_eq!(
            disp.init(Config::basic(), &mut NoopDelay),
            Err(Error::AlreadyInitialized)
        );
        assert!(di.sent().is_empty());
    }

    #[test]
    fn operations_before_init_are_rejected() {
        let di = TestSpyInterface::new();
        let mut disp = Display::new(di.split());
        assert_eq!(disp.sleep(true), Err(Error::NotInitialized));
        assert_eq!(disp.draw_point(0, 0, 0), Err(Error::NotInitialized));
        assert_eq!(disp.clear(), Err(Error::NotInitialized));
        assert_eq!(disp.deinit(), Err(Error::NotInitialized));
        assert!(di.sent().is_empty());
    }

    #[test]
    fn deinit_blanks_and_sleeps_then_allows_reinit() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        disp.deinit().unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0xA4, // display blank
            0xAE // sleep enable
        ));
        assert_eq!(disp.sleep(false), Err(Error::NotInitialized));
        di.clear();
        disp.init(
            Config::new(ColorSequence::Rgb, ColorDepth::Depth65k),
            &mut NoopDelay,
        )
        .unwrap();
        assert_eq!(di.sent()[0], Sent::Reset);
    }

    #[test]
    fn draw_point_addresses_a_single_cell() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        disp.draw_point(10, 20, 0xFF0000).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0x15, [10, 10],
            0x75, [20, 20],
            0x5C, [0xF8, 0x00]
        ));
    }

    #[test]
    fn draw_point_rejects_out_of_range_coordinates() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        assert_eq!(disp.draw_point(128, 0, 0), Err(Error::InvalidParameter));
        assert_eq!(disp.draw_point(0, 128, 0), Err(Error::InvalidParameter));
        assert!(di.sent().is_empty());
    }

    #[test]
    fn bgr_sequence_swaps_the_packed_channels() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Bgr, ColorDepth::Depth65k));
        disp.draw_point(0, 0, 0xFF0000).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0x15, [0, 0],
            0x75, [0, 0],
            0x5C, [0x00, 0x1F]
        ));
        di.clear();
        disp.draw_picture_16bits(0, 0, 1, 1, &[0xF800]).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0x15, [0, 0],
            0x75, [0, 0],
            0x5C, [0x00, 0x1F]
        ));
    }

    #[test]
    fn fill_rect_covers_the_window_in_chunks() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        disp.fill_rect(0, 0, 127, 127, 0x00FF00).unwrap();
        let sent = di.sent();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        assert_eq!(&sent[..5], sends!(
            0x15, [0, 127],
            0x75, [0, 127],
            0x5C
        ));
        let payload = data_after(&sent, 5);
        assert_eq!(payload.len(), 128 * 128 * 2);
        assert!(payload.chunks(2).all(|px| px == &[0x07, 0xE0][..]));
    }

    #[test]
    fn fill_rect_of_one_cell_sends_one_pixel() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        disp.fill_rect(5, 6, 5, 6, 0xFFFFFF).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0x15, [5, 5],
            0x75, [6, 6],
            0x5C, [0xFF, 0xFF]
        ));
    }

    #[test]
    fn fill_rect_rejects_degenerate_rectangles() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        assert_eq!(disp.fill_rect(10, 0, 9, 5, 0), Err(Error::InvalidParameter));
        assert_eq!(disp.fill_rect(0, 10, 5, 9, 0), Err(Error::InvalidParameter));
        assert_eq!(disp.fill_rect(0, 0, 128, 5, 0), Err(Error::InvalidParameter));
        assert_eq!(disp.fill_rect(0, 0, 5, 128, 0), Err(Error::InvalidParameter));
        assert!(di.sent().is_empty());
    }

    #[test]
    fn full_frame_picture_reconstructs_after_decode() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        let picture: Vec<u32> = (0..128 * 128)
            .map(|i| if i % 2 == 0 { 0xFF0000 } else { 0x000000 })
            .collect();
        disp.draw_picture(0, 0, 128, 128, &picture).unwrap();
        let sent = di.sent();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        assert_eq!(&sent[..5], sends!(
            0x15, [0, 127],
            0x75, [0, 127],
            0x5C
        ));
        let payload = data_after(&sent, 5);
        assert_eq!(payload.len(), 128 * 128 * 2);
        for (i, px) in payload.chunks(2).enumerate() {
            let expected = if i % 2 == 0 {
                (0xFF, 0x00, 0x00)
            } else {
                (0x00, 0x00, 0x00)
            };
            assert_eq!(decode_565(px[0], px[1]), expected);
        }
    }

    #[test]
    fn draw_picture_validates_the_buffer_shape() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        let picture = [0u32; 4];
        // Length disagrees with the rectangle.
        assert_eq!(
            disp.draw_picture(0, 0, 3, 2, &picture),
            Err(Error::InvalidParameter)
        );
        // Rectangle passes the right or bottom edge.
        assert_eq!(
            disp.draw_picture(127, 0, 2, 2, &picture),
            Err(Error::InvalidParameter)
        );
        assert_eq!(
            disp.draw_picture(0, 127, 2, 2, &picture),
            Err(Error::InvalidParameter)
        );
        // Empty rectangle.
        assert_eq!(
            disp.draw_picture(0, 0, 0, 0, &[]),
            Err(Error::InvalidParameter)
        );
        assert!(di.sent().is_empty());
    }

    #[test]
    fn sixteen_bit_pictures_require_65k_mode() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        disp.draw_picture_16bits(2, 3, 1, 1, &[0xF800]).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0x15, [2, 2],
            0x75, [3, 3],
            0x5C, [0xF8, 0x00]
        ));
        disp.set_color_depth(ColorDepth::Depth262k).unwrap();
        di.clear();
        assert_eq!(
            disp.draw_picture_16bits(0, 0, 1, 1, &[0xF800]),
            Err(Error::InvalidConfig)
        );
        assert!(di.sent().is_empty());
    }

    #[test]
    fn write_string_draws_opaque_glyph_cells() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        disp.write_string(0, 0, "AB", Font::Font16, 0xFFFFFF, 0x000000)
            .unwrap();
        let sent = di.sent();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        assert_eq!(&sent[..5], sends!(
            0x15, [0, 7],
            0x75, [0, 15],
            0x5C
        ));
        // 8x16 cell at two bytes per pixel arrives as eight 32-byte chunks.
        let first_cell = data_after(&sent[..13], 5);
        assert_eq!(first_cell.len(), 8 * 16 * 2);
        // The top two rows of 'A' are blank, so they render as pure background.
        assert!(first_cell[..32].iter().all(|&b| b == 0x00));
        // Row 2 has a single set bit at column 3.
        assert_eq!(
            &first_cell[32..48],
            &[0, 0, 0, 0, 0, 0, 0xFF, 0xFF, 0, 0, 0, 0, 0, 0, 0, 0][..]
        );
        // The second glyph begins one advance width to the right.
        #[cfg_attr(rustfmt, rustfmt_skip)]
        assert_eq!(&sent[13..17], sends!(
            0x15, [8, 15],
            0x75, [0, 15]
        ));
        assert_eq!(sent.len(), 26);
    }

    #[test]
    fn vertical_increment_streams_glyphs_column_major() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        disp.write_string(0, 0, "A", Font::Font16, 0xFFFFFF, 0x000000)
            .unwrap();
        let horizontal = data_after(&di.sent(), 5);
        di.clear();
        disp.set_increment_axis(IncrementAxis::Vertical).unwrap();
        di.clear();
        disp.write_string(0, 0, "A", Font::Font16, 0xFFFFFF, 0x000000)
            .unwrap();
        let vertical = data_after(&di.sent(), 5);
        assert_eq!(vertical.len(), horizontal.len());
        for row in 0..16usize {
            for col in 0..8usize {
                let h = (row * 8 + col) * 2;
                let v = (col * 16 + row) * 2;
                assert_eq!(horizontal[h..h + 2], vertical[v..v + 2]);
            }
        }
    }

    #[test]
    fn write_string_rejects_clipping_and_unmapped_characters() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        // Would pass the right edge; text never wraps.
        assert_eq!(
            disp.write_string(121, 0, "A", Font::Font16, 0, 0),
            Err(Error::InvalidParameter)
        );
        let long = "A".repeat(17);
        assert_eq!(
            disp.write_string(0, 0, &long, Font::Font16, 0, 0),
            Err(Error::InvalidParameter)
        );
        // Would pass the bottom edge.
        assert_eq!(
            disp.write_string(0, 113, "A", Font::Font16, 0, 0),
            Err(Error::InvalidParameter)
        );
        // Characters outside printable ASCII.
        assert_eq!(
            disp.write_string(0, 0, "hi\u{7F}", Font::Font12, 0, 0),
            Err(Error::InvalidParameter)
        );
        assert_eq!(
            disp.write_string(0, 0, "h\u{E9}llo", Font::Font12, 0, 0),
            Err(Error::InvalidParameter)
        );
        assert!(di.sent().is_empty());
    }

    #[test]
    fn runtime_setters_reencode_the_shared_registers() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        disp.set_color_depth(ColorDepth::Depth256).unwrap();
        di.check(0xA0, &[0x34]);
        di.clear();
        disp.set_color_sequence(ColorSequence::Bgr).unwrap();
        di.check(0xA0, &[0x30]);
        di.clear();
        disp.set_com_layout(ComLayout::Progressive).unwrap();
        di.check(0xA0, &[0x10]);
        di.clear();
        disp.set_vdd_source(VddSource::External).unwrap();
        di.check(0xAB, &[0x00]);
        di.clear();
        // Drawing picks up the new depth and sequence.
        disp.draw_point(0, 0, 0x123456).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0x15, [0, 0],
            0x75, [0, 0],
            0x5C, [0x56]
        ));
    }

    #[test]
    fn register_setters_send_their_frames() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        disp.contrast(1, 2, 3).unwrap();
        di.check(0xC1, &[1, 2, 3]);
        di.clear();
        disp.master_contrast(5).unwrap();
        di.check(0xC7, &[5]);
        di.clear();
        disp.display_mode(DisplayMode::Inverse).unwrap();
        di.check(0xA7, &[]);
        di.clear();
        disp.vertical_pan(3).unwrap();
        di.check(0xA1, &[3]);
        di.clear();
        disp.display_offset(7).unwrap();
        di.check(0xA2, &[7]);
        di.clear();
        disp.mux_ratio(95).unwrap();
        di.check(0xCA, &[95]);
        di.clear();
        disp.phase_lengths(5, 14).unwrap();
        di.check(0xB1, &[0xE5]);
        di.clear();
        disp.gray_scale_table(&DEFAULT_GRAY_SCALE_TABLE).unwrap();
        di.check(0xB8, &DEFAULT_GRAY_SCALE_TABLE);
        di.clear();
        disp.default_gray_scale_table().unwrap();
        di.check(0xB9, &[]);
        di.clear();
        disp.set_command_lock(CommandLock::Lock).unwrap();
        di.check(0xFD, &[0x16]);
        di.clear();
        disp.sleep(true).unwrap();
        di.check(0xAE, &[]);
        di.clear();
        assert_eq!(disp.master_contrast(16), Err(Error::InvalidParameter));
        assert!(di.sent().is_empty());
    }

    #[test]
    fn window_and_raw_access() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        disp.set_column_address(3, 7).unwrap();
        di.check(0x15, &[3, 7]);
        di.clear();
        disp.set_row_address(10, 11).unwrap();
        di.check(0x75, &[10, 11]);
        di.clear();
        disp.write_ram().unwrap();
        di.check(0x5C, &[]);
        di.clear();
        disp.read_ram().unwrap();
        di.check(0x5D, &[]);
        di.clear();
        disp.write_command(0xA5).unwrap();
        di.check(0xA5, &[]);
        di.clear();
        disp.write_data(&[0xDE, 0xAD]).unwrap();
        di.check_multi(&[Sent::Data(vec![0xDE, 0xAD])]);
    }

    #[test]
    fn scroll_setup_stops_an_active_scroll_first() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth65k));
        disp.set_scroll(1, 0, 128, ScrollInterval::Normal).unwrap();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        di.check_multi(sends!(
            0x9E, // stop moving
            0x96, [0x01, 0x00, 0x80, 0x00, 0x01]
        ));
        di.clear();
        disp.start_moving().unwrap();
        di.check(0x9F, &[]);
        di.clear();
        disp.stop_moving().unwrap();
        di.check(0x9E, &[]);
        di.clear();
        // Bad parameters are caught before anything is sent, including the stop.
        assert_eq!(
            disp.set_scroll(1, 100, 29, ScrollInterval::Normal),
            Err(Error::InvalidParameter)
        );
        assert!(di.sent().is_empty());
    }

    #[test]
    fn clear_blanks_the_whole_frame() {
        let mut di = TestSpyInterface::new();
        let mut disp = init_display(&mut di, Config::new(ColorSequence::Rgb, ColorDepth::Depth256));
        disp.clear().unwrap();
        let sent = di.sent();
        #[cfg_attr(rustfmt, rustfmt_skip)]
        assert_eq!(&sent[..5], sends!(
            0x15, [0, 127],
            0x75, [0, 127],
            0x5C
        ));
        let payload = data_after(&sent, 5);
        assert_eq!(payload.len(), 128 * 128);
        assert!(payload.iter().all(|&b| b == 0x00));
    }

    #[test]
    fn info_describes_the_chip() {
        let info = info();
        assert_eq!(info.chip_name, "Solomon Systech SSD1351");
        assert_eq!(info.manufacturer_name, "Solomon Systech");
        assert_eq!(info.interface, "SPI");
        assert!(info.supply_voltage_min_v < info.supply_voltage_max_v);
    }
}
