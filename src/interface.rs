use crate::hal::blocking::delay::DelayMs;

/// Transport seam between the driver and the physical bus wiring.
///
/// Opcode bytes are clocked out with the D/C line low; command parameters and
/// pixel data both travel with D/C high, so one data entry point serves both.
pub trait DisplayInterface {
    type Error;

    fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error>;
    fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error>;
    fn reset<D: DelayMs<u8>>(&mut self, delay: &mut D) -> Result<(), Self::Error>;
}

pub mod spi {
    //! The SPI interface supports the "4-wire" interface of the chip, such that each word on the
    //! SPI bus is 8 bits. The "3-wire" mode replaces the D/C GPIO with a 9th bit on each word,
    //! which seems really awkward to implement with embedded_hal SPI.

    use crate::hal;
    use crate::hal::blocking::delay::DelayMs;
    use crate::hal::digital::v2::OutputPin;

    use super::DisplayInterface;

    /// Failure modes of [`SpiInterface`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum SpiError<SpiE, PinE> {
        /// The SPI bus write failed.
        Bus(SpiE),
        /// Driving the D/C or reset line failed.
        Pin(PinE),
    }

    pub struct SpiInterface<SPI, DC, RST> {
        /// The SPI master device connected to the SSD1351.
        spi: SPI,
        /// A GPIO output pin connected to the D/C (data/command) pin of the SSD1351 (the fourth
        /// "wire" of "4-wire" mode).
        dc: DC,
        /// A GPIO output pin connected to the active-low RES pin of the SSD1351.
        rst: RST,
    }

    impl<SPI, DC, RST, SpiE, PinE> SpiInterface<SPI, DC, RST>
    where
        SPI: hal::blocking::spi::Write<u8, Error = SpiE>,
        DC: OutputPin<Error = PinE>,
        RST: OutputPin<Error = PinE>,
    {
        /// Create a new SPI interface to communicate with the display driver. `spi` is the SPI
        /// master device, `dc` is the GPIO output pin connected to the D/C pin of the SSD1351,
        /// and `rst` the pin connected to its reset line.
        pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
            Self { spi, dc, rst }
        }

        /// Consume the interface, handing back its bus and pins.
        pub fn release(self) -> (SPI, DC, RST) {
            (self.spi, self.dc, self.rst)
        }
    }

    impl<SPI, DC, RST, SpiE, PinE> DisplayInterface for SpiInterface<SPI, DC, RST>
    where
        SPI: hal::blocking::spi::Write<u8, Error = SpiE>,
        DC: OutputPin<Error = PinE>,
        RST: OutputPin<Error = PinE>,
    {
        type Error = SpiError<SpiE, PinE>;

        fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error> {
            self.dc.set_low().map_err(SpiError::Pin)?;
            self.spi.write(&[cmd]).map_err(SpiError::Bus)?;
            self.dc.set_high().map_err(SpiError::Pin)
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
            self.dc.set_high().map_err(SpiError::Pin)?;
            self.spi.write(buf).map_err(SpiError::Bus)
        }

        /// Hardware-reset the chip: drive RES low, hold it for 100ms, then release it.
        fn reset<D: DelayMs<u8>>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
            self.rst.set_low().map_err(SpiError::Pin)?;
            delay.delay_ms(100);
            self.rst.set_high().map_err(SpiError::Pin)
        }
    }
}

#[cfg(test)]
pub mod test_spy {
    //! An interface for use in unit tests to spy on whatever was sent to it.

    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::hal::blocking::delay::DelayMs;

    use super::DisplayInterface;

    /// One event observed by the spy.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Sent {
        Cmd(u8),
        Data(Vec<u8>),
        Reset,
    }

    #[derive(Clone)]
    pub struct TestSpyInterface {
        sent: Rc<RefCell<Vec<Sent>>>,
    }

    impl TestSpyInterface {
        pub fn new() -> Self {
            TestSpyInterface {
                sent: Rc::new(RefCell::new(Vec::new())),
            }
        }

        /// A second handle observing the same event stream, for when the
        /// display owns the original.
        pub fn split(&self) -> Self {
            self.clone()
        }

        /// Assert that exactly one command frame was sent.
        pub fn check(&self, cmd: u8, data: &[u8]) {
            let sent = self.sent.borrow();
            if data.is_empty() {
                assert_eq!(*sent, vec![Sent::Cmd(cmd)]);
            } else {
                assert_eq!(*sent, vec![Sent::Cmd(cmd), Sent::Data(data.to_vec())]);
            }
        }

        /// Assert the full event stream.
        pub fn check_multi(&self, expected: &[Sent]) {
            assert_eq!(&self.sent.borrow()[..], expected);
        }

        pub fn sent(&self) -> Vec<Sent> {
            self.sent.borrow().clone()
        }

        pub fn clear(&mut self) {
            self.sent.borrow_mut().clear();
        }
    }

    impl DisplayInterface for TestSpyInterface {
        type Error = ();

        fn send_command(&mut self, cmd: u8) -> Result<(), ()> {
            self.sent.borrow_mut().push(Sent::Cmd(cmd));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), ()> {
            self.sent.borrow_mut().push(Sent::Data(data.to_vec()));
            Ok(())
        }

        fn reset<D: DelayMs<u8>>(&mut self, _delay: &mut D) -> Result<(), ()> {
            self.sent.borrow_mut().push(Sent::Reset);
            Ok(())
        }
    }

    /// A delay provider that does not actually wait.
    pub struct NoopDelay;

    impl DelayMs<u8> for NoopDelay {
        fn delay_ms(&mut self, _ms: u8) {}
    }
}
