//! Full example code for setting up an SSD1351 display. This runs on an STM32F303RE, using a
//! 128x128 RGB OLED module connected to SPI1, PA8 for D/C, and PA9 for /RESET.

#![deny(unsafe_code)]
#![no_main]
#![no_std]

extern crate cortex_m;
extern crate embedded_hal as hal_api;
extern crate stm32f30x;
extern crate stm32f30x_hal as hal;
#[macro_use]
extern crate cortex_m_rt;
extern crate panic_abort;
extern crate ssd1351;

use cortex_m::asm;
use cortex_m_rt::ExceptionFrame;
use hal::prelude::*;
use hal::spi;
use hal_api::digital::v1_compat::OldOutputPin;
use ssd1351 as oled;

entry!(main);

exception!(*, default_handler);
exception!(HardFault, hard_fault);

fn hard_fault(_ef: &ExceptionFrame) -> ! {
    asm::bkpt();
    loop {}
}

fn default_handler(_irqn: i16) {
    loop {}
}

fn main() -> ! {
    // Get peripherals and set up RCC.
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = stm32f30x::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let mut delay = hal::delay::Delay::new(cp.SYST, clocks);

    // Get GPIO A where the display is connected.
    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb);

    // Set up SPI1, which is Alternate Function 5 for GPIOs PA5,6,7.
    let disp_sck = gpioa.pa5.into_af5(&mut gpioa.moder, &mut gpioa.afrl);
    let disp_miso = gpioa.pa6.into_af5(&mut gpioa.moder, &mut gpioa.afrl);
    let disp_mosi = gpioa.pa7.into_af5(&mut gpioa.moder, &mut gpioa.afrl);

    let disp_spi = spi::Spi::spi1(
        dp.SPI1,
        (disp_sck, disp_miso, disp_mosi),
        hal_api::spi::Mode {
            polarity: hal_api::spi::Polarity::IdleLow,
            phase: hal_api::spi::Phase::CaptureOnFirstTransition,
        },
        8.mhz(),
        clocks,
        &mut rcc.apb2,
    );

    // PA8 will be the D/C push-pull output for the 4th wire, and PA9 the display's /RESET pin.
    // The interface owns both pins; `init` asserts reset itself before configuring the chip.
    let disp_dc = OldOutputPin::new(
        gpioa
            .pa8
            .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper),
    );
    let disp_rst = OldOutputPin::new(
        gpioa
            .pa9
            .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper),
    );

    // Create the SpiInterface and Display.
    let mut disp = oled::Display::new(oled::SpiInterface::new(disp_spi, disp_dc, disp_rst));

    // Initialize the display with the full set of drive parameters common 128x128 modules
    // are shipped with.
    disp.init(oled::Config::basic(), &mut delay).unwrap();

    // Clear the frame, then draw a banner.
    disp.clear().unwrap();
    disp.fill_rect(0, 0, 127, 15, 0x003366).unwrap();
    disp.write_string(4, 2, "Hello", oled::Font::Font12, 0xFFFFFF, 0x003366)
        .unwrap();

    loop {
        asm::wfi();
    }
}
