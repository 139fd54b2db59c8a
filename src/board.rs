use stm32h7xx_hal as hal;
use hal::dma::dma::StreamsTuple;
use hal::prelude::*;

use crate::clocks;
use crate::config::Config;
use crate::led;
use crate::pins;
use crate::serial;
use crate::signal::{Channel, Flag};
use crate::timer;


// - global static state ------------------------------------------------------

// `no_mangle` is used here to prevent linking different minor
// versions of this crate as that would let you `take` the board
// more than once (one per minor version)
#[no_mangle]
static FMAX_HARNESS_BOARD: () = ();

/// Set to `true` when `take` was called to make `Board` a singleton.
static mut TAKEN: bool = false;


// - Platform -----------------------------------------------------------------

/// Everything the scheduler needs from the board.
pub struct Platform {
    pub clocks: hal::rcc::CoreClocks,
    pub leds: led::UserLeds,
    /// Raised every `Config::tick_period`
    pub tick: &'static Flag,
    pub vcp: serial::Vcp,
    /// Idle when `vcp` can take the next transfer
    pub channel: &'static Channel,
}


// - Board --------------------------------------------------------------------

pub struct Board;

impl Board {
    #[inline]
    pub fn take() -> Option<Self> {
        cortex_m::interrupt::free(|_| {
            if unsafe { TAKEN } {
                None
            } else {
                unsafe { TAKEN = true };
                Some(unsafe { Board::steal() })
            }
        })
    }

    #[inline]
    pub unsafe fn steal() -> Self {
        Board
    }

    pub fn freeze_clocks(&self,
                         pwr: hal::pwr::Pwr,
                         rcc: hal::rcc::Rcc,
                         syscfg: &hal::pac::SYSCFG) -> hal::rcc::Ccdr {
        clocks::configure(pwr, rcc, syscfg)
    }

    /// Takes the board's GPIO peripherals and split them into ZST's
    /// representing the individual GPIO pins used by the harness.
    pub fn split_gpios(&self,
                       gpioa: hal::gpio::gpioa::Parts,
                       gpiob: hal::gpio::gpiob::Parts,
                       gpiod: hal::gpio::gpiod::Parts,
                       gpioe: hal::gpio::gpioe::Parts) -> pins::Pins {
        pins::Pins::new(gpioa, gpiob, gpiod, gpioe)
    }

    pub fn split_led_user(&self, pins: pins::user_leds::Pins) -> led::UserLeds {
        led::UserLeds::new(pins)
    }

    /// Clocks, LEDs, the tick timer and the serial link, in that order.
    pub fn bring_up(self, dp: hal::pac::Peripherals, config: &Config) -> Platform {
        let ccdr = self.freeze_clocks(dp.PWR.constrain(), dp.RCC.constrain(), &dp.SYSCFG);

        let pins = self.split_gpios(dp.GPIOA.split(ccdr.peripheral.GPIOA),
                                    dp.GPIOB.split(ccdr.peripheral.GPIOB),
                                    dp.GPIOD.split(ccdr.peripheral.GPIOD),
                                    dp.GPIOE.split(ccdr.peripheral.GPIOE));

        let mut leds = self.split_led_user(pins.user_leds);
        leds.ld2.on();

        let tim2 = dp.TIM2.timer(config.tick_period.into_rate(), ccdr.peripheral.TIM2, &ccdr.clocks);
        let tick = timer::start(tim2, config.tick_period);

        let usart3 = dp.USART3
            .serial(pins.vcp.into_usart3(),
                    config.baud_rate.bps(),
                    ccdr.peripheral.USART3,
                    &ccdr.clocks)
            .expect("USART3 configuration");
        let streams = StreamsTuple::new(dp.DMA1, ccdr.peripheral.DMA1);
        let vcp = serial::Vcp::init(usart3, streams.0);
        let channel = vcp.channel();

        Platform {
            clocks: ccdr.clocks,
            leds,
            tick,
            vcp,
            channel,
        }
    }
}


// - helpers ------------------------------------------------------------------

trait IntoRate {
    fn into_rate(self) -> hal::time::Hertz;
}

impl IntoRate for core::time::Duration {
    /// Timer frequency for one update event per period, at least 1 Hz.
    fn into_rate(self) -> hal::time::Hertz {
        let micros = self.as_micros().max(1) as u32;
        (1_000_000 / micros).max(1).Hz()
    }
}
