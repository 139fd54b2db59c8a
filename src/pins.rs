pub use stm32h7xx_hal as hal;


// - board peripherals --------------------------------------------------------

pub mod user_leds {
    use hal::gpio::{Output, PushPull};
    use stm32h7xx_hal as hal;

    #[cfg(not(feature = "led-1-pa5"))] // SB65=off, SB54=on
    pub type Pin1 = hal::gpio::gpiob::PB0<hal::gpio::Analog>;
    #[cfg(any(feature = "led-1-pa5"))] // SB65=on,  SB54=off
    pub type Pin1 = hal::gpio::gpioa::PA5<hal::gpio::Analog>;
    pub type Pin2 = hal::gpio::gpioe::PE1<hal::gpio::Analog>;
    pub type Pin3 = hal::gpio::gpiob::PB14<hal::gpio::Analog>;

    #[cfg(not(feature = "led-1-pa5"))]
    pub type Ld1 = hal::gpio::gpiob::PB0<Output<PushPull>>;
    #[cfg(any(feature = "led-1-pa5"))]
    pub type Ld1 = hal::gpio::gpioa::PA5<Output<PushPull>>;
    pub type Ld2 = hal::gpio::gpioe::PE1<Output<PushPull>>;
    pub type Ld3 = hal::gpio::gpiob::PB14<Output<PushPull>>;

    pub struct Pins {
        pub ld1: Pin1,
        pub ld2: Pin2,
        pub ld3: Pin3,
    }
}

/// USART3 is wired to the ST-LINK virtual COM port
pub mod vcp {
    use hal::gpio::Alternate;
    use stm32h7xx_hal as hal;

    pub type TxPin = hal::gpio::gpiod::PD8<hal::gpio::Analog>;
    pub type RxPin = hal::gpio::gpiod::PD9<hal::gpio::Analog>;

    pub type Tx = hal::gpio::gpiod::PD8<Alternate<7>>;
    pub type Rx = hal::gpio::gpiod::PD9<Alternate<7>>;

    pub struct Pins {
        pub tx: TxPin,
        pub rx: RxPin,
    }

    impl Pins {
        pub fn into_usart3(self) -> (Tx, Rx) {
            (self.tx.into_alternate::<7>(), self.rx.into_alternate::<7>())
        }
    }
}


// - Pins ---------------------------------------------------------------------

pub struct Pins {
    pub user_leds: user_leds::Pins,
    pub vcp: vcp::Pins,
}


// - construction -------------------------------------------------------------

impl Pins {
    #[allow(unused_variables)]
    pub fn new(
        gpioa: hal::gpio::gpioa::Parts,
        gpiob: hal::gpio::gpiob::Parts,
        gpiod: hal::gpio::gpiod::Parts,
        gpioe: hal::gpio::gpioe::Parts,
    ) -> Self {
        Self {
            user_leds: user_leds::Pins {
                #[cfg(not(feature = "led-1-pa5"))]
                ld1: gpiob.pb0,
                #[cfg(any(feature = "led-1-pa5"))]
                ld1: gpioa.pa5,
                ld2: gpioe.pe1,
                ld3: gpiob.pb14,
            },
            vcp: vcp::Pins {
                tx: gpiod.pd8,
                rx: gpiod.pd9,
            },
        }
    }
}
