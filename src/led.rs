pub use stm32h7xx_hal as hal;

use embedded_hal::digital::v2::{OutputPin, ToggleableOutputPin};
use hal::hal as embedded_hal;

use crate::pins::user_leds;

// - traits -------------------------------------------------------------------

/// Generic LED
pub trait Led {
    /// Turns the LED off
    fn off(&mut self);

    /// Turns the LED on
    fn on(&mut self);

    /// Inverts the LED state
    fn toggle(&mut self);
}

// - UserLed ------------------------------------------------------------------

pub struct UserLed<PIN>(PIN);

impl<PIN> Led for UserLed<PIN>
where
    PIN: OutputPin + ToggleableOutputPin,
{
    fn on(&mut self) {
        if let Ok(()) = self.0.set_high() {}
    }

    fn off(&mut self) {
        if let Ok(()) = self.0.set_low() {}
    }

    fn toggle(&mut self) {
        if let Ok(()) = self.0.toggle() {}
    }
}

// - UserLeds -----------------------------------------------------------------

/// LD1 (green) blinks once per test, LD3 (red) reports failures.
pub struct UserLeds {
    pub ld1: UserLed<user_leds::Ld1>,
    pub ld2: UserLed<user_leds::Ld2>,
    pub ld3: UserLed<user_leds::Ld3>,
}

impl UserLeds {
    pub fn new(pins: user_leds::Pins) -> Self {
        Self {
            ld1: UserLed(pins.ld1.into_push_pull_output()),
            ld2: UserLed(pins.ld2.into_push_pull_output()),
            ld3: UserLed(pins.ld3.into_push_pull_output()),
        }
    }

    /// Green for a clean run, red otherwise.
    pub fn show_verdict(&mut self, all_passed: bool) {
        self.ld2.off();
        if all_passed {
            self.ld3.off();
            self.ld1.on();
        } else {
            self.ld1.off();
            self.ld3.on();
        }
    }
}
