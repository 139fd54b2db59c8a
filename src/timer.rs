//! Periodic tick driving the scheduler.
//!
//! The stm32h7xx-hal `CountDown` implementation takes its timeout in
//! Hertz. Here the timer is armed with a `Duration` instead, and every
//! update event raises [`TICK`] from the TIM2 interrupt.

use core::cell::RefCell;
use core::time::Duration;

use cortex_m::interrupt::Mutex;

use stm32h7xx_hal as hal;
use hal::pac::{self, interrupt, TIM2};
use hal::timer::{Event, Timer};

use crate::signal::Flag;


// - global static state ------------------------------------------------------

/// Raised once per timer period.
pub static TICK: Flag = Flag::new();

static TICK_TIMER: Mutex<RefCell<Option<Timer<TIM2>>>> = Mutex::new(RefCell::new(None));


// - start --------------------------------------------------------------------

/// Arms `timer` to expire every `period` and returns the flag it raises.
pub fn start(mut timer: Timer<TIM2>, period: Duration) -> &'static Flag {
    // Pause
    timer.pause();

    // Reset counter
    timer.reset_counter();

    // UEV event occours on next overflow
    timer.urs_counter_only();
    timer.clear_irq();

    // Set PSC and ARR
    timer.set_timeout(period);

    // Generate an update event to force an update of the ARR register. This ensures
    // the first timer cycle is of the specified duration.
    timer.apply_freq();

    timer.listen(Event::TimeOut);

    cortex_m::interrupt::free(|cs| {
        TICK_TIMER.borrow(cs).replace(Some(timer));
    });

    unsafe {
        cortex_m::peripheral::NVIC::unmask(pac::Interrupt::TIM2);
    }

    // Start counter
    cortex_m::interrupt::free(|cs| {
        if let Some(timer) = TICK_TIMER.borrow(cs).borrow_mut().as_mut() {
            timer.resume();
        }
    });

    &TICK
}


// - interrupts ---------------------------------------------------------------

#[interrupt]
fn TIM2() {
    cortex_m::interrupt::free(|cs| {
        if let Some(timer) = TICK_TIMER.borrow(cs).borrow_mut().as_mut() {
            timer.clear_irq();
        }
    });
    TICK.raise();
}
