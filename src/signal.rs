//! Flags shared between the main loop and interrupt handlers.
//!
//! Interrupt handlers only ever store into these flags, the main loop
//! only reads them or takes them. Stores use `Release` and loads use
//! `Acquire` so anything the handler wrote before raising a flag is
//! visible once the main loop has seen it.

use core::sync::atomic::{AtomicBool, Ordering};

use void::Void;

use crate::error::TransmitError;


// - Flag ---------------------------------------------------------------------

/// Single-slot edge signal raised from interrupt context.
///
/// Several raises between two polls collapse into one.
pub struct Flag(AtomicBool);

impl Flag {
    pub const fn new() -> Self {
        Flag(AtomicBool::new(false))
    }

    /// Called from the interrupt handler.
    #[inline]
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Clears the flag, returning whether it was raised.
    #[inline]
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::Acquire)
    }

    /// Non-blocking poll in the style of `CountDown::wait`.
    pub fn wait(&self) -> nb::Result<(), Void> {
        if self.take() {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}

impl Default for Flag {
    fn default() -> Self {
        Self::new()
    }
}


// - Channel ------------------------------------------------------------------

/// Idle state of a transmission channel.
///
/// The main loop marks the channel busy before starting a transfer, the
/// transfer-complete handler marks it idle again.
pub struct Channel {
    idle: AtomicBool,
}

impl Channel {
    pub const fn new() -> Self {
        Channel {
            idle: AtomicBool::new(true),
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.idle.load(Ordering::Acquire)
    }

    /// Called from the transfer-complete handler.
    #[inline]
    pub fn release(&self) {
        self.idle.store(true, Ordering::Release);
    }

    pub fn wait_idle(&self) -> nb::Result<(), Void> {
        if self.is_idle() {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    /// Marks the channel busy. The returned guard releases it again
    /// when dropped unless ownership is handed to the completion
    /// handler with [`Busy::hand_off`].
    pub fn acquire(&self) -> Result<Busy<'_>, TransmitError> {
        self.idle
            .compare_exchange(true, false, Ordering::Acquire, Ordering::Relaxed)
            .map(|_| Busy { channel: self })
            .map_err(|_| TransmitError::Busy)
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::new()
    }
}


// - Busy ---------------------------------------------------------------------

/// A channel marked busy by the main loop.
#[must_use]
pub struct Busy<'a> {
    channel: &'a Channel,
}

impl<'a> Busy<'a> {
    /// Spins until the completion handler has released the channel.
    pub fn wait(self) {
        loop {
            match self.channel.wait_idle() {
                Ok(()) => break,
                Err(nb::Error::WouldBlock) => core::hint::spin_loop(),
                Err(nb::Error::Other(void)) => match void {},
            }
        }
    }

    /// Leaves the release to the completion handler.
    pub fn hand_off(self) {
        core::mem::forget(self);
    }
}

impl<'a> Drop for Busy<'a> {
    fn drop(&mut self) {
        self.channel.release();
    }
}


// - tests --------------------------------------------------------------------
