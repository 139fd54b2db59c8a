//! Formats and transmits the results of a test run.

use core::fmt;
use core::fmt::Write;

use crate::error::{Error, Result, TransmitError};
use crate::signal::Channel;
use crate::tally::{Tally, MAX_SCORE};


// - constants ----------------------------------------------------------------

pub const REPORT_CAPACITY: usize = 1000;

pub type ReportBuffer = heapless::String<REPORT_CAPACITY>;


// - Transmit -----------------------------------------------------------------

/// Starts a transfer over a serial link.
///
/// `submit` only starts the transfer. The implementation must release
/// the [`Channel`] it was paired with once the last byte has left,
/// usually from its transfer-complete interrupt.
pub trait Transmit {
    fn submit(&mut self, bytes: &[u8]) -> core::result::Result<(), TransmitError>;
}

impl<T: Transmit + ?Sized> Transmit for &mut T {
    fn submit(&mut self, bytes: &[u8]) -> core::result::Result<(), TransmitError> {
        (**self).submit(bytes)
    }
}


// - summary ------------------------------------------------------------------

/// Writes the end-of-run summary for suite `name`.
pub fn format_summary<W: Write>(name: &str, tally: &Tally, out: &mut W) -> fmt::Result {
    write!(out, "========= {}: ALL TESTS COMPLETE!\r\n", name)?;
    write!(out, "tests passed: {} \r\n", tally.total_pass())?;
    write!(out, "tests failed: {} \r\n", tally.total_fail())?;
    write!(out, "total tests:  {} \r\n", tally.total_tests())?;
    match tally.score() {
        Ok(score) => write!(out, "score: {}/{} points \r\n\r\n", score, MAX_SCORE),
        Err(_) => write!(out, "score: --/{} points \r\n\r\n", MAX_SCORE),
    }
}


// - Reporter -----------------------------------------------------------------

pub struct Reporter<'a, T> {
    tx: T,
    channel: &'a Channel,
    buffer: ReportBuffer,
}

impl<'a, T> Reporter<'a, T>
where
    T: Transmit,
{
    /// `channel` must be the channel released by `tx` on completion.
    pub fn new(tx: T, channel: &'a Channel) -> Self {
        Self {
            tx,
            channel,
            buffer: ReportBuffer::new(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.channel.is_idle()
    }

    /// Starts sending `bytes` without waiting for completion.
    pub fn post(&mut self, bytes: &[u8]) -> Result {
        if bytes.is_empty() {
            return Ok(());
        }
        let busy = self.channel.acquire()?;
        self.tx.submit(bytes)?;
        busy.hand_off();
        Ok(())
    }

    /// Sends `bytes` and waits until the transfer has completed.
    pub fn send(&mut self, bytes: &[u8]) -> Result {
        transmit(&mut self.tx, self.channel, bytes)
    }

    /// Sends the summary of `tally`.
    ///
    /// When the summary does not fit the report buffer the truncated
    /// text is still sent and `Error::BufferOverflow` is returned.
    pub fn report(&mut self, name: &str, tally: &Tally) -> Result {
        self.buffer.clear();
        let overflow = format_summary(name, tally, &mut self.buffer).is_err();

        transmit(&mut self.tx, self.channel, self.buffer.as_bytes())?;

        if overflow {
            log::error!("report truncated to {} bytes", self.buffer.len());
            return Err(Error::BufferOverflow);
        }
        Ok(())
    }

    pub fn free(self) -> T {
        self.tx
    }
}

/// Waits for the channel, transmits `bytes` and waits for completion.
///
/// The channel is idle again on every return path.
fn transmit<T: Transmit>(tx: &mut T, channel: &Channel, bytes: &[u8]) -> Result {
    let busy = loop {
        match channel.acquire() {
            Ok(busy) => break busy,
            Err(TransmitError::Busy) => core::hint::spin_loop(),
            Err(err) => return Err(err.into()),
        }
    };
    if bytes.is_empty() {
        return Ok(());
    }
    tx.submit(bytes)?;
    busy.wait();
    Ok(())
}


// - tests --------------------------------------------------------------------
