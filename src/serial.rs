//! USART3 transmitter for the ST-LINK virtual COM port.
//!
//! Each submission is copied into a buffer in AXI SRAM and handed to
//! DMA1 stream 0. The stream's transfer-complete interrupt reclaims the
//! stream and the USART and releases [`TX_CHANNEL`].

use core::cell::RefCell;
use core::mem::MaybeUninit;

use cortex_m::interrupt::Mutex;

use crate::hal;
use hal::dma::dma::{DmaConfig, Stream0};
use hal::dma::{DBTransfer, MemoryToPeripheral, Transfer};
use hal::pac::{self, interrupt, DMA1, USART3};
use hal::serial::{Serial, Tx};

use crate::error::TransmitError;
use crate::report::Transmit;
use crate::signal::Channel;


// - global static state ------------------------------------------------------

/// Largest single transfer
pub const TX_BUFFER_SIZE: usize = 1024;

/// Idle whenever the DMA stream is free for the next transfer.
pub static TX_CHANNEL: Channel = Channel::new();

// DMA1 can't reach DTCM
#[link_section = ".axisram.buffers"]
static mut TX_BUFFER: MaybeUninit<[u8; TX_BUFFER_SIZE]> = MaybeUninit::uninit();

type TxStream = Stream0<DMA1>;
type TxTransfer = Transfer<TxStream, Tx<USART3>, MemoryToPeripheral, &'static mut [u8], DBTransfer>;

enum Link {
    Idle(TxStream, Tx<USART3>),
    Busy(TxTransfer),
}

static LINK: Mutex<RefCell<Option<Link>>> = Mutex::new(RefCell::new(None));


// - Vcp ----------------------------------------------------------------------

/// Handle to the DMA-driven USART3 transmitter
pub struct Vcp {
    _private: (),
}

impl Vcp {
    /// Takes ownership of USART3 and DMA1 stream 0. Only the first call
    /// on a board gets a working transmitter.
    pub fn init(serial: Serial<USART3>, stream: TxStream) -> Self {
        let (tx, _rx) = serial.split();

        unsafe {
            TX_BUFFER.as_mut_ptr().write([0; TX_BUFFER_SIZE]);
        }

        cortex_m::interrupt::free(|cs| {
            LINK.borrow(cs).replace(Some(Link::Idle(stream, tx)));
        });
        TX_CHANNEL.release();

        unsafe {
            cortex_m::peripheral::NVIC::unmask(pac::Interrupt::DMA1_STR0);
        }

        Self { _private: () }
    }

    pub fn channel(&self) -> &'static Channel {
        &TX_CHANNEL
    }
}

impl Transmit for Vcp {
    fn submit(&mut self, bytes: &[u8]) -> Result<(), TransmitError> {
        if bytes.len() > TX_BUFFER_SIZE {
            return Err(TransmitError::TooLong);
        }

        cortex_m::interrupt::free(|cs| {
            let mut link = LINK.borrow(cs).borrow_mut();
            let (stream, tx) = match link.take() {
                Some(Link::Idle(stream, tx)) => (stream, tx),
                other => {
                    *link = other;
                    return Err(TransmitError::Busy);
                }
            };

            // SAFETY: the stream is idle so no transfer holds the buffer
            let buffer: &'static mut [u8] = unsafe {
                let buffer = &mut *TX_BUFFER.as_mut_ptr();
                &mut buffer[..bytes.len()]
            };
            buffer.copy_from_slice(bytes);

            let config = DmaConfig::default()
                .memory_increment(true)
                .transfer_complete_interrupt(true);
            let mut transfer: TxTransfer = Transfer::init(stream, tx, buffer, None, config);
            transfer.start(|tx| tx.enable_dma_tx());

            *link = Some(Link::Busy(transfer));
            Ok(())
        })
    }
}


// - interrupts ---------------------------------------------------------------

#[interrupt]
fn DMA1_STR0() {
    cortex_m::interrupt::free(|cs| {
        let mut link = LINK.borrow(cs).borrow_mut();
        match link.take() {
            Some(Link::Busy(mut transfer)) => {
                transfer.clear_transfer_complete_interrupt();
                let (stream, tx, _buffer, _) = transfer.free();
                *link = Some(Link::Idle(stream, tx));
            }
            other => *link = other,
        }
    });
    TX_CHANNEL.release();
}
