//! `log` backends. Select one with the `log-semihosting`, `log-itm` or
//! `log-rtt` features; without any of them log records are discarded.
//!
//! The matching panic handler is linked alongside each backend.

use crate::hal;

cfg_if::cfg_if! {
    if #[cfg(any(feature = "log-itm"))] {
        use panic_itm as _;

        use lazy_static::lazy_static;
        use log::LevelFilter;

        pub use cortex_m_log::log::Logger;

        use cortex_m_log::{
            destination::Itm as ItmDest,
            printer::itm::InterruptSync,
            modes::InterruptFree,
            printer::itm::ItmSync
        };

        lazy_static! {
            static ref LOGGER: Logger<ItmSync<InterruptFree>> = Logger {
                level: LevelFilter::Info,
                inner: unsafe {
                    InterruptSync::new(
                        ItmDest::new(cortex_m::Peripherals::steal().ITM)
                    )
                },
            };
        }

        /// SWO line rate expected by the probe
        pub const SWO_FREQUENCY: u32 = 2_000_000;

        pub fn init(clocks: &hal::rcc::CoreClocks) {
            unsafe {
                let dp = hal::pac::Peripherals::steal();
                let mut cp = cortex_m::Peripherals::steal();
                enable_itm(&dp.DBGMCU, &mut cp.DCB, &mut cp.ITM, clocks.c_ck().raw(), SWO_FREQUENCY);
            }
            cortex_m_log::log::init(&LOGGER).unwrap();
        }

    } else if #[cfg(any(feature = "log-semihosting"))] {
        use panic_semihosting as _;

        use lazy_static::lazy_static;
        use log::LevelFilter;

        pub use cortex_m_log::log::Logger;
        use cortex_m_log::printer::semihosting;
        use cortex_m_log::printer::semihosting::Semihosting;
        use cortex_m_log::modes::InterruptOk;
        use cortex_m_semihosting::hio::HStdout;

        lazy_static! {
            static ref LOGGER: Logger<Semihosting<InterruptOk, HStdout>> = Logger {
                level: LevelFilter::Info,
                inner: semihosting::InterruptOk::<_>::stdout().expect("Get Semihosting stdout"),
            };
        }

        pub fn init(_clocks: &hal::rcc::CoreClocks) {
            cortex_m_log::log::init(&LOGGER).unwrap();
        }

    } else if #[cfg(any(feature = "log-rtt"))] {
        use panic_rtt_target as _;

        use log::{LevelFilter, Metadata, Record};
        use rtt_target::{rprintln, rtt_init_print};

        pub struct Logger {
            level: LevelFilter,
        }

        impl log::Log for Logger {
            fn enabled(&self, metadata: &Metadata) -> bool {
                metadata.level() <= self.level
            }

            fn log(&self, record: &Record) {
                if self.enabled(record.metadata()) {
                    rprintln!("{} - {}", record.level(), record.args());
                }
            }

            fn flush(&self) {}
        }

        static LOGGER: Logger = Logger {
            level: LevelFilter::Info,
        };

        pub fn init(_clocks: &hal::rcc::CoreClocks) {
            rtt_init_print!();
            log::set_logger(&LOGGER)
                .map(|()| log::set_max_level(LevelFilter::Info))
                .unwrap();
        }

    } else {
        pub fn init(_clocks: &hal::rcc::CoreClocks) {}
    }
}


// - itm ----------------------------------------------------------------------

/// Routes ITM stimulus port 0 to the SWO pin.
///
/// # Safety
///
/// Writes to the SWO and trace funnel unlock registers directly.
#[cfg(feature = "log-itm")]
pub unsafe fn enable_itm(
    dbgmcu: &hal::pac::DBGMCU,
    dcb: &mut cortex_m::peripheral::DCB,
    itm: &mut cortex_m::peripheral::ITM,
    c_ck: u32,
    swo_frequency: u32,
) {
    // DEMCR.TRCENA, enables DWT and ITM
    dcb.enable_trace();

    // debug blocks must be clocked before we touch them
    dbgmcu.cr.modify(|_, w| {
        w.d1dbgcken()
            .set_bit()
            .d3dbgcken()
            .set_bit()
            .traceclken()
            .set_bit()
            .dbgsleep_d1()
            .set_bit()
    });

    // SWO, SWTF: unlock
    *(0x5c00_3fb0 as *mut u32) = 0xC5AC_CE55;
    *(0x5c00_4fb0 as *mut u32) = 0xC5AC_CE55;

    // SWO CODR: prescaler
    *(0x5c00_3010 as *mut u32) = c_ck / swo_frequency - 1;

    // SWO SPPR: NRZ
    *(0x5c00_30f0 as *mut u32) = 2;

    // SWTF: enable funnel port for CM7
    *(0x5c00_4000 as *mut u32) |= 1;

    itm.lar.write(0xC5AC_CE55);
    itm.ter[0].write(1);
    itm.tcr.write(
        (0b000001 << 16) | // TraceBusID
        (1 << 3) |         // SWO output
        (1 << 0),          // ITM enable
    );
}
