#![no_main]
#![no_std]

use cortex_m_rt::entry;

use fmax_harness as harness;
use harness::led::Led;
use harness::pac;
use harness::vectors::TestTable;
use harness::verifier::Verifier;
use harness::{Config, Scheduler, State};

#[cfg(not(any(feature = "log-semihosting", feature = "log-itm", feature = "log-rtt")))]
use panic_halt as _;

use log::{error, info};


// - routine under test -------------------------------------------------------

#[cfg(not(feature = "sample-uut"))]
extern "C" {
    /// Returns a pointer to `fmax_result`, or null
    fn fmax_uut(a: u32, b: u32) -> *const f32;
    static fmax_result: f32;
}


// - entry point --------------------------------------------------------------

#[entry]
fn main() -> ! {
    // - board setup ----------------------------------------------------------

    let board = harness::Board::take().unwrap();
    let dp = pac::Peripherals::take().unwrap();

    let config = Config::default();
    let mut platform = board.bring_up(dp, &config);

    harness::logger::init(&platform.clocks);

    let table = TestTable::active();
    info!("{}: {} tests, one every {} ms",
          config.suite_name,
          table.len(),
          config.tick_period.as_millis());

    // - routine --------------------------------------------------------------

    let verifier = Verifier::new(config.zero_sign, config.nan);

    #[cfg(feature = "sample-uut")]
    let (routine, verifier) = (harness::routine::SoftMax::new(), verifier);

    #[cfg(not(feature = "sample-uut"))]
    let (routine, verifier) = unsafe {
        (harness::routine::Extern::new(fmax_uut),
         verifier.with_result_slot(core::ptr::addr_of!(fmax_result)))
    };

    // - main loop ------------------------------------------------------------

    let mut scheduler = Scheduler::new(&config,
                                       table,
                                       routine,
                                       platform.vcp,
                                       platform.tick,
                                       platform.channel)
        .with_verifier(verifier);

    loop {
        match scheduler.step() {
            State::Dispatching => platform.leds.ld1.toggle(),
            State::Draining => break,
            _ => (),
        }
    }

    match scheduler.finish() {
        Ok(summary) => {
            info!("{} of {} passed", summary.tally.total_pass(), summary.tally.total_tests());
            platform.leds.show_verdict(summary.tally.total_fail() == 0);
        }
        Err(e) => {
            error!("report failed: {}", e);
            platform.leds.show_verdict(false);
        }
    }

    loop {
        cortex_m::asm::wfi();
    }
}
