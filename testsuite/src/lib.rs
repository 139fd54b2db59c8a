#![no_std]

use panic_probe as _;         // panic handler
use defmt_rtt as _;           // global logger

use fmax_harness as harness;
use harness::board::Platform;
use harness::pac;


// - panic handler ------------------------------------------------------------

#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}


// - board initialization -----------------------------------------------------

/// Brings the board up with a fast tick so runs finish quickly.
pub fn init() -> (harness::Config, Platform) {
    defmt::debug!("initializing board");

    let board = defmt::unwrap!(harness::Board::take());
    let dp = defmt::unwrap!(pac::Peripherals::take());

    let config = harness::Config {
        suite_name: "testsuite",
        tick_period: harness::config::PERIOD_50MS,
        ..harness::Config::default()
    };
    let platform = board.bring_up(dp, &config);

    (config, platform)
}
