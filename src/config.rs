use core::time::Duration;

use crate::verifier::{NanPolicy, ZeroSignPolicy};


// - constants ----------------------------------------------------------------

pub const PERIOD_50MS: Duration = Duration::from_millis(50);
pub const PERIOD_500MS: Duration = Duration::from_millis(500);
pub const PERIOD_1S: Duration = Duration::from_secs(1);
pub const PERIOD_2S: Duration = Duration::from_secs(2);
pub const PERIOD_4S: Duration = Duration::from_secs(4);

/// ST-LINK virtual COM port
pub const BAUD_RATE: u32 = 115_200;


// - Config -------------------------------------------------------------------

/// Build-time settings of a test run
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Printed in the summary header. Set `FMAX_SUITE_NAME` when
    /// building to override.
    pub suite_name: &'static str,
    /// Time between two test iterations.
    pub tick_period: Duration,
    pub zero_sign: ZeroSignPolicy,
    pub nan: NanPolicy,
    pub baud_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suite_name: match option_env!("FMAX_SUITE_NAME") {
                Some(name) => name,
                None => env!("CARGO_PKG_NAME"),
            },
            tick_period: PERIOD_50MS,
            zero_sign: ZeroSignPolicy::default(),
            nan: NanPolicy::default(),
            baud_rate: BAUD_RATE,
        }
    }
}


// - tests --------------------------------------------------------------------
