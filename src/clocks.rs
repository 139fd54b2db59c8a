use crate::hal;
use hal::prelude::*;
use hal::pac;
use hal::pwr;
use hal::rcc;


// - configure ----------------------------------------------------------------

/// Configures system clocks:
///
///   480 MHz system clock from PLL1
///   240 MHz AXI/AHB, 120 MHz APB1..4
///   TIM2 kernel clock at 240 MHz
///
/// Usage:
///
/// ```
/// let dp = pac::Peripherals::take().unwrap();
/// let ccdr = configure(dp.PWR.constrain(),
///                      dp.RCC.constrain(),
///                      &dp.SYSCFG);
/// ```
pub fn configure(pwr: pwr::Pwr, rcc: rcc::Rcc, syscfg: &pac::SYSCFG) -> rcc::Ccdr {
    let pwrcfg = pwr.smps().vos0(syscfg).freeze();
    rcc.sys_ck(480.MHz())                                // system clock @ 480 MHz
       .pll1_strategy(rcc::PllConfigStrategy::Iterative) // pll1 drives system clock
       .pll1_r_ck(480.MHz())                             // for TRACECLK when logging over ITM
       .freeze(pwrcfg, syscfg)
}
