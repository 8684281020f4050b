//! Kardia Display Firmware
//!
//! Firmware for a 128x64 SH1106 OLED module driven by an STM32F042K6.
//! Draws a heart one dot pair at a time, erases it the same way, and moves
//! a caption to a new corner every pass.

#![no_std]
#![no_main]

mod sh1106;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::time::Hertz;
use embassy_time::{Delay, Duration, Instant, Timer};
use kardia_core::config::KardiaConfig;
use kardia_core::scene::{FrameState, HeartPhase};
use kardia_display::{Canvas, SceneComposer};
use {defmt_rtt as _, panic_probe as _};

use crate::sh1106::Sh1106;

mod config {
    use kardia_core::config::{DisplayHwConfig, HeartConfig, KardiaConfig, SceneConfig};

    include!(concat!(env!("OUT_DIR"), "/config.rs"));
}

/// Wait before retrying a failed panel init
const INIT_RETRY_MS: u64 = 1000;

/// Pause between frames
const FRAME_PAUSE_MS: u64 = 50;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Kardia Display Firmware starting...");

    // Time driver starts here; nothing may await a timer before it
    let p = embassy_stm32::init(Default::default());

    let config: KardiaConfig = config::load();
    info!("Config: {}", config);

    let composer = match SceneComposer::new(&config.scene) {
        Ok(composer) => composer,
        Err(e) => {
            // build.rs already validated the config
            error!("Unusable scene config: {:?}", e);
            loop {
                Timer::after(Duration::from_millis(INIT_RETRY_MS)).await;
            }
        }
    };

    // Setup I2C for OLED (PB6=SCL, PB7=SDA)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = Hertz::khz(400);
    i2c_config.timeout = Duration::from_millis(100);
    let i2c = I2c::new_blocking(p.I2C1, p.PB6, p.PB7, i2c_config);

    let mut canvas = Canvas::new(Sh1106::new(i2c, &config.display));
    while let Err(e) = canvas.init() {
        error!("Failed to initialize display: {:?}", e);
        Timer::after(Duration::from_millis(INIT_RETRY_MS)).await;
    }
    info!("OLED initialized");

    let mut delay = Delay;
    let mut state = FrameState::new();

    loop {
        let roll = (Instant::now().as_ticks() % 3) as u8;

        match composer.frame(&mut canvas, &mut delay, state, roll) {
            Ok(outcome) => {
                debug!(
                    "Frame {:?} -> {:?}, {} steps",
                    state.phase, outcome.next, outcome.steps
                );
                state = outcome.next;
            }
            Err(e) => {
                warn!("Frame failed: {:?}", e);
                // Partial erase on screen; start over with a fresh reveal
                state.phase = HeartPhase::Hidden;
            }
        }

        Timer::after(Duration::from_millis(FRAME_PAUSE_MS)).await;
    }
}
