//! oledui Demo Firmware
//!
//! Runs the frame UI on a 128x64 SH1106 module wired to I2C1 of an
//! STM32F042K6 (PB6=SCL, PB7=SDA). A rotary encoder on PA4/PA5 steps
//! through the frames; its push button on PA1 pauses auto transition
//! (short press) or inverts the panel (long press).

#![no_std]
#![no_main]

mod encoder;
mod font;
mod frames;

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_stm32::bind_interrupts;
use embassy_stm32::exti::{self, ExtiInput};
use embassy_stm32::gpio::{Input, Pull};
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::time::Hertz;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Instant, Timer};
use oledui_core::{
    AnimationDirection, Clock, Display, Frame, IndicatorDirection, IndicatorPosition, Overlay, Ui,
    UiConfig,
};
use oledui_drivers::I2cTransport;
use oledui_hal::{EhI2c, I2cConfig};
use {defmt_rtt as _, panic_probe as _};

use crate::encoder::{Encoder, Nav};
use crate::frames::{About, Activity, Shapes, Title, Uptime};

bind_interrupts!(struct Irqs {
    EXTI0_1 => exti::InterruptHandler<embassy_stm32::interrupt::typelevel::EXTI0_1>;
});

/// Input events for the UI loop
static NAV_EVENTS: Channel<CriticalSectionRawMutex, Nav, 4> = Channel::new();

/// UI settings for the demo
const UI_CONFIG: UiConfig = UiConfig {
    // A full I2C frame takes ~25 ms at 400 kHz
    update_interval_ms: 50,
    time_per_frame_ms: 4000,
    time_per_transition_ms: 400,
    auto_transition: true,
    forwards: true,
    animation: AnimationDirection::SlideLeft,
    indicator_position: IndicatorPosition::Bottom,
    indicator_direction: IndicatorDirection::LeftRight,
};

/// Embassy time as the UI clock
struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&mut self) -> u64 {
        Instant::now().as_millis()
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("oledui demo starting...");

    let p = embassy_stm32::init(Default::default());

    // Setup I2C for OLED (PB6=SCL, PB7=SDA)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = Hertz(I2cConfig::FAST.frequency);
    i2c_config.timeout = Duration::from_millis(100);
    let i2c = I2c::new_blocking(p.I2C1, p.PB6, p.PB7, i2c_config);

    let mut title = Title;
    let mut about = About;
    let mut shapes = Shapes;
    let mut activity = Activity;
    let mut uptime = Uptime;

    let display = Display::new(I2cTransport::new(EhI2c::new(i2c)));
    let mut ui = Ui::with_config(display, SystemClock, &UI_CONFIG);
    ui.set_frames([
        &mut title as &mut dyn Frame,
        &mut about,
        &mut shapes,
        &mut activity,
    ]);
    ui.set_overlays([&mut uptime as &mut dyn Overlay]);

    match ui.init() {
        Ok(()) => info!("OLED initialized"),
        Err(e) => error!("Failed to initialize display: {:?}", e),
    }
    ui.display_mut().set_contrast(0x8F).ok();

    // Setup encoder (PA4=A, PA5=B, PA1=Button)
    let enc_a = Input::new(p.PA4, Pull::Up);
    let enc_b = Input::new(p.PA5, Pull::Up);
    let enc_btn = ExtiInput::new(p.PA1, p.EXTI1, Pull::Up, Irqs);

    spawner.spawn(encoder_task(enc_a, enc_b)).unwrap();
    spawner.spawn(button_task(enc_btn)).unwrap();

    info!("All tasks spawned");

    let mut inverted = false;
    loop {
        let budget = ui.update();
        if budget <= 0 {
            continue;
        }

        let wait = Timer::after(Duration::from_millis(budget as u64));
        if let Either::First(nav) = select(NAV_EVENTS.receive(), wait).await {
            debug!("Input: {:?}", nav);
            match nav {
                Nav::Next => ui.next_frame(),
                Nav::Previous => ui.previous_frame(),
                Nav::ToggleAutoTransition => {
                    if ui.auto_transition() {
                        ui.disable_auto_transition();
                    } else {
                        ui.enable_auto_transition();
                    }
                }
                Nav::ToggleInvert => {
                    inverted = !inverted;
                    if ui.display_mut().set_inverted(inverted).is_err() {
                        warn!("Failed to set inversion");
                    }
                }
            }
        }
    }
}

/// Encoder rotation task
#[embassy_executor::task]
async fn encoder_task(a: Input<'static>, b: Input<'static>) {
    info!("Encoder task started");

    let mut encoder = Encoder::new(a, b);

    loop {
        if let Some(nav) = encoder.poll().await {
            NAV_EVENTS.send(nav).await;
        }
    }
}

/// Button press task
#[embassy_executor::task]
async fn button_task(mut btn: ExtiInput<'static>) {
    info!("Button task started");

    loop {
        let nav = encoder::wait_for_press(&mut btn).await;
        NAV_EVENTS.send(nav).await;
    }
}
