#![no_std]
#![no_main]

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pull},
    peripherals::SPI2,
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Duration, Ticker, Timer};

bind_interrupts!(struct Irqs {
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use holytic_face::{
    peripherals::{backlight::Backlight, button::Button, display::Display},
    system::{
        config::{FaceConfig, PowerConfig, SystemConfig},
        time::{SystemUptime, TimeManager, TimeReference},
    },
    ui::{DrawError, FaceEngine, HolyWatchface, InterruptionFilter, Properties},
};

// Others
use chrono::FixedOffset;

// Include current UTC epoch at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));
const TIMEZONE: i32 = 1 * 3_600;

// Communication channels
static BUTTON_PRESSED: Signal<ThreadModeRawMutex, ()> = Signal::new();

/// Polls the button state every 10ms
#[embassy_executor::task(pool_size = 1)]
async fn poll_button(mut button: Button<'static>) {
    loop {
        if button.pressed().await {
            BUTTON_PRESSED.signal(());
        }

        // Re-schedule the timer interrupt in 10ms
        Timer::after(Duration::from_millis(10)).await;
    }
}

/// Drives the watch face: ambient mode, mute and redraws
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(
    mut display: Display<'static, SPI2>,
    mut backlight: Backlight<'static>,
    power: PowerConfig,
) {
    let mut clock = TimeManager::init(SystemUptime);
    clock.set_time(TimeReference::from_epoch(UTC_EPOCH));

    let mut engine = FaceEngine::new(HolyWatchface::new(FaceConfig::default()), clock);
    engine.on_surface_changed(display.size());
    // IPS panel, no low-bit or burn-in constraints
    engine.on_properties_changed(Properties::default());
    if let Some(zone) = FixedOffset::east_opt(TIMEZONE) {
        engine.on_time_zone_changed(zone);
    }
    engine.on_visibility_changed(true);

    let mut ambient = false;
    let mut muted = false;
    let mut idle_secs: u32 = 0;
    let mut tick = Ticker::every(Duration::from_secs(1));
    loop {
        if BUTTON_PRESSED.try_take().is_some() {
            idle_secs = 0;
            if ambient {
                ambient = false;
                unwrap!(backlight.set(power.awake_brightness));
                engine.on_ambient_mode_changed(false);
            } else {
                muted = !muted;
                engine.on_interruption_filter_changed(if muted {
                    InterruptionFilter::None
                } else {
                    InterruptionFilter::All
                });
            }
        } else if !ambient {
            idle_secs += 1;
            if idle_secs >= power.idle_timeout_secs {
                ambient = true;
                unwrap!(backlight.set(power.ambient_brightness));
                engine.on_ambient_mode_changed(true);
            }
        }

        engine.tick();
        match engine.redraw(&mut display.surface()) {
            Ok(_) => {}
            Err(DrawError::Time(error)) => defmt::warn!("Cannot tell the time: {}", error),
            Err(DrawError::Canvas(_)) => defmt::warn!("Display write failed"),
        }

        // Re-schedule the timer interrupt in 1s
        tick.next().await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(SystemConfig::new());
    defmt::info!("Initializing");

    let power = PowerConfig::default();

    // Initialize Backlight
    let backlight = unwrap!(Backlight::init(
        Output::new(p.P0_14, Level::High, OutputDrive::Standard),
        Output::new(p.P0_22, Level::High, OutputDrive::Standard),
        Output::new(p.P0_23, Level::High, OutputDrive::Standard),
        power.awake_brightness,
    ));

    // Initialize Button
    let button = Button::init(
        Input::new(p.P0_13, Pull::None),
        Output::new(p.P0_15, Level::Low, OutputDrive::Standard),
    );

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
    ));

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(poll_button(button)));
    unwrap!(spawner.spawn(update_lcd(display, backlight, power)));
}
