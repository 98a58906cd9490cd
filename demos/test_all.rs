#![no_std]
#![no_main]

use core::{convert::Infallible, panic};

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use zip96::{
    Result,
    led_strip::palette,
    zip96::{ZIP96_LED_COUNT, Zip96, Zip96Pins},
};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    // Poll every button, like a game loop would.
    const POLL_DELAY: Duration = Duration::from_millis(10);

    let p = embassy_rp::init(Default::default());
    let mut zip96 = Zip96::new(Zip96Pins::from_peripherals(p), spawner)?;
    zip96.screen.set_brightness(10);

    loop {
        if zip96.up.is_pressed() {
            // Light the LEDs one at a time so the wiring order is visible.
            for index in 0..ZIP96_LED_COUNT {
                zip96.screen.set_led(index, palette::WHITE)?;
                zip96.screen.show_and_wait().await?;
            }
        }

        if zip96.left.is_pressed() {
            zip96.screen.fill(palette::RED);
            zip96.screen.show_and_wait().await?;
        }

        if zip96.down.is_pressed() {
            zip96.screen.fill(palette::GREEN);
            zip96.screen.show_and_wait().await?;
        }

        if zip96.right.is_pressed() {
            zip96.screen.fill(palette::BLUE);
            zip96.screen.show_and_wait().await?;
        }

        if zip96.a.is_pressed() {
            zip96.buzzer.play_tone(500);
        } else {
            zip96.buzzer.stop_tone();
        }

        if zip96.b.is_pressed() {
            zip96.vibrate.vibrate();
        } else {
            zip96.vibrate.stop();
        }

        Timer::after(POLL_DELAY).await;
    }
}
