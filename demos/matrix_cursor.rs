#![no_std]
#![no_main]

use core::{convert::Infallible, panic};

use embassy_executor::Spawner;
use embassy_futures::select::{Either, Either4, select, select4};
use embassy_time::Duration;
use zip96::{
    Result,
    led_strip::palette,
    zip96::{ZIP96_ROW_WIDTH, ZIP96_ROWS, Zip96, Zip96Pins},
};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

// Move a cursor with the direction buttons. A cycles its color, B buzzes and clears.
async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());
    let mut zip96 = Zip96::new(Zip96Pins::from_peripherals(p), spawner)?;

    let width = ZIP96_ROW_WIDTH as i32;
    let height = ZIP96_ROWS as i32;
    let (mut x, mut y) = (width / 2, height / 2);
    let mut color_index = 1;

    loop {
        let color = palette::COLORS[color_index % palette::COLORS.len()];
        zip96.screen.set_led_matrix(x, y, color)?;
        zip96.screen.show_and_wait().await?;

        let directions = select4(
            zip96.up.wait_for_press(),
            zip96.down.wait_for_press(),
            zip96.left.wait_for_press(),
            zip96.right.wait_for_press(),
        );
        let actions = select(zip96.a.wait_for_press(), zip96.b.wait_for_press());
        match select(directions, actions).await {
            // Wrap around the edges instead of letting x alias into the next row.
            Either::First(direction) => match direction {
                Either4::First(()) => y = (y + height - 1) % height,
                Either4::Second(()) => y = (y + 1) % height,
                Either4::Third(()) => x = (x + width - 1) % width,
                Either4::Fourth(()) => x = (x + 1) % width,
            },
            Either::Second(Either::First(())) => {
                color_index = color_index % (palette::COLORS.len() - 1) + 1;
            }
            Either::Second(Either::Second(())) => {
                zip96.screen.fill(palette::BLACK);
                zip96.vibrate.pulse(Duration::from_millis(80)).await;
                zip96.buzzer.play_tone_for(880, Duration::from_millis(120)).await;
            }
        }
    }
}
