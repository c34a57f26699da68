use std::{thread, time::Duration};

use clap::Parser;
use klipper_api::moonraker_client::{MoonrakerError, DEFAULT_HOST, DEFAULT_PORT};
use klipper_api::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    // Host running Moonraker.
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    // Port Moonraker listens on.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

// Time to let homing settle before moving.
const HOMING_WAIT: Duration = Duration::from_secs(2);

fn main() {
    env_logger::init();

    let args = Args::parse();

    println!("Klipper API Interaction Demo");
    println!("{}", "=".repeat(50));

    if let Err(e) = run(&args) {
        println!("\nError: {e}");
        println!("\nTroubleshooting:");
        println!("1. Make sure Klipper and Moonraker are running");
        println!(
            "2. Check that Moonraker is accessible on port {}",
            args.port
        );
        println!("3. Verify your printer is connected and powered on");
        println!("4. Check Moonraker configuration allows API access");
    }
}

fn run(args: &Args) -> Result<(), MoonrakerError> {
    let klipper = MoonrakerConnector::new(&args.host, args.port)?;

    println!("\nCurrent Toolhead motion report:");
    let motion_report = klipper.get_motion_report();
    if !motion_report.is_empty() {
        print_motion_report(&motion_report);
    } else {
        log::debug!("Motion report was empty.");
    }

    if klipper.execute_gcode(SET_ABSOLUTE_POSITIONING) {
        niceprint("Set absolute positioning (G90)");
    }

    // This moves the printer. Keep clear of the toolhead.
    klipper.home_axes("XY");
    thread::sleep(HOMING_WAIT);
    klipper.move_toolhead(&ToolheadMove::default().x(100.0).y(100.0).feedrate(6000));

    Ok(())
}
