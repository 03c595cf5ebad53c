//! Headless runner: executes a ROM for a number of frames and prints
//! the final machine state. Useful for tracing with RUST_LOG=debug.

use std::env;
use std::fs;

use anyhow::{bail, Context, Result};

use dotmatrix_gb::GameBoy;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(rom_path) = args.next() else {
        bail!("usage: dmg_run <rom> [boot_rom] [frames]");
    };

    let rom = fs::read(&rom_path).with_context(|| format!("reading ROM {rom_path}"))?;
    let mut gb = GameBoy::new();
    gb.load_rom(rom);

    let mut frames: u32 = 60;
    if let Some(arg) = args.next() {
        // A numeric second argument is the frame count; anything else
        // is a boot ROM path.
        if let Ok(count) = arg.parse() {
            frames = count;
        } else {
            let boot = fs::read(&arg).with_context(|| format!("reading boot ROM {arg}"))?;
            gb.load_boot_rom(boot);
            if let Some(count) = args.next() {
                frames = count
                    .parse()
                    .with_context(|| format!("invalid frame count {count}"))?;
            }
        }
    }

    if !gb.bus.boot_enabled() {
        gb.skip_boot();
    }

    for frame in 0..frames {
        gb.step_frame();
        if gb.cpu.is_locked() {
            log::error!("CPU locked during frame {frame}");
            break;
        }
    }

    println!("{gb}");
    Ok(())
}
