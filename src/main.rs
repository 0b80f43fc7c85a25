// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A command line tool for driving a single GPIO pin.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod common;
mod pin;
mod read;
mod write;

fn main() -> ExitCode {
    match Opts::try_parse() {
        Ok(opt) => match run(&opt) {
            Ok(()) => return ExitCode::SUCCESS,
            Err(e) => eprintln!("Error occurred: {}", common::format_error(&e, opt.verbose)),
        },
        Err(e) => eprintln!("{e}"),
    }
    ExitCode::FAILURE
}

fn run(opt: &Opts) -> Result<()> {
    let chip = common::chip_lookup_from_id(&opt.chip)?;
    match &opt.cmd {
        Command::Rd(cfg) => read::cmd(&chip, opt.gpio, cfg),
        Command::Wr(cfg) => write::cmd(&chip, opt.gpio, cfg),
    }
}

#[derive(Parser)]
#[command(
    name = "pinctl",
    about = "A utility to read or drive a single GPIO pin on Linux using the GPIO character device.",
    version,
    propagate_version = true
)]
struct Opts {
    /// Provide more detailed error messages.
    #[arg(short = 'v', long, global = true, display_order = 800)]
    pub verbose: bool,

    /// The chip housing the pin.
    ///
    /// The chip may be identified by number, name, or path.
    /// e.g. the following all select the same chip:
    ///     -c 0
    ///     -c gpiochip0
    ///     -c /dev/gpiochip0
    #[arg(
        short,
        long,
        value_name = "chip",
        global = true,
        env = "PINCTL_CHIP",
        default_value = "gpiochip0",
        verbatim_doc_comment
    )]
    pub chip: String,

    /// The offset of the pin on the chip.
    #[arg(value_name = "gpio")]
    pub gpio: u32,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
enum Command {
    /// Read the pin as a momentary switch.
    Rd(read::Opts),

    /// Drive the pin as a binary actuator.
    Wr(write::Opts),
}
