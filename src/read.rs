// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::common;
use crate::pin::Switch;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Parser)]
pub struct Opts {
    /// The debounce period applied to the switch.
    ///
    /// The period is taken as milliseconds unless otherwise specified.
    #[arg(
        short = 'p',
        long,
        value_name = "period",
        value_parser = common::parse_duration,
        default_value = "10ms"
    )]
    debounce_period: Duration,

    /// The consumer label applied to the requested line.
    #[arg(short = 'C', long, value_name = "name", default_value = "pinctl-rd")]
    consumer: String,
}

pub fn cmd(chip: &Path, gpio: u32, opts: &Opts) -> Result<()> {
    let switch = Switch::request(chip, gpio, opts.debounce_period, &opts.consumer)
        .with_context(|| format!("unable to request GPIO {} as a switch", gpio))?;
    let setting = if switch
        .is_pressed()
        .with_context(|| format!("unable to read GPIO {}", gpio))?
    {
        println!("Pressed");
        1
    } else {
        println!("Released");
        0
    };
    println!("Current setting of GPIO {}: {}", gpio, setting);
    Ok(())
}
