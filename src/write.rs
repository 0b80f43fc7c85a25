// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::pin::Actuator;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::thread;
use std::time::Duration;

// period the pin is held active for each interval of an activation sequence
const ACTIVATE_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Parser)]
pub struct Opts {
    /// The setting to drive the pin to - 1 to activate, 0 to deactivate.
    #[arg(value_name = "setting", value_parser = parse_setting)]
    setting: Setting,

    /// The number of one second intervals to hold the pin active.
    ///
    /// Ignored when deactivating.
    #[arg(value_name = "duration")]
    duration: u64,

    /// The consumer label applied to the requested line.
    #[arg(short = 'C', long, value_name = "name", default_value = "pinctl-wr")]
    consumer: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Setting {
    Deactivate,
    Activate,
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
#[error("'{0}' setting value must be 0 or 1")]
struct ParseSettingError(String);

fn parse_setting(s: &str) -> std::result::Result<Setting, ParseSettingError> {
    match s {
        "0" => Ok(Setting::Deactivate),
        "1" => Ok(Setting::Activate),
        _ => Err(ParseSettingError(s.into())),
    }
}

pub fn cmd(chip: &Path, gpio: u32, opts: &Opts) -> Result<()> {
    let actuator = Actuator::request(chip, gpio, &opts.consumer)
        .with_context(|| format!("unable to request GPIO {} as an actuator", gpio))?;
    match opts.setting {
        Setting::Activate => {
            // hold active for the requested intervals - the line is left
            // active once the sequence completes
            for _ in 0..opts.duration {
                actuator
                    .on()
                    .with_context(|| format!("unable to activate GPIO {}", gpio))?;
                thread::sleep(ACTIVATE_INTERVAL);
            }
        }
        Setting::Deactivate => {
            actuator
                .off()
                .with_context(|| format!("unable to deactivate GPIO {}", gpio))?;
        }
    }
    Ok(())
}
