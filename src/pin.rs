// SPDX-FileCopyrightText: 2024 Kent Gibson <warthog618@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrappers presenting a single GPIO line in the two roles the tool drives:
//! a momentary switch input or a binary actuator output.

use gpiocdev::line::{Bias, Offset, Value};
use gpiocdev::Request;
use std::path::Path;
use std::time::Duration;

/// A momentary switch on a GPIO pin.
///
/// The line is requested as a debounced, pulled-up, active-low input, so a
/// switch shorting the pin to ground reads as pressed.
///
/// The line is held until the [`Switch`] is dropped.
#[derive(Debug)]
pub struct Switch {
    req: Request,
    offset: Offset,
}

impl Switch {
    /// Request the line at `offset` on the `chip` as a switch input.
    pub fn request<P>(
        chip: P,
        offset: Offset,
        debounce_period: Duration,
        consumer: &str,
    ) -> gpiocdev::Result<Switch>
    where
        P: AsRef<Path>,
    {
        let req = Request::builder()
            .on_chip(chip.as_ref())
            .with_consumer(consumer)
            .with_line(offset)
            .as_input()
            .as_active_low()
            .with_bias(Bias::PullUp)
            .with_debounce_period(debounce_period)
            .request()?;
        Ok(Switch { req, offset })
    }

    /// Is the switch currently held closed?
    pub fn is_pressed(&self) -> gpiocdev::Result<bool> {
        Ok(self.req.value(self.offset)? == Value::Active)
    }
}

/// A binary actuator on a GPIO pin.
///
/// The line is requested as an output, and is driven inactive as part of the
/// request.
///
/// The line is held, and so remains as last set, until the [`Actuator`] is
/// dropped.
#[derive(Debug)]
pub struct Actuator {
    req: Request,
    offset: Offset,
}

impl Actuator {
    /// Request the line at `offset` on the `chip` as an actuator output.
    pub fn request<P>(chip: P, offset: Offset, consumer: &str) -> gpiocdev::Result<Actuator>
    where
        P: AsRef<Path>,
    {
        let req = Request::builder()
            .on_chip(chip.as_ref())
            .with_consumer(consumer)
            .with_line(offset)
            .as_output(Value::Inactive)
            .request()?;
        Ok(Actuator { req, offset })
    }

    /// Drive the pin active.
    pub fn on(&self) -> gpiocdev::Result<()> {
        self.req.set_value(self.offset, Value::Active)
    }

    /// Drive the pin inactive.
    pub fn off(&self) -> gpiocdev::Result<()> {
        self.req.set_value(self.offset, Value::Inactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpiosim::{Level, Simpleton};

    // max time to allow changes to propagate from the sim to cdev,
    // including any debounce settling
    const PROPAGATION_DELAY: Duration = Duration::from_millis(10);

    const DEBOUNCE_PERIOD: Duration = Duration::from_millis(1);

    fn wait_propagation_delay() {
        std::thread::sleep(PROPAGATION_DELAY);
    }

    #[test]
    fn switch_released_while_pulled_up() {
        let s = Simpleton::new(8);
        let offset = 3;

        let sw = Switch::request(s.dev_path(), offset, DEBOUNCE_PERIOD, "pinctl-test")
            .expect("request should succeed");

        // the requested pull-up bias leaves the line high
        wait_propagation_delay();
        assert!(!sw.is_pressed().expect("read should succeed"));
    }

    #[test]
    fn switch_pressed_while_grounded() {
        let s = Simpleton::new(8);
        let offset = 2;

        let sw = Switch::request(s.dev_path(), offset, DEBOUNCE_PERIOD, "pinctl-test")
            .expect("request should succeed");

        s.pulldown(offset).expect("pulldown should succeed");
        wait_propagation_delay();
        assert!(sw.is_pressed().expect("read should succeed"));

        s.pullup(offset).expect("pullup should succeed");
        wait_propagation_delay();
        assert!(!sw.is_pressed().expect("read should succeed"));
    }

    #[test]
    fn actuator_drives_inactive_on_request() {
        let s = Simpleton::new(8);
        let offset = 4;

        let _act = Actuator::request(s.dev_path(), offset, "pinctl-test")
            .expect("request should succeed");

        assert_eq!(
            s.get_level(offset).expect("level should be readable"),
            Level::Low
        );
    }

    #[test]
    fn actuator_on_off() {
        let s = Simpleton::new(8);
        let offset = 5;

        let act = Actuator::request(s.dev_path(), offset, "pinctl-test")
            .expect("request should succeed");

        act.on().expect("set should succeed");
        assert_eq!(
            s.get_level(offset).expect("level should be readable"),
            Level::High
        );

        // re-asserting holds the level
        act.on().expect("set should succeed");
        assert_eq!(
            s.get_level(offset).expect("level should be readable"),
            Level::High
        );

        act.off().expect("set should succeed");
        assert_eq!(
            s.get_level(offset).expect("level should be readable"),
            Level::Low
        );
    }

    #[test]
    fn actuator_releases_line_on_drop() {
        let s = Simpleton::new(8);
        let offset = 6;

        let act = Actuator::request(s.dev_path(), offset, "pinctl-test")
            .expect("request should succeed");
        drop(act);

        // the line is free to be requested again
        let _act = Actuator::request(s.dev_path(), offset, "pinctl-test")
            .expect("re-request should succeed");
    }
}
