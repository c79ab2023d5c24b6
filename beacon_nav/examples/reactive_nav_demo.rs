//! Headless demo of the reactive navigation controller.
//!
//! A scripted host loop publishes synthetic sensor snapshots (a line to
//! trace, then a light gradient, then a close obstacle, then goal-level
//! lux) and prints the command stream the controller publishes back.
//!
//! Run with: cargo run --example reactive_nav_demo

use beacon_core::{Hub, Node, NodeInfo};
use beacon_nav::messages::{CmdVel, HeadingStep, LightSample, LineScan, RangeReading, RangeScan};
use beacon_nav::params::NavParams;
use beacon_nav::NavControllerNode;
use std::f64::consts::TAU;

const MAX_RANGE: f64 = 1.5;
const SONARS: usize = 12;
const LINE_SENSORS: usize = 11;

fn clear_ring() -> RangeScan {
    RangeScan::new(
        (0..SONARS)
            .map(|i| RangeReading::clear(i as f64 * TAU / SONARS as f64, MAX_RANGE))
            .collect(),
    )
}

fn ring_with_detection(index: usize, distance: f64) -> RangeScan {
    let mut scan = clear_ring();
    let angle = scan.readings[index].angle;
    scan.readings[index] = RangeReading::detection(angle, distance, MAX_RANGE);
    scan
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = NavParams::new(0.25, SONARS, LINE_SENSORS);
    let mut controller = NavControllerNode::new(params)?;

    let mut info = NodeInfo::new("NavControllerNode".to_string(), true);
    controller.init(&mut info)?;

    // host side of the topics
    let sonars: Hub<RangeScan> = Hub::new("sonars")?;
    let line: Hub<LineScan> = Hub::new("line_scan")?;
    let light_left: Hub<LightSample> = Hub::new("light/left")?;
    let light_right: Hub<LightSample> = Hub::new("light/right")?;
    let mut cmd: Hub<CmdVel> = Hub::new("cmd_vel")?;
    let mut heading: Hub<HeadingStep> = Hub::new("heading_step")?;

    for tick in 0..40 {
        // script: line under the left sensors, then open floor with a light
        // gradient, then a close obstacle with the right side brighter, and
        // finally goal-level lux
        let (scan, hits, left, right) = match tick {
            0..=9 => {
                let mut hits = vec![false; LINE_SENSORS];
                hits[1] = true;
                hits[2] = true;
                (
                    clear_ring(),
                    hits,
                    LightSample::new(0.005, 0.30),
                    LightSample::new(0.006, 0.32),
                )
            }
            10..=19 => (
                clear_ring(),
                vec![false; LINE_SENSORS],
                LightSample::new(0.01, 0.25),
                LightSample::new(0.02, 0.65),
            ),
            20..=29 => (
                ring_with_detection(2, 0.45),
                vec![false; LINE_SENSORS],
                LightSample::new(0.02, 0.40),
                LightSample::new(0.04, 0.70),
            ),
            _ => (
                clear_ring(),
                vec![false; LINE_SENSORS],
                LightSample::new(0.07, 0.90),
                LightSample::new(0.08, 0.95),
            ),
        };

        sonars.send(scan, None)?;
        line.send(LineScan::new(hits), None)?;
        light_left.send(left, None)?;
        light_right.send(right, None)?;

        info.begin_tick();
        controller.tick(Some(&mut info));

        while let Some(c) = cmd.recv(None) {
            println!(
                "tick {:>2}: linear={:+.3} m/s angular={:+.3} rad/s",
                tick, c.linear, c.angular
            );
        }
        while let Some(step) = heading.recv(None) {
            println!("tick {:>2}: heading snap {:+.3} rad", tick, step.delta);
        }
    }

    Ok(())
}
