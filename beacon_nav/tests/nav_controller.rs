//! End-to-end tests for the navigation controller: a host-side fixture
//! publishes sensor snapshots over the topic bus, ticks the node, and reads
//! back the published commands.

use approx::assert_relative_eq;
use beacon_core::{BeaconError, Hub, Node, NodeInfo};
use beacon_nav::algorithms::angles::wrap_to_pi;
use beacon_nav::messages::{CmdVel, HeadingStep, LightSample, LineScan, RangeReading, RangeScan};
use beacon_nav::params::NavParams;
use beacon_nav::NavControllerNode;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

const MAX_RANGE: f64 = 1.5;
const RADIUS: f64 = 0.25;
const SONARS: usize = 12;
const LINE_SENSORS: usize = 11;

/// Host side of the topic bus for one controller under test. Topics are
/// process-global, so every test runs under its own prefix.
struct Harness {
    node: NavControllerNode,
    info: NodeInfo,
    sonars: Hub<RangeScan>,
    bumpers: Hub<RangeScan>,
    line: Hub<LineScan>,
    light_left: Hub<LightSample>,
    light_right: Hub<LightSample>,
    cmd: Hub<CmdVel>,
    heading: Hub<HeadingStep>,
}

impl Harness {
    fn new(prefix: &str, params: NavParams) -> Self {
        let node = NavControllerNode::new_with_topics(
            params,
            &format!("{prefix}/sonars"),
            &format!("{prefix}/bumpers"),
            &format!("{prefix}/line_scan"),
            &format!("{prefix}/light/left"),
            &format!("{prefix}/light/right"),
            &format!("{prefix}/cmd_vel"),
            &format!("{prefix}/heading_step"),
        )
        .unwrap();

        let mut harness = Self {
            node,
            info: NodeInfo::new("NavControllerNode".to_string(), false),
            sonars: Hub::new(&format!("{prefix}/sonars")).unwrap(),
            bumpers: Hub::new(&format!("{prefix}/bumpers")).unwrap(),
            line: Hub::new(&format!("{prefix}/line_scan")).unwrap(),
            light_left: Hub::new(&format!("{prefix}/light/left")).unwrap(),
            light_right: Hub::new(&format!("{prefix}/light/right")).unwrap(),
            cmd: Hub::new(&format!("{prefix}/cmd_vel")).unwrap(),
            heading: Hub::new(&format!("{prefix}/heading_step")).unwrap(),
        };

        harness.node.init(&mut harness.info).unwrap();
        // drop the command published at init
        while harness.cmd.recv(None).is_some() {}
        harness
    }

    fn publish_snapshot(
        &mut self,
        sonars: RangeScan,
        line: LineScan,
        left: LightSample,
        right: LightSample,
    ) {
        self.sonars.send(sonars, None).unwrap();
        self.line.send(line, None).unwrap();
        self.light_left.send(left, None).unwrap();
        self.light_right.send(right, None).unwrap();
    }

    /// Run one tick and return the command it published, if any.
    fn tick(&mut self) -> Option<CmdVel> {
        self.info.begin_tick();
        self.node.tick(Some(&mut self.info));

        let mut last = None;
        while let Some(cmd) = self.cmd.recv(None) {
            last = Some(cmd);
        }
        last
    }

    fn recv_heading(&mut self) -> Option<HeadingStep> {
        self.heading.recv(None)
    }
}

fn ring_angle(i: usize) -> f64 {
    i as f64 * TAU / SONARS as f64
}

fn clear_ring() -> RangeScan {
    RangeScan::new((0..SONARS).map(|i| RangeReading::clear(ring_angle(i), MAX_RANGE)).collect())
}

fn ring_with_detection(index: usize, distance: f64) -> RangeScan {
    RangeScan::new(
        (0..SONARS)
            .map(|i| {
                if i == index {
                    RangeReading::detection(ring_angle(i), distance, MAX_RANGE)
                } else {
                    RangeReading::clear(ring_angle(i), MAX_RANGE)
                }
            })
            .collect(),
    )
}

fn dark_line() -> LineScan {
    LineScan::new(vec![false; LINE_SENSORS])
}

#[test]
fn goal_luminance_stops_translation() {
    let mut h = Harness::new("goal", NavParams::new(RADIUS, SONARS, LINE_SENSORS));

    // mean of 0.04 and 0.08 sits exactly on the 0.06 threshold
    h.publish_snapshot(
        clear_ring(),
        dark_line(),
        LightSample::new(0.04, 0.5),
        LightSample::new(0.08, 0.5),
    );
    let cmd = h.tick().unwrap();
    assert_relative_eq!(cmd.linear, 0.0);

    // once the lux drops again nothing restores the cruise speed until an
    // obstacle branch writes the translational channel
    h.publish_snapshot(
        clear_ring(),
        dark_line(),
        LightSample::new(0.01, 0.5),
        LightSample::new(0.01, 0.5),
    );
    let cmd = h.tick().unwrap();
    assert_relative_eq!(cmd.linear, 0.0);

    // obstacle with the left side at least as bright: translational channel
    // is forced back to cruise
    h.publish_snapshot(
        ring_with_detection(0, 0.5),
        dark_line(),
        LightSample::new(0.02, 0.5),
        LightSample::new(0.01, 0.5),
    );
    let cmd = h.tick().unwrap();
    assert_relative_eq!(cmd.linear, 0.5);
}

#[test]
fn lost_line_falls_back_to_light_seeking() {
    let mut h = Harness::new("photo", NavParams::new(RADIUS, SONARS, LINE_SENSORS));

    // bumpers present but silent; they never shape the command
    h.bumpers.send(clear_ring(), None).unwrap();
    h.publish_snapshot(
        clear_ring(),
        dark_line(),
        LightSample::new(0.01, 0.8),
        LightSample::new(0.02, 0.2),
    );

    let cmd = h.tick().unwrap();
    assert_relative_eq!(cmd.angular, 0.6 * FRAC_PI_4, epsilon = 1e-12);
    assert_relative_eq!(cmd.linear, 0.5); // cruise speed from init
    assert!(!h.node.is_tracing_line());
}

#[test]
fn line_edge_steers_proportionally() {
    let mut h = Harness::new("edge", NavParams::new(RADIUS, SONARS, LINE_SENSORS));

    // two hits on the left half of eleven sensors: k = 5, turn = 2/5 * 5
    let mut hits = vec![false; LINE_SENSORS];
    hits[0] = true;
    hits[1] = true;
    h.publish_snapshot(
        clear_ring(),
        LineScan::new(hits),
        LightSample::new(0.01, 0.5),
        LightSample::new(0.02, 0.5),
    );

    let cmd = h.tick().unwrap();
    assert_relative_eq!(cmd.angular, 2.0, epsilon = 1e-12);
    assert!(h.node.is_tracing_line());
}

#[test]
fn blackout_publishes_a_heading_snap() {
    let mut h = Harness::new("blackout", NavParams::new(RADIUS, SONARS, LINE_SENSORS));

    // ten of eleven sensors lit, right side brighter on average
    let mut hits = vec![true; LINE_SENSORS];
    hits[5] = false;
    h.publish_snapshot(
        clear_ring(),
        LineScan::new(hits),
        LightSample::new(0.01, 0.2),
        LightSample::new(0.02, 0.9),
    );

    let cmd = h.tick().unwrap();
    let step = h.recv_heading().unwrap();
    assert_relative_eq!(step.delta, -FRAC_PI_4);
    // the rotational channel is untouched by a snap
    assert_relative_eq!(cmd.angular, 0.0);
    assert!(h.node.is_tracing_line());
}

#[test]
fn obstacle_override_matches_the_circumnavigation_law() {
    let params = NavParams::new(RADIUS, SONARS, LINE_SENSORS);
    let (k1, k2, k3, safety) = (params.k1, params.k2, params.k3, params.safety);
    let mut h = Harness::new("orbit", params);

    // nearest return dead ahead at 0.5 m, right side brighter: the whole
    // command is replaced by the clockwise orbit
    h.publish_snapshot(
        ring_with_detection(0, 0.5),
        dark_line(),
        LightSample::new(0.01, 0.5),
        LightSample::new(0.02, 0.5),
    );
    let cmd = h.tick().unwrap();

    // analytic command for that geometry: p = (0.75, 0), clockwise tangent
    // points at +π/2, restoring term is -atan(k3 (d - safety)) for the
    // clockwise direction
    let d = RADIUS + 0.5;
    let ph_lin = FRAC_PI_2;
    let ph_rot = -(k3 * (d - safety)).atan();
    let ph_ref = wrap_to_pi(ph_lin + ph_rot);

    assert_relative_eq!(cmd.angular, k1 * ph_ref, epsilon = 1e-9);
    assert_relative_eq!(cmd.linear, k2 * ph_ref.cos(), epsilon = 1e-9);
}

#[test]
fn dim_right_side_keeps_line_steer_and_forces_cruise() {
    let mut h = Harness::new("asym", NavParams::new(RADIUS, SONARS, LINE_SENSORS));

    // obstacle in range but the right side is not brighter: only the
    // translational channel is overridden, the light-seeking turn stays
    h.publish_snapshot(
        ring_with_detection(0, 0.5),
        dark_line(),
        LightSample::new(0.02, 0.3),
        LightSample::new(0.01, 0.7),
    );

    let cmd = h.tick().unwrap();
    assert_relative_eq!(cmd.angular, -0.4 * FRAC_PI_4, epsilon = 1e-12);
    assert_relative_eq!(cmd.linear, 0.5);
}

#[test]
fn far_obstacles_do_not_trigger_the_override() {
    let mut h = Harness::new("far", NavParams::new(RADIUS, SONARS, LINE_SENSORS));

    // detection at 1.2 m, beyond the 0.8 m trigger
    h.publish_snapshot(
        ring_with_detection(3, 1.2),
        dark_line(),
        LightSample::new(0.01, 0.5),
        LightSample::new(0.02, 0.5),
    );

    let cmd = h.tick().unwrap();
    assert_relative_eq!(cmd.linear, 0.5);
    assert_relative_eq!(cmd.angular, 0.0);
}

#[test]
fn incomplete_snapshot_publishes_nothing() {
    let mut h = Harness::new("partial", NavParams::new(RADIUS, SONARS, LINE_SENSORS));

    // no light samples this tick
    h.sonars.send(clear_ring(), None).unwrap();
    h.line.send(dark_line(), None).unwrap();

    assert!(h.tick().is_none());
    assert_eq!(h.node.last_command(), (0.0, 0.5));
}

#[test]
fn mismatched_layout_publishes_nothing() {
    let mut h = Harness::new("layout", NavParams::new(RADIUS, SONARS, LINE_SENSORS));

    // a five-sensor ring against a twelve-sensor configuration
    let short_ring =
        RangeScan::new((0..5).map(|i| RangeReading::clear(i as f64, MAX_RANGE)).collect());
    h.publish_snapshot(
        short_ring,
        dark_line(),
        LightSample::new(0.01, 0.5),
        LightSample::new(0.02, 0.5),
    );

    assert!(h.tick().is_none());
}

#[test]
fn invalid_sensor_configuration_is_rejected_at_construction() {
    let no_sonars = NavControllerNode::new(NavParams::new(RADIUS, 0, LINE_SENSORS));
    assert!(matches!(
        no_sonars,
        Err(BeaconError::InvalidSensorConfiguration(_))
    ));

    let narrow_line = NavControllerNode::new(NavParams::new(RADIUS, SONARS, 1));
    assert!(matches!(
        narrow_line,
        Err(BeaconError::InvalidSensorConfiguration(_))
    ));

    let flat_robot = NavControllerNode::new(NavParams::new(0.0, SONARS, LINE_SENSORS));
    assert!(matches!(
        flat_robot,
        Err(BeaconError::InvalidSensorConfiguration(_))
    ));
}
