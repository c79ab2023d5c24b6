use crate::algorithms::line_follow::{self, LineSteer};
use crate::algorithms::{circumnavigate, phototaxis};
use crate::messages::{CmdVel, HeadingStep, LightSample, LineScan, RangeScan};
use crate::params::NavParams;
use beacon_core::{BeaconResult, Hub, LogSummary, Node, NodeInfo};

/// Forward cruising speed commanded at init and restored by the
/// non-orbiting obstacle branch.
const CRUISE_SPEED: f64 = 0.5;

/// Angular window `[lo, hi)` in radians over [0, 2π) scanned for the
/// obstacle override. The literal upper bound takes in the whole ring.
const OBSTACLE_WINDOW: (f64, f64) = (0.0, 6.28);

/// Reactive Navigation Controller Node
///
/// Subscribes to the range ring, bumper ring, forward line array, and the
/// paired light sensors; publishes one velocity command per tick plus a
/// discrete heading step when the line array reads an intersection.
///
/// Behaviors are arbitrated in a fixed order each tick: goal check, line
/// following (falling back to light seeking when no line is traced), then
/// the obstacle override. The commanded linear and angular velocities
/// persist across ticks, so a branch that touches only one channel leaves
/// the other at its previous value, the way a real actuator pair behaves.
pub struct NavControllerNode {
    // Publishers
    cmd_publisher: Hub<CmdVel>,
    heading_publisher: Hub<HeadingStep>,

    // Subscribers
    sonar_subscriber: Hub<RangeScan>,
    bumper_subscriber: Hub<RangeScan>,
    line_subscriber: Hub<LineScan>,
    light_left_subscriber: Hub<LightSample>,
    light_right_subscriber: Hub<LightSample>,

    // Configuration
    params: NavParams,

    // State
    tracing_line: bool,
    goal_reached: bool,
    bumper_contact: bool,
    cmd_linear: f64,
    cmd_angular: f64,
}

impl NavControllerNode {
    /// Create a controller on the default topics.
    pub fn new(params: NavParams) -> BeaconResult<Self> {
        Self::new_with_topics(
            params,
            "sonars",
            "bumpers",
            "line_scan",
            "light/left",
            "light/right",
            "cmd_vel",
            "heading_step",
        )
    }

    /// Create a controller with custom topic names.
    #[allow(clippy::too_many_arguments)]
    pub fn new_with_topics(
        params: NavParams,
        sonar_topic: &str,
        bumper_topic: &str,
        line_topic: &str,
        light_left_topic: &str,
        light_right_topic: &str,
        cmd_topic: &str,
        heading_topic: &str,
    ) -> BeaconResult<Self> {
        params.validate()?;

        Ok(Self {
            cmd_publisher: Hub::new(cmd_topic)?,
            heading_publisher: Hub::new(heading_topic)?,
            sonar_subscriber: Hub::new(sonar_topic)?,
            bumper_subscriber: Hub::new(bumper_topic)?,
            line_subscriber: Hub::new(line_topic)?,
            light_left_subscriber: Hub::new(light_left_topic)?,
            light_right_subscriber: Hub::new(light_right_topic)?,
            params,
            tracing_line: false,
            goal_reached: false,
            bumper_contact: false,
            cmd_linear: 0.0,
            cmd_angular: 0.0,
        })
    }

    /// Last commanded (rotational, translational) velocity pair.
    pub fn last_command(&self) -> (f64, f64) {
        (self.cmd_angular, self.cmd_linear)
    }

    /// Whether the latest tick considered the robot to be tracing a line.
    pub fn is_tracing_line(&self) -> bool {
        self.tracing_line
    }

    pub fn params(&self) -> &NavParams {
        &self.params
    }

    /// Drain a subscription, keeping only the freshest message. Readings
    /// are never cached across ticks; a topic that went quiet yields
    /// nothing rather than stale data.
    fn drain_latest<T: LogSummary + Send + 'static>(
        hub: &mut Hub<T>,
        mut ctx: Option<&mut NodeInfo>,
    ) -> Option<T> {
        let mut latest = None;
        while let Some(msg) = hub.recv(ctx.as_deref_mut()) {
            latest = Some(msg);
        }
        latest
    }

    fn observe_bumpers(&mut self, bumpers: &RangeScan, ctx: Option<&mut NodeInfo>) {
        let contact = bumpers.any_hit();
        if contact && !self.bumper_contact {
            if let Some(ctx) = ctx {
                ctx.log_warning("bumper contact reported");
            }
        }
        self.bumper_contact = contact;
    }

    fn publish_command(&self, ctx: Option<&mut NodeInfo>) {
        let _ = self
            .cmd_publisher
            .send(CmdVel::new(self.cmd_linear, self.cmd_angular), ctx);
    }
}

impl Node for NavControllerNode {
    fn name(&self) -> &'static str {
        "NavControllerNode"
    }

    fn init(&mut self, ctx: &mut NodeInfo) -> BeaconResult<()> {
        self.cmd_linear = CRUISE_SPEED;
        ctx.log_info("NavControllerNode initialized, cruising forward");
        self.publish_command(Some(ctx));
        Ok(())
    }

    fn tick(&mut self, mut ctx: Option<&mut NodeInfo>) {
        let sonars = Self::drain_latest(&mut self.sonar_subscriber, ctx.as_deref_mut());
        let bumpers = Self::drain_latest(&mut self.bumper_subscriber, ctx.as_deref_mut());
        let line = Self::drain_latest(&mut self.line_subscriber, ctx.as_deref_mut());
        let light_left = Self::drain_latest(&mut self.light_left_subscriber, ctx.as_deref_mut());
        let light_right = Self::drain_latest(&mut self.light_right_subscriber, ctx.as_deref_mut());

        if let Some(bumpers) = &bumpers {
            self.observe_bumpers(bumpers, ctx.as_deref_mut());
        }

        let (Some(sonars), Some(line), Some(light_left), Some(light_right)) =
            (sonars, line, light_left, light_right)
        else {
            if let Some(ctx) = ctx.as_deref_mut() {
                ctx.log_debug("incomplete sensor snapshot, skipping tick");
            }
            return;
        };

        if sonars.len() != self.params.sonar_count || line.len() != self.params.line_sensor_count {
            if let Some(ctx) = ctx.as_deref_mut() {
                ctx.log_error("sensor snapshot does not match the configured layout");
            }
            return;
        }

        // goal check on instantaneous lux
        let mean_lux = (light_left.lux + light_right.lux) / 2.0;
        if mean_lux >= self.params.goal_lux {
            self.cmd_linear = 0.0;
            if !self.goal_reached {
                self.goal_reached = true;
                if let Some(ctx) = ctx.as_deref_mut() {
                    ctx.log_info("goal luminance reached, stopping");
                }
            }
            self.publish_command(ctx);
            return;
        }
        if self.goal_reached {
            self.goal_reached = false;
            if let Some(ctx) = ctx.as_deref_mut() {
                ctx.log_info("goal luminance lost, resuming");
            }
        }

        // line following, falling back to light seeking
        let outcome = line_follow::evaluate(
            &line.hits,
            light_left.average_luminance,
            light_right.average_luminance,
            self.tracing_line,
        );
        self.tracing_line = outcome.tracing;
        match outcome.steering {
            Some(LineSteer::Turn(turn)) => self.cmd_angular = turn,
            Some(LineSteer::Snap(delta)) => {
                let _ = self
                    .heading_publisher
                    .send(HeadingStep::new(delta), ctx.as_deref_mut());
            }
            None => {}
        }
        if !self.tracing_line {
            self.cmd_angular = phototaxis::steer(
                light_left.average_luminance,
                light_right.average_luminance,
            );
        }

        // obstacle override
        let (lo, hi) = OBSTACLE_WINDOW;
        if sonars.any_hit()
            && sonars.min_measurement_in_window(lo, hi) <= self.params.obstacle_trigger
        {
            if light_right.lux > light_left.lux {
                let (angular, linear) = circumnavigate::command(
                    &sonars,
                    self.params.clockwise,
                    self.params.robot_radius,
                    &self.params,
                );
                self.cmd_angular = angular;
                self.cmd_linear = linear;
            } else {
                // the translational channel is forced back to cruise while
                // the rotational channel keeps the line-follow value
                self.cmd_linear = CRUISE_SPEED;
            }
        }

        self.publish_command(ctx);
    }
}
