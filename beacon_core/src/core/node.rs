use crate::error::BeaconResult;

/// Trait for providing lightweight logging summaries of message types
///
/// Large payloads should summarize to metadata only; small types can use
/// their Debug formatting.
pub trait LogSummary {
    /// Return a compact string representation suitable for logging
    fn log_summary(&self) -> String;
}

/// Context handed to node lifecycle hooks.
///
/// Carries identification, tick and message counters, and the color-coded
/// logging used across the workspace. The host owns one `NodeInfo` per node
/// and passes it back on every tick.
pub struct NodeInfo {
    name: String,
    enable_logging: bool,
    log_level: String,
    tick_count: u64,
    messages_sent: u64,
    messages_received: u64,
    warnings_count: u64,
    errors_count: u64,
}

impl NodeInfo {
    pub fn new(node_name: String, logging_enabled: bool) -> Self {
        Self {
            name: node_name,
            enable_logging: logging_enabled,
            log_level: "INFO".to_string(),
            tick_count: 0,
            messages_sent: 0,
            messages_received: 0,
            warnings_count: 0,
            errors_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the log level: "QUIET", "INFO", or "DEBUG".
    pub fn set_log_level(&mut self, level: &str) {
        self.log_level = level.to_string();
    }

    /// Called by the host at the start of each tick.
    pub fn begin_tick(&mut self) {
        self.tick_count += 1;
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn messages_sent(&self) -> u64 {
        self.messages_sent
    }

    pub fn messages_received(&self) -> u64 {
        self.messages_received
    }

    pub fn warnings_count(&self) -> u64 {
        self.warnings_count
    }

    pub fn errors_count(&self) -> u64 {
        self.errors_count
    }

    /// Record an outgoing message; called by `Hub::send`.
    pub fn log_pub_summary(&mut self, topic: &str, summary: &str) {
        if self.enable_logging && self.log_level == "DEBUG" {
            println!(
                "\x1b[33m{}\x1b[0m \x1b[1;32m--PUB-->\x1b[0m \x1b[35m'{}'\x1b[0m = {}",
                self.name, topic, summary
            );
        }
        self.messages_sent += 1;
    }

    /// Record an incoming message; called by `Hub::recv`.
    pub fn log_sub_summary(&mut self, topic: &str, summary: &str) {
        if self.enable_logging && self.log_level == "DEBUG" {
            println!(
                "\x1b[33m{}\x1b[0m \x1b[1;34m<--SUB--\x1b[0m \x1b[35m'{}'\x1b[0m = {}",
                self.name, topic, summary
            );
        }
        self.messages_received += 1;
    }

    pub fn log_info(&self, message: &str) {
        if self.enable_logging && (self.log_level == "INFO" || self.log_level == "DEBUG") {
            eprintln!(
                "\x1b[34m[INFO]\x1b[0m \x1b[33m[{}]\x1b[0m {}",
                self.name, message
            );
        }
    }

    pub fn log_warning(&mut self, message: &str) {
        if self.enable_logging {
            eprintln!(
                "\x1b[33m[WARN]\x1b[0m \x1b[33m[{}]\x1b[0m {}",
                self.name, message
            );
        }
        self.warnings_count += 1;
    }

    pub fn log_error(&mut self, message: &str) {
        if self.enable_logging {
            eprintln!(
                "\x1b[31m[ERROR]\x1b[0m \x1b[33m[{}]\x1b[0m {}",
                self.name, message
            );
        }
        self.errors_count += 1;
    }

    pub fn log_debug(&self, message: &str) {
        if self.enable_logging && self.log_level == "DEBUG" {
            eprintln!(
                "\x1b[90m[DEBUG]\x1b[0m \x1b[33m[{}]\x1b[0m {}",
                self.name, message
            );
        }
    }
}

/// Trait for beacon nodes.
///
/// The host calls `init` once before the first tick, `tick` once per control
/// cycle (strictly sequentially, never concurrently), and `shutdown` once at
/// teardown. A tick must run to completion without blocking.
pub trait Node: Send {
    /// Get the node's name (must be unique)
    fn name(&self) -> &'static str;

    /// Initialize the node (called once at startup)
    fn init(&mut self, ctx: &mut NodeInfo) -> BeaconResult<()> {
        ctx.log_info("Node initialized successfully");
        Ok(())
    }

    /// Main execution loop (called repeatedly)
    fn tick(&mut self, ctx: Option<&mut NodeInfo>);

    /// Shutdown the node (called once at cleanup)
    fn shutdown(&mut self, ctx: &mut NodeInfo) -> BeaconResult<()> {
        ctx.log_info("Node shutdown successfully");
        Ok(())
    }
}

// LogSummary implementations for primitive types
impl LogSummary for f32 {
    fn log_summary(&self) -> String {
        format!("{:.3}", self)
    }
}

impl LogSummary for f64 {
    fn log_summary(&self) -> String {
        format!("{:.3}", self)
    }
}

impl LogSummary for u64 {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl LogSummary for usize {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl LogSummary for bool {
    fn log_summary(&self) -> String {
        self.to_string()
    }
}

impl LogSummary for String {
    fn log_summary(&self) -> String {
        self.clone()
    }
}
