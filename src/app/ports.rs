//! Port traits: the boundary between the monitoring tasks and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ task (domain)
//! ```
//!
//! Actuator outputs are plain `embedded_hal::digital::OutputPin`s, so
//! they need no port of their own.  The gas sensor has no `embedded-hal`
//! trait to lean on and gets one here.

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the sampler calls this once per cycle.
pub trait GasSensorPort {
    /// Latest analog level, normalized to `[0, 1]`.
    ///
    /// There is no failure path: whatever the hardware reports is
    /// returned verbatim, including out-of-range values.
    fn read_level(&mut self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// Tasks emit structured [`AppEvent`]s through this port.  Adapters
/// decide where they go (serial log, test recorder, ...).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
