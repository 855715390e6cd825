// Adapters layer: concrete implementations for external systems (the device's
// iControl REST API and the anonymous usage endpoint).

pub mod icontrol;
pub mod telemetry;
