use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vehicle in the fixed catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    pub model: String,
    pub year: u16,
    pub vin: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryDiagnostics {
    pub level: f64,
    pub health: f64,
    pub voltage: f64,
    pub temperature: f64,
    pub charging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotorDiagnostics {
    pub temperature: f64,
    pub rpm: u32,
    pub power_output: f64,
    pub efficiency: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TireDiagnostics {
    pub front_left: f64,
    pub front_right: f64,
    pub rear_left: f64,
    pub rear_right: f64,
    pub temperature_avg: f64,
}

/// GPS fix quality; serializes to lowercase JSON (e.g. "excellent").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStrength {
    Excellent,
    Good,
    Fair,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpsDiagnostics {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub speed: f64,
    pub satellites: u32,
    pub signal_strength: SignalStrength,
}

/// One point-in-time synthetic telemetry reading for a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsSnapshot {
    pub vehicle_id: String,
    pub timestamp: DateTime<Utc>,
    pub battery: BatteryDiagnostics,
    pub motor: MotorDiagnostics,
    pub tires: TireDiagnostics,
    pub gps: GpsDiagnostics,
    pub speed: f64,
    pub range: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemVerdict {
    Ok,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Excellent,
    Good,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatuses {
    pub battery: SystemVerdict,
    pub motor: SystemVerdict,
    pub tires: SystemVerdict,
    pub gps: SystemVerdict,
}

/// Health summary derived from a snapshot. Never stored; recomputed per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSummary {
    pub vehicle_id: String,
    pub overall_status: OverallStatus,
    pub systems: SystemStatuses,
    pub timestamp: DateTime<Utc>,
}
