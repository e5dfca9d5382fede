use chrono::Utc;
use rand::Rng;

use crate::model::{
    BatteryDiagnostics, DiagnosticsSnapshot, GpsDiagnostics, MotorDiagnostics, OverallStatus,
    SignalStrength, StatusSummary, SystemStatuses, SystemVerdict, TireDiagnostics,
};

/// Miles of range per percent of battery level.
const RANGE_PER_LEVEL: f64 = 3.5;

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round6(v: f64) -> f64 {
    (v * 1_000_000.0).round() / 1_000_000.0
}

/// Generates a synthetic diagnostics snapshot for a vehicle.
///
/// Each bounded field is drawn uniformly from its closed interval. The caller
/// is responsible for resolving `vehicle_id` against the registry first; this
/// is a pure data generator over the supplied random source.
pub fn generate(rng: &mut impl Rng, vehicle_id: &str) -> DiagnosticsSnapshot {
    // Drawn first: charging and range both depend on it.
    let battery_level = round1(rng.gen_range(20.0..=100.0));

    DiagnosticsSnapshot {
        vehicle_id: vehicle_id.to_string(),
        timestamp: Utc::now(),
        battery: BatteryDiagnostics {
            level: battery_level,
            health: round1(rng.gen_range(85.0..=100.0)),
            voltage: round1(rng.gen_range(350.0..=410.0)),
            temperature: round1(rng.gen_range(20.0..=45.0)),
            charging: battery_level < 30.0 || rng.gen_bool(0.5),
        },
        motor: MotorDiagnostics {
            temperature: round1(rng.gen_range(40.0..=95.0)),
            rpm: rng.gen_range(0..=18000),
            power_output: round1(rng.gen_range(0.0..=1020.0)),
            efficiency: round1(rng.gen_range(88.0..=97.0)),
        },
        tires: TireDiagnostics {
            front_left: round1(rng.gen_range(32.0..=38.0)),
            front_right: round1(rng.gen_range(32.0..=38.0)),
            rear_left: round1(rng.gen_range(32.0..=38.0)),
            rear_right: round1(rng.gen_range(32.0..=38.0)),
            temperature_avg: round1(rng.gen_range(25.0..=45.0)),
        },
        gps: GpsDiagnostics {
            latitude: round6(rng.gen_range(37.0..=38.0)),
            longitude: round6(rng.gen_range(-122.5..=-121.5)),
            altitude: round1(rng.gen_range(0.0..=500.0)),
            speed: round1(rng.gen_range(0.0..=120.0)),
            satellites: rng.gen_range(8..=15),
            signal_strength: match rng.gen_range(0..3) {
                0 => SignalStrength::Excellent,
                1 => SignalStrength::Good,
                _ => SignalStrength::Fair,
            },
        },
        // Sampled independently of gps.speed.
        speed: round1(rng.gen_range(0.0..=120.0)),
        range: round1(battery_level * RANGE_PER_LEVEL),
    }
}

/// Classifies a snapshot into per-system verdicts and an overall status.
///
/// Pure function of the snapshot; never re-generates.
pub fn derive_status(snapshot: &DiagnosticsSnapshot) -> StatusSummary {
    let battery_ok = snapshot.battery.level > 20.0 && snapshot.battery.health > 80.0;
    let motor_ok = snapshot.motor.temperature < 90.0;
    let tires_ok = [
        snapshot.tires.front_left,
        snapshot.tires.front_right,
        snapshot.tires.rear_left,
        snapshot.tires.rear_right,
    ]
    .iter()
    .all(|p| (30.0..=40.0).contains(p));
    // Threshold is deliberately looser than the generator's [8,15] range.
    let gps_ok = snapshot.gps.satellites >= 4;

    let ok_count = [battery_ok, motor_ok, tires_ok, gps_ok]
        .iter()
        .filter(|ok| **ok)
        .count();
    let overall_status = match ok_count {
        4 => OverallStatus::Excellent,
        3 => OverallStatus::Good,
        _ => OverallStatus::Warning,
    };

    let verdict = |ok: bool| {
        if ok {
            SystemVerdict::Ok
        } else {
            SystemVerdict::Warning
        }
    };

    StatusSummary {
        vehicle_id: snapshot.vehicle_id.clone(),
        overall_status,
        systems: SystemStatuses {
            battery: verdict(battery_ok),
            motor: verdict(motor_ok),
            tires: verdict(tires_ok),
            gps: verdict(gps_ok),
        },
        timestamp: Utc::now(),
    }
}
