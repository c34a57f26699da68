//! Colored status lines for the console.

use crossterm::style::Stylize;
use serde_json::{Map, Value};

/// Print a success line in green.
pub fn niceprint(text: &str) {
    println!("{}", text.green());
}

/// Print a failure line in red.
pub fn badprint(text: &str) {
    println!("{}", text.red());
}

const MOTION_REPORT_FIELDS: [(&str, &str); 4] = [
    ("Live position", "live_position"),
    ("Live velocity", "live_velocity"),
    ("Live extruder velocity", "live_extruder_velocity"),
    ("Steppers", "steppers"),
];

/// Format the interesting fields of a motion report, one per line.
pub fn format_motion_report(report: &Map<String, Value>) -> Vec<String> {
    MOTION_REPORT_FIELDS
        .iter()
        .map(|(label, key)| match report.get(*key) {
            Some(value) => format!("{}: {}", label, value),
            None => format!("{}: unavailable", label),
        })
        .collect()
}

pub fn print_motion_report(report: &Map<String, Value>) {
    for line in format_motion_report(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn motion_report_lines() {
        let report = json!({
            "live_position": [1.0, 2.5, 0.0, 0.0],
            "live_velocity": 0.0,
            "steppers": ["stepper_x", "stepper_y"]
        });
        let lines = format_motion_report(report.as_object().unwrap());
        assert_eq!(
            lines,
            vec![
                "Live position: [1.0,2.5,0.0,0.0]",
                "Live velocity: 0.0",
                "Live extruder velocity: unavailable",
                "Steppers: [\"stepper_x\",\"stepper_y\"]",
            ]
        );
    }
}
