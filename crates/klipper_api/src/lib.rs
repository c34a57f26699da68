/*
    klipper_api Copyright 2025 The klipper_api Authors

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.
*/

pub mod console;
pub mod gcode;

use serde_json::{json, Map, Value};

// Re-export the client module for convenience
pub use moonraker_client;
use moonraker_client::{Endpoint, MoonrakerClient, MoonrakerError, PROBE_TIMEOUT};

pub use console::{badprint, niceprint, print_motion_report};
pub use gcode::{ToolheadMove, DEFAULT_FEEDRATE, HOME_ALL_AXES, SET_ABSOLUTE_POSITIONING};

/// A JSON object as returned by Moonraker.
pub type JsonMap = Map<String, Value>;

/// Walk `path` through nested objects and return the object found at the end.
/// Any missing level, or a non-object at the end, yields an empty map.
fn object_at(value: &Value, path: &[&str]) -> JsonMap {
    let mut current = value;
    for key in path {
        match current.get(*key) {
            Some(next) => current = next,
            None => return JsonMap::new(),
        }
    }
    current.as_object().cloned().unwrap_or_default()
}

/// A [MoonrakerConnector] is a verified connection to a Moonraker server.
///
/// Construction performs a liveness check, so holding a connector means the server answered
/// at least once. After that every operation is a single request: failures are reported on
/// the console and turned into `false` or an empty map, never into an error.
#[derive(Debug)]
pub struct MoonrakerConnector {
    client: MoonrakerClient,
}

impl MoonrakerConnector {
    /// Connect to the Moonraker server at `http://{host}:{port}` and verify that it answers.
    pub fn new(host: &str, port: u16) -> Result<MoonrakerConnector, MoonrakerError> {
        let connector = MoonrakerConnector {
            client: MoonrakerClient::new(host, port)?,
        };
        connector.verify_connection()?;
        Ok(connector)
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Query `/server/info` with a short timeout and report the outcome on the console.
    pub fn verify_connection(&self) -> Result<(), MoonrakerError> {
        match self.client.probe(Endpoint::ServerInfo, PROBE_TIMEOUT) {
            Ok(_) => {
                niceprint(&format!(
                    "Connected to Klipper/Moonraker at {}",
                    self.base_url()
                ));
                Ok(())
            }
            Err(e) => {
                log::warn!("verify_connection: {}", e);
                badprint(&format!(
                    "Failed to connect to Moonraker at {}",
                    self.base_url()
                ));
                badprint(&format!("  Error: {}", e));
                badprint("  Make sure Moonraker is running and accessible");
                Err(e)
            }
        }
    }

    /// Fetch the live motion report: position, velocities and stepper names.
    ///
    /// Returns an empty map on failure. An empty map is also what a server without motion
    /// reporting produces, and the two cases are not told apart.
    pub fn get_motion_report(&self) -> JsonMap {
        match self.client.get(Endpoint::MotionReportQuery) {
            Ok(data) => object_at(&data, &["result", "status", "motion_report"]),
            Err(e) => {
                log::warn!("get_motion_report: {}", e);
                badprint(&format!("Error getting motion report: {}", e));
                JsonMap::new()
            }
        }
    }

    /// Run a G-code script on the printer. Returns whether the server accepted it.
    pub fn execute_gcode(&self, gcode: &str) -> bool {
        log::debug!("execute_gcode: {}", gcode);
        match self
            .client
            .post_json(Endpoint::GcodeScript, &json!({ "script": gcode }))
        {
            Ok(_) => true,
            Err(e) => {
                log::warn!("execute_gcode: {:?} failed: {}", gcode, e);
                badprint(&format!("Error executing G-code: {}", e));
                false
            }
        }
    }

    /// Home the given axes, e.g. "XY". See [HOME_ALL_AXES].
    pub fn home_axes(&self, axes: &str) -> bool {
        let gcode = gcode::home_command(axes);
        println!("Homing axes: {}", axes);
        self.execute_gcode(&gcode)
    }

    /// Move the toolhead. Axes left unset in `mv` keep their current position.
    pub fn move_toolhead(&self, mv: &ToolheadMove) -> bool {
        let gcode = gcode::move_command(mv);
        println!("Moving toolhead with: {}", gcode);
        self.execute_gcode(&gcode)
    }

    /// Trigger an emergency stop. The printer must be restarted afterwards.
    pub fn emergency_stop(&self) -> bool {
        match self.client.post_empty(Endpoint::EmergencyStop) {
            Ok(_) => {
                niceprint("Emergency stop triggered!");
                true
            }
            Err(e) => {
                log::warn!("emergency_stop: {}", e);
                badprint(&format!("Error triggering emergency stop: {}", e));
                false
            }
        }
    }

    /// Fetch host system information. Returns an empty map on failure.
    pub fn get_system_info(&self) -> JsonMap {
        match self.client.get(Endpoint::SystemInfo) {
            Ok(data) => object_at(&data, &["result", "system_info"]),
            Err(e) => {
                log::warn!("get_system_info: {}", e);
                badprint(&format!("Error getting system info: {}", e));
                JsonMap::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_at_follows_nested_keys() {
        let data = json!({"result": {"status": {"motion_report": {"live_velocity": 1.5}}}});
        let report = object_at(&data, &["result", "status", "motion_report"]);
        assert_eq!(report.get("live_velocity"), Some(&json!(1.5)));
    }

    #[test]
    fn object_at_defaults_to_empty() {
        assert!(object_at(&json!({}), &["result", "system_info"]).is_empty());
        assert!(object_at(&Value::Null, &["result"]).is_empty());
        assert!(object_at(&json!({"result": "ok"}), &["result"]).is_empty());
        assert!(object_at(&json!({"result": {"status": 3}}), &["result", "status", "x"]).is_empty());
    }
}
