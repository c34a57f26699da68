//! G-code command builders.
//!
//! These only format command text. Nothing here parses or validates G-code; the firmware is
//! the judge of what a command means.

/// Axes homed when no explicit set is given.
pub const HOME_ALL_AXES: &str = "XYZ";

/// Feedrate in mm/min used for moves that don't specify one.
pub const DEFAULT_FEEDRATE: u32 = 3000;

/// Switch to absolute positioning.
pub const SET_ABSOLUTE_POSITIONING: &str = "G90";

/// [ToolheadMove] describes a single `G1` move. Coordinates left as `None` are omitted from
/// the command, so the firmware keeps the current position on that axis.
///
/// Coordinates are written with `f64` formatting and not checked, so they must be finite and of
/// printer scale: NaN renders as `NaN` and huge values render as long digit strings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ToolheadMove {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub feedrate: u32,
}

impl Default for ToolheadMove {
    fn default() -> Self {
        ToolheadMove {
            x: None,
            y: None,
            z: None,
            feedrate: DEFAULT_FEEDRATE,
        }
    }
}

impl ToolheadMove {
    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    pub fn feedrate(mut self, feedrate: u32) -> Self {
        self.feedrate = feedrate;
        self
    }
}

/// Build a `G28` command homing each character of `axes`, e.g. "XY" -> `G28 X Y`.
/// An empty axis set yields a bare `G28`, which homes everything.
pub fn home_command(axes: &str) -> String {
    let mut gcode = String::from("G28");
    for axis in axes.chars() {
        gcode.push(' ');
        gcode.push(axis);
    }
    gcode
}

/// Build a `G1` command for the given move. The feedrate always comes first.
pub fn move_command(mv: &ToolheadMove) -> String {
    let mut gcode = format!("G1 F{}", mv.feedrate);
    for (letter, coord) in [('X', mv.x), ('Y', mv.y), ('Z', mv.z)] {
        if let Some(value) = coord {
            gcode.push_str(&format!(" {}{}", letter, value));
        }
    }
    gcode
}
