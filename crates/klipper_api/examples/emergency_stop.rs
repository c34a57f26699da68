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
use klipper_api::moonraker_client::{DEFAULT_HOST, DEFAULT_PORT};
use klipper_api::*;

fn main() {
    env_logger::init();

    let host = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_HOST.to_string());

    let klipper = match MoonrakerConnector::new(&host, DEFAULT_PORT) {
        Ok(connector) => connector,
        Err(e) => {
            eprintln!("Error connecting to Moonraker: {e}");
            std::process::exit(1);
        }
    };

    if !klipper.emergency_stop() {
        std::process::exit(1);
    }
}
