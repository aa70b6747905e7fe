//! rWorklog main entrypoint.

use rworklog::run;
use rworklog::ui::messages::{error, warning};

fn main() {
    if let Err(e) = run() {
        if e.is_validation() {
            warning(&e);
        } else {
            error(format!("Error: {}", e));
        }
        std::process::exit(1);
    }
}
