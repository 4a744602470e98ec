//! scheduletools main entrypoint.

use scheduletools::run;
use scheduletools::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
