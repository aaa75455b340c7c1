//! netbuddy main entrypoint.

use netbuddy::run;
use netbuddy::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        if e.is_fatal() {
            eprintln!("The roster sheet must be fixed before check-ins can continue.");
        }
        std::process::exit(1);
    }
}
