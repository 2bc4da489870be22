//! goalbook main entrypoint.

use goalbook::run;
use goalbook::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
