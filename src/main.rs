//! timestudy main entrypoint.

use timestudy::run;
use timestudy::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(&e);
        std::process::exit(1);
    }
}
