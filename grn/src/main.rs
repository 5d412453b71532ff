mod app;
mod clap_app;

use crate::app::Perform;
use crate::clap_app::Cli;

fn main() {
    std::process::exit(match Cli::build().and_then(|app| app.run()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:?}", err);
            1
        }
    });
}
