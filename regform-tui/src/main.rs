use std::fs::File;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use regform_tui::App;

fn main() {
    // Logging is best-effort; the form runs unlogged if the file can't be created
    if let Ok(log_file) = File::create("regform-tui.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let result = App::new().and_then(|mut app| app.run());
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
