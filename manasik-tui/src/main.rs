mod app;
mod data;
mod error;
mod msg;
mod nav;
mod paths;
mod settings;
mod theme;
mod views;

use std::fs::{self, File};

use simplelog::{Config, LevelFilter, WriteLogger};

use app::App;
use settings::Settings;

fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }
}

#[tokio::main]
async fn main() {
    init_logging();
    log::info!("manasik portal starting");

    let settings = Settings::load();
    if let Err(e) = App::new(settings).run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
