extern crate actix;
extern crate actix_web;
extern crate env_logger;
extern crate taskboard;

use actix::prelude::*;
use actix_web::server;

use std::env;

fn main() {
    env_logger::init();
    taskboard::settings::init().expect("Failed to initialize settings");

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let sys = System::new("taskboard");

    let app = move || taskboard::build_app(database_url.clone());
    server::new(app).bind("127.0.0.1:8080").unwrap().start();

    let _ = sys.run();
}
