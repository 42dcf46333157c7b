extern crate actix_web;
extern crate chrono;
extern crate diesel;
extern crate env_logger;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate pretty_assertions;
#[macro_use]
extern crate serde_json;
extern crate taskboard;
extern crate uuid;
