mod config;
mod csv;
mod export;
mod feed;
mod gamelog;
mod league;
mod ratio;
mod roster;
mod routes;
mod teams;

use reqwest::Client;
use rocket::fairing::AdHoc;
use rocket::figment::Figment;
use rocket::{catchers, launch, routes, Build, Rocket};

lazy_static::lazy_static! {
    static ref CLIENT: Client = Client::builder()
        .user_agent(concat!("sideline/", env!("CARGO_PKG_VERSION")))
        .gzip(true)
        .build()
        .unwrap_or_default();
}

fn build(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .mount("/", routes![routes::index])
        .mount(
            "/api/v1",
            routes![
                routes::player::stats_vs,
                routes::export::games_csv,
                routes::roster::team_roster,
            ],
        )
        .register("/", catchers![routes::unauthorized, routes::not_found])
        .attach(AdHoc::config::<config::Config>())
        .attach(routes::cors())
}

#[launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();
    build(rocket::Config::figment())
}
