#[macro_use]
extern crate rocket;

mod ai;
mod blog;
mod config;
mod render;
mod routes;
mod seo;

mod tests;

use rocket::response::content::RawHtml;

use ai::AiClient;
use config::AiConfig;

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[launch]
fn rocket() -> _ {
    // .env is optional; real deployments set the variables directly
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AiConfig::from_env();
    if config.api_key.is_empty() {
        log::warn!("GROQ_API_KEY is not set; generation will fail with an auth error");
    }

    let client = AiClient::new(config).expect("Failed to build HTTP client");

    rocket::build()
        .manage(client)
        .mount("/", routes::public::routes())
        .mount("/api", routes::api::routes())
        .register("/", catchers![not_found, server_error])
}
