use clap::Parser;
use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use lib::seeder::api::HttpBackend;
use lib::seeder::helpers::get_fixtures;
use lib::seeder::models::{Args, Config};
use lib::seeder::run_tool::run;
use log::info;

#[tokio::main]
async fn main() {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let http_client = reqwest::Client::new();
    let config: Config = Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("SEED_"))
        .extract()
        .unwrap();
    info!(
        "Read config.json from {}",
        std::path::absolute(&args.config_json_path)
            .unwrap()
            .display()
    );
    info!(
        "Seeding school year {} at {}",
        config.school_year, config.base_url
    );

    /* Build the seed set */
    let seed = get_fixtures(&args, &config).unwrap();

    /* Push everything to the backend */
    let backend = HttpBackend::new(http_client, config);
    run(&backend, &seed).await.unwrap();
}
