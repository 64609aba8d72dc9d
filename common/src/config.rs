use serde::Deserialize;
use std::sync::LazyLock;

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".into());
    let config_file = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to open config file `{path}`: {e}"));
    serde_yaml::from_str(&config_file).expect("failed to parse config file")
});

#[derive(Deserialize)]
pub struct Config {
    pub api: Api,
    pub postgres: Postgres,
    pub loki: Option<Loki>,
}

#[derive(Deserialize)]
pub struct Api {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct Postgres {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub db_name: String,
}

#[derive(Deserialize)]
pub struct Loki {
    pub url: String,
}
