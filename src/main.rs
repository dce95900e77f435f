use std::io::BufRead;

use anyhow::{bail, Context};
use clap::Parser;

use bullion_admin::api::ApiClient;
use bullion_admin::args::{execute, ApiCommand, Cli, Command, LoginArgs};
use bullion_admin::config::{Config, ConfigStore, SessionStore};
use bullion_admin::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)?;
    config.apply_env()?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.trim_end_matches('/').to_string();
    }
    config.validate()?;

    let verbosity = cli.verbose;
    match cli.into_command() {
        Command::Console => {
            logging::init_console(&config.logging, verbosity);
            let Some(session) = SessionStore::default_location().load()? else {
                bail!("Not signed in. Run `bullion-admin login --email <EMAIL>` first.");
            };
            bullion_admin::ui::run(ConfigStore::new(config, path), session)
        }
        Command::Login(args) => {
            logging::init_cli(&config.logging, verbosity);
            login(&config, args)
        }
        Command::Logout => {
            logging::init_cli(&config.logging, verbosity);
            logout(&config)
        }
        Command::Api(command) => {
            logging::init_cli(&config.logging, verbosity);
            run_api(&config, command)
        }
    }
}

fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
}

fn read_password() -> anyhow::Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn login(config: &Config, args: LoginArgs) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => read_password()?,
    };
    if args.email.trim().is_empty() || password.is_empty() {
        bail!("Email and password are required");
    }

    let api = ApiClient::new(&config.api, None)?;
    let session = runtime()?.block_on(api.auth().sign_in(args.email.trim(), &password))?;
    let store = SessionStore::default_location();
    store.save(&session)?;
    tracing::info!(email = %session.email, path = %store.path().display(), "signed in");
    println!("Signed in as {}", session.email);
    Ok(())
}

fn logout(config: &Config) -> anyhow::Result<()> {
    let store = SessionStore::default_location();
    let Some(session) = store.load()? else {
        println!("Not signed in");
        return Ok(());
    };

    let api = ApiClient::new(&config.api, Some(session.access_token))?;
    if let Err(err) = runtime()?.block_on(api.auth().sign_out()) {
        tracing::warn!(error = %err, "sign-out request failed; clearing local session anyway");
    }
    store.clear()?;
    println!("Signed out");
    Ok(())
}

fn run_api(config: &Config, command: ApiCommand) -> anyhow::Result<()> {
    let token = SessionStore::default_location()
        .load()?
        .map(|session| session.access_token);
    if token.is_none() {
        tracing::warn!("no stored session; requests will be unauthenticated");
    }
    let api = ApiClient::new(&config.api, token)?;
    let output = runtime()?.block_on(execute(&api, command))?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
