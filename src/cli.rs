use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use crate::config::{self, ApiEndpoints, AppConfig};
use crate::corrections::{points, project_key, release, EntityProfile, Session};
use crate::prompt::{ask_text, Prompt, StdinPrompt};
use crate::transport::http::HttpTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Procedure {
    Release,
    ProjectKey,
    Points,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fix(Procedure, &'static EntityProfile),
    Help,
}

/// Parse `align-fix <command> <features|stories>`.
pub fn parse_args(args: &[String]) -> Result<Command> {
    let Some(name) = args.first() else {
        return Ok(Command::Help);
    };

    let procedure = match name.as_str() {
        "help" | "-h" | "--help" => return Ok(Command::Help),
        "fix-release" => Procedure::Release,
        "fix-project" => Procedure::ProjectKey,
        "fix-points" => Procedure::Points,
        other => bail!("Unknown command: {other}\n\nRun `align-fix help` for usage."),
    };

    let entity = match args.get(1) {
        Some(entity) => entity,
        None => bail!("Missing item type for {name}: expected features or stories"),
    };
    let profile = EntityProfile::for_name(entity)
        .with_context(|| format!("Unsupported item type: {entity} (expected features or stories)"))?;

    if args.len() > 2 {
        bail!("Unexpected arguments after {name} {entity}: {}", args[2..].join(" "));
    }

    Ok(Command::Fix(procedure, profile))
}

pub async fn run(command: Command) -> Result<()> {
    let (procedure, profile) = match command {
        Command::Help => {
            print_help();
            return Ok(());
        }
        Command::Fix(procedure, profile) => (procedure, profile),
    };

    let config = config::load_config()?;
    let mut prompt = StdinPrompt;

    if config.credentials.token.is_empty() {
        bail!(
            "No API token configured. Add [credentials] token to {}",
            config::data_dir().join("config.toml").display()
        );
    }

    let instance = resolve_instance(&config, &mut prompt)?;
    let endpoints = ApiEndpoints::from_instance(&instance)?;
    println!("{} {}", endpoints.api, endpoints.api_v1);

    let transport = HttpTransport::new(&config.credentials, config.verify_tls)?;
    let session = Session::new(&transport, &endpoints, config.batch, config.max_items);

    match session.reader.platform_version().await {
        Ok(Some(version)) => {
            println!("Jira Align version: {version}");
            info!(%version, "connected");
        }
        Ok(None) => warn!("About page did not report a version"),
        Err(e) => warn!("Could not read platform version: {e}"),
    }

    match procedure {
        Procedure::Release => {
            release::run(&session, profile, &mut prompt).await?;
        }
        Procedure::ProjectKey => {
            project_key::run(&session, profile, &mut prompt).await?;
        }
        Procedure::Points => {
            points::run(&session, profile, &mut prompt).await?;
        }
    }

    Ok(())
}

/// Use the configured instance, or ask for one until the user confirms it.
pub fn resolve_instance(config: &AppConfig, prompt: &mut dyn Prompt) -> Result<String> {
    if let Some(url) = &config.instance_url {
        return Ok(url.clone());
    }

    println!("Instance URL is normally something like:  https://foo.jiraalign.com");
    loop {
        let url = ask_text(
            prompt,
            "Enter the url for your instance, e.g. https://foo.jiraalign.com : ",
        )?;
        let check = prompt.ask(&format!(
            "Is this your correct instance you want to work with?  {url}\n"
        ))?;
        if !check.trim().eq_ignore_ascii_case("n") {
            return Ok(url);
        }
    }
}

pub fn print_help() {
    println!("align-fix — batch corrections for Jira Align work items\n");
    println!("USAGE:");
    println!("  align-fix fix-release <features|stories>  Move accepted items from the Unassigned Backlog into a PI");
    println!("  align-fix fix-project <features|stories>  Re-create an item under the correct Jira project key");
    println!("  align-fix fix-points  <features|stories>  Snap off-scale effort points to allowed values");
    println!("  align-fix help                            Show this message");
    println!();
    println!("CONFIG:");
    println!("  {}", config::data_dir().join("config.toml").display());
    println!();
    println!("  instance_url = \"https://foo.jiraalign.com\"");
    println!("  batch = true");
    println!("  [credentials]");
    println!("  token = \"...\"");
}
