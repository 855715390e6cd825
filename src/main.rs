use bigip_http_profile::config::cli::{Cli, Command};
use bigip_http_profile::utils::{logger, validation::Validate};
use bigip_http_profile::{
    DeviceConfig, HttpProfileResource, IControlClient, ProfileDeclaration, ResourceState,
    TeemReporter,
};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting bigip-http-profile CLI");

    let mut device = DeviceConfig::from_env()?;
    if let Some(host) = cli.host {
        device.host = host;
    }
    if let Err(e) = device.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = IControlClient::new(
        &device.host,
        &device.username,
        &device.password,
        device.validate_certs,
    )?;
    let telemetry = TeemReporter::new(!device.disable_telemetry);
    let resource = HttpProfileResource::new(client, telemetry);

    match cli.command {
        Command::Create { declaration } => {
            let config = ProfileDeclaration::from_file(declaration)?.into_config();
            let mut state = ResourceState::new(config);
            resource.create(&mut state).await?;
            println!("✅ Created {}", state.id.as_deref().unwrap_or_default());
        }
        Command::Read { name } => {
            let mut state = ResourceState::imported(&name);
            resource.read(&mut state).await?;
            if state.id.is_none() {
                println!("Profile {} no longer exists on the device", name);
            } else {
                println!("{}", serde_json::to_string_pretty(&state.attrs)?);
            }
        }
        Command::Update { name, declaration } => {
            let config = ProfileDeclaration::from_file(declaration)?.into_config();
            let mut state = ResourceState::new(config);
            state.id = Some(name);
            resource.update(&mut state).await?;
            println!("✅ Updated {}", state.id.as_deref().unwrap_or_default());
        }
        Command::Delete { name } => {
            let mut state = ResourceState::imported(&name);
            resource.delete(&mut state).await?;
            println!("✅ Deleted {}", name);
        }
        Command::Import { name } => {
            let state = resource.import(&name).await?;
            if state.id.is_none() {
                eprintln!("❌ Profile {} not found on the device", name);
                std::process::exit(1);
            }
            println!("{}", serde_json::to_string_pretty(&state.attrs)?);
        }
    }

    Ok(())
}
