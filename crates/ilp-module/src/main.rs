//! ilp-module - Entry Point
//!
//! Inspects the modules the framework can find and what it would build.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `ilp-module list` | Every registered module and where it lives |
//! | `ilp-module resolve <role>` | Name and options that would be used |
//! | `ilp-module check <role>` | Build the module and validate it |

// Force-link ilp-module-providers to ensure linkme registrations are included
extern crate ilp_module_providers;

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use ilp_module::{
    ConfigLoader, ModuleLoader, ModuleOptions, ModuleServices, RoleType, bootstrap,
};
use ilp_module_infrastructure::logging::init_logging;

/// Command line interface for ilp-module
#[derive(Parser, Debug)]
#[command(name = "ilp-module")]
#[command(about = "Resolve, locate and check pluggable ILP modules")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Application module root (overridden by ILP_MODULE_ROOT)
    #[arg(long)]
    pub module_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered modules
    List {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the module name and options a role resolves to
    Resolve(ModuleArgs),
    /// Build a module and validate it against its role
    Check(ModuleArgs),
}

#[derive(Args, Debug)]
pub struct ModuleArgs {
    /// Role type, e.g. store or plugin
    pub role: String,

    /// Module name
    #[arg(long)]
    pub name: Option<String>,

    /// Constructor options as a JSON object
    #[arg(long)]
    pub options: Option<String>,
}

impl ModuleArgs {
    fn role(&self) -> RoleType {
        RoleType::from(self.role.clone())
    }

    fn options(&self) -> anyhow::Result<Option<ModuleOptions>> {
        self.options
            .as_deref()
            .map(|raw| ModuleOptions::from_json(raw).context("--options must be a JSON object"))
            .transpose()
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config_loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        config_loader = config_loader.with_config_path(path);
    }
    let mut config = config_loader.load().context("Failed to load configuration")?;
    if let Some(root) = cli.module_root {
        config.module_root = Some(root);
    }

    init_logging(config.logging.clone())?;
    let modules = bootstrap(&config).context("Failed to initialise the module loader")?;

    match cli.command {
        Command::List { json } => list(&modules, json),
        Command::Resolve(args) => resolve(&modules, &args),
        Command::Check(args) => check(&modules, &args),
    }
}

fn list(modules: &ModuleLoader, json: bool) -> anyhow::Result<()> {
    let listing = modules.registry().list();
    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }
    for module in listing {
        println!(
            "{:<8} {:<20} {:<50} {}",
            module.role, module.name, module.location, module.description
        );
    }
    Ok(())
}

fn resolve(modules: &ModuleLoader, args: &ModuleArgs) -> anyhow::Result<()> {
    let (name, options) =
        modules.resolve_name_and_options(&args.role(), args.name.as_deref(), args.options()?)?;
    println!("{name}");
    println!("{}", serde_json::to_string_pretty(options.as_map())?);
    Ok(())
}

fn check(modules: &ModuleLoader, args: &ModuleArgs) -> anyhow::Result<()> {
    let role = args.role();
    // Logger modules get no services; everything else gets a logger and an
    // account lookup that knows no accounts, so backends can be built.
    let services = if role == RoleType::LOGGER {
        None
    } else {
        let log = modules.create_logger(&format!("check-{role}"))?;
        Some(ModuleServices::new(log).with_account_info(|_| None))
    };

    let instance = modules.create_module(&role, args.name.as_deref(), args.options()?, services)?;
    if !modules.validate_instance(&role, &instance) {
        bail!("{} module is not a valid {role}", instance.kind());
    }
    println!("ok: {} instance is a valid {role}", instance.kind());
    Ok(())
}
