use anyhow::Context;
use clap::Parser;
use living_dex::config::cli::Command;
use living_dex::core::ConfigProvider;
use living_dex::utils::error::ErrorCategory;
use living_dex::utils::{logger, validation::Validate};
use living_dex::{
    CliConfig, ExportFormat, LivingDex, LivingDexError, LocalStorage, Query, Settings, TomlConfig,
};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match cli.config.as_deref() {
        Some(path) => {
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?;
            if let Err(e) = config.validate() {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
            Some(config)
        }
        None => None,
    };

    let settings = Settings::resolve(
        file_config.as_ref(),
        cli.db_dir.clone(),
        cli.verbose,
        cli.log_json,
    );
    if settings.log_json {
        logger::init_json_logger(&settings.log_level);
    } else {
        logger::init_cli_logger(&settings.log_level);
    }
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let app = LivingDex::new(LocalStorage::new(settings.db_dir()));

    if let Err(e) = run(&app, &settings, cli.command) {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.category() {
            ErrorCategory::Lookup => 2,
            ErrorCategory::Data => 3,
            ErrorCategory::Configuration => 1,
            ErrorCategory::System => 4,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn run(app: &LivingDex<LocalStorage>, settings: &Settings, command: Command) -> Result<(), LivingDexError> {
    match command {
        Command::List => {
            let listing = app.list()?;
            if listing.is_empty() {
                println!("No pokedexes found under {}", app.store().pokedex_dir().display());
            } else {
                print!("{}", listing);
            }
        }
        Command::Locate(args) => match (args.number, args.name) {
            (_, Some(name)) => println!("{}", app.locate_name(&args.dex, &name, settings.alternatives)?),
            (Some(number), None) => {
                let outcome = app.locate(&args.dex, Query::Number(number))?;
                println!("{}", living_dex::app::display::describe(&outcome));
            }
            (None, None) => {}
        },
        Command::At(args) => {
            let outcome = app.locate(
                &args.dex,
                Query::Coordinates {
                    box_number: args.box_number,
                    row: args.row,
                    column: args.column,
                },
            )?;
            println!("{}", living_dex::app::display::describe(&outcome));
        }
        Command::ShowBox(args) => {
            print!("{}", app.show_box(&args.dex, args.box_number, args.highlight, args.icons)?);
        }
        Command::Export(args) => {
            let format: ExportFormat = args.format.parse()?;
            let written = app.export(&args.dex, Path::new(&args.output), format)?;
            println!("✅ Wrote {} entries to {}", written, args.output);
        }
        Command::Import(args) => {
            let path = app.import(&args.game, &args.region, Path::new(&args.list))?;
            println!("📁 Saved {}", path.display());
        }
    }
    Ok(())
}
