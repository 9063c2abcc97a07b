//! Translation table maintenance tool
//!
//! Main application entry point

use std::path::PathBuf;
use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, error};

use alm_plugins::{
    config::Settings,
    i18n::{BundledTables, TranslatorRegistry},
    plugins::{build_plugin_menu, default_plugins},
    ui::{load_layout_file, Control, FormRegistry, MenuStrip},
    utils::logging,
};

#[derive(Parser, Debug)]
#[command(name = "alm-plugins", version, about = "Maintain the plugin's translation tables")]
struct Cli {
    /// Configuration file basename (without extension)
    #[arg(long, default_value = "config")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the loaded tables to their external files
    Dump {
        /// Languages to dump; all supported languages when omitted
        #[arg(long = "lang")]
        languages: Vec<String>,
        /// Skip lines containing this text (repeatable)
        #[arg(long = "ban")]
        ban: Vec<String>,
    },
    /// Remove keys matching ban patterns and rewrite the files
    Prune {
        #[arg(long = "lang")]
        languages: Vec<String>,
        /// Substring, or suffix when ending with the separator (repeatable)
        #[arg(long = "ban", required = true)]
        ban: Vec<String>,
    },
    /// Strip the default language's keys from every language file
    Remove {
        #[arg(long = "lang")]
        languages: Vec<String>,
        /// Keep keys starting with this prefix (repeatable)
        #[arg(long = "keep")]
        keep: Vec<String>,
    },
    /// Translate a JSON layout and print the result
    Translate {
        layout: PathBuf,
        #[arg(long = "lang")]
        language: Option<String>,
    },
    /// Build every known form in capture mode and dump the tables
    Regenerate {
        #[arg(long = "lang")]
        languages: Vec<String>,
        /// Form names to skip (repeatable)
        #[arg(long = "skip")]
        skip: Vec<String>,
    },
    /// Print key counts of the tables
    Stats {
        #[arg(long = "lang")]
        languages: Vec<String>,
    },
    /// Print the default configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenv::dotenv();

    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_sources(&cli.config).context("Failed to load configuration")?;
    settings.validate()?;

    // Initialize logging
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", alm_plugins::info());

    if let Err(e) = run(cli.command, settings) {
        if let Some(alm) = e.downcast_ref::<alm_plugins::AlmError>() {
            error!(severity = %alm.severity(), recoverable = alm.is_recoverable(), "{}", alm);
        }
        return Err(e);
    }
    Ok(())
}

fn run(command: Command, settings: Settings) -> anyhow::Result<()> {
    let mut registry = TranslatorRegistry::new(settings.i18n.clone(), BundledTables::default());

    match command {
        Command::Dump { languages, ban } => {
            load_languages(&mut registry, &settings, &languages);
            let mut banlist = settings.maintenance.dump_ban_list.clone();
            banlist.extend(ban);
            registry.dump_all(&banlist)?;
        }
        Command::Prune { languages, ban } => {
            load_languages(&mut registry, &settings, &languages);
            let removed = registry.prune_all(&ban)?;
            info!("Removed {} keys", removed);
        }
        Command::Remove { languages, keep } => {
            load_languages(&mut registry, &settings, &languages);
            registry.get_context(&settings.i18n.default_language);
            let mut keep_prefixes = settings.maintenance.keep_prefixes.clone();
            keep_prefixes.extend(keep);
            let removed = registry.remove_all(&settings.i18n.default_language, &keep_prefixes)?;
            info!("Removed {} lines", removed);
        }
        Command::Translate { layout, language } => {
            let mut form = load_layout_file(&layout)
                .with_context(|| format!("Failed to load layout {}", layout.display()))?;
            let language = registry.resolve_language(language.as_deref());
            registry.translate_interface(&mut form, &language);
            println!("{}", serde_json::to_string_pretty(&form)?);
        }
        Command::Regenerate { languages, skip } => {
            let forms = known_forms(&settings)?;
            let mut banlist = settings.maintenance.form_ban_list.clone();
            banlist.extend(skip);

            for language in selected_languages(&settings, &languages) {
                registry.get_context(&language).set_capture_new(true);
                let built = registry.load_all_forms(&forms, &language, &banlist);
                info!(language = %language, forms = built, "Forms regenerated");
            }
            registry.dump_all(&settings.maintenance.dump_ban_list)?;
        }
        Command::Stats { languages } => {
            load_languages(&mut registry, &settings, &languages);
            let stats = registry.stats();
            for language in &stats.languages {
                println!("{}\t{}", language.code, language.key_count);
            }
            println!("default\t{}", stats.total_keys);
        }
        Command::Config => {
            print!("{}", Settings::default().to_toml()?);
        }
    }

    Ok(())
}

fn selected_languages(settings: &Settings, requested: &[String]) -> Vec<String> {
    if requested.is_empty() {
        settings.i18n.supported_languages.clone()
    } else {
        requested.to_vec()
    }
}

fn load_languages(registry: &mut TranslatorRegistry, settings: &Settings, requested: &[String]) {
    for language in selected_languages(settings, requested) {
        registry.get_context(&language);
    }
}

/// Layout files plus the host main menu carrying the plugin commands
fn known_forms(settings: &Settings) -> anyhow::Result<FormRegistry> {
    let mut forms = if settings.maintenance.layout_dir.is_dir() {
        FormRegistry::from_layout_dir(&settings.maintenance.layout_dir)?
    } else {
        FormRegistry::new()
    };

    if !forms.contains("Main") {
        let menu = build_plugin_menu(&default_plugins(&settings.features));
        let main = Control::new("Main", "Save Editor").with_child(MenuStrip::new("MS_Main").with_item(menu));
        forms.register_layout("Main", main);
    }
    Ok(forms)
}
