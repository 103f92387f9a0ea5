use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mailclean_lib::PollOptions;
use mailclean_lib::ProviderConfig;
use mailclean_lib::config::{API_BASE_ENV, API_KEY_ENV, DEFAULT_API_BASE, EU_API_BASE};
use mailclean_lib::pipeline::{DEFAULT_OUTPUT, PipelineOptions};

#[derive(Parser)]
#[command(name = "mailclean-cli", version)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// fichier CSV à nettoyer (colonne `email`)
    pub input: Option<PathBuf>,

    /// clé API Mailgun
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// URL de base de l'API Mailgun
    #[arg(long, env = API_BASE_ENV, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// utilise la région EU (prend le pas sur --api-base)
    #[arg(long)]
    pub eu: bool,

    /// liste nettoyée (CSV, colonne `email`)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub out: PathBuf,

    /// écrit aussi les adresses retirées (email,result,risk,reason)
    #[arg(long)]
    pub removed_out: Option<PathBuf>,

    /// format du rapport: human|json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// intervalle entre deux vérifications du job (secondes)
    #[arg(long = "poll-interval", default_value_t = 10)]
    pub poll_interval_secs: u64,

    /// nombre maximum de vérifications du job
    #[arg(long = "max-polls", default_value_t = 60)]
    pub max_polls: u32,
}

#[derive(Subcommand)]
pub enum Commands {
    /// valide une seule adresse
    Validate {
        email: String,
        /// format de sortie (human|json)
        #[arg(long, default_value = "human")]
        format: String,
    },
    /// liste les jobs bulk existants (vérifie l'accès à l'API bulk)
    Jobs,
    /// liste les previews bulk existantes (vérifie l'accès à la preview)
    Previews,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn provider_config(&self) -> Result<ProviderConfig> {
        let base = if self.eu {
            EU_API_BASE
        } else {
            self.api_base.as_str()
        };
        Ok(ProviderConfig::new(self.api_key.as_deref())?.with_api_base(base)?)
    }

    pub fn pipeline_options(&self, input: PathBuf) -> PipelineOptions {
        let mut options = PipelineOptions::new(input);
        options.output = self.out.clone();
        options.removed_output = self.removed_out.clone();
        options.poll = PollOptions::new(
            Duration::from_secs(self.poll_interval_secs),
            self.max_polls,
        );
        options
    }
}
