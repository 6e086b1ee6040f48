//! Command-line front end for the storefront address book.
//!
//! Configuration comes from the environment (a `.env` file is loaded if
//! present); see `ClientConfig::from_env` for the variables.

mod commands;
mod error;
mod output;

use address_book::{AddressFormState, FormAddressType};
use address_client::{AddressClient, ClientConfig};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(name = "address-cli")]
#[command(about = "List, add, edit and delete storefront addresses")]
struct Cli {
    /// Print API responses as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List saved addresses
    List,

    /// Add a new address
    Add(FormArgs),

    /// Edit an existing address
    Edit {
        /// Address id as shown by `list`
        id: String,

        #[command(flatten)]
        fields: FormArgs,
    },

    /// Delete an address
    Delete {
        /// Address id as shown by `list`
        id: String,
    },
}

/// Form fields. On `edit`, only the given fields are changed.
#[derive(Debug, Default, Args)]
pub struct FormArgs {
    /// Recipient's full name
    #[arg(long)]
    pub name: Option<String>,

    /// 10-digit phone number; the +91 prefix is added automatically
    #[arg(long)]
    pub phone: Option<String>,

    /// House / flat / building
    #[arg(long)]
    pub house: Option<String>,

    /// Locality or area
    #[arg(long)]
    pub locality: Option<String>,

    #[arg(long)]
    pub pincode: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// Delivery instructions (optional)
    #[arg(long)]
    pub instructions: Option<String>,

    /// Address type: home or office
    #[arg(long = "type", value_parser = parse_address_type)]
    pub address_type: Option<FormAddressType>,
}

impl FormArgs {
    /// Copy the given fields onto `form`.
    pub fn apply(&self, form: &mut AddressFormState) {
        let text_fields = [
            (&self.name, &mut form.full_name),
            (&self.house, &mut form.house_number),
            (&self.locality, &mut form.locality),
            (&self.pincode, &mut form.pincode),
            (&self.state, &mut form.state),
            (&self.city, &mut form.city),
            (&self.instructions, &mut form.instructions),
        ];
        for (value, target) in text_fields {
            if let Some(value) = value {
                *target = value.clone();
            }
        }

        if let Some(phone) = &self.phone {
            form.set_phone_digits(phone);
        }
        if let Some(address_type) = self.address_type {
            form.address_type = address_type;
        }
    }
}

fn parse_address_type(value: &str) -> Result<FormAddressType, String> {
    FormAddressType::from_ui_label(value)
        .ok_or_else(|| format!("'{}' is not an address type (expected home or office)", value))
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::from_env()?;
    debug!(url = %config.collection_url(), "Using address endpoint");
    let client = AddressClient::new(config)?;

    match cli.command {
        Command::List => commands::list(&client, cli.json).await,
        Command::Add(fields) => commands::add(&client, &fields, cli.json).await,
        Command::Edit { id, fields } => commands::edit(&client, &id, &fields, cli.json).await,
        Command::Delete { id } => commands::delete(&client, &id).await,
    }
}
