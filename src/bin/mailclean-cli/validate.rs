use anyhow::{Context, Result};
use mailclean_lib::{EmailAddress, MailgunClient};
use tracing::info;

use crate::args::Cli;
use crate::output;

pub fn run(cli: &Cli, email: &str, format: &str) -> Result<()> {
    output::check_format(format)?;
    let address = EmailAddress::parse(email)
        .with_context(|| format!("'{email}' n'est pas une adresse e-mail"))?;

    let client = MailgunClient::new(&cli.provider_config()?)?;
    info!(address = %address, "validating single address");
    let result = client
        .validate_address(address.as_str())
        .with_context(|| format!("validation of {address} failed"))?;
    output::write_single(&result, format)
}
