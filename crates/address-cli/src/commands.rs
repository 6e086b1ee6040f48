//! Subcommand implementations.

use address_book::{AddressFormState, AddressList};
use address_client::AddressClient;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::CliError;
use crate::output::format_list;
use crate::FormArgs;

pub async fn list(client: &AddressClient, json: bool) -> Result<(), CliError> {
    let addresses = client.fetch_addresses().await?;
    info!(count = addresses.len(), "Fetched addresses");

    if json {
        println!("{}", serde_json::to_string_pretty(&addresses)?);
    } else {
        print!("{}", format_list(&addresses));
    }
    Ok(())
}

pub async fn add(client: &AddressClient, fields: &FormArgs, json: bool) -> Result<(), CliError> {
    let mut form = AddressFormState::new();
    fields.apply(&mut form);

    let payload = form.to_payload()?;
    let created = client.create(&payload).await?;
    info!("Address created");

    print_result("Address added.", &created, json)
}

pub async fn edit(
    client: &AddressClient,
    id: &str,
    fields: &FormArgs,
    json: bool,
) -> Result<(), CliError> {
    let list = AddressList::from_response(&client.list().await?);
    let address = list
        .get(id)
        .ok_or_else(|| CliError::NotFound(id.to_string()))?;

    let server_id = address
        .raw
        .id()
        .ok_or_else(|| CliError::NoServerId(id.to_string()))?;

    let mut form = AddressFormState::from_raw(&address.raw);
    if !address.kind.is_selectable() && fields.address_type.is_none() {
        // The form only offers Home and Office, so saving changes the type.
        warn!(
            id,
            "Address type {} will be saved as {}",
            address.kind,
            form.address_type.api_title()
        );
    }
    fields.apply(&mut form);

    let payload = form.to_payload()?;
    let updated = client.update(&server_id, &payload).await?;
    info!(id = %server_id, "Address updated");

    print_result("Address updated.", &updated, json)
}

pub async fn delete(client: &AddressClient, id: &str) -> Result<(), CliError> {
    let mut list = AddressList::from_response(&client.list().await?);

    let server_id = list
        .get(id)
        .map(|address| address.raw.id())
        .ok_or_else(|| CliError::NotFound(id.to_string()))?
        .ok_or_else(|| CliError::NoServerId(id.to_string()))?;

    if !list.begin_delete(id) {
        return Err(CliError::NotFound(id.to_string()));
    }

    let result = client.delete(&server_id).await;
    let removed = list.finish_delete(id, result.is_ok());
    result?;

    if let Some(address) = removed {
        info!(id = %server_id, remaining = list.len(), "Address deleted");
        println!("Deleted address for {}.", address.name);
    }
    Ok(())
}

fn print_result(message: &str, body: &Value, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(body)?);
    } else {
        println!("{}", message);
    }
    Ok(())
}
