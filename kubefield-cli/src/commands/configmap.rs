use crate::output::{self, OutputFormat};
use crate::Commands;
use anyhow::{Context, Result};
use kubefield_core::{read_data, read_key, update_field, GetUpdater, NamespacedName};

pub async fn handle_configmap_command<A: GetUpdater>(
    command: Commands,
    accessor: &A,
    namespace: &str,
    output_format: OutputFormat,
) -> Result<()> {
    match command {
        Commands::Get { configmap, field } => {
            let key = NamespacedName::new(namespace, configmap);
            let value = read_key(accessor, &field, &key)
                .await
                .with_context(|| format!("Failed to read field '{}' of {}", field, key))?;
            output::print_value(&field, &value, output_format)?;
        }
        Commands::Data { configmap } => {
            let key = NamespacedName::new(namespace, configmap);
            let data = read_data(accessor, &key)
                .await
                .with_context(|| format!("Failed to read {}", key))?;
            output::print_fields(&data, output_format)?;
        }
        Commands::Set {
            configmap,
            field,
            value,
        } => {
            let key = NamespacedName::new(namespace, configmap);
            update_field(accessor, &key, &field, &value)
                .await
                .with_context(|| format!("Failed to update field '{}' of {}", field, key))?;
            output::print_success(&format!("Field '{}' of {} updated", field, key));
        }
    }

    Ok(())
}
