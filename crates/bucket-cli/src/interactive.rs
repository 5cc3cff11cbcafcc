//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based interactive selection.

use bucket_core::ResourceType;
use dialoguer::{Input, Select};

use crate::error::Result;

/// Menu labels, in the order of [`ResourceType::ALL`]
fn resource_labels() -> Vec<&'static str> {
    ResourceType::ALL.iter().map(|r| r.label()).collect()
}

/// Ask the user for a resource type and the name of the resource
pub fn select_resource() -> Result<(ResourceType, String)> {
    let labels = resource_labels();
    let idx = Select::new()
        .with_prompt("Select resource type")
        .items(&labels)
        .default(0)
        .interact()?;
    let resource = ResourceType::ALL[idx];

    let name: String = Input::new()
        .with_prompt(format!("{} name", resource.label()))
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("name cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok((resource, name))
}
