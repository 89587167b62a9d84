//! Catalog listing command.

use crate::catalog::create_default;
use crate::cli::common::{CliError, CliResult};
use crate::models::Domain;
use clap::Args;
use serde::Serialize;

/// List the default categories of a domain
#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Feature domain (business-rules, actions, animations, design-guidelines)
    #[arg(short, long, value_name = "DOMAIN")]
    pub domain: Domain,

    /// Include item names
    #[arg(long)]
    pub items: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct CategorySummary {
    id: String,
    name: String,
    item_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct CatalogResponse {
    domain: Domain,
    categories: Vec<CategorySummary>,
    count: usize,
}

impl CatalogArgs {
    /// Execute the catalog command
    pub fn execute(&self) -> CliResult<()> {
        let model = create_default(self.domain);

        let categories: Vec<_> = model
            .categories
            .iter()
            .map(|cat| CategorySummary {
                id: cat.id.clone(),
                name: cat.name.clone(),
                item_count: cat.items.len(),
                items: self
                    .items
                    .then(|| cat.item_names().map(str::to_string).collect()),
            })
            .collect();

        let response = CatalogResponse {
            domain: self.domain,
            count: categories.len(),
            categories,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("{} ({} categories):", self.domain.label(), response.count);
        println!();
        for cat in response.categories {
            println!("  {:<20} {:<36} {} items", cat.id, cat.name, cat.item_count);
            for item in cat.items.unwrap_or_default() {
                println!("      - {item}");
            }
        }

        Ok(())
    }
}
