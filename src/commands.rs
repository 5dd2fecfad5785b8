//! The non-interactive commands.
//!
//! Each one talks to the API through the same selection and table types the
//! dashboard uses, so `sellers` and `table` behave exactly like their pages.

use crate::api::DashboardApi;
use crate::api::resource::TableKind;
use crate::config::Config;
use crate::environment::Environment;
use crate::models::tables::{OrderRow, ProductRow, SellerRow, SentimentAnalysis};
use crate::models::{Page, PagePayload, SortDirection, SortSpec, TableRecord};
use crate::state::{BoundWidget, Completion, PaginatedTable, SelectionContext};
use crate::widgets::WidgetId;
use crate::widgets::tables::{orders_config, products_config, reviews_config, sellers_config};
use crate::{print_cmd_error, print_cmd_info, print_cmd_success, print_cmd_warn};
use std::error::Error;
use std::path::Path;

/// Loads the seller directory and prints it, marking the default selection.
pub async fn list_sellers(api: &dyn DashboardApi) -> Result<(), Box<dyn Error>> {
    let mut selection = SelectionContext::new();
    if let Err(e) = selection.initialize(api).await {
        print_cmd_error!("Failed to load sellers.", &e.user_message());
        return Err(e.into());
    }
    let selected = selection.selected();
    for id in selection.sellers() {
        let marker = if selected.as_deref() == Some(id.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{} {}", marker, id);
    }
    print_cmd_info!(
        "Sellers",
        "{} sellers from {}",
        selection.sellers().len(),
        api.environment().api_url()
    );
    Ok(())
}

/// Which window of a table to print.
#[derive(Debug, Clone)]
pub struct TableRequest {
    pub kind: TableKind,
    pub page: u32,
    pub sort_by: Option<String>,
    pub order: SortDirection,
}

pub async fn show_table(
    api: &dyn DashboardApi,
    request: TableRequest,
) -> Result<(), Box<dyn Error>> {
    match request.kind {
        TableKind::Orders => {
            let table =
                PaginatedTable::<Page<OrderRow>>::new(WidgetId::OrdersTable, orders_config());
            print_table(api, table, &request).await
        }
        TableKind::Products => {
            let table =
                PaginatedTable::<Page<ProductRow>>::new(WidgetId::ProductsTable, products_config());
            print_table(api, table, &request).await
        }
        TableKind::Sellers => {
            let table =
                PaginatedTable::<Page<SellerRow>>::new(WidgetId::SellersTable, sellers_config());
            print_table(api, table, &request).await
        }
        TableKind::Reviews => {
            let table =
                PaginatedTable::<SentimentAnalysis>::new(WidgetId::ReviewsTable, reviews_config());
            print_table(api, table, &request).await
        }
    }
}

/// Fetches the requested window once, plus one clamping refetch when the
/// page is past the end.
async fn print_table<P: PagePayload>(
    api: &dyn DashboardApi,
    table: PaginatedTable<P>,
    request: &TableRequest,
) -> Result<(), Box<dyn Error>> {
    let mut table = table.starting_at(request.page);
    if let Some(field) = &request.sort_by {
        if !request.kind.sortable() {
            print_cmd_warn!("Ignoring sort", "the {} table is not sortable", request.kind);
        } else if !P::Row::can_sort_by(field) {
            return Err(format!(
                "Cannot sort by '{}'. Expected one of: {}",
                field,
                P::Row::sort_keys().join(", ")
            )
            .into());
        } else {
            table = table.with_sort(SortSpec::new(field.clone(), request.order));
        }
    }

    let mut next = table.mount();
    while let Some(job) = next.take() {
        log::debug!("GET {}", job.resource);
        let result = api.fetch(&job.resource).await;
        if let Completion::Failed(e) = table.complete(job.ticket, result) {
            print_cmd_error!("Failed to load table.", &e.user_message());
            return Err(e.into());
        }
        next = table.follow_up();
    }

    let labels: Vec<&str> = P::Row::COLUMNS.iter().map(|c| c.label).collect();
    println!("{}", labels.join("\t"));
    for row in table.rows() {
        println!("{}", row.cells().join("\t"));
    }
    print_cmd_info!(
        "Page",
        "{} of {} ({} rows)",
        table.current_page(),
        table.total_pages().max(1),
        table.total_count()
    );
    Ok(())
}

/// Validates `url` and stores it as the API base URL.
pub fn set_api_url(url: &str, config_path: &Path) -> Result<(), Box<dyn Error>> {
    let environment: Environment = url
        .parse()
        .map_err(|_| format!("Invalid API URL '{}': expected http(s)://...", url))?;
    let mut config = Config::load_or_default(config_path)?;
    config.api_url = Some(environment.api_url());
    config
        .save(config_path)
        .map_err(|e| format!("Failed to save config: {}", e))?;
    print_cmd_success!("API URL saved", "{}", environment.api_url());
    Ok(())
}

pub fn reset_config(config_path: &Path) -> Result<(), Box<dyn Error>> {
    print_cmd_info!("Resetting configuration", "{}", config_path.display());
    Config::clear(config_path)?;
    Ok(())
}
