use crate::cli::context::AppContext;
use crate::cli::ui::render::render_page;
use crate::cli::ui::with_spinner;
use anyhow::Result;
use carhub_cli::api::InspectionApi;
use carhub_cli::inspection::{InspectionQuery, paginate};
use clap::Args;
use log::info;

#[derive(Args)]
pub struct ListArgs {
    /// Filter by id, customer, mobile, plate, VIN, car type or model
    #[arg(short, long, default_value = "")]
    pub search: String,
    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
    /// Rows per page (defaults to the page-size setting)
    #[arg(long)]
    pub page_size: Option<usize>,
    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn list_command(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let records = with_spinner("Loading inspections...", ctx.client.list_inspections()).await?;

    let query = InspectionQuery {
        search: args.search,
        page: args.page,
        page_size: args.page_size.unwrap_or(ctx.config.page_size),
    };
    let page = paginate(&records, &query);
    info!(
        "Listing page {} of {} ({} matches for '{}')",
        page.page, page.total_pages, page.total_matches, query.search
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        println!();
        render_page(&page, ctx.lang());
    }

    Ok(())
}
