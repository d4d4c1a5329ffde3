use crate::cli::context::AppContext;
use crate::cli::ui::render::render_detail;
use crate::cli::ui::with_spinner;
use anyhow::Result;
use carhub_cli::api::InspectionApi;
use carhub_cli::inspection::RecordDetail;
use carhub_cli::inspection::dashboard::find_by_id;

pub async fn show_command(ctx: &AppContext, id: &str, json: bool) -> Result<()> {
    let records = with_spinner("Loading inspections...", ctx.client.list_inspections()).await?;

    let Some(record) = find_by_id(&records, id) else {
        anyhow::bail!("No single inspection matches id '{}'", id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        render_detail(&RecordDetail::build(record, &ctx.catalog, ctx.lang()));
    }

    Ok(())
}
