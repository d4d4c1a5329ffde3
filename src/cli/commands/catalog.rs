use crate::cli::context::AppContext;
use crate::cli::ui::render::render_catalog;
use anyhow::Result;

pub async fn catalog_command(ctx: &AppContext, section: Option<&str>) -> Result<()> {
    if let Some(key) = section.filter(|key| ctx.catalog.section(key).is_none()) {
        let known: Vec<&str> = ctx.catalog.section_keys().collect();
        anyhow::bail!("Unknown checklist section '{}' (expected one of: {})", key, known.join(", "));
    }

    render_catalog(&ctx.catalog, ctx.lang(), section);
    println!("  {} items", ctx.catalog.item_count());
    Ok(())
}
