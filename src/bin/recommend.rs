// Recommend: slot filling and succession for one bed
//
// Purpose: Load a crop catalog, rank candidates for each open chord slot around
//          the finished crop's bed, then rank successors for the finished crop.
// Usage: cargo run --features cli --bin recommend
//        (configure with CATALOG_PATH, HARDINESS_ZONE, HARVEST_DATE, ... see config.rs)

use anyhow::{Context, Result};
use harmonic_guild_engine::tables::FREQUENCY_ZONES;
use harmonic_guild_engine::{Crop, EngineSettings, GuildScorer, SuccessionQuery};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "harmonic_guild_engine=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = EngineSettings::from_env().context("Invalid engine settings")?;
    tracing::info!("Configuration: {:?}", settings);

    let scorer = GuildScorer::from_path(&settings.catalog_path)
        .with_context(|| format!("Failed to load catalog {:?}", settings.catalog_path))?;

    let finished: &Crop = match &settings.finished_crop_id {
        Some(id) => scorer
            .catalog()
            .get(id)
            .with_context(|| format!("FINISHED_CROP_ID '{}' not in catalog", id))?,
        None => scorer
            .catalog()
            .crops()
            .first()
            .context("Catalog is empty")?,
    };
    let bed_hz = settings.bed_frequency_hz.unwrap_or(finished.frequency_hz);

    // Bedmates: other crops in the same zone that already hold a slot
    let bedmates: Vec<&Crop> = scorer
        .catalog()
        .crops()
        .iter()
        .filter(|c| c.id != finished.id && c.frequency_hz == bed_hz && c.chord_interval.is_some())
        .take(2)
        .collect();

    let open_slots = scorer.fill_guild(bed_hz, settings.jazz_mode, &bedmates, settings.result_limit);
    let report = scorer.guild_report(bed_hz, settings.jazz_mode, &bedmates);

    let query = SuccessionQuery::new(finished)
        .hardiness_zone(settings.hardiness_zone)
        .bedmates(&bedmates)
        .harvest_date(settings.harvest_date)
        .limit(settings.result_limit);
    let successors = scorer.suggest_succession(&query);

    tracing::info!(
        "Ranked {} open slots and {} successors for '{}'",
        open_slots.len(),
        successors.len(),
        finished.name
    );

    let output = json!({
        "zones": FREQUENCY_ZONES,
        "bed_frequency_hz": bed_hz,
        "finished_crop": finished,
        "bedmates": bedmates,
        "guild_report": report,
        "open_slots": open_slots,
        "succession": successors,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
