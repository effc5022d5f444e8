//! Trip commands

use crate::output::{render_table, to_json, OutputFormat};
use crate::AppContext;
use parkways_core::TripRecord;

pub const TRIP_HEADERS: [&str; 4] = ["VISITOR", "PARK", "START", "END"];

pub fn trip_rows(records: &[TripRecord]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|r| {
            vec![
                r.visitor.clone(),
                r.park.clone(),
                r.start_date.clone(),
                r.end_date.clone(),
            ]
        })
        .collect()
}

pub fn run_list(ctx: &AppContext) -> anyhow::Result<()> {
    let records: Vec<TripRecord> = ctx.catalog.trips().iter().map(TripRecord::of).collect();
    tracing::debug!("Listing {} trips", records.len());

    match ctx.format {
        OutputFormat::Json => println!("{}", to_json(&records)?),
        OutputFormat::Table => println!("{}", render_table(&TRIP_HEADERS, &trip_rows(&records))),
    }
    Ok(())
}
