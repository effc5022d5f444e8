//! Park commands

use serde::Serialize;

use crate::commands::trip::{trip_rows, TRIP_HEADERS};
use crate::output::{render_table, to_json, OutputFormat};
use crate::AppContext;
use parkways_core::{ParkSummary, TripRecord};

/// A park summary together with every trip to it
#[derive(Serialize)]
struct ParkDetail {
    #[serde(flatten)]
    summary: ParkSummary,
    trips: Vec<TripRecord>,
}

pub fn run_list(ctx: &AppContext) -> anyhow::Result<()> {
    let trips = ctx.catalog.trips();
    let summaries: Vec<ParkSummary> = ctx
        .catalog
        .parks()
        .iter()
        .map(|p| ParkSummary::of(p, trips))
        .collect();

    match ctx.format {
        OutputFormat::Json => println!("{}", to_json(&summaries)?),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = summaries
                .iter()
                .map(|s| {
                    vec![
                        s.name.clone(),
                        s.total_visits.to_string(),
                        s.visitors.join(", "),
                        s.best_visitor.clone().unwrap_or_else(|| "-".to_string()),
                    ]
                })
                .collect();
            println!(
                "{}",
                render_table(&["PARK", "VISITS", "VISITORS", "BEST VISITOR"], &rows)
            );
        }
    }
    Ok(())
}

pub fn run_show(name: &str, ctx: &AppContext) -> anyhow::Result<()> {
    let Some(park) = ctx.catalog.park(name) else {
        anyhow::bail!("Park '{}' not found", name);
    };
    let trips = ctx.catalog.trips();
    let detail = ParkDetail {
        summary: ParkSummary::of(park, trips),
        trips: park.trips(trips).into_iter().map(TripRecord::of).collect(),
    };

    match ctx.format {
        OutputFormat::Json => println!("{}", to_json(&detail)?),
        OutputFormat::Table => {
            let summary = &detail.summary;
            println!("Park: {}", summary.name);
            println!("Total visits: {}", summary.total_visits);
            println!(
                "Best visitor: {}",
                summary.best_visitor.as_deref().unwrap_or("-")
            );
            println!();
            println!("{}", render_table(&TRIP_HEADERS, &trip_rows(&detail.trips)));
        }
    }
    Ok(())
}
