//! Visitor commands

use serde::Serialize;

use crate::commands::trip::{trip_rows, TRIP_HEADERS};
use crate::output::{render_table, to_json, OutputFormat};
use crate::AppContext;
use parkways_core::{TripRecord, VisitorSummary};

#[derive(Serialize)]
struct VisitorDetail {
    #[serde(flatten)]
    summary: VisitorSummary,
    trips: Vec<TripRecord>,
}

pub fn run_list(ctx: &AppContext) -> anyhow::Result<()> {
    let trips = ctx.catalog.trips();
    let summaries: Vec<VisitorSummary> = ctx
        .catalog
        .visitors()
        .iter()
        .map(|v| VisitorSummary::of(v, trips))
        .collect();

    match ctx.format {
        OutputFormat::Json => println!("{}", to_json(&summaries)?),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = summaries
                .iter()
                .map(|s| {
                    vec![
                        s.name.clone(),
                        s.total_trips.to_string(),
                        s.national_parks.join(", "),
                    ]
                })
                .collect();
            println!("{}", render_table(&["VISITOR", "TRIPS", "PARKS"], &rows));
        }
    }
    Ok(())
}

pub fn run_show(name: &str, ctx: &AppContext) -> anyhow::Result<()> {
    let Some(visitor) = ctx.catalog.visitor(name) else {
        anyhow::bail!("Visitor '{}' not found", name);
    };
    let trips = ctx.catalog.trips();
    let detail = VisitorDetail {
        summary: VisitorSummary::of(visitor, trips),
        trips: visitor.trips(trips).into_iter().map(TripRecord::of).collect(),
    };

    match ctx.format {
        OutputFormat::Json => println!("{}", to_json(&detail)?),
        OutputFormat::Table => {
            println!("Visitor: {}", detail.summary.name);
            println!("Parks: {}", detail.summary.national_parks.join(", "));
            println!();
            println!("{}", render_table(&TRIP_HEADERS, &trip_rows(&detail.trips)));
        }
    }
    Ok(())
}
