//! End-to-end checks of the visitor/park/trip relationship queries

use parkways_core::{
    Catalog, ErrorKind, Park, Scenario, TripEntry, TripRegistry, Visitor,
};

#[test]
fn matteo_visits_two_parks() {
    let mut registry = TripRegistry::new();
    let matteo = Visitor::new("Matteo").unwrap();
    let yosemite = Park::new("Yosemite").unwrap();
    let antelope = Park::new("Antelope").unwrap();

    registry.record(&matteo, &yosemite, "May 1st", "May 5th").unwrap();
    registry.record(&matteo, &antelope, "Aug 1st", "Aug 5th").unwrap();

    let parks = matteo.national_parks(&registry);
    assert_eq!(parks.len(), 2);
    assert!(parks.contains(&yosemite));
    assert!(parks.contains(&antelope));
    assert_eq!(yosemite.total_visits(&registry), 1);
}

#[test]
fn every_trip_links_both_sides() {
    let mut registry = TripRegistry::new();
    let visitors: Vec<_> = ["Ada", "Grace", "Linus"]
        .iter()
        .map(|n| Visitor::new(*n).unwrap())
        .collect();
    let parks: Vec<_> = ["Zion", "Denali", "Acadia"]
        .iter()
        .map(|n| Park::new(*n).unwrap())
        .collect();

    let pairs = [(0, 0), (0, 1), (1, 1), (2, 2), (2, 0), (1, 1)];
    for (v, p) in pairs {
        registry
            .record(&visitors[v], &parks[p], "Spring 2024", "Summer 2024")
            .unwrap();
    }

    for trip in &registry {
        assert!(trip.park().visitors(&registry).contains(trip.visitor()));
        assert!(trip.visitor().national_parks(&registry).contains(trip.park()));
    }

    for (p, park) in parks.iter().enumerate() {
        let expected = pairs.iter().filter(|(_, pp)| *pp == p).count();
        assert_eq!(park.total_visits(&registry), expected);
    }
}

#[test]
fn recorded_trip_reads_back_supplied_values() {
    let mut registry = TripRegistry::new();
    let luca = Visitor::new("Luca").unwrap();
    let yosemite = Park::new("Yosemite").unwrap();

    let trip = registry
        .record(&luca, &yosemite, "July 1st", "July 5th")
        .unwrap();

    assert_eq!(trip.visitor(), &luca);
    assert_eq!(trip.park(), &yosemite);
    assert_eq!(trip.start_date(), "July 1st");
    assert_eq!(trip.end_date(), "July 5th");
}

#[test]
fn short_start_date_is_rejected() {
    let mut registry = TripRegistry::new();
    let luca = Visitor::new("Luca").unwrap();
    let yosemite = Park::new("Yosemite").unwrap();

    let err = registry
        .record(&luca, &yosemite, "May 1", "May 5th")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert!(registry.is_empty());
}

#[test]
fn visitor_that_is_not_a_visitor_is_a_type_error() {
    // The typed API rejects this at compile time; scenarios check it at load time
    let scenario = Scenario::new()
        .with_park("Yosemite")
        .with_trip(TripEntry::new(
            serde_json::json!(["Matteo"]),
            "Yosemite",
            "May 1st",
            "May 5th",
        ));
    let err = scenario.build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);

    let scenario = Scenario::new()
        .with_park("Yosemite")
        .with_trip(TripEntry::new("Yosemite", "Yosemite", "May 1st", "May 5th"));
    let err = scenario.build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn park_rename_always_fails() {
    let park = Park::new("Yosemite").unwrap();
    for attempt in ["Antelope", "Yo", ""] {
        assert_eq!(
            park.set_name(attempt).unwrap_err().kind(),
            ErrorKind::Immutability
        );
    }
    assert_eq!(park.name(), "Yosemite");
}

#[test]
fn registries_are_isolated() {
    let matteo = Visitor::new("Matteo").unwrap();
    let yosemite = Park::new("Yosemite").unwrap();

    let mut first = TripRegistry::new();
    let second = TripRegistry::new();
    first.record(&matteo, &yosemite, "May 1st", "May 5th").unwrap();

    assert_eq!(yosemite.total_visits(&first), 1);
    assert_eq!(yosemite.total_visits(&second), 0);
}

#[test]
fn hand_built_catalog() {
    let mut catalog = Catalog::new();
    let ada = Visitor::new("Ada").unwrap();
    let zion = Park::new("Zion").unwrap();
    catalog.add_visitor(ada.clone()).unwrap();
    catalog.add_park(zion.clone()).unwrap();
    catalog
        .trips_mut()
        .record(&ada, &zion, "Oct 1st", "Oct 3rd")
        .unwrap();

    assert_eq!(catalog.visitor("Ada"), Some(&ada));
    assert_eq!(catalog.park("Zion"), Some(&zion));
    assert_eq!(catalog.parks().len(), 1);
    assert_eq!(catalog.visitors().len(), 1);
    assert_eq!(zion.best_visitor(catalog.trips()), Some(ada));

    let err = catalog.add_visitor(Visitor::new("Ada").unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);
    assert_eq!(catalog.visitors().len(), 1);
}
