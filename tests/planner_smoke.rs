mod fixtures;

use std::collections::HashSet;

use drone_planner::config::PlannerConfig;
use drone_planner::geometry::CLOSE_TOLERANCE;
use drone_planner::polyline::Polyline;

use fixtures::*;

fn realistic_day() -> (drone_planner::planner::FlightPlanner, Vec<drone_planner::order::Order>) {
    let catalog = TestCatalog::new()
        .item("Margherita", CIVERINOS_SLICE.name, 900)
        .item("Calzone", CIVERINOS_SLICE.name, 1400)
        .item("Can of Fanta", RUDIS.name, 90)
        .item("Bubble Tea", BING_TEA.name, 450)
        .item("Flapjack", SODEBERG_PAVILION.name, 180);

    let shops: Vec<(&str, _)> = SHOPS.iter().map(|shop| (shop.name, shop.point())).collect();
    let landmarks = LANDMARKS.iter().map(|l| l.point()).collect();
    let planner = planner(PlannerConfig::default(), &no_fly_vertices(), landmarks, &shops);

    let orders = vec![
        order("e1f2a3b4", DELIVERY_POINTS[0].point(), &["Bubble Tea"], &catalog),
        order("0c9d8e7f", DELIVERY_POINTS[1].point(), &["Margherita", "Calzone"], &catalog),
        order("5a6b7c8d", DELIVERY_POINTS[2].point(), &["Can of Fanta"], &catalog),
        order("9e8d7c6b", DELIVERY_POINTS[3].point(), &["Flapjack", "Bubble Tea"], &catalog),
        order("1a2b3c4d", DELIVERY_POINTS[4].point(), &["Margherita"], &catalog),
    ];
    (planner, orders)
}

#[test]
fn smoke_realistic_day_respects_airspace() {
    let (planner, orders) = realistic_day();
    let report = planner.plan(orders).expect("plan");

    assert!(!report.moves().is_empty());
    for entry in report.moves() {
        assert!(planner.airspace().is_valid_move(&entry.from, &entry.to), "{:?}", entry);
    }
    for pair in report.moves().windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }

    let accounted: HashSet<&str> = report
        .delivered
        .iter()
        .chain(report.undelivered.iter().map(|u| &u.order))
        .map(|o| o.order_no())
        .collect();
    assert_eq!(accounted.len(), 5);
    assert_eq!(report.summary.order_count, 5);
    assert_eq!(report.summary.move_count, report.moves().len());
}

#[test]
fn smoke_nearest_order_is_delivered_first() {
    let (planner, orders) = realistic_day();
    let report = planner.plan(orders).expect("plan");

    // Rudis is the shop closest to Appleton Tower, east of every no-fly zone.
    assert_eq!(report.moves()[0].order_no.as_deref(), Some("5a6b7c8d"));
    assert!(report.delivered.iter().any(|o| o.order_no() == "5a6b7c8d"));
    let drop = DELIVERY_POINTS[2].point();
    assert!(
        report
            .flight_log
            .moves_for("5a6b7c8d")
            .any(|m| m.is_hover() && m.to.is_close_to(&drop, CLOSE_TOLERANCE))
    );
}

#[test]
fn smoke_flight_map_traces_log() {
    let (planner, orders) = realistic_day();
    let report = planner.plan(orders).expect("plan");
    let path = Polyline::from_moves(report.moves());

    assert_eq!(path.points().len(), report.moves().len() + 1);
    assert_eq!(path.points()[0], APPLETON_TOWER.point());
}
