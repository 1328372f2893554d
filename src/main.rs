use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use drone_planner::config::PlannerConfig;
use drone_planner::geojson::write_flight_map;
use drone_planner::order::prepare_orders;
use drone_planner::planner::FlightPlanner;
use drone_planner::polyline::Polyline;
use drone_planner::records::{self, DeliveryDate};
use drone_planner::webserver::{WebServerClient, WebServerConfig};

const USAGE: &str = "usage: drone-planner DD MM YYYY WEB_PORT ORDERS_CSV [OUT_DIR]";

struct Args {
    date: DeliveryDate,
    port: u16,
    orders: PathBuf,
    out_dir: PathBuf,
}

fn parse_args(args: &[String]) -> Option<Args> {
    match args {
        [day, month, year, port, orders, rest @ ..] if rest.len() <= 1 => Some(Args {
            date: DeliveryDate::from_parts(day, month, year).ok()?,
            port: port.parse().ok()?,
            orders: PathBuf::from(orders),
            out_dir: rest.first().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(".")),
        }),
        _ => None,
    }
}

fn run(args: Args) -> drone_planner::Result<()> {
    let config = match std::env::var_os("DRONE_PLANNER_CONFIG") {
        Some(path) => PlannerConfig::load(Path::new(&path))?,
        None => PlannerConfig::default(),
    };

    let server = WebServerClient::new(WebServerConfig::for_port(args.port))?;
    let menus = server.menus()?;
    let no_fly = server.no_fly_zones()?.polygon_vertices();
    let landmarks = server.landmarks()?.points();
    let shops = menus.shop_locations(&server)?;

    let requests = records::read_orders_file(&args.orders, args.date)?;
    info!(date = %args.date, orders = requests.len(), "loaded orders");
    let orders = prepare_orders(requests, &menus, &server)?;

    let planner = FlightPlanner::new(config, &no_fly, landmarks, shops);
    let report = planner.plan(orders)?;

    let map_path = args.out_dir.join(args.date.map_file_name());
    write_flight_map(&Polyline::from_moves(report.moves()), &map_path)?;
    records::write_deliveries_file(args.out_dir.join("deliveries.csv"), &report.delivered)?;
    records::write_flightpath_file(args.out_dir.join("flightpath.csv"), report.moves())?;

    info!(
        status = ?report.status,
        delivered = report.summary.delivered_count,
        orders = report.summary.order_count,
        moves = report.summary.move_count,
        value_pct = %format!("{:.2}", report.summary.value_percentage()),
        map = %map_path.display(),
        "flight plan written"
    );
    Ok(())
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let Some(args) = parse_args(&argv) else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "planning failed");
            ExitCode::FAILURE
        }
    }
}
