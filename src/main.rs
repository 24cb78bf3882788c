use std::path::Path;

use anyhow::Context as _;
use chrono::Local;

use beltkit::{BeltDesign, BeltOrder, BeltSpecs, CustomerDetails};
use beltkit_core::price_design;
use beltkit_geometry::layout;
use beltkit_orders::{format_order_date, generate_order_number, new_order_id, OrderStore};

const USAGE: &str = "Usage: beltkit [DESIGN_JSON] [CUSTOMER_NAME]

Renders belt-schematic.svg for the design (the default design when no
JSON file is given). With a customer name, also saves the order to the
history and writes the two-page order PDF into the current directory.";

fn main() -> anyhow::Result<()> {
    beltkit::init_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return Ok(());
    }

    let (design, customer_name) = match args.as_slice() {
        [] => (BeltDesign::default(), None),
        [design_path] => (load_design(design_path)?, None),
        [design_path, name, ..] => (load_design(design_path)?, Some(name.clone())),
    };

    let specs = BeltSpecs::default();

    let svg = beltkit_visualizer::render_schematic(&design, &specs)?;
    std::fs::write("belt-schematic.svg", &svg).context("writing belt-schematic.svg")?;
    println!(
        "Wrote belt-schematic.svg ({} total length)",
        beltkit_core::units::format_inches(layout::total_length(&design, &specs))
    );

    if let Some(name) = customer_name {
        let now = Local::now();
        let order = BeltOrder {
            id: new_order_id(),
            order_number: generate_order_number(now),
            date: format_order_date(now),
            total_length: layout::total_length(&design, &specs),
            price: Some(price_design(&design).total),
            customer: CustomerDetails {
                name,
                ..CustomerDetails::default()
            },
            design,
        };

        let store = OrderStore::new(OrderStore::default_path());
        store.save(&order)?;

        let path =
            beltkit_export::write_order_pdf(&order, &specs, Path::new("."), now.date_naive())?;
        println!("Order {} exported to {}", order.order_number, path.display());
    }

    Ok(())
}

fn load_design(path: &str) -> anyhow::Result<BeltDesign> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing design {path}"))
}
