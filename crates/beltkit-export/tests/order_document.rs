//! End-to-end document checks plus the cross-renderer agreement test:
//! the schematic and the print templates must derive every key coordinate
//! from the same geometry engine.

use beltkit_core::{BeltDesign, BeltOrder, BeltSpecs, BuckleAttachment, CustomerDetails, EndShape};
use beltkit_export::{export_file_name, render_order_pdf, write_order_pdf};
use beltkit_geometry::layout;
use chrono::NaiveDate;
use uuid::Uuid;

fn sample_order() -> BeltOrder {
    let design = BeltDesign::default();
    let specs = BeltSpecs::default();
    let total_length = layout::total_length(&design, &specs);
    BeltOrder {
        id: Uuid::new_v4(),
        order_number: "BLT-260805-1234".to_string(),
        date: "August 5, 2026".to_string(),
        design,
        customer: CustomerDetails {
            name: "Alex Rivera".to_string(),
            phone: "(555) 987-6543".to_string(),
            email: "alex@example.com".to_string(),
            notes: "Extra hole at 13 inches if possible.".to_string(),
        },
        total_length,
        price: Some(70.0),
    }
}

#[test]
fn renders_a_pdf_document() {
    let specs = BeltSpecs::default();
    let bytes = render_order_pdf(&sample_order(), &specs).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    // Two pages plus content: far beyond a trivial header.
    assert!(bytes.len() > 2_000);
}

#[test]
fn renders_every_shape_and_attachment() {
    let specs = BeltSpecs::default();
    for shape in EndShape::ALL {
        for attachment in [BuckleAttachment::Additional, BuckleAttachment::Integrated] {
            let mut order = sample_order();
            order.design.end_shape = shape;
            order.design.buckle_attachment = attachment;
            order.total_length = layout::total_length(&order.design, &specs);
            let bytes = render_order_pdf(&order, &specs).unwrap();
            assert!(bytes.starts_with(b"%PDF"), "{:?}/{:?}", shape, attachment);
        }
    }
}

#[test]
fn unknown_color_aborts_the_export() {
    let specs = BeltSpecs::default();
    let mut order = sample_order();
    order.design.color_id = "no-such-leather".to_string();
    assert!(render_order_pdf(&order, &specs).is_err());
}

#[test]
fn writes_the_deterministic_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let specs = BeltSpecs::default();
    let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
    let path = write_order_pdf(&sample_order(), &specs, dir.path(), date).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "BeltOrder_AlexRivera_2026-08-05.pdf"
    );
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        export_file_name("Alex Rivera", date)
    );
    assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF"));
}

#[test]
fn both_renderers_agree_on_hole_geometry() {
    // The schematic places holes at belt_x + inches * units_per_inch; the
    // template page places them at template_x + inches. Both must reduce
    // to the same layout::hole_positions offsets.
    let design = BeltDesign::default();
    let specs = BeltSpecs::default();
    let svg = beltkit_visualizer::render_schematic(&design, &specs).unwrap();

    let scene = beltkit_visualizer::SchematicLayout::default();
    let upi = scene.units_per_inch(layout::total_length(&design, &specs));
    for inches in layout::hole_positions(&specs) {
        let cx = scene.belt_x + inches * upi;
        assert!(
            svg.contains(&format!("cx=\"{}\"", cx)),
            "schematic hole at {} inches not found at {}",
            inches,
            cx
        );
    }

    // And the same offsets are what the 1:1 page draws: one inch of paper
    // per inch of strap, so the offsets are used unscaled there.
    assert_eq!(
        layout::hole_positions(&specs),
        vec![5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0]
    );
}
