//! 3D frame diagnostic: moment sign conventions
//!
//! Builds a single-storey frame with beams spanning the global X and Z
//! directions, applies a gravity line load to the beams, and prints the
//! member end forces and max moments so the local-axis moment conventions
//! can be inspected.

use anyhow::Result;

use frame3d::prelude::*;
use frame3d::report;

fn build_model() -> Result<FrameModel> {
    let mut model = FrameModel::new();

    // Steel-like properties
    model.add_material("Steel", Material::new(200e9, 77e9, 0.3, 7850.0))?;

    // 300x500mm rectangular section, strong axis bending in the vertical plane
    model.add_section("Rect300x500", Section::rectangular(0.3, 0.5))?;

    // Ground level
    model.add_node("N1", Node::new(0.0, 0.0, 0.0))?;
    model.add_node("N2", Node::new(8.0, 0.0, 0.0))?;
    model.add_node("N3", Node::new(0.0, 0.0, 7.0))?;
    model.add_node("N4", Node::new(8.0, 0.0, 7.0))?;

    // Top level, 3m above
    model.add_node("N5", Node::new(0.0, 3.0, 0.0))?;
    model.add_node("N6", Node::new(8.0, 3.0, 0.0))?;
    model.add_node("N7", Node::new(0.0, 3.0, 7.0))?;
    model.add_node("N8", Node::new(8.0, 3.0, 7.0))?;

    // Columns
    model.add_member("C1", Member::new("N1", "N5", "Steel", "Rect300x500"))?;
    model.add_member("C2", Member::new("N2", "N6", "Steel", "Rect300x500"))?;
    model.add_member("C3", Member::new("N3", "N7", "Steel", "Rect300x500"))?;
    model.add_member("C4", Member::new("N4", "N8", "Steel", "Rect300x500"))?;

    // Beams along X (8m) and Z (7m)
    model.add_member("BX1", Member::new("N5", "N6", "Steel", "Rect300x500"))?;
    model.add_member("BX2", Member::new("N7", "N8", "Steel", "Rect300x500"))?;
    model.add_member("BZ1", Member::new("N5", "N7", "Steel", "Rect300x500"))?;
    model.add_member("BZ2", Member::new("N6", "N8", "Steel", "Rect300x500"))?;

    // Fixed base
    for node in ["N1", "N2", "N3", "N4"] {
        model.add_support(node, Support::fixed())?;
    }

    // 10 kN/m gravity load on all beams, in the global Y direction
    for beam in ["BX1", "BX2", "BZ1", "BZ2"] {
        model.add_member_dist_load(
            beam,
            DistributedLoad::uniform(
                -10000.0,
                LoadDirection::FY,
                FrameModel::DEFAULT_CASE,
            ),
        )?;
    }

    Ok(model)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut model = build_model()?;
    model.analyze(AnalysisOptions::default().with_statics_check())?;

    let members = ["C1", "C2", "C3", "C4", "BX1", "BX2", "BZ1", "BZ2"];
    let beams = ["BX1", "BX2", "BZ1", "BZ2"];

    let report = report::full_report(&model, &members, &beams, FrameModel::DEFAULT_COMBO)?;
    print!("{}", report);

    Ok(())
}
