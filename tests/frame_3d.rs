//! End-to-end tests on a single-storey 3D frame
//!
//! The frame has four fixed-base columns and four top-level beams spanning
//! the global X (8m) and Z (7m) directions, each beam carrying a 10 kN/m
//! gravity line load.

use approx::assert_relative_eq;
use frame3d::prelude::*;

const W: f64 = -10000.0; // N/m, gravity line load on each beam
const SPAN_X: f64 = 8.0;
const SPAN_Z: f64 = 7.0;

fn single_storey_frame() -> FrameModel {
    let mut model = FrameModel::new();

    model
        .add_material("Steel", Material::new(200e9, 77e9, 0.3, 7850.0))
        .unwrap();
    model
        .add_section("Rect300x500", Section::rectangular(0.3, 0.5))
        .unwrap();

    model.add_node("N1", Node::new(0.0, 0.0, 0.0)).unwrap();
    model.add_node("N2", Node::new(SPAN_X, 0.0, 0.0)).unwrap();
    model.add_node("N3", Node::new(0.0, 0.0, SPAN_Z)).unwrap();
    model.add_node("N4", Node::new(SPAN_X, 0.0, SPAN_Z)).unwrap();
    model.add_node("N5", Node::new(0.0, 3.0, 0.0)).unwrap();
    model.add_node("N6", Node::new(SPAN_X, 3.0, 0.0)).unwrap();
    model.add_node("N7", Node::new(0.0, 3.0, SPAN_Z)).unwrap();
    model.add_node("N8", Node::new(SPAN_X, 3.0, SPAN_Z)).unwrap();

    for (name, i, j) in [
        ("C1", "N1", "N5"),
        ("C2", "N2", "N6"),
        ("C3", "N3", "N7"),
        ("C4", "N4", "N8"),
        ("BX1", "N5", "N6"),
        ("BX2", "N7", "N8"),
        ("BZ1", "N5", "N7"),
        ("BZ2", "N6", "N8"),
    ] {
        model
            .add_member(name, Member::new(i, j, "Steel", "Rect300x500"))
            .unwrap();
    }

    for node in ["N1", "N2", "N3", "N4"] {
        model.add_support(node, Support::fixed()).unwrap();
    }

    for beam in ["BX1", "BX2", "BZ1", "BZ2"] {
        model
            .add_member_dist_load(
                beam,
                DistributedLoad::uniform(W, LoadDirection::FY, FrameModel::DEFAULT_CASE),
            )
            .unwrap();
    }

    model
}

fn solved_frame() -> FrameModel {
    let mut model = single_storey_frame();
    model
        .analyze(AnalysisOptions::default().with_statics_check())
        .unwrap();
    model
}

#[test]
fn base_reactions_balance_gravity_load() {
    let model = solved_frame();

    // Total applied: 10 kN/m on 2 x 8m + 2 x 7m of beam
    let total = -W * 2.0 * (SPAN_X + SPAN_Z);

    let mut sum_fy = 0.0;
    let mut sum_fx = 0.0;
    let mut sum_fz = 0.0;
    for node in ["N1", "N2", "N3", "N4"] {
        let rxn = model
            .node_reactions(node, FrameModel::DEFAULT_COMBO)
            .unwrap();
        sum_fy += rxn.fy;
        sum_fx += rxn.fx;
        sum_fz += rxn.fz;
    }

    assert_relative_eq!(sum_fy, total, epsilon = 1.0);
    assert_relative_eq!(sum_fx, 0.0, epsilon = 1.0);
    assert_relative_eq!(sum_fz, 0.0, epsilon = 1.0);
}

#[test]
fn columns_carry_the_full_gravity_load_in_compression() {
    let model = solved_frame();

    let mut sum_axial = 0.0;
    for column in ["C1", "C2", "C3", "C4"] {
        let internal = model
            .member_internal_forces(column, FrameModel::DEFAULT_COMBO)
            .unwrap();
        let axial = internal.axial(0.0).unwrap();
        assert!(axial < 0.0, "{} should be in compression", column);
        sum_axial += axial;
    }

    assert_relative_eq!(sum_axial, W * 2.0 * (SPAN_X + SPAN_Z), epsilon = 1.0);
}

#[test]
fn parallel_beams_share_moments_symmetrically() {
    let model = solved_frame();

    let bx1 = model
        .member_internal_forces("BX1", FrameModel::DEFAULT_COMBO)
        .unwrap();
    let bx2 = model
        .member_internal_forces("BX2", FrameModel::DEFAULT_COMBO)
        .unwrap();
    let bz1 = model
        .member_internal_forces("BZ1", FrameModel::DEFAULT_COMBO)
        .unwrap();
    let bz2 = model
        .member_internal_forces("BZ2", FrameModel::DEFAULT_COMBO)
        .unwrap();

    // The frame is symmetric, so parallel beams see the same diagram
    assert_relative_eq!(bx1.max_moment_z(), bx2.max_moment_z(), epsilon = 1.0);
    assert_relative_eq!(bz1.max_moment_z(), bz2.max_moment_z(), epsilon = 1.0);

    // The longer X-span beams carry the larger moment
    assert!(bx1.max_moment_z().abs() > bz1.max_moment_z().abs());
}

#[test]
fn gravity_bending_is_about_local_z() {
    let model = solved_frame();

    for beam in ["BX1", "BX2", "BZ1", "BZ2"] {
        let internal = model
            .member_internal_forces(beam, FrameModel::DEFAULT_COMBO)
            .unwrap();
        let mid = internal.length() / 2.0;

        let mz = internal.moment_z(mid).unwrap();
        let my = internal.moment_y(mid).unwrap();
        let t = internal.torque(mid).unwrap();

        assert!(
            mz.abs() > 10.0 * my.abs(),
            "{}: Mz should dominate My at midspan",
            beam
        );
        assert!(
            mz.abs() > 10.0 * t.abs(),
            "{}: Mz should dominate torsion at midspan",
            beam
        );
    }
}

#[test]
fn beam_end_moments_lie_between_simple_and_fixed() {
    let model = solved_frame();

    let internal = model
        .member_internal_forces("BX1", FrameModel::DEFAULT_COMBO)
        .unwrap();

    // Column rotational restraint puts the end moment between the pinned
    // (zero) and fully fixed (wL^2/12) bounds
    let fixed_end = (W * SPAN_X * SPAN_X / 12.0).abs();
    let end_mz = internal.moment_z(0.0).unwrap().abs();

    assert!(end_mz > 0.0 && end_mz < fixed_end);

    // Symmetric span: both ends match
    assert_relative_eq!(
        internal.moment_z(0.0).unwrap(),
        internal.moment_z(SPAN_X).unwrap(),
        epsilon = 1.0
    );
}

#[test]
fn queries_at_member_ends_are_valid() {
    let model = solved_frame();

    let internal = model
        .member_internal_forces("BX1", FrameModel::DEFAULT_COMBO)
        .unwrap();
    let length = model.member_length("BX1").unwrap();
    assert_relative_eq!(length, SPAN_X, epsilon = 1e-9);

    assert!(internal.at(0.0).is_ok());
    assert!(internal.at(length).is_ok());

    assert!(matches!(
        internal.moment_z(length + 0.1),
        Err(FrameError::OutOfRange { .. })
    ));
    assert!(matches!(
        internal.moment_z(-0.1),
        Err(FrameError::OutOfRange { .. })
    ));

    // End accessors agree with the diagram evaluated at the ends
    let i_end = model
        .member_forces_i("BX1", FrameModel::DEFAULT_COMBO)
        .unwrap();
    let at_zero = internal.at(0.0).unwrap();
    assert_relative_eq!(i_end.moment_z, at_zero.moment_z, epsilon = 1.0);
}

#[test]
fn results_gated_on_solve_state() {
    let mut model = single_storey_frame();

    assert!(matches!(
        model.node_reactions("N1", FrameModel::DEFAULT_COMBO),
        Err(FrameError::NotAnalyzed)
    ));

    model.analyze_linear().unwrap();
    assert!(model.is_analyzed());
    assert!(model
        .node_reactions("N1", FrameModel::DEFAULT_COMBO)
        .is_ok());

    // Any mutation drops the solution
    model
        .add_node_load("N8", NodeLoad::fy(-5000.0, FrameModel::DEFAULT_CASE))
        .unwrap();
    assert!(!model.is_analyzed());
    assert!(matches!(
        model.member_internal_forces("BX1", FrameModel::DEFAULT_COMBO),
        Err(FrameError::NotAnalyzed)
    ));

    // Re-solving picks up the new load
    model.analyze_linear().unwrap();
    let mut sum_fy = 0.0;
    for node in ["N1", "N2", "N3", "N4"] {
        sum_fy += model
            .node_reactions(node, FrameModel::DEFAULT_COMBO)
            .unwrap()
            .fy;
    }
    assert_relative_eq!(sum_fy, -W * 2.0 * (SPAN_X + SPAN_Z) + 5000.0, epsilon = 1.0);
}

#[test]
fn entities_readable_by_name_only() {
    let model = solved_frame();

    assert_eq!(model.node("N2").unwrap().coords(), [SPAN_X, 0.0, 0.0]);
    assert_eq!(model.member("BX1").unwrap().i_node, "N5");
    assert_eq!(model.support("N1").unwrap().num_restrained(), 6);
    assert!(model.material("Steel").is_some());
    assert!(model.section("Rect300x500").is_some());
    assert!(model.node("Nope").is_none());
    assert!(model.support("N5").is_none());
}

#[test]
fn unknown_names_are_reported() {
    let model = solved_frame();

    assert!(matches!(
        model.member_internal_forces("Nope", FrameModel::DEFAULT_COMBO),
        Err(FrameError::MemberNotFound(_))
    ));
    assert!(matches!(
        model.member_internal_forces("BX1", "Nope"),
        Err(FrameError::LoadCombinationNotFound(_))
    ));
    assert!(matches!(
        model.node_reactions("Nope", FrameModel::DEFAULT_COMBO),
        Err(FrameError::NodeNotFound(_))
    ));
}
