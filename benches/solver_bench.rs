use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frame3d::prelude::*;

fn cantilever_model() -> FrameModel {
    let mut model = FrameModel::new();
    model.add_material("Steel", Material::steel()).unwrap();
    model
        .add_section("S", Section::rectangular(0.3, 0.5))
        .unwrap();
    model.add_node("N1", Node::new(0.0, 0.0, 0.0)).unwrap();
    model.add_node("N2", Node::new(10.0, 0.0, 0.0)).unwrap();
    model
        .add_member("M1", Member::new("N1", "N2", "Steel", "S"))
        .unwrap();
    model.add_support("N1", Support::fixed()).unwrap();
    model
        .add_node_load("N2", NodeLoad::fy(-10000.0, FrameModel::DEFAULT_CASE))
        .unwrap();
    model
}

/// Multi-storey frame: a column line per grid point, beams along X and Z at
/// every level
fn frame_model(storeys: usize, bays: usize) -> FrameModel {
    let mut model = FrameModel::new();
    model.add_material("Steel", Material::steel()).unwrap();
    model
        .add_section("S", Section::rectangular(0.3, 0.5))
        .unwrap();

    let span = 6.0;
    let height = 3.0;

    for level in 0..=storeys {
        for ix in 0..=bays {
            for iz in 0..=bays {
                let name = format!("N{}-{}-{}", level, ix, iz);
                model
                    .add_node(
                        &name,
                        Node::new(ix as f64 * span, level as f64 * height, iz as f64 * span),
                    )
                    .unwrap();
            }
        }
    }

    for level in 1..=storeys {
        for ix in 0..=bays {
            for iz in 0..=bays {
                let below = format!("N{}-{}-{}", level - 1, ix, iz);
                let here = format!("N{}-{}-{}", level, ix, iz);
                model
                    .add_member(
                        &format!("C{}-{}-{}", level, ix, iz),
                        Member::new(&below, &here, "Steel", "S"),
                    )
                    .unwrap();

                if ix > 0 {
                    let left = format!("N{}-{}-{}", level, ix - 1, iz);
                    let name = format!("BX{}-{}-{}", level, ix, iz);
                    model
                        .add_member(&name, Member::new(&left, &here, "Steel", "S"))
                        .unwrap();
                    model
                        .add_member_dist_load(
                            &name,
                            DistributedLoad::uniform(
                                -10000.0,
                                LoadDirection::FY,
                                FrameModel::DEFAULT_CASE,
                            ),
                        )
                        .unwrap();
                }
                if iz > 0 {
                    let back = format!("N{}-{}-{}", level, ix, iz - 1);
                    let name = format!("BZ{}-{}-{}", level, ix, iz);
                    model
                        .add_member(&name, Member::new(&back, &here, "Steel", "S"))
                        .unwrap();
                    model
                        .add_member_dist_load(
                            &name,
                            DistributedLoad::uniform(
                                -10000.0,
                                LoadDirection::FY,
                                FrameModel::DEFAULT_CASE,
                            ),
                        )
                        .unwrap();
                }
            }
        }
    }

    for ix in 0..=bays {
        for iz in 0..=bays {
            model
                .add_support(&format!("N0-{}-{}", ix, iz), Support::fixed())
                .unwrap();
        }
    }

    model
}

fn bench_cantilever(c: &mut Criterion) {
    c.bench_function("cantilever_solve", |b| {
        b.iter(|| {
            let mut model = cantilever_model();
            model.analyze_linear().unwrap();
            black_box(model)
        })
    });
}

fn bench_frame(c: &mut Criterion) {
    c.bench_function("frame_3x3_solve", |b| {
        b.iter(|| {
            let mut model = frame_model(3, 3);
            model.analyze_linear().unwrap();
            black_box(model)
        })
    });
}

fn bench_internal_force_scan(c: &mut Criterion) {
    let mut model = frame_model(2, 2);
    model.analyze_linear().unwrap();

    c.bench_function("max_moment_scan", |b| {
        b.iter(|| {
            let internal = model
                .member_internal_forces("BX1-1-0", FrameModel::DEFAULT_COMBO)
                .unwrap();
            black_box(internal.max_moment_z())
        })
    });
}

criterion_group!(
    benches,
    bench_cantilever,
    bench_frame,
    bench_internal_force_scan
);
criterion_main!(benches);
