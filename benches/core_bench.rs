use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rml_viewer::app::ToolManager;
use rml_viewer::core::canonical_size;
use rml_viewer::{ElementId, ElementTree, Orientation, DEVICE_FRAMES};
use std::hint::black_box;

fn bench_canonical_size(c: &mut Criterion) {
    c.bench_function("canonical_size_all_frames", |b| {
        b.iter(|| {
            let mut area = 0u64;
            for frame in &DEVICE_FRAMES {
                for orientation in [Orientation::Portrait, Orientation::Landscape] {
                    let (w, h) = canonical_size(
                        black_box(frame.width),
                        black_box(frame.height),
                        orientation,
                    );
                    area += u64::from(w) * u64::from(h);
                }
            }
            black_box(area)
        })
    });
}

fn build_synthetic_tree(element_count: usize) -> ElementTree {
    let mut tree = ElementTree::new();
    let root = tree.push(None, "rml", None, Vec::new());
    let body = tree.push(Some(root), "body", None, Vec::new());
    let mut parent = body;

    for index in 0..element_count {
        let id = tree.push(
            Some(parent),
            "div",
            Some(format!("el-{index}")),
            vec!["panel".to_string()],
        );
        // alle 8 Elemente eine Ebene tiefer
        if index % 8 == 7 {
            parent = id;
        }
    }

    tree
}

fn bench_click_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("click_dispatch");

    for &element_count in &[100usize, 10_000usize] {
        let tree = build_synthetic_tree(element_count);
        let targets: Vec<ElementId> = (0..tree.len() as u32).step_by(7).map(ElementId).collect();

        for tool in ["select", "inspect"] {
            let mut manager = ToolManager::with_default_tools();
            if manager.set_current_tool(tool).is_err() {
                continue;
            }

            group.bench_with_input(
                BenchmarkId::new(tool, element_count),
                &tree,
                |b, tree| {
                    b.iter(|| {
                        for element in &targets {
                            black_box(manager.dispatch_element_clicked(black_box(*element), tree));
                        }
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_canonical_size, bench_click_dispatch);
criterion_main!(benches);
