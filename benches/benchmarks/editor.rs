use criterion::{BatchSize, Criterion, criterion_group};
use polyedit::{Editor, Tool};

use super::random_ring;

/// Returns an editor holding a grid of disjoint regions.
fn populated_editor() -> Editor {
    let mut editor = Editor::default();
    (0..10).for_each(|row| {
        (0..10).for_each(|column| {
            editor.commit(random_ring([column as f64 * 25., row as f64 * 25.], 32));
        });
    });

    editor
}

pub fn commits(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("commits");

    group.bench_function("add over a region", |b| {
        b.iter_batched(
            || (populated_editor(), random_ring([110., 110.], 32)),
            |(mut editor, drawing)| editor.commit(drawing),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("remove over a region", |b| {
        b.iter_batched(
            || {
                let mut editor = populated_editor();
                editor.select_tool(Tool::Remove);
                (editor, random_ring([110., 110.], 32))
            },
            |(mut editor, drawing)| editor.commit(drawing),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("undo and redo", |b| {
        b.iter_batched(
            populated_editor,
            |mut editor| {
                while editor.undo() {}
                while editor.redo() {}
                editor
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, commits);
