use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::Duration;
use waypoints::test_utils::MockHost;
use waypoints::{Direction, WaypointConfig, WaypointOptions, WaypointSession};

fn unthrottled() -> WaypointSession {
    WaypointSession::new(WaypointConfig {
        options: WaypointOptions {
            throttle: Duration::ZERO,
            ..Default::default()
        },
        ..Default::default()
    })
}

fn navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    let setup = || {
        let line = "call(a, b) + x[i] == \"str\" or done;\n".repeat(60);
        MockHost::new(&line)
    };

    group.bench_function("advance_forward_cached", |b| {
        b.iter_batched(
            setup,
            |mut host| {
                let mut session = unthrottled();
                for _ in 0..500 {
                    black_box(session.advance(&mut host, Direction::Forward));
                    session.acknowledge_move();
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("rebuild_after_edit", |b| {
        b.iter_batched(
            setup,
            |mut host| {
                let mut session = unthrottled();
                for i in 0..50 {
                    host.edit_line(i, "let y = (a, b) >> 2;");
                    session.on_edit();
                    black_box(session.refresh(&host));
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, navigation);
criterion_main!(benches);
