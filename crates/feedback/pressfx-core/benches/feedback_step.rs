use criterion::{criterion_group, criterion_main, Criterion};
use pressfx_core::{Command, Config, Engine, Inputs};
use pressfx_test_fixtures::MockScene;

fn wide_scene() -> MockScene {
    let mut scene = MockScene::new();
    for i in 0..16 {
        scene = scene.with_image(&format!("image-{i}"), [1.0, 1.0, 1.0, 1.0]);
    }
    for i in 0..4 {
        scene = scene.with_text(&format!("text-{i}"), [0.1, 0.1, 0.1, 1.0]);
    }
    scene
}

fn cmd(command: Command) -> Inputs {
    let mut inputs = Inputs::default();
    inputs.commands.push(command);
    inputs
}

fn bench_press_release_cycle(c: &mut Criterion) {
    c.bench_function("press_release_cycle_20_visuals", |b| {
        let mut scene = wide_scene();
        let mut engine = Engine::new(Config::default());
        engine.bind(&mut scene);
        b.iter(|| {
            engine.update(0.0, cmd(Command::PointerDown), &mut scene);
            for _ in 0..7 {
                engine.update(1.0 / 60.0, Inputs::default(), &mut scene);
            }
            engine.update(0.0, cmd(Command::PointerUp), &mut scene);
            for _ in 0..10 {
                engine.update(1.0 / 60.0, Inputs::default(), &mut scene);
            }
        });
    });
}

fn bench_bind(c: &mut Criterion) {
    c.bench_function("bind_20_visuals", |b| {
        let mut scene = wide_scene();
        let mut engine = Engine::new(Config::default());
        b.iter(|| {
            engine.bind(&mut scene);
        });
    });
}

criterion_group!(benches, bench_press_release_cycle, bench_bind);
criterion_main!(benches);
