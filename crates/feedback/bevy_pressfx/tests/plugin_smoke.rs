use bevy::prelude::*;
use bevy_pressfx::{FeedbackExclude, PressFeedback, PressFeedbackPlugin};
use pressfx_core::{Config, Phase};

/// Zero durations make transitions complete on the tick that starts them,
/// which keeps these tests independent of wall-clock frame deltas.
fn instant_config() -> Config {
    Config {
        duration: 0.0,
        punch_duration: 0.0,
        ..Default::default()
    }
}

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(PressFeedbackPlugin);
    app
}

fn spawn_button(app: &mut App, cfg: Config) -> (Entity, Entity) {
    let icon = app
        .world_mut()
        .spawn((
            Name::new("icon"),
            BackgroundColor(Color::srgba(0.8, 0.6, 0.4, 1.0)),
        ))
        .id();
    let root = app
        .world_mut()
        .spawn((
            Name::new("button"),
            Transform::default(),
            Interaction::None,
            PressFeedback::new(cfg),
        ))
        .id();
    app.world_mut().entity_mut(root).add_child(icon);
    (root, icon)
}

fn bg_rgba(app: &App, entity: Entity) -> [f32; 4] {
    let srgba = app
        .world()
        .get::<BackgroundColor>(entity)
        .expect("background color present")
        .0
        .to_srgba();
    [srgba.red, srgba.green, srgba.blue, srgba.alpha]
}

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// it should bind the subtree on the first update
#[test]
fn plugin_binds_on_first_update() {
    let mut app = test_app();
    let (root, _icon) = spawn_button(&mut app, Config::default());
    app.update();

    let feedback = app.world().get::<PressFeedback>(root).unwrap();
    assert_eq!(feedback.engine.bound_images(), ["icon"]);
    assert_eq!(feedback.engine.target().map(String::as_str), Some("button"));
    assert_eq!(feedback.engine.resting_scale(), [1.0, 1.0, 1.0]);
}

/// it should darken on press and restore on release via Interaction changes
#[test]
fn interaction_drives_press_and_release() {
    let mut app = test_app();
    let (root, icon) = spawn_button(&mut app, instant_config());
    app.update();

    app.world_mut().entity_mut(root).insert(Interaction::Pressed);
    app.update();
    {
        let feedback = app.world().get::<PressFeedback>(root).unwrap();
        assert_eq!(feedback.engine.phase(), Phase::Pressed);
    }
    let pressed = bg_rgba(&app, icon);
    approx(pressed[0], 0.8 * 0.85, 1e-5);
    approx(pressed[1], 0.6 * 0.85, 1e-5);
    approx(pressed[3], 1.0, 1e-6);
    let scale = app.world().get::<Transform>(root).unwrap().scale;
    approx(scale.x, 0.95, 1e-6);

    app.world_mut().entity_mut(root).insert(Interaction::None);
    app.update();
    {
        let feedback = app.world().get::<PressFeedback>(root).unwrap();
        assert_eq!(feedback.engine.phase(), Phase::Idle);
    }
    let restored = bg_rgba(&app, icon);
    approx(restored[0], 0.8, 1e-5);
    approx(restored[1], 0.6, 1e-5);
    approx(restored[2], 0.4, 1e-5);
    let scale = app.world().get::<Transform>(root).unwrap().scale;
    assert_eq!(scale, Vec3::ONE);
}

/// it should leave FeedbackExclude-marked entities untouched
#[test]
fn excluded_entities_keep_their_color() {
    let mut app = test_app();
    let (root, _icon) = spawn_button(&mut app, instant_config());
    let badge = app
        .world_mut()
        .spawn((
            Name::new("badge"),
            BackgroundColor(Color::srgba(1.0, 0.0, 0.0, 1.0)),
            FeedbackExclude,
        ))
        .id();
    app.world_mut().entity_mut(root).add_child(badge);
    app.update();

    app.world_mut().entity_mut(root).insert(Interaction::Pressed);
    app.update();

    let feedback = app.world().get::<PressFeedback>(root).unwrap();
    assert!(!feedback
        .engine
        .bound_images()
        .contains(&"badge".to_string()));
    assert_eq!(bg_rgba(&app, badge), [1.0, 0.0, 0.0, 1.0]);
}

/// it should pick up spawned descendants after request_rebind
#[test]
fn rebind_discovers_new_descendants() {
    let mut app = test_app();
    let (root, _icon) = spawn_button(&mut app, instant_config());
    app.update();

    let label = app
        .world_mut()
        .spawn((
            Name::new("label"),
            Text::from_section(
                "Press",
                TextStyle {
                    color: Color::srgba(0.1, 0.1, 0.1, 1.0),
                    ..Default::default()
                },
            ),
        ))
        .id();
    app.world_mut().entity_mut(root).add_child(label);
    app.world_mut()
        .get_mut::<PressFeedback>(root)
        .unwrap()
        .request_rebind();
    app.update();

    let feedback = app.world().get::<PressFeedback>(root).unwrap();
    assert_eq!(feedback.engine.bound_texts(), ["label"]);
    assert_eq!(
        feedback.engine.original_color("label"),
        Some([0.1, 0.1, 0.1, 1.0])
    );
}

/// it should skip despawned visuals without panicking
#[test]
fn despawned_visual_is_skipped() {
    let mut app = test_app();
    let (root, icon) = spawn_button(&mut app, instant_config());
    app.update();

    app.world_mut().entity_mut(root).insert(Interaction::Pressed);
    app.update();

    app.world_mut().entity_mut(icon).despawn();
    app.world_mut().entity_mut(root).insert(Interaction::None);
    app.update();

    let feedback = app.world().get::<PressFeedback>(root).unwrap();
    assert_eq!(feedback.engine.phase(), Phase::Idle);
    assert_eq!(
        app.world().get::<Transform>(root).unwrap().scale,
        Vec3::ONE
    );
}

/// it should restore baseline when deactivated while pressed
#[test]
fn set_active_false_restores_baseline() {
    let mut app = test_app();
    let (root, icon) = spawn_button(&mut app, instant_config());
    app.update();

    app.world_mut().entity_mut(root).insert(Interaction::Pressed);
    app.update();
    approx(bg_rgba(&app, icon)[0], 0.8 * 0.85, 1e-5);

    app.world_mut()
        .get_mut::<PressFeedback>(root)
        .unwrap()
        .set_active(false);
    app.update();

    approx(bg_rgba(&app, icon)[0], 0.8, 1e-5);
    assert_eq!(
        app.world().get::<Transform>(root).unwrap().scale,
        Vec3::ONE
    );
    let feedback = app.world().get::<PressFeedback>(root).unwrap();
    assert!(!feedback.engine.is_active());
}
