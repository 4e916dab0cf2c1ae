use glam::DVec3;
use spacetime_observer::metrics::schwarzschild::{circular_orbit_period, circular_orbit_speed};
use spacetime_observer::observer::is_right_handed_orthonormal;
use spacetime_observer::{
    FrameScheduler, ObserverMode, OrbitControls, Parameters, PlanetParameters, RenderDecision,
    RenderStage, UniformSet, ViewTransform,
};

#[derive(Default)]
struct Frames(Vec<UniformSet>);

impl RenderStage for Frames {
    fn render(&mut self, uniforms: &UniformSet) -> anyhow::Result<()> {
        self.0.push(*uniforms);
        Ok(())
    }
}

const VIEWPORT: (u32, u32) = (1280, 720);

fn orbit_params(radius: f64, inclination_deg: f64) -> Parameters {
    Parameters {
        observer: ObserverMode::Orbiting {
            radius,
            inclination_deg,
        },
        gravitational_time_dilation: false,
        time_scale: 1.0,
        ..Default::default()
    }
}

#[test]
fn orbit_of_radius_eleven_closes_after_one_period() {
    let mut scheduler = FrameScheduler::new(orbit_params(11.0, 0.0), VIEWPORT).expect("scheduler");
    let mut frames = Frames::default();
    let view = OrbitControls::default().view_transform();

    let period = circular_orbit_period(11.0);
    let steps = 1000;
    let dt = period / steps as f64;

    scheduler.tick(dt, &view, VIEWPORT, &mut frames).expect("tick");
    let start = scheduler.observer().position;
    for _ in 0..steps {
        scheduler.tick(dt, &view, VIEWPORT, &mut frames).expect("tick");
    }
    assert!((scheduler.observer().position - start).length() < 1e-6);
    assert_eq!(frames.0.len(), steps + 1);
}

#[test]
fn static_camera_along_negative_z_places_observer_at_plus_z() {
    let params = Parameters {
        observer: ObserverMode::Static { distance: 11.0 },
        ..Default::default()
    };
    let mut scheduler = FrameScheduler::new(params, VIEWPORT).expect("scheduler");
    let mut frames = Frames::default();
    let view = ViewTransform::look_at(DVec3::new(0.0, 0.0, 2.0), DVec3::ZERO, DVec3::Y);

    scheduler.tick(0.016, &view, VIEWPORT, &mut frames).expect("tick");

    let observer = scheduler.observer();
    assert!((observer.position - DVec3::new(0.0, 0.0, 11.0)).length() < 1e-12);
    assert_eq!(observer.velocity, DVec3::ZERO);
    assert_eq!(frames.0[0].cam_pos, observer.position);
}

#[test]
fn zero_step_leaves_state_bit_identical() {
    let mut scheduler = FrameScheduler::new(Parameters::default(), VIEWPORT).expect("scheduler");
    let mut frames = Frames::default();
    let view = OrbitControls::default().view_transform();
    for _ in 0..10 {
        scheduler.tick(0.02, &view, VIEWPORT, &mut frames).expect("tick");
    }
    let before = scheduler.observer().clone();
    scheduler.tick(0.0, &view, VIEWPORT, &mut frames).expect("tick");
    assert_eq!(*scheduler.observer(), before);
}

#[test]
fn modes_own_their_velocity() {
    let mut controls = OrbitControls::default();
    let mut frames = Frames::default();
    let mut params = orbit_params(7.0, -10.0);
    params.gravitational_time_dilation = true;
    let mut scheduler = FrameScheduler::new(params, VIEWPORT).expect("scheduler");

    for round in 0..6 {
        for _ in 0..25 {
            controls.drag(3.0, -1.0);
            scheduler
                .tick(0.05, &controls.view_transform(), VIEWPORT, &mut frames)
                .expect("tick");
            let observer = scheduler.observer();
            match scheduler.parameters().observer {
                ObserverMode::Static { .. } => assert_eq!(observer.velocity, DVec3::ZERO),
                ObserverMode::Orbiting { radius, .. } => {
                    let expected = circular_orbit_speed(radius);
                    assert!((observer.velocity.length() - expected).abs() < 1e-12);
                }
            }
            assert!(is_right_handed_orthonormal(&observer.orientation, 1e-9));
        }
        let mut next = *scheduler.parameters();
        next.observer = next.observer.toggled((round * 10) as f64);
        scheduler.set_parameters(next).expect("toggle");
    }
}

#[test]
fn paused_scene_still_follows_orbit_edits() {
    let mut params = Parameters {
        observer: ObserverMode::Static { distance: 11.0 },
        time_scale: 0.0,
        ..Default::default()
    };
    let mut scheduler = FrameScheduler::new(params, VIEWPORT).expect("scheduler");
    let mut frames = Frames::default();
    let view = OrbitControls::default().view_transform();
    scheduler.tick(0.016, &view, VIEWPORT, &mut frames).expect("tick");

    params.observer = params.observer.toggled(-10.0);
    scheduler.set_parameters(params).expect("switch to orbit");
    for _ in 0..5 {
        scheduler.tick(0.016, &view, VIEWPORT, &mut frames).expect("tick");
    }
    let observer = scheduler.observer();
    assert!((observer.velocity.length() - circular_orbit_speed(11.0)).abs() < 1e-12);
    let expected = observer.orbital_frame().expect("frame") * view.look_basis().expect("basis");
    assert!(observer.orientation.abs_diff_eq(expected, 1e-12));

    params.observer = ObserverMode::Orbiting {
        radius: 20.0,
        inclination_deg: -10.0,
    };
    scheduler.set_parameters(params).expect("edit radius");
    scheduler.tick(0.016, &view, VIEWPORT, &mut frames).expect("tick");
    let observer = scheduler.observer();
    assert!((observer.position.length() - 20.0).abs() < 1e-12);
    assert_eq!(frames.0.last().expect("frame").cam_pos, observer.position);
}

#[test]
fn static_scene_renders_only_on_camera_or_config_change() {
    let params = Parameters {
        observer: ObserverMode::Static { distance: 11.0 },
        planet: PlanetParameters {
            enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut scheduler = FrameScheduler::new(params, VIEWPORT).expect("scheduler");
    assert!(!scheduler.has_moving_parts());
    let mut frames = Frames::default();
    let mut controls = OrbitControls::default();

    let mut decisions = Vec::new();
    for tick in 0..12 {
        if tick == 4 {
            controls.drag(5.0, 0.0);
        }
        if tick == 8 {
            scheduler.mark_dirty();
        }
        decisions.push(
            scheduler
                .tick(0.016, &controls.view_transform(), VIEWPORT, &mut frames)
                .expect("tick"),
        );
    }

    let rendered: Vec<usize> = decisions
        .iter()
        .enumerate()
        .filter(|(_, d)| d.rendered())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(rendered, vec![0, 4, 8]);
    assert!(decisions
        .iter()
        .all(|d| d.rendered() || *d == RenderDecision::Skipped));
    assert!(frames.0.iter().all(|u| u.resolution.x == 1280.0));
}
