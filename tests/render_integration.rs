//! Posterizer render pass integration tests.

use bevy_ecs::prelude::*;

use dcamfx::components::camera::Camera;
use dcamfx::components::posterizer::{POSTERIZE_SHADER, PosterizerController};
use dcamfx::game;
use dcamfx::resources::appconfig::AppConfig;
use dcamfx::resources::rendergraph::{
    FrameTargets, RecordingGraph, RenderGraph, TextureDesc, UniformValue,
};
use dcamfx::resources::renderpasses::{RenderContext, RenderPass, RenderPassEvent, RenderPassQueue};
use dcamfx::systems::posterizer::{POSTERIZER_PASS_NAME, PosterizerFeature, PosterizerPass};

const DT: f32 = 1.0 / 60.0;

fn make_world() -> (World, Schedule, Entity) {
    let mut world = game::setup_world(AppConfig::new());
    let camera = game::spawn_camera_rig(&mut world);
    (world, game::build_update_schedule(), camera)
}

fn camera(world: &World, entity: Entity) -> Camera {
    *world.get::<Camera>(entity).unwrap()
}

#[test]
fn feature_installs_pass_before_post_processing() {
    let mut queue = RenderPassQueue::new();
    PosterizerFeature::create().add_render_passes(&mut queue);
    assert_eq!(queue.names(), vec![POSTERIZER_PASS_NAME]);
}

#[test]
fn posterizer_blits_camera_color_into_new_texture() {
    let (mut world, mut update, entity) = make_world();
    game::step(&mut world, &mut update, DT);

    let cam = camera(&world, entity);
    let graph = world.resource::<RecordingGraph>();
    assert_eq!(graph.blits().len(), 1);
    let blit = &graph.blits()[0];
    assert_eq!(blit.name, "Posterizer");
    assert_eq!(blit.source, cam.target);
    assert_eq!(Some(blit.destination), cam.output);
    assert_eq!(blit.pass_index, 0);
    assert_eq!(&*blit.material.shader, POSTERIZE_SHADER);
    assert_eq!(
        blit.material.uniforms.get("uLevels"),
        Some(&UniformValue::Int(4))
    );

    let dest = graph.texture_desc(blit.destination).unwrap();
    let src = graph.texture_desc(blit.source).unwrap();
    assert_eq!(dest.name, "Posterizer");
    assert!(!dest.clear_buffer);
    assert_eq!(dest.depth_buffer_bits, 0);
    assert_eq!((dest.width, dest.height), (src.width, src.height));
    assert_eq!(dest.format, src.format);
}

#[test]
fn every_frame_starts_from_the_camera_target() {
    let (mut world, mut update, entity) = make_world();
    for _ in 0..3 {
        game::step(&mut world, &mut update, DT);
    }
    let cam = camera(&world, entity);
    let graph = world.resource::<RecordingGraph>();
    assert_eq!(graph.blits().len(), 1);
    assert_eq!(graph.blits()[0].source, cam.target);
    assert_eq!(graph.texture_count(), 2);
}

#[test]
fn disabled_controller_is_skipped() {
    let (mut world, mut update, entity) = make_world();
    world.resource_mut::<AppConfig>().posterizer.enabled = false;
    game::step(&mut world, &mut update, DT);

    let cam = camera(&world, entity);
    assert_eq!(cam.output, Some(cam.target));
    assert!(world.resource::<RecordingGraph>().blits().is_empty());
}

#[test]
fn camera_without_controller_is_skipped() {
    let (mut world, mut update, entity) = make_world();
    world.entity_mut(entity).remove::<PosterizerController>();
    game::step(&mut world, &mut update, DT);

    let cam = camera(&world, entity);
    assert_eq!(cam.output, Some(cam.target));
    assert!(world.resource::<RecordingGraph>().blits().is_empty());
}

#[test]
fn back_buffer_camera_is_skipped() {
    let (mut world, mut update, _entity) = make_world();
    let target = world
        .resource_mut::<RecordingGraph>()
        .import_texture(TextureDesc::color("BackBuffer", 1280, 720));
    let back = world
        .spawn((Camera::back_buffer(target), PosterizerController::default()))
        .id();
    game::step(&mut world, &mut update, DT);

    assert_eq!(camera(&world, back).output, Some(target));
    // Only the offscreen rig camera was posterized.
    assert_eq!(world.resource::<RecordingGraph>().blits().len(), 1);
}

#[test]
fn config_levels_reach_the_material() {
    let (mut world, mut update, _entity) = make_world();
    world.resource_mut::<AppConfig>().posterizer.levels = 7;
    game::step(&mut world, &mut update, DT);

    let graph = world.resource::<RecordingGraph>();
    assert_eq!(
        graph.blits()[0].material.uniforms.get("uLevels"),
        Some(&UniformValue::Int(7))
    );
}

#[test]
fn pass_records_against_any_graph() {
    let mut world = World::new();
    let entity = world.spawn(PosterizerController::new(3)).id();
    let mut graph = RecordingGraph::new();
    let color = graph.import_texture(TextureDesc::color("Color", 32, 32));
    let mut frame = FrameTargets {
        color,
        is_back_buffer: false,
    };

    let mut pass = PosterizerPass {
        event: RenderPassEvent::BeforeRenderingPostProcessing,
    };
    let written = {
        let mut ctx = RenderContext {
            graph: &mut graph,
            frame: &mut frame,
            camera: world.entity(entity),
        };
        pass.record(&mut ctx)
    };

    assert_eq!(written, Some(frame.color));
    assert_ne!(frame.color, color);
    assert_eq!(graph.blits().len(), 1);
}

#[test]
fn pass_skips_unknown_source_texture() {
    let mut world = World::new();
    let entity = world.spawn(PosterizerController::default()).id();
    let mut graph = RecordingGraph::new();
    let bogus = graph.import_texture(TextureDesc::color("Color", 32, 32));
    let mut empty = RecordingGraph::new();
    let mut frame = FrameTargets {
        color: bogus,
        is_back_buffer: false,
    };

    let mut pass = PosterizerPass {
        event: RenderPassEvent::BeforeRenderingPostProcessing,
    };
    let written = {
        let mut ctx = RenderContext {
            graph: &mut empty,
            frame: &mut frame,
            camera: world.entity(entity),
        };
        pass.record(&mut ctx)
    };

    assert_eq!(written, None);
    assert_eq!(frame.color, bogus);
    assert!(empty.blits().is_empty());
}

#[test]
fn previous_frame_output_is_stale_after_the_next_frame() {
    let (mut world, mut update, entity) = make_world();
    game::step(&mut world, &mut update, DT);
    let first = camera(&world, entity).output.unwrap();

    game::step(&mut world, &mut update, DT);
    let second = camera(&world, entity).output.unwrap();
    assert_ne!(first, second);
    let graph = world.resource::<RecordingGraph>();
    assert!(graph.texture_desc(first).is_none());
    assert_eq!(graph.texture_desc(second).unwrap().name, "Posterizer");
}
