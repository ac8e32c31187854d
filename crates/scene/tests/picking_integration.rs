//! End-to-end picking: camera -> screen ray -> registry scan.

use glam::Vec3;
use groove_scene::camera::Perspective;
use groove_scene::{Camera, Scene, Transform, pick_closest, ray_from_screen};

const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;

fn projection() -> Perspective {
    Perspective::new(45.0, WIDTH / HEIGHT, 0.1, 100.0).expect("valid projection")
}

#[test]
fn center_click_picks_the_object_straight_ahead() {
    let camera = Camera::first_person(Vec3::new(0.0, 0.0, 5.0), -90.0, 0.0, projection());
    let mut scene = Scene::new();
    let expected = scene.push(Transform::new().with_position(Vec3::new(0.0, 0.0, -3.0)));

    let ray = ray_from_screen(&camera, (WIDTH / 2.0, HEIGHT / 2.0), WIDTH, HEIGHT);
    let hit = pick_closest(&ray, scene.objects()).expect("the cube sits on the view axis");

    assert_eq!(hit.index, expected);
    // Unit cube at z = -3, camera at z = 5: entry face at z = -2.5.
    assert!((hit.distance - 7.5).abs() < 1e-3, "distance {}", hit.distance);
}

#[test]
fn nearer_of_two_lined_up_objects_wins() {
    let camera = Camera::first_person(Vec3::new(0.0, 0.0, 5.0), -90.0, 0.0, projection());
    let mut scene = Scene::new();
    let _far = scene.push(Transform::new().with_position(Vec3::new(0.0, 0.0, -3.0)));
    let near = scene.push(Transform::new().with_position(Vec3::ZERO));

    let ray = ray_from_screen(&camera, (WIDTH / 2.0, HEIGHT / 2.0), WIDTH, HEIGHT);
    let hit = pick_closest(&ray, scene.objects()).expect("both cubes are on the view axis");

    assert_eq!(hit.index, near);
    assert!((hit.distance - 4.5).abs() < 1e-3, "distance {}", hit.distance);
}

#[test]
fn click_into_empty_space_is_a_no_op() {
    let camera = Camera::first_person(Vec3::new(0.0, 0.0, 5.0), -90.0, 0.0, projection());
    let mut scene = Scene::new();
    let _ = scene.push(Transform::new().with_position(Vec3::new(0.0, 0.0, -3.0)));

    // Top-left corner: the ray diverges well away from the cube.
    let ray = ray_from_screen(&camera, (0.0, 0.0), WIDTH, HEIGHT);
    assert!(pick_closest(&ray, scene.objects()).is_none());
}

#[test]
fn look_at_camera_picks_its_own_target() {
    let camera = Camera::look_at(Vec3::new(4.0, 3.0, 5.0), Vec3::ZERO, projection());
    let mut scene = Scene::new();
    let target = scene.push(Transform::new());

    let ray = ray_from_screen(&camera, (WIDTH / 2.0, HEIGHT / 2.0), WIDTH, HEIGHT);
    let hit = pick_closest(&ray, scene.objects()).expect("the target cube is dead center");
    assert_eq!(hit.index, target);
}

#[test]
fn picking_tracks_a_moved_object() {
    let camera = Camera::first_person(Vec3::new(0.0, 0.0, 5.0), -90.0, 0.0, projection());
    let mut scene = Scene::new();
    let index = scene.push(Transform::new().with_position(Vec3::new(0.0, 0.0, -3.0)));
    let ray = ray_from_screen(&camera, (WIDTH / 2.0, HEIGHT / 2.0), WIDTH, HEIGHT);
    assert!(pick_closest(&ray, scene.objects()).is_some());

    // Slide the object off the view axis; the same click now misses.
    if let Some(object) = scene.get_mut(index) {
        object.position.x = 10.0;
    }
    assert!(pick_closest(&ray, scene.objects()).is_none());
}
