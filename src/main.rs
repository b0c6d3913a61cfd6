use glam::Vec2;
use impulse2d::{renderer::Renderer, world::World};
use rand::Rng;

fn main() {
    env_logger::init();

    let mut world = World::new(Vec2::new(0.0, 500.0));

    let ball = world.add_body(Vec2::new(400.0, 50.0), 1.0, 20.0, 0.8);
    world.add_body(Vec2::new(400.0, 550.0), 0.0, 100.0, 0.2);

    // A few extra balls dropped from above the window so the pair pass has
    // something to do.
    let mut rng = rand::thread_rng();
    let mut extras = vec![];
    for _ in 0..6 {
        let spawn = Vec2::new(rng.gen_range(150.0..650.0), rng.gen_range(-300.0..0.0));
        let handle = world.add_body(
            spawn,
            rng.gen_range(0.5..2.0),
            rng.gen_range(8.0..16.0),
            rng.gen_range(0.4..0.9),
        );
        extras.push((handle, spawn));
    }

    let mut renderer = Renderer::new(world).respawn(ball, 800.0, Vec2::new(400.0, 50.0));
    for (handle, spawn) in extras {
        renderer = renderer.respawn(handle, 800.0, spawn);
    }

    renderer.create_window();
}
