//! Minimal 2D circle physics: bodies fall under gravity, overlaps are
//! resolved with a single-pass positional correction plus restitution
//! impulse, and a glium/winit viewer steps the world once per frame.
//!
//! # Example
//! ```no_run
//! use glam::Vec2;
//! use impulse2d::{renderer::Renderer, world::World};
//!
//! let mut world = World::new(Vec2::new(0.0, 500.0));
//! let ball = world.add_body(Vec2::new(400.0, 50.0), 1.0, 20.0, 0.8);
//! world.add_body(Vec2::new(400.0, 550.0), 0.0, 100.0, 0.2);
//!
//! Renderer::new(world)
//!     .respawn(ball, 800.0, Vec2::new(400.0, 50.0))
//!     .create_window();
//! ```

pub mod body;
pub mod renderer;
pub mod world;

mod collision;
