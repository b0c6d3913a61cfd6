use std::{rc::Rc, time::Instant};

use glam::{Mat4, Vec2};
use glium::{glutin::surface::WindowSurface, implement_vertex, uniform, Display, Frame, Surface};
use log::debug;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

use crate::{body::BodyHandle, world::World};

mod draw;
mod shapes;

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

/// Frame hitches are capped at this dt so a long stall can't blow up the
/// integration.
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Copy, Clone, Debug)]
struct Vertex {
    position: [f32; 2],
    color: [f32; 4],
}
implement_vertex!(Vertex, position, color);

/// Driver-level reset: once the tracked body's vertical position passes
/// `bound_y`, it is put back at `spawn` with zero velocity. Applied after
/// the physics step through the world's direct-write accessor.
#[derive(Debug, Clone, Copy)]
pub struct RespawnRule {
    pub body: BodyHandle,
    pub bound_y: f32,
    pub spawn: Vec2,
}

/// The step driver: owns the world and the frame loop.
///
/// Each frame it measures elapsed time, clamps it, steps the world once on
/// the render thread, applies respawn rules and redraws. All frame
/// diagnostics live here; the world itself never logs.
pub struct Renderer {
    world: World,
    respawn_rules: Vec<RespawnRule>,
}

impl Renderer {
    pub fn new(world: World) -> Self {
        Self {
            world,
            respawn_rules: Vec::new(),
        }
    }

    /// Tracks `body` with a respawn rule.
    pub fn respawn(mut self, body: BodyHandle, bound_y: f32, spawn: Vec2) -> Self {
        self.respawn_rules.push(RespawnRule {
            body,
            bound_y,
            spawn,
        });
        self
    }

    /// Opens the window and runs the frame loop until a close is requested.
    pub fn create_window(self) {
        let event_loop = winit::event_loop::EventLoopBuilder::new().build();

        let (window, display) = glium::backend::glutin::SimpleWindowBuilder::new()
            .with_title("impulse2d")
            .with_inner_size(WINDOW_WIDTH, WINDOW_HEIGHT)
            .build(&event_loop);

        self.run_render_loop(event_loop, display, window);
    }

    fn run_render_loop(
        mut self,
        event_loop: EventLoop<()>,
        display: Display<WindowSurface>,
        _window: Window,
    ) {
        let mut last_frame = Instant::now();
        let display_rc = Rc::new(display);

        event_loop.run(move |event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            #[allow(clippy::single_match)]
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                        *control_flow = ControlFlow::Exit;
                    }
                    _ => (),
                },
                Event::MainEventsCleared => {
                    let dt = last_frame.elapsed().as_secs_f32().min(MAX_FRAME_DT);
                    last_frame = Instant::now();

                    self.world.step(dt);
                    self.apply_respawn_rules();
                    self.log_frame(dt);

                    self.draw_bodies(&display_rc);
                }
                _ => (),
            }
        });
    }

    fn apply_respawn_rules(&mut self) {
        for rule in &self.respawn_rules {
            if self.world.body(rule.body).position.y > rule.bound_y {
                debug!(
                    "respawning body {} at ({}, {})",
                    rule.body.index(),
                    rule.spawn.x,
                    rule.spawn.y
                );
                let body = self.world.body_mut(rule.body);
                body.position = rule.spawn;
                body.velocity = Vec2::ZERO;
            }
        }
    }

    fn log_frame(&self, dt: f32) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        debug!("physics step (dt: {dt})");
        for rule in &self.respawn_rules {
            let body = self.world.body(rule.body);
            debug!(
                "body {} position: ({}, {})",
                rule.body.index(),
                body.position.x,
                body.position.y
            );
        }
    }

    fn draw_bodies(&self, display: &Display<WindowSurface>) {
        let mut target = display.draw();
        target.clear_color(0.0, 0.0, 0.0, 1.0);

        let uniforms = uniform! {
            projection: build_ortho_matrix(&target).to_cols_array_2d()
        };

        let params = glium::DrawParameters::default();

        draw::draw_bodies(&self.world, &mut target, display, &uniforms, &params);

        target.finish().unwrap();
    }
}

fn build_ortho_matrix(target: &Frame) -> Mat4 {
    let (width, height) = target.get_dimensions();
    // Pixel coordinates with y growing downward, same as the physics space.
    Mat4::orthographic_rh_gl(0.0, width as f32, height as f32, 0.0, -1.0, 1.0)
}
