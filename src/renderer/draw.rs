use glium::{
    glutin::surface::WindowSurface,
    uniforms::{AsUniformValue, Uniforms, UniformsStorage},
    Display, DrawParameters, Frame, Surface,
};

use super::{shapes, Vertex};
use crate::world::World;

static VERTEX_SHADER_SRC: &str = r#"
#version 140

in vec2 position;
in vec4 color;
out vec4 vertex_color;

uniform mat4 projection;

void main() {
    vertex_color = color;
    gl_Position = projection * vec4(position, 0.0, 1.0);
}
"#;

static FRAGMENT_SHADER_SRC: &str = r#"
#version 140

in vec4 vertex_color;
out vec4 color;

void main() {
    color = vec4(vertex_color);
}
"#;

const ANCHOR_COLOR: [f32; 4] = [0.2, 0.8, 0.2, 1.0];
const BODY_COLOR: [f32; 4] = [0.9, 0.2, 0.2, 1.0];

const CIRCLE_RESOLUTION: usize = 48;

/// Draws every body as a filled circle of its own radius; anchors and
/// movable bodies get distinct colors.
pub fn draw_bodies<H, R>(
    world: &World,
    target: &mut Frame,
    display: &Display<WindowSurface>,
    uniform: &UniformsStorage<H, R>,
    params: &DrawParameters,
) where
    H: AsUniformValue,
    R: Uniforms,
{
    let program =
        glium::Program::from_source(display, VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC, None).unwrap();

    let mut shape: Vec<Vertex> = vec![];

    for body in world.bodies() {
        let color = if body.is_anchor() {
            ANCHOR_COLOR
        } else {
            BODY_COLOR
        };

        shape.append(&mut shapes::circle(
            [body.position.x, body.position.y],
            color,
            body.radius,
            CIRCLE_RESOLUTION,
        ));
    }

    let vertex_buffer = glium::VertexBuffer::new(display, &shape).unwrap();
    let indices = glium::index::NoIndices(glium::index::PrimitiveType::TrianglesList);

    target
        .draw(&vertex_buffer, indices, &program, uniform, params)
        .unwrap();
}
