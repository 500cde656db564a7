mod config;
mod controller;
mod gpu;
mod render;
mod resource;
mod rotation;
mod shader;
mod shape;

extern crate nalgebra as na;

use std::rc::Rc;
use std::time::Instant;

use anyhow::{anyhow, Context as _};
use glfw::Context;
use tracing::{info, Level};

use config::{CUBE_GEOMETRY, GL_VERSION, TEXTURE_SIDE, WINDOW_SIDE, WINDOW_TITLE};
use controller::Controller;
use gpu::{Gl, OpenGl};
use render::Renderer;
use resource::geometry::CubeGeometry;
use resource::Loadable;

fn main() -> anyhow::Result<()> {
    // Log setup
    if cfg!(debug_assertions) {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt().init();
    }

    // Window Setup
    let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS)
        .map_err(|e| anyhow!("Failed to initialise GLFW: {:?}", e))?;
    glfw.window_hint(glfw::WindowHint::ContextVersion(GL_VERSION.0, GL_VERSION.1));
    glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
    glfw.window_hint(glfw::WindowHint::Resizable(false));
    let (mut window, events) = glfw
        .create_window(WINDOW_SIDE, WINDOW_SIDE, WINDOW_TITLE, glfw::WindowMode::Windowed)
        .context("Failed to create GLFW window.")?;
    window.make_current();
    window.set_key_polling(true);

    // OpenGL Setup
    let gl: Gl = Rc::new(OpenGl::load(|s| window.get_proc_address(s)));
    let geometry = CubeGeometry::load(CUBE_GEOMETRY)?;
    let mut renderer = Renderer::new(&gl, &geometry.faces, TEXTURE_SIDE)?;
    let mut controller = Controller::new(glfw, events);
    info!(side = WINDOW_SIDE, "window_open");

    let mut last_time = Instant::now();
    while !window.should_close() {
        let input = controller.poll_input(&window);
        renderer.clear();

        let current_time = Instant::now();
        let frame_delta = current_time.duration_since(last_time).as_secs_f64();
        last_time = current_time;
        renderer.advance(&input, frame_delta);

        let (width, height) = window.get_framebuffer_size();
        renderer.set_viewport(width, height);
        renderer.draw();
        window.swap_buffers();
    }

    info!("window_closed");
    Ok(())
}
