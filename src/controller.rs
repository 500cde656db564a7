use std::sync::mpsc::Receiver;

use glfw::{Action, Glfw, Key, Window, WindowEvent};
use tracing::debug;

use crate::rotation::Movement;

/// What the keyboard asked for during one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub movement: Movement,
    pub painting: bool,
}

pub struct Controller {
    glfw: Glfw,
    events: Receiver<(f64, WindowEvent)>,
}

impl Controller {
    pub fn new(glfw: Glfw, events: Receiver<(f64, WindowEvent)>) -> Self {
        Controller { glfw, events }
    }

    /// Drains pending window events and samples the held keys.
    pub fn poll_input(&mut self, window: &Window) -> FrameInput {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            debug!(event = ?event, "glfw_polled_event");
        }
        let held = |key| window.get_key(key) == Action::Press;
        FrameInput {
            movement: movement_from_keys(held(Key::W), held(Key::A), held(Key::S), held(Key::D)),
            painting: held(Key::Space),
        }
    }
}

fn movement_from_keys(up: bool, left: bool, down: bool, right: bool) -> Movement {
    let axis = |positive: bool, negative: bool| positive as i32 - negative as i32;
    Movement::new(axis(right, left), axis(up, down))
}
