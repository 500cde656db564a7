mod face_renderer;
mod paint_renderer;

use std::path::Path;

use face_renderer::FaceRenderer;
use gl::types::*;
use na::Matrix4;
use paint_renderer::PaintRenderer;
use tracing::debug;

use crate::config::{
    ASPECT_RATIO, FOVY, FRAME_SUBSTEPS, MAIN_FRAG_SHADER, MAIN_VERT_SHADER, PAINT_FRAG_SHADER,
    PAINT_VERT_SHADER, ZFAR, ZNEAR,
};
use crate::controller::FrameInput;
use crate::gpu::{Buffer, FaceMesh, Gl, Texture2D};
use crate::rotation::{perspective_lh, CubeRotation, Movement};
use crate::shader::OpenGLError;
use crate::shape::{Face, FaceTable, FACE_COUNT};

/// Owns every GPU object of the scene and the cube's orientation.
pub struct Renderer {
    gl: Gl,
    faces: FaceRenderer,
    paint: PaintRenderer,
    meshes: [FaceMesh; FACE_COUNT],
    textures: [Texture2D; FACE_COUNT],
    transform: Buffer,
    projection: Matrix4<GLfloat>,
    rotation: CubeRotation,
}

impl Renderer {
    pub fn new(gl: &Gl, geometry: &FaceTable, texture_side: GLsizei) -> Result<Self, OpenGLError> {
        gl.enable(gl::CULL_FACE);

        let meshes = std::array::from_fn(|i| FaceMesh::new(gl, &geometry[i]));

        let faces = FaceRenderer::new(gl, Path::new(MAIN_VERT_SHADER), Path::new(MAIN_FRAG_SHADER))?;
        let paint = PaintRenderer::new(gl, Path::new(PAINT_VERT_SHADER), Path::new(PAINT_FRAG_SHADER))?;

        let textures = std::array::from_fn(|_| {
            let mut texture = Texture2D::new(gl);
            texture.make_from_dimensions(texture_side, texture_side);
            texture
        });
        debug!(texture_side = texture_side, "renderer_ready");

        Ok(Self {
            gl: gl.clone(),
            faces,
            paint,
            meshes,
            textures,
            transform: Buffer::new(gl),
            projection: perspective_lh(ASPECT_RATIO, FOVY, ZNEAR, ZFAR),
            rotation: CubeRotation::new(),
        })
    }

    /// Splits one frame into [`FRAME_SUBSTEPS`] equal updates so painting
    /// samples the orientation more often than once per frame.
    pub fn advance(&mut self, input: &FrameInput, frame_delta: f64) {
        let step = frame_delta / FRAME_SUBSTEPS as f64;
        for _ in 0..FRAME_SUBSTEPS {
            self.update(input.movement, input.painting, step);
        }
    }

    pub fn update(&mut self, movement: Movement, painting: bool, delta_time: f64) {
        self.rotation.apply(movement, delta_time);
        if painting {
            self.paint();
        }
    }

    pub fn paint(&self) {
        self.upload_transform();
        self.paint.draw(&self.meshes, &self.textures, &self.transform);
    }

    /// Draws into whichever framebuffer and viewport are current.
    pub fn draw(&self) {
        self.upload_transform();
        self.faces.draw(&self.meshes, &self.textures, &self.transform);
    }

    pub fn clear(&self) {
        self.gl.clear_color(0.0, 0.0, 0.0, 1.0);
        self.gl.clear(gl::COLOR_BUFFER_BIT);
    }

    pub fn set_viewport(&self, width: GLsizei, height: GLsizei) {
        self.gl.viewport(0, 0, width, height);
    }

    #[cfg(test)]
    pub fn texture(&self, face: Face) -> &Texture2D {
        &self.textures[face.index()]
    }

    #[cfg(test)]
    pub fn rotation(&self) -> &CubeRotation {
        &self.rotation
    }

    fn total_transform(&self) -> Matrix4<GLfloat> {
        self.projection * self.rotation.matrix()
    }

    fn upload_transform(&self) {
        let total = self.total_transform();
        self.transform
            .send_data(bytemuck::cast_slice(total.as_slice()), gl::STREAM_DRAW);
    }
}
