use std::path::Path;

use crate::gpu::{Buffer, FaceMesh, Framebuffer, Gl, Texture2D};
use crate::shader::{OpenGLError, Program};

/// Burns the view-centre marker into the face textures. Every texture takes
/// a turn as the only color attachment of one shared framebuffer.
pub struct PaintRenderer {
    gl: Gl,
    program: Program,
    framebuffer: Framebuffer,
}

impl PaintRenderer {
    pub fn new(gl: &Gl, vert_shader: &Path, frag_shader: &Path) -> Result<Self, OpenGLError> {
        Ok(Self {
            gl: gl.clone(),
            program: Program::from_files(gl, vert_shader, frag_shader)?,
            framebuffer: Framebuffer::new(gl),
        })
    }

    pub fn draw(&self, meshes: &[FaceMesh], textures: &[Texture2D], transform: &Buffer) {
        self.gl.bind_draw_framebuffer(self.framebuffer.name());
        self.gl.bind_uniform_buffer(0, transform.name());
        self.program.use_program();

        for (mesh, texture) in meshes.iter().zip(textures) {
            self.gl.viewport(0, 0, texture.width(), texture.height());
            self.gl.attach_color_texture(texture.name());
            mesh.draw(gl::TRIANGLE_STRIP);
        }

        self.gl.bind_draw_framebuffer(0);
        self.gl.bind_uniform_buffer(0, 0);
    }

    #[cfg(test)]
    pub fn framebuffer(&self) -> gl::types::GLuint {
        self.framebuffer.name()
    }

    #[cfg(test)]
    pub fn program(&self) -> gl::types::GLuint {
        self.program.id()
    }
}
