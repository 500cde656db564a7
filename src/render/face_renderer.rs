use std::path::Path;

use gl::types::*;

use crate::gpu::{Buffer, FaceMesh, Gl, Sampler, Texture2D};
use crate::shader::{OpenGLError, Program};

pub struct FaceRenderer {
    gl: Gl,
    program: Program,
    sampler: Sampler,
}

impl FaceRenderer {
    pub fn new(gl: &Gl, vert_shader: &Path, frag_shader: &Path) -> Result<Self, OpenGLError> {
        let program = Program::from_files(gl, vert_shader, frag_shader)?;
        let sampler = Sampler::new(gl);
        // Face textures never get mipmaps, so minify straight from level 0.
        sampler.change_parameter(gl::TEXTURE_MIN_FILTER, gl::LINEAR as GLint);
        Ok(Self {
            gl: gl.clone(),
            program,
            sampler,
        })
    }

    /// One strip per face, each sampling its own texture through unit 0.
    pub fn draw(&self, meshes: &[FaceMesh], textures: &[Texture2D], transform: &Buffer) {
        self.program.use_program();
        self.gl.bind_uniform_buffer(0, transform.name());
        self.gl.bind_sampler(0, self.sampler.name());

        for (mesh, texture) in meshes.iter().zip(textures) {
            self.gl.bind_texture_unit(0, texture.name());
            mesh.draw(gl::TRIANGLE_STRIP);
        }

        self.gl.bind_uniform_buffer(0, 0);
    }

    #[cfg(test)]
    pub fn sampler(&self) -> GLuint {
        self.sampler.name()
    }

    #[cfg(test)]
    pub fn program(&self) -> GLuint {
        self.program.id()
    }
}
