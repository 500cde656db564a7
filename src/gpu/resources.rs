//! Owned GPU objects.
//!
//! Each wrapper creates exactly one GL object in its constructor and deletes
//! it in `Drop`. None of them are `Clone`, so a moved-from value is never
//! dropped and every name is released once.

use std::mem;

use gl::types::*;

use super::Gl;
use crate::shape::{
    Vertex, FACE_VERTEX_COUNT, POSITION2D_LOCATION, POSITION2D_OFFSET, POSITION3D_LOCATION,
    POSITION3D_OFFSET,
};

pub struct Buffer {
    gl: Gl,
    name: GLuint,
}

impl Buffer {
    pub fn new(gl: &Gl) -> Self {
        Self {
            gl: gl.clone(),
            name: gl.create_buffer(),
        }
    }

    pub fn send_data(&self, data: &[u8], usage: GLenum) {
        self.gl.buffer_data(self.name, data, usage);
    }

    pub fn name(&self) -> GLuint {
        self.name
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        self.gl.delete_buffer(self.name);
    }
}

pub struct VertexArray {
    gl: Gl,
    name: GLuint,
}

impl VertexArray {
    pub fn new(gl: &Gl) -> Self {
        Self {
            gl: gl.clone(),
            name: gl.create_vertex_array(),
        }
    }

    pub fn name(&self) -> GLuint {
        self.name
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        self.gl.delete_vertex_array(self.name);
    }
}

/// The four vertices of one cube face, uploaded once and drawn as a strip.
pub struct FaceMesh {
    gl: Gl,
    vbo: Buffer,
    vao: VertexArray,
}

impl FaceMesh {
    pub fn new(gl: &Gl, vertices: &[Vertex; FACE_VERTEX_COUNT]) -> Self {
        let mesh = Self {
            gl: gl.clone(),
            vbo: Buffer::new(gl),
            vao: VertexArray::new(gl),
        };
        mesh.vbo
            .send_data(bytemuck::cast_slice(&vertices[..]), gl::STATIC_DRAW);
        mesh.attrib_pointer(POSITION3D_LOCATION, 3, POSITION3D_OFFSET);
        mesh.attrib_pointer(POSITION2D_LOCATION, 2, POSITION2D_OFFSET);
        mesh
    }

    pub fn attrib_pointer(&self, index: GLuint, components: GLint, offset: usize) {
        let stride = mem::size_of::<Vertex>() as GLsizei;
        self.gl.vertex_attrib_pointer(
            self.vao.name(),
            self.vbo.name(),
            index,
            components,
            stride,
            offset,
        );
    }

    pub fn draw(&self, mode: GLenum) {
        self.gl
            .draw_arrays(self.vao.name(), mode, FACE_VERTEX_COUNT as GLsizei);
    }

    #[cfg(test)]
    pub fn vertex_array(&self) -> GLuint {
        self.vao.name()
    }

    #[cfg(test)]
    pub fn vertex_buffer(&self) -> GLuint {
        self.vbo.name()
    }
}

pub struct Texture2D {
    gl: Gl,
    name: GLuint,
    width: GLsizei,
    height: GLsizei,
}

impl Texture2D {
    pub fn new(gl: &Gl) -> Self {
        Self {
            gl: gl.clone(),
            name: gl.create_texture(),
            width: 0,
            height: 0,
        }
    }

    /// Allocates RGBA8 storage and clears every texel to transparent black.
    pub fn make_from_dimensions(&mut self, width: GLsizei, height: GLsizei) {
        self.width = width;
        self.height = height;
        self.gl.texture_storage_rgba(self.name, width, height);
        self.gl.clear_texture(self.name);
    }

    pub fn name(&self) -> GLuint {
        self.name
    }

    pub fn width(&self) -> GLsizei {
        self.width
    }

    pub fn height(&self) -> GLsizei {
        self.height
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        self.gl.delete_texture(self.name);
    }
}

pub struct Sampler {
    gl: Gl,
    name: GLuint,
}

impl Sampler {
    /// Clamps on every axis, filters linearly and trilinearly when minified.
    pub fn new(gl: &Gl) -> Self {
        let sampler = Self {
            gl: gl.clone(),
            name: gl.create_sampler(),
        };
        sampler.change_parameter(gl::TEXTURE_WRAP_R, gl::CLAMP_TO_EDGE as GLint);
        sampler.change_parameter(gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as GLint);
        sampler.change_parameter(gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as GLint);
        sampler.change_parameter(gl::TEXTURE_MIN_FILTER, gl::LINEAR_MIPMAP_LINEAR as GLint);
        sampler.change_parameter(gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint);
        sampler
    }

    pub fn change_parameter(&self, parameter: GLenum, value: GLint) {
        self.gl.sampler_parameter(self.name, parameter, value);
    }

    pub fn name(&self) -> GLuint {
        self.name
    }
}

impl Drop for Sampler {
    fn drop(&mut self) {
        self.gl.delete_sampler(self.name);
    }
}

pub struct Framebuffer {
    gl: Gl,
    name: GLuint,
}

impl Framebuffer {
    pub fn new(gl: &Gl) -> Self {
        Self {
            gl: gl.clone(),
            name: gl.create_framebuffer(),
        }
    }

    pub fn name(&self) -> GLuint {
        self.name
    }
}

impl Drop for Framebuffer {
    fn drop(&mut self) {
        self.gl.delete_framebuffer(self.name);
    }
}
