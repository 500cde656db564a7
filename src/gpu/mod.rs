pub mod opengl;
pub mod resources;

use std::ffi::CStr;
use std::rc::Rc;

use gl::types::*;

pub use opengl::OpenGl;
pub use resources::{Buffer, FaceMesh, Framebuffer, Sampler, Texture2D};

/// Shared handle to the graphics API. Every GPU resource keeps one so it can
/// release its object on drop.
pub type Gl = Rc<dyn GraphicsApi>;

/// The OpenGL calls the renderer issues, in direct state access form.
///
/// Object names are raw GL names and `0` always means "none", exactly as in
/// GL itself. Deleting `0` is a no-op.
pub trait GraphicsApi {
    fn create_buffer(&self) -> GLuint;
    fn delete_buffer(&self, buffer: GLuint);
    fn buffer_data(&self, buffer: GLuint, data: &[u8], usage: GLenum);
    fn bind_uniform_buffer(&self, index: GLuint, buffer: GLuint);

    fn create_vertex_array(&self) -> GLuint;
    fn delete_vertex_array(&self, vertex_array: GLuint);
    fn vertex_attrib_pointer(
        &self,
        vertex_array: GLuint,
        buffer: GLuint,
        index: GLuint,
        components: GLint,
        stride: GLsizei,
        offset: usize,
    );
    fn draw_arrays(&self, vertex_array: GLuint, mode: GLenum, count: GLsizei);

    fn create_shader(&self, kind: GLenum) -> GLuint;
    fn delete_shader(&self, shader: GLuint);
    fn compile_shader(&self, shader: GLuint, source: &CStr);
    fn shader_compiled(&self, shader: GLuint) -> bool;
    /// Returns at most `capacity - 1` bytes of log, as GL reserves one byte
    /// for the terminator.
    fn shader_info_log(&self, shader: GLuint, capacity: usize) -> String;

    fn create_program(&self) -> GLuint;
    fn delete_program(&self, program: GLuint);
    fn attach_shader(&self, program: GLuint, shader: GLuint);
    fn detach_shader(&self, program: GLuint, shader: GLuint);
    fn link_program(&self, program: GLuint);
    fn program_linked(&self, program: GLuint) -> bool;
    fn program_info_log(&self, program: GLuint, capacity: usize) -> String;
    fn use_program(&self, program: GLuint);

    fn create_texture(&self) -> GLuint;
    fn delete_texture(&self, texture: GLuint);
    /// Allocates RGBA8 storage for level 0 without uploading any data.
    fn texture_storage_rgba(&self, texture: GLuint, width: GLsizei, height: GLsizei);
    fn clear_texture(&self, texture: GLuint);
    fn bind_texture_unit(&self, unit: GLuint, texture: GLuint);

    fn create_sampler(&self) -> GLuint;
    fn delete_sampler(&self, sampler: GLuint);
    fn sampler_parameter(&self, sampler: GLuint, parameter: GLenum, value: GLint);
    fn bind_sampler(&self, unit: GLuint, sampler: GLuint);

    fn create_framebuffer(&self) -> GLuint;
    fn delete_framebuffer(&self, framebuffer: GLuint);
    fn bind_draw_framebuffer(&self, framebuffer: GLuint);
    /// Attaches `texture` as color attachment 0 of the bound draw framebuffer.
    fn attach_color_texture(&self, texture: GLuint);

    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn clear_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    fn clear(&self, mask: GLbitfield);
    fn enable(&self, capability: GLenum);
}
