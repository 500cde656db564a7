use std::ffi::{c_void, CStr};
use std::os::raw::c_char;
use std::ptr;

use gl::types::*;

use super::GraphicsApi;

/// [`GraphicsApi`] backed by the loaded `gl` function pointers. Only valid on
/// the thread whose context was current when [`OpenGl::load`] ran.
pub struct OpenGl {
    _private: (),
}

impl OpenGl {
    pub fn load<F>(loader: F) -> Self
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loader);
        Self { _private: () }
    }
}

impl GraphicsApi for OpenGl {
    fn create_buffer(&self) -> GLuint {
        let mut buffer = 0;
        unsafe { gl::CreateBuffers(1, &mut buffer) };
        buffer
    }

    fn delete_buffer(&self, buffer: GLuint) {
        unsafe { gl::DeleteBuffers(1, &buffer) };
    }

    fn buffer_data(&self, buffer: GLuint, data: &[u8], usage: GLenum) {
        unsafe {
            gl::NamedBufferData(
                buffer,
                data.len() as GLsizeiptr,
                data.as_ptr() as *const c_void,
                usage,
            );
        }
    }

    fn bind_uniform_buffer(&self, index: GLuint, buffer: GLuint) {
        unsafe { gl::BindBufferBase(gl::UNIFORM_BUFFER, index, buffer) };
    }

    fn create_vertex_array(&self) -> GLuint {
        let mut vao = 0;
        unsafe { gl::GenVertexArrays(1, &mut vao) };
        vao
    }

    fn delete_vertex_array(&self, vertex_array: GLuint) {
        unsafe { gl::DeleteVertexArrays(1, &vertex_array) };
    }

    fn vertex_attrib_pointer(
        &self,
        vertex_array: GLuint,
        buffer: GLuint,
        index: GLuint,
        components: GLint,
        stride: GLsizei,
        offset: usize,
    ) {
        unsafe {
            gl::BindVertexArray(vertex_array);
            gl::BindBuffer(gl::ARRAY_BUFFER, buffer);
            gl::VertexAttribPointer(
                index,
                components,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset as *const c_void,
            );
            gl::EnableVertexAttribArray(index);
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
        }
    }

    fn draw_arrays(&self, vertex_array: GLuint, mode: GLenum, count: GLsizei) {
        unsafe {
            gl::BindVertexArray(vertex_array);
            gl::DrawArrays(mode, 0, count);
            gl::BindVertexArray(0);
        }
    }

    fn create_shader(&self, kind: GLenum) -> GLuint {
        unsafe { gl::CreateShader(kind) }
    }

    fn delete_shader(&self, shader: GLuint) {
        unsafe { gl::DeleteShader(shader) };
    }

    fn compile_shader(&self, shader: GLuint, source: &CStr) {
        unsafe {
            gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
            gl::CompileShader(shader);
        }
    }

    fn shader_compiled(&self, shader: GLuint) -> bool {
        let mut success = gl::FALSE as GLint;
        unsafe { gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success) };
        success == gl::TRUE as GLint
    }

    fn shader_info_log(&self, shader: GLuint, capacity: usize) -> String {
        let mut buffer = vec![0u8; capacity];
        let mut len: GLsizei = 0;
        unsafe {
            gl::GetShaderInfoLog(
                shader,
                capacity as GLsizei,
                &mut len,
                buffer.as_mut_ptr() as *mut c_char,
            );
        }
        buffer.truncate(len.max(0) as usize);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    fn create_program(&self) -> GLuint {
        unsafe { gl::CreateProgram() }
    }

    fn delete_program(&self, program: GLuint) {
        unsafe { gl::DeleteProgram(program) };
    }

    fn attach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::AttachShader(program, shader) };
    }

    fn detach_shader(&self, program: GLuint, shader: GLuint) {
        unsafe { gl::DetachShader(program, shader) };
    }

    fn link_program(&self, program: GLuint) {
        unsafe { gl::LinkProgram(program) };
    }

    fn program_linked(&self, program: GLuint) -> bool {
        let mut success = gl::FALSE as GLint;
        unsafe { gl::GetProgramiv(program, gl::LINK_STATUS, &mut success) };
        success == gl::TRUE as GLint
    }

    fn program_info_log(&self, program: GLuint, capacity: usize) -> String {
        let mut buffer = vec![0u8; capacity];
        let mut len: GLsizei = 0;
        unsafe {
            gl::GetProgramInfoLog(
                program,
                capacity as GLsizei,
                &mut len,
                buffer.as_mut_ptr() as *mut c_char,
            );
        }
        buffer.truncate(len.max(0) as usize);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    fn use_program(&self, program: GLuint) {
        unsafe { gl::UseProgram(program) };
    }

    fn create_texture(&self) -> GLuint {
        let mut texture = 0;
        unsafe { gl::GenTextures(1, &mut texture) };
        texture
    }

    fn delete_texture(&self, texture: GLuint) {
        unsafe { gl::DeleteTextures(1, &texture) };
    }

    fn texture_storage_rgba(&self, texture: GLuint, width: GLsizei, height: GLsizei) {
        unsafe {
            gl::BindTexture(gl::TEXTURE_2D, texture);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA as GLint,
                width,
                height,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                ptr::null(),
            );
            gl::BindTexture(gl::TEXTURE_2D, 0);
        }
    }

    fn clear_texture(&self, texture: GLuint) {
        unsafe { gl::ClearTexImage(texture, 0, gl::RGBA, gl::UNSIGNED_BYTE, ptr::null()) };
    }

    fn bind_texture_unit(&self, unit: GLuint, texture: GLuint) {
        unsafe { gl::BindTextureUnit(unit, texture) };
    }

    fn create_sampler(&self) -> GLuint {
        let mut sampler = 0;
        unsafe { gl::GenSamplers(1, &mut sampler) };
        sampler
    }

    fn delete_sampler(&self, sampler: GLuint) {
        unsafe { gl::DeleteSamplers(1, &sampler) };
    }

    fn sampler_parameter(&self, sampler: GLuint, parameter: GLenum, value: GLint) {
        unsafe { gl::SamplerParameteri(sampler, parameter, value) };
    }

    fn bind_sampler(&self, unit: GLuint, sampler: GLuint) {
        unsafe { gl::BindSampler(unit, sampler) };
    }

    fn create_framebuffer(&self) -> GLuint {
        let mut framebuffer = 0;
        unsafe { gl::GenFramebuffers(1, &mut framebuffer) };
        framebuffer
    }

    fn delete_framebuffer(&self, framebuffer: GLuint) {
        unsafe { gl::DeleteFramebuffers(1, &framebuffer) };
    }

    fn bind_draw_framebuffer(&self, framebuffer: GLuint) {
        unsafe { gl::BindFramebuffer(gl::DRAW_FRAMEBUFFER, framebuffer) };
    }

    fn attach_color_texture(&self, texture: GLuint) {
        unsafe {
            gl::FramebufferTexture(gl::DRAW_FRAMEBUFFER, gl::COLOR_ATTACHMENT0, texture, 0);
        }
    }

    fn viewport(&self, x: GLint, y: GLint, width: GLsizei, height: GLsizei) {
        unsafe { gl::Viewport(x, y, width, height) };
    }

    fn clear_color(&self, red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
        unsafe { gl::ClearColor(red, green, blue, alpha) };
    }

    fn clear(&self, mask: GLbitfield) {
        unsafe { gl::Clear(mask) };
    }

    fn enable(&self, capability: GLenum) {
        unsafe { gl::Enable(capability) };
    }
}
