use std::error::Error;
use std::ffi::CString;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{Error as IoError, Read};
use std::path::{Path, PathBuf};

use gl::types::*;
use tracing::error;

use crate::gpu::Gl;

/// Size of the buffer compiler and linker logs are copied into.
pub const INFO_LOG_CAPACITY: usize = 512;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    fn gl_enum(self) -> GLenum {
        match self {
            ShaderKind::Vertex => gl::VERTEX_SHADER,
            ShaderKind::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

pub struct Shader {
    gl: Gl,
    id: GLuint,
    kind: ShaderKind,
}

impl Shader {
    pub fn new(gl: &Gl, kind: ShaderKind) -> Self {
        Self {
            gl: gl.clone(),
            id: gl.create_shader(kind.gl_enum()),
            kind,
        }
    }

    /// Reads and compiles the shader source at `path`.
    pub fn from_file(gl: &Gl, path: &Path, kind: ShaderKind) -> Result<Self, OpenGLError> {
        let mut file = match OpenOptions::new().read(true).write(false).open(path) {
            Ok(f) => f,
            Err(err) => return Err(OpenGLError::FailedToReadShader(path.to_path_buf(), err)),
        };
        let mut source = String::new();
        if let Err(err) = file.read_to_string(&mut source) {
            return Err(OpenGLError::FailedToReadShader(path.to_path_buf(), err));
        }

        let shader = Self::new(gl, kind);
        shader.compile(&source, Some(path))?;
        Ok(shader)
    }

    pub fn make(&self, source: &str) -> Result<(), OpenGLError> {
        self.compile(source, None)
    }

    fn compile(&self, source: &str, path: Option<&Path>) -> Result<(), OpenGLError> {
        let source = CString::new(source).map_err(|_| {
            OpenGLError::FailedToCompileShader(String::from("source contains a nul byte"))
        })?;
        self.gl.compile_shader(self.id, &source);

        if !self.gl.shader_compiled(self.id) {
            let log = self.gl.shader_info_log(self.id, INFO_LOG_CAPACITY);
            error!(
                message = log.as_str(),
                kind = ?self.kind,
                shader = ?path,
                "failed_to_compile_shader"
            );
            return Err(OpenGLError::FailedToCompileShader(log));
        }
        Ok(())
    }

    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        self.gl.delete_shader(self.id);
    }
}

pub struct Program {
    gl: Gl,
    id: GLuint,
}

impl Program {
    pub fn new(gl: &Gl) -> Self {
        Self {
            gl: gl.clone(),
            id: gl.create_program(),
        }
    }

    /// Links the program from `vert` and `frag` sources on disk. The shader
    /// objects only live for the duration of the link.
    pub fn from_files(gl: &Gl, vert: &Path, frag: &Path) -> Result<Self, OpenGLError> {
        let vert = Shader::from_file(gl, vert, ShaderKind::Vertex)?;
        let frag = Shader::from_file(gl, frag, ShaderKind::Fragment)?;
        let program = Self::new(gl);
        program.make(&[&vert, &frag])?;
        Ok(program)
    }

    /// Attaches every shader, links, then detaches them again so they can be
    /// deleted independently of the program.
    pub fn make(&self, shaders: &[&Shader]) -> Result<(), OpenGLError> {
        for shader in shaders {
            self.gl.attach_shader(self.id, shader.id());
        }
        self.gl.link_program(self.id);
        for shader in shaders {
            self.gl.detach_shader(self.id, shader.id());
        }

        if !self.gl.program_linked(self.id) {
            let log = self.gl.program_info_log(self.id, INFO_LOG_CAPACITY);
            error!(message = log.as_str(), "failed_to_link_program");
            return Err(OpenGLError::FailedToLinkProgram(log));
        }
        Ok(())
    }

    pub fn use_program(&self) {
        self.gl.use_program(self.id);
    }

    #[cfg(test)]
    pub fn id(&self) -> GLuint {
        self.id
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        self.gl.delete_program(self.id);
    }
}

#[derive(Debug)]
pub enum OpenGLError {
    FailedToReadShader(PathBuf, IoError),
    FailedToCompileShader(String),
    FailedToLinkProgram(String),
}

impl Display for OpenGLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailedToReadShader(path, err) => {
                write!(f, "failed to read shader {:?}: {}", path, err)
            }
            Self::FailedToCompileShader(log) => write!(f, "shader compilation error:\n{}", log),
            Self::FailedToLinkProgram(log) => write!(f, "program linking error:\n{}", log),
        }
    }
}

impl Error for OpenGLError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FailedToReadShader(_, err) => Some(err),
            _ => None,
        }
    }
}
