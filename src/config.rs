use gl::types::*;

// Assets
pub const MAIN_VERT_SHADER: &'static str = "assets/shaders/face.vert";
pub const MAIN_FRAG_SHADER: &'static str = "assets/shaders/face.frag";
pub const PAINT_VERT_SHADER: &'static str = "assets/shaders/paint.vert";
pub const PAINT_FRAG_SHADER: &'static str = "assets/shaders/paint.frag";
pub const CUBE_GEOMETRY: &'static str = "assets/geometry/cube.faces";

// Window
pub const WINDOW_SIDE: u32 = 800;
pub const WINDOW_TITLE: &'static str = "app";
pub const GL_VERSION: (u32, u32) = (4, 6);

// Update
pub const FRAME_SUBSTEPS: u32 = 10;

// Painting
pub const TEXTURE_SIDE: GLsizei = 1000;

// Projection
pub const FOVY: GLfloat = 1.0;
pub const ASPECT_RATIO: GLfloat = 1.0;
pub const ZNEAR: GLfloat = 0.0;
pub const ZFAR: GLfloat = 10.0;
