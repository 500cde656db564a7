use std::mem;

use bytemuck::{Pod, Zeroable};
use gl::types::*;

pub const FACE_COUNT: usize = 6;
pub const FACE_VERTEX_COUNT: usize = 4;

pub type FaceTable = [[Vertex; FACE_VERTEX_COUNT]; FACE_COUNT];

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position3d: [GLfloat; 3],
    pub position2d: [GLfloat; 2],
}

impl Vertex {
    pub const fn new(position3d: [GLfloat; 3], position2d: [GLfloat; 2]) -> Self {
        Self {
            position3d,
            position2d,
        }
    }
}

pub const POSITION3D_LOCATION: GLuint = 0;
pub const POSITION2D_LOCATION: GLuint = 1;
pub const POSITION3D_OFFSET: usize = 0;
pub const POSITION2D_OFFSET: usize = 3 * mem::size_of::<GLfloat>();

/// Cube faces in texture order. The discriminant is the face's index into
/// [`CUBE_FACES`] and into the renderer's face textures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Front = 0,
    Left = 1,
    Right = 2,
    Back = 3,
    Top = 4,
    Bottom = 5,
}

impl Face {
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Front,
        Face::Left,
        Face::Right,
        Face::Back,
        Face::Top,
        Face::Bottom,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Left => "left",
            Face::Right => "right",
            Face::Back => "back",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }

    pub fn from_name(name: &str) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.name() == name)
    }
}

pub const CUBE_FACES: FaceTable = [
    // Front
    [
        Vertex::new([-1.0, -1.0, 1.0], [-1.0, -1.0]),
        Vertex::new([1.0, -1.0, 1.0], [1.0, -1.0]),
        Vertex::new([-1.0, 1.0, 1.0], [-1.0, 1.0]),
        Vertex::new([1.0, 1.0, 1.0], [1.0, 1.0]),
    ],
    // Left
    [
        Vertex::new([-1.0, -1.0, -1.0], [-1.0, -1.0]),
        Vertex::new([-1.0, -1.0, 1.0], [1.0, -1.0]),
        Vertex::new([-1.0, 1.0, -1.0], [-1.0, 1.0]),
        Vertex::new([-1.0, 1.0, 1.0], [1.0, 1.0]),
    ],
    // Right
    [
        Vertex::new([1.0, 1.0, 1.0], [-1.0, -1.0]),
        Vertex::new([1.0, -1.0, 1.0], [1.0, -1.0]),
        Vertex::new([1.0, 1.0, -1.0], [-1.0, 1.0]),
        Vertex::new([1.0, -1.0, -1.0], [1.0, 1.0]),
    ],
    // Back
    [
        Vertex::new([1.0, -1.0, -1.0], [-1.0, -1.0]),
        Vertex::new([-1.0, -1.0, -1.0], [1.0, -1.0]),
        Vertex::new([1.0, 1.0, -1.0], [-1.0, 1.0]),
        Vertex::new([-1.0, 1.0, -1.0], [1.0, 1.0]),
    ],
    // Top
    [
        Vertex::new([-1.0, 1.0, -1.0], [-1.0, -1.0]),
        Vertex::new([-1.0, 1.0, 1.0], [1.0, -1.0]),
        Vertex::new([1.0, 1.0, -1.0], [-1.0, 1.0]),
        Vertex::new([1.0, 1.0, 1.0], [1.0, 1.0]),
    ],
    // Bottom
    [
        Vertex::new([-1.0, -1.0, 1.0], [-1.0, -1.0]),
        Vertex::new([-1.0, -1.0, -1.0], [1.0, -1.0]),
        Vertex::new([1.0, -1.0, 1.0], [-1.0, 1.0]),
        Vertex::new([1.0, -1.0, -1.0], [1.0, 1.0]),
    ],
];
