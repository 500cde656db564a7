use std::{error::Error, fmt::Display, fs::OpenOptions, io::Read, num::ParseFloatError};

use anyhow::{Context, Result};
use gl::types::GLfloat;
use tracing::debug;

use super::Loadable;
use crate::shape::{Face, FaceTable, Vertex, FACE_COUNT, FACE_VERTEX_COUNT};

/// The cube's face table as read from a `.faces` asset.
#[derive(Debug)]
pub struct CubeGeometry {
    pub faces: FaceTable,
}

impl Loadable for CubeGeometry {
    type Output = Self;
    fn load(file: &str) -> Result<Self> {
        debug!(file = file, "Load Geometry");
        let mut file = OpenOptions::new()
            .read(true)
            .open(file)
            .with_context(|| format!("Opening geometry {}", file))?;

        let mut text = String::new();
        file.read_to_string(&mut text)?;
        Self::parse(&text)
    }
}

impl CubeGeometry {
    pub fn parse(text: &str) -> Result<Self> {
        let mut faces: Vec<(Face, Vec<Vertex>)> = Vec::with_capacity(FACE_COUNT);

        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with("#") {
                continue;
            }
            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts[0] {
                "face" => {
                    let name = parts.get(1).copied().unwrap_or("");
                    let face = Face::from_name(name)
                        .ok_or_else(|| GeometryError::UnknownFace(name.to_string()))?;
                    let expected = Face::ALL.get(faces.len()).copied();
                    if expected != Some(face) {
                        return Err(GeometryError::FaceOutOfOrder(face).into());
                    }
                    faces.push((face, Vec::with_capacity(FACE_VERTEX_COUNT)));
                }
                "v" => {
                    let Some((_, vertices)) = faces.last_mut() else {
                        return Err(GeometryError::VertexOutsideFace(number + 1).into());
                    };
                    let elements = parse_elements(&parts[1..])
                        .with_context(|| format!("Parsing vertex on line {}", number + 1))?;
                    if elements.len() != 5 {
                        return Err(GeometryError::BadVertex(number + 1, elements.len()).into());
                    }
                    vertices.push(Vertex::new(
                        [elements[0], elements[1], elements[2]],
                        [elements[3], elements[4]],
                    ));
                }
                other => {
                    return Err(GeometryError::UnexpectedLine(number + 1, other.to_string()).into());
                }
            }
        }

        if faces.len() != FACE_COUNT {
            return Err(GeometryError::FaceCount(faces.len()).into());
        }
        let mut table = [[Vertex::new([0.0; 3], [0.0; 2]); FACE_VERTEX_COUNT]; FACE_COUNT];
        for (face, vertices) in faces {
            table[face.index()] = vertices
                .try_into()
                .map_err(|v: Vec<Vertex>| GeometryError::VertexCount(face, v.len()))?;
        }
        Ok(Self { faces: table })
    }
}

fn parse_elements(parts: &[&str]) -> Result<Vec<GLfloat>, ParseFloatError> {
    parts.iter().map(|s| s.parse()).collect()
}

#[derive(Debug)]
enum GeometryError {
    UnknownFace(String),
    FaceOutOfOrder(Face),
    VertexOutsideFace(usize),
    BadVertex(usize, usize),
    UnexpectedLine(usize, String),
    FaceCount(usize),
    VertexCount(Face, usize),
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFace(name) => write!(f, "Unknown face {:?}", name),
            Self::FaceOutOfOrder(face) => write!(f, "Face {} is out of order", face.name()),
            Self::VertexOutsideFace(line) => write!(f, "Vertex before any face on line {}", line),
            Self::BadVertex(line, n) => write!(f, "Found {} vertex elements on line {}", n, line),
            Self::UnexpectedLine(line, kind) => write!(f, "Unexpected {:?} on line {}", kind, line),
            Self::FaceCount(n) => write!(f, "Found {} faces", n),
            Self::VertexCount(face, n) => write!(f, "Face {} has {} vertices", face.name(), n),
        }
    }
}

impl Error for GeometryError {}
