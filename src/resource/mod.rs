pub mod geometry;

use anyhow::Result;

pub trait Loadable {
    type Output;
    fn load(file: &str) -> Result<Self::Output>;
}
