pub mod error;
pub mod read_from;

pub mod convert;
pub mod geom;
pub mod modify;
pub mod scad;
pub mod stl;
pub mod stl_ascii;
pub mod stl_binary;

pub use crate::convert::{convert, Options};
pub use crate::error::{Result, StlError};
pub use crate::stl::{read_stl, Solid};
