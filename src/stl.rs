//! STL format detection and decoding.
//!
//! A file is treated as ASCII when its first six bytes are exactly `solid ` and as binary
//! otherwise.  This is only a heuristic: binary files whose header happens to start with
//! `solid ` are misread as ASCII and fail to parse.

use std::io::{self, Read};
use log::info;
use crate::error::Result;
use crate::geom::Mesh;
use crate::stl_ascii;
use crate::stl_binary;

pub const ASCII_MAGIC: &[u8; 6] = b"solid ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StlFormat {
    Ascii,
    Binary,
}

impl StlFormat {
    pub fn detect(head: &[u8]) -> StlFormat {
        if head.starts_with(ASCII_MAGIC) {
            StlFormat::Ascii
        } else {
            StlFormat::Binary
        }
    }
}

/// A decoded STL file.  `name` is the solid name declared in an ASCII header; binary files
/// never have one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solid {
    pub name: Option<String>,
    pub mesh: Mesh,
}


/// Look at the first bytes of `r` without losing them.  Returns the detected format and a
/// reader that still yields the whole input.
pub fn sniff<R: Read>(mut r: R) -> io::Result<(StlFormat, impl Read)> {
    let mut head = Vec::with_capacity(ASCII_MAGIC.len());
    r.by_ref().take(ASCII_MAGIC.len() as u64).read_to_end(&mut head)?;
    let format = StlFormat::detect(&head);
    Ok((format, io::Cursor::new(head).chain(r)))
}

pub fn read_stl<R: Read>(r: R) -> Result<Solid> {
    let (format, mut r) = sniff(r)?;
    let solid = match format {
        StlFormat::Ascii => {
            info!("reading ASCII STL");
            stl_ascii::read_ascii(&mut r)?
        },
        StlFormat::Binary => {
            info!("reading binary STL");
            Solid {
                name: None,
                mesh: stl_binary::read_binary(&mut r)?,
            }
        },
    };
    info!("# of facets: {}", solid.mesh.len());
    Ok(solid)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_requires_exact_prefix() {
        assert_eq!(StlFormat::detect(b"solid cube\n"), StlFormat::Ascii);
        assert_eq!(StlFormat::detect(b"solid "), StlFormat::Ascii);
        assert_eq!(StlFormat::detect(b"solid\ncube"), StlFormat::Binary);
        assert_eq!(StlFormat::detect(b"Solid cube"), StlFormat::Binary);
        assert_eq!(StlFormat::detect(b"  solid cube"), StlFormat::Binary);
        assert_eq!(StlFormat::detect(b"sol"), StlFormat::Binary);
        assert_eq!(StlFormat::detect(b""), StlFormat::Binary);
    }

    #[test]
    fn sniff_keeps_all_bytes() {
        let input: &[u8] = b"solid abc\nendsolid abc\n";
        let (format, mut r) = sniff(input).unwrap();
        assert_eq!(format, StlFormat::Ascii);
        let mut out = Vec::new();
        r.read_to_end(&mut out).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn sniff_short_input() {
        let (format, mut r) = sniff(&b"abc"[..]).unwrap();
        assert_eq!(format, StlFormat::Binary);
        let mut out = Vec::new();
        r.read_to_end(&mut out).unwrap();
        assert_eq!(out, b"abc");
    }

    #[test]
    fn binary_has_no_name() {
        let mut buf = vec![0u8; 84];
        buf[..5].copy_from_slice(b"solid");
        let s = read_stl(&buf[..]).unwrap();
        assert_eq!(s.name, None);
        assert!(s.mesh.is_empty());
    }
}
