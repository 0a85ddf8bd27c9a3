use std::io::{self, Read};
use log::{debug, warn};
use crate::error::{Result, StlError};
use crate::geom::{Facet, Mesh};
use crate::read_from::ReadExt;

pub const HEADER_LEN: usize = 80;
pub const RECORD_LEN: usize = 50;

/// Upper bound on the facets reserved up front.  The count field is untrusted: a text file that
/// doesn't start with `solid ` lands here too, and its "count" is just four ASCII bytes.
const MAX_PREALLOC: usize = 1 << 20;


pub fn read_binary<R: Read>(r: &mut R) -> Result<Mesh> {
    let mut header = [0; HEADER_LEN];
    r.read_exact(&mut header).map_err(|e| eof(e, "80-byte header"))?;
    let end = header.iter().position(|&x| x == 0).unwrap_or(header.len());
    debug!("binary header: {:?}", String::from_utf8_lossy(&header[..end]).trim_end());

    let count = r.read_one::<u32>().map_err(|e| eof(e, "triangle count"))?;
    debug!("header declares {} triangles", count);

    let mut facets = Vec::with_capacity((count as usize).min(MAX_PREALLOC));
    let mut with_attrs = 0;
    for i in 0 .. count {
        let (facet, attr) = r.read_one::<(Facet, u16)>().map_err(|e| truncated(e, count, i))?;
        if attr != 0 {
            with_attrs += 1;
        }
        facets.push(facet);
    }

    if with_attrs > 0 {
        warn!("{} of {} triangles carry attribute bytes; they are ignored", with_attrs, count);
    }

    Ok(Mesh::from(facets))
}

fn eof(e: io::Error, expected: &'static str) -> StlError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        StlError::UnexpectedEof { expected }
    } else {
        StlError::Io(e)
    }
}

fn truncated(e: io::Error, expected: u32, read: u32) -> StlError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        StlError::Truncated { expected, read }
    } else {
        StlError::Io(e)
    }
}


#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use byteorder::{WriteBytesExt, LE};
    use crate::geom::Point;
    use super::*;

    fn record(buf: &mut Vec<u8>, verts: [[f32; 3]; 3], attr: u16) {
        for _ in 0 .. 3 {
            buf.write_f32::<LE>(0.).unwrap();
        }
        for v in &verts {
            for &x in v {
                buf.write_f32::<LE>(x).unwrap();
            }
        }
        buf.write_u16::<LE>(attr).unwrap();
    }

    fn file(count: u32, records: &[[[f32; 3]; 3]]) -> Vec<u8> {
        let mut buf = b"binary test header".to_vec();
        buf.resize(HEADER_LEN, 0);
        buf.write_u32::<LE>(count).unwrap();
        for &verts in records {
            record(&mut buf, verts, 0);
        }
        buf
    }

    const TRI_A: [[f32; 3]; 3] = [[0., 0., 0.], [1., 0., 0.], [0., 1., 0.]];
    const TRI_B: [[f32; 3]; 3] = [[0., 0., 2.], [0., 1., 2.], [1., 0., 2.5]];

    #[test]
    fn reads_records_in_order() {
        let buf = file(2, &[TRI_A, TRI_B]);
        assert_eq!(buf.len(), HEADER_LEN + 4 + 2 * RECORD_LEN);

        let m = read_binary(&mut Cursor::new(buf)).unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.facets[0].verts[1], Point::new(1., 0., 0.));
        // Winding is kept as stored.
        assert_eq!(m.facets[1].verts[1], Point::new(0., 1., 2.));
        assert_eq!(m.facets[1].verts[2], Point::new(1., 0., 2.5));
    }

    #[test]
    fn zero_triangles() {
        let m = read_binary(&mut Cursor::new(file(0, &[]))).unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut buf = file(1, &[TRI_A]);
        buf.extend_from_slice(b"garbage");
        let m = read_binary(&mut Cursor::new(buf)).unwrap();
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn attribute_bytes_are_skipped() {
        let mut buf = file(2, &[]);
        record(&mut buf, TRI_A, 0x7fff);
        record(&mut buf, TRI_B, 0);
        let m = read_binary(&mut Cursor::new(buf)).unwrap();
        assert_eq!(m.facets[1].verts[2], Point::new(1., 0., 2.5));
    }

    #[test]
    fn truncated_record() {
        let mut buf = file(3, &[TRI_A, TRI_B]);
        buf.extend_from_slice(&[0; 20]);
        match read_binary(&mut Cursor::new(buf)) {
            Err(StlError::Truncated { expected: 3, read: 2 }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn truncated_header() {
        match read_binary(&mut Cursor::new(vec![0u8; 40])) {
            Err(StlError::UnexpectedEof { expected: "80-byte header" }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn truncated_count() {
        let err = read_binary(&mut Cursor::new(vec![0u8; HEADER_LEN + 2])).unwrap_err();
        assert_eq!(err.to_string(), "unexpected end of input, expected \"triangle count\"");
    }
}
