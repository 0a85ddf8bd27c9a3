//! OpenSCAD output: the mesh becomes a module wrapping a single `polyhedron` call.

use std::io::{self, Write};
use crate::geom::{Mesh, Point};

const POINTS_PER_LINE: usize = 3;
const FACES_PER_LINE: usize = 6;
const SEP: &str = ", ";
const INDENT: &str = "      ";


/// Format a coordinate with at most 10 decimal places and no trailing zeros: `1.5`, `2`, `0.1`.
///
/// The value is first reduced to the shortest decimal that round-trips the `f32`, so `0.1f32`
/// (stored as `0.100000001490116...`) prints as `0.1`.  Negative zero prints as `0`.
pub fn ftos(x: f32) -> String {
    let shortest = x.to_string().parse::<f64>().unwrap_or_else(|_| f64::from(x));
    let mut s = format!("{:.10}", shortest);
    if s.contains('.') {
        let len = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(len);
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}

pub fn point_to_scad(p: &Point) -> String {
    format!("[{},{},{}]", ftos(p.x), ftos(p.y), ftos(p.z))
}

/// Index list for a face whose `len` points start at `start` in the flattened point list.
pub fn face_to_scad(start: usize, len: usize) -> String {
    let idxs = (start .. start + len).map(|i| i.to_string()).collect::<Vec<_>>();
    format!("[{}]", idxs.join(","))
}

/// Group `items` into lines of `per_line`, joined by `", "`.  Every line but the last keeps a
/// trailing separator so the lines concatenate back into one list.
fn wrap_lines(items: &[String], per_line: usize) -> Vec<String> {
    let n = items.chunks(per_line).len();
    items.chunks(per_line).enumerate().map(|(i, chunk)| {
        let mut line = chunk.join(SEP);
        if i + 1 < n {
            line.push_str(SEP);
        }
        line
    }).collect()
}

pub fn write_module<W: Write>(w: &mut W, name: &str, m: &Mesh) -> io::Result<()> {
    let mut points = Vec::with_capacity(m.len() * 3);
    let mut faces = Vec::with_capacity(m.len());
    let mut ofs = 0;
    for f in &m.facets {
        points.extend(f.verts.iter().map(point_to_scad));
        faces.push(face_to_scad(ofs, f.verts.len()));
        ofs += f.verts.len();
    }

    writeln!(w, "module {}() {{", name)?;
    writeln!(w, "  polyhedron(")?;
    writeln!(w, "    points=[")?;
    for l in wrap_lines(&points, POINTS_PER_LINE) {
        writeln!(w, "{}{}", INDENT, l)?;
    }
    writeln!(w, "    ],")?;
    writeln!(w, "    faces=[")?;
    for l in wrap_lines(&faces, FACES_PER_LINE) {
        writeln!(w, "{}{}", INDENT, l)?;
    }
    writeln!(w, "    ]")?;
    writeln!(w, "  );")?;
    writeln!(w, "}}")?;
    writeln!(w, "{}();", name)?;
    Ok(())
}
