use std::io::Read;
use std::str::{Lines, SplitAsciiWhitespace};
use crate::error::{Result, StlError};
use crate::geom::{Facet, Mesh, Point};
use crate::stl::Solid;


/// Whitespace-delimited words of the input, each tagged with its 1-based line number.
struct Tokens<'a> {
    lines: Lines<'a>,
    words: SplitAsciiWhitespace<'a>,
    line: usize,
    peeked: Option<(usize, &'a str)>,
}

impl<'a> Tokens<'a> {
    fn new(s: &'a str) -> Tokens<'a> {
        Tokens {
            lines: s.lines(),
            words: "".split_ascii_whitespace(),
            line: 0,
            peeked: None,
        }
    }

    fn next_word(&mut self) -> Option<(usize, &'a str)> {
        if let Some(t) = self.peeked.take() {
            return Some(t);
        }
        loop {
            if let Some(w) = self.words.next() {
                return Some((self.line, w));
            }
            let l = self.lines.next()?;
            self.line += 1;
            self.words = l.split_ascii_whitespace();
        }
    }

    fn peek(&mut self) -> Option<&'a str> {
        if self.peeked.is_none() {
            self.peeked = self.next_word();
        }
        self.peeked.map(|(_, w)| w)
    }

    /// Take the next word, failing at end of input.  `what` describes the wanted token.
    fn take(&mut self, what: &'static str) -> Result<(usize, &'a str)> {
        self.next_word().ok_or(StlError::UnexpectedEof { expected: what })
    }

    fn expect(&mut self, keyword: &'static str) -> Result<()> {
        let (line, w) = self.take(keyword)?;
        if w != keyword {
            return Err(StlError::UnexpectedToken {
                line,
                expected: keyword,
                found: w.to_owned(),
            });
        }
        Ok(())
    }

    fn float(&mut self) -> Result<f32> {
        let (line, w) = self.take("<float>")?;
        let x = w.parse::<f32>().map_err(|source| StlError::InvalidFloat {
            line,
            token: w.to_owned(),
            source,
        })?;
        if x.is_infinite() && !is_inf_literal(w) {
            return Err(StlError::FloatOutOfRange {
                line,
                token: w.to_owned(),
            });
        }
        Ok(x)
    }

    fn point(&mut self) -> Result<Point> {
        Ok(Point::new(self.float()?, self.float()?, self.float()?))
    }

    fn vertex(&mut self) -> Result<Point> {
        self.expect("vertex")?;
        self.point()
    }

    /// Parse the body of a facet block.  The leading `facet` keyword is already consumed.
    fn facet(&mut self) -> Result<Facet> {
        self.expect("normal")?;
        let _normal = self.point()?;
        self.expect("outer")?;
        self.expect("loop")?;
        let facet = Facet::new(self.vertex()?, self.vertex()?, self.vertex()?);
        self.expect("endloop")?;
        self.expect("endfacet")?;
        Ok(facet)
    }
}


/// `inf`/`infinity` spelled out, which `str::parse` accepts.  Any other token that parses to an
/// infinity overflowed `f32`.
fn is_inf_literal(w: &str) -> bool {
    let w = w.trim_start_matches(|c| c == '+' || c == '-');
    w.eq_ignore_ascii_case("inf") || w.eq_ignore_ascii_case("infinity")
}

pub fn read_ascii<R: Read>(r: &mut R) -> Result<Solid> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;
    let text = String::from_utf8(buf).map_err(|_| StlError::InvalidUtf8)?;
    parse_ascii(&text)
}

pub fn parse_ascii(text: &str) -> Result<Solid> {
    let mut t = Tokens::new(text);
    t.expect("solid")?;

    let name = match t.peek() {
        // No name on the header; the first keyword follows `solid` directly.
        Some("facet") | Some("endsolid") => None,
        Some(_) => t.next_word().map(|(_, w)| w.to_owned()),
        None => None,
    };

    let mut facets = Vec::new();
    loop {
        let (line, w) = t.take("endsolid")?;
        match w {
            "facet" => facets.push(t.facet()?),
            "endsolid" => break,
            _ => return Err(StlError::UnexpectedToken {
                line,
                expected: "endsolid",
                found: w.to_owned(),
            }),
        }
    }
    // The closing name isn't checked against the header, and anything after it is ignored.
    let _ = t.next_word();

    Ok(Solid {
        name,
        mesh: Mesh::from(facets),
    })
}
