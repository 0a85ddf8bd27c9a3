use std::io::{self, Read};
use byteorder::{ReadBytesExt, LE};
use crate::geom::{Facet, Point};

const NORMAL_LEN: u64 = 3 * 4;

pub trait ReadFrom: Sized {
    fn read_from<R: Read + ?Sized>(r: &mut R) -> io::Result<Self>;
}

macro_rules! read_byteorder {
    ($($ty:ty, $read_one:ident;)*) => {
        $(
            impl ReadFrom for $ty {
                fn read_from<R: Read + ?Sized>(r: &mut R) -> io::Result<Self> {
                    r.$read_one::<LE>()
                }
            }
        )*
    };
}

read_byteorder! {
    u16, read_u16;
    u32, read_u32;
    f32, read_f32;
}

impl ReadFrom for Point {
    fn read_from<R: Read + ?Sized>(r: &mut R) -> io::Result<Self> {
        Ok(Point::new(r.read_one()?, r.read_one()?, r.read_one()?))
    }
}

/// One 50-byte binary STL triangle record, returned with its attribute byte count.  The normal
/// is skipped.
impl ReadFrom for (Facet, u16) {
    fn read_from<R: Read + ?Sized>(r: &mut R) -> io::Result<Self> {
        r.skip(NORMAL_LEN)?;
        let facet = Facet::new(r.read_one()?, r.read_one()?, r.read_one()?);
        let attr: u16 = r.read_one()?;
        Ok((facet, attr))
    }
}


pub trait ReadExt: Read {
    fn read_one<T: ReadFrom>(&mut self) -> io::Result<T> {
        T::read_from(self)
    }

    /// Read and throw away exactly `n` bytes.
    fn skip(&mut self, n: u64) -> io::Result<()> {
        let copied = io::copy(&mut self.take(n), &mut io::sink())?;
        if copied != n {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected {} bytes, but only {} remained", n, copied),
            ));
        }
        Ok(())
    }
}

impl<R: Read + ?Sized> ReadExt for R {}
