use std::io::{Read, Write};
use log::info;
use crate::error::Result;
use crate::modify;
use crate::scad;
use crate::stl;

pub const DEFAULT_MODULE_NAME: &str = "shape";

#[derive(Clone, Debug)]
pub struct Options {
    /// Name of the generated module.  When unset, the solid name from an ASCII header is used,
    /// falling back to `shape`.
    pub module_name: Option<String>,
    /// Center the mesh in X/Y and drop it onto `z = 0`.
    pub center: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            module_name: None,
            center: true,
        }
    }
}

impl Options {
    /// Pick the module name: explicit option, then the name declared by the file, then the
    /// default.  Empty strings count as unset.
    pub fn module_name_for(&self, declared: Option<&str>) -> String {
        self.module_name.as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| declared.filter(|s| !s.is_empty()))
            .unwrap_or(DEFAULT_MODULE_NAME)
            .to_owned()
    }
}


/// Read an STL file from `input` and write the equivalent OpenSCAD module to `output`.  Nothing
/// is written unless the whole input decodes.
pub fn convert<R: Read, W: Write>(input: R, output: &mut W, opts: &Options) -> Result<()> {
    let mut solid = stl::read_stl(input)?;

    let name = opts.module_name_for(solid.name.as_deref());
    info!("using module name {:?}", name);

    if opts.center {
        info!("centering object");
        modify::center(&mut solid.mesh);
    }

    scad::write_module(output, &name, &solid.mesh)?;
    output.flush()?;
    Ok(())
}
