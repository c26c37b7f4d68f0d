use crate::domain::*;
use crate::error::*;
use crate::util::*;
use std::io::prelude::*;

/// One line per grid row, values separated by commas.
pub fn write_csv<T, FieldType, P>(field: &FieldType, path: &P) -> Result<()>
where
    T: FloatTrait,
    FieldType: FieldView<T>,
    P: AsRef<std::path::Path>,
{
    log::info!("Writing: {:?}", path.as_ref());
    let mut output = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_rows(&mut output, field, ", ", None)?;
    output.flush()?;
    Ok(())
}

/// Write `field` row by row, optionally with a fixed number of decimals.
pub fn write_rows<T, FieldType, W>(
    output: &mut W,
    field: &FieldType,
    separator: &str,
    precision: Option<usize>,
) -> std::io::Result<()>
where
    T: FloatTrait,
    FieldType: FieldView<T>,
    W: Write,
{
    let aabb = field.aabb();
    for r in aabb.bounds[(0, 0)]..=aabb.bounds[(0, 1)] {
        for c in aabb.bounds[(1, 0)]..=aabb.bounds[(1, 1)] {
            if c != aabb.bounds[(1, 0)] {
                write!(output, "{separator}")?;
            }
            let v = field.view(&vector![r, c]);
            match precision {
                Some(p) => write!(output, "{v:.p$}")?,
                None => write!(output, "{v}")?,
            }
        }
        writeln!(output)?;
    }
    Ok(())
}
