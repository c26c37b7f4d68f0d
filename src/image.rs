use crate::domain::*;
use crate::error::*;
use crate::util::*;

/// Heat map of a field using the TURBO gradient,
/// values are normalized to the field's own range.
/// Image x runs along columns, y along rows.
pub fn image2d<T, FieldType, P>(field: &FieldType, path: &P) -> Result<()>
where
    T: FloatTrait,
    FieldType: FieldView<T>,
    P: AsRef<std::path::Path>,
{
    log::info!("Writing: {:?}", path.as_ref());
    let aabb = field.aabb();
    let exclusive_bounds = aabb.exclusive_bounds();
    let gradient = colorous::TURBO;

    let (min, max) = field
        .buffer()
        .iter()
        .map(|v| v.as_f64())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let range = if max > min { max - min } else { 1.0 };

    let mut img = ::image::RgbImage::new(
        exclusive_bounds[1] as u32,
        exclusive_bounds[0] as u32,
    );
    for coord in aabb.coord_iter(field.layout()) {
        let r = (field.view(&coord).as_f64() - min) / range;
        let c = gradient.eval_continuous(r.clamp(0.0, 1.0));
        let offset = coord - aabb.min();
        img.put_pixel(
            offset[1] as u32,
            offset[0] as u32,
            ::image::Rgb(c.as_array()),
        );
    }
    img.save(path)?;
    Ok(())
}
