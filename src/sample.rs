use crate::analysis::types::ImageHandle;

static SAMPLE_IMAGE: &[u8] = include_bytes!("../assets/sample-retina.png");

pub const SAMPLE_IMAGE_NAME: &str = "sample-retinal-image.png";

/// Supplies the "use sample image" affordance. Injected into the app state
/// at construction so sessions never reach for a module-level asset.
pub trait SampleImageProvider: Send + Sync {
    fn sample(&self) -> ImageHandle;
}

/// Default provider backed by the image compiled into the binary.
pub struct BundledSample;

impl SampleImageProvider for BundledSample {
    fn sample(&self) -> ImageHandle {
        ImageHandle::new(SAMPLE_IMAGE_NAME, SAMPLE_IMAGE.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_sample_has_a_name_and_bytes() {
        let image = BundledSample.sample();
        assert_eq!(image.name, SAMPLE_IMAGE_NAME);
        assert!(!image.bytes.is_empty());
        assert_eq!(image.size_bytes, image.bytes.len() as u64);
    }
}
