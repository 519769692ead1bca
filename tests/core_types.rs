use cldraw::lowlevel::{binary_threshold, gaussian_blur, gaussian_vector};
use cldraw::{CldConfig, CldError, ErrorKind, FlowDog, ImageView, LineDrawing, Raster};

#[test]
fn image_view_rejects_invalid_dimensions() {
    let data = [0u8; 4];

    let err = ImageView::from_slice(&data, 0, 1).err().unwrap();
    assert_eq!(
        err,
        CldError::InvalidDimensions {
            width: 0,
            height: 1,
        }
    );
    assert_eq!(err.kind(), ErrorKind::Initialization);

    let err = ImageView::from_slice(&data, 1, 0).err().unwrap();
    assert_eq!(
        err,
        CldError::InvalidDimensions {
            width: 1,
            height: 0,
        }
    );
}

#[test]
fn image_view_rejects_invalid_stride_and_small_buffer() {
    let data = [0u8; 8];
    let err = ImageView::new(&data, 4, 1, 3).err().unwrap();
    assert_eq!(
        err,
        CldError::InvalidStride {
            width: 4,
            stride: 3,
        }
    );

    let err = ImageView::new(&data[..3], 2, 2, 2).err().unwrap();
    assert_eq!(err, CldError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn raster_copies_strided_views() {
    let data: Vec<u8> = (0u8..12).collect();
    let view = ImageView::new(&data, 3, 3, 4).unwrap();
    let raster = Raster::from_view(view).unwrap();
    assert_eq!(raster.data(), &[0, 1, 2, 4, 5, 6, 8, 9, 10]);
    assert_eq!(raster.get(2, 1), Some(6));
    assert_eq!(raster.get(3, 0), None);
    assert_eq!(raster.into_vec(), vec![0, 1, 2, 4, 5, 6, 8, 9, 10]);
}

#[test]
fn image_view_get_skips_row_padding() {
    let data: Vec<u8> = (0u8..12).collect();
    let view = ImageView::new(&data, 3, 3, 4).unwrap();
    assert_eq!(view.get(0, 1), Some(&4));
    assert_eq!(view.get(2, 2), Some(&10));
    assert_eq!(view.get(3, 0), None);
    assert_eq!(view.get(0, 3), None);
}

#[test]
fn raster_rejects_wrong_buffer_length() {
    let err = Raster::new(vec![0u8; 5], 2, 3).err().unwrap();
    assert_eq!(err, CldError::BufferTooSmall { needed: 6, got: 5 });
    let err = Raster::new(vec![0u8; 7], 2, 3).err().unwrap();
    assert_eq!(
        err,
        CldError::InvalidDimensions {
            width: 2,
            height: 3,
        }
    );
}

#[test]
fn zero_area_source_is_an_initialization_error() {
    let data: [u8; 0] = [];
    let err = ImageView::from_slice(&data, 0, 0).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Initialization);
}

#[test]
fn configuration_errors_are_reported_by_kind() {
    let data = vec![0u8; 9];
    let view = ImageView::from_slice(&data, 3, 3).unwrap();
    for cfg in [
        CldConfig {
            sigma_r: 0.0,
            ..CldConfig::default()
        },
        CldConfig {
            sigma_m: -2.0,
            ..CldConfig::default()
        },
        CldConfig {
            sigma_c: f64::NAN,
            ..CldConfig::default()
        },
        CldConfig {
            blur_size: 2,
            ..CldConfig::default()
        },
    ] {
        let err = LineDrawing::new(view, cfg).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    let err = gaussian_vector(0.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn flow_dog_kernels_follow_sigmas() {
    let filter = FlowDog::new(&CldConfig::default()).unwrap();
    assert_eq!(filter.center_kernel().len(), 5);
    assert_eq!(filter.surround_kernel().len(), 10);
    assert_eq!(filter.flow_kernel().len(), 11);
}

#[test]
fn filter_rejects_mismatched_rasters() {
    let data = vec![0u8; 16];
    let drawing = LineDrawing::new(
        ImageView::from_slice(&data, 4, 4).unwrap(),
        CldConfig::default(),
    )
    .unwrap();
    let other = Raster::filled(5, 4, 0.0f32).unwrap();
    let err = drawing
        .filter()
        .gradient_dog(&other, drawing.etf())
        .err()
        .unwrap();
    assert_eq!(
        err,
        CldError::DimensionMismatch {
            expected_width: 4,
            expected_height: 4,
            width: 5,
            height: 4,
        }
    );
}

#[test]
fn blur_and_threshold_keep_dimensions() {
    let src = Raster::new((0u8..30).collect(), 6, 5).unwrap();
    let blurred = gaussian_blur(&src, 5, false).unwrap();
    assert_eq!((blurred.width(), blurred.height()), (6, 5));

    let unit = src.to_unit_f32();
    let binary = binary_threshold(&unit, 0.05, false).unwrap();
    assert_eq!((binary.width(), binary.height()), (6, 5));
}
