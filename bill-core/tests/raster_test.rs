use bill_core::raster::{encode_png, fill_rect};
use image::{Rgb, RgbImage};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const RED: Rgb<u8> = Rgb([200, 30, 30]);

#[test]
fn fill_rect_covers_whole_pixels() {
    let mut image = RgbImage::from_pixel(10, 10, WHITE);
    fill_rect(&mut image, 2.0, 3.0, 4.0, 2.0, RED);
    assert_eq!(*image.get_pixel(2, 3), RED);
    assert_eq!(*image.get_pixel(5, 4), RED);
    assert_eq!(*image.get_pixel(6, 4), WHITE);
    assert_eq!(*image.get_pixel(2, 5), WHITE);
    assert_eq!(image.pixels().filter(|p| **p == RED).count(), 8);
}

#[test]
fn fill_rect_is_clipped_to_image() {
    let mut image = RgbImage::from_pixel(10, 10, WHITE);
    fill_rect(&mut image, -5.0, 8.0, 100.0, 100.0, RED);
    assert_eq!(image.pixels().filter(|p| **p == RED).count(), 20);
    assert_eq!(*image.get_pixel(0, 7), WHITE);
}

#[test]
fn fill_rect_outside_image_is_noop() {
    let mut image = RgbImage::from_pixel(4, 4, WHITE);
    fill_rect(&mut image, 10.0, 10.0, 5.0, 5.0, RED);
    fill_rect(&mut image, -8.0, -8.0, 3.0, 3.0, RED);
    assert!(image.pixels().all(|p| *p == WHITE));
}

#[test]
fn encode_png_round_trips_pixels() {
    let mut image = RgbImage::from_pixel(8, 5, WHITE);
    fill_rect(&mut image, 0.0, 0.0, 8.0, 1.0, RED);
    let data = encode_png(&image).unwrap();
    assert_eq!(&data[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

    let decoder = png::Decoder::new(data.as_slice());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    assert_eq!((info.width, info.height), (8, 5));
    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(&buf[..info.buffer_size()], image.as_raw().as_slice());
}
