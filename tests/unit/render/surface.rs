use super::*;

fn frame(data: Vec<u8>, premultiplied: bool) -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 1,
        data,
        premultiplied,
    }
}

#[test]
fn pixel_lookup_is_bounds_checked() {
    let f = frame(vec![1, 2, 3, 4, 5, 6, 7, 8], true);
    assert_eq!(f.pixel(0, 0), Some([1, 2, 3, 4]));
    assert_eq!(f.pixel(1, 0), Some([5, 6, 7, 8]));
    assert_eq!(f.pixel(2, 0), None);
    assert_eq!(f.pixel(0, 1), None);
}

#[test]
fn unpremultiply_restores_straight_color() {
    let f = frame(vec![128, 64, 0, 128, 10, 20, 30, 255], true);
    let out = f.to_straight_rgba8();
    assert_eq!(&out[..4], &[255, 128, 0, 128]);
    assert_eq!(&out[4..], &[10, 20, 30, 255]);
}

#[test]
fn straight_frames_pass_through() {
    let f = frame(vec![128, 64, 0, 128, 0, 0, 0, 0], false);
    assert_eq!(f.to_straight_rgba8(), f.data);
}
