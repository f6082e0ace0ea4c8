use std::path::Path;

use pmtplot::app::*;

#[test]
fn bundled_icon_rasterizes_at_its_svg_size() {
    let icon = load_icon_svg(Path::new(ICON_PATH)).expect("icon.svg should load");
    assert_eq!((icon.width, icon.height), (64, 64));
    assert_eq!(icon.rgba.len(), 64 * 64 * 4);
    assert!(icon.rgba.chunks(4).any(|px| px[3] != 0), "icon is fully transparent");
}

#[test]
fn missing_icon_file_is_none() {
    assert!(load_icon_svg(Path::new("/nonexistent/pmtplot-icon.svg")).is_none());
}

#[test]
fn non_svg_icon_file_is_none() {
    let path = std::env::temp_dir().join(format!("pmtplot-not-an-icon-{}.svg", std::process::id()));
    std::fs::write(&path, b"this is not svg").unwrap();
    let icon = load_icon_svg(&path);
    let _ = std::fs::remove_file(&path);
    assert!(icon.is_none());
}
