use ndarray::Array2;

use planetid_core::config::MaskConfig;
use planetid_core::detection::largest_blob;

fn empty_mask() -> Array2<bool> {
    Array2::from_elem((200, 200), false)
}

fn fill_rect(mask: &mut Array2<bool>, x0: usize, y0: usize, x1: usize, y1: usize) {
    for y in y0..y1 {
        for x in x0..x1 {
            mask[[y, x]] = true;
        }
    }
}

#[test]
fn test_empty_mask_has_no_blob() {
    assert!(largest_blob(&empty_mask(), &MaskConfig::default()).is_none());
}

#[test]
fn test_single_component_bbox_is_tight() {
    let mut mask = empty_mask();
    fill_rect(&mut mask, 40, 60, 120, 150);

    let blob = largest_blob(&mask, &MaskConfig::default()).unwrap();
    assert_eq!(blob.area, 80 * 90);
    assert_eq!(blob.bbox, (40, 60, 119, 149));
}

#[test]
fn test_largest_of_two_components_wins() {
    let mut mask = empty_mask();
    // Small star far from the planet.
    fill_rect(&mut mask, 180, 10, 184, 14);
    // Large planet body.
    fill_rect(&mut mask, 50, 80, 110, 140);

    let blob = largest_blob(&mask, &MaskConfig::default()).unwrap();
    assert_eq!(blob.bbox, (50, 80, 109, 139));
    assert_eq!(blob.area, 60 * 60);
}

#[test]
fn test_equal_areas_tie_break_to_scan_order() {
    let mut mask = empty_mask();
    // Two identical squares; the outer loop runs over x ascending, so the
    // left one is discovered first and must win the tie.
    fill_rect(&mut mask, 20, 100, 30, 110);
    fill_rect(&mut mask, 120, 100, 130, 110);

    let blob = largest_blob(&mask, &MaskConfig::default()).unwrap();
    assert_eq!(blob.bbox, (20, 100, 29, 109));
}

#[test]
fn test_diagonal_touch_is_not_connected() {
    let mut mask = empty_mask();
    // Two 4x4 squares meeting only at a corner: 4-connectivity keeps them
    // separate components.
    fill_rect(&mut mask, 100, 100, 104, 104);
    fill_rect(&mut mask, 104, 104, 108, 108);

    let blob = largest_blob(&mask, &MaskConfig::default()).unwrap();
    assert_eq!(blob.area, 16);
}

#[test]
fn test_component_off_stride_grid_is_missed() {
    let mut mask = empty_mask();
    // A lone pixel at odd coordinates never lands on the stride-2 seed grid.
    // This is the documented resolution limit of the sparse seed scan.
    mask[[51, 71]] = true;

    assert!(largest_blob(&mask, &MaskConfig::default()).is_none());
}

#[test]
fn test_flood_fill_reaches_off_grid_pixels() {
    let mut mask = empty_mask();
    // An L-shaped component whose seed is on the grid but whose extremities
    // are at odd coordinates: membership must still be exact.
    fill_rect(&mut mask, 10, 10, 11, 16); // column x=10, y 10..15
    fill_rect(&mut mask, 10, 15, 16, 16); // row y=15, x 10..15

    let blob = largest_blob(&mask, &MaskConfig::default()).unwrap();
    assert_eq!(blob.area, 11);
    assert_eq!(blob.bbox, (10, 10, 15, 15));
}

#[test]
fn test_full_mask_is_one_component() {
    let mask = Array2::from_elem((200, 200), true);
    let blob = largest_blob(&mask, &MaskConfig::default()).unwrap();
    assert_eq!(blob.area, 200 * 200);
    assert_eq!(blob.bbox, (0, 0, 199, 199));
}
