use pdf_recrop::*;

#[test]
fn test_sheet_size_dimensions() {
    assert_eq!(SheetSize::A3.dimensions_mm(), (297.0, 420.0));
    assert_eq!(SheetSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(SheetSize::A5.dimensions_mm(), (148.0, 210.0));
    assert_eq!(SheetSize::Letter.dimensions_mm(), (215.9, 279.4));
    assert_eq!(SheetSize::Ledger.dimensions_mm(), (279.4, 431.8));

    let custom = SheetSize::Custom {
        width_mm: 100.0,
        height_mm: 200.0,
    };
    assert_eq!(custom.dimensions_mm(), (100.0, 200.0));
}

#[test]
fn test_sheet_size_orientation() {
    assert_eq!(
        SheetSize::A3.dimensions_with_orientation(Orientation::Portrait),
        (297.0, 420.0)
    );
    assert_eq!(
        SheetSize::A3.dimensions_with_orientation(Orientation::Landscape),
        (420.0, 297.0)
    );
}

#[test]
fn test_page_geometry_rejects_degenerate_boxes() {
    assert!(PageGeometry::new(0.0, 0.0, 612.0, 792.0).is_ok());
    assert!(matches!(
        PageGeometry::new(0.0, 0.0, 0.0, 792.0),
        Err(RecropError::Malformed(_))
    ));
    assert!(matches!(
        PageGeometry::new(0.0, 0.0, 612.0, -1.0),
        Err(RecropError::Malformed(_))
    ));
}

#[test]
fn test_crop_rect_extent() {
    let rect = CropRect {
        lower_left: (10.0, 20.0),
        upper_right: (110.0, 220.0),
    };
    assert_eq!(rect.width(), 100.0);
    assert_eq!(rect.height(), 200.0);
}
