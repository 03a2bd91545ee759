use pdf_recrop::*;

#[test]
fn test_split_options_default_spec() {
    let options = SplitOptions::default();
    assert_eq!(options.source, SheetSize::A3);
    assert_eq!(options.target, SheetSize::A4);
    assert_eq!(options.overlap_mm, 4.0);

    // A3 read landscape is 420mm wide, each A4 portrait slice 210mm
    let spec = options.split_spec();
    assert_eq!(spec.source_width_mm, 420.0);
    assert_eq!(spec.slice_width_mm, 210.0);
    assert_eq!(spec.overlap_mm, 4.0);

    assert!(options.validate().is_ok());
}

#[test]
fn test_split_options_validation() {
    let mut options = SplitOptions::default();

    options.overlap_mm = -0.5;
    assert!(matches!(
        options.validate(),
        Err(RecropError::Config(_))
    ));

    // A5 landscape is only 210mm wide, too narrow for a 210mm slice plus
    // overlap
    options = SplitOptions {
        source: SheetSize::A5,
        target: SheetSize::A4,
        overlap_mm: 4.0,
    };
    assert!(matches!(
        options.validate(),
        Err(RecropError::Config(_))
    ));

    // A4 landscape (297mm) into two A5 slices (148mm) is fine
    options = SplitOptions {
        source: SheetSize::A4,
        target: SheetSize::A5,
        overlap_mm: 4.0,
    };
    assert!(options.validate().is_ok());
}

#[test]
fn test_trim_options_default_spec() {
    let options = TrimOptions::default();
    let spec = options.trim_spec();

    assert_eq!(spec.scan_width_mm, 432.65);
    assert_eq!(spec.scan_height_mm, 297.01);
    // Nominal A3 scanned landscape
    assert_eq!(spec.nominal_width_mm, 420.0);
    assert_eq!(spec.nominal_height_mm, 297.0);
    assert_eq!(options.pages, PageRange::First);

    assert!(options.validate().is_ok());
}

#[test]
fn test_trim_options_validation() {
    // Nominal sheet larger than the scan area means a negative trim
    let options = TrimOptions {
        scan_width_mm: 400.0,
        scan_height_mm: 297.01,
        nominal: SheetSize::A3,
        nominal_orientation: Orientation::Landscape,
        pages: PageRange::First,
    };
    assert!(matches!(
        options.validate(),
        Err(RecropError::Config(_))
    ));
}

#[test]
fn test_trim_options_nominal_orientation() {
    let options = TrimOptions {
        scan_width_mm: 432.65,
        scan_height_mm: 432.65,
        nominal: SheetSize::A3,
        nominal_orientation: Orientation::Portrait,
        pages: PageRange::All,
    };
    let spec = options.trim_spec();
    assert_eq!(spec.nominal_width_mm, 297.0);
    assert_eq!(spec.nominal_height_mm, 420.0);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_split_options() {
    use tempfile::NamedTempFile;

    let options = SplitOptions {
        source: SheetSize::Custom {
            width_mm: 300.0,
            height_mm: 450.0,
        },
        target: SheetSize::A4,
        overlap_mm: 2.5,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = SplitOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_trim_options() {
    use tempfile::NamedTempFile;

    let options = TrimOptions {
        scan_width_mm: 430.0,
        scan_height_mm: 298.0,
        nominal: SheetSize::A3,
        nominal_orientation: Orientation::Landscape,
        pages: PageRange::All,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = TrimOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}
