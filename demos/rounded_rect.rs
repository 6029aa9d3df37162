use rounded_polygon::polygon::{
    OutlineBuilder, Rect, RectCorners, polygon_area, rounded_rect_corners, rounded_rect_outline,
};

fn main() {
    env_logger::init();

    card_outline();
    tab_outline();
    flattened_form();
}

/// All four corners rounded, the common card/button shape.
fn card_outline() {
    let rect = Rect::new(0.0, 0.0, 240.0, 120.0);
    let outline = rounded_rect_outline(rect, RectCorners::ALL, 16.0);
    assert_eq!(outline.arc_count(), 4, "card should have one arc per corner");
    assert!(outline.is_closed(), "outline should end where it starts");

    let expected_area = 240.0 * 120.0 - (4.0 - std::f64::consts::PI) * 16.0 * 16.0;
    assert!(
        (outline.area() - expected_area).abs() < 1e-6,
        "area should be the rect area minus the four corner cut offs"
    );

    log::info!(
        "card: area {:.3}, path length {:.3}",
        outline.area(),
        outline.path_length()
    );
    println!("<path d=\"{}\"/>", outline.to_svg_path_data());
}

/// Only the top corners rounded, as used for tab headers.
fn tab_outline() {
    let rect: Rect<f64> = Rect::new(20.0, 20.0, 100.0, 32.0);
    let corners = RectCorners::TOP_LEFT | RectCorners::TOP_RIGHT;
    let outline = rounded_rect_outline(rect, corners, 8.0);
    assert_eq!(outline.arc_count(), 2, "tab should only round the top corners");

    let extents = outline.extents().expect("non empty outline has extents");
    assert!((extents.min_x - 20.0).abs() < 1e-9);
    assert!((extents.max_y - 52.0).abs() < 1e-9);

    log::info!("tab: {} segments", outline.segments().len());
    println!("<path d=\"{}\"/>", outline.to_svg_path_data());
}

/// Flattening arcs to short chords for renderers that only draw straight lines.
fn flattened_form() {
    let rect: Rect<f64> = Rect::new(0.0, 0.0, 50.0, 50.0);
    let vertexes = rounded_rect_corners(rect, RectCorners::ALL, 10.0);
    let outline = OutlineBuilder::new(10.0).build(&vertexes);

    let coarse = outline.flatten(0.5);
    let fine = outline.flatten(0.01);
    assert!(fine.len() > coarse.len(), "smaller error should add chords");
    assert!(
        (polygon_area(&fine) - outline.area()).abs() < 0.5,
        "fine chords should cover nearly the same area"
    );

    log::info!(
        "flattened: {} points at 0.5 error, {} points at 0.01 error",
        coarse.len(),
        fine.len()
    );
    let points: Vec<String> = coarse.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
    println!("<polygon points=\"{}\"/>", points.join(" "));
}
