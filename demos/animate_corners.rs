use rounded_polygon::polygon::{
    PolygonVertex, Rect, RectCorners, blend, blend_resolved, build_outline, rounded_rect_corners,
};

const FRAME_COUNT: usize = 8;
const CORNER_RADIUS: f64 = 24.0;

fn main() {
    env_logger::init();

    let rect = Rect::new(0.0, 0.0, 160.0, 160.0);
    let sharp = rounded_rect_corners(rect, RectCorners::NONE, CORNER_RADIUS);
    let rounded = rounded_rect_corners(rect, RectCorners::ALL, CORNER_RADIUS);

    morph_flags(&sharp, &rounded);
    morph_radius(&sharp, &rounded);
    morph_shape();
}

/// Plain blending: positions move but every corner keeps the flag of the starting keyframe.
fn morph_flags(sharp: &[PolygonVertex], rounded: &[PolygonVertex]) {
    for i in 0..=FRAME_COUNT {
        let fraction = i as f64 / FRAME_COUNT as f64;
        let rounding = blend(sharp, rounded, fraction).expect("same vertex count");
        let sharpening = blend(rounded, sharp, fraction).expect("same vertex count");
        let rounding_arcs = build_outline(&rounding, CORNER_RADIUS).arc_count();
        let sharpening_arcs = build_outline(&sharpening, CORNER_RADIUS).arc_count();
        log::debug!(
            "flag blend {:.3}: {} and {} arcs",
            fraction,
            rounding_arcs,
            sharpening_arcs
        );
        assert_eq!(rounding_arcs, 0, "sharp start stays sharp");
        assert_eq!(sharpening_arcs, 4, "rounded start stays rounded");
    }
}

/// Resolved blending: the drawn radius grows smoothly, printed as one JSON outline per frame.
fn morph_radius(sharp: &[PolygonVertex], rounded: &[PolygonVertex]) {
    let mut last_area = f64::INFINITY;
    for i in 0..=FRAME_COUNT {
        let fraction = i as f64 / FRAME_COUNT as f64;
        let frame =
            blend_resolved(sharp, rounded, fraction, CORNER_RADIUS).expect("same vertex count");
        let outline = build_outline(&frame, CORNER_RADIUS);
        let area = outline.area();
        assert!(area <= last_area, "rounding only removes area");
        last_area = area;

        log::info!("radius blend {:.3}: area {:.3}", fraction, area);
        match serde_json::to_string(&outline) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("failed to serialize frame {}: {}", i, e),
        }
    }
}

/// Morphing between two different shapes with the same vertex count.
fn morph_shape() {
    let square = rounded_polygon::polygon_closed![
        (0.0, 0.0, true),
        (100.0, 0.0, true),
        (100.0, 100.0, true),
        (0.0, 100.0, true),
    ];
    let diamond = rounded_polygon::polygon_closed![
        (50.0, -20.0, true, 4.0),
        (120.0, 50.0, true, 4.0),
        (50.0, 120.0, true, 4.0),
        (-20.0, 50.0, true, 4.0),
    ];

    let mismatched = blend(&square, &diamond[..3], 0.5);
    if let Err(e) = &mismatched {
        log::warn!("expected blend failure: {}", e);
    }
    assert!(mismatched.is_err());

    for i in 0..=FRAME_COUNT {
        let fraction = i as f64 / FRAME_COUNT as f64;
        let frame = blend(&square, &diamond, fraction).expect("same vertex count");
        let outline = build_outline(&frame, 12.0);
        assert_eq!(outline.arc_count(), 4);
        println!("{}", outline.to_svg_path_data());
    }
}
