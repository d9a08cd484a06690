use cairo::{Context, ImageSurface};
use waymeasure::draw::{
    Color, FontDescriptor, GridStyle, LabelStyle, LineSegment, Point, SceneStyle, SegmentStore,
    Stroke, render_scene,
};

const WIDTH: i32 = 200;
const HEIGHT: i32 = 150;

fn scene_style() -> SceneStyle {
    SceneStyle {
        background: Color::new(1.0, 1.0, 1.0, 1.0),
        grid: GridStyle {
            spacing: 20.0,
            color: Color::new(0.82, 0.85, 0.88, 1.0),
        },
    }
}

fn stroke() -> Stroke {
    Stroke {
        color: Color::new(0.0, 0.0, 0.0, 1.0),
        thickness: 2.0,
    }
}

fn label_style() -> LabelStyle {
    LabelStyle {
        size: 12.0,
        color: Color::new(0.0, 0.0, 0.0, 1.0),
        font: FontDescriptor::default(),
        background_enabled: true,
        unit: "px".to_string(),
        precision: 1,
    }
}

fn surface_with_context() -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, WIDTH, HEIGHT).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_bytes(surface: &mut ImageSurface) -> Vec<u8> {
    surface.flush();
    surface.data().map(|data| data.to_vec()).unwrap_or_default()
}

fn render_to_bytes(store: &SegmentStore, preview: Option<&LineSegment>) -> Vec<u8> {
    let (mut surface, ctx) = surface_with_context();
    render_scene(
        &ctx,
        WIDTH as f64,
        HEIGHT as f64,
        &scene_style(),
        &stroke(),
        &label_style(),
        store,
        preview,
    );
    drop(ctx);
    surface_bytes(&mut surface)
}

fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
    LineSegment {
        start: Point::new(x1, y1),
        end: Point::new(x2, y2),
    }
}

#[test]
fn empty_scene_renders_background_and_grid() {
    let store = SegmentStore::new();
    let bytes = render_to_bytes(&store, None);

    assert!(!bytes.is_empty());
    // White sheet plus gray grid rules: some pixels must differ from pure white.
    assert!(bytes.iter().any(|byte| *byte != 0xFF));
    // And the sheet itself must be painted (no fully transparent pixels).
    assert!(bytes.chunks_exact(4).all(|px| px[3] == 0xFF));
}

#[test]
fn redraw_is_pixel_identical_for_unchanged_state() {
    let mut store = SegmentStore::new();
    store.try_commit(segment(10.0, 10.0, 150.0, 10.0), 0);
    store.try_commit(segment(150.0, 10.0, 150.0, 120.0), 0);
    let preview = segment(20.0, 100.0, 90.0, 130.0);

    let first = render_to_bytes(&store, Some(&preview));
    let second = render_to_bytes(&store, Some(&preview));

    assert_eq!(first, second);
}

#[test]
fn committed_segments_change_the_output() {
    let empty = SegmentStore::new();
    let mut with_line = SegmentStore::new();
    with_line.try_commit(segment(10.0, 75.0, 190.0, 75.0), 0);

    assert_ne!(render_to_bytes(&empty, None), render_to_bytes(&with_line, None));
}

#[test]
fn preview_layers_draw_on_top_of_committed_state() {
    let mut store = SegmentStore::new();
    store.try_commit(segment(10.0, 10.0, 100.0, 10.0), 0);

    let without_preview = render_to_bytes(&store, None);
    let preview = segment(30.0, 40.0, 160.0, 110.0);
    let with_preview = render_to_bytes(&store, Some(&preview));

    assert_ne!(without_preview, with_preview);
}

#[test]
fn zero_length_preview_still_renders_a_marker_and_label() {
    let store = SegmentStore::new();
    let without = render_to_bytes(&store, None);
    let preview = segment(100.0, 75.0, 100.0, 75.0);
    let with = render_to_bytes(&store, Some(&preview));

    assert_ne!(without, with);
}
