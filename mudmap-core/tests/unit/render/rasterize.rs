use super::*;
use crate::foundation::error::MudmapError;
use crate::map::palette::UNCLAIMED_TOKEN;

/// Build map text from raster rows (row 0 first), restoring source line order.
fn grid_text(width: u32, height: u32, raster_rows: &[&str]) -> String {
    let mut lines: Vec<&str> = raster_rows.to_vec();
    lines.reverse();
    format!("{width}x{height}\n{}", lines.join("\n"))
}

fn render(text: &str) -> Canvas {
    let grid = MapGrid::parse(text).unwrap();
    rasterize(&grid, &Palette::standard()).unwrap()
}

fn star() -> Rgb8 {
    Palette::standard().lookup(START_TOKEN).unwrap()
}

fn unclaimed() -> Rgb8 {
    Palette::standard().lookup(UNCLAIMED_TOKEN).unwrap()
}

fn count_pixels(canvas: &Canvas, color: Rgb8) -> usize {
    let mut n = 0;
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            if canvas.get(x, y).unwrap() == color {
                n += 1;
            }
        }
    }
    n
}

#[test]
fn rendering_is_deterministic() {
    let text = grid_text(
        6,
        4,
        &["kkkkkk", "kb*bkk", "kbbbkk", "kkkkkk"],
    );
    let grid = MapGrid::parse(&text).unwrap();
    let a = rasterize(&grid, &Palette::standard()).unwrap();
    let b = rasterize(&grid, &Palette::standard()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn terrain_tokens_paint_their_palette_colors() {
    let canvas = render("3x1\nabc");
    let p = Palette::standard();
    assert_eq!(canvas.get(0, 0).unwrap(), p.lookup('a').unwrap());
    assert_eq!(canvas.get(1, 0).unwrap(), p.lookup('b').unwrap());
    assert_eq!(canvas.get(2, 0).unwrap(), p.lookup('c').unwrap());
}

#[test]
fn unassigned_cells_of_short_rows_stay_unpainted() {
    let text = grid_text(4, 2, &["ab", "????"]);
    let canvas = render(&text);
    assert_eq!(canvas.get(2, 0).unwrap(), Rgb8::default());
    assert_eq!(canvas.get(3, 0).unwrap(), Rgb8::default());
    assert!(!canvas.is_assigned(2, 0).unwrap());
}

#[test]
fn diamond_paints_exactly_25_protected_pixels() {
    let mut rows = vec!["?????????"; 9];
    rows[4] = "????*????";
    let canvas = render(&grid_text(9, 9, &rows));

    assert_eq!(count_pixels(&canvas, star()), 25);
    for y in 0..9 {
        for x in 0..9 {
            let dist = (i64::from(x) - 4).abs() + (i64::from(y) - 4).abs();
            let expected = if dist <= START_FILL_RADIUS {
                star()
            } else {
                unclaimed()
            };
            assert_eq!(canvas.get(x, y).unwrap(), expected, "at ({x}, {y})");
            assert_eq!(
                canvas.is_assigned(x, y).unwrap(),
                dist <= START_FILL_RADIUS
            );
        }
    }
}

#[test]
fn corner_marker_clamps_onto_the_canvas() {
    let mut rows = vec!["???????"; 7];
    rows[0] = "*??????";
    let canvas = render(&grid_text(7, 7, &rows));

    // Clamped offsets collapse onto the triangle x + y <= 3 at the corner.
    assert_eq!(count_pixels(&canvas, star()), 10);
    assert_eq!(canvas.get(0, 0).unwrap(), star());
    assert_eq!(canvas.get(3, 0).unwrap(), star());
    assert_eq!(canvas.get(0, 3).unwrap(), star());
    assert_eq!(canvas.get(2, 2).unwrap(), unclaimed());
    assert_eq!(canvas.get(4, 0).unwrap(), unclaimed());
}

#[test]
fn first_marker_in_traversal_order_owns_contested_pixels() {
    // Second marker's own cell sits on the first diamond's rim, so the second
    // marker must emit nothing: cells only its diamond would reach stay
    // unclaimed-colored.
    let mut rows = vec!["????????????"; 7];
    rows[3] = "????*??*????";
    let canvas = render(&grid_text(12, 7, &rows));

    assert_eq!(canvas.get(4, 3).unwrap(), star());
    assert_eq!(canvas.get(7, 3).unwrap(), star());
    assert!(canvas.is_assigned(7, 3).unwrap());
    assert_eq!(canvas.get(8, 3).unwrap(), unclaimed());
    assert_eq!(canvas.get(10, 3).unwrap(), unclaimed());
    assert_eq!(count_pixels(&canvas, star()), 25);
}

#[test]
fn tiny_map_is_fully_subsumed_by_the_clamped_diamond() {
    // Every cell of a 3x2 canvas is within Manhattan distance 3 of the
    // marker, and nothing painted before it was protected, so the whole
    // canvas ends up the start-marker color.
    let canvas = render("3x2\n?*?\n??c");
    assert_eq!((canvas.width(), canvas.height()), (3, 2));
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(canvas.get(x, y).unwrap(), star(), "at ({x}, {y})");
            assert!(canvas.is_assigned(x, y).unwrap());
        }
    }
}

#[test]
fn unknown_token_aborts_the_render() {
    let grid = MapGrid::parse("2x1\n?#").unwrap();
    let err = rasterize(&grid, &Palette::standard()).unwrap_err();
    assert!(matches!(err, MudmapError::UnknownToken('#')));
}
