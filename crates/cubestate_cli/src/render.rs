//! Text layout of a cube's outer faces.

use cubestate::{CubeState, Direction, FaceColor, Rgb};
use itertools::Itertools;
use owo_colors::OwoColorize;

/// Faces drawn in each band of the layout, from left to right.
const BANDS: [[Direction; 3]; 2] = [
    [Direction::Top, Direction::Forward, Direction::Right],
    [Direction::Bottom, Direction::Back, Direction::Left],
];
const FACE_SEPARATOR: &str = "   ";

/// Display color for each face color.
pub(crate) type Palette<'a> = &'a dyn Fn(FaceColor) -> Rgb;

/// Draws the six faces of `cube`, each as seen from outside and oriented as
/// returned by [`CubeState::face_grid()`], in two bands of three faces.
///
/// Each facelet is drawn as its color letter. If `palette` is given, the
/// letters are colored with ANSI escape codes using the display color it
/// returns for each face color.
pub(crate) fn render_faces(cube: &CubeState, palette: Option<Palette<'_>>) -> String {
    let n = usize::from(cube.size());
    let face_width = (2 * n - 1).max(longest_face_name());

    let mut out = String::new();
    for band in BANDS {
        let header = band
            .iter()
            .map(|direction| format!("{:<face_width$}", direction.name()))
            .join(FACE_SEPARATOR);
        out += header.trim_end();
        out.push('\n');

        let grids = band.map(|direction| cube.face_grid(direction));
        for row in 0..n {
            let line = grids
                .iter()
                .map(|grid| {
                    let cells = grid[row].iter().map(|&c| render_facelet(c, palette)).join(" ");
                    // Pad by the visible width, which excludes escape codes.
                    cells + &" ".repeat(face_width - (2 * n - 1))
                })
                .join(FACE_SEPARATOR);
            out += line.trim_end();
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

fn render_facelet(facelet: Option<FaceColor>, palette: Option<Palette<'_>>) -> String {
    match (facelet, palette) {
        (Some(c), Some(palette)) => {
            let [r, g, b] = palette(c).rgb;
            c.letter().truecolor(r, g, b).to_string()
        }
        (Some(c), None) => c.letter().to_string(),
        (None, _) => ".".to_owned(),
    }
}

fn longest_face_name() -> usize {
    Direction::iter()
        .map(|direction| direction.name().len())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_solved_cube() {
        let cube = CubeState::new(2).expect("valid size");
        let expected = "\
top       forward   right
Y Y       B B       O O
Y Y       B B       O O

bottom    back      left
W W       G G       R R
W W       G G       R R

";
        assert_eq!(render_faces(&cube, None), expected);
    }

    #[test]
    fn test_render_twisted_cube() {
        let mut cube = CubeState::new(3).expect("valid size");
        cube.rotate_slice(cubestate::Axis::Y, 2, 1).expect("valid rotation");
        let out = render_faces(&cube, None);
        let top_rows = out.lines().skip(1).take(3).collect_vec();
        assert_eq!(top_rows[0], "R R R     B B B     O O Y");
        assert_eq!(top_rows[1], "Y Y Y     B B B     O O Y");
    }

    #[test]
    fn test_render_with_color() {
        let cube = CubeState::new(2).expect("valid size");
        let out = render_faces(&cube, Some(&FaceColor::rgb));
        assert!(out.contains("\u{1b}[38;2;231;118;37m")); // orange
        assert_eq!(out.lines().count(), render_faces(&cube, None).lines().count());

        let black = |_: FaceColor| Rgb { rgb: [1, 2, 3] };
        let out = render_faces(&cube, Some(&black));
        assert!(out.contains("\u{1b}[38;2;1;2;3m"));
        assert!(!out.contains("\u{1b}[38;2;231;118;37m"));
    }
}
