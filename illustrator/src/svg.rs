//! Procedural SVG generators for the small fixed set of recognized topics.
//!
//! Matching is substring-based on the lowercased query; returns None when no
//! generator recognizes the query.

const WIDTH: u32 = 200;
const HEIGHT: u32 = 200;

/// Generates a vector diagram for a recognized topic, if any.
pub fn generate_svg(query: &str) -> Option<String> {
    let lowered = query.to_lowercase();
    if lowered.contains("quadratic") {
        return Some(quadratic_plot());
    }
    if lowered.contains("deep learning") {
        return Some(network_diagram());
    }
    None
}

fn open_tag() -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}px" height="{HEIGHT}px">"#
    )
}

/// Plot of y = x^2 - 2x - 3, sampled every 5 px across the grid and clamped
/// to the canvas.
fn quadratic_plot() -> String {
    let mut path_data = String::from("M");
    for x in (0..=200).step_by(5) {
        let scaled_x = (x as f64 - 100.0) / 20.0;
        let y = scaled_x * scaled_x - 2.0 * scaled_x - 3.0;
        let scaled_y = (100.0 - y * 10.0).clamp(0.0, 200.0);
        if x == 0 {
            path_data.push_str(&format!("{x},{scaled_y}"));
        } else {
            path_data.push_str(&format!(" L{x},{scaled_y}"));
        }
    }

    let mut svg = open_tag();
    // axes
    svg.push_str(r#"<line x1="0" y1="100" x2="200" y2="100" stroke="black" />"#);
    svg.push_str(r#"<line x1="100" y1="0" x2="100" y2="200" stroke="black" />"#);
    svg.push_str(&format!(
        r#"<path d="{path_data}" stroke="blue" fill="none" stroke-width="2" />"#
    ));
    svg.push_str(
        r#"<text x="10" y="20" font-size="12" fill="blue">y = x&#178; - 2x - 3</text>"#,
    );
    svg.push_str("</svg>");
    svg
}

/// Schematic multi-layer network: input, two hidden layers, output, with a
/// few representative connections.
fn network_diagram() -> String {
    let input = [(50, 50), (50, 100), (50, 150)];
    let hidden1 = [(100, 40), (100, 80), (100, 120), (100, 160)];
    let hidden2 = [(150, 60), (150, 100), (150, 140)];
    let output = (190, 100);
    let connections = [
        ((50, 50), (100, 40)),
        ((50, 50), (100, 80)),
        ((50, 100), (100, 120)),
        ((100, 40), (150, 60)),
        ((100, 80), (150, 100)),
        ((150, 100), (190, 100)),
    ];

    let mut svg = open_tag();
    for ((x1, y1), (x2, y2)) in connections {
        svg.push_str(&format!(
            r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="gray" stroke-width="1" />"#
        ));
    }
    for (x, y) in input {
        svg.push_str(&circle(x, y, "lightblue", "blue"));
    }
    for (x, y) in hidden1.iter().chain(hidden2.iter()) {
        svg.push_str(&circle(*x, *y, "lightgreen", "green"));
    }
    svg.push_str(&circle(output.0, output.1, "orange", "red"));
    svg.push_str(r#"<text x="60" y="20" font-size="12" fill="blue">Deep Learning</text>"#);
    svg.push_str("</svg>");
    svg
}

fn circle(cx: i32, cy: i32, fill: &str, stroke: &str) -> String {
    format!(r#"<circle cx="{cx}" cy="{cy}" r="8" fill="{fill}" stroke="{stroke}" />"#)
}
