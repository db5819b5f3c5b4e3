//! Tests for primitive SVG elements.

use super::*;

mod axis_tests {
    use super::*;

    #[test]
    fn horizontal_axis_renders() {
        let axis = Axis::horizontal(10.0, 100.0, 200.0).with_labels(vec![
            (0.0, "0".to_string()),
            (0.5, "50".to_string()),
            (1.0, "100".to_string()),
        ]);

        let svg = axis.render();
        // One axis line plus one tick line per label
        assert_eq!(svg.matches("<line").count(), 4);
        assert_eq!(svg.matches("<text").count(), 3);
        assert!(svg.contains("text-anchor=\"middle\""));
        // Middle tick sits halfway along the axis
        assert!(svg.contains(r#"x1="110" y1="100" x2="110" y2="105""#));
    }

    #[test]
    fn vertical_axis_grows_upwards() {
        let axis = Axis::vertical(50.0, 150.0, 100.0)
            .with_labels(vec![(0.0, "0".to_string()), (1.0, "10³".to_string())]);

        let svg = axis.render();
        assert!(svg.contains("text-anchor=\"end\""));
        assert!(svg.contains(r#"x1="50" y1="50" x2="45" y2="50""#));
        assert!(svg.contains("10³"));
    }

    #[test]
    fn axis_with_custom_font_size() {
        let axis = Axis::horizontal(0.0, 0.0, 100.0)
            .with_font_size(14.0)
            .with_labels(vec![(0.5, "mid".to_string())]);

        assert!(axis.render().contains("font-size=\"14\""));
    }
}

mod line_tests {
    use super::*;

    #[test]
    fn line_renders_path() {
        let line = Line::new(
            vec![(0.0, 100.0), (50.0, 50.0), (100.0, 75.0)],
            ChartColor::hex("#1f77b4"),
        );

        let svg = line.render();
        assert!(svg.contains("<path"));
        assert!(svg.contains("M0,100 L50,50 L100,75"));
        assert!(svg.contains("stroke=\"#1f77b4\""));
        assert!(svg.contains("fill=\"none\""));
        assert!(!svg.contains("stroke-dasharray"));
    }

    #[test]
    fn dashed_line_has_dasharray() {
        let line = Line::new(vec![(0.0, 0.0), (10.0, 10.0)], ChartColor::hex("#ff00ff"))
            .with_style(LineStyle::Dashed);

        assert!(line.render().contains("stroke-dasharray=\"7,4\""));
    }

    #[test]
    fn line_with_custom_stroke_width() {
        let line = Line::new(vec![(0.0, 0.0), (100.0, 100.0)], ChartColor::hex("#000"))
            .with_stroke_width(4.0);

        assert!(line.render().contains("stroke-width=\"4\""));
    }

    #[test]
    fn line_title_is_escaped_tooltip() {
        let line = Line::new(vec![(0.0, 0.0), (1.0, 1.0)], ChartColor::hex("#000"))
            .with_title("2 -> 2");

        let svg = line.render();
        assert!(svg.contains("<title>2 -&gt; 2</title>"));
        assert!(svg.contains("</path>"));
    }

    #[test]
    fn empty_line_returns_empty_string() {
        let line = Line::new(vec![], ChartColor::hex("#000"));
        assert!(line.render().is_empty());
    }
}

mod text_tests {
    use super::*;

    #[test]
    fn text_renders_escaped_content() {
        let text = Text::new(10.0, 20.0, "dσ/dp⊥ <nb>");
        let svg = text.render();

        assert!(svg.starts_with("<text x=\"10\" y=\"20\""));
        assert!(svg.contains("dσ/dp⊥ &lt;nb&gt;"));
        assert!(svg.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn rotated_text_has_transform() {
        let svg = Text::new(18.0, 200.0, "y").rotated(-90.0).render();
        assert!(svg.contains(r#"transform="rotate(-90 18 200)""#));
    }

    #[test]
    fn bold_text_has_weight() {
        let svg = Text::new(0.0, 0.0, "title").bold().render();
        assert!(svg.contains("font-weight=\"600\""));
    }
}

#[test]
fn frame_renders_unfilled_rect() {
    let frame = Frame {
        x: 80.0,
        y: 56.0,
        width: 536.0,
        height: 364.0,
        color: ChartColor::css_var("axis"),
    };

    let svg = frame.render();
    assert!(svg.contains(r#"<rect x="80" y="56" width="536" height="364" fill="none""#));
    assert!(svg.contains("var(--color-axis)"));
}
