// File: crates/scatter-core/tests/render_svg.rs
// Purpose: SVG/HTML output structure: markers with data attributes, axes, title, legend, tooltip overlay.

mod common;

use common::{small_chart, workspace_data_path};
use scatter_core::render::svg::render_html;
use scatter_core::theme::{GREEN, ROSE};
use scatter_core::{load_from_path, Chart, RenderOptions};

#[test]
fn one_dot_per_record() {
    let svg = small_chart().to_svg_string();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1000\" height=\"500\""));
    assert_eq!(svg.matches("<circle class=\"dot\"").count(), 3);
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn alleged_rider_is_rose_with_data_attributes() {
    let svg = small_chart().to_svg_string();
    let line = svg
        .lines()
        .find(|l| l.contains("Marco Pantani"))
        .expect("pantani marker");
    assert!(line.contains("data-xvalue=\"1995\""));
    assert!(line.contains("data-yvalue=\"1900-01-01T00:36:50\""));
    assert!(line.contains("r=\"6\""));
    assert!(line.contains(&format!("fill=\"{ROSE}\"")));
    assert!(line.contains("fill=\"#e38671\""));
}

#[test]
fn riders_without_allegations_are_green() {
    let svg = small_chart().to_svg_string();
    for name in ["Greg LeMond", "Carlos Sastre"] {
        let line = svg.lines().find(|l| l.contains(name)).expect("marker");
        assert!(line.contains("fill=\"#49d19b\""), "{name}: {line}");
    }
}

#[test]
fn marker_color_follows_allegation_over_bundled_data() {
    let dataset = load_from_path(workspace_data_path()).expect("bundled data loads");
    let chart = Chart::new(dataset, RenderOptions::default()).expect("chart builds");
    for m in chart.markers() {
        let record = &chart.dataset().entries()[m.index].record;
        let want = if record.has_doping_allegation() { ROSE } else { GREEN };
        assert_eq!(m.fill, want, "{}", record.name);
        assert_eq!(m.alleged, record.has_doping_allegation());
    }
}

#[test]
fn axes_are_translated_into_place() {
    let svg = small_chart().to_svg_string();
    assert!(svg.contains("<g id=\"x-axis\" transform=\"translate(0, 480)\""));
    assert!(svg.contains("<g id=\"y-axis\" transform=\"translate(80, 0)\""));
    assert!(svg.contains("d=\"M80.5,6V0.5H980.5V6\""));
    assert!(svg.contains(">1988</text>"));
    assert!(svg.contains(">40:00</text>"));
    assert!(svg.contains(">36:45</text>"));
}

#[test]
fn y_title_is_rotated() {
    let svg = small_chart().to_svg_string();
    assert!(svg.contains(
        "class=\"yAxis-label\" x=\"-250\" y=\"-60\" dy=\"0.75em\" transform=\"rotate(-90)\""
    ));
    assert!(svg.contains(">Race time (mins)</text>"));
}

#[test]
fn legend_has_two_entries() {
    let svg = small_chart().to_svg_string();
    assert!(svg.contains("<g id=\"legend\" transform=\"translate(950,200)\">"));
    assert_eq!(svg.matches("class=\"legend-label\"").count(), 2);
    assert!(svg.contains("transform=\"translate(0, 0)\"><text text-anchor=\"end\" font-size=\"0.6em\""));
    assert!(svg.contains("transform=\"translate(0, 20)\""));
    assert!(svg.contains(">No doping allegations</text><rect width=\"14\" height=\"14\" y=\"-10\" x=\"5\" fill=\"#49d19b\"/>"));
    assert!(svg.contains(">Racers with doping allegations</text><rect width=\"14\" height=\"14\" y=\"-10\" x=\"5\" fill=\"#e38671\"/>"));
}

#[test]
fn marker_titles_carry_tooltip_text() {
    let svg = small_chart().to_svg_string();
    assert!(svg.contains("<title>Marco Pantani: ITA\nYear: 1995, Time: 36:50\nAlleged drug use during 1995 due to high hematocrit levels</title>"));
    assert!(svg.contains("<title>Greg LeMond: USA\nYear: 1989, Time: 39:50</title>"));
}

#[test]
fn html_fragment_has_hidden_tooltip() {
    let html = render_html(&small_chart(), None);
    assert!(html.starts_with("<div class=\"outer-container\">"));
    assert!(html.contains("<svg"));
    assert!(html.contains("<div id=\"tooltip\" class=\"tooltip\" style=\"opacity: 0; left: 0px; top: 0px\"></div>"));
}

#[test]
fn writes_svg_and_html_files() {
    let dir = std::env::temp_dir().join(format!("scatter-svg-{}", std::process::id()));
    let chart = small_chart();
    chart.render_to_svg(dir.join("chart.svg")).expect("svg written");
    chart.render_to_html(dir.join("nested/chart.html")).expect("html written");
    let svg = std::fs::read_to_string(dir.join("chart.svg")).expect("read svg");
    assert_eq!(svg, chart.to_svg_string());
    assert!(dir.join("nested/chart.html").exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn text_is_escaped() {
    let json = r#"[{"Time":"37:00","Place":1,"Seconds":2220,"Name":"A <B> & C","Year":2000,"Nationality":"X\"Y","Doping":""}]"#;
    let chart = Chart::new(scatter_core::parse_dataset(json).expect("parses"), RenderOptions::default()).expect("chart");
    let svg = chart.to_svg_string();
    assert!(svg.contains("A &lt;B&gt; &amp; C: X&quot;Y"));
    assert!(!svg.contains("<B>"));
}
