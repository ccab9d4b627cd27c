use empress_common::natural_sort::natural_cmp;
use empress_common::types::{Color, ColorSpec};
use empress_dom::container::Container;
use empress_dom::node::{Element, Node, SVG_NAMESPACE};
use empress_legend::config::LegendConfig;
use empress_legend::error::LegendError;
use empress_legend::legend::{Legend, LegendContent, Visibility, NON_NUMERIC_WARNING};
use indexmap::IndexMap;
use proptest::prelude::*;
use rstest::rstest;
use std::cmp::Ordering;
use std::collections::HashMap;

const REFERENCE_SVG: &str = include_str!("data/reference_gradient.svg");

fn swatch_color(row: &Element) -> Color {
    let cells = row.child_elements();
    cells[0]
        .style("background")
        .expect("swatch has a background")
        .parse()
        .unwrap()
}

fn validate_gradient_svg(svg: &Element) {
    assert_eq!(svg.tag_name(), "svg");
    assert_eq!(svg.namespace_uri(), SVG_NAMESPACE);
    assert_eq!(svg.inner_html(), REFERENCE_SVG);
}

fn things() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("Thing 1", "#ff0000"),
        ("Thing 2", "#00ff00"),
        ("Thing 3", "#0000ff"),
        ("Thing 4", "#ffffff"),
        ("Thing 5", "#000000"),
    ])
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Categorical,
    Continuous,
    ContinuousWithWarning,
    Clear,
    Unhide,
}

fn apply(legend: &mut Legend, step: Step) {
    match step {
        Step::Categorical => legend.add_categorical_key("cats", things()).unwrap(),
        Step::Continuous => legend.add_continuous_key("grad", REFERENCE_SVG, false),
        Step::ContinuousWithWarning => legend.add_continuous_key("grad", REFERENCE_SVG, true),
        Step::Clear => legend.clear(),
        Step::Unhide => legend.unhide(),
    }
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Categorical),
        Just(Step::Continuous),
        Just(Step::ContinuousWithWarning),
        Just(Step::Clear),
        Just(Step::Unhide),
    ]
}

#[test]
fn test_construction_does_not_clear() {
    let mut container = Container::new();
    container.append_child(Element::new("p").with_text("asdfasdfasdf"));
    let expected = container.first_child().cloned();

    let legend = Legend::new(container);
    assert_eq!(legend.container().first_child().cloned(), expected);
    assert_eq!(legend.content(), &LegendContent::Empty);
    assert_eq!(legend.visibility(), Visibility::Visible);
}

#[test]
fn test_construction_keeps_caller_visibility() {
    let mut container = Container::new();
    container.add_class("hidden");
    let legend = Legend::new(container);
    assert!(legend.is_hidden());
}

#[test]
fn test_add_categorical_key() {
    let mut legend = Legend::new(Container::new());
    let color_info = things();
    legend.add_categorical_key("qwerty", color_info.clone()).unwrap();

    let container = legend.container();
    assert_eq!(container.child_elements().len(), 2);

    let title = container.child_element(0).unwrap();
    assert!(title.has_class("legend-title"));
    assert_eq!(title.inner_text(), "qwerty");

    let table = container.child_element(1).unwrap();
    assert_eq!(table.tag_name(), "TABLE");

    let rows = table.find_all("tr");
    assert_eq!(rows.len(), color_info.len());
    for (i, row) in rows.iter().enumerate() {
        let cells = row.child_elements();
        assert_eq!(cells.len(), 2);

        let expected_key = format!("Thing {}", i + 1);
        let expected_color: Color = color_info[expected_key.as_str()].parse().unwrap();
        assert_eq!(swatch_color(row), expected_color);
        assert!(cells[0].has_class("category-color"));

        assert_eq!(cells[1].inner_text(), expected_key);
        assert_eq!(cells[1].attr("title"), Some(expected_key.as_str()));
        assert!(cells[1].has_class("gradient-label"));
    }

    assert!(!legend.is_hidden());
    assert!(matches!(legend.content(), LegendContent::Categorical(_)));
}

#[test]
fn test_add_categorical_key_single_color() {
    let mut legend = Legend::new(Container::new());
    let dark_brown = "#52330b";
    legend
        .add_categorical_key("Single-color test", [("hjkl", dark_brown)])
        .unwrap();

    let container = legend.container();
    assert_eq!(container.child_element(0).unwrap().inner_text(), "Single-color test");

    let rows = container.child_element(1).unwrap().find_all("tr");
    assert_eq!(rows.len(), 1);
    assert_eq!(swatch_color(rows[0]).to_hex(), dark_brown);
    assert_eq!(rows[0].child_elements()[1].inner_text(), "hjkl");
}

#[test]
fn test_add_categorical_key_no_categories() {
    let mut container = Container::new();
    container.append_child(Element::new("p").with_text("untouched"));
    let before = container.clone();

    let mut legend = Legend::new(container);
    let err = legend
        .add_categorical_key("oops", HashMap::<String, String>::new())
        .unwrap_err();

    assert_eq!(
        err,
        LegendError::InvalidInput(
            "Can't create a categorical legend when there are no categories in the info"
                .to_string()
        )
    );
    assert_eq!(
        err.to_string(),
        "Can't create a categorical legend when there are no categories in the info"
    );
    assert_eq!(legend.container(), &before);
    assert_eq!(legend.content(), &LegendContent::Empty);
}

#[test]
fn test_add_categorical_key_natural_order() {
    let mut legend = Legend::new(Container::new());
    let color_info: IndexMap<&str, &str> = IndexMap::from([
        ("Thing 10", "#111111"),
        ("Thing 2", "#222222"),
        ("thing 1", "#333333"),
        ("Thing 9", "#444444"),
    ]);
    legend.add_categorical_key("order", color_info).unwrap();

    let labels: Vec<String> = legend
        .container()
        .find_all("tr")
        .iter()
        .map(|row| row.child_elements()[1].inner_text())
        .collect();
    assert_eq!(labels, vec!["thing 1", "Thing 2", "Thing 9", "Thing 10"]);
}

#[rstest]
#[case(ColorSpec::from("rgb(255, 0, 0)"), Color::new(255, 0, 0))]
#[case(ColorSpec::from("lime"), Color::new(0, 255, 0))]
#[case(ColorSpec::from("#52330B"), Color::new(0x52, 0x33, 0x0b))]
#[case(ColorSpec::from("#f0f"), Color::new(255, 0, 255))]
#[case(ColorSpec::from([0.0, 0.0, 1.0, 1.0]), Color::new(0, 0, 255))]
fn test_swatch_matches_supplied_color(#[case] spec: ColorSpec, #[case] expected: Color) {
    let mut legend = Legend::new(Container::new());
    legend.add_categorical_key("spelling", [("a", spec)]).unwrap();

    let rows = legend.container().find_all("tr");
    assert_eq!(rows.len(), 1);
    assert_eq!(swatch_color(rows[0]), expected);
}

#[test]
fn test_unresolved_color_is_rendered_verbatim() {
    let mut legend = Legend::new(Container::new());
    legend
        .add_categorical_key("bad", [("x", "not-a-color")])
        .unwrap();

    let rows = legend.container().find_all("tr");
    let swatch = rows[0].child_elements()[0];
    assert_eq!(swatch.style("background"), Some("not-a-color"));
}

#[test]
fn test_add_continuous_key() {
    let mut legend = Legend::new(Container::new());
    legend.add_continuous_key("OMG this is a continuous legend!", REFERENCE_SVG, false);

    let container = legend.container();
    assert_eq!(container.child_elements().len(), 2);

    let title = container.child_element(0).unwrap();
    assert!(title.has_class("legend-title"));
    assert_eq!(title.inner_text(), "OMG this is a continuous legend!");

    validate_gradient_svg(container.child_element(1).unwrap());

    assert!(!legend.is_hidden());
    let LegendContent::Continuous(key) = legend.content() else {
        panic!("expected continuous content");
    };
    assert!(!key.has_non_numeric_values());
    assert_eq!(key.gradient_svg(), REFERENCE_SVG);
}

#[test]
fn test_add_continuous_key_with_non_numeric_warning() {
    let mut legend = Legend::new(Container::new());
    legend.add_continuous_key("howdy", REFERENCE_SVG, true);

    let container = legend.container();
    assert_eq!(container.child_elements().len(), 3);

    let title = container.child_element(0).unwrap();
    assert!(title.has_class("legend-title"));
    assert_eq!(title.inner_text(), "howdy");

    validate_gradient_svg(container.child_element(1).unwrap());

    let warning = container.child_element(2).unwrap();
    assert_eq!(warning.tag_name(), "P");
    assert_eq!(
        warning.inner_text(),
        "Some value(s) in this field were not numeric. These value(s) have been left \
         out of the gradient, and no bar(s) have been drawn for them."
    );
    assert_eq!(warning.inner_text(), NON_NUMERIC_WARNING);
    assert_eq!(warning.style("white-space"), Some("normal"));

    assert!(!legend.is_hidden());
}

#[rstest]
#[case(Step::Categorical, Step::Categorical, 2)]
#[case(Step::Categorical, Step::ContinuousWithWarning, 3)]
#[case(Step::ContinuousWithWarning, Step::Categorical, 2)]
#[case(Step::ContinuousWithWarning, Step::Continuous, 2)]
#[case(Step::Continuous, Step::Categorical, 2)]
fn test_populating_twice_replaces_content(
    #[case] first: Step,
    #[case] second: Step,
    #[case] expected_children: usize,
) {
    let mut legend = Legend::new(Container::new());
    apply(&mut legend, first);
    apply(&mut legend, second);

    let container = legend.container();
    assert_eq!(container.children().len(), expected_children);
    assert_eq!(container.find_all("div").len(), 1);
    match second {
        Step::Categorical => {
            assert_eq!(container.find_all("table").len(), 1);
            assert!(container.find_all("svg").is_empty());
            assert_eq!(container.find_all("tr").len(), things().len());
        }
        _ => {
            assert!(container.find_all("table").is_empty());
            assert_eq!(container.find_all("svg").len(), 1);
        }
    }
    assert!(!legend.is_hidden());
}

#[test]
fn test_second_categorical_key_leaves_only_its_rows() {
    let mut legend = Legend::new(Container::new());
    legend.add_categorical_key("first", things()).unwrap();
    legend
        .add_categorical_key("second", [("only", "#123456")])
        .unwrap();

    let container = legend.container();
    assert_eq!(container.children().len(), 2);
    assert_eq!(container.child_element(0).unwrap().inner_text(), "second");
    assert_eq!(container.find_all("tr").len(), 1);
}

#[test]
fn test_clear() {
    let mut container = Container::new();
    container.append_child(Element::new("p").with_text("I should be removed when clear is called!"));
    container.append_child(
        Element::new("div").with_text("I'm here to test that clear removes all children"),
    );
    container.append_child(Node::Text("stray text".to_string()));

    let mut legend = Legend::new(container);
    legend.clear();

    assert!(legend.is_hidden());
    assert_eq!(legend.container().first_child(), None);
    assert_eq!(legend.content(), &LegendContent::Empty);
}

#[test]
fn test_clear_after_populating() {
    let mut legend = Legend::new(Container::new());
    legend.add_continuous_key("grad", REFERENCE_SVG, true);
    legend.clear();
    assert!(legend.container().is_empty());
    assert_eq!(legend.visibility(), Visibility::Hidden);
}

#[test]
fn test_unhide() {
    let mut legend = Legend::new(Container::new());
    legend.clear();
    assert!(legend.is_hidden());

    legend.unhide();
    assert!(!legend.is_hidden());
    assert!(legend.container().is_empty());
}

#[test]
fn test_unhide_never_populated_hidden_container() {
    let mut container = Container::new();
    container.append_child(Element::new("p").with_text("already here"));
    container.add_class("hidden");
    let expected = container.children().to_vec();

    let mut legend = Legend::new(container);
    assert_eq!(legend.visibility(), Visibility::Hidden);

    legend.unhide();
    assert_eq!(legend.visibility(), Visibility::Visible);
    assert_eq!(legend.container().children(), expected.as_slice());
    assert_eq!(legend.content(), &LegendContent::Empty);
}

#[test]
fn test_into_container_returns_rendered_state() {
    let mut legend = Legend::new(Container::with_id("legend-main"));
    legend.add_continuous_key("grad", REFERENCE_SVG, true);
    let container = legend.into_container();
    assert_eq!(container.id.as_deref(), Some("legend-main"));
    assert_eq!(container.children().len(), 3);
    assert!(!container.has_class("hidden"));

    let mut legend = Legend::new(container);
    legend.clear();
    let container = legend.into_container();
    assert!(container.is_empty());
    assert!(container.has_class("hidden"));
}

#[test]
fn test_visibility_display() {
    assert_eq!(Visibility::Visible.to_string(), "visible");
    assert_eq!(Visibility::Hidden.to_string(), "hidden");
}

#[test]
fn test_unhide_does_not_touch_content() {
    let mut legend = Legend::new(Container::new());
    legend.add_categorical_key("cats", things()).unwrap();
    let before = legend.container().clone();

    legend.unhide();
    assert_eq!(legend.container(), &before);

    // populating un-hides on its own
    legend.clear();
    legend.add_categorical_key("cats", things()).unwrap();
    assert_eq!(legend.visibility(), Visibility::Visible);
}

#[test]
fn test_custom_config_class_names() {
    let config = LegendConfig {
        hidden_class: "is-hidden".to_string(),
        title_class: "title".to_string(),
        ..Default::default()
    };
    let mut legend = Legend::with_config(Container::new(), config);
    legend.clear();
    assert!(legend.container().has_class("is-hidden"));
    assert!(!legend.container().has_class("hidden"));

    legend.add_categorical_key("t", [("a", "#000")]).unwrap();
    assert!(!legend.is_hidden());
    assert!(legend.container().child_element(0).unwrap().has_class("title"));
}

#[test]
fn test_custom_config_keeps_fixed_warning_text() {
    let config = LegendConfig {
        gradient_style: "display: inline;".to_string(),
        ..Default::default()
    };
    let mut legend = Legend::with_config(Container::new(), config);
    legend.add_continuous_key("grad", REFERENCE_SVG, true);

    let container = legend.container();
    let svg = container.child_element(1).unwrap();
    assert_eq!(svg.style("display"), Some("inline"));
    assert_eq!(container.child_element(2).unwrap().inner_text(), NON_NUMERIC_WARNING);
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: LegendConfig = serde_json::from_str(r#"{"hidden-class": "gone"}"#).unwrap();
    assert_eq!(config.hidden_class, "gone");
    assert_eq!(config.title_class, "legend-title");
}

#[test]
fn test_categorical_html() {
    let mut legend = Legend::new(Container::with_id("legend-main"));
    legend.add_categorical_key("Q", [("a & b", "#52330b")]).unwrap();

    assert_eq!(
        legend.to_html(),
        "<div id=\"legend-main\"><div class=\"legend-title\">Q</div><table><tr>\
         <td class=\"category-color\" style=\"background: #52330b;\"></td>\
         <td class=\"gradient-label\" title=\"a &amp; b\">a &amp; b</td></tr></table></div>"
    );

    legend.clear();
    assert_eq!(legend.to_html(), "<div class=\"hidden\" id=\"legend-main\"></div>");
}

proptest! {
    #[test]
    fn prop_categorical_rows_cover_mapping_in_natural_order(
        color_info in prop::collection::hash_map(
            "[A-Za-z ]{0,4}[0-9]{0,3}[a-z]{0,2}",
            any::<[u8; 3]>(),
            1..24,
        ),
    ) {
        let mut legend = Legend::new(Container::new());
        legend
            .add_categorical_key(
                "random",
                color_info
                    .iter()
                    .map(|(label, rgb)| (label.clone(), Color::new(rgb[0], rgb[1], rgb[2]))),
            )
            .unwrap();

        let container = legend.container();
        prop_assert_eq!(container.child_elements().len(), 2);
        let rows = container.find_all("tr");
        prop_assert_eq!(rows.len(), color_info.len());

        let labels: Vec<String> = rows
            .iter()
            .map(|row| row.child_elements()[1].inner_text())
            .collect();
        for pair in labels.windows(2) {
            prop_assert_eq!(natural_cmp(&pair[0], &pair[1]), Ordering::Less);
        }
        for (row, label) in rows.iter().zip(&labels) {
            let rgb = color_info[label];
            prop_assert_eq!(swatch_color(row), Color::new(rgb[0], rgb[1], rgb[2]));
        }
        prop_assert!(!legend.is_hidden());
    }

    #[test]
    fn prop_operation_sequences_keep_state_consistent(
        steps in prop::collection::vec(step_strategy(), 0..24),
    ) {
        let mut legend = Legend::new(Container::new());
        for step in steps {
            let before = legend.container().children().to_vec();
            apply(&mut legend, step);

            let container = legend.container();
            match step {
                Step::Clear => {
                    prop_assert!(container.is_empty());
                    prop_assert_eq!(legend.visibility(), Visibility::Hidden);
                    prop_assert_eq!(legend.content(), &LegendContent::Empty);
                }
                Step::Unhide => {
                    prop_assert_eq!(container.children(), before.as_slice());
                    prop_assert_eq!(legend.visibility(), Visibility::Visible);
                }
                Step::Categorical | Step::Continuous => {
                    prop_assert_eq!(container.children().len(), 2);
                    prop_assert_eq!(legend.visibility(), Visibility::Visible);
                }
                Step::ContinuousWithWarning => {
                    prop_assert_eq!(container.children().len(), 3);
                    prop_assert_eq!(legend.visibility(), Visibility::Visible);
                }
            }
        }
    }
}
