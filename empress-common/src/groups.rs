use indexmap::IndexMap;

use crate::types::Color;

/// Sample names keyed by the `rrggbb` hex string of their rendered color, in
/// the order each color was first seen.
pub type ColorGroups = IndexMap<String, Vec<String>>;

/// Group selected samples by the color they're currently drawn with.
///
/// This is the shape the tree view expects when coloring clades after a
/// selection in the sample plot.
pub fn group_by_color<I, N>(samples: I) -> ColorGroups
where
    I: IntoIterator<Item = (N, Color)>,
    N: Into<String>,
{
    let mut groups = ColorGroups::new();
    for (name, color) in samples {
        groups
            .entry(color.to_hex_string())
            .or_default()
            .push(name.into());
    }
    log::debug!("Grouped selection into {} color group(s)", groups.len());
    groups
}
