//! Rendering of the package export manifest.
//!
//! The manifest is the `__init__.py` body for the generated package: one
//! import line per generated function, then an `__all__` listing with one
//! name per line. Rendering is pure; the writer handles I/O.

/// Render the export manifest for the given function names, in the order
/// they were generated.
pub fn render_manifest(names: &[String]) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(&format!("from .builtin.{name} import {name} \n"));
    }
    out.push('\n');
    let listing = names
        .iter()
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(",\n ");
    out.push_str(&format!("__all__ = [{listing}] \n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_import_line_per_name_in_order() {
        let names = vec![String::from("lm"), String::from("km")];
        let manifest = render_manifest(&names);
        let expected = concat!(
            "from .builtin.lm import lm \n",
            "from .builtin.km import km \n",
            "\n",
            "__all__ = ['lm',\n 'km'] \n",
        );
        assert_eq!(manifest, expected);
    }

    #[test]
    fn every_name_appears_exactly_once_in_the_listing() {
        let names = vec![
            String::from("cox"),
            String::from("dbscan"),
            String::from("lm"),
        ];
        let manifest = render_manifest(&names);
        for name in &names {
            assert_eq!(manifest.matches(&format!("'{name}'")).count(), 1);
            assert_eq!(
                manifest
                    .matches(&format!("from .builtin.{name} import {name}"))
                    .count(),
                1
            );
        }
    }

    #[test]
    fn empty_package_is_an_empty_listing() {
        assert_eq!(render_manifest(&[]), "\n__all__ = [] \n");
    }
}
