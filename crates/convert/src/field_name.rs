//! Widget field name rewrites.
//!
//! Indexed widget fields moved their index in front of the property
//! name. Two rewrites run in fixed order over the dot-separated segments:
//!
//! - [`move_index_before_property`]:
//!   `prefix.property.N.M` -> `prefix.N.property.M`
//! - [`move_trailing_index_before_property`]:
//!   `prefix.property.N` -> `prefix.N.property`
//!
//! `prefix` is lowercase ASCII letters, `property` lowercase ASCII letters
//! or underscores, `N` and `M` ASCII digits. Names of any other shape are
//! left unchanged. One trailing newline is tolerated and kept.

/// Applies both rewrites, the second to the output of the first.
pub fn rewrite_field_name(name: &str) -> String {
    let name = move_index_before_property(name).unwrap_or_else(|| name.to_string());
    move_trailing_index_before_property(&name).unwrap_or(name)
}

/// `prefix.property.N.M` -> `prefix.N.property.M`
pub fn move_index_before_property(name: &str) -> Option<String> {
    let (body, newline) = split_trailing_newline(name);
    match segments(body).as_slice() {
        [prefix, property, index, sub_index]
            if is_prefix(prefix)
                && is_property(property)
                && is_index(index)
                && is_index(sub_index) =>
        {
            Some(format!("{prefix}.{index}.{property}.{sub_index}{newline}"))
        }
        _ => None,
    }
}

/// `prefix.property.N` -> `prefix.N.property`
pub fn move_trailing_index_before_property(name: &str) -> Option<String> {
    let (body, newline) = split_trailing_newline(name);
    match segments(body).as_slice() {
        [prefix, property, index]
            if is_prefix(prefix) && is_property(property) && is_index(index) =>
        {
            Some(format!("{prefix}.{index}.{property}{newline}"))
        }
        _ => None,
    }
}

fn split_trailing_newline(name: &str) -> (&str, &str) {
    match name.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (name, ""),
    }
}

fn segments(body: &str) -> Vec<&str> {
    body.split('.').collect()
}

fn is_prefix(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_lowercase())
}

fn is_property(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_lowercase() || b == b'_')
}

fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_segment_name() {
        assert_eq!(
            move_index_before_property("hostid.host.0.0").as_deref(),
            Some("hostid.0.host.0")
        );
        assert_eq!(rewrite_field_name("hostid.host.0.0"), "hostid.0.host.0");
        assert_eq!(rewrite_field_name("ds.hosts.12.3"), "ds.12.hosts.3");
    }

    #[test]
    fn test_three_segment_name() {
        assert_eq!(
            move_trailing_index_before_property("hostid.host.0").as_deref(),
            Some("hostid.0.host")
        );
        assert_eq!(rewrite_field_name("hostid.host.0"), "hostid.0.host");
        assert_eq!(
            rewrite_field_name("ds.override_hostid.2"),
            "ds.2.override_hostid"
        );
    }

    #[test]
    fn test_second_rewrite_sees_first_output() {
        // The four-segment output never has the three-segment shape.
        assert_eq!(
            move_trailing_index_before_property("hostid.0.host.0"),
            None
        );
        assert_eq!(move_index_before_property("hostid.host.0"), None);
    }

    #[test]
    fn test_non_matching_names_unchanged() {
        for name in [
            "reference",
            "itemid",
            "ds.0.color",
            "Hostid.host.0",
            "ds.Hosts.0",
            "ds.hosts.x",
            "ds.hosts.",
            "ds..0",
            "ds.hosts.0.0.0",
            "ds1.hosts.0",
            "ds.hosts.٣",
        ] {
            assert_eq!(rewrite_field_name(name), name, "{name}");
        }
    }

    #[test]
    fn test_trailing_newline_kept() {
        assert_eq!(rewrite_field_name("hostid.host.0\n"), "hostid.0.host\n");
        assert_eq!(rewrite_field_name("hostid.host.0\n\n"), "hostid.host.0\n\n");
    }
}
