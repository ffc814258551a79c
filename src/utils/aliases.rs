use crate::index::types::Options;

/// Markup tag names that must never expand as a shorthand.
///
/// Keeps `li:before` from turning into `line-height:before`, and a bare `p`
/// on its own line in indented syntaxes from expanding at all.
pub const TAGS: &[&str] = &[
    "a", "p", "br", "b", "i", "li", "ul", "div", "em", "sup", "big", "small", "sub",
];

#[inline]
pub fn is_tag(token: &str) -> bool {
    TAGS.contains(&token)
}

/// Compute the alias list for one definition and store it in `options.alias`.
///
/// The full name goes in first, followed by its dash-free spelling when it
/// has dashes. The shorthand is then put in front, unless some alias already
/// starts with it literally.
///
/// `short` must be non-empty.
pub fn update_aliases(short: &str, prop: Option<&str>, options: &mut Options) {
    let aliases = &mut options.alias;

    if let Some(prop) = prop {
        aliases.push(prop.to_string());

        if prop.contains('-') {
            aliases.push(prop.replace('-', ""));
        }
    }

    if !aliases.iter().any(|alias| alias.starts_with(short)) {
        aliases.insert(0, short.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_prepended_when_unlike_name() {
        let mut options = Options::new();
        update_aliases("bg", Some("background"), &mut options);
        assert_eq!(options.alias, vec!["bg", "background"]);
    }

    #[test]
    fn test_shorthand_skipped_when_prefix_of_name() {
        let mut options = Options::new();
        update_aliases("pad", Some("padding"), &mut options);
        assert_eq!(options.alias, vec!["padding"]);
    }

    #[test]
    fn test_dashed_name_adds_compact_spelling() {
        let mut options = Options::new();
        update_aliases("lh", Some("line-height"), &mut options);
        assert_eq!(options.alias, vec!["lh", "line-height", "lineheight"]);
    }

    #[test]
    fn test_prefix_check_is_literal() {
        // "lineh" is a prefix of the compact spelling only
        let mut options = Options::new();
        update_aliases("lineh", Some("line-height"), &mut options);
        assert_eq!(options.alias, vec!["line-height", "lineheight"]);
    }

    #[test]
    fn test_statement_without_name() {
        let mut options = Options::new();
        update_aliases("m0a", None, &mut options);
        assert_eq!(options.alias, vec!["m0a"]);
    }

    #[test]
    fn test_existing_aliases_kept() {
        let mut options = Options::new().with_alias("margin");
        update_aliases("m0a", None, &mut options);
        assert_eq!(options.alias, vec!["m0a", "margin"]);

        let mut options = Options::new().with_alias("m0auto");
        update_aliases("m0a", None, &mut options);
        assert_eq!(options.alias, vec!["m0auto"]);
    }

    #[test]
    fn test_is_tag() {
        assert!(is_tag("li"));
        assert!(is_tag("small"));
        assert!(!is_tag("bg"));
        assert!(!is_tag(""));
    }
}
