//! Parsing of field annotations.
//!
//! An annotation is written in the struct-tag form
//! `container:"autowire:true;resource:user"`. The outer layer is a list of
//! space-separated `key:"quoted value"` pairs; [`StructTag::lookup`] extracts
//! the value for one key. The container's own value is a `;`-separated list
//! of `key:value` entries, decoded by [`TagValues`].

use std::collections::HashMap;

/// Separates the entries of a tag value.
pub const TAG_SPLITTER: char = ';';

/// Separates the key from the value inside one entry.
pub const TAG_KV_SPLITTER: char = ':';

/// A raw field annotation made of `key:"value"` pairs.
///
/// ```
/// use graph_injector::StructTag;
///
/// let tag = StructTag::new(r#"json:"user" container:"resource:user""#);
/// assert_eq!(Some("resource:user".to_owned()), tag.lookup("container"));
/// assert_eq!(None, tag.lookup("yaml"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct StructTag<'a>(&'a str);

impl<'a> StructTag<'a> {
    /// Wraps a raw annotation.
    #[must_use]
    pub fn new(tag: &'a str) -> Self {
        StructTag(tag)
    }

    /// Gets the raw annotation.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Returns the unquoted value associated with `key`, if the key is
    /// present. Scanning stops at the first malformed pair.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<String> {
        let mut rest = self.0;
        loop {
            rest = rest.trim_start_matches(' ');
            if rest.is_empty() {
                return None;
            }

            let name_len = rest
                .find(|c: char| c <= ' ' || c == ':' || c == '"' || c == '\x7f')
                .unwrap_or(rest.len());
            let name = &rest[..name_len];
            let after_name = &rest[name_len..];
            if name.is_empty() || !after_name.starts_with(":\"") {
                return None;
            }

            let quoted = &after_name[1..];
            let (raw, consumed) = scan_quoted(quoted)?;
            if name == key {
                return Some(unescape(raw));
            }
            rest = &quoted[consumed..];
        }
    }

    /// Returns whether an annotation for `key` is present at all.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}

/// Finds the end of a double-quoted string. Returns the contents between the
/// quotes and the number of bytes consumed including both quotes.
fn scan_quoted(quoted: &str) -> Option<(&str, usize)> {
    let bytes = quoted.as_bytes();
    let mut index = 1;
    while index < bytes.len() {
        match bytes[index] {
            b'\\' => index += 2,
            b'"' => return Some((&quoted[1..index], index + 1)),
            _ => index += 1,
        }
    }

    None
}

fn unescape(raw: &str) -> String {
    let mut value = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('r') => value.push('\r'),
            Some(other) => value.push(other),
            None => {}
        }
    }
    value
}

/// The decoded entries of a container annotation value.
///
/// ```
/// use graph_injector::TagValues;
///
/// let values = TagValues::parse("autowire:true;resource:x");
/// assert_eq!(Some(true), values.get_bool("autowire"));
/// assert_eq!(Some("x"), values.get("resource"));
///
/// let values = TagValues::parse("autowire;");
/// assert_eq!(Some(""), values.get("autowire"));
/// assert_eq!(Some(true), values.get_bool("autowire"));
///
/// assert!(TagValues::parse(":;").is_empty());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct TagValues {
    entries: HashMap<String, String>,
}

impl TagValues {
    /// Decodes a `key1:value1;key2:value2;key3` string. Entries without a
    /// separator get an empty value, and entries starting with the separator
    /// are ignored. Later duplicates win.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let entries = value
            .trim_matches(TAG_SPLITTER)
            .split(TAG_SPLITTER)
            .filter(|entry| !entry.is_empty())
            .filter_map(|entry| match entry.find(TAG_KV_SPLITTER) {
                Some(0) => None,
                Some(index) => Some((
                    entry[..index].to_owned(),
                    entry[index + 1..].to_owned(),
                )),
                None => Some((entry.to_owned(), String::new())),
            })
            .collect();

        TagValues { entries }
    }

    /// Gets the raw value of an entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Gets an entry as a flag. A key without a value counts as `true`, and
    /// a value that isn't a recognized boolean counts as `false`.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).map(|value| {
            if value.is_empty() {
                true
            } else {
                parse_bool(value).unwrap_or(false)
            }
        })
    }

    /// Returns whether `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns whether no entry could be decoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses the boolean spellings accepted in annotations.
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_key_among_others() {
        let tag =
            StructTag::new(r#"json:"name,omitempty"  container:"autowire:false""#);

        assert_eq!(Some("name,omitempty".to_owned()), tag.lookup("json"));
        assert_eq!(Some("autowire:false".to_owned()), tag.lookup("container"));
        assert!(!tag.has("resource"));
    }

    #[test]
    fn lookup_handles_escaped_quotes() {
        let tag = StructTag::new(r#"a:"say \"hi\"" container:"resource:x""#);

        assert_eq!(Some("say \"hi\"".to_owned()), tag.lookup("a"));
        assert_eq!(Some("resource:x".to_owned()), tag.lookup("container"));
    }

    #[test]
    fn lookup_accepts_empty_value() {
        let tag = StructTag::new(r#"container:"""#);

        assert_eq!(Some(String::new()), tag.lookup("container"));
    }

    #[test]
    fn lookup_stops_at_malformed_pairs() {
        assert_eq!(None, StructTag::new("container").lookup("container"));
        assert_eq!(None, StructTag::new("container:x").lookup("container"));
        assert_eq!(None, StructTag::new(r#"container:"open"#).lookup("container"));
        assert_eq!(None, StructTag::new("").lookup("container"));
        assert_eq!(
            None,
            StructTag::new(r#"bad key:"x" container:"y""#).lookup("container")
        );
    }

    #[test]
    fn parse_reads_flags_and_resources() {
        let values = TagValues::parse("autowire:true;resource:x");

        assert_eq!(Some(true), values.get_bool("autowire"));
        assert_eq!(Some("x"), values.get("resource"));
        assert_eq!(None, values.get("missing"));
    }

    #[test]
    fn parse_treats_bare_key_as_true() {
        let values = TagValues::parse("autowire;");

        assert!(values.contains("autowire"));
        assert_eq!(Some(""), values.get("autowire"));
        assert_eq!(Some(true), values.get_bool("autowire"));
    }

    #[test]
    fn parse_ignores_entries_without_key() {
        let values = TagValues::parse(":;");

        assert!(values.is_empty());
        assert_eq!(None, values.get(""));
        assert_eq!(None, values.get_bool("autowire"));
    }

    #[test]
    fn parse_skips_empty_entries_and_trims_separators() {
        let values = TagValues::parse(";;resource:a:b;;autowire:false;");

        assert_eq!(Some("a:b"), values.get("resource"));
        assert_eq!(Some(false), values.get_bool("autowire"));
    }

    #[test]
    fn invalid_flag_counts_as_false() {
        let values = TagValues::parse("autowire:maybe");

        assert_eq!(Some(false), values.get_bool("autowire"));
        assert_eq!(Some(true), TagValues::parse("autowire:T").get_bool("autowire"));
        assert_eq!(Some(true), TagValues::parse("autowire:1").get_bool("autowire"));
    }
}
