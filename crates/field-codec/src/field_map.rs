//! Per-variant declaration of wire names by primitive kind.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::{DeclarationError, FieldKind};

/// Which wire names a resource variant exposes, partitioned into the six
/// primitive buckets.
///
/// Built once per variant, with [`FieldMap::builder`] or by deserializing
/// configuration, and shared read-only afterwards. Construction rejects a
/// wire name declared in more than one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FieldMapConfig", into = "FieldMapConfig")]
pub struct FieldMap {
    label: Option<String>,
    buckets: [Vec<String>; 6],
    aliases: BTreeMap<String, String>,
    sensitive: BTreeSet<String>,
    kinds: HashMap<String, FieldKind>,
}

impl FieldMap {
    pub fn builder() -> FieldMapBuilder {
        FieldMapBuilder::default()
    }

    /// Variant name used in log events.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn bucket(&self, kind: FieldKind) -> &[String] {
        &self.buckets[bucket_index(kind)]
    }

    /// Every declared `(kind, wire name)` pair, buckets in [`FieldKind::ALL`]
    /// order and names in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (FieldKind, &str)> + '_ {
        FieldKind::ALL.into_iter().flat_map(move |kind| {
            self.bucket(kind)
                .iter()
                .map(move |name| (kind, name.as_str()))
        })
    }

    pub fn kind_of(&self, wire: &str) -> Option<FieldKind> {
        self.kinds.get(wire).copied()
    }

    pub fn contains(&self, wire: &str) -> bool {
        self.kinds.contains_key(wire)
    }

    /// Model member addressed by `wire`: its alias target, or the wire name
    /// itself.
    pub fn member_name<'a>(&'a self, wire: &'a str) -> &'a str {
        self.aliases.get(wire).map_or(wire, String::as_str)
    }

    pub fn is_sensitive(&self, wire: &str) -> bool {
        self.sensitive.contains(wire)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

fn bucket_index(kind: FieldKind) -> usize {
    match kind {
        FieldKind::Bool => 0,
        FieldKind::Int => 1,
        FieldKind::Float => 2,
        FieldKind::Str => 3,
        FieldKind::IntList => 4,
        FieldKind::StrList => 5,
    }
}

/// Builder for [`FieldMap`].
#[derive(Debug, Clone, Default)]
pub struct FieldMapBuilder {
    label: Option<String>,
    buckets: [Vec<String>; 6],
    aliases: BTreeMap<String, String>,
    sensitive: BTreeSet<String>,
}

impl FieldMapBuilder {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn bools<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(FieldKind::Bool, names)
    }

    pub fn ints<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(FieldKind::Int, names)
    }

    pub fn floats<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(FieldKind::Float, names)
    }

    pub fn strings<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(FieldKind::Str, names)
    }

    pub fn int_lists<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(FieldKind::IntList, names)
    }

    pub fn string_lists<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(FieldKind::StrList, names)
    }

    /// Binds wire name `wire` to model member `member`.
    pub fn alias(mut self, wire: impl Into<String>, member: impl Into<String>) -> Self {
        self.aliases.insert(wire.into(), member.into());
        self
    }

    /// Marks string fields whose server-side value is redacted.
    pub fn sensitive<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sensitive.extend(names.into_iter().map(Into::into));
        self
    }

    fn extend<I, S>(mut self, kind: FieldKind, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.buckets[bucket_index(kind)].extend(names.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<FieldMap, DeclarationError> {
        let mut kinds = HashMap::new();
        for kind in FieldKind::ALL {
            for name in &self.buckets[bucket_index(kind)] {
                if kinds.insert(name.clone(), kind).is_some() {
                    return Err(DeclarationError::DuplicateWireName(name.clone()));
                }
            }
        }
        if let Some(wire) = self.aliases.keys().find(|wire| !kinds.contains_key(*wire)) {
            return Err(DeclarationError::UnknownAlias(wire.clone()));
        }
        for name in &self.sensitive {
            match kinds.get(name) {
                None => return Err(DeclarationError::UnknownSensitive(name.clone())),
                Some(FieldKind::Str) => {}
                Some(&kind) => {
                    return Err(DeclarationError::SensitiveNotString {
                        name: name.clone(),
                        kind,
                    })
                }
            }
        }
        Ok(FieldMap {
            label: self.label,
            buckets: self.buckets,
            aliases: self.aliases,
            sensitive: self.sensitive,
            kinds,
        })
    }
}

/// Configuration form of a [`FieldMap`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FieldMapConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    bools: Vec<String>,
    ints: Vec<String>,
    floats: Vec<String>,
    strings: Vec<String>,
    int_lists: Vec<String>,
    string_lists: Vec<String>,
    aliases: BTreeMap<String, String>,
    sensitive: BTreeSet<String>,
}

impl TryFrom<FieldMapConfig> for FieldMap {
    type Error = DeclarationError;

    fn try_from(config: FieldMapConfig) -> Result<Self, Self::Error> {
        let mut builder = FieldMap::builder()
            .bools(config.bools)
            .ints(config.ints)
            .floats(config.floats)
            .strings(config.strings)
            .int_lists(config.int_lists)
            .string_lists(config.string_lists)
            .sensitive(config.sensitive);
        builder.label = config.label;
        builder.aliases = config.aliases;
        builder.build()
    }
}

impl From<FieldMap> for FieldMapConfig {
    fn from(map: FieldMap) -> Self {
        let [bools, ints, floats, strings, int_lists, string_lists] = map.buckets;
        Self {
            label: map.label,
            bools,
            ints,
            floats,
            strings,
            int_lists,
            string_lists,
            aliases: map.aliases,
            sensitive: map.sensitive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_follow_bucket_then_declaration_order() {
        let map = FieldMap::builder()
            .string_lists(["tags"])
            .strings(["host", "urlBase"])
            .bools(["enable"])
            .ints(["priority"])
            .build()
            .unwrap();
        let entries: Vec<_> = map.entries().collect();
        assert_eq!(
            entries,
            [
                (FieldKind::Bool, "enable"),
                (FieldKind::Int, "priority"),
                (FieldKind::Str, "host"),
                (FieldKind::Str, "urlBase"),
                (FieldKind::StrList, "tags"),
            ]
        );
        assert_eq!(map.len(), 5);
    }

    #[test]
    fn duplicate_across_buckets_rejected() {
        let err = FieldMap::builder()
            .ints(["port"])
            .strings(["port"])
            .build()
            .unwrap_err();
        assert_eq!(err, DeclarationError::DuplicateWireName("port".into()));
    }

    #[test]
    fn duplicate_within_bucket_rejected() {
        let err = FieldMap::builder().bools(["a", "a"]).build().unwrap_err();
        assert_eq!(err, DeclarationError::DuplicateWireName("a".into()));
    }

    #[test]
    fn alias_must_name_declared_field() {
        let err = FieldMap::builder()
            .floats(["seedCriteria.seedRatio"])
            .alias("seedRatio", "seed_ratio")
            .build()
            .unwrap_err();
        assert_eq!(err, DeclarationError::UnknownAlias("seedRatio".into()));
    }

    #[test]
    fn member_name_resolves_alias() {
        let map = FieldMap::builder()
            .floats(["seedCriteria.seedRatio"])
            .strings(["host"])
            .alias("seedCriteria.seedRatio", "seedRatio")
            .build()
            .unwrap();
        assert_eq!(map.member_name("seedCriteria.seedRatio"), "seedRatio");
        assert_eq!(map.member_name("host"), "host");
    }

    #[test]
    fn sensitive_must_be_declared_string() {
        let err = FieldMap::builder()
            .sensitive(["apiKey"])
            .build()
            .unwrap_err();
        assert_eq!(err, DeclarationError::UnknownSensitive("apiKey".into()));

        let err = FieldMap::builder()
            .ints(["apiKey"])
            .sensitive(["apiKey"])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DeclarationError::SensitiveNotString {
                name: "apiKey".into(),
                kind: FieldKind::Int,
            }
        );
    }

    #[test]
    fn deserialize_validates() {
        let err = serde_json::from_str::<FieldMap>(r#"{"bools": ["a"], "ints": ["a"]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("declared more than once"));
    }

    #[test]
    fn deserialize_rejects_unknown_bucket() {
        assert!(serde_json::from_str::<FieldMap>(r#"{"int_slices": ["a"]}"#).is_err());
    }

    #[test]
    fn serialize_then_deserialize_is_identity() {
        let map = FieldMap::builder()
            .label("nzbget")
            .strings(["host", "password"])
            .ints(["port"])
            .sensitive(["password"])
            .build()
            .unwrap();
        let text = serde_json::to_string(&map).unwrap();
        let back: FieldMap = serde_json::from_str(&text).unwrap();
        assert_eq!(back, map);
    }
}
