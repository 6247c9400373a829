//! Shared model fixtures for the codec integration tests.

#![allow(dead_code)]

use starr_field_codec::{AccessorTableBuilder, FieldMap, IndexSet, Model};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn int_set<const N: usize>(items: [i64; N]) -> IndexSet<i64> {
    items.into_iter().collect()
}

pub fn str_set<const N: usize>(items: [&str; N]) -> IndexSet<String> {
    items.into_iter().map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Minimal variant: one member per scalar kind plus an int list.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sample {
    pub enable: Option<bool>,
    pub priority: Option<i64>,
    pub host: Option<String>,
    pub categories: Option<IndexSet<i64>>,
    /// Not declared in any field map.
    pub comment: Option<String>,
}

impl Model for Sample {
    fn describe(members: AccessorTableBuilder<Self>) -> AccessorTableBuilder<Self> {
        members
            .bool("Enable", |m| m.enable, |m, v| m.enable = Some(v))
            .int("Priority", |m| m.priority, |m, v| m.priority = Some(v))
            .string("Host", |m| m.host.clone(), |m, v| m.host = Some(v))
            .int_set(
                "Categories",
                |m| m.categories.clone(),
                |m, v| m.categories = Some(v),
            )
            .string("Comment", |m| m.comment.clone(), |m, v| m.comment = Some(v))
    }
}

pub fn sample_map() -> FieldMap {
    FieldMap::builder()
        .label("sample")
        .bools(["Enable"])
        .ints(["Priority"])
        .strings(["Host"])
        .int_lists(["Categories"])
        .build()
        .expect("sample field map is valid")
}

// ---------------------------------------------------------------------------
// Download client variant covering all six kinds, an alias and a secret.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DownloadClient {
    pub add_paused: Option<bool>,
    pub use_ssl: Option<bool>,
    pub port: Option<i64>,
    pub recent_tv_priority: Option<i64>,
    pub seed_ratio: Option<f64>,
    pub host: Option<String>,
    pub url_base: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub tv_category: Option<String>,
    pub additional_tags: Option<IndexSet<i64>>,
    pub post_import_tags: Option<IndexSet<String>>,
}

impl Model for DownloadClient {
    fn describe(members: AccessorTableBuilder<Self>) -> AccessorTableBuilder<Self> {
        members
            .bool("addPaused", |m| m.add_paused, |m, v| m.add_paused = Some(v))
            .bool("useSsl", |m| m.use_ssl, |m, v| m.use_ssl = Some(v))
            .int("port", |m| m.port, |m, v| m.port = Some(v))
            .int(
                "recentTvPriority",
                |m| m.recent_tv_priority,
                |m, v| m.recent_tv_priority = Some(v),
            )
            .float("seedRatio", |m| m.seed_ratio, |m, v| m.seed_ratio = Some(v))
            .string("host", |m| m.host.clone(), |m, v| m.host = Some(v))
            .string("urlBase", |m| m.url_base.clone(), |m, v| m.url_base = Some(v))
            .string("username", |m| m.username.clone(), |m, v| m.username = Some(v))
            .string("password", |m| m.password.clone(), |m, v| m.password = Some(v))
            .string(
                "tvCategory",
                |m| m.tv_category.clone(),
                |m, v| m.tv_category = Some(v),
            )
            .int_set(
                "additionalTags",
                |m| m.additional_tags.clone(),
                |m, v| m.additional_tags = Some(v),
            )
            .string_set(
                "postImportTags",
                |m| m.post_import_tags.clone(),
                |m, v| m.post_import_tags = Some(v),
            )
    }
}

pub fn download_client_map() -> FieldMap {
    FieldMap::builder()
        .label("transmission")
        .bools(["addPaused", "useSsl"])
        .ints(["port", "recentTvPriority"])
        .floats(["seedCriteria.seedRatio"])
        .strings(["host", "urlBase", "username", "password", "tvCategory"])
        .int_lists(["additionalTags"])
        .string_lists(["postImportTags"])
        .alias("seedCriteria.seedRatio", "seedRatio")
        .sensitive(["password"])
        .build()
        .expect("download client field map is valid")
}

pub fn download_client() -> DownloadClient {
    DownloadClient {
        add_paused: Some(false),
        use_ssl: Some(true),
        port: Some(9091),
        recent_tv_priority: Some(1),
        seed_ratio: Some(1.5),
        host: Some("transmission".into()),
        url_base: Some("/transmission/".into()),
        username: Some("admin".into()),
        password: Some("hunter2".into()),
        tv_category: Some("tv".into()),
        additional_tags: Some(int_set([3, 1, 2])),
        post_import_tags: Some(str_set(["imported", "sonarr"])),
    }
}
