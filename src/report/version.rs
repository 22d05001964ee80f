/// Marker Go appends to major versions >= 2 of modules without a `go.mod`.
const INCOMPATIBLE_SUFFIX: &str = "+incompatible";

/// Prefix shared by pseudo-versions of modules that have no tagged release.
const PSEUDO_VERSION_PREFIX: &str = "v0.0.0-";

/// Produces the tag shown in pull request bodies for a module version.
///
/// - `v6.14.0+incompatible` becomes `v6.14.0`
/// - `v0.0.0-20181015235635-01aeca54ebda` becomes `20181015235635`
/// - anything else is returned as is
pub fn normalize(version: &str) -> String {
    let mut tag = version;
    while let Some(stripped) = tag.strip_suffix(INCOMPATIBLE_SUFFIX) {
        tag = stripped;
    }

    match pseudo_version_timestamp(tag) {
        Some(timestamp) => timestamp.to_string(),
        None => tag.to_string(),
    }
}

/// Returns the timestamp segment of `v0.0.0-yyyymmddhhmmss-abcdefabcdef`.
fn pseudo_version_timestamp(version: &str) -> Option<&str> {
    let rest = version.strip_prefix(PSEUDO_VERSION_PREFIX)?;
    let (timestamp, hash) = rest.split_once('-')?;

    let timestamp_ok = !timestamp.is_empty() && timestamp.bytes().all(|b| b.is_ascii_digit());
    let hash_ok = !hash.is_empty() && hash.bytes().all(|b| b.is_ascii_alphanumeric());

    if timestamp_ok && hash_ok {
        Some(timestamp)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_incompatible_suffix() {
        assert_eq!(normalize("v6.14.0+incompatible"), "v6.14.0");
    }

    #[test]
    fn pseudo_version_becomes_timestamp() {
        assert_eq!(
            normalize("v0.0.0-20181015235635-01aeca54ebda"),
            "20181015235635"
        );
    }

    #[test]
    fn pseudo_version_with_incompatible_suffix() {
        assert_eq!(
            normalize("v0.0.0-20181015235635-01aeca54ebda+incompatible"),
            "20181015235635"
        );
    }

    #[test]
    fn regular_versions_pass_through() {
        assert_eq!(normalize("v0.31.0"), "v0.31.0");
        assert_eq!(normalize("v1.2.3-rc.1"), "v1.2.3-rc.1");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn malformed_pseudo_versions_pass_through() {
        assert_eq!(normalize("v0.0.0-"), "v0.0.0-");
        assert_eq!(normalize("v0.0.0-2018"), "v0.0.0-2018");
        assert_eq!(normalize("v0.0.0-2018-"), "v0.0.0-2018-");
        assert_eq!(normalize("v0.0.0-2018-abc-def"), "v0.0.0-2018-abc-def");
        assert_eq!(normalize("v0.0.0-abc-def"), "v0.0.0-abc-def");
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            "v6.14.0+incompatible",
            "v1.0.0+incompatible+incompatible",
            "v0.0.0-20181015235635-01aeca54ebda",
            "v0.0.0-20181015235635-01aeca54ebda+incompatible",
            "v0.0.0-2018+incompatible-abc",
            "v0.0.0-v0.0.0-1-a",
            "+incompatible",
            "v2.0.0",
            "",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
