/// How a matched prefix turns into a repository URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RepoRule {
    /// Every module below the prefix lives in `<base><first segment>`.
    Namespace { base: &'static str },
    /// Every module below the prefix lives in one repository.
    Fixed { url: &'static str },
}

/// Known vanity import paths, evaluated in order. The first match wins.
const REPO_RULES: &[(&str, RepoRule)] = &[
    (
        "golang.org/x/",
        RepoRule::Namespace {
            base: "https://github.com/golang/",
        },
    ),
    (
        "cloud.google.com/go",
        RepoRule::Fixed {
            url: "https://github.com/GoogleCloudPlatform/google-cloud-go",
        },
    ),
    (
        "google.golang.org/api",
        RepoRule::Fixed {
            url: "https://github.com/googleapis/google-api-go-client",
        },
    ),
    (
        "google.golang.org/appengine",
        RepoRule::Fixed {
            url: "https://github.com/golang/appengine",
        },
    ),
];

/// Maps a module path to a browsable source repository URL.
pub fn resolve_url(path: &str) -> String {
    for (prefix, rule) in REPO_RULES {
        let Some(rest) = path.strip_prefix(prefix) else {
            continue;
        };

        return match rule {
            RepoRule::Namespace { base } => {
                let repo = rest.split('/').next().unwrap_or_default();
                format!("{base}{repo}")
            }
            RepoRule::Fixed { url } => (*url).to_string(),
        };
    }

    format!("https://{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golang_x_maps_to_golang_org() {
        assert_eq!(
            resolve_url("golang.org/x/crypto"),
            "https://github.com/golang/crypto"
        );
    }

    #[test]
    fn golang_x_submodule_maps_to_its_repository() {
        assert_eq!(
            resolve_url("golang.org/x/tools/gopls"),
            "https://github.com/golang/tools"
        );
    }

    #[test]
    fn fixed_google_rules() {
        assert_eq!(
            resolve_url("cloud.google.com/go"),
            "https://github.com/GoogleCloudPlatform/google-cloud-go"
        );
        assert_eq!(
            resolve_url("cloud.google.com/go/storage"),
            "https://github.com/GoogleCloudPlatform/google-cloud-go"
        );
        assert_eq!(
            resolve_url("google.golang.org/api"),
            "https://github.com/googleapis/google-api-go-client"
        );
        assert_eq!(
            resolve_url("google.golang.org/appengine"),
            "https://github.com/golang/appengine"
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_https() {
        assert_eq!(
            resolve_url("github.com/go-pg/pg"),
            "https://github.com/go-pg/pg"
        );
        assert_eq!(resolve_url("gopkg.in/yaml.v2"), "https://gopkg.in/yaml.v2");
    }

    #[test]
    fn paths_shorter_than_prefixes_do_not_panic() {
        assert_eq!(resolve_url(""), "https://");
        assert_eq!(resolve_url("golang.org/x"), "https://golang.org/x");
        assert_eq!(resolve_url("cloud"), "https://cloud");
    }
}
